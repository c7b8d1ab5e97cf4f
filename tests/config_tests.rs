use critter_ik::pose::FLAT_STRIDE;
use critter_ik::{CreatureConfig, KinematicsError, Locomotion, Parent, StepPhase};
use glam::Vec2;

const LIZARD: &str = r#"
(
    heading: 0.5,
    spine: (count: 8, segment: (size: 6.0, angle: 0.0, range: 1.0, stiffness: 2.0)),
    limbs: [
        (attach: 1, segments: [
            (size: 7.0, angle: 1.5, range: 1.2, stiffness: 1.5),
            (size: 7.0, angle: -0.7, range: 1.2, stiffness: 1.5),
        ], speed: 2.0, gait: true),
        (attach: 1, segments: [
            (size: 7.0, angle: -1.5, range: 1.2, stiffness: 1.5),
            (size: 7.0, angle: 0.7, range: 1.2, stiffness: 1.5),
        ], speed: 2.0, gait: true),
        (attach: 7, segments: [(size: 4.0, angle: 0.0, range: 0.5, stiffness: 1.0)], length: 3, speed: 1.0),
    ],
)
"#;

#[test]
fn snake_preset_builds_a_single_long_chain() {
    let critter = CreatureConfig::snake(Vec2::new(320.0, 240.0)).build().unwrap();

    assert_eq!(critter.skeleton().len(), 50);
    assert_eq!(critter.skeleton().roots().len(), 1);
    assert!(critter.limbs().is_empty());
    assert_eq!(critter.position(), Vec2::new(320.0, 240.0));

    let tail = critter.skeleton().segments().last().unwrap();
    assert!((tail.position().x - (320.0 - 600.0)).abs() < 1e-2);
}

#[test]
fn ron_config_builds_legs_and_limbs() {
    let config = CreatureConfig::from_ron_str(LIZARD).unwrap();
    assert_eq!(config.position, Vec2::ZERO);
    assert_eq!(config.locomotion, Locomotion::default());

    let critter = config.build().unwrap();
    assert_eq!(critter.skeleton().len(), 8 + 2 + 2 + 1);
    assert_eq!(critter.limbs().len(), 3);

    let legs: Vec<_> = critter.limbs().iter().filter(|l| l.gait().is_some()).collect();
    assert_eq!(legs.len(), 2);
    for leg in legs {
        assert_eq!(leg.length(), 2);
        assert_eq!(leg.gait().unwrap().phase(), StepPhase::Stance);
        assert!(matches!(leg.hip(), Parent::Segment(_)));
    }

    // tail limb of length 3: tail fin plus the last two spine segments
    let tail = &critter.limbs()[2];
    assert_eq!(tail.length(), 3);
    assert!(tail.gait().is_none());
}

#[test]
fn configured_creature_runs() {
    let mut critter = CreatureConfig::from_ron_str(LIZARD).unwrap().build().unwrap();
    for i in 0..120 {
        let t = i as f32 * 0.05;
        critter.follow(Vec2::new(200.0 * t.cos(), 150.0 * t.sin()));
    }
    let pose = critter.pose();
    assert!(pose.head.is_finite());
    assert!(pose.bones.iter().all(|b| b.start.is_finite() && b.end.is_finite()));
}

#[test]
fn limb_attached_past_the_spine_is_rejected() {
    let mut config = CreatureConfig::from_ron_str(LIZARD).unwrap();
    config.limbs[0].attach = 8;
    assert!(matches!(
        config.build(),
        Err(KinematicsError::UnknownSegment { index: 8, count: 8 })
    ));

    let mut config = CreatureConfig::from_ron_str(LIZARD).unwrap();
    config.limbs[1].segments.clear();
    assert!(matches!(config.build(), Err(KinematicsError::EmptyLimb)));

    let mut config = CreatureConfig::from_ron_str(LIZARD).unwrap();
    config.limbs[2].length = Some(0);
    assert!(matches!(config.build(), Err(KinematicsError::EmptyLimb)));
}

#[test]
fn malformed_ron_is_a_config_error() {
    let err = CreatureConfig::from_ron_str("(spine: (count: -3))").unwrap_err();
    assert!(matches!(err, KinematicsError::Config(_)));
}

#[test]
fn snake_survives_a_ron_round_trip() {
    let snake = CreatureConfig::snake(Vec2::new(10.0, 20.0));
    let text = snake.to_ron_string().unwrap();
    assert_eq!(CreatureConfig::from_ron_str(&text).unwrap(), snake);
}

#[test]
fn limb_length_is_written_bare() {
    let config = CreatureConfig::from_ron_str(LIZARD).unwrap();
    assert_eq!(config.limbs[2].length, Some(3));
    assert_eq!(config.limbs[0].length, None);

    let text = config.to_ron_string().unwrap();
    assert!(text.contains("length: 3"), "{text}");
    assert_eq!(CreatureConfig::from_ron_str(&text).unwrap(), config);

    // explicit `Some` still parses
    let explicit = LIZARD.replace("length: 3", "length: Some(3)");
    assert_eq!(CreatureConfig::from_ron_str(&explicit).unwrap(), config);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = CreatureConfig::load("does/not/exist.ron").unwrap_err();
    assert!(matches!(err, KinematicsError::Io(_)));
}

#[test]
fn pose_exposes_every_bone() {
    let mut critter = CreatureConfig::snake(Vec2::ZERO).build().unwrap();
    critter.follow(Vec2::new(300.0, 0.0));

    let pose = critter.pose();
    assert_eq!(pose.head, critter.head());
    assert_eq!(pose.bones.len(), 50);
    assert_eq!(pose.bones[0].start, critter.position());
    for pair in pose.bones.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }

    let flat = pose.to_flat();
    assert_eq!(flat.len(), 50 * FLAT_STRIDE);
    assert_eq!(flat[2], pose.bones[0].end.x);
    assert_eq!(flat[FLAT_STRIDE * 49 + 4], 12.0);
}
