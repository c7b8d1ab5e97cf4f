use critter_ik::math::{direction, wrap_angle};
use critter_ik::{
    Creature, KinematicsError, Locomotion, Motion, Orbit, Parent, SegmentParams, TargetSource,
    TickOutcome,
};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const EPS: f32 = 1e-4;

fn tuning() -> Locomotion {
    Locomotion::new(
        Motion::new(4.0, 1.0, 0.5, 16.0),
        Motion::new(0.5, 0.085, 0.5, 0.3),
    )
}

fn bare() -> Creature {
    Creature::new(Vec2::ZERO, 0.0, tuning()).unwrap()
}

#[test]
fn single_tick_moves_straight_at_target() {
    let mut critter = bare();

    let outcome = critter.follow(Vec2::new(100.0, 0.0));

    assert_eq!(outcome, TickOutcome::Advanced);
    // (0 + 4) * (1 - 0.5) - 1
    assert!((critter.position().x - 1.0).abs() < EPS);
    assert!(critter.position().y.abs() < EPS);
    assert!(critter.heading().abs() < EPS);
    assert!((critter.forward_speed() - 2.0).abs() < EPS);
}

#[test]
fn no_thrust_inside_threshold() {
    let mut critter = bare();
    critter.follow(Vec2::new(10.0, 0.0));
    assert_eq!(critter.forward_speed(), 0.0);
    assert_eq!(critter.position(), Vec2::ZERO);

    for _ in 0..5 {
        critter.follow(Vec2::new(1000.0, 0.0));
    }
    for _ in 0..10 {
        let before = critter.forward_speed();
        let near = critter.position() + Vec2::new(5.0, 0.0);
        critter.follow(near);
        assert!(critter.forward_speed() <= before);
        assert!(critter.speed() >= 0.0);
    }
}

#[test]
fn turns_toward_target_side() {
    let mut critter = bare();
    critter.follow(Vec2::new(0.0, 100.0));

    // turn speed (0 + 0.5) * 0.5 - 0.085
    assert!((critter.turn_speed() - 0.165).abs() < EPS);
    assert!((critter.heading() - 0.165).abs() < EPS);

    let mut critter = bare();
    critter.follow(Vec2::new(0.0, -100.0));
    assert!(critter.heading() < 0.0);
}

#[test]
fn small_heading_error_is_ignored() {
    let mut critter = bare();
    critter.follow(direction(0.2) * 100.0);
    assert_eq!(critter.turn_speed(), 0.0);
    assert_eq!(critter.heading(), 0.0);
}

#[test]
fn heading_stays_wrapped_while_circling() {
    let mut critter = bare();
    let mut orbit = Orbit::new(Vec2::ZERO, 150.0, 0.05);
    for _ in 0..600 {
        critter.tick(&mut orbit);
        let h = critter.heading();
        assert!(h > -PI - EPS && h <= PI + EPS, "heading {h}");
        assert_eq!(wrap_angle(h), h);
    }
}

#[test]
fn tick_pulls_the_same_target_as_follow() {
    let mut a = bare();
    let mut b = bare();
    let mut fixed = Vec2::new(-80.0, 40.0);
    for _ in 0..20 {
        let target = fixed.target();
        a.follow(target);
        b.tick(&mut fixed);
    }
    assert_eq!(a.position(), b.position());
    assert_eq!(a.heading(), b.heading());
}

#[test]
fn body_trails_behind_the_head() {
    let mut critter = bare();
    critter
        .add_chain(Parent::Anchor, 20, SegmentParams::new(12.0, 0.0, FRAC_PI_2, 1.0))
        .unwrap();

    for i in 0..150 {
        let t = i as f32 * 0.03;
        critter.follow(Vec2::new(400.0 * t.cos(), 300.0 * t.sin()));

        let skeleton = critter.skeleton();
        let anchor = skeleton.anchor();
        assert!((anchor.position - critter.position()).length() < EPS);
        for segment in skeleton.segments() {
            let parent = skeleton.parent_frame(segment.parent());
            let link = parent.position.distance(segment.position());
            assert!((link - 12.0).abs() < 1e-3);
            assert!(segment.rel_angle().abs() <= FRAC_PI_4 + 1e-3);
        }

        let first = skeleton.segment(skeleton.roots()[0]);
        let behind = (first.position() - critter.position()).dot(direction(critter.heading()));
        assert!(behind < 0.0, "first segment is ahead of the head");
    }
}

#[test]
fn plain_limbs_do_not_gate_thrust() {
    let mut critter = bare();
    let spine = critter
        .add_chain(Parent::Anchor, 3, SegmentParams::new(10.0, 0.0, FRAC_PI_2, 1.0))
        .unwrap();
    let arm = critter
        .add_chain(spine[0].into(), 2, SegmentParams::new(6.0, FRAC_PI_2, 1.0, 2.0))
        .unwrap();
    critter.add_limb(arm[1], 2, 3.0).unwrap();
    assert_eq!(critter.stance_fraction(), 1.0);

    critter.follow(Vec2::new(100.0, 0.0));
    assert!((critter.position().x - 1.0).abs() < EPS);
}

#[test]
fn stepping_legs_scale_thrust_by_stance_share() {
    let mut critter = bare();
    let spine = critter
        .add_chain(Parent::Anchor, 4, SegmentParams::new(10.0, 0.0, 1.0, 2.0))
        .unwrap();
    for (hip, side) in [(spine[0], 1.0), (spine[0], -1.0), (spine[2], 1.0), (spine[2], -1.0)] {
        let thigh = critter
            .add_segment(hip.into(), SegmentParams::new(8.0, side * FRAC_PI_2, 1.5, 2.0))
            .unwrap();
        let shin = critter
            .add_segment(thigh.into(), SegmentParams::new(8.0, side * -0.8, 1.5, 2.0))
            .unwrap();
        critter.add_leg(shin, 2, 2.0).unwrap();
    }
    assert_eq!(critter.limbs().len(), 4);

    let resistance = critter.locomotion().forward.resistance;
    let accel = critter.locomotion().forward.accel;
    let mut saw_swing = false;
    for i in 0..200 {
        let t = i as f32 * 0.02;
        let target = Vec2::new(500.0 * t.cos(), 500.0 * t.sin());

        let share = critter.stance_fraction();
        let before = critter.forward_speed();
        let far = critter.position().distance(target) > critter.locomotion().forward.threshold;
        saw_swing |= share < 1.0;

        critter.follow(target);

        let thrust = if far { accel * share } else { 0.0 };
        let expected = (before + thrust) * (1.0 - resistance);
        assert!((critter.forward_speed() - expected).abs() < 1e-3);
        assert!((0.0..=1.0).contains(&share));
    }
    assert!(saw_swing, "legs never left stance");
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "non-finite target"))]
fn non_finite_target_skips_the_tick() {
    let mut critter = bare();
    critter.follow(Vec2::new(100.0, 0.0));
    let position = critter.position();

    let outcome = critter.follow(Vec2::new(f32::NAN, 0.0));

    assert_eq!(outcome, TickOutcome::Skipped);
    assert_eq!(critter.position(), position);
}

#[test]
fn target_out_of_f32_range_skips_the_tick() {
    let mut critter = bare();
    let spine = critter
        .add_chain(Parent::Anchor, 3, SegmentParams::new(10.0, 0.0, FRAC_PI_2, 1.0))
        .unwrap();
    critter.add_limb(spine[2], 2, 3.0).unwrap();
    critter.follow(Vec2::new(100.0, 0.0));
    let position = critter.position();
    let bones: Vec<Vec2> = critter.skeleton().segments().iter().map(|s| s.position()).collect();

    let outcome = critter.follow(Vec2::new(1e20, 0.0));

    assert_eq!(outcome, TickOutcome::Skipped);
    assert_eq!(critter.position(), position);
    let after: Vec<Vec2> = critter.skeleton().segments().iter().map(|s| s.position()).collect();
    assert_eq!(bones, after);
    for segment in critter.skeleton().segments() {
        assert!(segment.frame().is_finite());
    }
}

#[test]
fn target_on_the_head_keeps_heading_without_thrust() {
    let mut critter = Creature::new(Vec2::new(5.0, 5.0), 0.7, tuning()).unwrap();

    let outcome = critter.follow(Vec2::new(5.0, 5.0));

    assert_eq!(outcome, TickOutcome::Advanced);
    assert_eq!(critter.heading(), 0.7);
    assert_eq!(critter.turn_speed(), 0.0);
    assert_eq!(critter.forward_speed(), 0.0);
    assert_eq!(critter.position(), Vec2::new(5.0, 5.0));
}

#[test]
fn turn_friction_stops_rotation_without_reversing_it() {
    let mut critter = bare();
    for _ in 0..3 {
        critter.follow(Vec2::new(0.0, 100.0));
    }
    assert!(critter.turn_speed() > 0.0);

    // a target on the head gives no heading error, so rotation only decays
    let mut previous = critter.turn_speed();
    for _ in 0..10 {
        let here = critter.position();
        critter.follow(here);
        let turn = critter.turn_speed();
        assert!(turn >= 0.0, "turn speed flipped to {turn}");
        assert!(turn <= previous);
        previous = turn;
    }
    assert_eq!(critter.turn_speed(), 0.0);
}

#[test]
fn invalid_tuning_is_rejected() {
    let bad = tuning().with_forward(Motion::new(4.0, 1.0, 1.5, 16.0));
    let err = Creature::new(Vec2::ZERO, 0.0, bad).unwrap_err();
    match err {
        KinematicsError::InvalidLocomotion { field, .. } => assert_eq!(field, "forward.resistance"),
        other => panic!("unexpected error {other:?}"),
    }

    let bad = tuning().with_turn(Motion::new(-0.5, 0.085, 0.5, 0.3));
    assert!(Creature::new(Vec2::ZERO, 0.0, bad).is_err());

    assert!(matches!(
        Creature::new(Vec2::new(f32::INFINITY, 0.0), 0.0, tuning()),
        Err(KinematicsError::InvalidPlacement)
    ));
}
