use glam::Vec2;
use std::f32::consts::PI;

use super::params::Locomotion;
use crate::error::{KinematicsError, Result};
use crate::ik::LimbSystem;
use crate::input::TargetSource;
use crate::math::{angle_difference, bearing, direction, wrap_angle, Frame};
use crate::rig::{Parent, SegmentId, SegmentParams, Skeleton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced,
    /// The input was unusable; no state changed.
    Skipped,
}

/// Root driver: a steerable head dragging a skeleton and its limbs.
///
/// Body chains trail behind the head, so the skeleton's anchor always faces
/// backwards (`heading + π`). A segment added to the anchor with angle `0`
/// therefore hangs straight behind the head.
#[derive(Debug, Clone)]
pub struct Creature {
    position: Vec2,
    heading: f32,
    forward_speed: f32,
    speed: f32,
    turn_speed: f32,
    locomotion: Locomotion,
    skeleton: Skeleton,
    limbs: Vec<LimbSystem>,
}

impl Creature {
    pub fn new(position: Vec2, heading: f32, locomotion: Locomotion) -> Result<Self> {
        if !(position.is_finite() && heading.is_finite()) {
            return Err(KinematicsError::InvalidPlacement);
        }
        locomotion.validate()?;

        let heading = wrap_angle(heading);
        Ok(Self {
            position,
            heading,
            forward_speed: 0.0,
            speed: 0.0,
            turn_speed: 0.0,
            locomotion,
            skeleton: Skeleton::new(Self::tail_frame(position, heading)),
            limbs: Vec::new(),
        })
    }

    pub fn add_segment(&mut self, parent: Parent, params: SegmentParams) -> Result<SegmentId> {
        self.skeleton.add_segment(parent, params)
    }

    /// Appends `count` identical segments, returned base first.
    pub fn add_chain(
        &mut self,
        parent: Parent,
        count: usize,
        params: SegmentParams,
    ) -> Result<Vec<SegmentId>> {
        self.skeleton.add_chain(parent, count, params)
    }

    /// Registers a limb that chases the creature's target. Returns its index.
    pub fn add_limb(&mut self, end: SegmentId, length: usize, speed: f32) -> Result<usize> {
        let limb = LimbSystem::new(&self.skeleton, end, length, speed)?;
        self.limbs.push(limb);
        Ok(self.limbs.len() - 1)
    }

    /// Registers a stepping limb whose stance phase gates forward thrust. Returns its index.
    pub fn add_leg(&mut self, end: SegmentId, length: usize, speed: f32) -> Result<usize> {
        let limb = LimbSystem::leg(&self.skeleton, end, length, speed, self.heading)?;
        self.limbs.push(limb);
        Ok(self.limbs.len() - 1)
    }

    /// Polls `source` once and advances one tick toward it.
    pub fn tick<S: TargetSource + ?Sized>(&mut self, source: &mut S) -> TickOutcome {
        let target = source.target();
        self.follow(target)
    }

    /// Advances one tick: steer and move the head toward `target`, then let the
    /// body trail and the limbs reach.
    ///
    /// A target too far away to measure in `f32` skips the tick.
    pub fn follow(&mut self, target: Vec2) -> TickOutcome {
        if !target.is_finite() {
            if cfg!(debug_assertions) {
                panic!("non-finite target {target:?}");
            }
            log::warn!("skipping tick: non-finite target {:?}", target);
            return TickOutcome::Skipped;
        }

        let distance = self.position.distance(target);
        if !distance.is_finite() {
            log::warn!("skipping tick: target {:?} is out of range", target);
            return TickOutcome::Skipped;
        }
        let bearing = bearing(self.position, target).unwrap_or(self.heading);
        let far = distance > self.locomotion.forward.threshold;

        self.integrate_forward(far);
        self.integrate_turn(bearing, far);

        self.heading = wrap_angle(self.heading + self.turn_speed);
        self.position += direction(self.heading) * self.speed;

        log::trace!(
            "head at ({:.2}, {:.2}) heading {:.3} speed {:.3} turn {:.4}",
            self.position.x,
            self.position.y,
            self.heading,
            self.speed,
            self.turn_speed
        );

        self.skeleton.set_anchor(Self::tail_frame(self.position, self.heading));
        self.skeleton.follow_roots();
        for limb in &mut self.limbs {
            limb.update(&mut self.skeleton, target);
        }

        debug_assert!(
            self.head().is_finite()
                && self.skeleton.segments().iter().all(|s| s.frame().is_finite()),
            "pose went non-finite"
        );
        TickOutcome::Advanced
    }

    /// Share of limbs currently bearing weight; `1.0` with no limbs.
    pub fn stance_fraction(&self) -> f32 {
        if self.limbs.is_empty() {
            return 1.0;
        }
        let planted = self.limbs.iter().filter(|l| l.is_weight_bearing()).count();
        planted as f32 / self.limbs.len() as f32
    }

    fn integrate_forward(&mut self, far: bool) {
        let forward = self.locomotion.forward;
        if far {
            self.forward_speed += forward.accel * self.stance_fraction();
        }
        self.forward_speed *= 1.0 - forward.resistance;
        self.speed = (self.forward_speed - forward.friction).max(0.0);
    }

    fn integrate_turn(&mut self, bearing: f32, far: bool) {
        let turn = self.locomotion.turn;
        let error = angle_difference(self.heading, bearing);
        if error.abs() > turn.threshold && far {
            self.turn_speed -= turn.accel * error.signum();
        }
        self.turn_speed *= 1.0 - turn.resistance;
        if self.turn_speed.abs() > turn.friction {
            self.turn_speed -= turn.friction * self.turn_speed.signum();
        } else {
            self.turn_speed = 0.0;
        }
    }

    fn tail_frame(position: Vec2, heading: f32) -> Frame {
        Frame::new(position, heading).rotated(PI)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Head frame facing forward.
    pub fn head(&self) -> Frame {
        Frame::new(self.position, self.heading)
    }

    /// Accumulated forward speed before friction.
    pub fn forward_speed(&self) -> f32 {
        self.forward_speed
    }

    /// Distance the head moved on the last tick.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn turn_speed(&self) -> f32 {
        self.turn_speed
    }

    pub fn locomotion(&self) -> &Locomotion {
        &self.locomotion
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn limbs(&self) -> &[LimbSystem] {
        &self.limbs
    }
}
