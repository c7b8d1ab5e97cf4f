//! Stance/swing stepping for walking limbs.

use crate::math::{bearing, wrap_angle};
use crate::rig::{Parent, SegmentId, Skeleton};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Foot drift from its planted goal that starts a new step.
pub const STEP_TRIGGER: f32 = 1.0;
/// A swing ends once the foot's forward travel per tick drops below this.
pub const SWING_SETTLE: f32 = 1.0;
const REACH_FACTOR: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    /// Foot planted on its goal, bearing weight.
    Stance,
    /// Foot travelling to a new goal.
    Swing,
}

#[derive(Debug, Clone)]
pub struct Gait {
    phase: StepPhase,
    goal: Vec2,
    reach: f32,
    swing: f32,
    swing_offset: f32,
    forwardness: f32,
}

impl Gait {
    /// Captures the limb's resting geometry relative to the body heading.
    pub fn new(skeleton: &Skeleton, end: SegmentId, hip: Parent, heading: f32) -> Self {
        let hip = skeleton.parent_frame(hip);
        let foot = skeleton.segment(end).position();

        let limb_angle = bearing(hip.position, foot).unwrap_or(hip.angle);
        let rel = wrap_angle(heading - limb_angle);
        let side = if rel < 0.0 { 1.0 } else { -1.0 };

        Self {
            phase: StepPhase::Stance,
            goal: foot,
            reach: REACH_FACTOR * hip.position.distance(foot),
            swing: -rel + side * FRAC_PI_2,
            swing_offset: heading - hip.angle,
            forwardness: 0.0,
        }
    }

    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    pub fn goal(&self) -> Vec2 {
        self.goal
    }

    pub fn reach(&self) -> f32 {
        self.reach
    }

    pub fn is_planted(&self) -> bool {
        self.phase == StepPhase::Stance
    }

    /// Phase transition after the limb has been dragged this tick.
    pub fn advance(&mut self, skeleton: &Skeleton, end: SegmentId, hip: Parent) {
        let hip = skeleton.parent_frame(hip);
        let foot = skeleton.segment(end).position();

        match self.phase {
            StepPhase::Stance => {
                if foot.distance(self.goal) > STEP_TRIGGER {
                    self.phase = StepPhase::Swing;
                    self.goal = hip.reach(self.swing + hip.angle + self.swing_offset, self.reach);
                    log::trace!("step: swing toward ({:.1}, {:.1})", self.goal.x, self.goal.y);
                }
            }
            StepPhase::Swing => {
                let offset = foot - hip.position;
                let theta = offset.y.atan2(offset.x) - hip.angle;
                let forwardness = offset.length() * theta.cos();
                let change = self.forwardness - forwardness;
                self.forwardness = forwardness;

                if change * change < SWING_SETTLE {
                    self.phase = StepPhase::Stance;
                    self.goal = foot;
                    log::trace!("step: planted at ({:.1}, {:.1})", foot.x, foot.y);
                }
            }
        }
    }
}
