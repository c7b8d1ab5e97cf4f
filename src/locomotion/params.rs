use serde::{Deserialize, Serialize};

use crate::error::{KinematicsError, Result};

/// Damped speed model for one axis (forward or turning).
///
/// Values are per tick: speeds are in units per tick, `accel` is added once per
/// tick, `resistance` is the fraction of speed lost per tick and `friction` is
/// subtracted from the speed magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub accel: f32,
    pub friction: f32,
    pub resistance: f32,
    /// Forward: no thrust within this distance of the target.
    /// Turning: no steering while the heading error is within this angle.
    pub threshold: f32,
}

impl Motion {
    pub fn new(accel: f32, friction: f32, resistance: f32, threshold: f32) -> Self {
        Self {
            accel,
            friction,
            resistance,
            threshold,
        }
    }

    pub fn validate(&self, axis: &str) -> Result<()> {
        let fields = [
            ("accel", self.accel),
            ("friction", self.friction),
            ("threshold", self.threshold),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(axis, name, value));
            }
        }
        if !(0.0..=1.0).contains(&self.resistance) {
            return Err(invalid(axis, "resistance", self.resistance));
        }
        Ok(())
    }
}

fn invalid(axis: &str, name: &str, value: f32) -> KinematicsError {
    KinematicsError::InvalidLocomotion {
        field: format!("{axis}.{name}"),
        value,
    }
}

/// Tuning for the creature root.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Locomotion {
    pub forward: Motion,
    pub turn: Motion,
}

impl Locomotion {
    pub fn new(forward: Motion, turn: Motion) -> Self {
        Self { forward, turn }
    }

    pub fn with_forward(mut self, forward: Motion) -> Self {
        self.forward = forward;
        self
    }

    pub fn with_turn(mut self, turn: Motion) -> Self {
        self.turn = turn;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.forward.validate("forward")?;
        self.turn.validate("turn")
    }
}

impl Default for Locomotion {
    /// Tuned for a ~30 Hz tick.
    fn default() -> Self {
        Self {
            forward: Motion::new(4.0, 1.0, 0.5, 16.0),
            turn: Motion::new(0.5, 0.085, 0.5, 0.3),
        }
    }
}
