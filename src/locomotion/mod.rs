//! Head locomotion
//!
//! The creature root steers toward a target with damped forward and turning
//! speeds, then drags its body chains and limbs along.

pub mod clock;
pub mod creature;
pub mod params;

pub use clock::FrameClock;
pub use creature::{Creature, TickOutcome};
pub use params::{Locomotion, Motion};
