//! Limb inverse kinematics
//!
//! A limb is a short run of skeleton segments ending at an effector. Each tick
//! the effector is dragged toward a target by a single backward sweep, reusing
//! the skeleton's elastic relaxation so limbs stay consistent with the body.

pub mod gait;
pub mod limb;
pub mod solver;

pub use gait::{Gait, StepPhase};
pub use limb::LimbSystem;
pub use solver::{DragResult, DragSolver};
