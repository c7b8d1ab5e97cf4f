//! Math utilities module
//!
//! Angle wrapping helpers and the world frame shared by the creature root and its segments.

pub mod angle;
mod frame;

pub use angle::{angle_difference, bearing, direction, wrap_angle, wrap_near};
pub use frame::Frame;

// Re-export commonly used glam types
pub use glam::Vec2;
