//! Angle normalization.
//!
//! All wrapping maps into the half-open interval `(-π, π]` around a reference,
//! so `-π` and `π` both normalize to `π`.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Distances at or below this are treated as coincident points.
pub const DEGENERATE_DISTANCE: f32 = 1e-6;

/// Wraps `angle` into `(-π, π]`.
pub fn wrap_angle(angle: f32) -> f32 {
    wrap_near(angle, 0.0)
}

/// Shifts `angle` by a whole number of turns so that `angle - reference` lies in `(-π, π]`.
pub fn wrap_near(angle: f32, reference: f32) -> f32 {
    let turns = ((angle - reference) / TAU - 0.5).ceil();
    let wrapped = angle - TAU * turns;
    // rounding in the subtraction can land a hair below -π
    if wrapped - reference <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `to` to `from`, i.e. `wrap(from - to)`.
pub fn angle_difference(from: f32, to: f32) -> f32 {
    wrap_angle(from - to)
}

/// Angle of the vector `from -> to`, or `None` when the points coincide.
pub fn bearing(from: Vec2, to: Vec2) -> Option<f32> {
    let offset = to - from;
    if offset.length() <= DEGENERATE_DISTANCE {
        None
    } else {
        Some(offset.y.atan2(offset.x))
    }
}

/// Unit vector pointing along `angle`.
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
