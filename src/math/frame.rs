use glam::Vec2;

use super::angle::direction;

/// World-space position and absolute angle of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub position: Vec2,
    pub angle: f32,
}

impl Frame {
    pub fn new(position: Vec2, angle: f32) -> Self {
        Self { position, angle }
    }

    /// Point reached by walking `length` from this frame along `angle`.
    pub fn reach(&self, angle: f32, length: f32) -> Vec2 {
        self.position + direction(angle) * length
    }

    /// Same position, rotated by `delta`.
    pub fn rotated(&self, delta: f32) -> Self {
        Self {
            position: self.position,
            angle: self.angle + delta,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.angle.is_finite()
    }
}
