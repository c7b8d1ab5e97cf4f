//! Target input
//!
//! The creature pulls its target once per tick from a [`TargetSource`], so a
//! run is fully determined by the sequence of targets it was given.

use glam::Vec2;

use crate::math::direction;

pub trait TargetSource {
    fn target(&mut self) -> Vec2;
}

/// A fixed point.
impl TargetSource for Vec2 {
    fn target(&mut self) -> Vec2 {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Middle,
    Right,
}

/// Latest pointer snapshot written by the host's event handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub position: Vec2,
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl Pointer {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        match button {
            Button::Left => self.left = pressed,
            Button::Middle => self.middle = pressed,
            Button::Right => self.right = pressed,
        }
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Left => self.left,
            Button::Middle => self.middle,
            Button::Right => self.right,
        }
    }
}

impl TargetSource for Pointer {
    fn target(&mut self) -> Vec2 {
        self.position
    }
}

/// Scripted target circling a center point, advancing `step` radians per poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub center: Vec2,
    pub radius: f32,
    pub step: f32,
    phase: f32,
}

impl Orbit {
    pub fn new(center: Vec2, radius: f32, step: f32) -> Self {
        Self {
            center,
            radius,
            step,
            phase: 0.0,
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl TargetSource for Orbit {
    fn target(&mut self) -> Vec2 {
        let point = self.center + direction(self.phase) * self.radius;
        self.phase = (self.phase + self.step) % std::f32::consts::TAU;
        point
    }
}
