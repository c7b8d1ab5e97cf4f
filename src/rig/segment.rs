use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::constraint::Elastic;
use crate::error::{KinematicsError, Result};
use crate::math::{bearing, wrap_near, Frame};

/// Stable handle to a segment inside its [`Skeleton`](super::Skeleton).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub(crate) usize);

impl SegmentId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a segment hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    /// The skeleton's anchor frame, i.e. the creature root.
    Anchor,
    Segment(SegmentId),
}

impl From<SegmentId> for Parent {
    fn from(id: SegmentId) -> Self {
        Parent::Segment(id)
    }
}

/// Construction parameters for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentParams {
    /// Link length.
    pub size: f32,
    /// Rest angle relative to the parent.
    pub angle: f32,
    /// Total width of the allowed angular window around `angle`.
    pub range: f32,
    /// Divisor applied to the angular deviation on each relaxation.
    pub stiffness: f32,
}

impl SegmentParams {
    pub fn new(size: f32, angle: f32, range: f32, stiffness: f32) -> Self {
        Self {
            size,
            angle,
            range,
            stiffness,
        }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(KinematicsError::InvalidSize(self.size));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(KinematicsError::InvalidStiffness(self.stiffness));
        }
        if self.range.is_nan() || self.range < 0.0 {
            return Err(KinematicsError::InvalidRange(self.range));
        }
        if !self.angle.is_finite() {
            return Err(KinematicsError::InvalidAngle(self.angle));
        }
        Ok(())
    }
}

/// One rigid link of the body.
///
/// `abs_angle` and `position` are derived from the parent frame each time the
/// segment is placed: `abs = parent.angle + rel`, `position = parent + size * dir(abs)`.
#[derive(Debug, Clone)]
pub struct Segment {
    pub(crate) parent: Parent,
    pub(crate) children: Vec<SegmentId>,
    size: f32,
    rel_angle: f32,
    def_angle: f32,
    abs_angle: f32,
    limit: Elastic,
    position: Vec2,
}

impl Segment {
    pub(crate) fn new(parent: Parent, parent_frame: Frame, params: SegmentParams) -> Self {
        let mut segment = Self {
            parent,
            children: Vec::new(),
            size: params.size,
            rel_angle: params.angle,
            def_angle: params.angle,
            abs_angle: parent_frame.angle + params.angle,
            limit: Elastic::new(params.range, params.stiffness),
            position: parent_frame.position,
        };
        segment.relax(parent_frame, true);
        segment
    }

    /// Re-winds the relative angle next to the rest angle, optionally pulls it
    /// back elastically, then re-derives the world frame from `parent`.
    pub(crate) fn relax(&mut self, parent: Frame, flex: bool) {
        self.rel_angle = wrap_near(self.rel_angle, self.def_angle);
        if flex {
            self.rel_angle = self.limit.apply(self.rel_angle, self.def_angle);
        }
        self.place(parent);
    }

    pub(crate) fn place(&mut self, parent: Frame) {
        self.abs_angle = parent.angle + self.rel_angle;
        self.position = parent.reach(self.abs_angle, self.size);
    }

    /// Rope step: keep the current direction from the parent, snap back to
    /// `size` away and relax elastically. A segment sitting exactly on its
    /// parent keeps its previous absolute angle.
    pub(crate) fn trail(&mut self, parent: Frame) {
        if let Some(angle) = bearing(parent.position, self.position) {
            self.abs_angle = angle;
        }
        self.rel_angle = self.abs_angle - parent.angle;
        self.relax(parent, true);
    }

    /// Re-derives the angles from the current position without moving the segment.
    pub(crate) fn realign(&mut self, parent: Frame) {
        if let Some(angle) = bearing(parent.position, self.position) {
            self.abs_angle = angle;
        }
        self.rel_angle = self.abs_angle - parent.angle;
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn parent(&self) -> Parent {
        self.parent
    }

    pub fn children(&self) -> &[SegmentId] {
        &self.children
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.position, self.abs_angle)
    }

    pub fn abs_angle(&self) -> f32 {
        self.abs_angle
    }

    pub fn rel_angle(&self) -> f32 {
        self.rel_angle
    }

    pub fn default_angle(&self) -> f32 {
        self.def_angle
    }

    pub fn limit(&self) -> Elastic {
        self.limit
    }

    pub fn range(&self) -> f32 {
        self.limit.range
    }

    pub fn stiffness(&self) -> f32 {
        self.limit.stiffness
    }
}
