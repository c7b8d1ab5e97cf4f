//! Render-facing pose snapshot.
//!
//! Renderers read positions and angles from here and own no simulation state.

use glam::Vec2;

use crate::locomotion::Creature;
use crate::math::Frame;
use crate::rig::Skeleton;

/// Floats per bone in [`Pose::to_flat`]: start x, start y, end x, end y, size.
pub const FLAT_STRIDE: usize = 5;

/// One segment drawn as a capsule from its parent's position to its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bone {
    pub start: Vec2,
    pub end: Vec2,
    pub angle: f32,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub head: Frame,
    pub bones: Vec<Bone>,
}

impl Pose {
    pub fn capture(creature: &Creature) -> Self {
        Self {
            head: creature.head(),
            bones: creature.skeleton().bones().collect(),
        }
    }

    pub fn to_flat(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(self.bones.len() * FLAT_STRIDE);
        for bone in &self.bones {
            flat.extend_from_slice(&[
                bone.start.x,
                bone.start.y,
                bone.end.x,
                bone.end.y,
                bone.size,
            ]);
        }
        flat
    }
}

impl Skeleton {
    /// Bones in arena order, so parents come before their children.
    pub fn bones(&self) -> impl Iterator<Item = Bone> + '_ {
        self.segments().iter().map(move |segment| Bone {
            start: self.parent_frame(segment.parent()).position,
            end: segment.position(),
            angle: segment.abs_angle(),
            size: segment.size(),
        })
    }
}

impl Creature {
    pub fn pose(&self) -> Pose {
        Pose::capture(self)
    }
}
