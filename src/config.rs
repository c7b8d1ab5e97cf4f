//! Creature descriptions loadable from RON.
//!
//! ```ron
//! (
//!     position: (400.0, 300.0),
//!     spine: (count: 12, segment: (size: 8.0, angle: 0.0, range: 1.0, stiffness: 1.0)),
//!     limbs: [
//!         (attach: 2, segments: [(size: 10.0, angle: 1.2, range: 2.0, stiffness: 1.0)], gait: true),
//!     ],
//! )
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use crate::error::{KinematicsError, Result};
use crate::locomotion::{Creature, Locomotion};
use crate::rig::{Parent, SegmentId, SegmentParams};

/// Optional fields such as a limb's `length` are written bare (`length: 3`).
fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// A run of identical segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub count: usize,
    pub segment: SegmentParams,
}

/// A limb grown off a spine segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimbConfig {
    /// Spine index the limb hangs from; `0` is the segment next to the head.
    pub attach: usize,
    /// Limb segments from hip to effector.
    pub segments: Vec<SegmentParams>,
    /// IK chain length; defaults to the number of limb segments.
    #[serde(default)]
    pub length: Option<usize>,
    #[serde(default)]
    pub speed: f32,
    /// Step with a stance/swing gait instead of chasing the target.
    #[serde(default)]
    pub gait: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureConfig {
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub heading: f32,
    #[serde(default)]
    pub locomotion: Locomotion,
    pub spine: ChainConfig,
    #[serde(default)]
    pub limbs: Vec<LimbConfig>,
}

impl CreatureConfig {
    /// Fifty loose segments behind a slow head.
    pub fn snake(position: Vec2) -> Self {
        Self {
            position,
            heading: 0.0,
            locomotion: Locomotion::default(),
            spine: ChainConfig {
                count: 50,
                segment: SegmentParams::new(12.0, 0.0, FRAC_PI_2, 1.0),
            },
            limbs: Vec::new(),
        }
    }

    pub fn from_ron_str(source: &str) -> Result<Self> {
        Ok(ron_options().from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&source)?;
        log::debug!(
            "loaded creature config from {}: {} spine segments, {} limbs",
            path.display(),
            config.spine.count,
            config.limbs.len()
        );
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron_options().to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    pub fn build(&self) -> Result<Creature> {
        let mut creature = Creature::new(self.position, self.heading, self.locomotion)?;
        let spine = creature.add_chain(Parent::Anchor, self.spine.count, self.spine.segment)?;

        for limb in &self.limbs {
            let hip = spine
                .get(limb.attach)
                .copied()
                .ok_or(KinematicsError::UnknownSegment {
                    index: limb.attach,
                    count: spine.len(),
                })?;
            let end = Self::grow_limb(&mut creature, hip, &limb.segments)?;
            let length = limb.length.unwrap_or(limb.segments.len());

            if limb.gait {
                creature.add_leg(end, length, limb.speed)?;
            } else {
                creature.add_limb(end, length, limb.speed)?;
            }
        }

        Ok(creature)
    }

    fn grow_limb(
        creature: &mut Creature,
        hip: SegmentId,
        segments: &[SegmentParams],
    ) -> Result<SegmentId> {
        let mut end = None;
        let mut parent = Parent::Segment(hip);
        for params in segments {
            let id = creature.add_segment(parent, *params)?;
            parent = Parent::Segment(id);
            end = Some(id);
        }
        end.ok_or(KinematicsError::EmptyLimb)
    }
}
