//! # critter-ik
//!
//! Procedural animation for articulated 2D creatures: a steerable head with
//! damped locomotion, elastic segment chains trailing behind it, and short IK
//! limbs dragged toward targets.
//!
//! ## Features
//! - Arena-backed segment tree with elastic angle limits (range + stiffness)
//! - Leader-following "rope" pass that keeps links rigid while they swing
//! - Single-sweep limb IK with an optional stance/swing gait
//! - Head controller with acceleration, friction and resistance per axis
//! - Pose snapshots for any renderer, RON creature configs
//!
//! ## Example
//! ```rust
//! use critter_ik::{CreatureConfig, TickOutcome};
//! use glam::Vec2;
//!
//! let mut critter = CreatureConfig::snake(Vec2::ZERO).build().unwrap();
//!
//! // One tick toward the pointer
//! let outcome = critter.follow(Vec2::new(200.0, 0.0));
//! assert_eq!(outcome, TickOutcome::Advanced);
//!
//! for bone in critter.pose().bones {
//!     // draw a capsule from bone.start to bone.end, bone.size wide
//!     let _ = (bone.start, bone.end, bone.size);
//! }
//! ```

pub mod config;
pub mod error;
pub mod ik;
pub mod input;
pub mod locomotion;
pub mod math;
pub mod pose;
pub mod rig;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ChainConfig, CreatureConfig, LimbConfig};
pub use error::{KinematicsError, Result};
pub use ik::{DragResult, DragSolver, Gait, LimbSystem, StepPhase};
pub use input::{Button, Orbit, Pointer, TargetSource};
pub use locomotion::{Creature, FrameClock, Locomotion, Motion, TickOutcome};
pub use math::Frame;
pub use pose::{Bone, Pose};
pub use rig::{Elastic, Parent, Segment, SegmentId, SegmentParams, Skeleton};
