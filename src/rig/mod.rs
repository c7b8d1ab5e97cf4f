//! Articulated body rig
//!
//! Segments form a tree hanging off a single anchor frame (the creature root).
//! The tree is an arena: segments are addressed by [`SegmentId`] and store their
//! parent and children as ids.

pub mod constraint;
pub mod segment;
pub mod skeleton;

pub use constraint::Elastic;
pub use segment::{Parent, Segment, SegmentId, SegmentParams};
pub use skeleton::Skeleton;
