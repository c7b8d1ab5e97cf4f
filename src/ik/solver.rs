use crate::math::{bearing, direction};
use crate::rig::{SegmentId, Skeleton};
use glam::Vec2;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragResult {
    /// Effector distance to the target once the chain has settled, before dragging.
    pub prior_distance: f32,
    /// Effector distance to the target after dragging.
    pub distance: f32,
}

impl DragResult {
    pub fn reached(&self) -> bool {
        self.distance <= f32::EPSILON
    }
}

/// Single-sweep chain drag: one backward pass from the effector to the chain base,
/// with the effector allowed to close at most `speed` on the target per call.
pub struct DragSolver;

impl DragSolver {
    /// `nodes` runs base first, effector last. A target whose distance overflows
    /// leaves the chain settled but undragged.
    pub fn drag(
        skeleton: &mut Skeleton,
        nodes: &[SegmentId],
        target: Vec2,
        speed: f32,
    ) -> DragResult {
        let (Some(&first), Some(&end)) = (nodes.first(), nodes.last()) else {
            return DragResult {
                prior_distance: 0.0,
                distance: 0.0,
            };
        };

        skeleton.update_relative(first, true, true);

        let prior_distance = skeleton.segment(end).position().distance(target);
        if !prior_distance.is_finite() {
            log::warn!("limb drag skipped: target {:?} is out of range", target);
            return DragResult {
                prior_distance,
                distance: prior_distance,
            };
        }
        let distance = (prior_distance - speed).max(0.0);

        Self::backward_pass(skeleton, nodes, target, distance);
        Self::realign(skeleton, nodes);

        log::trace!(
            "limb drag: {:.3} -> {:.3} toward ({:.1}, {:.1})",
            prior_distance,
            distance,
            target.x,
            target.y
        );

        DragResult {
            prior_distance,
            distance,
        }
    }

    fn backward_pass(skeleton: &mut Skeleton, nodes: &[SegmentId], target: Vec2, reach: f32) {
        let mut anchor = target;
        let mut length = reach;

        for &id in nodes.iter().rev() {
            let segment = skeleton.segment_mut(id);
            // a node sitting on the drag point backs off along its own link
            let angle = bearing(anchor, segment.position()).unwrap_or(segment.abs_angle() + PI);
            let position = anchor + direction(angle) * length;
            segment.set_position(position);

            anchor = position;
            length = segment.size();
        }
    }

    /// Rebuilds angles from the new positions. Side branches hanging off the
    /// chain are carried along rigidly; they are not part of the drag.
    fn realign(skeleton: &mut Skeleton, nodes: &[SegmentId]) {
        for &id in nodes {
            let parent = skeleton.parent_frame(skeleton.segment(id).parent());
            skeleton.segment_mut(id).realign(parent);

            for k in 0..skeleton.segment(id).children().len() {
                let child = skeleton.segment(id).children()[k];
                if !nodes.contains(&child) {
                    skeleton.update_relative(child, true, false);
                }
            }
        }
    }
}
