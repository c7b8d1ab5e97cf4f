use super::gait::Gait;
use super::solver::{DragResult, DragSolver};
use crate::error::{KinematicsError, Result};
use crate::rig::{Parent, SegmentId, Skeleton};
use glam::Vec2;

/// IK chain over the last `length` segments leading to an end effector.
///
/// The node list is fixed at construction: the same segments, base first,
/// effector last. Only their positions and angles change afterwards.
#[derive(Debug, Clone)]
pub struct LimbSystem {
    end: SegmentId,
    nodes: Vec<SegmentId>,
    hip: Parent,
    speed: f32,
    requested_length: usize,
    gait: Option<Gait>,
}

impl LimbSystem {
    /// Collects up to `length` ancestors of `end` (itself included), stopping early
    /// at the anchor. A short chain is not an error; `length()` reports what was found.
    pub fn new(skeleton: &Skeleton, end: SegmentId, length: usize, speed: f32) -> Result<Self> {
        if length == 0 {
            return Err(KinematicsError::EmptyLimb);
        }
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(KinematicsError::InvalidSpeed(speed));
        }
        if skeleton.get(end).is_none() {
            return Err(KinematicsError::UnknownSegment {
                index: end.index(),
                count: skeleton.len(),
            });
        }

        let mut nodes = Vec::with_capacity(length);
        let mut node = Parent::Segment(end);
        while nodes.len() < length {
            let Parent::Segment(id) = node else {
                break;
            };
            nodes.push(id);
            node = skeleton.segment(id).parent();
        }
        nodes.reverse();

        if nodes.len() < length {
            log::debug!(
                "limb ending at segment {} shortened from {} to {} nodes",
                end.index(),
                length,
                nodes.len()
            );
        }

        let hip = skeleton.segment(nodes[0]).parent();

        Ok(Self {
            end,
            nodes,
            hip,
            speed,
            requested_length: length,
            gait: None,
        })
    }

    /// A limb that walks: it plants its foot and steps instead of chasing the target.
    pub fn leg(
        skeleton: &Skeleton,
        end: SegmentId,
        length: usize,
        speed: f32,
        heading: f32,
    ) -> Result<Self> {
        let mut limb = Self::new(skeleton, end, length, speed)?;
        limb.gait = Some(Gait::new(skeleton, limb.end, limb.hip, heading));
        Ok(limb)
    }

    pub fn end(&self) -> SegmentId {
        self.end
    }

    pub fn nodes(&self) -> &[SegmentId] {
        &self.nodes
    }

    pub fn hip(&self) -> Parent {
        self.hip
    }

    pub fn length(&self) -> usize {
        self.nodes.len()
    }

    pub fn requested_length(&self) -> usize {
        self.requested_length
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn gait(&self) -> Option<&Gait> {
        self.gait.as_ref()
    }

    /// Limbs without a gait always count as load bearing.
    pub fn is_weight_bearing(&self) -> bool {
        self.gait.as_ref().map_or(true, Gait::is_planted)
    }

    /// One IK pass dragging the effector toward `target`.
    ///
    /// # Panics
    ///
    /// Panics if `skeleton` is not the one the limb was built on.
    pub fn move_to(&self, skeleton: &mut Skeleton, target: Vec2) -> DragResult {
        DragSolver::drag(skeleton, &self.nodes, target, self.speed)
    }

    /// Per-tick update. Plain limbs chase `target`; legs chase their own foot goal
    /// and then advance their step phase.
    pub fn update(&mut self, skeleton: &mut Skeleton, target: Vec2) -> DragResult {
        let Some(gait) = self.gait.as_mut() else {
            return DragSolver::drag(skeleton, &self.nodes, target, self.speed);
        };

        let result = DragSolver::drag(skeleton, &self.nodes, gait.goal(), self.speed);
        gait.advance(skeleton, self.end, self.hip);
        result
    }
}
