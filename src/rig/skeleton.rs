use super::segment::{Parent, Segment, SegmentId, SegmentParams};
use crate::error::{KinematicsError, Result};
use crate::math::Frame;

/// Arena of segments hanging off one anchor frame.
///
/// Every update walks the tree parent-first, so a child always reads the frame
/// its parent has just been given.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    anchor: Frame,
    segments: Vec<Segment>,
    roots: Vec<SegmentId>,
}

impl Skeleton {
    pub fn new(anchor: Frame) -> Self {
        Self {
            anchor,
            segments: Vec::new(),
            roots: Vec::new(),
        }
    }

    pub fn anchor(&self) -> Frame {
        self.anchor
    }

    /// Moves the anchor without touching any segment.
    pub fn set_anchor(&mut self, anchor: Frame) {
        self.anchor = anchor;
    }

    pub fn add_segment(&mut self, parent: Parent, params: SegmentParams) -> Result<SegmentId> {
        params.validate()?;
        if let Parent::Segment(id) = parent {
            self.check(id)?;
        }

        let id = SegmentId(self.segments.len());
        let segment = Segment::new(parent, self.parent_frame(parent), params);
        self.segments.push(segment);

        match parent {
            Parent::Anchor => self.roots.push(id),
            Parent::Segment(p) => self.segments[p.0].children.push(id),
        }
        Ok(id)
    }

    /// Appends `count` identical segments one after another, returning them base first.
    pub fn add_chain(
        &mut self,
        parent: Parent,
        count: usize,
        params: SegmentParams,
    ) -> Result<Vec<SegmentId>> {
        params.validate()?;
        let mut ids = Vec::with_capacity(count);
        let mut node = parent;
        for _ in 0..count {
            let id = self.add_segment(node, params)?;
            ids.push(id);
            node = Parent::Segment(id);
        }
        Ok(ids)
    }

    /// # Panics
    ///
    /// Panics if `id` belongs to another skeleton; use [`Skeleton::get`] to check.
    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.0)
    }

    pub(crate) fn segment_mut(&mut self, id: SegmentId) -> &mut Segment {
        &mut self.segments[id.0]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn ids(&self) -> impl Iterator<Item = SegmentId> {
        (0..self.segments.len()).map(SegmentId)
    }

    /// Segments attached directly to the anchor.
    pub fn roots(&self) -> &[SegmentId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn parent_frame(&self, parent: Parent) -> Frame {
        match parent {
            Parent::Anchor => self.anchor,
            Parent::Segment(id) => self.segments[id.0].frame(),
        }
    }

    /// Relaxes one segment and, with `propagate`, its whole subtree with the same `flex`.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to another skeleton; use [`Skeleton::get`] to check.
    pub fn update_relative(&mut self, id: SegmentId, propagate: bool, flex: bool) {
        self.walk(id, propagate, |segment, parent| segment.relax(parent, flex));
    }

    /// Leader-following pass for one segment and, with `propagate`, its subtree.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to another skeleton; use [`Skeleton::get`] to check.
    pub fn follow(&mut self, id: SegmentId, propagate: bool) {
        self.walk(id, propagate, |segment, parent| segment.trail(parent));
    }

    /// Runs the leader-following pass over every chain hanging off the anchor.
    pub fn follow_roots(&mut self) {
        for i in 0..self.roots.len() {
            self.follow(self.roots[i], true);
        }
    }

    /// Relaxes every chain hanging off the anchor.
    pub fn update_roots(&mut self, flex: bool) {
        for i in 0..self.roots.len() {
            self.update_relative(self.roots[i], true, flex);
        }
    }

    /// Pre-order walk: `step` sees each segment with its parent's already updated frame.
    fn walk(
        &mut self,
        start: SegmentId,
        propagate: bool,
        mut step: impl FnMut(&mut Segment, Frame),
    ) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let frame = self.parent_frame(self.segments[id.0].parent);
            let segment = &mut self.segments[id.0];
            step(segment, frame);
            if propagate {
                stack.extend(segment.children.iter().rev().copied());
            }
        }
    }

    fn check(&self, id: SegmentId) -> Result<()> {
        if id.0 < self.segments.len() {
            Ok(())
        } else {
            Err(KinematicsError::UnknownSegment {
                index: id.0,
                count: self.segments.len(),
            })
        }
    }
}
