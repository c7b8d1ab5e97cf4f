use serde::{Deserialize, Serialize};

/// Elastic limit on a segment's relative angle.
///
/// Each relaxation divides the deviation from the rest angle by `stiffness`,
/// then clamps it into a window `range` wide centered on the rest angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elastic {
    pub range: f32,
    pub stiffness: f32,
}

impl Elastic {
    pub fn new(range: f32, stiffness: f32) -> Self {
        Self { range, stiffness }
    }

    /// Limit that never pulls back and never clamps.
    pub fn free() -> Self {
        Self {
            range: f32::INFINITY,
            stiffness: 1.0,
        }
    }

    /// Lowest and highest relative angle allowed around `rest`.
    pub fn bounds(&self, rest: f32) -> (f32, f32) {
        let half = self.range / 2.0;
        (rest - half, rest + half)
    }

    pub fn apply(&self, relative: f32, rest: f32) -> f32 {
        let (low, high) = self.bounds(rest);
        let pulled = rest + (relative - rest) / self.stiffness;
        pulled.max(low).min(high)
    }

    pub fn contains(&self, relative: f32, rest: f32) -> bool {
        let (low, high) = self.bounds(rest);
        relative >= low && relative <= high
    }
}

impl Default for Elastic {
    fn default() -> Self {
        Self::free()
    }
}
