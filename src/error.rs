//! Error types for rig construction and configuration loading.

use thiserror::Error;

/// Errors raised while building or configuring a creature.
///
/// Per-tick updates never fail; only construction and config loading do.
#[derive(Error, Debug)]
pub enum KinematicsError {
    /// Segment length must be positive and finite.
    #[error("segment size must be positive and finite, got {0}")]
    InvalidSize(f32),

    /// Stiffness divides the angular deviation, so it must be positive.
    #[error("segment stiffness must be positive and finite, got {0}")]
    InvalidStiffness(f32),

    #[error("segment range must be non-negative and finite, got {0}")]
    InvalidRange(f32),

    #[error("segment angle must be finite, got {0}")]
    InvalidAngle(f32),

    #[error("limb speed must be non-negative and finite, got {0}")]
    InvalidSpeed(f32),

    #[error("limb chain length must be at least 1")]
    EmptyLimb,

    #[error("segment index {index} out of bounds (count: {count})")]
    UnknownSegment { index: usize, count: usize },

    /// A locomotion tuning value is outside its allowed domain.
    #[error("locomotion parameter `{field}` is invalid: {value}")]
    InvalidLocomotion { field: String, value: f32 },

    #[error("tick period must be positive and finite, got {0}")]
    InvalidPeriod(f64),

    #[error("creature position and heading must be finite")]
    InvalidPlacement,

    #[error("failed to parse creature config: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("failed to write creature config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("failed to read creature config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rig construction.
pub type Result<T> = std::result::Result<T, KinematicsError>;
