//! Error types for kinematics, spin algebra and configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QedError {
    #[error("Four-vector has negative invariant norm: {invariant_sqr} (resolution {resolution})")]
    SpacelikeInvariant { invariant_sqr: f64, resolution: f64 },

    #[error("Boost velocity must satisfy 0 <= beta < 1, got {0}")]
    SuperluminalBoost(f64),

    #[error("Lorentz factor must satisfy gamma >= 1, got {0}")]
    InvalidGamma(f64),

    #[error("Cannot build a rest-frame boost from a non-timelike four-vector")]
    NotTimelike,

    #[error("Rotation axis is too close to zero")]
    DegenerateAxis,

    #[error("Component index out of range: {index} not in [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{process} expects particles ({layout}), got {found}")]
    ParticleLayout {
        process: String,
        layout: &'static str,
        found: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}
