//! Error types for the simulation core.
//!
//! Only configuration loading and asset loading are fallible. Container
//! overflow and similar invariant breaches are prevented by construction and
//! never surface as errors.

use thiserror::Error;

use crate::assets::{AssetId, AssetKind};

/// Errors raised while loading or validating a [`WorldConfig`](crate::config::WorldConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON for the config schema.
    #[error("failed to parse world config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The world must have a positive extent on both axes.
    #[error("world bounds must be positive, got {width}x{height}")]
    InvalidBounds {
        /// Configured width
        width: i32,
        /// Configured height
        height: i32,
    },

    /// Tick and roaming intervals must be non-zero.
    #[error("{field} must be greater than zero")]
    ZeroInterval {
        /// Name of the offending field
        field: &'static str,
    },

    /// The roaming speed cap must be finite and non-negative.
    #[error("roam speed cap must be finite and non-negative, got {0}")]
    InvalidSpeedCap(f32),
}

/// Errors raised by an [`AssetLoader`](crate::assets::AssetLoader).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// No asset exists under the identifier.
    #[error("{kind} asset not found: {id}")]
    NotFound {
        /// Sound or texture
        kind: AssetKind,
        /// The identifier that was requested
        id: AssetId,
    },

    /// The asset exists but could not be decoded by the collaborator.
    #[error("failed to decode {kind} asset {id}: {reason}")]
    Decode {
        /// Sound or texture
        kind: AssetKind,
        /// The identifier that was requested
        id: AssetId,
        /// Loader-provided description
        reason: String,
    },
}
