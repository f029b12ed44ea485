//! Test module for determinism, integration and property tests.
//!
//! # Test Structure
//!
//! - `determinism.rs`: same seed and spawn sequence give identical worlds
//! - `integration.rs`: end-to-end collision and tick scenarios
//! - `properties.rs`: proptest checks of the geometric and container invariants
//! - `helpers.rs`: test setup utilities and factory functions

mod helpers;

// Re-export for convenience
pub use helpers::*;
