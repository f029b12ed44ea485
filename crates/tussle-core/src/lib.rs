//! # Tussle Core
//!
//! Entity simulation layer for a top-down 2D arcade brawler.
//!
//! This crate owns the world state between rendering and input: entity
//! storage, box collisions, kind-specific responses, motion and the bounded
//! containers players carry items in.
//!
//! ## Architecture
//!
//! - **Entities**: players, enemies, items, obstacles and skills sharing one
//!   base model, with per-kind components in a closed enum
//! - **Arena**: the live set, iterated in ID order
//! - **Resolver**: overlap detection, the kind-pair response matrix, motion
//! - **Effects**: sound and rumble requests buffered for the frontend
//!
//! ## Usage
//!
//! ```
//! use tussle_core::{EntityInit, EntityInner, ObstacleComponents, PlayerComponents};
//! use tussle_core::{Rect, Simulation, WorldConfig};
//!
//! let mut sim = Simulation::new(WorldConfig::default())?;
//! let hero = sim.arena_mut().spawn(
//!     EntityInit::new("hero", Rect::new(0, 0, 10, 10)),
//!     EntityInner::Player(PlayerComponents::new(1)),
//! );
//! sim.arena_mut().spawn(
//!     EntityInit::new("crate", Rect::new(9, 0, 10, 10)),
//!     EntityInner::Obstacle(ObstacleComponents::default()),
//! );
//!
//! sim.step();
//! assert!(sim.arena().get(hero).unwrap().has_collided());
//! # Ok::<(), tussle_core::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod assets;
pub mod config;
pub mod effect;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod resolver;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use arena::Arena;
pub use assets::{AssetCache, AssetId, AssetKind, AssetLoader, RenderSurface};
pub use config::WorldConfig;
pub use effect::{ControllerHandle, Effect, EffectSink, HapticPulse};
pub use entity::{
    Container, EnemyComponents, Entity, EntityId, EntityInit, EntityInner, EntityKind,
    ItemComponents, KindSet, ObstacleComponents, PlayerComponents, RoamState, SkillComponents,
    UseEffect, CONTAINER_CAPACITY,
};
pub use error::{AssetError, ConfigError};
pub use geometry::{Axis, Penetration, Rect};
pub use simulation::Simulation;
