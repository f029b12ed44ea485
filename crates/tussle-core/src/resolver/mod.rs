//! Resolver module: turns contacts and motion into state changes.
//!
//! # Architecture
//!
//! - [`dispatch`]: the static kind-pair matrix deciding how each pair responds
//! - [`collision`]: the per-kind handlers that detect overlaps and apply the
//!   matrix responses to the arena
//! - [`motion`]: roaming acceleration and velocity integration
//!
//! # Invariants
//!
//! - Handlers never compare an entity against itself
//! - Handlers walk candidates in ID order, so a given arena state always
//!   resolves the same way
//! - Entities only leave the world after a handler's scan completes

pub mod collision;
pub mod dispatch;
pub mod motion;

pub use collision::{
    handle_all, handle_collisions, handle_enemy_collision, handle_item_collision,
    handle_obstacle_collision, handle_player_collision,
};
pub use dispatch::{response, Contact, Cues, Response};
pub use motion::{roam, update_motion};
