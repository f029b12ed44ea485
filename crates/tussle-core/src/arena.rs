//! Arena module: the live entity set.
//!
//! The Arena is the container for every entity currently in the world. It provides:
//! - Entity storage with deterministic iteration order (`BTreeMap`)
//! - Entity lifecycle management (spawn/despawn, scene clearing)
//! - Box overlap queries
//! - The buffer of side effects emitted by collision handlers
//!
//! # Architecture
//!
//! Entities are addressed by [`EntityId`] handles rather than references, so
//! handlers can look entities up, compute a response from copies of their
//! boxes, and write results back without holding overlapping borrows.
//! Entity IDs are monotonically increasing and never reused, and the
//! `BTreeMap`'s natural ordering guarantees consistent iteration.
//!
//! # Example
//!
//! ```
//! use tussle_core::arena::Arena;
//! use tussle_core::entity::{EntityInit, EntityInner, PlayerComponents, ObstacleComponents};
//! use tussle_core::geometry::Rect;
//!
//! let mut arena = Arena::new();
//!
//! let hero = arena.spawn(
//!     EntityInit::new("hero", Rect::new(0, 0, 10, 10)),
//!     EntityInner::Player(PlayerComponents::new(1)),
//! );
//! let wall = arena.spawn(
//!     EntityInit::new("wall", Rect::new(50, 0, 10, 40)),
//!     EntityInner::Obstacle(ObstacleComponents::default()),
//! );
//!
//! // Iterate in deterministic order
//! let ids: Vec<_> = arena.entity_ids_sorted().collect();
//! assert_eq!(ids, vec![hero, wall]);
//!
//! // Clearing the scene keeps players only
//! assert_eq!(arena.clear_scene(), 1);
//! assert!(arena.contains(hero));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::effect::{Effect, EffectSink};
use crate::entity::{Entity, EntityId, EntityInit, EntityInner, EntityKind};
use crate::geometry::Rect;

/// World container holding all live entities.
///
/// # Determinism
///
/// Entity storage is a `BTreeMap` keyed by monotonically assigned IDs, so
/// iteration always follows spawn order regardless of platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arena {
    /// Monotonically increasing entity ID counter.
    next_id: u64,
    /// Live entities in deterministic order.
    entities: BTreeMap<EntityId, Entity>,
    /// Effects emitted since the last drain.
    effects: Vec<Effect>,
    /// Current simulation tick.
    tick: u64,
}

impl Arena {
    /// Creates a new empty arena at tick 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a new entity and returns its ID.
    pub fn spawn(&mut self, init: EntityInit, inner: EntityInner) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;

        self.entities.insert(id, Entity::new(id, init, inner));
        id
    }

    /// Removes an entity from the world and returns it.
    ///
    /// Removing an absent ID is a no-op.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.entities.remove(&id);
        if removed.is_some() {
            tracing::trace!(entity = %id, "despawned");
        }
        removed
    }

    /// Removes every non-player entity, as when the scene is regenerated.
    ///
    /// Returns the number of entities removed.
    pub fn clear_scene(&mut self) -> usize {
        let before = self.entities.len();
        self.entities.retain(|_, entity| entity.is_player());
        let removed = before - self.entities.len();
        tracing::debug!(removed, remaining = self.entities.len(), "scene cleared");
        removed
    }

    /// Returns a reference to an entity by ID.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Returns a mutable reference to an entity by ID.
    #[must_use]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Returns `true` if the entity is live in this arena.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Box of a live entity.
    #[must_use]
    pub fn rect_of(&self, id: EntityId) -> Option<Rect> {
        self.entities.get(&id).map(Entity::rect)
    }

    /// Kind of a live entity.
    #[must_use]
    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.entities.get(&id).map(Entity::kind)
    }

    /// Returns an iterator over entity IDs in deterministic (sorted) order.
    pub fn entity_ids_sorted(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    /// Returns an iterator over entities in deterministic (sorted by ID) order.
    pub fn entities_sorted(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.values()
    }

    /// Returns an iterator over mutable entities in deterministic order.
    pub fn entities_sorted_mut(&mut self) -> impl Iterator<Item = &mut Entity> + '_ {
        self.entities.values_mut()
    }

    /// IDs of every live entity of `kind`, in order.
    pub fn ids_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .values()
            .filter(move |e| e.kind() == kind)
            .map(Entity::id)
    }

    /// IDs of entities whose boxes overlap `rect`, excluding `exclude`.
    #[must_use]
    pub fn query_overlapping(&self, rect: &Rect, exclude: Option<EntityId>) -> Vec<EntityId> {
        self.entities
            .values()
            .filter(|e| Some(e.id()) != exclude && e.rect().overlaps(rect))
            .map(Entity::id)
            .collect()
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the arena has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clears every entity's blocked flag.
    pub fn clear_contact_flags(&mut self) {
        for entity in self.entities.values_mut() {
            entity.set_collided(false);
        }
    }

    /// Queues a side effect.
    pub fn push_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Effects queued since the last drain.
    #[must_use]
    pub fn pending_effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Takes all queued effects.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Delivers all queued effects to `sink` and clears the queue.
    ///
    /// Returns how many were delivered.
    pub fn flush_effects(&mut self, sink: &mut impl EffectSink) -> usize {
        let effects = self.drain_effects();
        for effect in &effects {
            sink.deliver(effect);
        }
        effects.len()
    }

    /// Returns the current simulation tick.
    #[must_use]
    pub const fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Advances the simulation tick counter.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}

// =============================================================================
// Tests
// =============================================================================
