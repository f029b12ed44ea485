//! Entity module: the spatial actors of the simulation.
//!
//! This module provides the core entity types:
//! - [`EntityId`]: Stable handle for an entity, in the world or in a container
//! - [`EntityKind`]: Closed classification used by the collision matrix
//! - [`KindSet`]: Bit set of kinds (container filters)
//! - [`EntityInner`]: Variant-specific components
//! - [`Entity`]: Shared base data plus the variant components
//!
//! # Architecture
//!
//! Variants share one data shape (box, velocity, health, containers) and differ
//! only in behaviour. Behaviour is looked up by kind in a static table (see
//! [`crate::resolver::dispatch`]) instead of by downcasting.
//!
//! # Example
//!
//! ```
//! use tussle_core::entity::{Entity, EntityId, EntityInit, EntityInner, EntityKind};
//! use tussle_core::entity::components::PlayerComponents;
//! use tussle_core::geometry::Rect;
//!
//! let hero = Entity::new(
//!     EntityId::new(1),
//!     EntityInit::new("hero", Rect::new(0, 0, 16, 16)).with_health(30),
//!     EntityInner::Player(PlayerComponents::new(1)),
//! );
//!
//! assert_eq!(hero.kind(), EntityKind::Player);
//! assert_eq!(hero.health(), 30);
//! assert!(hero.inventory().is_empty());
//! ```

pub mod components;
mod container;

use std::fmt;

use bitflags::bitflags;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::assets::AssetId;
use crate::geometry::{Axis, Rect};

pub use components::{
    EnemyComponents, ItemComponents, ObstacleComponents, PlayerComponents, RoamState,
    SkillComponents, UseEffect,
};
pub use container::{Container, CONTAINER_CAPACITY};

/// Acceleration given to entities that do not specify one.
pub const DEFAULT_ACCELERATION: f32 = 0.5;

/// Deceleration given to entities that do not specify one.
pub const DEFAULT_DECELERATION: f32 = 0.1;

/// Unique identifier for an entity.
///
/// IDs are assigned monotonically by the arena and survive the move into a
/// container, so an item keeps its id after being picked up.
///
/// # Example
///
/// ```
/// use tussle_core::entity::EntityId;
///
/// let id1 = EntityId::new(1);
/// let id2 = EntityId::new(2);
///
/// assert!(id1 < id2);
/// assert_eq!(id1.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a new `EntityId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Entity classification.
///
/// The collision matrix is indexed by `(actor kind, target kind)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Human-controlled actor
    Player,
    /// Autonomous agent, hostile or friendly
    Enemy,
    /// Pickup
    Item,
    /// Immovable scenery
    Obstacle,
    /// Ability; normally lives in a skills container
    Skill,
}

impl EntityKind {
    /// Number of kinds.
    pub const COUNT: usize = 5;

    /// Every kind, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Player,
        Self::Enemy,
        Self::Item,
        Self::Obstacle,
        Self::Skill,
    ];

    /// Row/column of this kind in per-kind tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Enemy => 1,
            Self::Item => 2,
            Self::Obstacle => 3,
            Self::Skill => 4,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Enemy => write!(f, "Enemy"),
            Self::Item => write!(f, "Item"),
            Self::Obstacle => write!(f, "Obstacle"),
            Self::Skill => write!(f, "Skill"),
        }
    }
}

bitflags! {
    /// A set of [`EntityKind`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct KindSet: u8 {
        /// Players
        const PLAYER = 1 << 0;
        /// Enemies
        const ENEMY = 1 << 1;
        /// Items
        const ITEM = 1 << 2;
        /// Obstacles
        const OBSTACLE = 1 << 3;
        /// Skills
        const SKILL = 1 << 4;
    }
}

impl KindSet {
    /// The singleton set for `kind`.
    #[must_use]
    pub const fn of(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Player => Self::PLAYER,
            EntityKind::Enemy => Self::ENEMY,
            EntityKind::Item => Self::ITEM,
            EntityKind::Obstacle => Self::OBSTACLE,
            EntityKind::Skill => Self::SKILL,
        }
    }

    /// Returns `true` if `kind` is a member.
    #[must_use]
    pub const fn contains_kind(self, kind: EntityKind) -> bool {
        self.contains(Self::of(kind))
    }
}

/// Type-safe storage for variant components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityInner {
    /// Player components (slot, reputation, controller)
    Player(PlayerComponents),
    /// Enemy components (personality, roaming state)
    Enemy(EnemyComponents),
    /// Item components (use effect)
    Item(ItemComponents),
    /// Obstacle components
    Obstacle(ObstacleComponents),
    /// Skill components (use effect)
    Skill(SkillComponents),
}

impl EntityInner {
    /// Returns the kind matching this variant.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Player(_) => EntityKind::Player,
            Self::Enemy(_) => EntityKind::Enemy,
            Self::Item(_) => EntityKind::Item,
            Self::Obstacle(_) => EntityKind::Obstacle,
            Self::Skill(_) => EntityKind::Skill,
        }
    }

    /// Effect applied when this entity is used from a container.
    #[must_use]
    pub const fn use_effect(&self) -> UseEffect {
        match self {
            Self::Item(c) => c.effect,
            Self::Skill(c) => c.effect,
            _ => UseEffect::None,
        }
    }
}

/// Construction input supplied by the populator.
///
/// Sound and frame identifiers are opaque; they are passed through to the
/// asset collaborator and never validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityInit {
    /// Display name
    pub name: String,
    /// Initial box
    pub rect: Rect,
    /// Initial health
    pub health: i32,
    /// Sound played on collision responses
    pub collision_sound: AssetId,
    /// Animation frames, in order
    pub frames: Vec<AssetId>,
    /// Acceleration step
    pub acceleration: f32,
    /// Deceleration step
    pub deceleration: f32,
}

impl EntityInit {
    /// Creates construction input with defaults for everything but name and box.
    #[must_use]
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
            health: 100,
            collision_sound: AssetId::default(),
            frames: Vec::new(),
            acceleration: DEFAULT_ACCELERATION,
            deceleration: DEFAULT_DECELERATION,
        }
    }

    /// Sets initial health.
    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    /// Sets the collision sound.
    #[must_use]
    pub fn with_sound(mut self, sound: impl Into<AssetId>) -> Self {
        self.collision_sound = sound.into();
        self
    }

    /// Sets the animation frames.
    #[must_use]
    pub fn with_frames<I, A>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AssetId>,
    {
        self.frames = frames.into_iter().map(Into::into).collect();
        self
    }

    /// Sets acceleration and deceleration steps.
    #[must_use]
    pub fn with_motion(mut self, acceleration: f32, deceleration: f32) -> Self {
        self.acceleration = acceleration;
        self.deceleration = deceleration;
        self
    }
}

/// A spatial actor.
///
/// # Invariants
///
/// - Each container holds at most [`CONTAINER_CAPACITY`] entities
/// - An entity stored in a container is not live in any arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    name: String,
    rect: Rect,
    z_pos: i32,
    health: i32,
    velocity: Vec3,
    acceleration: f32,
    deceleration: f32,
    score: i32,
    inventory: Container,
    skills: Container,
    notes: Container,
    has_collided: bool,
    collision_sound: AssetId,
    frames: Vec<AssetId>,
    inner: EntityInner,
}

impl Entity {
    /// Creates an entity from populator input and variant components.
    #[must_use]
    pub fn new(id: EntityId, init: EntityInit, inner: EntityInner) -> Self {
        Self {
            id,
            name: init.name,
            rect: init.rect,
            z_pos: 0,
            health: init.health,
            velocity: Vec3::ZERO,
            acceleration: init.acceleration,
            deceleration: init.deceleration,
            score: 0,
            inventory: Container::new(KindSet::ITEM),
            skills: Container::new(KindSet::SKILL),
            notes: Container::new(KindSet::ITEM),
            has_collided: false,
            collision_sound: init.collision_sound,
            frames: init.frames,
            inner,
        }
    }

    /// Returns the entity's unique identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the entity's kind.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.inner.kind()
    }

    /// Display name, fixed at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current box.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Replaces the box.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Elevation; not part of the AABB test.
    #[must_use]
    pub const fn z_pos(&self) -> i32 {
        self.z_pos
    }

    /// Sets elevation.
    pub fn set_z_pos(&mut self, z: i32) {
        self.z_pos = z;
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> i32 {
        self.health
    }

    /// Removes `amount` health.
    pub fn damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restores `amount` health.
    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount);
    }

    /// Score (currency / experience).
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Adds to the score.
    pub fn add_score(&mut self, amount: i32) {
        self.score = self.score.saturating_add(amount);
    }

    /// Velocity; `z` is carried but not integrated.
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Replaces the velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Acceleration step.
    #[must_use]
    pub const fn acceleration(&self) -> f32 {
        self.acceleration
    }

    /// Deceleration step.
    #[must_use]
    pub const fn deceleration(&self) -> f32 {
        self.deceleration
    }

    /// Moves the box by the velocity, truncating each axis toward zero.
    ///
    /// Positions saturate at the `i32` range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn integrate_velocity(&mut self) {
        self.rect.x = self.rect.x.saturating_add(self.velocity.x as i32);
        self.rect.y = self.rect.y.saturating_add(self.velocity.y as i32);
    }

    /// Moves the x and y velocity toward zero by `step`, stopping at zero.
    ///
    /// A component never changes sign in a single call.
    pub fn decelerate(&mut self, step: f32) {
        let step = step.abs();
        self.velocity.x = toward_zero(self.velocity.x, step);
        self.velocity.y = toward_zero(self.velocity.y, step);
    }

    /// Adds the acceleration step along `axis` in `direction`, keeping the
    /// magnitude of that component at or below `cap`.
    ///
    /// The sign of `cap` is ignored. A NaN cap leaves the component uncapped.
    pub fn accelerate_axis(&mut self, axis: Axis, direction: f32, cap: f32) {
        let component = match axis {
            Axis::Horizontal => &mut self.velocity.x,
            Axis::Vertical => &mut self.velocity.y,
        };
        let next = *component + direction * self.acceleration;
        *component = if cap.is_nan() {
            next
        } else {
            let cap = cap.abs();
            next.clamp(-cap, cap)
        };
    }

    /// Pulls the box inside `[0, width] x [0, height]`.
    pub fn clamp_to(&mut self, width: i32, height: i32) {
        self.rect = self.rect.clamped_to(width, height);
    }

    /// Set when the entity was blocked this tick.
    #[must_use]
    pub const fn has_collided(&self) -> bool {
        self.has_collided
    }

    /// Sets or clears the blocked flag.
    pub fn set_collided(&mut self, collided: bool) {
        self.has_collided = collided;
    }

    /// Sound played by this entity's collision responses.
    #[must_use]
    pub const fn collision_sound(&self) -> &AssetId {
        &self.collision_sound
    }

    /// Animation frames.
    #[must_use]
    pub fn frames(&self) -> &[AssetId] {
        &self.frames
    }

    /// Consumable items.
    #[must_use]
    pub const fn inventory(&self) -> &Container {
        &self.inventory
    }

    /// Mutable access to the inventory.
    #[must_use]
    pub fn inventory_mut(&mut self) -> &mut Container {
        &mut self.inventory
    }

    /// Reusable abilities.
    #[must_use]
    pub const fn skills(&self) -> &Container {
        &self.skills
    }

    /// Mutable access to the skills.
    #[must_use]
    pub fn skills_mut(&mut self) -> &mut Container {
        &mut self.skills
    }

    /// Reusable notes.
    #[must_use]
    pub const fn notes(&self) -> &Container {
        &self.notes
    }

    /// Mutable access to the notes.
    #[must_use]
    pub fn notes_mut(&mut self) -> &mut Container {
        &mut self.notes
    }

    /// Consumes an inventory item: applies its effect and drops it.
    ///
    /// Returns `false` if no such item is held.
    pub fn use_item(&mut self, id: EntityId) -> bool {
        match self.inventory.remove(id) {
            Some(item) => {
                self.apply_effect(item.inner().use_effect());
                true
            }
            None => false,
        }
    }

    /// Applies a skill's effect; the skill stays in the container.
    pub fn use_skill(&mut self, id: EntityId) -> bool {
        match self.skills.get(id).map(|s| s.inner().use_effect()) {
            Some(effect) => {
                self.apply_effect(effect);
                true
            }
            None => false,
        }
    }

    /// Applies a note's effect; the note stays in the container.
    pub fn use_note(&mut self, id: EntityId) -> bool {
        match self.notes.get(id).map(|n| n.inner().use_effect()) {
            Some(effect) => {
                self.apply_effect(effect);
                true
            }
            None => false,
        }
    }

    /// Applies a use effect to this entity.
    pub fn apply_effect(&mut self, effect: UseEffect) {
        match effect {
            UseEffect::None => {}
            UseEffect::Heal(amount) => self.heal(amount),
            UseEffect::Score(amount) => self.add_score(amount),
        }
    }

    /// Returns a reference to the variant components.
    #[must_use]
    pub const fn inner(&self) -> &EntityInner {
        &self.inner
    }

    /// Returns a mutable reference to the variant components.
    #[must_use]
    pub fn inner_mut(&mut self) -> &mut EntityInner {
        &mut self.inner
    }

    /// Returns `true` if this entity is a player.
    #[must_use]
    pub const fn is_player(&self) -> bool {
        matches!(self.inner, EntityInner::Player(_))
    }

    /// Returns the player components if this is a player.
    #[must_use]
    pub const fn as_player(&self) -> Option<&PlayerComponents> {
        match &self.inner {
            EntityInner::Player(c) => Some(c),
            _ => None,
        }
    }

    /// Returns mutable player components if this is a player.
    #[must_use]
    pub fn as_player_mut(&mut self) -> Option<&mut PlayerComponents> {
        match &mut self.inner {
            EntityInner::Player(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the enemy components if this is an enemy.
    #[must_use]
    pub const fn as_enemy(&self) -> Option<&EnemyComponents> {
        match &self.inner {
            EntityInner::Enemy(c) => Some(c),
            _ => None,
        }
    }

    /// Returns mutable enemy components if this is an enemy.
    #[must_use]
    pub fn as_enemy_mut(&mut self) -> Option<&mut EnemyComponents> {
        match &mut self.inner {
            EntityInner::Enemy(c) => Some(c),
            _ => None,
        }
    }

    /// Returns `true` if this entity follows the roaming motion policy.
    #[must_use]
    pub fn is_roaming(&self) -> bool {
        self.as_enemy().is_some_and(|e| e.roam.is_some())
    }
}

fn toward_zero(value: f32, step: f32) -> f32 {
    if value > 0.0 {
        (value - step).max(0.0)
    } else if value < 0.0 {
        (value + step).min(0.0)
    } else {
        value
    }
}
