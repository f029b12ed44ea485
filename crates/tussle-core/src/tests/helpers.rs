//! Test helper functions for setting up simulations and entities.
//!
//! This module provides factory functions and setup utilities that make
//! writing tests more ergonomic and consistent.

use glam::Vec3;

use crate::arena::Arena;
use crate::config::WorldConfig;
use crate::entity::{
    EnemyComponents, EntityId, EntityInit, EntityInner, ItemComponents, ObstacleComponents,
    PlayerComponents,
};
use crate::geometry::Rect;
use crate::simulation::Simulation;

/// Sound every helper-spawned entity plays on contact.
pub const TEST_SOUND: &str = "bump.wav";

// =============================================================================
// Test Scenario Setup
// =============================================================================

/// Creates a simulation over a 640x480 world with the given seed.
pub fn test_simulation(seed: u64) -> Simulation {
    Simulation::new(WorldConfig {
        seed,
        ..WorldConfig::with_bounds(640, 480)
    })
    .unwrap()
}

/// Populates a mixed scene: two players, a roaming enemy, a stationary
/// enemy, three items and two obstacles, spread across the world.
///
/// Returns the IDs in spawn order.
pub fn setup_mixed_scene(arena: &mut Arena) -> Vec<EntityId> {
    vec![
        spawn_player(arena, Rect::new(100, 100, 16, 16), 1),
        spawn_player(arena, Rect::new(400, 300, 16, 16), 2),
        spawn_roamer(arena, Rect::new(320, 240, 16, 16)),
        spawn_enemy(arena, Rect::new(200, 50, 16, 16)),
        spawn_item(arena, Rect::new(110, 104, 8, 8)),
        spawn_item(arena, Rect::new(500, 400, 8, 8)),
        spawn_item(arena, Rect::new(50, 420, 8, 8)),
        spawn_obstacle(arena, Rect::new(300, 100, 40, 40)),
        spawn_obstacle(arena, Rect::new(0, 200, 20, 80)),
    ]
}

/// Fills the arena with a grid of roaming enemies, `n` per side.
pub fn setup_crowd(arena: &mut Arena, n: i32) -> Vec<EntityId> {
    let mut ids = Vec::new();
    for row in 0..n {
        for col in 0..n {
            ids.push(spawn_roamer(arena, Rect::new(col * 12, row * 12, 14, 14)));
        }
    }
    ids
}

// =============================================================================
// Entity Factory Functions
// =============================================================================

fn init(name: &str, rect: Rect) -> EntityInit {
    EntityInit::new(name, rect).with_sound(TEST_SOUND)
}

/// Spawns a player in the given slot.
pub fn spawn_player(arena: &mut Arena, rect: Rect, number: u32) -> EntityId {
    arena.spawn(
        init("player", rect),
        EntityInner::Player(PlayerComponents::new(number)),
    )
}

/// Spawns an externally driven enemy.
pub fn spawn_enemy(arena: &mut Arena, rect: Rect) -> EntityId {
    arena.spawn(
        init("enemy", rect),
        EntityInner::Enemy(EnemyComponents::new(0.0)),
    )
}

/// Spawns an enemy that wanders on its own.
pub fn spawn_roamer(arena: &mut Arena, rect: Rect) -> EntityId {
    arena.spawn(
        init("roamer", rect),
        EntityInner::Enemy(EnemyComponents::roaming(0.0)),
    )
}

/// Spawns an item with no use effect.
pub fn spawn_item(arena: &mut Arena, rect: Rect) -> EntityId {
    arena.spawn(
        init("item", rect),
        EntityInner::Item(ItemComponents::default()),
    )
}

/// Spawns an obstacle.
pub fn spawn_obstacle(arena: &mut Arena, rect: Rect) -> EntityId {
    arena.spawn(
        init("obstacle", rect),
        EntityInner::Obstacle(ObstacleComponents::default()),
    )
}

// =============================================================================
// State Access Functions
// =============================================================================

/// Sets the velocity of an entity. Does nothing for unknown IDs.
pub fn set_velocity(arena: &mut Arena, id: EntityId, x: f32, y: f32) {
    if let Some(entity) = arena.get_mut(id) {
        entity.set_velocity(Vec3::new(x, y, 0.0));
    }
}

/// Box of every live entity, in ID order.
pub fn snapshot_rects(arena: &Arena) -> Vec<(EntityId, Rect)> {
    arena
        .entities_sorted()
        .map(|e| (e.id(), e.rect()))
        .collect()
}

/// Number of items in a player's inventory, or 0 if absent.
pub fn inventory_len(arena: &Arena, id: EntityId) -> usize {
    arena.get(id).map_or(0, |e| e.inventory().len())
}
