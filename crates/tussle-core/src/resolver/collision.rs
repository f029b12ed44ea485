//! Collision handling: detection, position correction and kind responses.
//!
//! Each handler takes one acting entity and one target kind, scans every live
//! entity of that kind, and applies the matrix response for each one whose
//! box overlaps the actor's. The actor itself is always skipped by identity.
//!
//! # Processing Order
//!
//! 1. Snapshot the candidate IDs (target kind, actor excluded)
//! 2. For each candidate in ID order, re-read both boxes and test overlap;
//!    earlier corrections in the same pass are visible to later ones
//! 3. Apply position corrections and queue cues immediately
//! 4. Pickups are only recorded during the scan and transferred afterwards,
//!    so the world set is never mutated while it is being walked

use crate::arena::Arena;
use crate::effect::{Effect, HapticPulse};
use crate::entity::{EntityId, EntityKind, CONTAINER_CAPACITY};
use crate::geometry::{push_out, separate, Rect};

use super::dispatch::{self, Contact, Cues};

/// Strength of the rumble sent on player-player contact.
pub const CONTACT_RUMBLE_STRENGTH: u8 = 2;

/// Runs the `actor` handler against every live entity of `target_kind`.
///
/// Returns the number of contacts handled. Unknown actors and pairs without
/// a matrix entry handle nothing.
pub fn handle_collisions(arena: &mut Arena, actor: EntityId, target_kind: EntityKind) -> usize {
    let Some(actor_kind) = arena.kind_of(actor) else {
        return 0;
    };
    let Some(response) = dispatch::response(actor_kind, target_kind) else {
        return 0;
    };

    let candidates: Vec<EntityId> = arena
        .ids_of_kind(target_kind)
        .filter(|&id| id != actor)
        .collect();

    let mut pickups = Vec::new();
    let mut contacts = 0;

    for target in candidates {
        let (Some(actor_rect), Some(target_rect)) = (arena.rect_of(actor), arena.rect_of(target))
        else {
            continue;
        };
        if !actor_rect.overlaps(&target_rect) {
            continue;
        }

        match response.contact {
            Contact::PushApart => {
                let (a, t) = separate(actor_rect, target_rect);
                set_rect(arena, actor, a);
                set_rect(arena, target, t);
            }
            Contact::ActorYields => {
                set_rect(arena, actor, push_out(actor_rect, &target_rect));
            }
            Contact::TargetYields => {
                set_rect(arena, target, push_out(target_rect, &actor_rect));
            }
            Contact::Pickup => {
                if !has_room(arena, actor, pickups.len()) {
                    continue;
                }
                pickups.push(target);
            }
            Contact::Touch => {}
        }

        if response.contact.blocks_actor() {
            mark_collided(arena, actor);
        }
        if response.contact.blocks_target() {
            mark_collided(arena, target);
        }
        emit_cues(arena, actor, target, response.cues);
        contacts += 1;
    }

    for item in pickups {
        transfer_to_inventory(arena, actor, item);
    }

    contacts
}

/// Player handler: push apart from other players.
pub fn handle_player_collision(arena: &mut Arena, actor: EntityId) -> usize {
    handle_collisions(arena, actor, EntityKind::Player)
}

/// Item handler: players pick items up, items push each other apart.
pub fn handle_item_collision(arena: &mut Arena, actor: EntityId) -> usize {
    handle_collisions(arena, actor, EntityKind::Item)
}

/// Enemy handler: enemies push each other apart, obstacles shove enemies.
pub fn handle_enemy_collision(arena: &mut Arena, actor: EntityId) -> usize {
    handle_collisions(arena, actor, EntityKind::Enemy)
}

/// Obstacle handler: players are stopped by obstacles, obstacles separate.
pub fn handle_obstacle_collision(arena: &mut Arena, actor: EntityId) -> usize {
    handle_collisions(arena, actor, EntityKind::Obstacle)
}

/// Runs all four handlers for `actor` in a fixed order.
pub fn handle_all(arena: &mut Arena, actor: EntityId) -> usize {
    handle_player_collision(arena, actor)
        + handle_item_collision(arena, actor)
        + handle_enemy_collision(arena, actor)
        + handle_obstacle_collision(arena, actor)
}

fn set_rect(arena: &mut Arena, id: EntityId, rect: Rect) {
    if let Some(entity) = arena.get_mut(id) {
        entity.set_rect(rect);
    }
}

fn mark_collided(arena: &mut Arena, id: EntityId) {
    if let Some(entity) = arena.get_mut(id) {
        entity.set_collided(true);
    }
}

fn has_room(arena: &Arena, owner: EntityId, pending: usize) -> bool {
    arena
        .get(owner)
        .is_some_and(|e| e.inventory().len() + pending < CONTAINER_CAPACITY)
}

fn transfer_to_inventory(arena: &mut Arena, owner: EntityId, item: EntityId) {
    if !arena.contains(owner) {
        return;
    }
    let Some(entity) = arena.despawn(item) else {
        return;
    };
    tracing::debug!(owner = %owner, item = %item, name = entity.name(), "item picked up");
    if let Some(holder) = arena.get_mut(owner) {
        holder.inventory_mut().add(entity);
    }
}

fn emit_cues(arena: &mut Arena, actor: EntityId, target: EntityId, cues: Cues) {
    let Some(entity) = arena.get(actor) else {
        return;
    };

    let sound = (cues.contains(Cues::SOUND) && !entity.collision_sound().is_empty())
        .then(|| entity.collision_sound().clone());
    let controller = if cues.contains(Cues::HAPTIC) {
        entity.as_player().and_then(|p| p.controller)
    } else {
        None
    };

    if cues.contains(Cues::LOG) {
        tracing::debug!(
            actor = %actor,
            target = %target,
            kind = %entity.kind(),
            "collision"
        );
    }
    if let Some(sound) = sound {
        arena.push_effect(Effect::Sound {
            source: actor,
            sound,
        });
    }
    if let Some(controller) = controller {
        arena.push_effect(Effect::Rumble {
            source: actor,
            controller,
            pulse: HapticPulse::new(CONTACT_RUMBLE_STRENGTH),
        });
    }
}
