//! Per-variant component structs.
//!
//! All entities share the base data in [`Entity`](super::Entity); these
//! structs hold only what a variant adds on top of it.

use serde::{Deserialize, Serialize};

use crate::effect::ControllerHandle;
use crate::geometry::Axis;

/// Reputation every player starts with.
pub const INITIAL_REPUTATION: i32 = 50;

/// Highest reputation a player can hold.
pub const MAX_REPUTATION: i32 = 100;

/// Effect applied to the owner when an item, skill or note is used.
///
/// `None` is the default hook and does nothing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseEffect {
    /// No-op
    #[default]
    None,
    /// Restore health to the owner
    Heal(i32),
    /// Add to the owner's score
    Score(i32),
}

/// Components for Player entities.
///
/// Players persist across scene regeneration and may be bound to an input
/// controller for haptic feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerComponents {
    /// Player slot number (1 for the first player, 2 for the second, ...)
    pub number: u32,
    /// Standing with NPCs, kept within `0..=MAX_REPUTATION`
    pub reputation: i32,
    /// Set once the player has met the win condition
    pub has_won: bool,
    /// Bound controller, if any
    pub controller: Option<ControllerHandle>,
}

impl PlayerComponents {
    /// Creates components for the given player slot with starting reputation.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self {
            number,
            reputation: INITIAL_REPUTATION,
            has_won: false,
            controller: None,
        }
    }

    /// Shifts reputation by `delta`, saturating at the valid range.
    pub fn adjust_reputation(&mut self, delta: i32) {
        self.reputation = self
            .reputation
            .saturating_add(delta)
            .clamp(0, MAX_REPUTATION);
    }

    /// Marks the win condition as met. Idempotent.
    pub fn declare_win(&mut self) {
        self.has_won = true;
    }

    /// Binds (or with `None`, unbinds) the controller used for rumble.
    pub fn bind_controller(&mut self, controller: Option<ControllerHandle>) {
        self.controller = controller;
    }
}

impl Default for PlayerComponents {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Countdown state for an autonomously roaming agent.
///
/// Every `roam_interval_ms` the agent picks a new axis to accelerate along,
/// always toward the positive speed cap. The countdown is advanced by the fixed tick delta, never
/// by wall-clock time. A fresh state is due immediately.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoamState {
    /// Axis currently being accelerated
    pub axis: Axis,
    /// Milliseconds until the next axis pick
    pub remaining_ms: u32,
}

impl Default for RoamState {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            remaining_ms: 0,
        }
    }
}

/// Components for Enemy entities, hostile or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyComponents {
    /// Temperament used by trade and dialogue logic
    pub personality: f32,
    /// Present for agents that wander on their own
    pub roam: Option<RoamState>,
}

impl EnemyComponents {
    /// A stationary (externally driven) agent.
    #[must_use]
    pub const fn new(personality: f32) -> Self {
        Self {
            personality,
            roam: None,
        }
    }

    /// An agent that wanders on its own.
    #[must_use]
    pub fn roaming(personality: f32) -> Self {
        Self {
            personality,
            roam: Some(RoamState::default()),
        }
    }
}

/// Components for Item entities (pickups and notes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemComponents {
    /// Applied to the owner on use
    pub effect: UseEffect,
}

/// Components for Obstacle entities.
///
/// Obstacles are pure scenery; their behaviour lives entirely in the
/// collision matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleComponents {}

/// Components for Skill entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillComponents {
    /// Applied to the owner on every use
    pub effect: UseEffect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_with_neutral_reputation() {
        let player = PlayerComponents::new(2);
        assert_eq!(player.number, 2);
        assert_eq!(player.reputation, INITIAL_REPUTATION);
        assert!(!player.has_won);
        assert!(player.controller.is_none());
    }

    #[test]
    fn reputation_saturates() {
        let mut player = PlayerComponents::default();
        player.adjust_reputation(80);
        assert_eq!(player.reputation, MAX_REPUTATION);
        player.adjust_reputation(-500);
        assert_eq!(player.reputation, 0);
        player.adjust_reputation(i32::MAX);
        assert_eq!(player.reputation, MAX_REPUTATION);
    }

    #[test]
    fn win_and_controller_binding() {
        let mut player = PlayerComponents::new(1);
        player.declare_win();
        player.declare_win();
        assert!(player.has_won);

        player.bind_controller(Some(ControllerHandle::new(3)));
        assert_eq!(player.controller, Some(ControllerHandle::new(3)));
        player.bind_controller(None);
        assert!(player.controller.is_none());
    }

    #[test]
    fn roaming_enemy_is_due_immediately() {
        let enemy = EnemyComponents::roaming(0.5);
        assert_eq!(enemy.roam.map(|r| r.remaining_ms), Some(0));
        assert!(EnemyComponents::new(0.5).roam.is_none());
    }

    #[test]
    fn use_effect_defaults_to_none() {
        assert_eq!(ItemComponents::default().effect, UseEffect::None);
        assert_eq!(SkillComponents::default().effect, UseEffect::None);
    }
}
