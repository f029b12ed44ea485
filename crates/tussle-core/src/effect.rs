//! Side effects requested by collision responses.
//!
//! Handlers never call audio or controller code directly. They append
//! [`Effect`]s to the arena, and the frontend hands them to an
//! [`EffectSink`] once per frame. Delivery is fire-and-forget: nothing in the
//! simulation waits on it or reads a result back.
//!
//! # Example
//!
//! ```
//! use tussle_core::effect::{Effect, EffectSink, HapticPulse};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl EffectSink for Log {
//!     fn deliver(&mut self, effect: &Effect) {
//!         self.0.push(format!("{effect:?}"));
//!     }
//! }
//!
//! assert_eq!(HapticPulse::new(9).strength(), HapticPulse::MAX_STRENGTH);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assets::AssetId;
use crate::entity::EntityId;

/// Handle to an input controller bound to a player.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerHandle(u32);

impl ControllerHandle {
    /// Wraps a collaborator-provided controller index.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw controller index.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ControllerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Controller({})", self.0)
    }
}

/// A rumble request: strength level 1 to 4, always 500 ms long.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HapticPulse {
    strength: u8,
}

impl HapticPulse {
    /// Weakest level.
    pub const MIN_STRENGTH: u8 = 1;
    /// Strongest level.
    pub const MAX_STRENGTH: u8 = 4;
    /// Pulse length in milliseconds, the same for every level.
    pub const DURATION_MS: u32 = 500;

    /// Creates a pulse, clamping `strength` into `1..=4`.
    #[must_use]
    pub fn new(strength: u8) -> Self {
        Self {
            strength: strength.clamp(Self::MIN_STRENGTH, Self::MAX_STRENGTH),
        }
    }

    /// Level in `1..=4`.
    #[must_use]
    pub const fn strength(self) -> u8 {
        self.strength
    }

    /// Pulse length in milliseconds.
    #[must_use]
    pub const fn duration_ms(self) -> u32 {
        Self::DURATION_MS
    }

    /// Motor intensity in `0.25..=1.0`.
    #[must_use]
    pub fn intensity(self) -> f32 {
        f32::from(self.strength) / f32::from(Self::MAX_STRENGTH)
    }
}

/// A side effect emitted during collision handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Play a sound on behalf of an entity.
    Sound {
        /// Entity whose response triggered the sound
        source: EntityId,
        /// Sound to play
        sound: AssetId,
    },
    /// Pulse a player's controller.
    Rumble {
        /// Player whose controller should rumble
        source: EntityId,
        /// Bound controller
        controller: ControllerHandle,
        /// Strength and duration
        pulse: HapticPulse,
    },
}

impl Effect {
    /// Entity that caused the effect.
    #[must_use]
    pub const fn source(&self) -> EntityId {
        match self {
            Self::Sound { source, .. } | Self::Rumble { source, .. } => *source,
        }
    }
}

/// Receiver for effects, implemented by the audio/input frontend.
///
/// Implementations must not block; the simulation does not depend on the
/// outcome of delivery.
pub trait EffectSink {
    /// Handles one effect.
    fn deliver(&mut self, effect: &Effect);
}

impl EffectSink for Vec<Effect> {
    fn deliver(&mut self, effect: &Effect) {
        self.push(effect.clone());
    }
}
