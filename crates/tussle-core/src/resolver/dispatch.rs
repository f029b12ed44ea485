//! Static kind-pair collision matrix.
//!
//! Rows are the acting entity's kind, columns the kind it collides with.
//! `None` means the pair is ignored by that actor (it may still be handled
//! from the other side).
//!
//! | actor \ target | Player | Enemy | Item | Obstacle | Skill |
//! |---|---|---|---|---|---|
//! | Player   | push apart, rumble | - | pick up, sound | actor yields, sound | - |
//! | Enemy    | touch, sound | push apart, log | - | - | - |
//! | Item     | touch, sound | - | push apart | - | - |
//! | Obstacle | - | target yields | target yields, sound | push apart, sound | - |
//! | Skill    | - | - | - | - | - |
//!
//! Obstacles never yield to a different kind: against players the player's
//! own row moves the player, against enemies and items the obstacle's row
//! moves the other party.

use bitflags::bitflags;

use crate::entity::EntityKind;

/// How positions (and ownership) change on contact.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Contact {
    /// Both move apart, each by half the penetration.
    PushApart,
    /// The actor moves out by the full penetration; the target is fixed.
    ActorYields,
    /// The target moves out by the full penetration; the actor is fixed.
    TargetYields,
    /// The target leaves the world and enters the actor's inventory.
    Pickup,
    /// No positional change.
    Touch,
}

impl Contact {
    /// Returns `true` if the actor was physically blocked by the contact.
    #[must_use]
    pub const fn blocks_actor(self) -> bool {
        matches!(self, Self::PushApart | Self::ActorYields)
    }

    /// Returns `true` if the target was physically blocked by the contact.
    #[must_use]
    pub const fn blocks_target(self) -> bool {
        matches!(self, Self::PushApart | Self::TargetYields)
    }
}

bitflags! {
    /// Feedback emitted alongside a contact.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Cues: u8 {
        /// Play the actor's collision sound
        const SOUND = 1 << 0;
        /// Pulse the actor's controller
        const HAPTIC = 1 << 1;
        /// Record the contact in the log
        const LOG = 1 << 2;
    }
}

/// Entry of the collision matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Response {
    /// Positional / ownership outcome
    pub contact: Contact,
    /// Feedback to emit
    pub cues: Cues,
}

const fn respond(contact: Contact, cues: Cues) -> Option<Response> {
    Some(Response { contact, cues })
}

const NONE: Option<Response> = None;

/// The matrix, indexed by `[actor.index()][target.index()]`.
pub const MATRIX: [[Option<Response>; EntityKind::COUNT]; EntityKind::COUNT] = [
    // Player
    [
        respond(Contact::PushApart, Cues::HAPTIC),
        NONE,
        respond(Contact::Pickup, Cues::SOUND),
        respond(Contact::ActorYields, Cues::SOUND),
        NONE,
    ],
    // Enemy
    [
        respond(Contact::Touch, Cues::SOUND),
        respond(Contact::PushApart, Cues::LOG),
        NONE,
        NONE,
        NONE,
    ],
    // Item
    [
        respond(Contact::Touch, Cues::SOUND),
        NONE,
        respond(Contact::PushApart, Cues::empty()),
        NONE,
        NONE,
    ],
    // Obstacle
    [
        NONE,
        respond(Contact::TargetYields, Cues::empty()),
        respond(Contact::TargetYields, Cues::SOUND),
        respond(Contact::PushApart, Cues::SOUND),
        NONE,
    ],
    // Skill
    [NONE, NONE, NONE, NONE, NONE],
];

/// Looks up how `actor` responds to touching `target`.
#[must_use]
pub const fn response(actor: EntityKind, target: EntityKind) -> Option<Response> {
    MATRIX[actor.index()][target.index()]
}
