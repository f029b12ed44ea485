//! Bounded containers for inventory, skills and notes.
//!
//! A container owns the entities placed in it. Moving an entity into a
//! container is how it leaves the world: the arena despawns it and hands the
//! value over, so an entity is never in both places.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityId, KindSet};

/// Maximum number of entries in any container.
pub const CONTAINER_CAPACITY: usize = 10;

/// A fixed-capacity list of owned entities filtered by kind.
///
/// Additions past capacity, or of a kind the container does not accept, are
/// dropped silently. Lookup and removal are linear scans by [`EntityId`].
///
/// # Example
///
/// ```
/// use tussle_core::entity::{Container, Entity, EntityId, EntityInit, EntityInner, KindSet};
/// use tussle_core::entity::components::ItemComponents;
/// use tussle_core::geometry::Rect;
///
/// let mut bag = Container::new(KindSet::ITEM);
/// let coin = Entity::new(
///     EntityId::new(7),
///     EntityInit::new("coin", Rect::new(0, 0, 4, 4)),
///     EntityInner::Item(ItemComponents::default()),
/// );
/// bag.add(coin);
///
/// assert!(bag.contains(EntityId::new(7)));
/// assert!(bag.remove(EntityId::new(7)).is_some());
/// assert!(bag.remove(EntityId::new(7)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ContainerData")]
pub struct Container {
    accepts: KindSet,
    entries: Vec<Entity>,
}

/// Wire form of a [`Container`]. Entries go back through [`Container::add`]
/// so capacity and the kind filter hold for deserialized data too.
#[derive(Deserialize)]
struct ContainerData {
    accepts: KindSet,
    entries: Vec<Entity>,
}

impl From<ContainerData> for Container {
    fn from(data: ContainerData) -> Self {
        let mut container = Self::new(data.accepts);
        for entry in data.entries {
            container.add(entry);
        }
        container
    }
}

impl Container {
    /// Creates an empty container accepting the given kinds.
    #[must_use]
    pub fn new(accepts: KindSet) -> Self {
        Self {
            accepts,
            entries: Vec::with_capacity(CONTAINER_CAPACITY),
        }
    }

    /// Kinds this container accepts.
    #[must_use]
    pub const fn accepts(&self) -> KindSet {
        self.accepts
    }

    /// Returns `true` if `entity` would be stored by [`add`](Self::add).
    #[must_use]
    pub fn can_accept(&self, entity: &Entity) -> bool {
        !self.is_full() && self.accepts.contains_kind(entity.kind())
    }

    /// Stores `entity`, or drops it if the container is full or does not
    /// accept its kind.
    pub fn add(&mut self, entity: Entity) {
        if !self.can_accept(&entity) {
            tracing::trace!(
                entity = %entity.id(),
                kind = %entity.kind(),
                len = self.entries.len(),
                "container rejected entity"
            );
            return;
        }
        self.entries.push(entity);
    }

    /// Returns `true` if an entity with this id is stored.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    /// Returns the stored entity with this id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Removes and returns the entity with this id; no-op if absent.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when no further entity can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= CONTAINER_CAPACITY
    }

    /// Iterates stored entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entries.iter()
    }
}
