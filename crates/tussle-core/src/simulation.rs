//! Simulation module: the fixed-tick driver.
//!
//! One [`Simulation::step`] advances every live entity by a tick:
//!
//! 1. **RESET**: clear every entity's blocked flag
//! 2. **UPDATE**: for each entity in ID order, run its motion (roaming,
//!    integration, deceleration), the four collision handlers with it as the
//!    actor, and the world clamp
//! 3. **SETTLE**: clamp every box again, since later actors can push earlier
//!    ones past an edge
//! 4. **ADVANCE**: bump the tick counter
//!
//! Entities removed during the tick (picked-up items) are skipped when their
//! turn comes.
//!
//! # Determinism
//!
//! - Entities are visited in ID order (via `BTreeMap`)
//! - Roaming draws from a `ChaCha8Rng` seeded from [`WorldConfig::seed`]
//! - The tick delta is fixed; wall-clock time is never read
//!
//! # Example
//!
//! ```
//! use tussle_core::config::WorldConfig;
//! use tussle_core::entity::{EntityInit, EntityInner, ItemComponents, PlayerComponents};
//! use tussle_core::geometry::Rect;
//! use tussle_core::simulation::Simulation;
//!
//! let mut sim = Simulation::new(WorldConfig::with_bounds(640, 480))?;
//!
//! let hero = sim.arena_mut().spawn(
//!     EntityInit::new("hero", Rect::new(100, 100, 16, 16)),
//!     EntityInner::Player(PlayerComponents::new(1)),
//! );
//! let coin = sim.arena_mut().spawn(
//!     EntityInit::new("coin", Rect::new(110, 100, 8, 8)),
//!     EntityInner::Item(ItemComponents::default()),
//! );
//!
//! sim.step();
//!
//! assert_eq!(sim.tick(), 1);
//! assert!(!sim.arena().contains(coin));
//! assert!(sim.arena().get(hero).unwrap().inventory().contains(coin));
//! # Ok::<(), tussle_core::error::ConfigError>(())
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::arena::Arena;
use crate::config::WorldConfig;
use crate::entity::EntityId;
use crate::error::ConfigError;
use crate::resolver::{collision, motion};

/// Owns the world, its configuration and the random stream.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Live entity set.
    arena: Arena,
    /// Bounds and timing.
    config: WorldConfig,
    /// Random stream for roaming choices.
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates an empty simulation at tick 0, seeding the RNG from
    /// `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`WorldConfig::validate`] if the
    /// configuration is unusable.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            arena: Arena::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        })
    }

    /// Returns a reference to the world.
    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Returns a mutable reference to the world, for populating it.
    #[must_use]
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Returns the current tick.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.arena.current_tick()
    }

    /// Drops every non-player entity so the populator can build a new scene.
    ///
    /// Returns the number of entities removed.
    pub fn regenerate_scene(&mut self) -> usize {
        self.arena.clear_scene()
    }

    /// Executes one tick.
    pub fn step(&mut self) {
        self.arena.clear_contact_flags();

        let ids: Vec<EntityId> = self.arena.entity_ids_sorted().collect();
        for id in ids {
            self.update_entity(id);
        }

        let (width, height) = (self.config.width, self.config.height);
        for entity in self.arena.entities_sorted_mut() {
            entity.clamp_to(width, height);
        }

        self.arena.advance_tick();
    }

    /// Runs `step` `n` times.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    fn update_entity(&mut self, id: EntityId) {
        let Some(entity) = self.arena.get_mut(id) else {
            return;
        };
        motion::update_motion(entity, &mut self.rng, &self.config);
        if !entity.is_roaming() {
            let step = entity.deceleration();
            entity.decelerate(step);
        }

        collision::handle_all(&mut self.arena, id);

        if let Some(entity) = self.arena.get_mut(id) {
            entity.clamp_to(self.config.width, self.config.height);
        }
    }
}
