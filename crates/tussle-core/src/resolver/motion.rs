//! Motion model: roaming acceleration and velocity integration.
//!
//! Positions advance by the velocity each tick, truncated toward zero, so a
//! component below one unit leaves the box where it is. Non-roaming entities
//! are slowed by [`Entity::decelerate`] from the simulation loop.
//!
//! # Roaming
//!
//! A roaming agent carries a [`RoamState`](crate::entity::RoamState). When
//! its countdown reaches zero it picks a new axis at random (50/50) and the
//! countdown restarts at `roam_interval_ms`. Every tick it accelerates the
//! current axis toward `+roam_speed_cap`, leaving the other axis alone, and
//! the countdown drops by `tick_ms`.

use rand::Rng;

use crate::config::WorldConfig;
use crate::entity::Entity;
use crate::geometry::Axis;

/// Advances one entity's motion by a tick: roaming first, then integration.
pub fn update_motion<R: Rng + ?Sized>(entity: &mut Entity, rng: &mut R, config: &WorldConfig) {
    roam(entity, rng, config);
    entity.integrate_velocity();
}

/// Applies the roaming policy. Returns `false` for entities that do not roam.
pub fn roam<R: Rng + ?Sized>(entity: &mut Entity, rng: &mut R, config: &WorldConfig) -> bool {
    let Some(mut state) = entity.as_enemy().and_then(|e| e.roam) else {
        return false;
    };

    if state.remaining_ms == 0 {
        state.axis = if rng.gen_bool(0.5) {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        state.remaining_ms = config.roam_interval_ms;
        tracing::trace!(
            entity = %entity.id(),
            axis = ?state.axis,
            "roam axis picked"
        );
    }

    entity.accelerate_axis(state.axis, 1.0, config.roam_speed_cap);
    state.remaining_ms = state.remaining_ms.saturating_sub(config.tick_ms);

    if let Some(enemy) = entity.as_enemy_mut() {
        enemy.roam = Some(state);
    }
    true
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::entity::{
        EnemyComponents, EntityId, EntityInit, EntityInner, PlayerComponents, RoamState,
    };
    use crate::geometry::Rect;

    fn roamer() -> Entity {
        Entity::new(
            EntityId::new(0),
            EntityInit::new("wanderer", Rect::new(100, 100, 10, 10)),
            EntityInner::Enemy(EnemyComponents::roaming(0.0)),
        )
    }

    fn roam_state(entity: &Entity) -> RoamState {
        entity.as_enemy().and_then(|e| e.roam).unwrap()
    }

    mod integration_tests {
        use super::*;

        #[test]
        fn velocity_moves_box() {
            let mut entity = Entity::new(
                EntityId::new(0),
                EntityInit::new("p", Rect::new(10, 10, 5, 5)),
                EntityInner::Player(PlayerComponents::new(1)),
            );
            entity.set_velocity(Vec3::new(3.0, -2.0, 0.0));
            let mut rng = ChaCha8Rng::seed_from_u64(0);

            update_motion(&mut entity, &mut rng, &WorldConfig::default());
            assert_eq!(entity.rect(), Rect::new(13, 8, 5, 5));
        }

        #[test]
        fn fractional_velocity_truncates() {
            let mut entity = Entity::new(
                EntityId::new(0),
                EntityInit::new("p", Rect::new(10, 10, 5, 5)),
                EntityInner::Player(PlayerComponents::new(1)),
            );
            entity.set_velocity(Vec3::new(0.9, -1.7, 0.0));
            let mut rng = ChaCha8Rng::seed_from_u64(0);

            update_motion(&mut entity, &mut rng, &WorldConfig::default());
            assert_eq!(entity.rect(), Rect::new(10, 9, 5, 5));
        }

        #[test]
        fn non_roaming_entities_are_not_accelerated() {
            let mut entity = Entity::new(
                EntityId::new(0),
                EntityInit::new("e", Rect::new(0, 0, 5, 5)),
                EntityInner::Enemy(EnemyComponents::new(0.0)),
            );
            let mut rng = ChaCha8Rng::seed_from_u64(0);

            assert!(!roam(&mut entity, &mut rng, &WorldConfig::default()));
            assert_eq!(entity.velocity(), Vec3::ZERO);
        }
    }

    mod roam_tests {
        use super::*;

        #[test]
        fn first_update_picks_axis_and_starts_countdown() {
            let config = WorldConfig::default();
            let mut entity = roamer();
            let mut rng = ChaCha8Rng::seed_from_u64(1);

            assert!(roam(&mut entity, &mut rng, &config));
            let state = roam_state(&entity);
            assert_eq!(state.remaining_ms, config.roam_interval_ms - config.tick_ms);

            let v = entity.velocity();
            let (moved, other) = match state.axis {
                Axis::Horizontal => (v.x, v.y),
                Axis::Vertical => (v.y, v.x),
            };
            assert!((moved - entity.acceleration()).abs() < f32::EPSILON);
            assert_eq!(other, 0.0);
        }

        #[test]
        fn speed_is_capped() {
            let config = WorldConfig::default();
            let mut entity = roamer();
            let mut rng = ChaCha8Rng::seed_from_u64(2);

            for _ in 0..20 {
                roam(&mut entity, &mut rng, &config);
            }
            let v = entity.velocity();
            assert!(v.x.abs() <= config.roam_speed_cap);
            assert!(v.y.abs() <= config.roam_speed_cap);
            assert!((v.x.abs() - config.roam_speed_cap).abs() < f32::EPSILON
                || (v.y.abs() - config.roam_speed_cap).abs() < f32::EPSILON);
        }

        #[test]
        fn roaming_accelerates_toward_positive_cap() {
            let config = WorldConfig::default();
            for seed in 0..20 {
                let mut entity = roamer();
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                for _ in 0..10 {
                    update_motion(&mut entity, &mut rng, &config);
                }
                let v = entity.velocity();
                assert!(v.x >= 0.0 && v.y >= 0.0, "seed {seed}: {v:?}");
                assert!(
                    (v.x - config.roam_speed_cap).abs() < f32::EPSILON
                        || (v.y - config.roam_speed_cap).abs() < f32::EPSILON,
                    "seed {seed}: {v:?}"
                );
            }
        }

        #[test]
        fn axis_is_kept_until_interval_elapses() {
            let config = WorldConfig {
                tick_ms: 500,
                roam_interval_ms: 2000,
                ..WorldConfig::default()
            };
            let mut entity = roamer();
            let mut rng = ChaCha8Rng::seed_from_u64(3);

            roam(&mut entity, &mut rng, &config);
            let first = roam_state(&entity);
            for expected in [1000, 500, 0] {
                roam(&mut entity, &mut rng, &config);
                let state = roam_state(&entity);
                assert_eq!(state.axis, first.axis);
                assert_eq!(state.remaining_ms, expected);
            }

            roam(&mut entity, &mut rng, &config);
            assert_eq!(roam_state(&entity).remaining_ms, 1500);
        }

        #[test]
        fn same_seed_same_choices() {
            let config = WorldConfig::default();
            let mut a = roamer();
            let mut b = roamer();
            let mut rng_a = ChaCha8Rng::seed_from_u64(42);
            let mut rng_b = ChaCha8Rng::seed_from_u64(42);

            for _ in 0..500 {
                update_motion(&mut a, &mut rng_a, &config);
                update_motion(&mut b, &mut rng_b, &config);
            }
            assert_eq!(a.rect(), b.rect());
            assert_eq!(roam_state(&a), roam_state(&b));
        }
    }
}
