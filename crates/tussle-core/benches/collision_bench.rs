use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tussle_core::{
    Arena, EnemyComponents, EntityInit, EntityInner, ItemComponents, ObstacleComponents,
    PlayerComponents, Rect, Simulation, WorldConfig,
};

fn crowded_simulation(side: i32) -> Simulation {
    let mut sim = Simulation::new(WorldConfig {
        seed: 7,
        ..WorldConfig::with_bounds(1024, 768)
    })
    .expect("bench config is valid");
    let arena = sim.arena_mut();
    for row in 0..side {
        for col in 0..side {
            arena.spawn(
                EntityInit::new("roamer", Rect::new(col * 20, row * 20, 16, 16)),
                EntityInner::Enemy(EnemyComponents::roaming(0.0)),
            );
        }
    }
    for i in 0..8 {
        arena.spawn(
            EntityInit::new("rock", Rect::new(600 + i * 40, 300, 32, 32)),
            EntityInner::Obstacle(ObstacleComponents::default()),
        );
    }
    arena.spawn(
        EntityInit::new("hero", Rect::new(500, 500, 16, 16)),
        EntityInner::Player(PlayerComponents::new(1)),
    );
    sim
}

fn bench_step_crowded(c: &mut Criterion) {
    // 20x20 grid of roamers plus obstacles and a player
    let mut sim = crowded_simulation(20);

    c.bench_function("step_crowded", |b| {
        b.iter(|| {
            sim.step();
            black_box(sim.arena_mut().drain_effects());
        })
    });
}

fn bench_item_pickup_scan(c: &mut Criterion) {
    // Fresh arena per iteration so there is always something to pick up
    c.bench_function("item_pickup_scan", |b| {
        b.iter(|| {
            let mut arena = Arena::new();
            let hero = arena.spawn(
                EntityInit::new("hero", Rect::new(0, 0, 64, 64)),
                EntityInner::Player(PlayerComponents::new(1)),
            );
            for i in 0..200 {
                arena.spawn(
                    EntityInit::new("coin", Rect::new(i * 6, 0, 4, 4)),
                    EntityInner::Item(ItemComponents::default()),
                );
            }
            black_box(tussle_core::resolver::handle_item_collision(&mut arena, hero))
        })
    });
}

fn bench_query_overlapping(c: &mut Criterion) {
    let sim = crowded_simulation(20);
    let window = Rect::new(100, 100, 50, 50);

    c.bench_function("query_overlapping", |b| {
        b.iter(|| black_box(sim.arena().query_overlapping(black_box(&window), None)))
    });
}

criterion_group!(
    benches,
    bench_step_crowded,
    bench_item_pickup_scan,
    bench_query_overlapping
);
criterion_main!(benches);
