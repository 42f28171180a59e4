//! Hunt benchmarks.
//!
//! Run with: `cargo bench -p haunt-core`
//!
//! These benchmarks measure:
//! - Full unpaced hunts with growing boredom limits
//! - Single-thread actor ticks
//! - Evidence collection into the shared pool
//! - Paired room lock acquisition

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use haunt_core::{
    lock_pair, EvidenceKind, EvidenceList, Ghost, GhostClass, House, Hunt, HuntRules, Hunter,
    HunterId, NullSink, Roster,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn party() -> Roster {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    Roster::deal(&["Ray", "Egon", "Peter", "Winston"], &mut rng).unwrap()
}

fn bench_full_hunt(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_hunt");
    group.sample_size(20);

    let roster = party();
    for boredom_max in [25u32, 50, 100] {
        group.bench_with_input(
            BenchmarkId::new("unpaced", boredom_max),
            &boredom_max,
            |b, &boredom_max| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed += 1;
                    let house = Arc::new(House::build().unwrap());
                    let hunt = Hunt::new(
                        house,
                        &roster,
                        None,
                        HuntRules::unpaced(boredom_max, 10),
                        seed,
                        Arc::new(NullSink),
                    )
                    .unwrap();
                    black_box(hunt.run().unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_ghost_tick(c: &mut Criterion) {
    let house = Arc::new(House::build().unwrap());
    let room = house.room_by_name("Kitchen").unwrap().id();
    let mut ghost = Ghost::new(
        Arc::clone(&house),
        GhostClass::Banshee,
        room,
        HuntRules::unpaced(u32::MAX, 10),
        ChaCha20Rng::seed_from_u64(7),
        Arc::new(NullSink),
    )
    .unwrap();

    c.bench_function("ghost_tick", |b| {
        b.iter(|| black_box(ghost.tick().unwrap()));
    });
}

fn bench_collect_evidence(c: &mut Criterion) {
    let house = Arc::new(House::build().unwrap());
    let hunter = Hunter::new(
        HunterId(1),
        "Ray",
        EvidenceKind::Emf,
        Arc::clone(&house),
        Arc::new(EvidenceList::from_kinds(GhostClass::Banshee.evidence())),
        HuntRules::unpaced(100, 10),
        ChaCha20Rng::seed_from_u64(3),
        Arc::new(NullSink),
    )
    .unwrap();
    let van = house.room(house.entry());

    c.bench_function("collect_evidence", |b| {
        b.iter(|| {
            van.state().lock().unwrap().evidence.append(EvidenceKind::Emf);
            black_box(hunter.collect_evidence().unwrap())
        });
    });
}

fn bench_lock_pair(c: &mut Criterion) {
    let house = House::build().unwrap();
    let van = house.room(house.entry());
    let hallway = house.room_by_name("Hallway").unwrap();

    c.bench_function("lock_pair_rooms", |b| {
        b.iter(|| {
            let (a, h) = lock_pair(hallway.state(), van.state()).unwrap();
            black_box((a.has_ghost(), h.has_hunters()))
        });
    });
}

criterion_group!(
    benches,
    bench_full_hunt,
    bench_ghost_tick,
    bench_collect_evidence,
    bench_lock_pair
);
criterion_main!(benches);
