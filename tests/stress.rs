mod common;

use common::{tree, Naive};
use rand::prelude::*;
use treedist::QueryEngine;

fn check_random_batch(edges: Vec<(usize, i64)>, rounds: usize, rng: &mut SmallRng) {
    let mut engine = QueryEngine::new(&tree(&edges)).unwrap();
    let mut naive = Naive::new(&edges);
    let len = naive.len();

    for _ in 0..rounds {
        if rng.gen_bool(0.3) {
            let x = rng.gen_range(2..=len);
            let w = rng.gen_range(-1_000_000..1_000_000);
            engine.update(x, w).unwrap();
            naive.update(x, w);
        } else {
            let u = rng.gen_range(1..=len);
            let v = rng.gen_range(1..=len);
            assert_eq!(engine.distance(u, v).unwrap(), naive.distance(u, v), "{} {}", u, v);
        }
    }
}

#[test]
fn random_trees_match_naive() {
    let mut rng = SmallRng::seed_from_u64(0x7ee);
    for _ in 0..50 {
        let n = rng.gen_range(2..300);
        let edges = (2..=n)
            .map(|node| (rng.gen_range(1..node), rng.gen_range(-100..100)))
            .collect();
        check_random_batch(edges, 500, &mut rng);
    }
}

#[test]
fn deep_path() {
    const N: usize = 100_000;
    let mut rng = SmallRng::seed_from_u64(1);
    let edges: Vec<_> = (1..N).map(|p| (p, rng.gen_range(0..10))).collect();
    let engine = QueryEngine::new(&tree(&edges)).unwrap();
    let total: i64 = edges.iter().map(|&(_, w)| w).sum();
    assert_eq!(engine.distance(1, N).unwrap(), total);
    assert_eq!(engine.lca(N, N / 2).unwrap(), N / 2);

    // shallow queries only, the naive walk is linear in depth
    check_random_batch(edges[..2_000].to_vec(), 2_000, &mut rng);
}

#[test]
fn wide_star() {
    const N: usize = 50_000;
    let mut rng = SmallRng::seed_from_u64(2);
    let edges: Vec<_> = (2..=N).map(|_| (1, rng.gen_range(-50..50))).collect();
    check_random_batch(edges, 10_000, &mut rng);
}
