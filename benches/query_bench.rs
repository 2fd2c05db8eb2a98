//! Benchmark for `nearest`, `k_nearest` and `ball` performance
//!
//! Builds a `PointBspTree` over 1M uniformly distributed points in a
//! 100x100x100 cube and times each query kind with fixed seeds.

use pointbsp::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

fn random_point<R: Rng>(rng: &mut R) -> Point3 {
    [
        rng.random_range(0.0..100.0),
        rng.random_range(0.0..100.0),
        rng.random_range(0.0..100.0),
    ]
}

/// Benchmark nearest neighbor queries
fn bench_nearest(tree: &PointBspTree, queries: &[Point3]) {
    let mut leaf_tests = 0;
    let start = Instant::now();

    for &point in queries {
        if let Ok(nearest) = tree.nearest(point) {
            leaf_tests += nearest.leaf_tests;
        }
    }

    let elapsed = start.elapsed();
    println!(
        "{} nearest searches: {}ms ({:.1} leaves/query)",
        queries.len(),
        elapsed.as_millis(),
        leaf_tests as f64 / queries.len() as f64
    );
}

/// Benchmark K-nearest neighbor queries
fn bench_neighbors(tree: &PointBspTree, queries: &[Point3], k: usize) {
    let mut leaf_tests = 0;
    let start = Instant::now();

    for &point in queries {
        if let Ok(knn) = tree.k_nearest(point, k) {
            leaf_tests += knn.leaf_tests;
        }
    }

    let elapsed = start.elapsed();
    println!(
        "{} searches of {} neighbors: {}ms ({:.1} leaves/query)",
        queries.len(),
        k,
        elapsed.as_millis(),
        leaf_tests as f64 / queries.len() as f64
    );
}

/// Benchmark ball queries, reusing one result vector
fn bench_ball(tree: &PointBspTree, queries: &[Point3], radius: f64) {
    let mut results = Vec::new();
    let mut found = 0;
    let start = Instant::now();

    for &point in queries {
        results.clear();
        if tree.ball_into(point, radius, &mut results).is_ok() {
            found += results.len();
        }
    }

    let elapsed = start.elapsed();
    println!(
        "{} ball searches r={}: {}ms ({:.1} points/query)",
        queries.len(),
        radius,
        elapsed.as_millis(),
        found as f64 / queries.len() as f64
    );
}

fn main() {
    let num_items = 1_000_000;
    let num_tests = 1_000;

    let mut rng = rand::rngs::StdRng::seed_from_u64(95756739);
    let cloud: PointCloud = (0..num_items).map(|_| random_point(&mut rng)).collect();
    let queries: Vec<Point3> = (0..num_tests).map(|_| random_point(&mut rng)).collect();

    for max_leaf_size in [4, 10, 32] {
        let params = BuildParams::default().with_max_leaf_size(max_leaf_size);
        let start = Instant::now();
        let tree = match PointBspTree::from_points(&cloud, params) {
            Ok(tree) => tree,
            Err(err) => {
                eprintln!("build failed: {err}");
                return;
            }
        };
        println!(
            "\nindex {} points (leaf size {}): {}ms, {} nodes, depth {}",
            num_items,
            max_leaf_size,
            start.elapsed().as_millis(),
            tree.node_count(),
            tree.depth()
        );

        bench_nearest(&tree, &queries);
        bench_neighbors(&tree, &queries, 1);
        bench_neighbors(&tree, &queries, 10);
        bench_neighbors(&tree, &queries, 100);
        bench_ball(&tree, &queries, 1.0);
        bench_ball(&tree, &queries, 5.0);
    }
}
