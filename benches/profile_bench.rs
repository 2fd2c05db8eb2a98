//! Profiling benchmark comparing uniform and clustered point clouds
//!
//! Midpoint splits are sensitive to clustering, so the same queries are run
//! against both distributions to show the effect on build time and leaf visits.

use pointbsp::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

fn uniform<R: Rng>(rng: &mut R, n: usize) -> PointCloud {
    (0..n)
        .map(|_| {
            [
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
            ]
        })
        .collect()
}

fn clustered<R: Rng>(rng: &mut R, n: usize, clusters: usize) -> PointCloud {
    let centers: Vec<Point3> = uniform(rng, clusters).points().to_vec();
    (0..n)
        .map(|i| {
            let c = centers[i % clusters];
            [
                c[0] + rng.random_range(-0.5..0.5),
                c[1] + rng.random_range(-0.5..0.5),
                c[2] + rng.random_range(-0.5..0.5),
            ]
        })
        .collect()
}

fn profile(name: &str, cloud: &PointCloud, queries: &[Point3]) {
    let build_start = Instant::now();
    let tree = match PointBspTree::from_points(cloud, BuildParams::default()) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{name}: build failed: {err}");
            return;
        }
    };
    let build_total = build_start.elapsed();

    let mut leaf_tests = 0;
    let query_start = Instant::now();
    for &point in queries {
        if let Ok(knn) = tree.k_nearest(point, 16) {
            leaf_tests += knn.leaf_tests;
        }
    }
    let query_total = query_start.elapsed();

    println!("{name}");
    println!("  build {} points:  {:>10.2}ms", cloud.len(), build_total.as_secs_f64() * 1000.0);
    println!("  leaves / depth:    {} / {}", tree.leaf_count(), tree.depth());
    println!(
        "  {} k_nearest(16):  {:>10.2}ms ({:.1} leaves/query)",
        queries.len(),
        query_total.as_secs_f64() * 1000.0,
        leaf_tests as f64 / queries.len() as f64
    );
}

fn main() {
    println!("Point BSP Profiling Benchmark");
    println!("=============================\n");

    let num_items = 500_000;
    let num_tests = 10_000;
    let mut rng = rand::rngs::StdRng::seed_from_u64(12345);

    let queries: Vec<Point3> = uniform(&mut rng, num_tests).points().to_vec();
    profile("uniform", &uniform(&mut rng, num_items), &queries);
    profile("clustered (50)", &clustered(&mut rng, num_items, 50), &queries);
}
