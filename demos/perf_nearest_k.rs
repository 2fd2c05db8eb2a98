//! Performance profiling example for k_nearest
//!
//! This example performs intensive k_nearest queries on a large point index.
//! Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf_nearest_k
//! ```

use pointbsp::prelude::*;
use std::time::Instant;

/// Simple LCG mapped to [0, 1000)
fn next(rng: &mut u64) -> f64 {
    *rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    ((*rng >> 32) as f64 / u32::MAX as f64) * 1000.0
}

fn main() -> Result<(), BspError> {
    println!("Building large spatial index...");
    let mut rng = 12345_u64;
    let mut cloud = PointCloud::with_capacity(1_000_000);
    for _ in 0..1_000_000 {
        let point = [next(&mut rng), next(&mut rng), next(&mut rng)];
        let _id = cloud.add(point);
    }

    let build_start = Instant::now();
    let tree = PointBspTree::from_points(&cloud, BuildParams::default())?;
    let build_duration = build_start.elapsed();

    let query_start = Instant::now();
    let mut found = 0;
    for _ in 0..10_000 {
        let point = [next(&mut rng), next(&mut rng), next(&mut rng)];
        found += tree.k_nearest(point, 100)?.ids.len();
    }
    let query_duration = query_start.elapsed();

    println!(
        "\nCompleted 10,000 queries (k=100, {} results) in {:.2}ms ({:.2}µs per query)",
        found,
        query_duration.as_secs_f64() * 1000.0,
        query_duration.as_secs_f64() * 1_000_000.0 / 10_000.0
    );
    println!("Profile Summary:");
    println!("  Building:  {:.2}ms", build_duration.as_secs_f64() * 1000.0);
    println!("  Querying:  {:.2}ms", query_duration.as_secs_f64() * 1000.0);
    println!("  Total:     {:.2}ms", (build_duration + query_duration).as_secs_f64() * 1000.0);
    Ok(())
}
