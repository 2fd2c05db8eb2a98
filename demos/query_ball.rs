//! Find points strictly inside a sphere.
//!
//! The boundary is exclusive: a point at exactly `radius` is not reported.

use pointbsp::prelude::*;

fn main() -> Result<(), BspError> {
    let cloud = PointCloud::from(vec![
        [0.0, 0.0, 0.0], // Point 0: distance 0 from origin
        [1.0, 0.0, 0.0], // Point 1: distance 1
        [0.0, 1.0, 0.0], // Point 2: distance 1
        [1.0, 1.0, 1.0], // Point 3: distance sqrt(3) ~ 1.73
        [5.0, 5.0, 5.0], // Point 4: distance sqrt(75) ~ 8.66
    ]);

    let tree = PointBspTree::from_points(&cloud, BuildParams::new(1, 16))?;

    println!("=== Ball Query Example ===\n");

    let mut results = Vec::new();
    let leaf_tests = tree.ball_into([0.0, 0.0, 0.0], 1.5, &mut results)?;
    results.sort_unstable();
    println!("Radius 1.5 from origin: {results:?} ({leaf_tests} leaves tested)");
    assert_eq!(results, vec![0, 1, 2]);

    // Radius exactly 1: points 1 and 2 sit on the boundary
    results.clear();
    let _leaf_tests = tree.ball_into([0.0, 0.0, 0.0], 1.0, &mut results)?;
    println!("Radius 1.0 from origin: {results:?}");
    assert_eq!(results, vec![0]);

    let all = tree.ball([0.0, 0.0, 0.0], 10.0)?;
    println!("Radius 10.0 from origin: {} points", all.ids.len());
    Ok(())
}
