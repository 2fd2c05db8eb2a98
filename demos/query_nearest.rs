//! Find the nearest point to a query position.
use pointbsp::prelude::*;

fn main() -> Result<(), BspError> {
    let cloud: PointCloud = vec![[0.0, 0.0, 0.0], [3.0, 3.0, 3.0], [5.0, 5.0, 5.0]].into();

    let tree = PointBspTree::from_points(&cloud, BuildParams::default())?;

    let nearest = tree.nearest([2.0, 2.0, 2.0])?;
    println!(
        "Nearest point: {} at {:?} (distance {:.3}, {} leaves tested)",
        nearest.id, nearest.position, nearest.distance, nearest.leaf_tests
    );
    Ok(())
}
