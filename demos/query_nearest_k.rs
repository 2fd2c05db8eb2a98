//! Find the K nearest points to a query position.
use pointbsp::prelude::*;

fn main() -> Result<(), BspError> {
    let cloud: PointCloud = (0..8).map(|i| [i as f64, 0.0, 0.0]).collect();
    let tree = PointBspTree::from_points(&cloud, BuildParams::new(2, 10))?;

    let knn = tree.k_nearest([2.4, 0.0, 0.0], 3)?;
    println!("3 nearest points: {:?}", knn.ids);
    println!("distances:        {:?}", knn.distances);
    assert_eq!(knn.ids, vec![2, 3, 1]);
    Ok(())
}
