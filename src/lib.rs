//! # pointbsp - Static BSP tree for 3D point queries
//!
//! A Rust library providing an axis-aligned binary space-partitioning tree
//! over a fixed set of 3D points, answering exact spatial queries.
//!
//! ## Features
//!
//! - **Nearest neighbor**: exact closest point, lowest id on ties
//! - **K nearest neighbors**: exact k closest points, sorted by distance
//! - **Ball queries**: every point strictly inside a radius
//! - **Static Optimization**: built once from a snapshot, read-only afterwards
//!
//! ## Quick Start
//!
//! ```rust
//! use pointbsp::prelude::*;
//!
//! // Points with dense ids 0, 1, 2
//! let mut cloud = PointCloud::new();
//! cloud.add([0.0, 0.0, 0.0]);
//! cloud.add([10.0, 0.0, 0.0]);
//! cloud.add([0.0, 10.0, 0.0]);
//!
//! // Build the spatial index (required before querying)
//! let mut tree = PointBspTree::new();
//! tree.build(&cloud, BuildParams::new(1, 10)).unwrap();
//!
//! let nearest = tree.nearest([1.0, 0.0, 0.0]).unwrap();
//! assert_eq!(nearest.id, 0);
//!
//! let knn = tree.k_nearest([0.0, 0.0, 0.0], 2).unwrap();
//! assert_eq!(knn.ids, vec![0, 1]);
//!
//! let ball = tree.ball([0.0, 0.0, 0.0], 5.0).unwrap();
//! assert_eq!(ball.ids, vec![0]);
//! ```
//!
//! ## How It Works
//!
//! Building copies every point into one buffer and splits it recursively at
//! the midpoint of the longest side of each node's bounding box. Partitioning
//! reorders the buffer in place, so every node covers a contiguous range.
//!
//! Queries descend into the half-space containing the query point first and
//! skip the other half whenever its splitting plane is already farther away
//! than the best answer found so far.

mod error;
mod params;
pub mod point_bsp_tree;
pub mod point_set;
pub mod prelude;
mod queries;

pub use error::BspError;
pub use params::BuildParams;
pub use point_bsp_tree::{Element, PointBspTree};
pub use point_set::{Point3, PointCloud, PointSet};
pub use queries::{Ball, KNearest, Nearest};
