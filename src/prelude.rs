//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use pointbsp::prelude::*;
//! ```

pub use crate::{Ball, BspError, BuildParams, KNearest, Nearest, Point3, PointBspTree, PointCloud, PointSet};
