//! Point sets the tree can be built from.
//!
//! The tree only needs to enumerate points together with a stable id and to
//! resolve an id back to its position. [`PointCloud`] is a minimal owning
//! container for callers that do not already have their own point storage.

/// A position in 3D space.
pub type Point3 = [f64; 3];

/// Source of points for [`PointBspTree::build`](crate::PointBspTree::build).
///
/// Ids must be stable for as long as the built tree is used: a query returns
/// ids, and callers resolve them through [`PointSet::position`].
pub trait PointSet {
    /// Number of live points.
    fn len(&self) -> usize;

    /// Whether the set holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the point with the given id, if it exists.
    fn position(&self, id: usize) -> Option<Point3>;

    /// Enumerates every live point as `(id, position)`.
    fn iter(&self) -> impl Iterator<Item = (usize, Point3)>;
}

impl PointSet for [Point3] {
    fn len(&self) -> usize {
        <[Point3]>::len(self)
    }

    fn position(&self, id: usize) -> Option<Point3> {
        self.get(id).copied()
    }

    fn iter(&self) -> impl Iterator<Item = (usize, Point3)> {
        <[Point3]>::iter(self).copied().enumerate()
    }
}

/// Growable point container with dense ids (the insertion index).
///
/// # Examples
/// ```
/// use pointbsp::prelude::*;
///
/// let mut cloud = PointCloud::new();
/// let a = cloud.add([0.0, 0.0, 0.0]);
/// let b = cloud.add([1.0, 2.0, 3.0]);
/// assert_eq!((a, b), (0, 1));
/// assert_eq!(cloud.position(b), Some([1.0, 2.0, 3.0]));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point3>,
}

impl PointCloud {
    /// Creates an empty cloud
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty cloud with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point and returns its id
    pub fn add(&mut self, point: Point3) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Appends a point given by its coordinates and returns its id
    pub fn add_xyz(&mut self, x: f64, y: f64, z: f64) -> usize {
        self.add([x, y, z])
    }

    /// All points, indexed by id
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Removes every point
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl PointSet for PointCloud {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn position(&self, id: usize) -> Option<Point3> {
        self.points.get(id).copied()
    }

    fn iter(&self) -> impl Iterator<Item = (usize, Point3)> {
        self.points.iter().copied().enumerate()
    }
}

impl From<Vec<Point3>> for PointCloud {
    fn from(points: Vec<Point3>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point3> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Squared Euclidean distance between two points
#[inline]
pub(crate) fn distance_sq(a: &Point3, b: &Point3) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}
