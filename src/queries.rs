//! Query implementations for [`PointBspTree`].
//!
//! All queries share one traversal: descend into the child on the query
//! point's side of the splitting plane first, and visit the other child only
//! if the plane is not farther than the current pruning threshold. What the
//! threshold is and what happens at a leaf is decided by a `LeafVisitor`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::point_bsp_tree::{Element, NodeKind, PointBspTree, ROOT};
use crate::point_set::{Point3, distance_sq};
use crate::BspError;

/// Result of [`PointBspTree::nearest`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    /// Position of the nearest point
    pub position: Point3,
    /// Id of the nearest point
    pub id: usize,
    /// Euclidean distance to the query point
    pub distance: f64,
    /// Number of leaves scanned
    pub leaf_tests: usize,
}

/// Result of [`PointBspTree::k_nearest`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KNearest {
    /// Ids ordered by ascending distance, ties by ascending id
    pub ids: Vec<usize>,
    /// Euclidean distances matching `ids`
    pub distances: Vec<f64>,
    /// Number of leaves scanned
    pub leaf_tests: usize,
}

/// Result of [`PointBspTree::ball`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ball {
    /// Ids strictly inside the ball, in traversal order
    pub ids: Vec<usize>,
    /// Number of leaves scanned
    pub leaf_tests: usize,
}

/// Per-query state driven by [`PointBspTree::traverse`].
trait LeafVisitor {
    /// Subtrees whose splitting plane is farther than this (squared) are skipped.
    fn threshold(&self) -> f64;

    /// Scans every element of one leaf.
    fn visit(&mut self, elements: &[Element]);
}

/// Candidate ordered by squared distance, then id.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    distance_sq: f64,
    id: usize,
    position: Point3,
}

impl Candidate {
    fn new(element: &Element, reference: &Point3) -> Self {
        Self {
            distance_sq: distance_sq(&element.position, reference),
            id: element.id,
            position: element.position,
        }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_sq
            .total_cmp(&other.distance_sq)
            .then(self.id.cmp(&other.id))
    }
}

struct NearestSearch {
    reference: Point3,
    best: Option<Candidate>,
}

impl LeafVisitor for NearestSearch {
    fn threshold(&self) -> f64 {
        self.best.map_or(f64::INFINITY, |best| best.distance_sq)
    }

    fn visit(&mut self, elements: &[Element]) {
        for element in elements {
            let candidate = Candidate::new(element, &self.reference);
            if self.best.is_none_or(|best| candidate < best) {
                self.best = Some(candidate);
            }
        }
    }
}

/// Keeps the `k` smallest candidates seen so far in a max-heap.
struct KNearestSearch {
    reference: Point3,
    k: usize,
    heap: BinaryHeap<Candidate>,
}

impl LeafVisitor for KNearestSearch {
    fn threshold(&self) -> f64 {
        if self.heap.len() < self.k {
            return f64::INFINITY;
        }
        self.heap.peek().map_or(f64::INFINITY, |worst| worst.distance_sq)
    }

    fn visit(&mut self, elements: &[Element]) {
        for element in elements {
            let candidate = Candidate::new(element, &self.reference);
            if self.heap.len() < self.k {
                self.heap.push(candidate);
            } else if let Some(mut worst) = self.heap.peek_mut() {
                if candidate < *worst {
                    *worst = candidate;
                }
            }
        }
    }
}

struct BallSearch<'a> {
    reference: Point3,
    radius_sq: f64,
    ids: &'a mut Vec<usize>,
}

impl LeafVisitor for BallSearch<'_> {
    fn threshold(&self) -> f64 {
        self.radius_sq
    }

    fn visit(&mut self, elements: &[Element]) {
        for element in elements {
            if distance_sq(&element.position, &self.reference) < self.radius_sq {
                self.ids.push(element.id);
            }
        }
    }
}

impl PointBspTree {
    /// Branch-and-bound descent shared by all queries. Returns the number of
    /// leaves visited.
    ///
    /// The far child of a split is pushed with its plane distance and only
    /// expanded if that distance is within the visitor's threshold once the
    /// near child has been fully explored. A plane at exactly the threshold is
    /// still expanded: points lying on it go left and may tie the best
    /// candidate with a lower id.
    fn traverse<V: LeafVisitor>(&self, point: &Point3, visitor: &mut V) -> usize {
        let mut leaf_tests = 0;
        // (node, squared distance to the plane separating it from the query)
        let mut stack: Vec<(usize, Option<f64>)> = Vec::with_capacity(self.depth + 1);
        stack.push((ROOT, None));

        while let Some((index, plane_sq)) = stack.pop() {
            if plane_sq.is_some_and(|d| d > visitor.threshold()) {
                continue;
            }

            let node = &self.nodes[index];
            match node.kind {
                NodeKind::Leaf => {
                    leaf_tests += 1;
                    visitor.visit(&self.elements[node.begin..node.end]);
                }
                NodeKind::Split {
                    axis,
                    cut,
                    left,
                    right,
                } => {
                    let offset = point[axis] - cut;
                    let (near, far) = if offset > 0.0 {
                        (right, left)
                    } else {
                        (left, right)
                    };
                    stack.push((far, Some(offset * offset)));
                    stack.push((near, None));
                }
            }
        }

        leaf_tests
    }

    fn check_query(&self, point: &Point3) -> Result<(), BspError> {
        if self.elements.is_empty() {
            return Err(BspError::EmptyQuery);
        }
        if !point.iter().all(|c| c.is_finite()) {
            return Err(BspError::InvalidArgument(format!(
                "query point {point:?} has non-finite coordinates"
            )));
        }
        Ok(())
    }

    /// Finds the point closest to `point`.
    ///
    /// Among equally distant points the one with the lowest id is returned.
    ///
    /// # Errors
    /// - [`BspError::EmptyQuery`] if the tree holds no points.
    /// - [`BspError::InvalidArgument`] if `point` has a NaN or infinite coordinate.
    ///
    /// # Examples
    /// ```
    /// use pointbsp::prelude::*;
    ///
    /// let cloud: PointCloud = vec![[0.0, 0.0, 0.0], [4.0, 0.0, 0.0]].into();
    /// let tree = PointBspTree::from_points(&cloud, BuildParams::default()).unwrap();
    ///
    /// let nearest = tree.nearest([3.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(nearest.id, 1);
    /// assert_eq!(nearest.distance, 1.0);
    /// ```
    pub fn nearest(&self, point: Point3) -> Result<Nearest, BspError> {
        self.check_query(&point)?;

        let mut search = NearestSearch {
            reference: point,
            best: None,
        };
        let leaf_tests = self.traverse(&point, &mut search);
        tracing::trace!(leaf_tests, "nearest");

        let best = search.best.ok_or(BspError::EmptyQuery)?;
        Ok(Nearest {
            position: best.position,
            id: best.id,
            distance: best.distance_sq.sqrt(),
            leaf_tests,
        })
    }

    /// Id of the point closest to `point`.
    ///
    /// Returns `None` whenever [`nearest`](Self::nearest) fails, i.e. for an
    /// empty tree and for a query point with a NaN or infinite coordinate.
    pub fn nearest_id(&self, point: Point3) -> Option<usize> {
        self.nearest(point).ok().map(|nearest| nearest.id)
    }

    /// Finds the `k` points closest to `point`.
    ///
    /// Results are sorted by ascending distance; equally distant points are
    /// ordered by id, and when they compete for the last slot the lower id
    /// wins. If the tree holds fewer than `k` points, all of them are returned.
    ///
    /// # Errors
    /// - [`BspError::InvalidArgument`] if `k` is zero or `point` is not finite.
    /// - [`BspError::EmptyQuery`] if the tree holds no points.
    ///
    /// # Examples
    /// ```
    /// use pointbsp::prelude::*;
    ///
    /// let cloud: PointCloud = vec![[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]].into();
    /// let tree = PointBspTree::from_points(&cloud, BuildParams::new(1, 10)).unwrap();
    ///
    /// let knn = tree.k_nearest([0.0, 0.0, 0.0], 2).unwrap();
    /// assert_eq!(knn.ids, vec![0, 1]);
    /// ```
    pub fn k_nearest(&self, point: Point3, k: usize) -> Result<KNearest, BspError> {
        if k == 0 {
            return Err(BspError::InvalidArgument("k must be at least 1".to_owned()));
        }
        self.check_query(&point)?;

        let capacity = k.min(self.elements.len());
        let mut search = KNearestSearch {
            reference: point,
            k: capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
        };
        let leaf_tests = self.traverse(&point, &mut search);
        tracing::trace!(k, leaf_tests, "k_nearest");

        let sorted = search.heap.into_sorted_vec();
        Ok(KNearest {
            ids: sorted.iter().map(|c| c.id).collect(),
            distances: sorted.iter().map(|c| c.distance_sq.sqrt()).collect(),
            leaf_tests,
        })
    }

    /// Finds every point strictly closer than `radius` to `point`.
    ///
    /// A point at exactly `radius` is not included. A radius that is zero,
    /// negative or NaN yields an empty result.
    ///
    /// # Errors
    /// - [`BspError::EmptyQuery`] if the tree holds no points.
    /// - [`BspError::InvalidArgument`] if `point` is not finite.
    ///
    /// # Examples
    /// ```
    /// use pointbsp::prelude::*;
    ///
    /// let cloud: PointCloud = vec![[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]].into();
    /// let tree = PointBspTree::from_points(&cloud, BuildParams::new(1, 10)).unwrap();
    ///
    /// assert_eq!(tree.ball([0.0, 0.0, 0.0], 5.0).unwrap().ids, vec![0]);
    /// // Boundary is exclusive
    /// assert_eq!(tree.ball([0.0, 0.0, 0.0], 10.0).unwrap().ids, vec![0]);
    /// ```
    pub fn ball(&self, point: Point3, radius: f64) -> Result<Ball, BspError> {
        let mut ids = Vec::new();
        let leaf_tests = self.ball_into(point, radius, &mut ids)?;
        Ok(Ball { ids, leaf_tests })
    }

    /// Like [`ball`](Self::ball) but appends ids to `results` (not cleared
    /// first), so the vector can be reused across queries. Returns the number
    /// of leaves scanned.
    ///
    /// # Errors
    /// Same as [`ball`](Self::ball).
    pub fn ball_into(
        &self,
        point: Point3,
        radius: f64,
        results: &mut Vec<usize>,
    ) -> Result<usize, BspError> {
        self.check_query(&point)?;
        if radius <= 0.0 || radius.is_nan() {
            return Ok(0);
        }

        let mut search = BallSearch {
            reference: point,
            radius_sq: radius * radius,
            ids: results,
        };
        let leaf_tests = self.traverse(&point, &mut search);
        tracing::trace!(radius, leaf_tests, "ball");
        Ok(leaf_tests)
    }
}
