//! Point BSP tree: construction and structure.
//!
//! The tree snapshots a [`PointSet`] into one element buffer and splits it
//! recursively with axis-aligned planes. Nodes live in an arena and refer to
//! contiguous `[begin, end)` ranges of the buffer, so splitting a node only
//! reorders the buffer in place.

use crate::point_set::{Point3, PointSet};
use crate::{BspError, BuildParams};

/// Arena index of the root node.
pub(crate) const ROOT: usize = 0;

/// A point snapshotted into the tree together with its external id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
    /// Position at build time
    pub position: Point3,
    /// Id of the point in the source [`PointSet`]
    pub id: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum NodeKind {
    Leaf,
    /// Elements with `position[axis] <= cut` are in `left`, the rest in `right`.
    Split {
        axis: usize,
        cut: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Node {
    pub(crate) begin: usize,
    pub(crate) end: usize,
    pub(crate) kind: NodeKind,
}

impl Node {
    fn leaf(begin: usize, end: usize) -> Self {
        Self {
            begin,
            end,
            kind: NodeKind::Leaf,
        }
    }
}

/// Static binary space-partitioning tree over 3D points.
///
/// Answers exact nearest, k-nearest and ball queries (see the query methods).
/// The tree never changes after [`build`](Self::build); rebuilding discards
/// the previous structure entirely.
///
/// # Examples
/// ```
/// use pointbsp::prelude::*;
///
/// let cloud: PointCloud = vec![[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]].into();
///
/// let mut tree = PointBspTree::new();
/// tree.build(&cloud, BuildParams::new(1, 10)).unwrap();
///
/// let nearest = tree.nearest([1.0, 0.0, 0.0]).unwrap();
/// assert_eq!(nearest.id, 0);
/// assert_eq!(nearest.distance, 1.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PointBspTree {
    /// Element buffer, reordered so every node covers a contiguous range
    pub(crate) elements: Vec<Element>,
    /// Node arena, root at index 0
    pub(crate) nodes: Vec<Node>,
    /// Number of split levels below the root
    pub(crate) depth: usize,
}

impl PointBspTree {
    /// Creates an empty, unbuilt tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree and builds it from `points` in one step.
    ///
    /// # Errors
    /// Returns [`BspError::InvalidArgument`] when `params` are invalid.
    pub fn from_points<S>(points: &S, params: BuildParams) -> Result<Self, BspError>
    where
        S: PointSet + ?Sized,
    {
        let mut tree = Self::new();
        let _created = tree.build(points, params)?;
        Ok(tree)
    }

    /// Builds the tree from the current contents of `points`.
    ///
    /// Any previously built structure is dropped first. Points are copied in
    /// the order `points` enumerates them. Nodes are split at the midpoint of
    /// the longest side of their bounding box (lowest axis on ties) until they
    /// hold fewer than `params.max_leaf_size` points or `params.max_depth` is
    /// reached.
    ///
    /// Returns the number of nodes created below the root, two per split. The
    /// root itself is not counted, so `node_count()` is one larger.
    ///
    /// # Errors
    /// Returns [`BspError::InvalidArgument`] when `params.max_leaf_size` is
    /// zero. The tree is left unchanged in that case.
    pub fn build<S>(&mut self, points: &S, params: BuildParams) -> Result<usize, BspError>
    where
        S: PointSet + ?Sized,
    {
        let _span = tracing::debug_span!("build", points = points.len()).entered();

        if let Err(err) = params.validate() {
            tracing::warn!(?params, "rejected build parameters");
            return Err(err);
        }

        self.elements.clear();
        self.nodes.clear();
        self.depth = 0;

        self.elements.reserve(points.len());
        self.elements.extend(
            points
                .iter()
                .map(|(id, position)| Element { position, id }),
        );

        self.nodes.push(Node::leaf(0, self.elements.len()));
        let created = self.split_nodes(params);

        tracing::debug!(
            elements = self.elements.len(),
            nodes = self.nodes.len(),
            leaves = self.leaf_count(),
            depth = self.depth,
            "built point bsp tree"
        );
        Ok(created)
    }

    /// Splits the root and its descendants depth-first. Returns the number of
    /// child nodes created.
    fn split_nodes(&mut self, params: BuildParams) -> usize {
        let mut created = 0;
        // (node, remaining depth, level)
        let mut pending = vec![(ROOT, params.max_depth, 0_usize)];

        while let Some((index, remaining, level)) = pending.pop() {
            self.depth = self.depth.max(level);

            let Node { begin, end, .. } = self.nodes[index];
            if remaining == 0 || end - begin < params.max_leaf_size {
                continue;
            }

            let (min, max) = bounding_box(&self.elements[begin..end]);
            let axis = longest_axis(&min, &max);
            let cut = 0.5 * (min[axis] + max[axis]);
            let mid = begin + partition(&mut self.elements[begin..end], axis, cut);

            let left = self.nodes.len();
            let right = left + 1;
            self.nodes.push(Node::leaf(begin, mid));
            self.nodes.push(Node::leaf(mid, end));
            self.nodes[index].kind = NodeKind::Split {
                axis,
                cut,
                left,
                right,
            };
            created += 2;

            pending.push((right, remaining - 1, level + 1));
            pending.push((left, remaining - 1, level + 1));
        }

        created
    }

    /// Number of points snapshotted by the last build
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the tree holds no points
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Total number of nodes including the root. Zero before the first build.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes, empty leaves included
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.kind == NodeKind::Leaf)
            .count()
    }

    /// Number of split levels below the root. A tree whose root is a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The element buffer in partitioned order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Iterates over the elements held by each leaf.
    ///
    /// Every element appears in exactly one leaf. Leaves may be empty when a
    /// split put all of its points on one side.
    pub fn leaves(&self) -> impl Iterator<Item = &[Element]> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.kind == NodeKind::Leaf)
            .map(|node| &self.elements[node.begin..node.end])
    }
}

/// Axis-aligned bounding box of a non-empty element range
fn bounding_box(elements: &[Element]) -> (Point3, Point3) {
    let mut min = elements.first().map_or([0.0; 3], |e| e.position);
    let mut max = min;
    for element in elements {
        for axis in 0..3 {
            min[axis] = min[axis].min(element.position[axis]);
            max[axis] = max[axis].max(element.position[axis]);
        }
    }
    (min, max)
}

/// Axis of the largest extent. A later axis wins only when strictly longer.
fn longest_axis(min: &Point3, max: &Point3) -> usize {
    let mut axis = 0;
    let mut length = max[0] - min[0];
    for candidate in 1..3 {
        let extent = max[candidate] - min[candidate];
        if extent > length {
            length = extent;
            axis = candidate;
        }
    }
    axis
}

/// Moves elements with `position[axis] <= cut` to the front. Returns how many
/// there are.
fn partition(elements: &mut [Element], axis: usize, cut: f64) -> usize {
    let mut split = 0;
    for i in 0..elements.len() {
        if elements[i].position[axis] <= cut {
            elements.swap(split, i);
            split += 1;
        }
    }
    split
}

#[cfg(test)]
mod tests {
    use super::{Element, bounding_box, longest_axis, partition};

    fn element(x: f64, y: f64, z: f64, id: usize) -> Element {
        Element {
            position: [x, y, z],
            id,
        }
    }

    #[test]
    fn test_bounding_box() {
        let elements = [
            element(1.0, -2.0, 3.0, 0),
            element(-1.0, 5.0, 0.0, 1),
            element(0.0, 0.0, 7.0, 2),
        ];
        let (min, max) = bounding_box(&elements);
        assert_eq!(min, [-1.0, -2.0, 0.0]);
        assert_eq!(max, [1.0, 5.0, 7.0]);
    }

    #[test]
    fn test_longest_axis_ties_pick_lowest() {
        assert_eq!(longest_axis(&[0.0; 3], &[1.0, 1.0, 1.0]), 0);
        assert_eq!(longest_axis(&[0.0; 3], &[1.0, 2.0, 2.0]), 1);
        assert_eq!(longest_axis(&[0.0; 3], &[1.0, 2.0, 3.0]), 2);
        assert_eq!(longest_axis(&[0.0; 3], &[0.0, 0.0, 0.0]), 0);
    }

    #[test]
    fn test_partition_splits_at_cut() {
        let mut elements = [
            element(3.0, 0.0, 0.0, 0),
            element(1.0, 0.0, 0.0, 1),
            element(2.0, 0.0, 0.0, 2),
            element(0.0, 0.0, 0.0, 3),
        ];
        let split = partition(&mut elements, 0, 2.0);
        assert_eq!(split, 3);
        assert!(elements[..split].iter().all(|e| e.position[0] <= 2.0));
        assert!(elements[split..].iter().all(|e| e.position[0] > 2.0));
    }

    #[test]
    fn test_partition_all_on_one_side() {
        let mut elements = [element(1.0, 1.0, 1.0, 0), element(1.0, 1.0, 1.0, 1)];
        assert_eq!(partition(&mut elements, 0, 1.0), 2);
        assert_eq!(partition(&mut elements, 0, 0.5), 0);
    }
}
