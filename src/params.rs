//! Build configuration.

use crate::BspError;

const DEFAULT_MAX_LEAF_SIZE: usize = 10;
const DEFAULT_MAX_DEPTH: usize = 99;

/// Parameters controlling how far [`PointBspTree::build`](crate::PointBspTree::build) splits.
///
/// A node stays a leaf once it holds fewer than `max_leaf_size` points or
/// once `max_depth` levels of splits lie above it.
///
/// # Examples
/// ```
/// use pointbsp::BuildParams;
///
/// let params = BuildParams::default().with_max_leaf_size(4).with_max_depth(20);
/// assert_eq!(params.max_leaf_size, 4);
/// assert_eq!(params.max_depth, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildParams {
    /// Nodes with fewer points than this are not split. Must be at least 1.
    pub max_leaf_size: usize,
    /// Hard ceiling on the number of split levels below the root.
    ///
    /// Also bounds memory for repeated points: a node whose points all
    /// coincide keeps splitting into a full and an empty child, adding two
    /// nodes per level until this limit is reached.
    pub max_depth: usize,
}

impl BuildParams {
    /// Creates parameters with explicit values
    pub const fn new(max_leaf_size: usize, max_depth: usize) -> Self {
        Self {
            max_leaf_size,
            max_depth,
        }
    }

    /// Returns a copy with a different leaf size limit
    #[must_use]
    pub const fn with_max_leaf_size(mut self, max_leaf_size: usize) -> Self {
        self.max_leaf_size = max_leaf_size;
        self
    }

    /// Returns a copy with a different depth limit
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks that the parameters describe a buildable tree.
    ///
    /// # Errors
    /// Returns [`BspError::InvalidArgument`] when `max_leaf_size` is zero.
    pub fn validate(&self) -> Result<(), BspError> {
        if self.max_leaf_size == 0 {
            return Err(BspError::InvalidArgument(
                "max_leaf_size must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for BuildParams {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEAF_SIZE, DEFAULT_MAX_DEPTH)
    }
}
