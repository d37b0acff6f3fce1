//! Container configuration.

/// How an ordered container treats a key equal to one already stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    /// Equal keys are rejected without mutating the tree.
    #[default]
    Reject,
    /// Equal keys are stored; they descend to the right of existing ones.
    Allow,
}

/// Options shared by [`BstTree`](crate::bst::BstTree) and
/// [`RbTree`](crate::red_black::RbTree).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    pub duplicates: DuplicatePolicy,
    /// Maximum number of live nodes. `None` means bounded only by the
    /// `u32` index space.
    pub capacity: Option<usize>,
}

impl TreeConfig {
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Effective node limit.
    pub fn max_nodes(&self) -> usize {
        let index_space = u32::MAX as usize;
        self.capacity.map_or(index_space, |c| c.min(index_space))
    }
}
