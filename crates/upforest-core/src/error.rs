//! Errors produced by [`crate::UnionFind`] operations.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::set_id::SetId;

/// All error conditions reported by the forest.
///
/// Every fallible operation returns one of these as a value. Nothing is
/// retried internally and the forest is never left partially built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnionFindError {
    /// An element index or set identifier lies outside `[0, len)`.
    #[error("index {index} is out of range for a universe of {len} element(s)")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Size of the universe.
        len: usize,
    },

    /// `union` was asked to merge two elements that already share a partition.
    #[error("elements already belong to the same partition {set}")]
    AlreadySamePartition {
        /// The identifier both elements resolve to.
        set: SetId,
    },

    /// One of the tables could not be allocated at construction.
    #[error("could not allocate the {table} table for {len} element(s)")]
    Allocation {
        /// Which table failed: `"elements"` or `"sets"`.
        table: &'static str,
        /// Requested number of entries.
        len: usize,
        /// The allocator's report.
        #[source]
        source: TryReserveError,
    },
}
