//! Set identifiers and the size constants shared by the forest.
//!
//! A [`SetId`] names a slot in the set-record table. Slot `i` is created for
//! element `i` at construction and keeps that index for the lifetime of the
//! forest; merging only ever retires identifiers, it never renumbers them.

use std::fmt;

/// Size of a retired set record.
pub(crate) const EMPTY: usize = 0;

/// Size of every set record when the forest is constructed.
pub(crate) const INITIAL: usize = 1;

/// Identifier of a partition: the index of its set record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetId(usize);

impl SetId {
    /// Carried by a node that has not been placed into a universe.
    ///
    /// Never returned by [`crate::UnionFind::find`].
    pub const ILLEGAL: Self = Self(usize::MAX);

    /// Wraps a raw set-record index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the set-record index this identifier names.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns `true` unless this is [`SetId::ILLEGAL`].
    pub const fn is_legal(self) -> bool {
        self.0 != usize::MAX
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_legal() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#illegal")
        }
    }
}

impl From<SetId> for usize {
    fn from(id: SetId) -> Self {
        id.0
    }
}
