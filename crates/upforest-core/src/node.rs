//! Leaf value types stored in the forest's two tables.
//!
//! A [`Node`] exists for every element of the universe. A [`SetRecord`]
//! exists for every set identifier, live or retired.

use crate::set_id::{EMPTY, SetId};

/// One element of the universe.
///
/// `parent` is an index into the owning forest's element table; `None` marks
/// an up-tree root. `set_id` is only meaningful on a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) payload: T,
    pub(crate) parent: Option<usize>,
    pub(crate) set_id: SetId,
}

impl<T> Node<T> {
    /// A root node carrying `payload` and naming `set_id`.
    pub(crate) fn root(payload: T, set_id: SetId) -> Self {
        Self {
            payload,
            parent: None,
            set_id,
        }
    }

    /// The caller data attached to this element.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Index of the parent element, or `None` for a root.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Returns `true` if this node is the root of its up-tree.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The set identifier of this node's partition, if this node is a root.
    ///
    /// Non-root nodes keep whatever identifier they had when they were
    /// attached; that value is stale and is not exposed.
    pub fn set_id(&self) -> Option<SetId> {
        if self.is_root() {
            Some(self.set_id)
        } else {
            None
        }
    }
}

impl<T: Default> Default for Node<T> {
    fn default() -> Self {
        Self::root(T::default(), SetId::ILLEGAL)
    }
}

/// Bookkeeping for one set identifier.
///
/// A size of zero marks a tombstone: the partition was absorbed by another
/// and this identifier will never be live again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRecord<D> {
    pub(crate) size: usize,
    pub(crate) department: D,
}

impl<D> SetRecord<D> {
    pub(crate) fn with_size(size: usize, department: D) -> Self {
        Self { size, department }
    }

    /// Number of elements in the partition named by this record.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` while this identifier names a partition.
    pub fn is_live(&self) -> bool {
        self.size != EMPTY
    }

    /// Returns `true` once this identifier has been absorbed by a merge.
    pub fn is_retired(&self) -> bool {
        self.size == EMPTY
    }

    /// The per-partition payload.
    pub fn department(&self) -> &D {
        &self.department
    }
}

impl<D: Default> Default for SetRecord<D> {
    fn default() -> Self {
        Self::with_size(EMPTY, D::default())
    }
}
