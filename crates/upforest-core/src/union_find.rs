//! Disjoint-set forest over a fixed universe of `n` elements.
//!
//! Elements are stored in one table and set records in another, both of
//! length `n` and both allocated once at construction. Parent links are
//! indices into the element table. Merging uses union-by-size; on a tie the
//! first argument's root is attached under the second's.
//!
//! A partition's identifier is decoupled from its physical root: after
//! `union(a, b)` the merged partition always keeps `a`'s identifier, even
//! when `a`'s root is the one attached underneath. [`UnionFind::find`]
//! therefore reads the identifier stored on the root rather than using the
//! root's index.
//!
//! [`UnionFind::find`] does not restructure the forest. Callers that can
//! lend `&mut` access should prefer [`UnionFind::find_compressing`], which
//! returns the same identifier and halves the traversed path.

use tracing::{debug, instrument, trace};

use crate::error::UnionFindError;
use crate::node::{Node, SetRecord};
use crate::set_id::{EMPTY, INITIAL, SetId};

/// A union-find structure carrying a payload `T` per element and a
/// department `D` per partition.
///
/// Element indices and set identifiers both range over `[0, n)`. Every
/// indexed operation checks its arguments and reports
/// [`UnionFindError::InvalidIndex`] instead of panicking.
#[derive(Debug, Clone)]
pub struct UnionFind<T = (), D = ()> {
    nodes: Vec<Node<T>>,
    sets: Vec<SetRecord<D>>,
    live: usize,
}

impl<T: Default, D: Default> UnionFind<T, D> {
    /// Creates a forest of `n` singleton partitions with default payloads.
    ///
    /// Element `i` starts as the root of its own up-tree with identifier
    /// `i` and a set record of size 1.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::Allocation`] if either table cannot be
    /// reserved.
    pub fn new(n: usize) -> Result<Self, UnionFindError> {
        Self::build(n, std::iter::repeat_with(T::default).take(n))
    }
}

impl<T, D: Default> UnionFind<T, D> {
    /// Creates a forest whose universe is `payloads`, element `i` carrying
    /// `payloads[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::Allocation`] if either table cannot be
    /// reserved.
    pub fn with_payloads(payloads: Vec<T>) -> Result<Self, UnionFindError> {
        let n = payloads.len();
        Self::build(n, payloads)
    }

    fn build(n: usize, payloads: impl IntoIterator<Item = T>) -> Result<Self, UnionFindError> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(n)
            .map_err(|source| UnionFindError::Allocation {
                table: "elements",
                len: n,
                source,
            })?;
        let mut sets = Vec::new();
        sets.try_reserve_exact(n)
            .map_err(|source| UnionFindError::Allocation {
                table: "sets",
                len: n,
                source,
            })?;

        for (i, payload) in payloads.into_iter().take(n).enumerate() {
            nodes.push(Node::root(payload, SetId::new(i)));
            sets.push(SetRecord::with_size(INITIAL, D::default()));
        }

        debug!(len = n, "constructed forest");
        Ok(Self {
            nodes,
            sets,
            live: n,
        })
    }
}

impl<T, D> UnionFind<T, D> {
    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the universe has no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of live partitions.
    ///
    /// Starts at `len()` and drops by one on every successful [`union`].
    ///
    /// [`union`]: UnionFind::union
    pub fn set_count(&self) -> usize {
        self.live
    }

    /// Returns the identifier of the partition containing `element`.
    ///
    /// Walks parent links up to the root without modifying the forest, so
    /// the cost is the depth of `element`. Union-by-size bounds that depth by
    /// `log2(len())`.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `element >= len()`.
    pub fn find(&self, element: usize) -> Result<SetId, UnionFindError> {
        let element = self.check_element(element)?;
        let root = self.ascend(element);
        Ok(self.nodes[root].set_id)
    }

    /// Returns the same identifier as [`UnionFind::find`], halving the path
    /// on the way up.
    ///
    /// Each visited node is pointed at its grandparent. Roots, identifiers
    /// and set sizes are untouched, so later answers are unchanged; only the
    /// number of hops to reach them shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `element >= len()`.
    pub fn find_compressing(&mut self, element: usize) -> Result<SetId, UnionFindError> {
        let mut current = self.check_element(element)?;
        while let Some(parent) = self.nodes[current].parent {
            match self.nodes[parent].parent {
                Some(grandparent) => {
                    self.nodes[current].parent = Some(grandparent);
                    current = grandparent;
                }
                None => current = parent,
            }
        }
        Ok(self.nodes[current].set_id)
    }

    /// Returns the index of the up-tree root above `element`.
    ///
    /// The root's index need not equal the partition's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `element >= len()`.
    pub fn root(&self, element: usize) -> Result<usize, UnionFindError> {
        let element = self.check_element(element)?;
        Ok(self.ascend(element))
    }

    /// Returns `true` if `a` and `b` belong to the same partition.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if either index is out of
    /// range.
    pub fn same_set(&self, a: usize, b: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Merges the partitions containing `a` and `b`.
    ///
    /// The merged partition keeps `a`'s identifier and `b`'s identifier is
    /// retired for good. Structurally the smaller tree is attached under the
    /// larger one; when sizes are equal, `a`'s root goes under `b`'s.
    ///
    /// Returns the surviving identifier.
    ///
    /// # Errors
    ///
    /// - [`UnionFindError::InvalidIndex`] if either index is out of range.
    /// - [`UnionFindError::AlreadySamePartition`] if `a` and `b` are already
    ///   joined.
    ///
    /// The forest is not modified when an error is returned.
    #[instrument(level = "trace", skip(self))]
    pub fn union(&mut self, a: usize, b: usize) -> Result<SetId, UnionFindError> {
        let a = self.check_element(a)?;
        let b = self.check_element(b)?;
        let root1 = self.ascend(a);
        let root2 = self.ascend(b);
        let surviving = self.nodes[root1].set_id;
        let retired = self.nodes[root2].set_id;
        if surviving == retired {
            trace!(set = %surviving, "union rejected: already joined");
            return Err(UnionFindError::AlreadySamePartition { set: surviving });
        }

        let size1 = self.sets[surviving.index()].size;
        let size2 = self.sets[retired.index()].size;
        self.sets[surviving.index()].size = size1 + size2;
        self.sets[retired.index()].size = EMPTY;
        self.live -= 1;

        // Whichever root stays physical must carry the surviving identifier.
        self.nodes[root1].set_id = surviving;
        self.nodes[root2].set_id = surviving;

        if size1 <= size2 {
            self.nodes[root1].parent = Some(root2);
        } else {
            self.nodes[root2].parent = Some(root1);
        }

        debug!(
            surviving = %surviving,
            retired = %retired,
            size = size1 + size2,
            "merged partitions"
        );
        Ok(surviving)
    }

    /// Returns the size of the partition named by `set`; 0 once retired.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `set` is out of range.
    pub fn set_size(&self, set: SetId) -> Result<usize, UnionFindError> {
        Ok(self.record(set)?.size)
    }

    /// Returns the node for `element`.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `element >= len()`.
    pub fn node(&self, element: usize) -> Result<&Node<T>, UnionFindError> {
        let element = self.check_element(element)?;
        Ok(&self.nodes[element])
    }

    /// Returns the payload of `element`.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `element >= len()`.
    pub fn element(&self, element: usize) -> Result<&T, UnionFindError> {
        Ok(&self.node(element)?.payload)
    }

    /// Returns the payload of `element` for modification.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `element >= len()`.
    pub fn element_mut(&mut self, element: usize) -> Result<&mut T, UnionFindError> {
        let element = self.check_element(element)?;
        Ok(&mut self.nodes[element].payload)
    }

    /// Returns the set record named by `set`, live or retired.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `set` is out of range.
    pub fn record(&self, set: SetId) -> Result<&SetRecord<D>, UnionFindError> {
        let len = self.sets.len();
        self.sets
            .get(set.index())
            .ok_or(UnionFindError::InvalidIndex {
                index: set.index(),
                len,
            })
    }

    /// Returns the department of `set`.
    ///
    /// Retired identifiers remain addressable; their department is whatever
    /// was last written to it.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `set` is out of range.
    pub fn department(&self, set: SetId) -> Result<&D, UnionFindError> {
        Ok(&self.record(set)?.department)
    }

    /// Returns the department of `set` for modification.
    ///
    /// # Errors
    ///
    /// Returns [`UnionFindError::InvalidIndex`] if `set` is out of range.
    pub fn department_mut(&mut self, set: SetId) -> Result<&mut D, UnionFindError> {
        let len = self.sets.len();
        self.sets
            .get_mut(set.index())
            .map(|record| &mut record.department)
            .ok_or(UnionFindError::InvalidIndex {
                index: set.index(),
                len,
            })
    }

    /// The element table, indexed by element.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// The set-record table, indexed by [`SetId::index`].
    pub fn set_records(&self) -> &[SetRecord<D>] {
        &self.sets
    }

    /// Iterates over the live partitions in identifier order.
    pub fn live_sets(&self) -> impl Iterator<Item = (SetId, &SetRecord<D>)> {
        self.sets
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_live())
            .map(|(i, record)| (SetId::new(i), record))
    }

    /// Releases both tables, leaving an empty universe.
    ///
    /// Calling this again is a no-op. Afterwards every indexed operation
    /// reports [`UnionFindError::InvalidIndex`].
    pub fn destroy(&mut self) {
        if self.nodes.is_empty() && self.sets.is_empty() {
            return;
        }
        debug!(len = self.nodes.len(), "destroyed forest");
        self.nodes = Vec::new();
        self.sets = Vec::new();
        self.live = 0;
    }

    fn check_element(&self, element: usize) -> Result<usize, UnionFindError> {
        if element < self.nodes.len() {
            Ok(element)
        } else {
            Err(UnionFindError::InvalidIndex {
                index: element,
                len: self.nodes.len(),
            })
        }
    }

    /// `element` must already be in range.
    fn ascend(&self, element: usize) -> usize {
        let mut current = element;
        while let Some(parent) = self.nodes[current].parent {
            current = parent;
        }
        current
    }
}
