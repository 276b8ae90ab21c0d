use core::fmt;

use crate::error::{Error, Result};
use crate::util::{check_index, check_len};

/// Fixed-capacity segment tree over an injected associative `combine`.
///
/// Storage is one-indexed: node 1 is the root, node `k` has children `2k` and
/// `2k + 1`, and logical leaf `i` lives at `padded_size + i`. Leaves in
/// `[len, padded_size)` hold `identity` for the life of the tree.
#[derive(Clone)]
pub struct SegmentTree<T, F> {
    pub(crate) len: usize,
    pub(crate) size: usize,
    pub(crate) identity: T,
    pub(crate) tree: Vec<T>,
    combine: F,
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Creates a tree with `len` leaves, all set to `identity`.
    ///
    /// Fails with [`Error::InvalidSize`](crate::Error::InvalidSize) when `len == 0`
    /// or when `2 * padded_size` does not fit in `usize`.
    pub fn new(len: usize, identity: T, combine: F) -> Result<Self> {
        check_len(len)?;

        let (size, storage) = len
            .checked_next_power_of_two()
            .and_then(|size| Some((size, size.checked_mul(2)?)))
            .ok_or_else(|| {
                tracing::debug!(len, "rejected tree size beyond addressable capacity");
                Error::InvalidSize { len }
            })?;
        let tree = vec![identity.clone(); storage];
        tracing::trace!(len, padded_size = size, "built segment tree");

        Ok(Self {
            len,
            size,
            identity,
            tree,
            combine,
        })
    }

    /// Builds a tree whose leaves are `values`, in `O(padded_size)`.
    pub fn from_values(values: &[T], identity: T, combine: F) -> Result<Self> {
        let mut seg = Self::new(values.len(), identity, combine)?;
        let size = seg.size;
        seg.tree[size..size + values.len()].clone_from_slice(values);
        for k in (1..size).rev() {
            seg.pull(k);
        }
        Ok(seg)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest power of two that is at least [`len`](Self::len).
    pub fn padded_size(&self) -> usize {
        self.size
    }

    pub fn identity(&self) -> &T {
        &self.identity
    }

    /// Folds `updater` into leaf `index` with the stored `combine`.
    pub fn leaf_update(&mut self, index: usize, updater: T) -> Result<()> {
        check_index(index, self.len)?;
        let leaf = self.size + index;
        let value = (self.combine)(&self.tree[leaf], &updater);
        self.write_leaf(leaf, value);
        Ok(())
    }

    /// Replaces leaf `index` with `merge_fn(current, updater)`.
    ///
    /// `merge_fn` only decides the new leaf value. Ancestors are always
    /// recomputed with the stored `combine`, so passing `|_, new| new.clone()`
    /// gives overwrite semantics on an additive tree.
    pub fn leaf_update_with<M>(&mut self, index: usize, updater: T, merge_fn: M) -> Result<()>
    where
        M: FnOnce(&T, &T) -> T,
    {
        check_index(index, self.len)?;
        let leaf = self.size + index;
        let value = merge_fn(&self.tree[leaf], &updater);
        self.write_leaf(leaf, value);
        Ok(())
    }

    /// Overwrites leaf `index` with `value`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len)?;
        self.write_leaf(self.size + index, value);
        Ok(())
    }

    /// Aggregates the closed range `[left, right]` with the stored `combine`.
    pub fn iterative_query(&self, left: usize, right: usize) -> Result<T> {
        self.iterative_query_with(left, right, &self.combine)
    }

    /// Aggregates the closed range `[left, right]` with `merge_fn`.
    ///
    /// An empty range (`left > right`) yields `identity` as long as
    /// `left <= len`, so `[len, len - 1]` is a valid empty suffix. A non-empty
    /// range needs `right < len`. `identity` enters the fold exactly once, as
    /// `merge_fn(identity, leaf[left])`, and values are folded in strict
    /// left-to-right order, so non-commutative operators are supported.
    pub fn iterative_query_with<M>(&self, left: usize, right: usize, merge_fn: M) -> Result<T>
    where
        M: Fn(&T, &T) -> T,
    {
        if left > right {
            check_index(left, self.len + 1)?;
            return Ok(self.identity.clone());
        }
        check_index(right, self.len)?;

        let tree = &self.tree;
        let mut l = left + self.size;
        let mut r = right + self.size;

        let mut acc_left = merge_fn(&self.identity, &tree[l]);
        let mut acc_right = (l != r).then(|| tree[r].clone());

        while (l >> 1) < (r >> 1) {
            if (l & 1) == 0 {
                acc_left = merge_fn(&acc_left, &tree[l + 1]);
            }
            if (r & 1) == 1 {
                let sibling = &tree[r - 1];
                acc_right = Some(match acc_right {
                    Some(acc) => merge_fn(sibling, &acc),
                    None => sibling.clone(),
                });
            }
            l >>= 1;
            r >>= 1;
        }

        Ok(match acc_right {
            Some(acc) => merge_fn(&acc_left, &acc),
            None => acc_left,
        })
    }

    pub fn get_leaf_value(&self, index: usize) -> Result<&T> {
        check_index(index, self.len)?;
        Ok(&self.tree[self.size + index])
    }

    pub fn get_root_value(&self) -> &T {
        &self.tree[1]
    }

    fn write_leaf(&mut self, mut node: usize, value: T) {
        self.tree[node] = value;
        node >>= 1;
        while node > 0 {
            self.pull(node);
            node >>= 1;
        }
    }

    #[inline(always)]
    fn pull(&mut self, node: usize) {
        self.tree[node] = (self.combine)(&self.tree[2 * node], &self.tree[2 * node + 1]);
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SegmentTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("len", &self.len)
            .field("size", &self.size)
            .field("identity", &self.identity)
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}
