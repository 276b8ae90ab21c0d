//! Prefix sums over `i64` with the least-significant-bit decomposition.
//!
//! Only invertible addition is supported: interval sums are the difference of
//! two prefix sums. Range minimum or maximum needs [`SegmentTree`](crate::SegmentTree).
//!
//! Arithmetic wraps on overflow. Wrapping addition is still a group, so an
//! interval sum is exact whenever its true value fits in `i64`.

use crate::error::{Error, Result};
use crate::util::{check_index, check_len, lowest_set_bit};

#[derive(Clone, Debug)]
pub struct FenwickTree {
    /// One-indexed, `tree[0]` is unused.
    tree: Vec<i64>,
}

impl FenwickTree {
    pub fn new(len: usize) -> Result<Self> {
        check_len(len)?;
        let storage = len.checked_add(1).ok_or(Error::InvalidSize { len })?;
        tracing::trace!(len, "built fenwick tree");
        Ok(Self {
            tree: vec![0; storage],
        })
    }

    /// Builds from initial values in `O(n)` by pushing each node into its parent.
    pub fn from_values(values: &[i64]) -> Result<Self> {
        let mut fenwick = Self::new(values.len())?;
        let n = values.len();
        fenwick.tree[1..].copy_from_slice(values);
        for i in 1..=n {
            let parent = i + lowest_set_bit(i);
            if parent <= n {
                let child = fenwick.tree[i];
                fenwick.tree[parent] = fenwick.tree[parent].wrapping_add(child);
            }
        }
        Ok(fenwick)
    }

    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add(&mut self, index: usize, delta: i64) -> Result<()> {
        let n = self.len();
        check_index(index, n)?;
        let mut pos = index + 1;
        while pos <= n {
            self.tree[pos] = self.tree[pos].wrapping_add(delta);
            pos += lowest_set_bit(pos);
        }
        Ok(())
    }

    /// Sum of positions `[0, index]`.
    pub fn prefix_sum(&self, index: usize) -> Result<i64> {
        check_index(index, self.len())?;
        let mut sum = 0_i64;
        let mut pos = index + 1;
        while pos > 0 {
            sum = sum.wrapping_add(self.tree[pos]);
            pos -= lowest_set_bit(pos);
        }
        Ok(sum)
    }

    /// Sum of positions `[left, right]`.
    ///
    /// `left > right` sums to `0` when `left <= len`, the same empty-range
    /// rule as [`SegmentTree::iterative_query`](crate::SegmentTree::iterative_query).
    pub fn interval_sum(&self, left: usize, right: usize) -> Result<i64> {
        if left > right {
            check_index(left, self.len() + 1)?;
            return Ok(0);
        }
        let total = self.prefix_sum(right)?;
        if left == 0 {
            return Ok(total);
        }
        Ok(total.wrapping_sub(self.prefix_sum(left - 1)?))
    }
}
