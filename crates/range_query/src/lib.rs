mod diagnostics;
mod error;
mod fenwick_tree;
mod segment_tree;
mod util;

pub use error::{Error, Result};
pub use fenwick_tree::FenwickTree;
pub use segment_tree::SegmentTree;

/// A [`SegmentTree`] specialized to `i64` addition.
pub type SumTree = SegmentTree<i64, fn(&i64, &i64) -> i64>;

/// Point-add / interval-sum interface shared by both realizations.
///
/// - Intervals are closed: `[left, right]`.
/// - `left > right` is an empty interval and sums to `0`, provided `left <= len`.
/// - Other indices outside `[0, len)` fail with [`Error::IndexOutOfRange`].
/// - Sums use wrapping `i64` arithmetic. An interval sum is exact whenever the
///   true value fits in `i64`, even if intermediate prefixes wrapped.
pub trait RangeSum: Sized {
    fn with_len(len: usize) -> Result<Self>;
    fn len(&self) -> usize;
    fn add(&mut self, index: usize, delta: i64) -> Result<()>;
    fn interval_sum(&self, left: usize, right: usize) -> Result<i64>;
}

fn add_i64(a: &i64, b: &i64) -> i64 {
    a.wrapping_add(*b)
}

impl RangeSum for SumTree {
    fn with_len(len: usize) -> Result<Self> {
        SegmentTree::new(len, 0, add_i64 as fn(&i64, &i64) -> i64)
    }

    fn len(&self) -> usize {
        SegmentTree::len(self)
    }

    fn add(&mut self, index: usize, delta: i64) -> Result<()> {
        self.leaf_update(index, delta)
    }

    fn interval_sum(&self, left: usize, right: usize) -> Result<i64> {
        self.iterative_query(left, right)
    }
}

impl RangeSum for FenwickTree {
    fn with_len(len: usize) -> Result<Self> {
        FenwickTree::new(len)
    }

    fn len(&self) -> usize {
        FenwickTree::len(self)
    }

    fn add(&mut self, index: usize, delta: i64) -> Result<()> {
        FenwickTree::add(self, index, delta)
    }

    fn interval_sum(&self, left: usize, right: usize) -> Result<i64> {
        FenwickTree::interval_sum(self, left, right)
    }
}
