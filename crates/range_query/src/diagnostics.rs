//! Read-only dumps of a [`SegmentTree`]'s storage for inspection.

use core::fmt::Display;

use crate::SegmentTree;

impl<T, F> SegmentTree<T, F> {
    /// Storage levels from the root down to the leaves. Level `d` holds
    /// nodes `[2^d, 2^(d+1))`; the last level includes padding leaves.
    pub fn levels(&self) -> impl Iterator<Item = &[T]> + '_ {
        let size = self.size;
        core::iter::successors(Some(1_usize), move |&width| {
            (width < size).then_some(width << 1)
        })
        .map(move |width| &self.tree[width..2 * width])
    }

    /// All `padded_size` leaves, padding included.
    pub fn leaves(&self) -> &[T] {
        &self.tree[self.size..]
    }
}

impl<T: Display, F> SegmentTree<T, F> {
    /// One line per level, values separated by single spaces.
    pub fn format_levels(&self) -> String {
        self.levels().map(|level| format_row(level) + "\n").collect()
    }

    pub fn format_leaves(&self) -> String {
        format_row(self.leaves()) + "\n"
    }

    /// Emits every level as a `debug` event.
    pub fn trace_levels(&self) {
        for (depth, level) in self.levels().enumerate() {
            tracing::debug!(
                target: "range_query::diagnostics",
                depth,
                row = %format_row(level),
                "segment tree level"
            );
        }
    }
}

fn format_row<T: Display>(row: &[T]) -> String {
    row.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
