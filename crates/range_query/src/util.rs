use crate::error::{Error, Result};

#[inline(always)]
pub(crate) fn lowest_set_bit(x: usize) -> usize {
    x & x.wrapping_neg()
}

#[inline]
pub(crate) fn check_len(len: usize) -> Result<()> {
    if len == 0 {
        tracing::debug!(len, "rejected empty tree");
        return Err(Error::InvalidSize { len });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        tracing::debug!(index, len, "rejected out-of-range index");
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(())
}
