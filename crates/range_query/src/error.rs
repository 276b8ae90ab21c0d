use core::fmt;

/// Errors reported by the range-query trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A tree was requested with no positions, or with more than its
    /// storage can address.
    InvalidSize { len: usize },
    /// An index fell outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidSize { len } => {
                write!(f, "invalid tree size {len}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}
