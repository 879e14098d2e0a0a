use std::fmt;

pub type SortResult<T> = Result<T, Error>;

/// Precondition violations reported by the `try_*` entry points.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The chain has no nodes.
    EmptyChain,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChain => f.write_str("cannot sort an empty chain"),
        }
    }
}

impl std::error::Error for Error {}
