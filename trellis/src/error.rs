//! Layout error types.
//!
//! Every variant is a caller contract violation. The call that reports one
//! is aborted before it touches any container state.

use thiserror::Error;

use crate::layout::{GridStyle, LineDirection};
use crate::primitives::Size;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("child index {index} out of range (container has {len} children)")]
    ChildOutOfRange { index: usize, len: usize },

    #[error("{direction:?} index {index} out of range (grid has {count})")]
    LineOutOfRange {
        direction: LineDirection,
        index: usize,
        count: usize,
    },

    #[error("major count must be at least 1")]
    InvalidMajorCount,

    #[error("negative size requested: {0:?}")]
    NegativeSize(Size),

    #[error("grid margins must be non-negative: {0:?}")]
    NegativeMargin(GridStyle),
}

pub type Result<T> = std::result::Result<T, GridError>;
