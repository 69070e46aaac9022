//! Errors raised by the box algebra and the bracket parser.
use thiserror::Error;

use crate::boxes::box_engine::BoxKind;

/// Everything that can go wrong while building, parsing or truncating a box.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxError {
    /// The input text contains no `[` at all.
    #[error("no opening bracket found in {input:?}")]
    NoOpeningBracket { input: String },

    /// The input ended before the bracket opened at the start was closed.
    #[error("missing closing bracket at byte {position}")]
    UnclosedBracket { position: usize },

    /// A decimal literal whose magnitude exceeds [`MAX_COUNT`](crate::boxes::box_engine::MAX_COUNT).
    #[error("invalid integer literal {literal:?} at byte {position}")]
    InvalidLiteral { position: usize, literal: String },

    /// A non-empty box was requested with a non-positive number of empty children.
    #[error("a non-empty box needs a positive count of empty boxes, got {count}")]
    InvalidConstruction { count: i64 },

    /// A count whose box would have more than `max` children.
    #[error("count {count} exceeds the largest supported count {max}")]
    CountOutOfRange { count: i64, max: usize },

    /// The operation is not defined for this kind of box.
    #[error("{operation} is not supported for {kind} boxes")]
    UnsupportedOperation {
        operation: &'static str,
        kind: BoxKind,
    },
}
