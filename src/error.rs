//! Error types for the sweep core.
//!
//! Precondition violations come from malformed input and are always
//! returned, never panicked. Invariant violations indicate a bug in the
//! resolver or event queue; they are logged at `error!` before being
//! returned so embedding applications can decide what to do (retry is never
//! correct for them, but crashing the whole process usually isn't the
//! embedder's call to make either).

use crate::event::EventId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SweepError {
    #[error("edge {index} is degenerate (zero-length within tolerance)")]
    DegenerateEdge { index: usize },

    #[error("edge {index} has a non-finite coordinate (NaN or infinite)")]
    NonFiniteCoordinate { index: usize },

    #[error("event queue was asked to re-key event {0:?}, but it is not present")]
    QueueRekeyMissing(EventId),
}

pub type Result<T> = std::result::Result<T, SweepError>;
