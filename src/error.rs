//! Error taxonomy for the justification core.
//!
//! The core treats its inputs as trusted and well-formed. Failures
//! therefore fall into two narrow buckets — see [`JustifyError`] — and
//! a justify call never silently masks one: a domain condition such as
//! "no feasible line break exists" is *not* an error, it is the empty
//! result described in [`hq_just`](crate::hq_just)'s documentation.

use thiserror::Error;

/// A queue or break-table invariant was violated by the caller or by
/// a bug in the justifier itself.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ProgrammingError {
    /// `set_width` must be strictly positive.
    #[error("params.set_width must be > 0, got {0}")]
    NonPositiveSetWidth(i32),

    /// The input break sequence was empty; there must be at least the
    /// forced paragraph terminator.
    #[error("breaks must contain at least the paragraph terminator")]
    EmptyInput,

    /// [`PriorityQueue::move_entry`](crate::queue::PriorityQueue::move_entry)
    /// was asked to relocate an entry that is not in the live window.
    /// This mirrors the reference implementation's `queue_move: not
    /// found!` diagnostic, but is surfaced as an error instead of a
    /// silently-ignored write to stderr.
    #[error("priority queue entry for break {break_idx:?} not found during decrease-key")]
    QueueEntryNotFound {
        /// The break index the missing entry was keyed on.
        break_idx: Option<usize>,
    },
}

/// A resource could not be acquired to service the call.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ResourceError {
    /// The scratch table (one entry per break, plus the virtual
    /// start) could not be allocated.
    #[error("failed to allocate scratch table for {0} breaks")]
    ScratchAllocation(usize),

    /// The priority queue (capacity `3n + 1`) could not be allocated.
    #[error("failed to allocate priority queue with capacity {0}")]
    QueueAllocation(usize),
}

/// Everything that can keep a justify call from producing a result.
///
/// Per the justification core's error handling contract: programming
/// errors are assertion-class and abort the call; resource errors
/// abort the call with no observable partial state; domain conditions
/// (no feasible path) are not represented here at all — they come back
/// as `Ok(Vec::new())`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum JustifyError {
    /// See [`ProgrammingError`].
    #[error(transparent)]
    Programming(#[from] ProgrammingError),

    /// See [`ResourceError`].
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
