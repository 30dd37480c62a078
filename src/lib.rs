//! The justification core of a text-setting library: given a sequence
//! of candidate line-break positions annotated with pre-measured
//! geometry, choose the subset of breaks that partitions a paragraph
//! into lines while minimizing total typographic penalty.
//!
//! Two justifiers share the same input/output contract:
//!
//! * [`hq_just`] — a high-quality global optimizer. It runs Dijkstra's
//!   shortest-path algorithm over a graph whose vertices are candidate
//!   breaks and whose edges are legal lines, using a banded
//!   exploration pattern ([`optimal`]) so that only breaks near the
//!   ideal width are ever considered for a given predecessor.
//! * [`hs_just`] — a high-speed greedy variant ([`greedy`]) that picks
//!   a locally optimal break for each line in turn, and additionally
//!   understands tab stops.
//!
//! Neither justifier measures text, hyphenates words, loads fonts, or
//! renders glyphs: those are external collaborators whose trait
//! boundaries are sketched in [`collab`]. A [`Break`] is a plain
//! record of the geometry a caller already measured.
//!
//! # Examples
//!
//! ```
//! use justify::{hq_just, Break, BreakFlags, Params, flags};
//!
//! // "Lorem ipsum." split at the space after "Lorem" (width 50) and
//! // the space after "ipsum" (width 100), with a forced break ending
//! // the paragraph at width 150.
//! let breaks = vec![
//!     Break::new(50, 54, 0, BreakFlags::from_bits(flags::IS_SPACE)),
//!     Break::new(100, 104, 0, BreakFlags::from_bits(flags::IS_SPACE)),
//!     Break::new(150, 150, 0, BreakFlags::NONE),
//! ];
//! let params = Params::new(100).max_neg_space(128);
//! let lines = hq_just(&breaks, &params).unwrap();
//! assert_eq!(lines, vec![1, 2]);
//! ```
//!
//! # Cargo features
//!
//! This crate has no optional Cargo features; it depends only on
//! [`thiserror`] for its error taxonomy and [`log`] for diagnostic
//! tracing, both of which are always available.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod break_model;
pub mod collab;
pub mod error;
pub mod greedy;
pub mod optimal;
pub mod penalty;
pub mod queue;

pub use break_model::{flags, Break, BreakFlags, Params};
pub use error::{JustifyError, ProgrammingError, ResourceError};
pub use greedy::hs_just;
pub use optimal::hq_just;
