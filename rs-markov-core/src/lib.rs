//! First-order Markov chain sentence generation library.
//!
//! This crate provides a word-level Markov chain system including:
//! - Corpus ingestion into a deduplicated token dictionary
//! - Per-token successor tracking with bounded capacities
//! - Random-walk sentence generation with terminator-driven stopping
//! - Internal utilities for corpus file loading
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core corpus model and generation logic.
///
/// This module exposes the corpus model and the sentence generator while
/// keeping internal store representations private.
pub mod model;

/// I/O utilities (corpus file loading).
///
/// Not exposed; the error type is re-exported so callers can match on
/// the distinct failure kinds.
pub(crate) mod io;

pub use io::CorpusIoError;
