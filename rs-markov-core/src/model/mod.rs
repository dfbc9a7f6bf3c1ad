//! Top-level module for the Markov chain generation system.
//!
//! This crate provides a word-level, first-order Markov text generator,
//! including:
//! - A deduplicated token dictionary (`Dictionary`)
//! - The combined corpus model (`CorpusModel`)
//! - Internal successor bookkeeping (`SuccessorTable`)
//! - Generation parameters (`GenerationInput`)
//! - A high-level generation interface (`SentenceGenerator`)

/// The corpus model: sanitization, tokenization and ingestion.
///
/// Owns the dictionary and the successor table, which share identifiers
/// and are built together in a single pass over the corpus.
pub mod corpus_model;

/// Insertion-ordered unique-token store.
///
/// Assigns each distinct token a stable integer identifier and handles
/// the capacity fallback when the configured maximum is reached.
pub mod dictionary;

/// High-level interface for generating sentences from a corpus model.
///
/// Exposes single-sentence generation and terminator-constrained
/// generation with a bounded retry loop.
pub mod generator;

/// Generation parameter structure.
///
/// Stores the sentence byte budget and the whole-sentence retry bound.
pub mod generation_input;

/// Internal representation of the per-token successor lists.
///
/// Tracks observed followers in first-seen order under a bounded
/// per-token capacity. This module is not exposed publicly.
mod successors;
