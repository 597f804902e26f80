//! # sqlspeaker-core
//!
//! Splits T-SQL scripts into `GO`-delimited batches.
//!
//! The splitter is a single-pass, character-level state machine. It tracks
//! block comments, line comments, quoted strings, and bracketed identifiers
//! so that a `GO` hidden inside any of them never ends a batch.
//!
//! ```rust
//! use sqlspeaker_core::split;
//!
//! let script = "CREATE TABLE t (id INT)\nGO\nINSERT INTO t VALUES (1)\n";
//! assert_eq!(
//!     split(script),
//!     vec!["CREATE TABLE t (id INT)\n", "INSERT INTO t VALUES (1)\n"]
//! );
//! ```
//!
//! Known limitations, kept for SQLCMD compatibility:
//! - a doubled quote (`''`) is not an escape; the literal closes at the
//!   first matching quote
//! - a repeat count after `GO` (`GO 5`) is parsed into
//!   [`Batch::repeat_count`] but never acted upon

pub mod batch;

pub use batch::{Batch, BatchSplitter, join_batches, split, split_batches};
