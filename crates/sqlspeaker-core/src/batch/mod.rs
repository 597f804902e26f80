//! Batch splitting
//!
//! This module cuts a T-SQL script into the batches a SQLCMD-style client
//! sends to the server one at a time.

mod cursor;
mod splitter;

pub use cursor::Cursor;
pub use splitter::{Batch, BatchSplitter, join_batches, split, split_batches};
