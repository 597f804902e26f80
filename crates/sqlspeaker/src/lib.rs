//! Run `GO`-delimited SQL scripts against a database, SQLCMD style.
//!
//! `sqlspeaker` reads a script, cuts it into batches with
//! [`sqlspeaker_core::BatchSplitter`], and executes the batches one at a
//! time, in order, over a single connection.
//!
//! # Architecture
//!
//! - **Options** - Server, database and credentials, merged from the config
//!   file and the command line
//! - **Config** - JSON file that saves connection options between runs
//! - **Database** - sqlx connection pools for the supported backends
//! - **Executor** - Sends batches to a [`executor::BatchExecutor`] and
//!   reports the outcome
//!
//! # Example
//!
//! ```rust,ignore
//! use sqlspeaker::prelude::*;
//!
//! let options = ConnectionOptions::new(":memory:");
//! let db = Database::connect(Backend::Sqlite, &options).await?;
//!
//! let report = ScriptRunner::new(db)
//!     .run("CREATE TABLE t (id INT)\nGO\nINSERT INTO t VALUES (1)\n")
//!     .await?;
//! assert_eq!(report.executed, 2);
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Run a script
//! sqlspeaker -s app.db run schema.sql
//!
//! # Show the batches a script splits into
//! sqlspeaker split schema.sql
//!
//! # Save connection options for later runs
//! sqlspeaker -s db01 -u sa -p secret config --save
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod executor;
pub mod options;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ConfigFile, DEFAULT_CONFIG_FILE};
    pub use crate::database::{Backend, Database};
    pub use crate::error::{Result, SpeakerError};
    pub use crate::executor::{BatchExecutor, RunReport, ScriptRunner};
    pub use crate::options::ConnectionOptions;
    pub use sqlspeaker_core::{Batch, BatchSplitter, join_batches, split, split_batches};
}
