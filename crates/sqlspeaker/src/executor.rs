//! Script executor.
//!
//! This module splits a script into batches and sends them, in order, to a
//! [`BatchExecutor`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlspeaker_core::split_batches;
use tracing::{debug, info, warn};

use crate::error::{Result, SpeakerError};

/// Something that can run one batch of SQL.
pub trait BatchExecutor {
    /// Executes a batch and returns the number of rows it affected.
    fn execute(&self, sql: &str) -> impl Future<Output = Result<u64>> + Send;
}

/// Outcome of running a script.
#[derive(Debug)]
pub struct RunReport {
    /// Batches sent to the database.
    pub executed: usize,
    /// Blank batches that were not sent.
    pub skipped: usize,
    /// Batches that failed while `continue_on_error` was set.
    pub failures: Vec<SpeakerError>,
    /// Total rows affected by successful batches.
    pub rows_affected: u64,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    fn start() -> Self {
        let now = Utc::now();
        Self {
            executed: 0,
            skipped: 0,
            failures: Vec::new(),
            rows_affected: 0,
            started_at: now,
            finished_at: now,
        }
    }

    /// Returns true if no batch failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns how long the run took.
    #[must_use]
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Turns recorded failures into an error.
    pub fn check(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SpeakerError::Multiple(self.failures))
        }
    }
}

/// Runs scripts batch by batch.
pub struct ScriptRunner<E: BatchExecutor> {
    executor: E,
    dry_run: bool,
    continue_on_error: bool,
}

impl<E: BatchExecutor> ScriptRunner<E> {
    /// Creates a runner that stops at the first failing batch.
    pub const fn new(executor: E) -> Self {
        Self {
            executor,
            dry_run: false,
            continue_on_error: false,
        }
    }

    /// Enables dry-run mode (batches are printed but not executed).
    #[must_use]
    pub const fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Keeps going after a failed batch instead of stopping.
    #[must_use]
    pub const fn continue_on_error(mut self, enabled: bool) -> Self {
        self.continue_on_error = enabled;
        self
    }

    /// Returns the executor.
    #[must_use]
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    /// Splits `script` and executes its batches in order.
    ///
    /// Blank batches are skipped. A `GO n` repeat count is ignored and the
    /// batch runs once.
    pub async fn run(&self, script: &str) -> Result<RunReport> {
        let batches = split_batches(script);
        info!(batches = batches.len(), dry_run = self.dry_run, "Running script");

        let mut report = RunReport::start();

        for (index, batch) in batches.iter().enumerate() {
            if batch.is_blank() {
                debug!(batch = index, "Skipping blank batch");
                report.skipped += 1;
                continue;
            }

            if let Some(count) = batch.repeat_count {
                warn!(batch = index, count, "GO repeat count ignored, running batch once");
            }

            debug!(batch = index, sql = %batch.sql, "Executing batch");

            if self.dry_run {
                print!("{}", batch.sql);
                if !batch.sql.ends_with('\n') {
                    println!();
                }
                println!("GO");
                report.executed += 1;
                continue;
            }

            match self.executor.execute(&batch.sql).await {
                Ok(rows) => {
                    debug!(batch = index, rows, "Batch complete");
                    report.executed += 1;
                    report.rows_affected += rows;
                }
                Err(err) if self.continue_on_error => {
                    warn!(batch = index, error = %err, "Batch failed, continuing");
                    report.failures.push(SpeakerError::BatchFailed {
                        index,
                        source: Box::new(err),
                    });
                }
                Err(err) => {
                    return Err(SpeakerError::BatchFailed {
                        index,
                        source: Box::new(err),
                    });
                }
            }
        }

        report.finished_at = Utc::now();
        info!(
            executed = report.executed,
            skipped = report.skipped,
            failed = report.failures.len(),
            rows = report.rows_affected,
            "Script finished"
        );

        Ok(report)
    }
}
