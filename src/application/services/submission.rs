//! Batch submission pipeline: validation, code generation, atomic commit.

use std::collections::HashSet;
use std::sync::Arc;

use metrics::counter;
use thiserror::Error;

use crate::domain::entities::LinkRecord;
use crate::domain::errors::{RowError, StoreError};
use crate::domain::stores::LinkRegistry;
use crate::infrastructure::telemetry::{TelemetryLevel, TelemetrySink, TelemetryStack};
use crate::utils::clock::Clock;
use crate::utils::code_generator::generate_code;
use crate::utils::validation::{validate_shortcode, validate_url, validate_validity};

/// One raw submission row, fields as the caller typed them.
///
/// A row with all three fields absent is skipped outright. For `validity` and
/// `shortcode`, a blank string counts as absent; a blank `long_url` is
/// provided-but-empty input and fails as [`RowError::MissingUrl`].
#[derive(Debug, Clone, Default)]
pub struct SubmissionRow {
    pub long_url: Option<String>,
    pub validity: Option<String>,
    pub shortcode: Option<String>,
}

/// A rejected row, indexed against the original input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    pub row: usize,
    pub error: RowError,
}

/// Why a batch produced no records.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more rows failed validation; nothing was committed.
    #[error("batch rejected: {} row(s) failed validation", issues.len())]
    Rejected { issues: Vec<RowIssue> },

    /// The commit itself failed — for [`StoreError::DuplicateShortcode`],
    /// a writer got there between our snapshot and the insert.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates validation + code generation + registry insertion for a batch
/// of link-creation requests.
///
/// The batch is all-or-nothing: any rejected row leaves the registry
/// untouched, so a caller correcting its input resubmits against a clean
/// namespace.
pub struct SubmissionPipeline {
    registry: Arc<dyn LinkRegistry>,
    clock: Arc<dyn Clock>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl SubmissionPipeline {
    pub fn new(
        registry: Arc<dyn LinkRegistry>,
        clock: Arc<dyn Clock>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self {
            registry,
            clock,
            telemetry,
        }
    }

    /// Processes a batch of rows.
    ///
    /// Each row is validated independently against the registry snapshot plus
    /// the codes already reserved earlier in the batch. Rows that are empty
    /// across all fields are skipped without producing a record or an error.
    ///
    /// # Returns
    ///
    /// On success, the newly created records in input order.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Rejected`] with one classification per failing row, or
    /// [`SubmitError::Store`] if the atomic commit fails.
    pub async fn submit(&self, rows: Vec<SubmissionRow>) -> Result<Vec<LinkRecord>, SubmitError> {
        let snapshot = self.registry.list_all().await.map_err(SubmitError::Store)?;
        let mut taken: HashSet<String> = snapshot.into_iter().map(|r| r.shortcode).collect();

        let mut created = Vec::new();
        let mut issues = Vec::new();

        for (idx, row) in rows.iter().enumerate() {
            match self.process_row(row, &mut taken) {
                Ok(Some(record)) => created.push(record),
                Ok(None) => {}
                Err(error) => {
                    self.telemetry.emit(
                        TelemetryStack::Backend,
                        TelemetryLevel::Error,
                        "pipeline",
                        &format!("row {}: {}", idx + 1, error),
                    );
                    issues.push(RowIssue { row: idx, error });
                }
            }
        }

        if !issues.is_empty() {
            counter!("rocketlink_batches_total", "outcome" => "rejected").increment(1);
            return Err(SubmitError::Rejected { issues });
        }

        self.registry.insert_all(created.clone()).await?;

        counter!("rocketlink_batches_total", "outcome" => "committed").increment(1);
        counter!("rocketlink_links_created_total").increment(created.len() as u64);
        self.telemetry.emit(
            TelemetryStack::Backend,
            TelemetryLevel::Info,
            "pipeline",
            &format!("batch committed: {} link(s)", created.len()),
        );

        Ok(created)
    }

    /// Validates one row and reserves its code in the batch-local taken set.
    ///
    /// `Ok(None)` means the row was empty and skipped.
    fn process_row(
        &self,
        row: &SubmissionRow,
        taken: &mut HashSet<String>,
    ) -> Result<Option<LinkRecord>, RowError> {
        if row.long_url.is_none() && row.validity.is_none() && row.shortcode.is_none() {
            return Ok(None);
        }

        let long_url = present(&row.long_url).ok_or(RowError::MissingUrl)?;
        validate_url(long_url)?;

        let validity = present(&row.validity);
        let shortcode = present(&row.shortcode);

        let minutes = validate_validity(validity.unwrap_or(""))?;

        let code = match shortcode {
            Some(code) => {
                validate_shortcode(code)?;
                if taken.contains(code) {
                    return Err(RowError::ShortcodeCollision);
                }
                code.to_string()
            }
            None => generate_code(taken),
        };

        // reserve immediately so later rows in this batch cannot collide
        taken.insert(code.clone());

        let created_at = self.clock.now_ms();
        let window_ms = minutes
            .checked_mul(60_000)
            .ok_or(RowError::InvalidValidity)?;
        let expires_at = created_at
            .checked_add(window_ms)
            .ok_or(RowError::InvalidValidity)?;

        Ok(Some(LinkRecord {
            long_url: long_url.to_string(),
            shortcode: code,
            created_at,
            expires_at,
        }))
    }
}

/// Trims a field, mapping blank input to "absent".
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
