use crate::batch::{ProcessResult, Status};
use crate::constants::REPORT_FILE_NAME;
use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub slug: String,
    pub input_dir: String,
    pub output_dir: String,
    pub total_found: usize,
    pub processable_count: usize,
    pub processed_count: usize,
    pub target_met_count: usize,
    pub target_not_met_count: usize,
    pub failed_count: usize,
    pub skipped_count: usize,
}

impl ReportSummary {
    /// Aggregates the rows of a finished batch. Counters depend only on `items`.
    pub fn from_items(
        slug: &str,
        input_dir: &Path,
        output_dir: &Path,
        total_found: usize,
        processable_count: usize,
        items: &[ProcessResult],
    ) -> Self {
        let count = |predicate: fn(&ProcessResult) -> bool| items.iter().filter(|i| predicate(i)).count();

        Self {
            slug: slug.to_string(),
            input_dir: input_dir.display().to_string(),
            output_dir: output_dir.display().to_string(),
            total_found,
            processable_count,
            processed_count: count(|i| !i.status.is_unprocessed()),
            target_met_count: count(|i| i.target_met),
            target_not_met_count: count(|i| i.status == Status::CannotReachTarget),
            failed_count: count(|i| i.status.is_failure()),
            skipped_count: count(|i| i.status == Status::SkippedUnsupported),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub items: Vec<ProcessResult>,
}

impl Report {
    pub fn new(summary: ReportSummary, items: Vec<ProcessResult>) -> Self {
        Self { summary, items }
    }
}

/// Writes `result.json` into `output_dir` and returns its path.
pub fn write_report(output_dir: &Path, report: &Report) -> Result<PathBuf> {
    let report_path = output_dir.join(REPORT_FILE_NAME);
    let content = serde_json::to_string_pretty(report)?;
    fs::write(&report_path, content).map_err(|source| AgentError::ReportWrite {
        path: report_path.clone(),
        source,
    })?;
    Ok(report_path)
}

pub fn read_report(path: &Path) -> Result<Report> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
