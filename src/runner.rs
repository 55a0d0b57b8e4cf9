use crate::batch::{process_files, BatchObserver, ProcessResult};
use crate::error::Result;
use crate::processing::CompressionOptions;
use crate::report::{write_report, Report, ReportSummary};
use crate::scanner::{count_files, scan_directory};
use crate::validation::{
    create_output_dir, ensure_output_dir_absent, validate_input_dir, validate_slug,
};
use crate::info;
use std::path::PathBuf;

/// Everything needed for one rename + compress run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub slug: String,
    pub input_dir: PathBuf,
    /// The batch is written to `<output_root>/<slug>`.
    pub output_root: PathBuf,
    pub options: CompressionOptions,
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct BatchRun {
    pub output_dir: PathBuf,
    pub total_found: usize,
    /// `None` when there was nothing to process.
    pub report: Option<Report>,
    pub report_path: Option<PathBuf>,
}

impl BatchRun {
    pub fn items(&self) -> &[ProcessResult] {
        self.report.as_ref().map(|r| r.items.as_slice()).unwrap_or_default()
    }
}

/// Scans, compresses and reports one batch.
///
/// Setup failures (bad slug, missing input directory, existing output
/// directory) abort before any file is touched. Per-file failures end up in
/// the report. A report that cannot be written is returned as an error; the
/// images written before it stay in place.
pub fn run_batch(config: &RunConfig, observer: &mut dyn BatchObserver) -> Result<BatchRun> {
    let slug = validate_slug(&config.slug)?;
    config.options.validate()?;
    validate_input_dir(&config.input_dir)?;
    let output_dir = ensure_output_dir_absent(&config.output_root, &slug)?;

    info!("Scanning input directory...");
    let total_found = count_files(&config.input_dir)?;
    let scanned = scan_directory(&config.input_dir)?;
    info!("Total files found : {}", total_found);
    info!("JPG/JPEG files    : {}", scanned.len());

    if scanned.is_empty() {
        info!(
            "No JPG/JPEG files found in {}. Nothing to process.",
            config.input_dir.display()
        );
        return Ok(BatchRun {
            output_dir,
            total_found,
            report: None,
            report_path: None,
        });
    }

    create_output_dir(&output_dir)?;

    info!("Processing files...");
    let items = process_files(&scanned, &slug, &output_dir, &config.options, observer);

    let summary = ReportSummary::from_items(
        &slug,
        &config.input_dir,
        &output_dir,
        total_found,
        scanned.len(),
        &items,
    );
    let report = Report::new(summary, items);

    let report_path = write_report(&output_dir, &report)?;

    Ok(BatchRun {
        output_dir,
        total_found,
        report: Some(report),
        report_path: Some(report_path),
    })
}
