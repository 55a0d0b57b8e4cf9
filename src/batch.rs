use crate::constants::OUTPUT_EXTENSION;
use crate::error::AgentError;
use crate::processing::{compress_file, CompressResult, CompressionOptions};
use crate::scanner::ScannedFile;
use crate::utils::{bytes_to_kb, round2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-file status recorded in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    CannotReachTarget,
    ReadError,
    CompressError,
    WriteError,
    /// Reserved: the scanner already filters unsupported extensions.
    SkippedUnsupported,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::CannotReachTarget => "cannot_reach_target",
            Status::ReadError => "read_error",
            Status::CompressError => "compress_error",
            Status::WriteError => "write_error",
            Status::SkippedUnsupported => "skipped_unsupported",
        }
    }

    /// The file never produced a compressed buffer.
    pub fn is_unprocessed(&self) -> bool {
        matches!(self, Status::ReadError | Status::CompressError)
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Status::ReadError | Status::CompressError | Status::WriteError
        )
    }
}

/// One report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub index: usize,
    pub original_name: String,
    pub output_name: String,
    #[serde(rename = "originalSizeKB")]
    pub original_size_kb: f64,
    #[serde(rename = "outputSizeKB")]
    pub output_size_kb: f64,
    pub quality: Option<u8>,
    pub resize_scale: f64,
    #[serde(rename = "targetSizeKB")]
    pub target_size_kb: u64,
    pub target_met: bool,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What happened to a single file, before it is flattened into a row.
#[derive(Debug)]
pub enum FileOutcome {
    Completed {
        original_size_kb: f64,
        compressed: CompressResult,
    },
    ReadFailed(AgentError),
    CompressFailed {
        original_size_kb: f64,
        error: AgentError,
    },
    WriteFailed {
        original_size_kb: f64,
        compressed: CompressResult,
        error: AgentError,
    },
}

impl ProcessResult {
    pub fn from_outcome(
        index: usize,
        original_name: &str,
        output_name: &str,
        target_size_kb: u64,
        outcome: FileOutcome,
    ) -> Self {
        let row = |original_size_kb: f64, status: Status| Self {
            index,
            original_name: original_name.to_string(),
            output_name: output_name.to_string(),
            original_size_kb: round2(original_size_kb),
            output_size_kb: 0.0,
            quality: None,
            resize_scale: 1.0,
            target_size_kb,
            target_met: false,
            status,
            message: None,
        };

        match outcome {
            FileOutcome::Completed {
                original_size_kb,
                compressed,
            } => {
                let status = if compressed.target_met {
                    Status::Ok
                } else {
                    Status::CannotReachTarget
                };
                Self {
                    output_size_kb: round2(compressed.output_size_kb),
                    quality: Some(compressed.quality),
                    resize_scale: compressed.resize_scale,
                    target_met: compressed.target_met,
                    message: (!compressed.target_met).then(|| {
                        format!(
                            "Cannot reach {}KB target at minimum quality and resize thresholds",
                            target_size_kb
                        )
                    }),
                    ..row(original_size_kb, status)
                }
            }
            FileOutcome::ReadFailed(error) => Self {
                message: Some(error.to_string()),
                ..row(0.0, Status::ReadError)
            },
            FileOutcome::CompressFailed {
                original_size_kb,
                error,
            } => Self {
                message: Some(error.to_string()),
                ..row(original_size_kb, Status::CompressError)
            },
            FileOutcome::WriteFailed {
                original_size_kb,
                compressed,
                error,
            } => Self {
                output_size_kb: round2(compressed.output_size_kb),
                quality: Some(compressed.quality),
                resize_scale: compressed.resize_scale,
                message: Some(error.to_string()),
                ..row(original_size_kb, Status::WriteError)
            },
        }
    }
}

/// Receives progress while a batch runs. Purely observational.
pub trait BatchObserver {
    fn batch_started(&mut self, _total: usize) {}

    fn file_finished(&mut self, _result: &ProcessResult) {}

    fn batch_finished(&mut self) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl BatchObserver for NullObserver {}

/// `NN-slug.jpg`, zero-padded to at least two digits.
pub fn generate_output_name(index: usize, slug: &str) -> String {
    format!("{:02}-{}.{}", index, slug, OUTPUT_EXTENSION)
}

/// Compresses every scanned file into `output_dir` under its sequential name.
///
/// Files are handled one at a time in the given order. A failure on one file
/// is recorded in its row and never stops the batch, so the returned list
/// always has one entry per input, in input order.
pub fn process_files(
    files: &[ScannedFile],
    slug: &str,
    output_dir: &Path,
    options: &CompressionOptions,
    observer: &mut dyn BatchObserver,
) -> Vec<ProcessResult> {
    observer.batch_started(files.len());

    let mut results = Vec::with_capacity(files.len());
    for (i, file) in files.iter().enumerate() {
        let index = i + 1;
        let output_name = generate_output_name(index, slug);
        let outcome = process_single_file(file, &output_dir.join(&output_name), options);

        let result = ProcessResult::from_outcome(
            index,
            &file.filename,
            &output_name,
            options.target_size_kb,
            outcome,
        );
        observer.file_finished(&result);
        results.push(result);
    }

    observer.batch_finished();
    results
}

fn process_single_file(
    file: &ScannedFile,
    output_path: &Path,
    options: &CompressionOptions,
) -> FileOutcome {
    let original_size_kb = match fs::metadata(&file.path) {
        Ok(metadata) => bytes_to_kb(metadata.len()),
        Err(e) => return FileOutcome::ReadFailed(e.into()),
    };

    let compressed = match compress_file(&file.path, options) {
        Ok(compressed) => compressed,
        Err(error) => {
            return FileOutcome::CompressFailed {
                original_size_kb,
                error,
            }
        }
    };

    match fs::write(output_path, &compressed.buffer) {
        Ok(()) => FileOutcome::Completed {
            original_size_kb,
            compressed,
        },
        Err(e) => FileOutcome::WriteFailed {
            original_size_kb,
            compressed,
            error: e.into(),
        },
    }
}
