pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scanner;
pub mod utils;
pub mod validation;

pub use batch::{
    generate_output_name, process_files, BatchObserver, FileOutcome, NullObserver, ProcessResult,
    Status,
};
pub use error::{AgentError, Result};
pub use processing::{
    compress_file, compress_to_target, CompressResult, CompressionOptions, JpegCodec, SourceImage,
};
pub use progress::ConsoleObserver;
pub use report::{read_report, write_report, Report, ReportSummary};
pub use runner::{run_batch, BatchRun, RunConfig};
pub use scanner::{count_files, scan_directory, ScannedFile};
pub use validation::validate_slug;
