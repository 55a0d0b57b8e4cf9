pub const TARGET_SIZE_KB: u64 = 500;

pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Phase 1: quality-only steps, high to low.
pub const QUALITY_STEPS: [u8; 11] = [90, 85, 80, 75, 70, 65, 60, 55, 50, 45, 40];

/// Phase 2: resize fallback, applied at the lowest quality.
pub const RESIZE_QUALITY: u8 = 40;
pub const RESIZE_SCALE_STEP: f64 = 0.8;
pub const MIN_RESIZE_SCALE: f64 = 0.1;
pub const SMALLEST_RESIZE_SCALE: f64 = 0.01;

pub const SUPPORTED_JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
pub const OUTPUT_EXTENSION: &str = "jpg";
pub const REPORT_FILE_NAME: &str = "result.json";

pub const DEFAULT_INPUT_DIR: &str = "compress";
pub const DEFAULT_OUTPUT_ROOT: &str = "done-compress";

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";
pub const PROGRESS_BAR_CHARS: &str = "=>-";

// Per-file console markers
pub const OK_MARKER: &str = "[OK  ]";
pub const WARN_MARKER: &str = "[WARN]";
pub const FAIL_MARKER: &str = "[FAIL]";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const ERROR_PREFIX: &str = "❌";
pub const INFO_PREFIX: &str = "📋";
pub const VERBOSE_PREFIX: &str = "🔍";
