use crate::batch::{BatchObserver, ProcessResult, Status};
use crate::constants::{
    FAIL_MARKER, OK_MARKER, PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE, SUCCESS_PREFIX,
    WARN_MARKER,
};
use crate::logger::is_quiet;
use indicatif::{ProgressBar, ProgressStyle};

/// Console progress: a bar over the batch plus one line per file.
#[derive(Default)]
pub struct ConsoleObserver {
    bar: Option<ProgressBar>,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BatchObserver for ConsoleObserver {
    fn batch_started(&mut self, total: usize) {
        let bar = if is_quiet() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };
        if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            bar.set_style(style.progress_chars(PROGRESS_BAR_CHARS));
        }
        self.bar = Some(bar);
    }

    fn file_finished(&mut self, result: &ProcessResult) {
        let line = format_result_line(result);
        match &self.bar {
            // A hidden bar swallows println, e.g. when stderr is not a terminal.
            Some(bar) if bar.is_hidden() => {
                crate::info!("{}", line);
                bar.inc(1);
            }
            Some(bar) => {
                bar.println(line);
                bar.set_message(result.output_name.clone());
                bar.inc(1);
            }
            None => crate::info!("{}", line),
        }
    }

    fn batch_finished(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(format!("{} Batch complete", SUCCESS_PREFIX));
        }
    }
}

/// `"  [OK  ] 01-slug.jpg  1234.56KB -> 480.12KB  q=85  resize=64%"`
pub fn format_result_line(result: &ProcessResult) -> String {
    match result.status {
        Status::Ok | Status::CannotReachTarget => {
            let marker = if result.target_met { OK_MARKER } else { WARN_MARKER };
            let resize_info = if result.resize_scale < 1.0 {
                format!("  resize={:.0}%", result.resize_scale * 100.0)
            } else {
                String::new()
            };
            format!(
                "  {} {}  {}KB -> {}KB  q={}{}",
                marker,
                result.output_name,
                result.original_size_kb,
                result.output_size_kb,
                result.quality.unwrap_or_default(),
                resize_info
            )
        }
        status => {
            let name = if status == Status::WriteError {
                &result.output_name
            } else {
                &result.original_name
            };
            format!(
                "  {} {} -> {}: {}",
                FAIL_MARKER,
                name,
                status.as_str(),
                result.message.as_deref().unwrap_or_default()
            )
        }
    }
}
