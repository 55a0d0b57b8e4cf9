use anyhow::{Context, Result};
use clap::Parser;
use slug_squeeze::cli::{Args, Commands};
use slug_squeeze::constants::{INFO_PREFIX, SUCCESS_PREFIX};
use slug_squeeze::logger::{set_quiet_mode, set_verbose_mode};
use slug_squeeze::utils::{calculate_compression_ratio, format_file_size};
use slug_squeeze::{
    generate_output_name, read_report, run_batch, scan_directory, validate_slug,
    CompressionOptions, ConsoleObserver, ReportSummary, RunConfig,
};
use slug_squeeze::{info, warn};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args = Args::parse();
    set_quiet_mode(args.quiet);
    set_verbose_mode(args.verbose);

    match args.command {
        Commands::Run {
            slug,
            input,
            output_root,
            target_kb,
        } => run(slug, input, output_root, target_kb),
        Commands::Plan { slug, input } => plan(&slug, &input),
        Commands::Report { path } => show_report(&path),
    }
}

fn run(slug: String, input: PathBuf, output_root: PathBuf, target_kb: u64) -> Result<()> {
    let options = CompressionOptions::new(Some(target_kb))?;
    let config = RunConfig {
        slug: validate_slug(&slug)?,
        input_dir: input,
        output_root,
        options,
    };

    info!("=== Rename + Compress ===");
    info!("Slug      : {}", config.slug);
    info!("Input     : {}", config.input_dir.display());
    info!("Output    : {}", config.output_root.join(&config.slug).display());
    info!("Target    : {}KB", config.options.target_size_kb);
    info!();

    let mut observer = ConsoleObserver::new();
    let run = run_batch(&config, &mut observer).context("batch run failed")?;

    let (Some(report), Some(report_path)) = (&run.report, &run.report_path) else {
        return Ok(());
    };

    info!();
    print_summary(&report.summary);

    let (original_kb, output_kb) = report
        .items
        .iter()
        .filter(|item| !item.status.is_failure())
        .fold((0.0, 0.0), |(before, after), item| {
            (before + item.original_size_kb, after + item.output_size_kb)
        });
    info!(
        "Reduction       : {:.1}%",
        calculate_compression_ratio(original_kb, output_kb)
    );
    info!("Report          : {}", report_path.display());

    if report.summary.failed_count > 0 {
        warn!("{} file(s) failed, see {}", report.summary.failed_count, report_path.display());
    } else {
        info!("{} Done", SUCCESS_PREFIX);
    }
    Ok(())
}

fn plan(slug: &str, input: &Path) -> Result<()> {
    let slug = validate_slug(slug)?;
    let files = scan_directory(input)
        .with_context(|| format!("cannot scan {}", input.display()))?;

    if files.is_empty() {
        info!("No JPG/JPEG files found in {}", input.display());
        return Ok(());
    }

    info!("{} {} file(s) in processing order:", INFO_PREFIX, files.len());
    for (i, file) in files.iter().enumerate() {
        let size = std::fs::metadata(&file.path)
            .map(|m| format_file_size(m.len()))
            .unwrap_or_else(|_| "?".to_string());
        info!(
            "  {:<30} -> {}  ({})",
            file.filename,
            generate_output_name(i + 1, &slug),
            size
        );
    }
    Ok(())
}

fn show_report(path: &Path) -> Result<()> {
    let report = read_report(path)
        .with_context(|| format!("cannot read report {}", path.display()))?;
    print_summary(&report.summary);
    Ok(())
}

fn print_summary(summary: &ReportSummary) {
    info!("=== Summary ===");
    info!("Slug            : {}", summary.slug);
    info!("Total found     : {}", summary.total_found);
    info!("Total JPG/JPEG  : {}", summary.processable_count);
    info!("Processed       : {}", summary.processed_count);
    info!("Target met      : {}", summary.target_met_count);
    info!("Target not met  : {}", summary.target_not_met_count);
    info!("Failed          : {}", summary.failed_count);
    info!("Skipped         : {}", summary.skipped_count);
    info!("Output dir      : {}", summary.output_dir);
}
