use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_ROOT, TARGET_SIZE_KB};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "slug-squeeze",
    about = "Rename JPEG photos to a slug and recompress them under a target size",
    long_about = "slug-squeeze takes every JPG/JPEG in an input directory, orders them by modification time, \
                  and writes them as 01-<slug>.jpg, 02-<slug>.jpg, ... recompressed to fit a size budget. \
                  Quality is lowered first; if that is not enough the image is downscaled. \
                  A result.json report is written next to the images.",
    version,
    after_help = "EXAMPLES:\n  \
    slug-squeeze run bangkok-chocolate-village\n  \
    slug-squeeze run trip-2024 -i ./photos -o ./out -t 300\n  \
    slug-squeeze plan trip-2024 -i ./photos\n  \
    slug-squeeze report ./done-compress/trip-2024/result.json"
)]
pub struct Args {
    #[arg(short = 'q', long, global = true, help = "Only print errors")]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Print every compression attempt"
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Rename and compress every JPEG in the input directory",
        long_about = "Scan the input directory, compress each JPG/JPEG under the target size \
                      and write it to <output-root>/<slug>/NN-<slug>.jpg. \
                      Fails if the output directory already exists."
    )]
    Run {
        #[arg(help = "Slug used in output filenames (a-z, 0-9, -)")]
        slug: String,

        #[arg(
            short = 'i',
            long,
            default_value = DEFAULT_INPUT_DIR,
            help = "Input directory containing JPG/JPEG files"
        )]
        input: PathBuf,

        #[arg(
            short = 'o',
            long,
            default_value = DEFAULT_OUTPUT_ROOT,
            help = "Directory under which <slug>/ is created"
        )]
        output_root: PathBuf,

        #[arg(
            short = 't',
            long,
            default_value_t = TARGET_SIZE_KB,
            help = "Target size per image in KB"
        )]
        target_kb: u64,
    },

    #[command(
        about = "Show the processing order and output names without writing anything"
    )]
    Plan {
        #[arg(help = "Slug used in output filenames (a-z, 0-9, -)")]
        slug: String,

        #[arg(
            short = 'i',
            long,
            default_value = DEFAULT_INPUT_DIR,
            help = "Input directory containing JPG/JPEG files"
        )]
        input: PathBuf,
    },

    #[command(about = "Print the summary of an existing result.json")]
    Report {
        #[arg(help = "Path to result.json")]
        path: PathBuf,
    },
}
