use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roundpic", version, about = "ROUNDPIC CLI")]
pub struct CliArgs {
    /// Directory containing images that still need the circular crop
    #[arg(short = 'n', long)]
    pub non_circle_input_directory: Option<PathBuf>,

    /// Directory containing images that are already circular
    #[arg(short = 'c', long)]
    pub circle_input_directory: Option<PathBuf>,

    /// Directory the PNG/JPEG pairs are written to
    #[arg(short = 'o', long)]
    pub output_directory: PathBuf,

    /// Target square size in pixels
    #[arg(short = 'r', long, default_value_t = 100)]
    pub resize: u32,

    /// Honor the target size on the non-circle path as well (historically
    /// that path always resizes to 100x100)
    #[arg(long, default_value_t = false)]
    pub unified_resize: bool,

    /// Abort the whole run on the first per-file error instead of
    /// continuing and reporting a summary
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
