//! Command-line interface for joining two images along a minimal seam

use crate::algorithm::{Execution, MetricKind};
use crate::io::configuration::{DEFAULT_OVERLAP, OUTPUT_SUFFIX, VISUALIZATION_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_rgba, save_rgba};
use crate::io::join::join_images;
use crate::io::visualization::render_seam_overlay;
use crate::spatial::SeamDirection;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "seamcut")]
#[command(
    author,
    version,
    about = "Join two overlapping images along a minimum-error seam"
)]
/// Command-line arguments for the seam join tool
pub struct Cli {
    /// First image (left for horizontal joins, top for vertical joins)
    #[arg(value_name = "FIRST")]
    pub first: PathBuf,

    /// Second image (right for horizontal joins, bottom for vertical joins)
    #[arg(value_name = "SECOND")]
    pub second: PathBuf,

    /// Overlap between the images in pixels
    #[arg(short, long, default_value_t = DEFAULT_OVERLAP)]
    pub overlap: usize,

    /// Join direction: horizontal (side by side) or vertical (stacked)
    #[arg(short, long, default_value_t = SeamDirection::Horizontal)]
    pub direction: SeamDirection,

    /// Per-pixel error metric used to score cuts
    #[arg(short, long, value_enum, default_value_t = MetricKind::Ssd)]
    pub metric: MetricKind,

    /// Output path (defaults to <first>_<second>_joined.png next to FIRST)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a copy with the seam highlighted
    #[arg(short, long)]
    pub visualize: bool,

    /// Run every pass on the calling thread
    #[arg(long)]
    pub sequential: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Scheduling requested on the command line
    pub const fn execution(&self) -> Execution {
        if self.sequential {
            Execution::Sequential
        } else {
            Execution::Parallel
        }
    }

    /// Path the joined image is written to
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.first, &self.second))
    }

    /// Path the seam overlay is written to
    pub fn visualization_path(&self) -> PathBuf {
        with_stem_suffix(&self.output_path(), VISUALIZATION_SUFFIX)
    }
}

/// Runs a single join described by the command line
pub struct JoinProcessor {
    cli: Cli,
}

impl JoinProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load both inputs, join them and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error if an input is missing or unreadable, the images
    /// cannot be joined with the requested overlap, or an output cannot be
    /// written
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();

        for input in [&self.cli.first, &self.cli.second] {
            if !input.is_file() {
                return Err(invalid_parameter(
                    "input",
                    &input.display(),
                    &"input must be an existing image file",
                ));
            }
        }

        let first = load_rgba(&self.cli.first)?;
        let second = load_rgba(&self.cli.second)?;
        tracing::debug!(
            first = %self.cli.first.display(),
            second = %self.cli.second.display(),
            "Loaded inputs"
        );

        let result = join_images(
            &first,
            &second,
            self.cli.overlap,
            self.cli.direction,
            self.cli.metric,
            self.cli.execution(),
        )?;

        let output_path = self.cli.output_path();
        save_rgba(&result.image, &output_path)?;

        if self.cli.visualize {
            save_rgba(&render_seam_overlay(&result), self.cli.visualization_path())?;
        }

        // Allow print for user feedback on completion
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            eprintln!(
                "Joined {} + {} -> {} (seam cost {:.4}, {:.2?})",
                self.cli.first.display(),
                self.cli.second.display(),
                output_path.display(),
                result.seam.cost(),
                start_time.elapsed()
            );
        }

        Ok(())
    }
}

fn default_output_path(first: &Path, second: &Path) -> PathBuf {
    let first_stem = first.file_stem().unwrap_or_default();
    let second_stem = second.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}_{}{}.png",
        first_stem.to_string_lossy(),
        second_stem.to_string_lossy(),
        OUTPUT_SUFFIX
    );

    if let Some(parent) = first.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let extension = path.extension().unwrap_or_default();
    let name = if extension.is_empty() {
        format!("{}{suffix}", stem.to_string_lossy())
    } else {
        format!(
            "{}{suffix}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        )
    };

    if let Some(parent) = path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
