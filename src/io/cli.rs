//! Command-line interface for single and batch pattern compositing

use crate::compose::{CompositeParams, MaskChannel, PatternCompositor};
use crate::io::catalog::{Preset, PresetCatalog};
use crate::io::configuration::{
    COLOR_BOOST_RANGE, CONTRAST_RANGE, DEFAULT_COLOR_BOOST, DEFAULT_CONTRAST, DEFAULT_LOG_FILTER,
    DEFAULT_SHADOW, DEFAULT_TILE_SCALE, OUTPUT_EXTENSION, OUTPUT_SUFFIX, QUIET_LOG_FILTER,
    SHADOW_RANGE, TILE_SCALE_RANGE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_image, save_image};
use crate::io::progress::BatchProgress;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "patternfit")]
#[command(
    author,
    version,
    about = "Composite a tiled pattern onto the masked region of a photograph"
)]
/// Command-line arguments for the pattern compositor
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Operations offered by the command line
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Composite a pattern onto one base image
    Apply {
        /// Base photograph
        #[arg(value_name = "BASE")]
        base: PathBuf,

        /// Mask selecting where the pattern goes (white = full effect)
        #[arg(value_name = "MASK")]
        mask: PathBuf,

        /// Pattern tile
        #[arg(value_name = "PATTERN")]
        pattern: PathBuf,

        /// Output file (defaults to <BASE stem>_result.png beside the base)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compositing parameters
        #[command(flatten)]
        params: ParamArgs,
    },

    /// List preset model/mask pairs under a catalog root
    Presets {
        /// Directory containing `models/` and `masks/`
        #[arg(value_name = "ROOT")]
        root: PathBuf,
    },

    /// Apply one pattern to every preset in a catalog
    Batch {
        /// Directory containing `models/` and `masks/`
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Pattern tile
        #[arg(value_name = "PATTERN")]
        pattern: PathBuf,

        /// Output directory (defaults to ROOT)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only process the preset with this identifier
        #[arg(long)]
        preset: Option<String>,

        /// Process presets even if output exists
        #[arg(short, long)]
        no_skip: bool,

        /// Compositing parameters
        #[command(flatten)]
        params: ParamArgs,
    },
}

/// Compositing parameters shared by `apply` and `batch`
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct ParamArgs {
    /// Shadow strength (0 = no shading, 1.25 = strong shading)
    #[arg(long, default_value_t = DEFAULT_SHADOW, allow_negative_numbers = true)]
    pub shadow: f32,

    /// Color boost (vividness), typically 0.8 to 3
    #[arg(long, default_value_t = DEFAULT_COLOR_BOOST, allow_negative_numbers = true)]
    pub color_boost: f32,

    /// Final contrast inside the mask, typically 0.5 to 4
    #[arg(long, default_value_t = DEFAULT_CONTRAST, allow_negative_numbers = true)]
    pub contrast: f32,

    /// Pattern size (1 = large, 10 = small)
    #[arg(short, long, default_value_t = DEFAULT_TILE_SCALE)]
    pub tile_scale: u32,

    /// Mask channel carrying the effect strength
    #[arg(short, long, value_enum, default_value_t = MaskChannel::default())]
    pub mask_channel: MaskChannel,
}

impl ParamArgs {
    /// Parameter set for the compositor
    pub const fn params(&self) -> CompositeParams {
        CompositeParams::new(self.shadow, self.color_boost, self.contrast, self.tile_scale)
    }

    /// Names of parameters outside the range the tool is tuned for
    pub fn outside_typical_range(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if !(SHADOW_RANGE.0..=SHADOW_RANGE.1).contains(&self.shadow) {
            names.push("shadow");
        }
        if !(COLOR_BOOST_RANGE.0..=COLOR_BOOST_RANGE.1).contains(&self.color_boost) {
            names.push("color_boost");
        }
        if !(CONTRAST_RANGE.0..=CONTRAST_RANGE.1).contains(&self.contrast) {
            names.push("contrast");
        }
        if !(TILE_SCALE_RANGE.0..=TILE_SCALE_RANGE.1).contains(&self.tile_scale) {
            names.push("tile_scale");
        }
        names
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence; otherwise `--quiet` lowers the level to warnings.
pub fn init_logging(quiet: bool) {
    let fallback = if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Output path for a single `apply` run: `<stem>_result.png` beside the base
pub fn default_output_path(base_path: &Path) -> PathBuf {
    let stem = base_path.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        OUTPUT_SUFFIX,
        OUTPUT_EXTENSION
    );

    if let Some(parent) = base_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Output path for one preset of a batch: `<dir>/<id>_result.png`
pub fn preset_output_path(output_dir: &Path, id: &str) -> PathBuf {
    output_dir.join(format!("{id}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}"))
}

/// Executes the parsed command
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid, an input cannot be loaded,
    /// the catalog cannot be scanned, or an output cannot be written
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Apply {
                base,
                mask,
                pattern,
                output,
                params,
            } => {
                let output_path = output.clone().unwrap_or_else(|| default_output_path(base));
                Self::apply(base, mask, pattern, &output_path, params)
            }
            Command::Presets { root } => Self::list_presets(root),
            Command::Batch {
                root,
                pattern,
                output,
                preset,
                no_skip,
                params,
            } => {
                let output_dir = output.clone().unwrap_or_else(|| root.clone());
                let request = BatchRequest {
                    root,
                    pattern,
                    output_dir: &output_dir,
                    preset: preset.as_deref(),
                    skip_existing: !*no_skip,
                    show_progress: self.cli.should_show_progress(),
                };
                Self::batch(&request, params)
            }
        }
    }

    fn compositor(params: &ParamArgs) -> Result<PatternCompositor> {
        for name in params.outside_typical_range() {
            warn!(parameter = name, "Parameter is outside its typical range");
        }
        PatternCompositor::new(params.params())
    }

    fn apply(
        base: &Path,
        mask: &Path,
        pattern: &Path,
        output_path: &Path,
        params: &ParamArgs,
    ) -> Result<()> {
        let compositor = Self::compositor(params)?;
        let start_time = Instant::now();

        let result = compositor.composite_dynamic(
            &load_image(base)?,
            &load_image(mask)?,
            &load_image(pattern)?,
            params.mask_channel,
        )?;
        save_image(&result, output_path)?;

        info!(
            output = %output_path.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Wrote composite"
        );
        Ok(())
    }

    // Listing is the command's output, not a log message
    #[allow(clippy::print_stdout)]
    fn list_presets(root: &Path) -> Result<()> {
        let catalog = PresetCatalog::scan(root)?;
        for preset in catalog.presets() {
            println!(
                "{}\t{}\t{}",
                preset.id,
                preset.image_path.display(),
                preset.mask_path.display()
            );
        }
        Ok(())
    }

    fn batch(request: &BatchRequest<'_>, params: &ParamArgs) -> Result<()> {
        let compositor = Self::compositor(params)?;
        let catalog = PresetCatalog::scan(request.root)?;
        info!(
            root = %request.root.display(),
            presets = catalog.len(),
            "Scanned preset catalog"
        );

        let selected: Vec<&Preset> = match request.preset {
            Some(id) => vec![catalog.find(id).ok_or_else(|| {
                invalid_parameter("preset", &id, &"no preset with this identifier")
            })?],
            None => catalog.presets().iter().collect(),
        };

        if selected.is_empty() {
            warn!(root = %request.root.display(), "Catalog has no presets");
            return Ok(());
        }

        let pattern = load_image(request.pattern)?;
        let mut progress = if request.show_progress {
            BatchProgress::new(selected.len())
        } else {
            BatchProgress::hidden(selected.len())
        };

        for preset in selected {
            let output_path = preset_output_path(request.output_dir, &preset.id);
            if request.skip_existing && output_path.exists() {
                info!(preset = %preset.id, "Skipping (output exists)");
                progress.skip();
                continue;
            }

            progress.start(&preset.id);
            let result = compositor.composite_dynamic(
                &load_image(&preset.image_path)?,
                &load_image(&preset.mask_path)?,
                &pattern,
                params.mask_channel,
            )?;
            save_image(&result, &output_path)?;
            progress.complete();
        }

        progress.finish();
        info!(
            handled = progress.position(),
            written = progress.written(),
            skipped = progress.skipped(),
            "Batch finished"
        );
        Ok(())
    }
}

/// Inputs of one batch run, resolved from the command line
struct BatchRequest<'a> {
    root: &'a Path,
    pattern: &'a Path,
    output_dir: &'a Path,
    preset: Option<&'a str>,
    skip_existing: bool,
    show_progress: bool,
}
