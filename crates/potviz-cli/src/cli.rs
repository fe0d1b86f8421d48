use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "potviz contributors",
    version,
    about = "potviz - Renders illustrative potential energy curves and coil springs for molecular mechanics teaching material.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Without a subcommand the full gallery is rendered into the current directory.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Options shared by every figure.
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Draw figures in a hand-drawn (xkcd-like) style.
    #[arg(long, global = true)]
    pub sketch: bool,

    /// Seed for the hand-drawn wiggle; only used together with --sketch.
    #[arg(long, global = true, value_name = "INT", requires = "sketch")]
    pub sketch_seed: Option<u64>,

    /// Paint a white background instead of leaving it transparent.
    #[arg(long, global = true)]
    pub opaque: bool,

    /// Output resolution used to convert line widths from points to pixels.
    #[arg(long, global = true, value_name = "FLOAT")]
    pub dpi: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render all thirteen illustrations (seven potentials and six springs).
    Gallery(GalleryArgs),
    /// Render a single potential energy curve with its reference constants.
    Potential(PotentialArgs),
    /// Draw a coil spring along one axis.
    Spring(SpringArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Png,
    Svg,
}

/// Arguments for the `gallery` subcommand.
#[derive(Args, Debug, Default)]
pub struct GalleryArgs {
    /// Directory the figures are written to; created if missing.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Image format of every figure.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<ImageFormat>,
}

/// Arguments for the `potential` subcommand.
#[derive(Args, Debug)]
pub struct PotentialArgs {
    /// Potential to draw: bond, angle, torsion, improper, vdw, electrostatic or morse.
    #[arg(required = true, value_name = "KIND")]
    pub kind: String,

    /// Output image path; the extension selects PNG or SVG.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `spring` subcommand.
#[derive(Args, Debug)]
pub struct SpringArgs {
    /// Output image path; the extension selects PNG or SVG.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Long axis of the spring: x, y or z.
    #[arg(short, long, required = true, value_name = "AXIS")]
    pub axis: String,

    /// Number of loops in the coil.
    #[arg(short, long, value_name = "FLOAT")]
    pub loops: Option<f64>,

    /// Draw a thin rod through the middle of the coil.
    #[arg(short, long)]
    pub centerline: bool,
}
