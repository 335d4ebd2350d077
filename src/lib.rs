//! Boxdiff: structural diffs for identified bounding-box annotations.
//!
//! Boxdiff compares two versions of a hierarchical annotation collection
//! (bounding boxes grouped into images, images grouped into image sets) and
//! reports what changed. Entities are matched by a caller-supplied
//! identifier, never by geometry.
//!
//! # Modules
//!
//! - [`model`]: Entity types (BoundingBox, Image, ImageSet, Identifier) and JSON I/O
//! - [`diff`]: Coarse difference flags, deltas, and delta application
//! - [`error`]: Error types for boxdiff operations

pub mod diff;
pub mod error;
pub mod model;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

pub use error::BoxdiffError;

use model::io_json::read_json;
use model::{BoundingBox, Image, ImageSet};

/// The boxdiff CLI application.
#[derive(Parser)]
#[command(name = "boxdiff")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Log alignment details to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Report which kinds of change occurred between two versions.
    Diff(DiffArgs),
    /// Compute the full delta of TARGET relative to BASE.
    Delta(DeltaArgs),
    /// Print the intersection-over-union of two bounding boxes.
    Iou(IouArgs),
}

/// Arguments for the diff subcommand.
#[derive(clap::Args)]
struct DiffArgs {
    /// JSON file with the old version.
    old: PathBuf,

    /// JSON file with the new version.
    new: PathBuf,

    /// Entity level of both files ('box', 'image', or 'image-set').
    #[arg(long, default_value = "image-set")]
    level: String,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the delta subcommand.
#[derive(clap::Args)]
struct DeltaArgs {
    /// JSON file with the target version.
    target: PathBuf,

    /// JSON file with the base version.
    base: PathBuf,

    /// Entity level of both files ('box', 'image', or 'image-set').
    #[arg(long, default_value = "image-set")]
    level: String,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the iou subcommand.
#[derive(clap::Args)]
struct IouArgs {
    /// JSON file with the first bounding box.
    a: PathBuf,

    /// JSON file with the second bounding box.
    b: PathBuf,
}

/// Entity level named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Box,
    Image,
    ImageSet,
}

impl Level {
    fn parse(name: &str) -> Result<Self, BoxdiffError> {
        match name {
            "box" | "bbox" => Ok(Level::Box),
            "image" => Ok(Level::Image),
            "image-set" | "imageset" => Ok(Level::ImageSet),
            other => Err(BoxdiffError::UnsupportedLevel(format!(
                "'{}' (supported: box, image, image-set)",
                other
            ))),
        }
    }
}

/// Run the boxdiff CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), BoxdiffError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Diff(args)) => run_diff(args),
        Some(Commands::Delta(args)) => run_delta(args),
        Some(Commands::Iou(args)) => run_iou(args),
        None => {
            println!("boxdiff {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Structural diffs for identified bounding-box annotations.");
            println!();
            println!("Run 'boxdiff --help' for usage information.");
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "boxdiff=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Execute the diff subcommand.
fn run_diff(args: DiffArgs) -> Result<(), BoxdiffError> {
    let level = Level::parse(&args.level)?;
    tracing::info!(old = %args.old.display(), new = %args.new.display(), ?level, "diff");

    let flags = match level {
        Level::Box => {
            let (old, new) = read_pair::<BoundingBox>(&args.old, &args.new)?;
            diff::flag_names(&diff::bounding_box_diff(&old, &new))
        }
        Level::Image => {
            let (old, new) = read_pair::<Image>(&args.old, &args.new)?;
            diff::flag_names(&diff::image_diff(&old, &new))
        }
        Level::ImageSet => {
            let (old, new) = read_pair::<ImageSet>(&args.old, &args.new)?;
            diff::flag_names(&diff::image_set_diff(&old, &new))
        }
    };

    match args.output.as_str() {
        "json" => {
            #[derive(Serialize)]
            struct DiffOutput<'a> {
                level: &'a str,
                difference: &'a str,
            }
            print_json(&DiffOutput {
                level: &args.level,
                difference: &flags,
            })
        }
        _ => {
            println!("{}", flags);
            Ok(())
        }
    }
}

/// Execute the delta subcommand.
fn run_delta(args: DeltaArgs) -> Result<(), BoxdiffError> {
    let level = Level::parse(&args.level)?;
    tracing::info!(target_file = %args.target.display(), base = %args.base.display(), ?level, "delta");

    let json = args.output == "json";
    match level {
        Level::Box => {
            let (target, base) = read_pair::<BoundingBox>(&args.target, &args.base)?;
            emit(&target.delta(&base), json)
        }
        Level::Image => {
            let (target, base) = read_pair::<Image>(&args.target, &args.base)?;
            emit(&target.delta(&base)?, json)
        }
        Level::ImageSet => {
            let (target, base) = read_pair::<ImageSet>(&args.target, &args.base)?;
            emit(&target.delta(&base)?, json)
        }
    }
}

/// Execute the iou subcommand.
fn run_iou(args: IouArgs) -> Result<(), BoxdiffError> {
    let (a, b) = read_pair::<BoundingBox>(&args.a, &args.b)?;
    println!("{}", a.iou(&b));
    Ok(())
}

fn read_pair<T: serde::de::DeserializeOwned>(
    first: &Path,
    second: &Path,
) -> Result<(T, T), BoxdiffError> {
    Ok((read_json(first)?, read_json(second)?))
}

fn emit<T: Serialize + std::fmt::Display>(value: &T, json: bool) -> Result<(), BoxdiffError> {
    if json {
        print_json(value)
    } else {
        let text = value.to_string();
        if text.ends_with('\n') {
            print!("{}", text);
        } else {
            println!("{}", text);
        }
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), BoxdiffError> {
    let json = model::io_json::to_json_string(value).map_err(|source| BoxdiffError::JsonWrite {
        path: PathBuf::from("<stdout>"),
        source,
    })?;
    println!("{}", json);
    Ok(())
}
