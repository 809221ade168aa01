//! Body measurement from the command line.
//!
//! # Commands
//!
//! - `body-measure report <MESH>` - Measure every landmark and print the report
//! - `body-measure section <MESH> --fraction F` - Inspect a single cross-section
//! - `body-measure plot <MESH> --out-dir DIR` - Write one SVG per landmark section
//!
//! Meshes are read from `.obj` or `.stl` files. Lengths are reported in the
//! mesh's units multiplied by `--unit-scale`, which defaults to converting
//! metres to centimetres.

mod config;
mod plot;
mod report;
mod section;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use mesh_types::{Axis, IndexedMesh, MeshTopology};

/// Measure a 3D body scan at anatomical landmarks.
#[derive(Parser)]
#[command(name = "body-measure")]
#[command(about = "Cross-section body measurements from OBJ/STL meshes", long_about = None)]
#[command(version)]
struct Cli {
    /// Log progress (-v) or per-landmark detail (-vv). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure all landmarks and print the report
    Report {
        #[command(flatten)]
        input: MeshArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Multiplier applied to lengths in text output
        #[arg(long, default_value_t = 100.0)]
        unit_scale: f64,

        /// Unit name printed after scaled lengths
        #[arg(long, default_value = "cm")]
        unit: String,
    },

    /// Slice the mesh once and print the section's measurements
    Section {
        #[command(flatten)]
        input: MeshArgs,

        /// Absolute coordinate of the section plane
        #[arg(long, conflicts_with = "fraction", required_unless_present = "fraction")]
        height: Option<f64>,

        /// Section position as a fraction of body height
        #[arg(long)]
        fraction: Option<f64>,

        /// Write the section as SVG to this file
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Write an SVG of every landmark section
    Plot {
        #[command(flatten)]
        input: MeshArgs,

        /// Directory for the SVG files (created if missing)
        #[arg(long)]
        out_dir: PathBuf,
    },
}

/// Arguments shared by every command.
#[derive(Args)]
struct MeshArgs {
    /// Body mesh (.obj or .stl)
    #[arg(name = "MESH")]
    mesh: PathBuf,

    /// Vertical axis of the body [default: y, or the config file's axis]
    #[arg(long)]
    axis: Option<Axis>,

    /// TOML file with `axis` and `[[landmarks]]` entries
    #[arg(long)]
    config: Option<PathBuf>,
}

impl MeshArgs {
    fn load(&self) -> Result<IndexedMesh> {
        let mesh = mesh_io::load_mesh(&self.mesh)
            .with_context(|| format!("Failed to load mesh {}", self.mesh.display()))?;
        log::info!(
            "Loaded {} ({} vertices, {} faces)",
            self.mesh.display(),
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full report as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Report {
            input,
            format,
            unit_scale,
            unit,
        } => report::run(&input, format, unit_scale, &unit),
        Commands::Section {
            input,
            height,
            fraction,
            svg,
        } => section::run(&input, height, fraction, svg.as_deref()),
        Commands::Plot { input, out_dir } => plot::run(&input, &out_dir),
    }
}
