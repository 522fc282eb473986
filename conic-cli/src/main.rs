//! Command-line front end for the conic-section kernel.
//!
//! Shapes are read as JSON, tagged by `kind`, e.g. `{"kind":"Circle","c":{"x":0,"y":0},"r":1}`; results are printed as
//! JSON.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

use conic_core::{parse_log_level, ConicSection, ConicSectionType, IntersectConfig, Shape, R2};

#[derive(Parser)]
#[command(name = "conic")]
#[command(about = "Classify, sample, fit and intersect conic sections", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace); defaults to $RUST_LOG
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a shape's conic-section coefficients and type
    Classify {
        /// Shape (JSON format)
        #[arg(short, long)]
        shape: String,

        /// Scale coefficients so the smallest-magnitude one is ±1
        #[arg(short, long)]
        rescale: bool,
    },

    /// Sample a shape as polylines
    Sample {
        /// Shape (JSON format)
        #[arg(short, long)]
        shape: String,

        /// Segments per polyline
        #[arg(short, long, default_value = "100")]
        n: usize,

        /// Lower x bound, for open curves
        #[arg(long, default_value = "-10", allow_hyphen_values = true)]
        xmin: f64,

        /// Upper x bound, for open curves
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        xmax: f64,
    },

    /// Intersect two shapes
    Intersect {
        /// First shape (JSON format)
        #[arg(short, long)]
        a: String,

        /// Second shape (JSON format)
        #[arg(short, long)]
        b: String,

        /// Lower x bound of the conic/conic scan
        #[arg(long, default_value = "-10", allow_hyphen_values = true)]
        xmin: f64,

        /// Upper x bound of the conic/conic scan
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        xmax: f64,

        /// Sub-intervals sampled when bracketing roots
        #[arg(short, long, default_value_t = IntersectConfig::default().partitions)]
        partitions: usize,

        /// Bisection steps per bracket
        #[arg(short, long, default_value_t = IntersectConfig::default().max_iterations)]
        max_iterations: usize,

        /// Convergence / root-merging threshold
        #[arg(short, long, default_value_t = IntersectConfig::default().epsilon)]
        epsilon: f64,
    },

    /// Fit a conic through five points
    Fit {
        /// Five points (JSON format), e.g. [{"x":0,"y":1},...]
        #[arg(short, long)]
        points: String,
    },
}

#[derive(Serialize)]
struct Classified {
    coefficients: [f64; 6],
    #[serde(rename = "type")]
    kind: ConicSectionType,
}

impl From<ConicSection<f64>> for Classified {
    fn from(conic: ConicSection<f64>) -> Self {
        Classified { coefficients: conic.coefficients(), kind: conic.kind() }
    }
}

fn parse_shape(name: &str, json: &str) -> Result<Shape<f64>> {
    let shape: Shape<f64> = serde_json::from_str(json).with_context(|| format!("parsing {} shape", name))?;
    debug!("{}: {:?}", name, shape);
    Ok(shape)
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.log_level.as_deref() {
        Some(level) => env_logger::Builder::new().filter_level(parse_log_level(Some(level))).init(),
        None => env_logger::init(),
    }

    match cli.command {
        Commands::Classify { shape, rescale } => {
            let shape = parse_shape("input", &shape)?;
            let mut conic = shape.conic_section()?;
            if rescale {
                conic = conic.rescale()?;
            }
            info!("{}: {}", shape.kind(), conic);
            print(&Classified::from(conic))
        }
        Commands::Sample { shape, n, xmin, xmax } => {
            let shape = parse_shape("input", &shape)?;
            print(&shape.polylines(n, xmin, xmax))
        }
        Commands::Intersect { a, b, xmin, xmax, partitions, max_iterations, epsilon } => {
            let a = parse_shape("first", &a)?;
            let b = parse_shape("second", &b)?;
            let config = IntersectConfig { partitions, max_iterations, epsilon };
            let points = a.intersect(&b, xmin, xmax, &config)?;
            info!("{} ∩ {}: {} point(s)", a.kind(), b.kind(), points.len());
            print(&points)
        }
        Commands::Fit { points } => {
            let points: Vec<R2<f64>> = serde_json::from_str(&points).context("parsing points")?;
            let points: [R2<f64>; 5] = points
                .try_into()
                .map_err(|points: Vec<R2<f64>>| anyhow!("expected 5 points, found {}", points.len()))?;
            match ConicSection::from_points(&points) {
                Some(conic) => print(&Classified::from(conic)),
                None => Err(anyhow!("no unique solution")),
            }
        }
    }
}
