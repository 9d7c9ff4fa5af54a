//! Point-cloud generation CLI.
//!
//! - `generate`: sample a built-in manifold and write the points as CSV
//! - `info`: print the version and the default configuration

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cloudgen_core::prelude::*;
use cloudgen_manifolds::Manifold;
use cloudgen_record::PointWriter;
use cloudgen_sampler::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Noisy point clouds sampled from parametric manifolds.
#[derive(Parser)]
#[command(name = "cloudgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample points and write them as comma-separated rows.
    Generate(GenerateArgs),

    /// Print version and default configuration.
    Info,
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// TOML configuration file. Flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sampling strategy: random or regular.
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Number of points requested.
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Noise standard deviation per coordinate.
    #[arg(long)]
    stddev: Option<f64>,

    /// Root RNG seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Manifold: circle, sphere, torus or two-circles.
    #[arg(short, long)]
    manifold: Option<String>,

    /// Number of independent clouds to generate.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,

    /// Output file. Stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

fn resolve_config(args: &GenerateArgs) -> Result<GenerationConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_file(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(stddev) = args.stddev {
        config.stddev = stddev;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(kind) = &args.manifold {
        let spec = ManifoldSpec::from_kind(kind)?;
        if spec.kind() != config.manifold.kind() {
            config.manifold = spec;
            // Bounds from the file belonged to the old manifold.
            config.bounds = None;
        }
    }
    config.validate()?;
    Ok(config)
}

/// `out.csv` becomes `out_3.csv` for run 3.
fn run_path(base: &Path, run: u32) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}_{run}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{run}"),
    };
    base.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn write_cloud<W: Write>(
    points: impl Iterator<Item = Result<Point, SampleError<ParamCountError>>>,
    sink: W,
) -> Result<usize, Box<dyn Error>> {
    let mut writer = PointWriter::new(sink);
    for point in points {
        writer.write_point(&point?)?;
    }
    let written = writer.points_written();
    writer.into_inner()?;
    Ok(written)
}

fn run_generate(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    let manifold = Manifold::from_spec(&config.manifold)?;
    let bounds = config
        .bounds
        .clone()
        .unwrap_or_else(|| manifold.default_bounds());
    let seeds = config
        .seed
        .map_or_else(SeedHierarchy::from_entropy, SeedHierarchy::new);

    info!(
        manifold = config.manifold.kind(),
        strategy = %config.strategy,
        count = config.count,
        stddev = config.stddev,
        seed = seeds.root(),
        runs = args.runs,
        "generating"
    );

    for run in 0..args.runs {
        let rng = seeds.run_rng(u64::from(run));
        let points = generate(
            config.strategy,
            &manifold,
            config.count,
            &bounds,
            config.stddev,
            rng,
        )?;
        if points.planned_len() < config.count {
            warn!(
                requested = config.count,
                delivered = points.planned_len(),
                arity = bounds.len(),
                "regular grid delivers fewer points than requested"
            );
        }

        match &args.output {
            Some(base) => {
                let path = if args.runs > 1 {
                    run_path(base, run)
                } else {
                    base.clone()
                };
                let written = write_cloud(points, BufWriter::new(File::create(&path)?))?;
                info!(run, points = written, path = %path.display(), "wrote cloud");
            }
            None => {
                let written = write_cloud(points, io::stdout().lock())?;
                info!(run, points = written, "wrote cloud to stdout");
            }
        }
    }
    Ok(())
}

fn run_info() -> Result<(), Box<dyn Error>> {
    println!("cloudgen v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("default configuration:");
    println!();
    print!("{}", toml::to_string(&GenerationConfig::default())?);
    Ok(())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cloudgen=info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Info => run_info(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "cloudgen",
            "generate",
            "--strategy",
            "regular",
            "-n",
            "100",
            "--manifold",
            "two-circles",
            "--runs",
            "3",
            "-o",
            "out.csv",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.strategy, Some(Strategy::Regular));
        assert_eq!(args.count, Some(100));
        assert_eq!(args.runs, 3);
        assert_eq!(args.manifold.as_deref(), Some("two-circles"));
    }

    #[test]
    fn zero_runs_rejected() {
        assert!(Cli::try_parse_from(["cloudgen", "generate", "--runs", "0"]).is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let args = GenerateArgs {
            count: Some(10),
            stddev: Some(0.0),
            seed: Some(7),
            manifold: Some("torus".into()),
            ..GenerateArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.count, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.manifold.kind(), "torus");
        assert_eq!(config.strategy, Strategy::Random);
    }

    #[test]
    fn invalid_override_fails_validation() {
        let args = GenerateArgs {
            stddev: Some(-1.0),
            ..GenerateArgs::default()
        };
        assert!(resolve_config(&args).is_err());
        let args = GenerateArgs {
            manifold: Some("klein_bottle".into()),
            ..GenerateArgs::default()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn run_path_inserts_index_before_extension() {
        assert_eq!(
            run_path(Path::new("data/points.csv"), 2),
            PathBuf::from("data/points_2.csv")
        );
        assert_eq!(run_path(Path::new("points"), 0), PathBuf::from("points_0"));
    }

    #[test]
    fn write_cloud_writes_every_point() {
        let manifold = Manifold::from_spec(&ManifoldSpec::default()).unwrap();
        let points = generate(
            Strategy::Regular,
            &manifold,
            4,
            &manifold.default_bounds(),
            0.0,
            SeedHierarchy::new(0).run_rng(0),
        )
        .unwrap();
        let mut out = Vec::new();
        assert_eq!(write_cloud(points, &mut out).unwrap(), 4);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("1,0,0\n"));
    }
}
