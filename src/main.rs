use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use polyspine::geojson::GeoJson;
use polyspine::math::TOLERANCE;
use polyspine::operations::{DegeneratePolicy, FailurePolicy, PolySpine, SpineParams};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polyspine")]
#[command(about = "Compute approximate centerlines of GeoJSON polygons")]
struct Cmd {
    /// Input GeoJSON file
    input: PathBuf,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Merge spine features into the input features, in reverse order.
    /// Only `geometry` and `properties` of input features are kept.
    #[arg(long)]
    append: bool,

    /// Drop polygons that fail instead of aborting
    #[arg(long)]
    skip_failures: bool,

    /// Start each side branch at the center of the triangle it branches off
    #[arg(long)]
    connect_branches: bool,

    /// Follow used edges only, without visited-triangle tracking
    #[arg(long)]
    no_visited_tracking: bool,

    /// Replace collinear triangles by the midpoint of their longest side
    #[arg(long)]
    midpoint_fallback: bool,

    /// Relative tolerance for degeneracy tests
    #[arg(long, default_value_t = TOLERANCE)]
    epsilon: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();

    let text = fs::read_to_string(&cmd.input)
        .with_context(|| format!("reading {}", cmd.input.display()))?;
    let input: GeoJson = text.parse()?;

    let params = SpineParams {
        epsilon: cmd.epsilon,
        degenerate: if cmd.midpoint_fallback {
            DegeneratePolicy::LongestSideMidpoint
        } else {
            DegeneratePolicy::Skip
        },
        track_visited: !cmd.no_visited_tracking,
        connect_branches: cmd.connect_branches,
        on_failure: if cmd.skip_failures {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        },
    };
    let spines = PolySpine::new(&input).with_params(params).execute()?;
    tracing::info!(spines = spines.len(), "computed spines");

    let output = if cmd.append {
        input.merge_line_strings(spines)
    } else {
        GeoJson::line_string_collection(spines)
    };
    let json = output.to_json()?;

    match cmd.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
