use std::path::PathBuf;

use anyhow::ensure;
use clap::Parser;
use layover::{DwellTimes, NodeId, earliest_arrivals, load_graph};

/// The source is always node 0; the destination is always node n - 1.
const SOURCE: NodeId = 0;

#[derive(Parser, Debug)]
#[command(version, about = "Earliest-arrival routing with per-node dwell times", long_about = None)]
struct Args {
    /// Path to the graph description file
    input: PathBuf,
    /// Seed for randomized dwell times; with no seed every node charges the
    /// same fixed dwell time
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let dwell = match args.seed {
        Some(seed) => DwellTimes::Seeded(seed),
        None => DwellTimes::default(),
    };

    let graph = load_graph(&args.input, &dwell)?;
    ensure!(!graph.is_empty(), "`{}` describes no nodes", args.input.display());

    let arrivals = earliest_arrivals(&graph, SOURCE);

    match arrivals.route_to(graph.node_count() - 1) {
        Some(route) => println!("{route}"),
        None => println!("unreachable"),
    }

    Ok(())
}
