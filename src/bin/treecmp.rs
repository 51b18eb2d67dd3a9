use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use layover::{Tree, trees_equal};

#[derive(Parser, Debug)]
#[command(version, about = "Compare two rooted trees for equality", long_about = None)]
struct Args {
    /// File with one `parent,child` pair per line
    pairs: PathBuf,
    /// File with the same tree in nested-bracket notation, e.g. `[1[2][3]]`
    nested: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let pairs = File::open(&args.pairs)
        .with_context(|| format!("cannot open `{}`", args.pairs.display()))?;
    let first = Tree::from_pairs(BufReader::new(pairs))
        .with_context(|| format!("`{}`", args.pairs.display()))?;

    let nested = std::fs::read_to_string(&args.nested)
        .with_context(|| format!("cannot open `{}`", args.nested.display()))?;
    let second = Tree::from_nested(nested.lines().next().unwrap_or_default().trim())
        .with_context(|| format!("`{}`", args.nested.display()))?;

    if trees_equal(&first, &second) {
        println!("equal");
    } else {
        println!("different");
    }

    Ok(())
}
