use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use layover::CodeTable;

#[derive(Parser, Debug)]
#[command(version, about = "Enumerate the decodings of a bit string", long_about = None)]
struct Args {
    /// File with the bit string on its first line
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("cannot open `{}`", args.input.display()))?;
    let bits = text.lines().next().unwrap_or_default().trim();

    let sequences = CodeTable::default()
        .decodings(bits)
        .with_context(|| format!("`{}`", args.input.display()))?;

    if sequences.is_empty() {
        println!("0");
    } else {
        println!("{},", sequences.len());
        for sequence in &sequences {
            println!("{sequence},");
        }
    }

    Ok(())
}
