//! Convert read info records into fastq reads with a substituted adapter.
//!
//! # Examples
//!
//! ```bash
//! # Swap detected adapters for a new one, streaming stdin to stdout
//! info2fastq AGATCGGAAGAGC < reads.info > reads.fastq
//!
//! # Read a compressed info file and write compressed fastq
//! info2fastq AGATCGGAAGAGC -i reads.info.gz -o reads.fastq.gz -v
//! ```

use std::process;

use clap::{ArgAction, Parser};
use log::{error, info, warn, LevelFilter};

use info2fastq::*;

/// Convert read info records into fastq with a substituted adapter
#[derive(Parser)]
#[command(name = "info2fastq")]
#[command(version, about = "Convert read info records into fastq with a substituted adapter")]
#[command(
    long_about = "Convert tab-separated read info records into fastq.\nReads without an adapter are copied unchanged. Reads with a detected adapter get ADAPTER in its place:\ncut to the detected length at the anchored end for adapters at either end of the read,\nor inserted whole for adapters inside the read."
)]
struct Args {
    /// Replacement adapter sequence
    adapter: String,

    /// Input info file (use '-' or omit for stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Output fastq file (use '-' or omit for stdout, '.gz' to compress)
    #[arg(short, long)]
    output: Option<String>,

    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<()> {
    let replacement = AdapterReplacement::new(&args.adapter);
    if replacement.is_empty() {
        warn!("Replacement adapter is empty, detected adapters will be removed");
    } else {
        info!(
            "Replacing adapters with {} ({} bp)",
            utf8(replacement.adapter()),
            replacement.len()
        );
    }

    let input = match args.input.as_deref() {
        None | Some("-") => InputInfoNode::stdin(),
        Some(file) => InputInfoNode::new(file)?,
    };

    let mut graph = Graph::new();
    graph
        .add(input)
        .add(ReplaceAdapterNode::new(replacement))
        .add(CountNode::new(|counts: &RecordCounts| {
            info!(
                "Wrote {} fastq records: {} without adapter, {} left end, {} right end, {} interior",
                counts.total(),
                counts.clean,
                counts.left_end,
                counts.right_end,
                counts.interior
            )
        }))
        .add(CollectFastqNode::new(args.output.as_deref())?);

    graph.run()
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        error!("{e}");
        process::exit(1);
    }
}
