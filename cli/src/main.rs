use std::io::{self, BufWriter, Write};

use clap::Parser;
use log::debug;
use rand_grid::GridGen;

#[derive(Parser)]
#[command(
    name = "rand-grid",
    about = "Print an n x n grid of random values to stdout"
)]
pub struct Args {
    /// Grid dimension
    n: usize,
}

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    debug!("emitting {0}x{0} grid", args.n);

    // Stream rows straight to stdout; the grid is never materialized
    let mut out = BufWriter::new(io::stdout().lock());
    GridGen::from_entropy(args.n).write_into(&mut out)?;

    out.flush()
}
