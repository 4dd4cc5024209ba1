//! CLI entry point for the photo mosaic generator

use clap::Parser;
use mosaicry::io::cli::{Cli, MosaicRunner};

fn main() -> mosaicry::Result<()> {
    let cli = Cli::parse();
    let runner = MosaicRunner::new(cli);
    runner.run()
}
