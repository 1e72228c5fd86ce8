/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for slab-efield

use clap::Parser;
use slab_efield::cli::{execute, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("slab-efield v{}", slab_efield::VERSION);
    execute(cli)
}
