use std::io;

use anyhow::Result;
use clap::Parser;
use log::*;
use rand::{rngs::StdRng, SeedableRng};

use partalloc::{config::Config, interface::Interface, memory::PartitionTable};

fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let config = Config::parse();
    let memory = PartitionTable::new(config.memory_size)?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "Memory of {} bytes ready (seed: {:?}).",
        config.memory_size, config.seed
    );

    let mut interface = Interface::new(memory, rng, io::stdin().lock(), io::stdout());
    interface.run()?;

    info!("Session closed.");
    Ok(())
}
