use clap::Parser;

use crate::memory::MEMORY_SIZE;

/// Variable-partition memory allocator simulator.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// Size of the simulated address space, in bytes.
    #[arg(short, long, default_value_t = MEMORY_SIZE, value_parser = clap::value_parser!(u64).range(1..))]
    pub memory_size: u64,

    /// Seed for the random process sizes. Drawn from the OS when
    /// omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
