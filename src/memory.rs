pub mod error;
pub mod partition;
pub mod table;

#[cfg(test)]
mod tests_prop;

pub use error::AllocError;
pub use partition::{Partition, PartitionRow, PartitionStatus, Process, ProcessId};
pub use table::PartitionTable;

/// Size of the simulated address space when none is given.
pub const MEMORY_SIZE: u64 = 1024;
