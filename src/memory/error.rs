use thiserror::Error;

use super::partition::ProcessId;

/// Failures reported by the partition table. None of them leave the
/// table in a modified state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// No free partition is large enough for the process.
    #[error("Not enough space for P{process} of size {size}.")]
    OutOfSpace { process: ProcessId, size: u64 },
    /// The process is not currently resident in memory.
    #[error("Process P{0} is not loaded to memory.")]
    ProcessNotFound(ProcessId),
    /// The logical address lies outside the process partition.
    #[error("Offset {offset} is out of range for P{process} (partition size {size}).")]
    OffsetOutOfRange {
        process: ProcessId,
        offset: u64,
        size: u64,
    },
    /// A zero size was given for a process or an address space.
    #[error("Size must be greater than zero.")]
    InvalidSize,
    /// The process id is already bound to a partition.
    #[error("Process P{0} is already loaded to memory.")]
    DuplicateProcess(ProcessId),
}

impl AllocError {
    /// Whether the error comes from rejected input rather than from the
    /// state of the table.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidSize | Self::DuplicateProcess(_))
    }
}
