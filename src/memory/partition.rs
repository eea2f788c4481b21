use std::fmt;

use super::error::AllocError;

/// Identifier of a process, assigned by the caller.
pub type ProcessId = u32;

/// Logical process requesting a contiguous region of memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    id: ProcessId,
    size: u64,
}

impl Process {
    pub fn new(id: ProcessId, size: u64) -> Result<Self, AllocError> {
        if size == 0 {
            return Err(AllocError::InvalidSize);
        }

        Ok(Self { id, size })
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.id)
    }
}

/// Contiguous range `[address, address + size)` of the address
/// space, either free or hosting exactly one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Start of the partition in the address space.
    address: u64,
    /// Size of the partition in bytes, never zero.
    size: u64,
    /// Process bound to the partition, if it is allocated.
    occupant: Option<Process>,
}

impl Partition {
    pub(crate) fn free(address: u64, size: u64) -> Self {
        Self {
            address,
            size,
            occupant: None,
        }
    }

    pub(crate) fn allocated(address: u64, process: Process) -> Self {
        Self {
            address,
            size: process.size(),
            occupant: Some(process),
        }
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// First address past the end of the partition.
    pub fn end(&self) -> u64 {
        self.address + self.size
    }

    pub fn occupant(&self) -> Option<&Process> {
        self.occupant.as_ref()
    }

    pub fn is_allocated(&self) -> bool {
        self.occupant.is_some()
    }

    pub(crate) fn hosts(&self, process_id: ProcessId) -> bool {
        self.occupant
            .as_ref()
            .is_some_and(|process| process.id() == process_id)
    }

    pub(crate) fn evict(&mut self) -> Option<Process> {
        self.occupant.take()
    }

    pub fn row(&self) -> PartitionRow {
        PartitionRow {
            address: self.address,
            size: self.size,
            status: match self.occupant {
                Some(_) => PartitionStatus::Allocated,
                None => PartitionStatus::Free,
            },
            occupant: self.occupant.map(|process| process.id()),
        }
    }
}

/// Allocation state of a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionStatus {
    Free,
    Allocated,
}

/// Read-only projection of a partition, used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionRow {
    pub address: u64,
    pub size: u64,
    pub status: PartitionStatus,
    pub occupant: Option<ProcessId>,
}
