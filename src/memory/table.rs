use super::error::AllocError;
use super::partition::{Partition, PartitionRow, Process, ProcessId};
use super::MEMORY_SIZE;

/// Ordered list of partitions that tiles the address space
/// `[0, memory_size)` with no gaps and no overlaps.
#[derive(Debug, Clone)]
pub struct PartitionTable {
    /// Total size of the address space.
    memory_size: u64,
    /// Partitions sorted by ascending address.
    partitions: Vec<Partition>,
}

impl PartitionTable {
    pub fn new(memory_size: u64) -> Result<Self, AllocError> {
        if memory_size == 0 {
            return Err(AllocError::InvalidSize);
        }

        Ok(Self::with_size(memory_size))
    }

    fn with_size(memory_size: u64) -> Self {
        // Initialize with a single free partition that covers
        // the whole address space.
        Self {
            memory_size,
            partitions: vec![Partition::free(0, memory_size)],
        }
    }

    /// Binds the process to the first free partition large enough to
    /// hold it, splitting off the remainder as a new free partition.
    pub fn allocate(&mut self, process: Process) -> Result<&Partition, AllocError> {
        if process.size() == 0 {
            return Err(AllocError::InvalidSize);
        }
        if self.position(process.id()).is_some() {
            return Err(AllocError::DuplicateProcess(process.id()));
        }

        // First fit: walk the partitions in address order and
        // take the first free one that is large enough. An
        // oversized request simply finds nothing.
        let index = self
            .partitions
            .iter()
            .position(|partition| !partition.is_allocated() && partition.size() >= process.size())
            .ok_or(AllocError::OutOfSpace {
                process: process.id(),
                size: process.size(),
            })?;

        let free = &self.partitions[index];
        let (address, remaining) = (free.address(), free.size() - process.size());

        // The allocated partition starts where the free one
        // did and takes exactly the size of the process.
        self.partitions[index] = Partition::allocated(address, process);

        // If the free partition was larger than the process, the
        // rest of it stays free right after the allocation.
        if remaining > 0 {
            self.partitions.insert(
                index + 1,
                Partition::free(address + process.size(), remaining),
            );
        }

        Ok(&self.partitions[index])
    }

    /// Frees the partition hosting the process. The partition keeps
    /// its size: adjacent free partitions are never merged.
    pub fn release(&mut self, process_id: ProcessId) -> Result<Process, AllocError> {
        let index = self
            .position(process_id)
            .ok_or(AllocError::ProcessNotFound(process_id))?;

        self.partitions[index]
            .evict()
            .ok_or(AllocError::ProcessNotFound(process_id))
    }

    pub fn find_partition(&self, process_id: ProcessId) -> Result<&Partition, AllocError> {
        self.position(process_id)
            .map(|index| &self.partitions[index])
            .ok_or(AllocError::ProcessNotFound(process_id))
    }

    /// Converts a logical offset within the process into a physical
    /// address.
    pub fn translate(&self, process_id: ProcessId, offset: u64) -> Result<u64, AllocError> {
        let partition = self.find_partition(process_id)?;

        // This is the only protection check of the model: the
        // offset must stay within the partition of the process.
        if offset >= partition.size() {
            return Err(AllocError::OffsetOutOfRange {
                process: process_id,
                offset,
                size: partition.size(),
            });
        }

        Ok(partition.address() + offset)
    }

    pub fn render(&self) -> Vec<PartitionRow> {
        self.partitions.iter().map(Partition::row).collect()
    }

    pub fn partitions(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }

    pub fn memory_size(&self) -> u64 {
        self.memory_size
    }

    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn free_bytes(&self) -> u64 {
        self.partitions()
            .filter(|partition| !partition.is_allocated())
            .map(Partition::size)
            .sum()
    }

    pub fn allocated_bytes(&self) -> u64 {
        self.memory_size - self.free_bytes()
    }

    /// Size of the largest request that can currently succeed. Lower
    /// than `free_bytes` once the table is fragmented.
    pub fn largest_free(&self) -> u64 {
        self.partitions()
            .filter(|partition| !partition.is_allocated())
            .map(Partition::size)
            .max()
            .unwrap_or(0)
    }

    fn position(&self, process_id: ProcessId) -> Option<usize> {
        self.partitions
            .iter()
            .position(|partition| partition.hosts(process_id))
    }
}

impl Default for PartitionTable {
    fn default() -> Self {
        Self::with_size(MEMORY_SIZE)
    }
}
