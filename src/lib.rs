//! Simulation of a variable-partition memory allocator.
//!
//! The address space `[0, memory_size)` is tiled by partitions that are
//! either free or bound to a single process. Processes are placed first
//! fit, splitting the chosen partition; releasing a process frees its
//! partition without merging it with its neighbors.

pub mod config;
pub mod interface;
pub mod memory;
