#![cfg(test)]
//! Property-based tests for the partition table.
//!
//! Random sequences of allocations and releases are replayed against a
//! fresh table and the structural invariants are checked after every
//! step: the partitions tile the address space, no process is bound
//! twice, no partition is empty, and failed operations change nothing.

use std::collections::HashSet;

use super::{AllocError, PartitionTable, Process, ProcessId};
use proptest::prelude::*;

const SPACE: u64 = 1024;

#[derive(Debug, Clone)]
enum Op {
    Allocate(u64),
    Release(ProcessId),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..=SPACE + 64).prop_map(Op::Allocate),
        (1u32..40).prop_map(Op::Release),
    ]
}

fn assert_invariants(table: &PartitionTable) -> Result<(), TestCaseError> {
    let mut next = 0;
    let mut seen = HashSet::new();

    for partition in table.partitions() {
        prop_assert!(partition.size() > 0);
        prop_assert_eq!(partition.address(), next);
        next = partition.end();

        if let Some(process) = partition.occupant() {
            prop_assert!(seen.insert(process.id()), "{} bound twice", process);
            prop_assert_eq!(process.size(), partition.size());
        }
    }

    prop_assert_eq!(next, table.memory_size());
    prop_assert_eq!(table.free_bytes() + table.allocated_bytes(), SPACE);
    Ok(())
}

proptest! {
    #[test]
    fn operations_preserve_invariants(ops in proptest::collection::vec(arb_op(), 1..64)) {
        let mut table = PartitionTable::new(SPACE).unwrap();
        let mut last_id: ProcessId = 0;

        for op in ops {
            let before = table.render();

            let outcome = match op {
                Op::Allocate(size) => {
                    last_id += 1;
                    let process = Process::new(last_id, size).unwrap();
                    table.allocate(process).map(|_| ())
                }
                Op::Release(id) => table.release(id).map(|_| ()),
            };

            if outcome.is_err() {
                prop_assert_eq!(table.render(), before);
            } else {
                prop_assert!(table.len() <= before.len() + 1);
            }
            assert_invariants(&table)?;
        }
    }

    #[test]
    fn allocation_picks_lowest_fitting_address(
        sizes in proptest::collection::vec(1u64..200, 1..10),
        released in proptest::collection::vec(any::<bool>(), 10),
        request in 1u64..200,
    ) {
        let mut table = PartitionTable::new(SPACE).unwrap();
        let mut id: ProcessId = 0;
        for size in &sizes {
            id += 1;
            let _ = table.allocate(Process::new(id, *size).unwrap());
        }
        for (index, release) in released.iter().enumerate() {
            if *release {
                let _ = table.release(index as ProcessId + 1);
            }
        }

        let expected = table
            .partitions()
            .find(|partition| !partition.is_allocated() && partition.size() >= request)
            .map(|partition| partition.address());

        let mut replay = table.clone();
        let first = table.allocate(Process::new(id + 1, request).unwrap()).map(|p| p.address());
        let second = replay.allocate(Process::new(id + 1, request).unwrap()).map(|p| p.address());

        prop_assert_eq!(first.clone(), second);
        match expected {
            Some(address) => prop_assert_eq!(first, Ok(address)),
            None => prop_assert_eq!(
                first,
                Err(AllocError::OutOfSpace { process: id + 1, size: request })
            ),
        }
    }

    #[test]
    fn translate_stays_inside_partition(size in 1u64..=SPACE, offset in 0u64..2 * SPACE) {
        let mut table = PartitionTable::new(SPACE).unwrap();
        table.allocate(Process::new(1, 7).unwrap()).unwrap();
        let result = table.allocate(Process::new(2, size).unwrap()).map(|p| (p.address(), p.size()));

        match result {
            Ok((address, size)) => {
                if offset < size {
                    prop_assert_eq!(table.translate(2, offset), Ok(address + offset));
                } else {
                    prop_assert_eq!(
                        table.translate(2, offset),
                        Err(AllocError::OffsetOutOfRange { process: 2, offset, size })
                    );
                }
            }
            Err(error) => {
                prop_assert_eq!(error, AllocError::OutOfSpace { process: 2, size });
                prop_assert_eq!(table.translate(2, offset), Err(AllocError::ProcessNotFound(2)));
            }
        }
    }
}
