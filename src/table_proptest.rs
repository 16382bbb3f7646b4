#![cfg(test)]

// Property tests for the table and its geometry kept inside the crate so
// they can see the crate-private sizing internals.

use crate::compat::Keyed;
use crate::error::Error;
use crate::geometry::{is_prime, previous_prime, TableGeometry, MAX_TABLE_SIZE, MIN_TABLE_SIZE};
use crate::table::DoubleHashTable;
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    key: u64,
    payload: u32,
}

impl Keyed for Entry {
    fn key(&self) -> u64 {
        self.key
    }
}

// Property: capacity validation is exact, and every accepted capacity
// yields prime geometry with the step strictly below the slot count.
proptest! {
    #[test]
    fn prop_geometry_validation(capacity in 0usize..512) {
        match TableGeometry::for_capacity(capacity) {
            Ok(g) => {
                prop_assert!((MIN_TABLE_SIZE..=MAX_TABLE_SIZE).contains(&capacity));
                prop_assert_eq!(g.max_elements, capacity);
                prop_assert!(is_prime(g.slot_count));
                prop_assert!(is_prime(g.step as usize));
                prop_assert!((g.step as usize) < g.slot_count);
                prop_assert!(g.slot_count >= capacity);
                prop_assert_eq!(g.slot_count, previous_prime(2 * capacity));
            }
            Err(Error::InvalidCapacity) => {
                prop_assert!(!(MIN_TABLE_SIZE..=MAX_TABLE_SIZE).contains(&capacity));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Add(u64),
    Search(u64),
    Update(u64, u32),
    Remove(u64),
}

fn arb_ops() -> impl Strategy<Value = (usize, Vec<Op>)> {
    // Small capacities and a small key pool maximize collisions and probe
    // traffic; keys beyond the pool exercise misses.
    (2usize..=20).prop_flat_map(|capacity| {
        let key = 0u64..64;
        let op = prop_oneof![
            key.clone().prop_map(Op::Add),
            key.clone().prop_map(Op::Search),
            (key.clone(), any::<u32>()).prop_map(|(k, p)| Op::Update(k, p)),
            key.prop_map(Op::Remove),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (capacity, ops))
    })
}

// Property: state-machine run over random op sequences. Invariants checked
// after every op:
// - occupancy parity: len() always equals stored_keys().len();
// - the occupancy bound: len() never exceeds capacity + 1 (the bound check
//   deliberately admits one extra element);
// - add fails exactly when occupancy already exceeds the capacity, and a
//   successful add grows the table by one (the probe sequence covers every
//   slot, so a free slot is always found);
// - update/remove succeed exactly when the key resolves through search,
//   remove shrinks occupancy by one and update leaves it unchanged.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_table_state_machine((capacity, ops) in arb_ops()) {
        let mut t: DoubleHashTable<Entry> = DoubleHashTable::with_capacity(capacity).unwrap();

        for op in ops {
            let len_before = t.len();
            match op {
                Op::Add(key) => {
                    match t.add(Entry { key, payload: 0 }) {
                        Ok(()) => {
                            prop_assert!(len_before <= capacity);
                            prop_assert_eq!(t.len(), len_before + 1);
                        }
                        Err(Error::CapacityExceeded) => {
                            prop_assert!(len_before > capacity);
                            prop_assert_eq!(t.len(), len_before);
                        }
                        Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                    }
                }
                Op::Search(key) => {
                    if let Some((idx, found)) = t.search(key) {
                        prop_assert_eq!(found.key, key);
                        prop_assert!(idx < t.slot_count());
                    }
                    prop_assert_eq!(t.len(), len_before);
                }
                Op::Update(key, payload) => {
                    let reachable = t.search(key).is_some();
                    match t.update(key, Entry { key, payload }) {
                        Ok(()) => {
                            prop_assert!(reachable);
                            let (_, found) = t.search(key).expect("updated key resolves");
                            prop_assert_eq!(found.payload, payload);
                        }
                        Err(Error::ElementNotFound) => prop_assert!(!reachable),
                        Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                    }
                    prop_assert_eq!(t.len(), len_before);
                }
                Op::Remove(key) => {
                    let reachable = t.search(key).is_some();
                    match t.remove(key) {
                        Ok(removed) => {
                            prop_assert!(reachable);
                            prop_assert_eq!(removed.key, key);
                            prop_assert_eq!(t.len(), len_before - 1);
                        }
                        Err(Error::ElementNotFound) => {
                            prop_assert!(!reachable);
                            prop_assert_eq!(t.len(), len_before);
                        }
                        Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                    }
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(t.len(), t.stored_keys().len());
            prop_assert!(t.len() <= capacity + 1);
            prop_assert_eq!(t.is_empty(), t.len() == 0);
        }
    }
}

// Property: on an empty table every placement is the home slot, which is
// always within lookup reach, so add/search round-trips for any key.
proptest! {
    #[test]
    fn prop_home_placement_round_trips(capacity in 2usize..=126, key in 0u64..10_000) {
        let mut t: DoubleHashTable<Entry> = DoubleHashTable::with_capacity(capacity).unwrap();
        t.add(Entry { key, payload: 1 }).unwrap();
        let (idx, found) = t.search(key).expect("home placement resolves");
        prop_assert_eq!(idx, (key % t.slot_count() as u64) as usize);
        prop_assert_eq!(found.key, key);
    }
}
