//! Node store backing the list and tree builders
//!
//! This module provides node allocation with:
//! - Explicit allocation/free of one node at a time
//! - Tombstone tracking for freed nodes (a freed handle stays recognisable)
//! - Use-after-free and double-free detection
//! - A live-node limit, so allocation failure is a real, testable condition
//! - Live/total counters for teardown-to-baseline checks

use rustc_hash::FxHashMap;
use std::fmt;

use crate::constants::{DEFAULT_NODE_LIMIT, NODE_ADDRESS_START};

/// Handle to a node in a [`NodeStore`]
///
/// Displayed in hex so diagnostics read like heap addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Errors reported by the node store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The live-node limit was reached
    LimitExceeded { live: usize, limit: usize },

    /// Access through a handle whose node was already freed
    UseAfterFree { id: NodeId },

    /// Freeing a handle whose node was already freed
    DoubleFree { id: NodeId },

    /// A handle this store never issued
    Unallocated { id: NodeId },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LimitExceeded { live, limit } => {
                write!(f, "Out of nodes: {} live, limit is {}", live, limit)
            }
            StoreError::UseAfterFree { id } => {
                write!(f, "Use-after-free: node {} has been freed", id)
            }
            StoreError::DoubleFree { id } => {
                write!(f, "Double free detected at node {}", id)
            }
            StoreError::Unallocated { id } => {
                write!(f, "Invalid handle: node {} was never allocated", id)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// State of a node slot
#[derive(Debug, Clone, PartialEq, Eq)]
enum SlotState {
    Allocated,
    Tombstone, // Freed but kept so misuse of the handle stays detectable
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    state: SlotState,
}

/// The node store
#[derive(Debug, Clone)]
pub struct NodeStore<T> {
    slots: FxHashMap<NodeId, Slot<T>>,
    next_id: u64,
    live: usize,
    total_allocated: usize,
    node_limit: usize,
}

impl<T> NodeStore<T> {
    /// Create a store with the default live-node limit
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_NODE_LIMIT)
    }

    /// Create a store that refuses allocations past `node_limit` live nodes
    ///
    /// A tiny limit is how tests force mid-build allocation failure.
    pub fn with_limit(node_limit: usize) -> Self {
        NodeStore {
            slots: FxHashMap::default(),
            next_id: NODE_ADDRESS_START,
            live: 0,
            total_allocated: 0,
            node_limit,
        }
    }

    /// Allocate one node
    pub fn allocate(&mut self, value: T) -> Result<NodeId, StoreError> {
        if self.live >= self.node_limit {
            return Err(StoreError::LimitExceeded {
                live: self.live,
                limit: self.node_limit,
            });
        }

        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.slots.insert(
            id,
            Slot {
                value,
                state: SlotState::Allocated,
            },
        );
        self.live += 1;
        self.total_allocated += 1;

        Ok(id)
    }

    /// Free a node (mark its slot as a tombstone)
    pub fn free(&mut self, id: NodeId) -> Result<(), StoreError> {
        match self.slots.get_mut(&id) {
            Some(slot) if slot.state == SlotState::Allocated => {
                slot.state = SlotState::Tombstone;
                self.live -= 1;
                Ok(())
            }
            Some(_) => Err(StoreError::DoubleFree { id }),
            None => Err(StoreError::Unallocated { id }),
        }
    }

    /// Get a node (returns an error if freed or never allocated)
    pub fn get(&self, id: NodeId) -> Result<&T, StoreError> {
        match self.slots.get(&id) {
            Some(slot) if slot.state == SlotState::Allocated => Ok(&slot.value),
            Some(_) => Err(StoreError::UseAfterFree { id }),
            None => Err(StoreError::Unallocated { id }),
        }
    }

    /// Get a mutable node
    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut T, StoreError> {
        match self.slots.get_mut(&id) {
            Some(slot) if slot.state == SlotState::Allocated => Ok(&mut slot.value),
            Some(_) => Err(StoreError::UseAfterFree { id }),
            None => Err(StoreError::Unallocated { id }),
        }
    }

    /// Number of currently live nodes
    pub fn live_nodes(&self) -> usize {
        self.live
    }

    /// Number of nodes ever allocated, tombstones included
    pub fn total_allocated(&self) -> usize {
        self.total_allocated
    }
}

impl<T> Default for NodeStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_counters() {
        let mut store: NodeStore<i32> = NodeStore::new();
        let a = store.allocate(1).unwrap();
        let b = store.allocate(2).unwrap();

        assert_ne!(a, b);
        assert_eq!(store.live_nodes(), 2);
        assert_eq!(store.total_allocated(), 2);
        assert_eq!(*store.get(a).unwrap(), 1);
        assert_eq!(*store.get(b).unwrap(), 2);

        store.free(a).unwrap();
        assert_eq!(store.live_nodes(), 1);
        assert_eq!(store.total_allocated(), 2);
    }

    #[test]
    fn test_limit_refuses_allocation() {
        let mut store: NodeStore<i32> = NodeStore::with_limit(1);
        let a = store.allocate(1).unwrap();

        let err = store.allocate(2).unwrap_err();
        assert_eq!(err, StoreError::LimitExceeded { live: 1, limit: 1 });

        // Freeing makes room again.
        store.free(a).unwrap();
        assert!(store.allocate(3).is_ok());
    }

    #[test]
    fn test_double_free_detected() {
        let mut store: NodeStore<i32> = NodeStore::new();
        let a = store.allocate(1).unwrap();

        store.free(a).unwrap();
        assert_eq!(store.free(a).unwrap_err(), StoreError::DoubleFree { id: a });
    }

    #[test]
    fn test_use_after_free_detected() {
        let mut store: NodeStore<i32> = NodeStore::new();
        let a = store.allocate(1).unwrap();

        store.free(a).unwrap();
        assert_eq!(store.get(a).unwrap_err(), StoreError::UseAfterFree { id: a });
        assert_eq!(
            store.get_mut(a).unwrap_err(),
            StoreError::UseAfterFree { id: a }
        );
    }

    #[test]
    fn test_unissued_handle_rejected() {
        let mut fresh: NodeStore<i32> = NodeStore::new();
        let mut other: NodeStore<i32> = NodeStore::new();

        // Exhaust a few ids in `other` so its handle is unknown to `fresh`.
        other.allocate(1).unwrap();
        other.allocate(2).unwrap();
        let foreign = other.allocate(3).unwrap();

        assert_eq!(
            fresh.free(foreign).unwrap_err(),
            StoreError::Unallocated { id: foreign }
        );
    }
}
