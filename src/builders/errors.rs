//! Build error types for the demo structures
//!
//! This module defines [`BuildError`], covering the failures a caller can
//! meaningfully react to.  Both are treated as fatal by the demo binaries,
//! which print one diagnostic line and exit non-zero.
//!
//! Internal invariant breakage (a dangling child handle discovered mid
//! descent, or a corrupt chain during teardown) is deliberately *not* a
//! variant: it panics, because it means the structure itself is broken rather
//! than the environment refusing a request.

use std::fmt;

use crate::memory::StoreError;

/// Errors reported by the list and tree builders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Insertion into a tree that has no root node
    MissingRoot,

    /// The node store refused an allocation
    AllocationFailed { live: usize, limit: usize },
}

impl BuildError {
    /// Convert a failed [`crate::memory::NodeStore::allocate`] call
    ///
    /// Allocation can only fail on the live-node limit; anything else out of
    /// the store at that point means the store is corrupt.
    pub(crate) fn alloc(e: StoreError) -> Self {
        match e {
            StoreError::LimitExceeded { live, limit } => {
                BuildError::AllocationFailed { live, limit }
            }
            other => unreachable!("node store corrupt during allocation: {}", other),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingRoot => {
                write!(f, "insert_entry: require a tree with an existing root")
            }
            BuildError::AllocationFailed { live, limit } => {
                write!(
                    f,
                    "failed to allocate a node: {} live, limit is {}",
                    live, limit
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}
