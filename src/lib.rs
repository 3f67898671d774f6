//! # Introduction
//!
//! walker-demos builds small, reproducible in-memory data structures (a
//! singly linked list, a binary search tree, and a handful of std container
//! instantiations) from a seeded pseudo-random sequence.  The structures
//! exist so an external debugger extension can walk known memory layouts in a
//! live process; the interesting output is the memory itself, not anything
//! the programs print.
//!
//! ## Build pipeline
//!
//! ```text
//! Seed → SmallRng → builder (repeated insertion) → live structure → teardown
//! ```
//!
//! 1. [`memory`] — the node store: address-like [`memory::NodeId`] handles,
//!    tombstones for freed nodes, a live-node limit, and instrumentation
//!    counters.
//! 2. [`builders`] — the list and tree builders and their shared
//!    [`builders::errors::BuildError`] type.
//! 3. [`cli`] — seed-argument parsing shared by the demo binaries.
//!
//! ## Determinism
//!
//! Builders take the node store and the random generator as explicit
//! arguments; there is no process-global state.  Two builds with the same
//! seed and the same generator produce identical structures, and a failed
//! build tears its partial structure down before returning, leaving the
//! store's live count at its baseline.

pub mod builders;
pub mod cli;
pub mod constants;
pub mod memory;
