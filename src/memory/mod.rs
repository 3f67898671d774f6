//! Node storage for the demo structures
//!
//! The original C demos link nodes through raw owning pointers.  Here every
//! node lives in a [`store::NodeStore`] and structures refer to each other
//! through [`store::NodeId`] handles instead, so teardown misuse (double
//! free, use-after-free, a dangling link) is detected rather than undefined.
//!
//! # Handles
//!
//! Handles are issued monotonically starting at
//! [`crate::constants::NODE_ADDRESS_START`] and are never reused, so a freed
//! node's handle stays distinguishable from a handle that was never issued.

pub mod store;

pub use store::{NodeId, NodeStore, StoreError};
