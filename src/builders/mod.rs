//! Structure builders for the demo programs
//!
//! - [`list`]: singly linked list built by head insertion
//! - [`tree`]: binary search tree with the demo's smaller-on-tie rule
//! - [`errors`]: the shared [`errors::BuildError`] type
//!
//! Each builder takes its node store and random generator explicitly, so two
//! builds with the same seed are identical and tests never share state.

pub mod errors;
pub mod list;
pub mod tree;
