// Constants shared by the demo builders

/// First handle value issued by a node store
/// Handles start at 0x10000000 so they read like heap addresses in a debugger
pub const NODE_ADDRESS_START: u64 = 0x1000_0000;

/// Number of pseudo-random insertions performed by the random builders
pub const RANDOM_DRAWS: usize = 10;

/// Default live-node limit for a node store
pub const DEFAULT_NODE_LIMIT: usize = 1 << 20;
