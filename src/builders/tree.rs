//! Binary search tree builder
//!
//! Direction rule from the original demo: a node whose payload is strictly
//! less than the incoming datum sends it toward [`Direction::Larger`];
//! everything else, exact ties included, goes toward [`Direction::Smaller`].
//! Duplicates therefore accumulate on the smaller side of their first
//! occurrence instead of being rejected.  The rule is unusual (most
//! references route ties right) but downstream tooling depends on the shapes
//! it produces, so it is preserved exactly.

use rand::Rng;

use crate::builders::errors::BuildError;
use crate::constants::RANDOM_DRAWS;
use crate::memory::{NodeId, NodeStore};

/// Child slot selector for a [`TreeNode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Smaller = 0,
    Larger = 1,
}

/// A node in the binary search tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub datum: i32,
    /// Child handles indexed by [`Direction`]
    pub children: [Option<NodeId>; 2],
}

impl TreeNode {
    fn leaf(datum: i32) -> Self {
        TreeNode {
            datum,
            children: [None, None],
        }
    }

    /// Child handle in the given direction
    pub fn child(&self, dir: Direction) -> Option<NodeId> {
        self.children[dir as usize]
    }
}

// A handle that fails to resolve mid-descent means the tree is corrupt,
// which is fatal rather than recoverable.
fn node(store: &NodeStore<TreeNode>, id: NodeId) -> &TreeNode {
    store
        .get(id)
        .unwrap_or_else(|e| panic!("tree links corrupt: {}", e))
}

fn node_mut(store: &mut NodeStore<TreeNode>, id: NodeId) -> &mut TreeNode {
    store
        .get_mut(id)
        .unwrap_or_else(|e| panic!("tree links corrupt: {}", e))
}

/// Create the root node with both children empty
///
/// This is the only way a tree acquires a root; [`insert_entry`] refuses to
/// create the first node.
pub fn create_tree(
    store: &mut NodeStore<TreeNode>,
    root_datum: i32,
) -> Result<NodeId, BuildError> {
    store
        .allocate(TreeNode::leaf(root_datum))
        .map_err(BuildError::alloc)
}

/// Insert a payload by comparison descent from the root
///
/// Fails with [`BuildError::MissingRoot`] if the tree has no root, and with
/// [`BuildError::AllocationFailed`] (tree untouched) if the store refuses the
/// new node.  Descent always terminates at an empty child slot: every node
/// has two slots and each step strictly descends.
pub fn insert_entry(
    store: &mut NodeStore<TreeNode>,
    root: Option<NodeId>,
    datum: i32,
) -> Result<(), BuildError> {
    let Some(root) = root else {
        return Err(BuildError::MissingRoot);
    };

    let id = store
        .allocate(TreeNode::leaf(datum))
        .map_err(BuildError::alloc)?;

    let mut cur = root;
    loop {
        let n = node(store, cur);
        let dir = if n.datum < datum {
            Direction::Larger
        } else {
            Direction::Smaller
        };
        let subtree = n.child(dir);
        match subtree {
            Some(subtree) => cur = subtree,
            None => {
                node_mut(store, cur).children[dir as usize] = Some(id);
                return Ok(());
            }
        }
    }
}

/// Build a tree from one root draw plus exactly [`RANDOM_DRAWS`] insertions
///
/// Deterministic: the same generator state produces the same shape and the
/// same in-order traversal.  If any insertion fails, the whole partial tree
/// is torn down before the error is returned.
pub fn create_random_tree<R: Rng>(
    store: &mut NodeStore<TreeNode>,
    rng: &mut R,
) -> Result<Option<NodeId>, BuildError> {
    let root = create_tree(store, rng.gen_range(0..=i32::MAX))?;

    for _ in 0..RANDOM_DRAWS {
        let datum = rng.gen_range(0..=i32::MAX);
        if let Err(e) = insert_entry(store, Some(root), datum) {
            free_tree(store, Some(root));
            return Err(e);
        }
    }

    Ok(Some(root))
}

/// Post-order teardown: `Larger` subtree, then `Smaller`, then the node
///
/// Uses an explicit work stack instead of recursion, so a fully skewed tree
/// cannot exhaust the call stack.  Freeing an empty tree is a no-op.
pub fn free_tree(store: &mut NodeStore<TreeNode>, root: Option<NodeId>) {
    let mut stack = match root {
        Some(id) => vec![(id, false)],
        None => return,
    };

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            store
                .free(id)
                .unwrap_or_else(|e| panic!("tree links corrupt: {}", e));
            continue;
        }

        let n = node(store, id);
        let smaller = n.child(Direction::Smaller);
        let larger = n.child(Direction::Larger);

        // The node marker goes deepest and `Larger` last, so the pop order
        // frees the larger subtree first and the node after both children.
        stack.push((id, true));
        if let Some(subtree) = smaller {
            stack.push((subtree, false));
        }
        if let Some(subtree) = larger {
            stack.push((subtree, false));
        }
    }
}

/// In-order payloads (`Smaller` subtree, node, `Larger` subtree)
///
/// Sorted ascending for any tree built through [`insert_entry`].
pub fn in_order(store: &NodeStore<TreeNode>, root: Option<NodeId>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut cur = root;

    loop {
        while let Some(id) = cur {
            stack.push(id);
            cur = node(store, id).child(Direction::Smaller);
        }
        let Some(id) = stack.pop() else {
            break;
        };
        let n = node(store, id);
        out.push(n.datum);
        cur = n.child(Direction::Larger);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_requires_root() {
        let mut store = NodeStore::new();
        let err = insert_entry(&mut store, None, 1).unwrap_err();

        assert_eq!(err, BuildError::MissingRoot);
        assert_eq!(store.live_nodes(), 0);
    }

    #[test]
    fn test_smaller_and_larger_placement() {
        let mut store = NodeStore::new();
        let root = create_tree(&mut store, 50).unwrap();

        insert_entry(&mut store, Some(root), 20).unwrap();
        insert_entry(&mut store, Some(root), 80).unwrap();

        let n = store.get(root).unwrap();
        let smaller = n.child(Direction::Smaller).unwrap();
        let larger = n.child(Direction::Larger).unwrap();
        assert_eq!(store.get(smaller).unwrap().datum, 20);
        assert_eq!(store.get(larger).unwrap().datum, 80);
    }

    #[test]
    fn test_ties_route_smaller() {
        let mut store = NodeStore::new();
        let root = create_tree(&mut store, 5).unwrap();

        insert_entry(&mut store, Some(root), 5).unwrap();
        insert_entry(&mut store, Some(root), 5).unwrap();

        // Duplicates chain down the Smaller side of their first occurrence.
        let first = store.get(root).unwrap().child(Direction::Smaller).unwrap();
        assert_eq!(store.get(first).unwrap().datum, 5);
        let second = store.get(first).unwrap().child(Direction::Smaller).unwrap();
        assert_eq!(store.get(second).unwrap().datum, 5);

        assert_eq!(in_order(&store, Some(root)), vec![5, 5, 5]);
    }

    #[test]
    fn test_free_empty_tree_is_noop() {
        let mut store: NodeStore<TreeNode> = NodeStore::new();
        free_tree(&mut store, None);
        assert_eq!(store.live_nodes(), 0);
    }

    #[test]
    fn test_skewed_tree_teardown() {
        // Ascending insertions build a fully Larger-skewed chain; teardown
        // must not recurse per node.
        let mut store = NodeStore::new();
        let root = create_tree(&mut store, 0).unwrap();
        for datum in 1..=1000 {
            insert_entry(&mut store, Some(root), datum).unwrap();
        }

        assert_eq!(store.live_nodes(), 1001);
        free_tree(&mut store, Some(root));
        assert_eq!(store.live_nodes(), 0);
    }
}
