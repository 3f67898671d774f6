//! Singly linked list builder
//!
//! The classic demo shape: every insertion happens at the head, so a finished
//! random list holds its draws in reverse draw order.  The chain is acyclic
//! and finite; the last node's `next` is `None`.

use rand::Rng;

use crate::builders::errors::BuildError;
use crate::constants::RANDOM_DRAWS;
use crate::memory::{NodeId, NodeStore};

/// A node in the singly linked list
#[derive(Debug, Clone)]
pub struct ListNode {
    pub datum: i32,
    pub next: Option<NodeId>,
}

// A handle that fails to resolve inside the chain means the list is corrupt,
// which is fatal rather than recoverable.
fn node(store: &NodeStore<ListNode>, id: NodeId) -> &ListNode {
    store
        .get(id)
        .unwrap_or_else(|e| panic!("list links corrupt: {}", e))
}

/// Insert a new node at the head of the list
///
/// O(1): the new node's `next` takes the current head, then the head slot is
/// updated to the new node.  On allocation failure the list is untouched.
pub fn insert_entry(
    store: &mut NodeStore<ListNode>,
    head: &mut Option<NodeId>,
    datum: i32,
) -> Result<(), BuildError> {
    let newnode = ListNode { datum, next: *head };
    let id = store.allocate(newnode).map_err(BuildError::alloc)?;
    *head = Some(id);
    Ok(())
}

/// Build a list of exactly [`RANDOM_DRAWS`] pseudo-random payloads
///
/// Deterministic: the same generator state produces the same list.  If any
/// insertion fails, the partial list is torn down before the error is
/// returned, so the store's live count is back at its baseline.
pub fn create_random_list<R: Rng>(
    store: &mut NodeStore<ListNode>,
    rng: &mut R,
) -> Result<Option<NodeId>, BuildError> {
    let mut head = None;

    for _ in 0..RANDOM_DRAWS {
        let datum = rng.gen_range(0..=i32::MAX);
        if let Err(e) = insert_entry(store, &mut head, datum) {
            free_list(store, head);
            return Err(e);
        }
    }

    Ok(head)
}

/// Free every node from head to tail
///
/// The successor is recorded before each node is freed.  Freeing an empty
/// list is a no-op; this never fails on a well-formed chain.
pub fn free_list(store: &mut NodeStore<ListNode>, head: Option<NodeId>) {
    let mut cur = head;
    while let Some(id) = cur {
        cur = node(store, id).next;
        store
            .free(id)
            .unwrap_or_else(|e| panic!("list links corrupt: {}", e));
    }
}

/// Payloads from head to tail
pub fn collect(store: &NodeStore<ListNode>, head: Option<NodeId>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut cur = head;
    while let Some(id) = cur {
        let n = node(store, id);
        out.push(n.datum);
        cur = n.next;
    }
    out
}
