//! Merge sort over the raw node chain.
//!
//! Works on detached chains (no queue bookkeeping): the caller hands over
//! the head link and gets the new head back, then repairs its tail shortcut.
//! Nothing here allocates or frees a node, every step is a `next` rewire.

use super::{Link, Node};
use std::ptr::NonNull;

/// Sorts the chain starting at `head` by ascending byte-wise value
/// comparison and returns the new head.
///
/// Recursion depth is O(log n): split at the middle, sort both halves,
/// merge. Chains of length 0 or 1 are returned as-is.
pub(super) unsafe fn merge_sort(head: Link) -> Link {
    let first = match head {
        Some(first) if (*first.as_ptr()).next.is_some() => first,
        _ => return head,
    };

    let back = split(first);

    let left = merge_sort(Some(first));
    let right = merge_sort(back);

    merge(left, right)
}

/// Cuts the chain behind its middle node and returns the back half.
///
/// Fast/slow walk: `fast` starts one ahead and advances two nodes per step
/// of `slow`, so when `fast` runs out `slow` sits on the last node of the
/// front half. The chain must have at least two nodes.
unsafe fn split(head: NonNull<Node>) -> Link {
    let mut slow = head;
    let mut fast = (*head.as_ptr()).next;

    while let Some(step) = fast {
        fast = match (*step.as_ptr()).next {
            Some(next) => (*next.as_ptr()).next,
            None => break,
        };
        slow = (*slow.as_ptr()).next.expect("fast runner is ahead of slow");
    }

    let back = (*slow.as_ptr()).next;
    (*slow.as_ptr()).next = None;
    back
}

/// Weaves two sorted chains into one by repeatedly taking the smaller front
/// node. Ties take `left`, which keeps equal values in their original order.
unsafe fn merge(mut left: Link, mut right: Link) -> Link {
    let mut head: Link = None;
    let mut cursor: *mut Link = &mut head;

    loop {
        let node = match (left, right) {
            (Some(l), Some(r)) => {
                if (*l.as_ptr()).value <= (*r.as_ptr()).value {
                    left = (*l.as_ptr()).next;
                    l
                } else {
                    right = (*r.as_ptr()).next;
                    r
                }
            }
            // One side ran out, the rest of the other is already sorted.
            (rest, None) | (None, rest) => {
                *cursor = rest;
                return head;
            }
        };

        *cursor = Some(node);
        cursor = &mut (*node.as_ptr()).next;
    }
}
