// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal policy: how overlapping candidates are disambiguated.

use kurbo::Rect;

use crate::arena::Order;

/// Tie-break rule used when several layout nodes contain the same point.
///
/// The policy is configuration, not state: changing it only affects the next
/// [`locate`](crate::locate) or [`scan_all`](crate::scan_all) call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalPolicy {
    /// Compare candidates by containment.
    ///
    /// A candidate nested inside another wins over its container; among
    /// siblings the last declared (topmost drawn) wins. Scans enumerate level
    /// by level.
    #[default]
    Hierarchical,
    /// Compare candidates by depth only.
    ///
    /// The deepest candidate wins; among equal depths the first reached in a
    /// pre-order walk wins. Scans enumerate in pre-order.
    DepthFirst,
}

impl TraversalPolicy {
    /// Returns `true` if `candidate` should replace `best`.
    ///
    /// Candidates are offered in pre-order, so `candidate` is always drawn
    /// after `best`.
    pub(crate) fn prefers(self, candidate: (Rect, usize), best: (Rect, usize)) -> bool {
        match self {
            Self::Hierarchical => {
                let (c, b) = (candidate.0, best.0);
                // Keep the best only when the candidate strictly encloses it.
                !(encloses(c, b) && !encloses(b, c))
            }
            Self::DepthFirst => candidate.1 > best.1,
        }
    }

    pub(crate) fn scan_order(self) -> Order {
        match self {
            Self::Hierarchical => Order::LevelOrder,
            Self::DepthFirst => Order::PreOrder,
        }
    }
}

fn encloses(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && outer.x1 >= inner.x1 && outer.y1 >= inner.y1
}
