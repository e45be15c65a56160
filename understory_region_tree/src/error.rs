// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building a snapshot.

use kurbo::Rect;

/// Reasons a tree mutation was rejected.
///
/// Queries never fail: a stale id or a miss is reported as `None`.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// The parent id does not refer to a live node.
    #[error("parent node is stale or was never inserted")]
    StaleParent,
    /// The node id does not refer to a live node.
    #[error("node is stale or was never inserted")]
    StaleNode,
    /// Bounds have non-finite coordinates or a negative width or height.
    #[error("invalid bounds {0:?}: expected finite coordinates and non-negative size")]
    InvalidBounds(Rect),
}

pub(crate) fn check_bounds(bounds: Rect) -> Result<Rect, TreeError> {
    if bounds.is_finite() && bounds.width() >= 0.0 && bounds.height() >= 0.0 {
        Ok(bounds)
    } else {
        Err(TreeError::InvalidBounds(bounds))
    }
}
