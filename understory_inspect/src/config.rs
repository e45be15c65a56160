// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime configuration for an [`Inspector`](crate::Inspector).

use understory_region_tree::{ScanLimits, TraversalPolicy};

/// Knobs that shape how the inspector resolves and enumerates regions.
///
/// Configuration is not inspection state: changing it never alters existing
/// selections, it only affects the next hit test or scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InspectorConfig {
    /// Tie-break rule for overlapping layout nodes.
    pub traversal: TraversalPolicy,
    /// Bounds applied to [`Inspector::scan`](crate::Inspector::scan).
    pub limits: ScanLimits,
}

impl InspectorConfig {
    /// Replace the traversal policy.
    #[must_use]
    pub fn with_traversal(mut self, traversal: TraversalPolicy) -> Self {
        self.traversal = traversal;
        self
    }

    /// Replace the scan limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ScanLimits) -> Self {
        self.limits = limits;
        self
    }
}
