// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit strategies: resolve a point, or enumerate every region, over a [`ViewTree`].
//!
//! ## Strategies
//!
//! A hierarchy can describe the same screen through two tree shapes at once:
//! views, and layout trees hosted inside views. Each shape gets its own
//! [`HitStrategy`] variant, and [`HitStrategy::PRIORITY`] fixes the order in
//! which they are tried:
//!
//! 1. [`HitStrategy::Declarative`] resolves the point against every hosted
//!    [`LayoutTree`](crate::LayoutTree), letting the [`TraversalPolicy`] pick
//!    among overlapping nodes. A host only takes part when it and all of its
//!    ancestors contain the point. If several hosts produce a hit, the one
//!    drawn last wins.
//! 2. [`HitStrategy::Imperative`] descends the view tree with
//!    [`ViewTree::find_leaf`]. It only runs when the declarative strategy
//!    found nothing.
//!
//! ## Scans
//!
//! [`scan_all`] concatenates each strategy's scan in priority order. It does
//! not de-duplicate: a host view appears once as a view, and its content
//! appears again as layout nodes. Zero-area regions are skipped because they
//! can never be hit.

use alloc::vec::Vec;

use kurbo::Point;

use crate::policy::TraversalPolicy;
use crate::types::{LayoutId, RegionDescriptor, RegionId, ViewId};
use crate::view::ViewTree;

/// Bounds on scan traversal for very large hierarchies.
///
/// `None` means unbounded, which is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanLimits {
    /// Deepest level visited in each tree (roots are depth 1).
    pub max_depth: Option<usize>,
    /// Maximum number of regions returned by [`scan_all`].
    pub max_regions: Option<usize>,
}

impl ScanLimits {
    /// No limits.
    pub const UNBOUNDED: Self = Self {
        max_depth: None,
        max_regions: None,
    };

    fn is_full(&self, len: usize) -> bool {
        self.max_regions.is_some_and(|max| len >= max)
    }
}

/// A hit-testing strategy over one tree shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitStrategy {
    /// Layout trees hosted inside views.
    Declarative,
    /// The view tree itself.
    Imperative,
}

impl HitStrategy {
    /// Strategies in the order [`locate`] tries them.
    pub const PRIORITY: [Self; 2] = [Self::Declarative, Self::Imperative];

    /// Resolve the region under `pt` using this strategy alone.
    pub fn locate(
        self,
        tree: &ViewTree,
        pt: Point,
        policy: TraversalPolicy,
    ) -> Option<RegionDescriptor> {
        match self {
            Self::Declarative => locate_declarative(tree, pt, policy),
            Self::Imperative => locate_imperative(tree, pt),
        }
    }

    /// Enumerate every region this strategy can see.
    pub fn scan(
        self,
        tree: &ViewTree,
        policy: TraversalPolicy,
        limits: ScanLimits,
    ) -> Vec<RegionDescriptor> {
        let mut out = Vec::new();
        match self {
            Self::Declarative => scan_declarative(tree, policy, limits, &mut out),
            Self::Imperative => scan_imperative(tree, policy, limits, &mut out),
        }
        out
    }
}

/// Resolve the most specific region under `pt`.
///
/// Tries each strategy in [`HitStrategy::PRIORITY`] order and returns the
/// first hit. This is a pure query: the same tree and point always give the
/// same result.
pub fn locate(tree: &ViewTree, pt: Point, policy: TraversalPolicy) -> Option<RegionDescriptor> {
    let found = HitStrategy::PRIORITY
        .iter()
        .find_map(|strategy| strategy.locate(tree, pt, policy));
    match &found {
        Some(region) => tracing::trace!(
            x = pt.x,
            y = pt.y,
            source = ?region.source(),
            "located region"
        ),
        None => tracing::trace!(x = pt.x, y = pt.y, "no region under point"),
    }
    found
}

/// Enumerate every region visible to any strategy.
///
/// The result is rebuilt on each call. Strategy results are concatenated in
/// priority order and truncated to [`ScanLimits::max_regions`].
pub fn scan_all(
    tree: &ViewTree,
    policy: TraversalPolicy,
    limits: ScanLimits,
) -> Vec<RegionDescriptor> {
    let mut out = Vec::new();
    for strategy in HitStrategy::PRIORITY {
        if limits.is_full(out.len()) {
            break;
        }
        out.extend(strategy.scan(tree, policy, limits));
    }
    if let Some(max) = limits.max_regions {
        out.truncate(max);
    }
    tracing::trace!(regions = out.len(), ?policy, "scanned hierarchy");
    out
}

fn locate_declarative(
    tree: &ViewTree,
    pt: Point,
    policy: TraversalPolicy,
) -> Option<RegionDescriptor> {
    let mut found: Option<(ViewId, LayoutId)> = None;
    tree.for_each_under(pt, |host, view| {
        if let Some(content) = &view.content
            && let Some(node) = content.hit_test_point(pt, policy)
        {
            found = Some((host, node));
        }
    });
    let (host, node) = found?;
    layout_region(tree, host, node)
}

fn locate_imperative(tree: &ViewTree, pt: Point) -> Option<RegionDescriptor> {
    let (leaf, parent) = tree.find_leaf(pt)?;
    let view = tree.get(leaf)?;
    Some(RegionDescriptor {
        bounds: view.bounds,
        interactive: view.flags.is_interactive(),
        parent_bounds: parent.and_then(|p| tree.get(p)).map(|p| p.bounds),
        id: RegionId::view(leaf),
    })
}

fn layout_region(tree: &ViewTree, host: ViewId, node: LayoutId) -> Option<RegionDescriptor> {
    let host_view = tree.get(host)?;
    let content = host_view.content.as_ref()?;
    let layout = content.get(node)?;
    let parent_bounds = match content.parent_of(node) {
        Some(parent) => content.get(parent).map(|p| p.bounds),
        None => Some(host_view.bounds),
    };
    Some(RegionDescriptor {
        bounds: layout.bounds,
        interactive: layout.flags.is_interactive(),
        parent_bounds,
        id: RegionId::layout(host, node),
    })
}

fn scan_declarative(
    tree: &ViewTree,
    policy: TraversalPolicy,
    limits: ScanLimits,
    out: &mut Vec<RegionDescriptor>,
) {
    let order = policy.scan_order();
    tree.for_each_visible(order, limits.max_depth, |host, view| {
        let Some(content) = &view.content else {
            return true;
        };
        content.for_each_visible(order, limits.max_depth, |node, layout| {
            if limits.is_full(out.len()) {
                return false;
            }
            if layout.bounds.area() > 0.0
                && let Some(region) = layout_region(tree, host, node)
            {
                out.push(region);
            }
            true
        });
        !limits.is_full(out.len())
    });
}

fn scan_imperative(
    tree: &ViewTree,
    policy: TraversalPolicy,
    limits: ScanLimits,
    out: &mut Vec<RegionDescriptor>,
) {
    tree.for_each_visible(policy.scan_order(), limits.max_depth, |id, view| {
        if limits.is_full(out.len()) {
            return false;
        }
        if view.bounds.area() > 0.0 {
            out.push(RegionDescriptor {
                bounds: view.bounds,
                interactive: view.flags.is_interactive(),
                parent_bounds: tree
                    .parent_of(id)
                    .and_then(|p| tree.get(p))
                    .map(|p| p.bounds),
                id: RegionId::view(id),
            });
        }
        true
    });
}
