// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative layout tree: a composition hosted inside a view.
//!
//! Layout nodes may overlap freely: siblings are drawn in declaration order, so
//! later siblings sit on top, and children are not required to stay inside
//! their parent. Resolving a point therefore collects every containing node and
//! lets a [`TraversalPolicy`] pick one.

use kurbo::{Point, Rect};

use crate::arena::{Arena, Order, Visit};
use crate::error::{TreeError, check_bounds};
use crate::policy::TraversalPolicy;
use crate::types::{ElementFlags, LayoutId};

/// Geometry and flags of one layout node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutNode {
    /// Screen-space bounds.
    pub bounds: Rect,
    /// Visibility and interactivity flags.
    pub flags: ElementFlags,
}

impl LayoutNode {
    /// A visible, non-interactive node with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            flags: ElementFlags::default(),
        }
    }

    /// Replace the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A declarative composition: an ordered forest of [`LayoutNode`]s.
#[derive(Clone, Debug, Default)]
pub struct LayoutTree {
    arena: Arena<LayoutId, LayoutNode>,
}

impl LayoutTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node as the last child of `parent` (or as the last root if `None`).
    pub fn insert(
        &mut self,
        parent: Option<LayoutId>,
        node: LayoutNode,
    ) -> Result<LayoutId, TreeError> {
        check_bounds(node.bounds)?;
        self.arena.insert(parent, node).ok_or(TreeError::StaleParent)
    }

    /// Remove a node and its subtree. Stale ids are ignored.
    pub fn remove(&mut self, id: LayoutId) {
        self.arena.remove(id);
    }

    /// Replace the bounds of a live node.
    pub fn set_bounds(&mut self, id: LayoutId, bounds: Rect) -> Result<(), TreeError> {
        check_bounds(bounds)?;
        let node = self.arena.get_mut(id).ok_or(TreeError::StaleNode)?;
        node.bounds = bounds;
        Ok(())
    }

    /// Replace the flags of a live node.
    pub fn set_flags(&mut self, id: LayoutId, flags: ElementFlags) -> Result<(), TreeError> {
        let node = self.arena.get_mut(id).ok_or(TreeError::StaleNode)?;
        node.flags = flags;
        Ok(())
    }

    /// Returns `true` if `id` refers to a live node.
    pub fn is_alive(&self, id: LayoutId) -> bool {
        self.arena.is_alive(id)
    }

    /// The node behind a live id.
    pub fn get(&self, id: LayoutId) -> Option<&LayoutNode> {
        self.arena.get(id)
    }

    /// Parent of a live node, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: LayoutId) -> Option<LayoutId> {
        self.arena.parent_of(id)
    }

    /// Children of a live node in declaration order.
    pub fn children_of(&self, id: LayoutId) -> &[LayoutId] {
        self.arena.children_of(id)
    }

    /// Roots in declaration order.
    pub fn roots(&self) -> &[LayoutId] {
        self.arena.roots()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree has no live nodes.
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Resolve the visible node under `pt` according to `policy`.
    ///
    /// Every visible node containing the point is a candidate, regardless of
    /// whether its parent contains the point. Hidden nodes hide their subtree.
    pub fn hit_test_point(&self, pt: Point, policy: TraversalPolicy) -> Option<LayoutId> {
        let mut best: Option<(LayoutId, Rect, usize)> = None;
        self.arena.walk(Order::PreOrder, |id, depth, node| {
            if !node.flags.is_visible() {
                return Visit::SkipChildren;
            }
            if node.bounds.contains(pt) {
                let replace = match best {
                    None => true,
                    Some((_, bounds, d)) => policy.prefers((node.bounds, depth), (bounds, d)),
                };
                if replace {
                    best = Some((id, node.bounds, depth));
                }
            }
            Visit::Descend
        });
        best.map(|(id, _, _)| id)
    }

    /// Visit visible nodes in `order`, at most `max_depth` levels deep.
    pub(crate) fn for_each_visible<F>(&self, order: Order, max_depth: Option<usize>, mut f: F)
    where
        F: FnMut(LayoutId, &LayoutNode) -> bool,
    {
        self.arena.walk(order, |id, depth, node| {
            if !node.flags.is_visible() || max_depth.is_some_and(|max| depth > max) {
                return Visit::SkipChildren;
            }
            if !f(id, node) {
                return Visit::Stop;
            }
            Visit::Descend
        });
    }
}
