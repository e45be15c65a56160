// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Imperative view tree: classic parent/child views in screen space.
//!
//! Views are expected to clip their children, so resolving a point is a single
//! descent: from the topmost root containing the point into the topmost child
//! containing it, until no child does. Any view may host a declarative
//! [`LayoutTree`] as its content.

use kurbo::{Point, Rect};

use crate::arena::{Arena, Order, Visit};
use crate::error::{TreeError, check_bounds};
use crate::layout::LayoutTree;
use crate::types::{ElementFlags, ViewId};

/// One view: its visible screen bounds, flags, and optional hosted layout.
#[derive(Clone, Debug, Default)]
pub struct ViewNode {
    /// Visible bounds in screen space.
    pub bounds: Rect,
    /// Visibility and interactivity flags.
    pub flags: ElementFlags,
    /// Declarative content hosted by this view.
    pub content: Option<LayoutTree>,
}

impl ViewNode {
    /// A visible, non-interactive view with the given bounds and no content.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// Replace the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Attach declarative content.
    #[must_use]
    pub fn with_content(mut self, content: LayoutTree) -> Self {
        self.content = Some(content);
        self
    }
}

/// Root of an inspectable hierarchy: an ordered forest of [`ViewNode`]s.
///
/// Multiple roots model stacked windows; later roots are drawn on top.
#[derive(Clone, Debug, Default)]
pub struct ViewTree {
    arena: Arena<ViewId, ViewNode>,
}

impl ViewTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a view as the last child of `parent` (or as the last root if `None`).
    ///
    /// Hosted content is not validated beyond what [`LayoutTree::insert`] already checked.
    pub fn insert(&mut self, parent: Option<ViewId>, node: ViewNode) -> Result<ViewId, TreeError> {
        check_bounds(node.bounds)?;
        self.arena.insert(parent, node).ok_or(TreeError::StaleParent)
    }

    /// Remove a view and its subtree. Stale ids are ignored.
    pub fn remove(&mut self, id: ViewId) {
        self.arena.remove(id);
    }

    /// Replace the bounds of a live view.
    pub fn set_bounds(&mut self, id: ViewId, bounds: Rect) -> Result<(), TreeError> {
        check_bounds(bounds)?;
        let node = self.arena.get_mut(id).ok_or(TreeError::StaleNode)?;
        node.bounds = bounds;
        Ok(())
    }

    /// Replace the flags of a live view.
    pub fn set_flags(&mut self, id: ViewId, flags: ElementFlags) -> Result<(), TreeError> {
        let node = self.arena.get_mut(id).ok_or(TreeError::StaleNode)?;
        node.flags = flags;
        Ok(())
    }

    /// Attach (or detach, with `None`) the declarative content of a live view.
    ///
    /// Returns the previously hosted content.
    pub fn set_content(
        &mut self,
        id: ViewId,
        content: Option<LayoutTree>,
    ) -> Result<Option<LayoutTree>, TreeError> {
        let node = self.arena.get_mut(id).ok_or(TreeError::StaleNode)?;
        Ok(core::mem::replace(&mut node.content, content))
    }

    /// Mutable access to hosted content, for in-place layout updates.
    pub fn content_mut(&mut self, id: ViewId) -> Option<&mut LayoutTree> {
        self.arena.get_mut(id)?.content.as_mut()
    }

    /// Returns `true` if `id` refers to a live view.
    pub fn is_alive(&self, id: ViewId) -> bool {
        self.arena.is_alive(id)
    }

    /// The view behind a live id.
    pub fn get(&self, id: ViewId) -> Option<&ViewNode> {
        self.arena.get(id)
    }

    /// Parent of a live view, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: ViewId) -> Option<ViewId> {
        self.arena.parent_of(id)
    }

    /// Children of a live view in draw order.
    pub fn children_of(&self, id: ViewId) -> &[ViewId] {
        self.arena.children_of(id)
    }

    /// Roots in draw order.
    pub fn roots(&self) -> &[ViewId] {
        self.arena.roots()
    }

    /// Number of live views.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree has no live views.
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Returns `true` if the view and all of its ancestors are visible.
    pub fn is_shown(&self, id: ViewId) -> bool {
        let mut cur = Some(id);
        while let Some(v) = cur {
            match self.arena.get(v) {
                Some(node) if node.flags.is_visible() => cur = self.arena.parent_of(v),
                _ => return false,
            }
        }
        true
    }

    /// Find the deepest visible view under `pt`, together with its parent.
    ///
    /// Descends from the topmost visible root containing the point into the
    /// topmost visible child containing it, and stops at the first view with no
    /// such child. Returns `None` if no visible root contains the point.
    pub fn find_leaf(&self, pt: Point) -> Option<(ViewId, Option<ViewId>)> {
        let contains = |id: &&ViewId| {
            self.arena
                .get(**id)
                .is_some_and(|n| n.flags.is_visible() && n.bounds.contains(pt))
        };
        let mut leaf = *self.roots().iter().rev().find(contains)?;
        let mut parent = None;
        while let Some(child) = self.children_of(leaf).iter().rev().find(contains) {
            parent = Some(leaf);
            leaf = *child;
        }
        Some((leaf, parent))
    }

    /// Visit, in pre-order, every visible view that contains `pt` and whose
    /// ancestors all contain it too.
    ///
    /// A view outside its parent is clipped away, together with its subtree.
    pub(crate) fn for_each_under<F>(&self, pt: Point, mut f: F)
    where
        F: FnMut(ViewId, &ViewNode),
    {
        self.arena.walk(Order::PreOrder, |id, _, node| {
            if !node.flags.is_visible() || !node.bounds.contains(pt) {
                return Visit::SkipChildren;
            }
            f(id, node);
            Visit::Descend
        });
    }

    /// Visit visible views in `order`, at most `max_depth` levels deep.
    pub(crate) fn for_each_visible<F>(&self, order: Order, max_depth: Option<usize>, mut f: F)
    where
        F: FnMut(ViewId, &ViewNode) -> bool,
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
