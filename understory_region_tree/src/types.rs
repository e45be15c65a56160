// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: node identifiers, element flags, and region descriptors.

use kurbo::{Rect, Size};

use crate::arena::SlotId;
use crate::hit::HitStrategy;

/// Identifier for a node in a [`ViewTree`](crate::ViewTree).
///
/// A small, copyable handle made of a slot index and a generation counter.
/// It stays stable while the node is alive and does not alias a different node
/// after removal: reusing a freed slot bumps its generation. Overflow is not
/// handled; the generation saturates at `u32::MAX`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ViewId(pub(crate) u32, pub(crate) u32);

/// Identifier for a node in a [`LayoutTree`](crate::LayoutTree).
///
/// Same generational semantics as [`ViewId`]. A `LayoutId` is only meaningful
/// together with the layout tree (and therefore the host view) it came from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LayoutId(pub(crate) u32, pub(crate) u32);

impl SlotId for ViewId {
    fn from_parts(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    fn idx(self) -> usize {
        self.0 as usize
    }

    fn generation(self) -> u32 {
        self.1
    }
}

impl SlotId for LayoutId {
    fn from_parts(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    fn idx(self) -> usize {
        self.0 as usize
    }

    fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility and interactivity.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is shown (for layout nodes: placed and attached).
        ///
        /// An element without this flag hides its whole subtree from hit
        /// testing and scans.
        const VISIBLE        = 0b0000_0001;
        /// Element reacts to taps.
        const CLICKABLE      = 0b0000_0010;
        /// Element reacts to long presses.
        const LONG_CLICKABLE = 0b0000_0100;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl ElementFlags {
    /// Returns `true` if the element is clickable or long-clickable.
    pub const fn is_interactive(self) -> bool {
        self.intersects(Self::CLICKABLE.union(Self::LONG_CLICKABLE))
    }

    /// Returns `true` if [`ElementFlags::VISIBLE`] is set.
    pub const fn is_visible(self) -> bool {
        self.contains(Self::VISIBLE)
    }
}

/// Opaque identity of an inspectable region.
///
/// Identity is assigned from the node a region was resolved from, never from
/// its geometry, so two unrelated elements with identical bounds stay
/// distinct. Resolving the same node twice yields equal ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegionId(Origin);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
enum Origin {
    View(ViewId),
    Layout(ViewId, LayoutId),
}

impl RegionId {
    /// Identity of a view resolved by the imperative strategy.
    pub const fn view(id: ViewId) -> Self {
        Self(Origin::View(id))
    }

    /// Identity of a layout node hosted by the view `host`.
    pub const fn layout(host: ViewId, node: LayoutId) -> Self {
        Self(Origin::Layout(host, node))
    }

    /// The strategy that produces regions with this identity.
    pub const fn source(self) -> HitStrategy {
        match self.0 {
            Origin::View(_) => HitStrategy::Imperative,
            Origin::Layout(..) => HitStrategy::Declarative,
        }
    }

    /// The view this region belongs to: the view itself, or the host of a layout node.
    pub const fn view_id(self) -> ViewId {
        match self.0 {
            Origin::View(id) | Origin::Layout(id, _) => id,
        }
    }

    /// The layout node, for regions resolved from a layout tree.
    pub const fn layout_id(self) -> Option<LayoutId> {
        match self.0 {
            Origin::View(_) => None,
            Origin::Layout(_, id) => Some(id),
        }
    }
}

/// One hit-testable element, flattened out of a view or layout tree.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegionDescriptor {
    /// Screen-space bounds.
    pub bounds: Rect,
    /// Whether the element is clickable or long-clickable.
    pub interactive: bool,
    /// Bounds of the immediate structural container, if any.
    ///
    /// For a layout root this is its host view. View roots have none.
    pub parent_bounds: Option<Rect>,
    /// Stable identity of the underlying element.
    pub id: RegionId,
}

impl RegionDescriptor {
    /// Size of [`RegionDescriptor::bounds`].
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// The strategy this region was resolved by.
    pub const fn source(&self) -> HitStrategy {
        self.id.source()
    }

    /// Returns `true` if both descriptors refer to the same element.
    pub fn is_same_element(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
