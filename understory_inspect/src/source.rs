// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the inspector gets its hierarchy from.

use alloc::boxed::Box;

use understory_region_tree::ViewTree;

/// Supplies the hierarchy the inspector resolves pointer events against.
///
/// The inspector reads the hierarchy on every operation and never caches it,
/// so implementations can hand out whichever surface is in the foreground
/// right now. Returning `None` (no foreground surface) turns the operation
/// into a no-op.
pub trait HierarchySource {
    /// The current root hierarchy, if any.
    fn hierarchy(&self) -> Option<&ViewTree>;
}

impl HierarchySource for ViewTree {
    fn hierarchy(&self) -> Option<&ViewTree> {
        Some(self)
    }
}

impl HierarchySource for Option<ViewTree> {
    fn hierarchy(&self) -> Option<&ViewTree> {
        self.as_ref()
    }
}

impl<T: HierarchySource + ?Sized> HierarchySource for &T {
    fn hierarchy(&self) -> Option<&ViewTree> {
        (**self).hierarchy()
    }
}

impl<T: HierarchySource + ?Sized> HierarchySource for Box<T> {
    fn hierarchy(&self) -> Option<&ViewTree> {
        (**self).hierarchy()
    }
}
