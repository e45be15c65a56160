// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Region Tree: inspectable element snapshots and hit strategies.
//!
//! This crate describes what is on screen at one point in time, in a shape that an
//! inspector can query: which element is under a point, and what every hit-testable
//! element is.
//!
//! - [`ViewTree`]: an imperative parent/child view hierarchy in screen space.
//! - [`LayoutTree`]: a declarative composition hosted inside a view, where siblings can
//!   overlap and children can overflow their parents.
//! - [`locate`]: resolves the most specific [`RegionDescriptor`] under a point.
//! - [`scan_all`]: enumerates every hit-testable region.
//!
//! ## Two tree shapes
//!
//! Real UI stacks often mix both shapes: a classic view hierarchy where one view hosts a
//! declarative composition. They need different resolution rules, so each gets its own
//! [`HitStrategy`] and [`HitStrategy::PRIORITY`] fixes the order they are tried in.
//! Supporting a new tree shape means adding a variant, not another conditional branch.
//!
//! Views clip their children, so the imperative strategy is a single descent through the
//! topmost containing child. Layout nodes do not, so the declarative strategy collects every
//! containing node and lets a [`TraversalPolicy`] decide:
//!
//! - [`TraversalPolicy::Hierarchical`]: nested candidates beat their containers, and the
//!   last-declared sibling wins among overlapping ones.
//! - [`TraversalPolicy::DepthFirst`]: the deepest candidate wins, first reached on ties.
//!
//! ## Identity
//!
//! Nodes are addressed by generational ids ([`ViewId`], [`LayoutId`]). A region's
//! [`RegionId`] is derived from the node it was resolved from, never from its geometry, so
//! resolving the same node twice yields equal ids and two elements with identical bounds
//! stay distinct.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_region_tree::{
//!     ElementFlags, HitStrategy, LayoutNode, LayoutTree, ScanLimits, TraversalPolicy, ViewNode,
//!     ViewTree, locate, scan_all,
//! };
//!
//! let mut content = LayoutTree::new();
//! let column = content.insert(None, LayoutNode::new(Rect::new(0.0, 0.0, 200.0, 200.0)))?;
//! content.insert(
//!     Some(column),
//!     LayoutNode::new(Rect::new(50.0, 50.0, 150.0, 100.0))
//!         .with_flags(ElementFlags::VISIBLE | ElementFlags::CLICKABLE),
//! )?;
//!
//! let mut tree = ViewTree::new();
//! tree.insert(None, ViewNode::new(Rect::new(0.0, 0.0, 200.0, 200.0)).with_content(content))?;
//!
//! let hit = locate(&tree, Point::new(75.0, 75.0), TraversalPolicy::Hierarchical).unwrap();
//! assert_eq!(hit.bounds, Rect::new(50.0, 50.0, 150.0, 100.0));
//! assert!(hit.interactive);
//! assert_eq!(hit.source(), HitStrategy::Declarative);
//!
//! // Two layout nodes plus the host view.
//! let all = scan_all(&tree, TraversalPolicy::Hierarchical, ScanLimits::default());
//! assert_eq!(all.len(), 3);
//! # Ok::<(), understory_region_tree::TreeError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod error;
mod hit;
mod layout;
mod policy;
mod types;
mod view;

pub use error::TreeError;
pub use hit::{HitStrategy, ScanLimits, locate, scan_all};
pub use layout::{LayoutNode, LayoutTree};
pub use policy::TraversalPolicy;
pub use types::{ElementFlags, LayoutId, RegionDescriptor, RegionId, ViewId};
pub use view::{ViewNode, ViewTree};
