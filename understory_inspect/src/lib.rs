// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Inspect: a pointer-driven element inspection engine.
//!
//! Point at something on screen and get back precise geometry: its bounds, whether it is
//! interactive, and how far it sits from its container or from a second chosen element.
//! It is a developer tool, not an end-user feature.
//!
//! The crate owns the _decisions_ of an inspector and nothing else:
//! - [`Inspector`] turns taps and long presses into single-selection or
//!   measurement-pair state, using [`understory_region_tree`] to resolve points.
//! - [`measure`] computes edge-to-edge gaps between two rectangles.
//!
//! It does not render, attach overlays, format units, or track which window is in front.
//! Those collaborators plug in through two seams:
//! - a [`HierarchySource`] that hands out the current [`ViewTree`](understory_region_tree::ViewTree);
//! - an invalidation callback, called after every state change so a renderer knows to redraw.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_inspect::{Inspector, MeasurementMode};
//! use understory_region_tree::{ElementFlags, ViewNode, ViewTree};
//!
//! let mut tree = ViewTree::new();
//! let outer = tree.insert(None, ViewNode::new(Rect::new(0.0, 0.0, 200.0, 200.0)))?;
//! tree.insert(
//!     Some(outer),
//!     ViewNode::new(Rect::new(50.0, 50.0, 150.0, 100.0))
//!         .with_flags(ElementFlags::VISIBLE | ElementFlags::CLICKABLE),
//! )?;
//!
//! let mut redraws = 0;
//! let mut inspector = Inspector::new(tree, || redraws += 1);
//! inspector.start_session();
//!
//! // Tap selects the most specific element under the pointer.
//! assert!(inspector.tap(Point::new(75.0, 75.0)));
//! let selected = inspector.selection().unwrap();
//! assert_eq!(selected.bounds, Rect::new(50.0, 50.0, 150.0, 100.0));
//! assert!(selected.interactive);
//!
//! // Long press starts a measurement; tapping another element measures against it.
//! inspector.long_press(Point::new(10.0, 10.0));
//! inspector.tap(Point::new(75.0, 75.0));
//! assert_eq!(inspector.mode(), MeasurementMode::Relative);
//! assert_eq!(inspector.relative_distances().len(), 4);
//!
//! inspector.end_session();
//! assert!(inspector.all_regions().is_empty());
//! drop(inspector);
//! assert!(redraws > 0);
//! # Ok::<(), understory_region_tree::TreeError>(())
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous and runs on the thread that owns the UI surface. There is one
//! inspector per session and it is owned by its caller; no locking is involved.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod inspector;
pub mod measure;
mod source;

pub use config::InspectorConfig;
pub use inspector::{Gesture, Inspector, MeasurementMode, Session};
pub use measure::{Distance, Distances, Edge, distances_between};
pub use source::HierarchySource;
