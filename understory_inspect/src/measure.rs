// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-to-edge gaps between an inner rectangle and a reference rectangle.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_inspect::measure::{Edge, distances_between};
//!
//! let outer = Rect::new(50.0, 50.0, 150.0, 100.0);
//! let inner = Rect::new(70.0, 60.0, 120.0, 90.0);
//! let gaps = distances_between(inner, outer);
//! let magnitudes: Vec<_> = gaps.iter().map(|d| (d.edge, d.magnitude)).collect();
//! assert_eq!(
//!     magnitudes,
//!     vec![(Edge::Left, 20.0), (Edge::Right, 30.0), (Edge::Top, 10.0), (Edge::Bottom, 10.0)]
//! );
//!
//! // Identical rectangles have no gap at all.
//! assert!(distances_between(outer, outer).is_empty());
//! ```

use kurbo::Rect;
use smallvec::SmallVec;

/// Side of the reference rectangle a gap is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `inner.x0 - outer.x0`.
    Left,
    /// `outer.x1 - inner.x1`.
    Right,
    /// `inner.y0 - outer.y0`.
    Top,
    /// `outer.y1 - inner.y1`.
    Bottom,
}

/// One strictly positive gap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance {
    /// Which side the gap is on.
    pub edge: Edge,
    /// Gap size in screen units; always greater than zero.
    pub magnitude: f64,
}

/// Up to four gaps, in the order left, right, top, bottom.
pub type Distances = SmallVec<[Distance; 4]>;

/// Compute the gaps between `inner` and the reference rectangle `outer`.
///
/// Gaps that are zero or negative (touching or overflowing edges) are omitted.
pub fn distances_between(inner: Rect, outer: Rect) -> Distances {
    [
        (Edge::Left, inner.x0 - outer.x0),
        (Edge::Right, outer.x1 - inner.x1),
        (Edge::Top, inner.y0 - outer.y0),
        (Edge::Bottom, outer.y1 - inner.y1),
    ]
    .into_iter()
    .filter(|(_, magnitude)| *magnitude > 0.0)
    .map(|(edge, magnitude)| Distance { edge, magnitude })
    .collect()
}
