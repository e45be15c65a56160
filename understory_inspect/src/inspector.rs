// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspector state machine: pointer gestures in, selection state out.
//!
//! ## Usage
//!
//! 1) Build an [`Inspector`] from a [`HierarchySource`] and an invalidation callback.
//! 2) Call [`Inspector::start_session`] when inspection begins; this also scans.
//! 3) Feed pointer gestures with [`Inspector::tap`], [`Inspector::long_press`], or
//!    [`Inspector::handle`].
//! 4) Read the state back with the accessors whenever the callback fires.
//! 5) Call [`Inspector::end_session`] when inspection ends; this clears everything.
//!
//! ## Transitions
//!
//! | Gesture        | Mode       | Effect                                                     |
//! |----------------|------------|------------------------------------------------------------|
//! | tap on R       | Normal     | selection = R                                              |
//! | tap on R       | Relative   | secondary = R, primary untouched                           |
//! | long press R   | Relative, primary is R | back to Normal with selection = R          |
//! | long press R   | otherwise  | Relative with primary = R, secondary and selection cleared |
//!
//! A gesture that hits nothing, or any operation while the session is idle, is
//! a no-op: no state changes and the callback does not fire.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use understory_region_tree::{RegionDescriptor, ScanLimits, TraversalPolicy, locate, scan_all};

use crate::config::InspectorConfig;
use crate::measure::{Distances, distances_between};
use crate::source::HierarchySource;

/// Whether the inspector tracks one selection or a measurement pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MeasurementMode {
    /// A single selection.
    #[default]
    Normal,
    /// A primary and a secondary selection, measured against each other.
    Relative,
}

/// Lifecycle of an inspection session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Session {
    /// No session; every operation is a no-op.
    #[default]
    Idle,
    /// A session is running and gestures are accepted.
    Scanning,
}

/// A pointer gesture in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// A short press.
    Tap(Point),
    /// A long press.
    LongPress(Point),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum SelectionState {
    Normal {
        selection: Option<RegionDescriptor>,
    },
    Relative {
        primary: RegionDescriptor,
        secondary: Option<RegionDescriptor>,
    },
}

impl SelectionState {
    const EMPTY: Self = Self::Normal { selection: None };
}

/// Element inspection engine.
///
/// Owns the selection state for one inspection session. The hierarchy is read
/// from `S` on every operation and never cached, except for the explicit
/// [`all_regions`](Inspector::all_regions) snapshot kept until the next scan.
///
/// `F` is called after every operation that changes state. It is a
/// fire-and-forget signal; the inspector does not wait for any redraw.
pub struct Inspector<S, F> {
    source: S,
    invalidate: F,
    config: InspectorConfig,
    session: Session,
    state: SelectionState,
    all_regions: Vec<RegionDescriptor>,
    revision: u64,
}

impl<S, F> fmt::Debug for Inspector<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspector")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("state", &self.state)
            .field("all_regions", &self.all_regions.len())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<S, F> Inspector<S, F>
where
    S: HierarchySource,
    F: FnMut(),
{
    /// Create an idle inspector with the default configuration.
    pub fn new(source: S, invalidate: F) -> Self {
        Self::with_config(source, invalidate, InspectorConfig::default())
    }

    /// Create an idle inspector with an explicit configuration.
    pub fn with_config(source: S, invalidate: F, config: InspectorConfig) -> Self {
        Self {
            source,
            invalidate,
            config,
            session: Session::Idle,
            state: SelectionState::EMPTY,
            all_regions: Vec::new(),
            revision: 0,
        }
    }

    /// The hierarchy source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the hierarchy source, for example to swap in a new snapshot.
    ///
    /// This does not rescan; call [`Inspector::scan`] to refresh
    /// [`all_regions`](Inspector::all_regions).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Current configuration.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Select the traversal policy used by the next hit test or scan.
    pub fn set_traversal_policy(&mut self, policy: TraversalPolicy) {
        self.config.traversal = policy;
    }

    /// The active traversal policy.
    pub fn traversal_policy(&self) -> TraversalPolicy {
        self.config.traversal
    }

    /// Returns `true` if the depth-first policy is active.
    pub fn is_depth_first(&self) -> bool {
        self.config.traversal == TraversalPolicy::DepthFirst
    }

    /// Replace the limits used by the next scan.
    pub fn set_scan_limits(&mut self, limits: ScanLimits) {
        self.config.limits = limits;
    }

    /// Current session state.
    pub fn session(&self) -> Session {
        self.session
    }

    /// Returns `true` while a session is running.
    pub fn is_active(&self) -> bool {
        self.session == Session::Scanning
    }

    /// Begin a session and scan the hierarchy.
    ///
    /// The callback fires once even when there is no hierarchy to scan.
    /// Returns `false` if a session was already running.
    pub fn start_session(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.session = Session::Scanning;
        tracing::debug!("inspection session started");
        if !self.scan() {
            self.changed();
        }
        true
    }

    /// Clear all state and end the session.
    ///
    /// Returns `false` if no session was running.
    pub fn end_session(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.clear_scan();
        self.session = Session::Idle;
        tracing::debug!("inspection session ended");
        true
    }

    /// Start the session if idle, end it otherwise. Returns the new session state.
    pub fn toggle_session(&mut self) -> Session {
        if self.is_active() {
            self.end_session();
        } else {
            self.start_session();
        }
        self.session
    }

    /// Dispatch a gesture to [`Inspector::tap`] or [`Inspector::long_press`].
    pub fn handle(&mut self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::Tap(pt) => self.tap(pt),
            Gesture::LongPress(pt) => self.long_press(pt),
        }
    }

    /// Select the region under `pt`.
    ///
    /// In normal mode it becomes the selection; in relative mode it becomes
    /// the secondary selection. Returns `true` if state changed.
    pub fn tap(&mut self, pt: Point) -> bool {
        let Some(region) = self.locate(pt) else {
            return false;
        };
        match &mut self.state {
            SelectionState::Normal { selection } => *selection = Some(region),
            SelectionState::Relative { secondary, .. } => *secondary = Some(region),
        }
        self.changed();
        true
    }

    /// Enter relative mode on the region under `pt`, or leave it.
    ///
    /// Long-pressing the current primary selection returns to normal mode with
    /// that region selected. Any other hit makes it the new primary and clears
    /// the secondary. Returns `true` if state changed.
    pub fn long_press(&mut self, pt: Point) -> bool {
        let Some(region) = self.locate(pt) else {
            return false;
        };
        self.state = match self.state {
            SelectionState::Relative { primary, .. } if primary.is_same_element(&region) => {
                tracing::debug!(mode = ?MeasurementMode::Normal, "measurement mode toggled back");
                SelectionState::Normal {
                    selection: Some(region),
                }
            }
            _ => {
                tracing::debug!(mode = ?MeasurementMode::Relative, "primary selection set");
                SelectionState::Relative {
                    primary: region,
                    secondary: None,
                }
            }
        };
        self.changed();
        true
    }

    /// Re-enumerate every region in the hierarchy into [`Inspector::all_regions`].
    ///
    /// Selections and mode are left untouched. Returns `false` when idle or when
    /// the source has no hierarchy.
    pub fn scan(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(tree) = self.source.hierarchy() else {
            tracing::trace!("scan skipped: no hierarchy");
            return false;
        };
        let regions = scan_all(tree, self.config.traversal, self.config.limits);
        self.all_regions = regions;
        self.changed();
        true
    }

    /// Drop scanned regions and all selections, and return to normal mode.
    ///
    /// Returns `false` when idle.
    pub fn clear_scan(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.all_regions = Vec::new();
        self.state = SelectionState::EMPTY;
        self.changed();
        true
    }

    /// Current measurement mode.
    pub fn mode(&self) -> MeasurementMode {
        match self.state {
            SelectionState::Normal { .. } => MeasurementMode::Normal,
            SelectionState::Relative { .. } => MeasurementMode::Relative,
        }
    }

    /// The selection in normal mode.
    pub fn selection(&self) -> Option<&RegionDescriptor> {
        match &self.state {
            SelectionState::Normal { selection } => selection.as_ref(),
            SelectionState::Relative { .. } => None,
        }
    }

    /// The primary selection in relative mode.
    pub fn primary_selection(&self) -> Option<&RegionDescriptor> {
        match &self.state {
            SelectionState::Normal { .. } => None,
            SelectionState::Relative { primary, .. } => Some(primary),
        }
    }

    /// The secondary selection in relative mode.
    pub fn secondary_selection(&self) -> Option<&RegionDescriptor> {
        match &self.state {
            SelectionState::Normal { .. } => None,
            SelectionState::Relative { secondary, .. } => secondary.as_ref(),
        }
    }

    /// Regions from the last scan, empty before the first scan and after clearing.
    pub fn all_regions(&self) -> &[RegionDescriptor] {
        &self.all_regions
    }

    /// Monotonic counter bumped on every state change.
    ///
    /// Renderers can compare it against the value they last drew instead of
    /// diffing the state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Gaps between the secondary (inner) and primary (reference) selections.
    ///
    /// Empty unless both are set.
    pub fn relative_distances(&self) -> Distances {
        match &self.state {
            SelectionState::Relative {
                primary,
                secondary: Some(secondary),
            } => distances_between(secondary.bounds, primary.bounds),
            _ => Distances::new(),
        }
    }

    /// Gaps between the normal-mode selection and its structural parent.
    ///
    /// Empty if there is no selection or it has no parent.
    pub fn parent_distances(&self) -> Distances {
        match self.selection() {
            Some(RegionDescriptor {
                bounds,
                parent_bounds: Some(parent),
                ..
            }) => distances_between(*bounds, *parent),
            _ => Distances::new(),
        }
    }

    fn locate(&self, pt: Point) -> Option<RegionDescriptor> {
        if !self.is_active() {
            return None;
        }
        let tree = self.source.hierarchy()?;
        locate(tree, pt, self.config.traversal)
    }

    fn changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        (self.invalidate)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use core::cell::Cell;
    use kurbo::Rect;
    use understory_region_tree::{ViewNode, ViewTree};

    fn two_views() -> ViewTree {
        let mut tree = ViewTree::new();
        let root = tree
            .insert(None, ViewNode::new(Rect::new(0.0, 0.0, 100.0, 100.0)))
            .unwrap();
        tree.insert(Some(root), ViewNode::new(Rect::new(10.0, 10.0, 50.0, 50.0)))
            .unwrap();
        tree
    }

    #[test]
    fn mode_shapes_are_mutually_exclusive() {
        let mut inspector = Inspector::new(two_views(), || {});
        inspector.start_session();
        let pt = Point::new(20.0, 20.0);

        inspector.tap(pt);
        assert!(inspector.selection().is_some());
        assert!(inspector.primary_selection().is_none());
        assert!(inspector.secondary_selection().is_none());

        inspector.long_press(Point::new(90.0, 90.0));
        inspector.tap(pt);
        assert!(inspector.selection().is_none());
        assert!(inspector.primary_selection().is_some());
        assert!(inspector.secondary_selection().is_some());
    }

    #[test]
    fn revision_tracks_invalidations() {
        let calls = Cell::new(0_u64);
        let mut inspector = Inspector::new(two_views(), || calls.set(calls.get() + 1));
        inspector.start_session();
        inspector.tap(Point::new(20.0, 20.0));
        inspector.tap(Point::new(500.0, 500.0));
        assert_eq!(inspector.revision(), 2);
        assert_eq!(calls.get(), inspector.revision());
    }

    #[test]
    fn session_start_invalidates_without_a_hierarchy() {
        let calls = Cell::new(0_u64);
        let mut inspector = Inspector::new(None::<ViewTree>, || calls.set(calls.get() + 1));
        assert!(inspector.start_session());
        assert_eq!(inspector.revision(), 1);
        assert_eq!(calls.get(), 1);

        // With a hierarchy the scan itself is the single signal.
        let calls = Cell::new(0_u64);
        let mut inspector = Inspector::new(two_views(), || calls.set(calls.get() + 1));
        inspector.start_session();
        assert_eq!(inspector.revision(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn debug_output_omits_source_and_callback() {
        let inspector = Inspector::new(two_views(), || {});
        let text = format!("{inspector:?}");
        assert!(text.starts_with("Inspector"));
        assert!(text.contains("Idle"));
    }
}
