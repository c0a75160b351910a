//! Selection state and intent handling
//!
//! `SelectionController` is the single source of truth for which quality
//! is active. It owns the current catalog and selection state, translates
//! selection intents into engine override commands, and republishes the
//! derived marker to the UI after every operation. It borrows the engine
//! per call and never holds it: the engine belongs to the lifecycle
//! binder.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{QualityCatalog, QualityCandidate};
use crate::engine::PlaybackEngine;
use crate::topology::TrackKind;
use crate::view::PlayerView;

/// Which selection policy is active
///
/// Exactly one logical selection exists at all times. `Manual` holds a
/// position into the current catalog and is structurally prevented from
/// going stale: every catalog rebuild resets to `Automatic`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// The engine's adaptive algorithm picks the active track
    #[default]
    Automatic,
    /// The user forced the catalog entry at this index
    Manual(usize),
}

impl SelectionState {
    pub fn is_automatic(&self) -> bool {
        matches!(self, SelectionState::Automatic)
    }

    /// Position of the checkmark in the marker row: 0 for automatic,
    /// `index + 1` for a manual pick
    pub fn marker_position(&self) -> usize {
        match self {
            SelectionState::Automatic => 0,
            SelectionState::Manual(index) => index + 1,
        }
    }
}

/// Owns the quality catalog and the active selection
#[derive(Debug, Default)]
pub struct SelectionController {
    catalog: QualityCatalog,
    state: SelectionState,
}

impl SelectionController {
    /// Starts with an empty catalog in automatic mode
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &QualityCatalog {
        &self.catalog
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// True when the manual-selection affordance should be shown
    pub fn offers_choice(&self) -> bool {
        self.catalog.offers_choice()
    }

    /// Selection marker exposed to the UI: `len(catalog) + 1` booleans
    /// with exactly one `true`, recomputed from the catalog and state so
    /// length and selection can never drift apart
    pub fn selection_marker(&self) -> Vec<bool> {
        let mut marker = vec![false; self.catalog.len() + 1];
        marker[self.state.marker_position()] = true;
        marker
    }

    /// Replace the catalog wholesale and fall back to automatic mode
    ///
    /// Any pending video override on the engine is cleared so the adaptive
    /// algorithm is actually in charge after the reset.
    pub fn on_catalog_rebuilt(
        &mut self,
        catalog: QualityCatalog,
        engine: &mut dyn PlaybackEngine,
        view: &mut dyn PlayerView,
    ) {
        engine.clear_override(TrackKind::Video);
        self.catalog = catalog;
        self.state = SelectionState::Automatic;

        debug!(qualities = self.catalog.len(), "Catalog replaced, selection reset to automatic");

        view.quality_selection_changed(&self.catalog, &self.selection_marker());
    }

    /// Hand track selection back to the adaptive algorithm
    ///
    /// No-op when automatic mode is already active.
    pub fn select_automatic(&mut self, engine: &mut dyn PlaybackEngine, view: &mut dyn PlayerView) {
        if self.state.is_automatic() {
            return;
        }

        engine.clear_override(TrackKind::Video);
        self.state = SelectionState::Automatic;

        debug!("Selection switched to automatic");

        view.quality_selection_changed(&self.catalog, &self.selection_marker());
    }

    /// Force the catalog entry at `index`
    ///
    /// The existing video override is cleared before the new one is
    /// applied: the engine never holds two simultaneous video overrides.
    /// An index outside the current catalog is ignored; it can only come
    /// from a UI holding a stale catalog reference.
    pub fn select_manual(
        &mut self,
        index: usize,
        engine: &mut dyn PlaybackEngine,
        view: &mut dyn PlayerView,
    ) {
        let Some(candidate) = self.catalog.get(index) else {
            warn!(
                index,
                qualities = self.catalog.len(),
                "Manual selection out of range, ignoring"
            );
            return;
        };

        let token = candidate.token;
        let label = candidate.label.clone();
        engine.clear_override(TrackKind::Video);
        engine.apply_override(token);
        self.state = SelectionState::Manual(index);

        debug!(index, label = %label, "Manual quality selected");

        view.quality_selection_changed(&self.catalog, &self.selection_marker());
    }

    /// The candidate the current manual selection points at, if any
    pub fn selected_candidate(&self) -> Option<&QualityCandidate> {
        match self.state {
            SelectionState::Automatic => None,
            SelectionState::Manual(index) => self.catalog.get(index),
        }
    }
}
