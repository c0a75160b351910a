//! UI-rendering collaborator surface

use crate::catalog::QualityCatalog;
use crate::engine::PlaybackState;

/// Notifications pushed to the UI layer
///
/// The catalog and marker passed to [`quality_selection_changed`] are
/// read-only projections; the UI renders them without re-deriving any
/// selection logic. Marker position 0 is automatic mode, position `i + 1`
/// is the catalog entry at index `i`.
///
/// [`quality_selection_changed`]: PlayerView::quality_selection_changed
pub trait PlayerView {
    /// The catalog was rebuilt or the active selection moved
    fn quality_selection_changed(&mut self, catalog: &QualityCatalog, marker: &[bool]);

    /// The keep-display-awake flag flipped
    fn keep_awake_changed(&mut self, keep_awake: bool);

    /// The quality menu opened or closed
    fn menu_visibility_changed(&mut self, open: bool);

    /// Raw engine state, surfaced opaquely (terminal states included)
    fn playback_state_changed(&mut self, state: PlaybackState) {
        let _ = state;
    }
}
