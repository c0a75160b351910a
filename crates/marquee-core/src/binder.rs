//! Lifecycle-bound playback
//!
//! `LifecycleBinder` ties one playback session to one host lifecycle
//! subscription. It owns the engine for the binding's whole lifetime,
//! drives play/stop and chrome visibility from lifecycle transitions,
//! reacts to engine playback-state notifications (keep-awake flag,
//! catalog rebuilds, menu dismissal), and guarantees the engine is
//! released exactly once, on explicit teardown or, failing that, on
//! drop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::QualityCatalogBuilder;
use crate::config::PlayerConfig;
use crate::engine::{PlaybackEngine, PlaybackState};
use crate::host::{HostWindow, LifecycleEvent};
use crate::selection::SelectionController;
use crate::view::PlayerView;

/// Unique identifier for one playback binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingId(pub Uuid);

impl BindingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BindingId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BindingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the host currently is in its lifecycle
///
/// Assumed `Background` until the first `Start` arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecyclePhase {
    #[default]
    Background,
    Foreground,
}

/// Binds engine playback and chrome visibility to host lifecycle events
///
/// The engine is exclusively owned here; the selection controller only
/// ever borrows it per command. After [`teardown`](Self::teardown) the
/// binder turns inert: every lifecycle event, playback notification, and
/// UI intent is ignored.
pub struct LifecycleBinder {
    id: BindingId,
    engine: Option<Box<dyn PlaybackEngine>>,
    window: Option<Box<dyn HostWindow>>,
    view: Box<dyn PlayerView>,
    builder: QualityCatalogBuilder,
    selection: SelectionController,
    phase: LifecyclePhase,
    keep_awake: bool,
    menu_open: bool,
}

impl LifecycleBinder {
    /// Acquire the engine and the (best-effort) host window as one scoped
    /// resource
    ///
    /// A missing window disables chrome control only; playback control is
    /// unaffected.
    pub fn bind(
        engine: Box<dyn PlaybackEngine>,
        window: Option<Box<dyn HostWindow>>,
        view: Box<dyn PlayerView>,
        config: &PlayerConfig,
    ) -> Self {
        let id = BindingId::new();

        if window.is_none() {
            debug!(binding = %id, "No host window resolved, chrome control disabled");
        }

        info!(
            binding = %id,
            source = %config.source,
            chrome = window.is_some(),
            "Playback binding created"
        );

        Self {
            id,
            engine: Some(engine),
            window,
            view,
            builder: QualityCatalogBuilder::new(config.rank_metric),
            selection: SelectionController::new(),
            phase: LifecyclePhase::Background,
            keep_awake: false,
            menu_open: false,
        }
    }

    pub fn id(&self) -> BindingId {
        self.id
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// True while the engine has not been released
    pub fn is_bound(&self) -> bool {
        self.engine.is_some()
    }

    /// True exactly while playback is buffering or ready
    pub fn keep_awake(&self) -> bool {
        self.keep_awake
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Apply one host lifecycle transition
    ///
    /// `Start` hides chrome and starts playback, `Stop` restores chrome
    /// and stops (resumably); everything else is ignored, as is any event
    /// arriving after teardown.
    pub fn handle_lifecycle_event(&mut self, event: LifecycleEvent) {
        let Some(engine) = self.engine.as_mut() else {
            debug!(binding = %self.id, event = ?event, "Binding torn down, ignoring lifecycle event");
            return;
        };

        match event {
            LifecycleEvent::Start => {
                if let Some(window) = self.window.as_mut() {
                    window.hide_system_chrome();
                }
                engine.play();
                self.phase = LifecyclePhase::Foreground;
                info!(binding = %self.id, "Entered foreground, playback started");
            }
            LifecycleEvent::Stop => {
                if let Some(window) = self.window.as_mut() {
                    window.show_system_chrome();
                }
                engine.stop();
                self.phase = LifecyclePhase::Background;
                info!(binding = %self.id, "Entered background, playback stopped");
            }
            _ => {}
        }
    }

    /// Apply one engine playback-state notification
    ///
    /// Keep-awake tracks buffering/ready and is republished on change
    /// only. A ready notification additionally dismisses the quality menu
    /// and rebuilds the catalog from a fresh topology snapshot, which
    /// resets the selection to automatic.
    pub fn handle_playback_state(&mut self, state: PlaybackState) {
        let Some(engine) = self.engine.as_mut() else {
            debug!(binding = %self.id, state = %state, "Binding torn down, ignoring playback state");
            return;
        };

        let keep_awake = state.keeps_display_awake();
        if keep_awake != self.keep_awake {
            self.keep_awake = keep_awake;
            self.view.keep_awake_changed(keep_awake);
        }

        if state == PlaybackState::Ready {
            if self.menu_open {
                self.menu_open = false;
                self.view.menu_visibility_changed(false);
            }

            let snapshot = engine.topology_snapshot();
            let catalog = self.builder.build(&snapshot);
            self.selection
                .on_catalog_rebuilt(catalog, engine.as_mut(), self.view.as_mut());
        }

        debug!(binding = %self.id, state = %state, keep_awake = self.keep_awake, "Playback state handled");
        self.view.playback_state_changed(state);
    }

    /// UI intent: hand selection back to the adaptive algorithm
    pub fn request_automatic(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        self.selection
            .select_automatic(engine.as_mut(), self.view.as_mut());
        self.dismiss_menu();
    }

    /// UI intent: force the catalog entry at `index`
    ///
    /// Out-of-range indices are ignored by the selection controller; the
    /// menu is dismissed either way.
    pub fn request_manual(&mut self, index: usize) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        self.selection
            .select_manual(index, engine.as_mut(), self.view.as_mut());
        self.dismiss_menu();
    }

    /// UI intent: open or close the quality menu
    ///
    /// Refuses to open while the catalog offers no real choice.
    pub fn toggle_menu(&mut self) {
        if self.engine.is_none() {
            return;
        }
        if !self.menu_open && !self.selection.offers_choice() {
            debug!(binding = %self.id, "Quality menu has no alternatives, ignoring toggle");
            return;
        }
        self.menu_open = !self.menu_open;
        self.view.menu_visibility_changed(self.menu_open);
    }

    fn dismiss_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            self.view.menu_visibility_changed(false);
        }
    }

    /// Release the engine and stop observing the host
    ///
    /// Idempotent: repeated calls (and the implicit call from `Drop`) are
    /// no-ops. The binder goes inert before `release` runs, so an event
    /// racing with teardown can never reach a released engine.
    pub fn teardown(&mut self) {
        let Some(mut engine) = self.engine.take() else {
            return;
        };
        self.window = None;
        engine.release();
        info!(binding = %self.id, "Binding torn down, engine released");
    }
}

impl Drop for LifecycleBinder {
    fn drop(&mut self) {
        self.teardown();
    }
}
