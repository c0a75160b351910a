//! Playback engine control surface
//!
//! The decoding/rendering engine is an external collaborator. This crate
//! consumes it through a narrow command-and-notification interface: the
//! binder owns the engine and drives it; the engine's asynchronous
//! playback-state callbacks are expected to be delivered already marshalled
//! onto the thread that owns the binder.

use serde::{Deserialize, Serialize};

use crate::topology::{OverrideToken, TrackKind, TrackTopologySnapshot};

/// Engine-reported playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No content prepared
    Idle,
    /// Filling buffers before (or during) playback
    Buffering,
    /// Enough is buffered to play
    Ready,
    /// Playback reached the end of the stream
    Ended,
    /// Terminal engine failure; recovery belongs to the engine collaborator
    Error,
}

impl PlaybackState {
    /// The display must stay awake exactly while buffering or ready
    pub fn keeps_display_awake(&self) -> bool {
        matches!(self, PlaybackState::Buffering | PlaybackState::Ready)
    }

    /// Terminal states are surfaced to the UI as-is
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlaybackState::Ended | PlaybackState::Error)
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackState::Idle => write!(f, "idle"),
            PlaybackState::Buffering => write!(f, "buffering"),
            PlaybackState::Ready => write!(f, "ready"),
            PlaybackState::Ended => write!(f, "ended"),
            PlaybackState::Error => write!(f, "error"),
        }
    }
}

/// Playback control commands consumed from the engine collaborator
///
/// Commands are fire-and-forget: the engine reports consequences through
/// its playback-state notifications, not through return values.
pub trait PlaybackEngine {
    /// Current renderer/track topology, captured at this instant
    fn topology_snapshot(&self) -> TrackTopologySnapshot;

    /// Drop every track override of the given kind
    fn clear_override(&mut self, kind: TrackKind);

    /// Force the track the token identifies, superseding adaptive selection
    fn apply_override(&mut self, token: OverrideToken);

    fn play(&mut self);

    /// Stop is resumable; it does not release engine resources
    fn stop(&mut self);

    /// Release all engine resources; the engine is unusable afterwards
    fn release(&mut self);
}
