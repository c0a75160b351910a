//! Marquee Core - Playback Front-End Library
//!
//! This crate provides the core logic of a streaming-video playback
//! front-end:
//! - Quality catalog derivation from renderer-reported track topology
//! - Selection state management and engine override commands
//! - Lifecycle-bound playback control, chrome visibility, and
//!   exactly-once engine release
//!
//! The media engine, host window, and UI layer are external collaborators
//! consumed through the [`PlaybackEngine`], [`HostWindow`], and
//! [`PlayerView`] traits.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Marquee Core                         │
//! ├────────────────────────────────────────────────────────────┤
//! │                                                            │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐    │
//! │  │   Topology   │──▶│   Catalog    │──▶│  Selection   │    │
//! │  │   Snapshot   │   │   Builder    │   │  Controller  │    │
//! │  └──────────────┘   └──────────────┘   └──────┬───────┘    │
//! │         ▲                                     │            │
//! │         │            ┌──────────────┐         │            │
//! │         └────────────│  Lifecycle   │◀────────┘            │
//! │                      │    Binder    │                      │
//! │                      └──────┬───────┘                      │
//! │                             │                              │
//! │        ┌────────────┬───────┴──────┬────────────┐          │
//! │        ▼            ▼              ▼            ▼          │
//! │   PlaybackEngine  HostWindow   PlayerView   PlayerConfig   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state lives on one logical UI thread: events arrive pre-marshalled
//! and are processed in FIFO order, so a catalog rebuild is always fully
//! applied before the next selection intent.

pub mod binder;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod selection;
pub mod topology;
pub mod view;

pub use binder::{BindingId, LifecycleBinder, LifecyclePhase};
pub use catalog::{QualityCandidate, QualityCatalog, QualityCatalogBuilder, RankMetric};
pub use config::PlayerConfig;
pub use engine::{PlaybackEngine, PlaybackState};
pub use error::{Error, Result};
pub use host::{HostWindow, LifecycleEvent};
pub use selection::{SelectionController, SelectionState};
pub use topology::{
    OverrideToken, RendererDescriptor, TrackFormat, TrackGroup, TrackKind, TrackSupport,
    TrackTopologySnapshot,
};
pub use view::PlayerView;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the front-end library with default configuration
pub fn init() {
    tracing::info!(version = VERSION, "Marquee Core initialized");
}
