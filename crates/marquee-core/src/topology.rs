//! Track topology snapshots
//!
//! Immutable description of the renderer/track-group/track structure the
//! engine reports at one instant. A snapshot is owned by whoever requested
//! it and is superseded by a fresh snapshot, never mutated in place.
//!
//! The three levels (renderer, group, track) expose one uniform traversal
//! capability (`len`, `get`, `iter`), so the catalog builder is a single
//! generic walk independent of engine-specific accessors.

use serde::{Deserialize, Serialize};

/// Media kind a renderer is responsible for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    Video,
    Audio,
    Text,
    Other,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::Video => write!(f, "video"),
            TrackKind::Audio => write!(f, "audio"),
            TrackKind::Text => write!(f, "text"),
            TrackKind::Other => write!(f, "other"),
        }
    }
}

/// Device support level for one concrete track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackSupport {
    /// The device can decode and render this track
    Handled,
    /// The track's format is not supported at all
    Unsupported,
    /// The format is understood but exceeds device capabilities
    ExceedsCapabilities,
}

/// One concrete encoded stream within a track group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackFormat {
    pub width: u32,
    pub height: u32,
    pub support: TrackSupport,
}

impl TrackFormat {
    pub fn new(width: u32, height: u32, support: TrackSupport) -> Self {
        Self { width, height, support }
    }

    /// A track the device fully supports
    pub fn handled(width: u32, height: u32) -> Self {
        Self::new(width, height, TrackSupport::Handled)
    }

    /// True when forcing this track would actually play
    pub fn is_playable(&self) -> bool {
        self.support == TrackSupport::Handled
    }
}

impl std::fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A set of alternative encodings of the same content offered together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackGroup {
    tracks: Vec<TrackFormat>,
}

impl TrackGroup {
    pub fn new(tracks: Vec<TrackFormat>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrackFormat> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackFormat> {
        self.tracks.iter()
    }
}

/// Engine subsystem responsible for one media kind, with the track groups
/// mapped onto it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererDescriptor {
    kind: TrackKind,
    groups: Vec<TrackGroup>,
}

impl RendererDescriptor {
    pub fn new(kind: TrackKind, groups: Vec<TrackGroup>) -> Self {
        Self { kind, groups }
    }

    /// A video renderer with the given track groups
    pub fn video(groups: Vec<TrackGroup>) -> Self {
        Self::new(TrackKind::Video, groups)
    }

    /// A renderer with no selectable video content (audio, text, ...)
    pub fn non_video(kind: TrackKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrackGroup> {
        self.groups.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackGroup> {
        self.groups.iter()
    }

    /// The "supported format" gate: a renderer contributes qualities only
    /// when it is a video renderer with at least one track group
    pub fn offers_video(&self) -> bool {
        self.kind == TrackKind::Video && !self.groups.is_empty()
    }
}

/// Immutable renderer/track-group/track structure at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTopologySnapshot {
    renderers: Vec<RendererDescriptor>,
}

impl TrackTopologySnapshot {
    pub fn new(renderers: Vec<RendererDescriptor>) -> Self {
        Self { renderers }
    }

    /// A snapshot with no renderers at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RendererDescriptor> {
        self.renderers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RendererDescriptor> {
        self.renderers.iter()
    }
}

/// Opaque handle identifying which track to force: the discovery position
/// of one track within one group of one renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverrideToken {
    renderer: usize,
    group: usize,
    track: usize,
}

impl OverrideToken {
    pub fn new(renderer: usize, group: usize, track: usize) -> Self {
        Self { renderer, group, track }
    }

    pub fn renderer_index(&self) -> usize {
        self.renderer
    }

    pub fn group_index(&self) -> usize {
        self.group
    }

    pub fn track_index(&self) -> usize {
        self.track
    }
}
