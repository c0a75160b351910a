//! Quality catalog derivation
//!
//! Turns one track topology snapshot into the ordered list of video
//! qualities a user can force. The walk is pure: the same snapshot always
//! produces the same catalog, and a malformed or empty snapshot simply
//! produces an empty one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::topology::{OverrideToken, TrackFormat, TrackTopologySnapshot};

/// Which resolution dimension orders the catalog
///
/// `Height` is the conventional meaning of "quality" (1080p sorts above
/// 720p regardless of aspect ratio). `Width` preserves the ordering of
/// deployments that ranked by horizontal extent; the two only disagree on
/// mixed landscape/portrait ladders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankMetric {
    #[default]
    Height,
    Width,
}

impl RankMetric {
    /// Rank key for one track; monotone in the chosen dimension
    pub fn rank_of(&self, format: &TrackFormat) -> u32 {
        match self {
            RankMetric::Height => format.height,
            RankMetric::Width => format.width,
        }
    }
}

/// One selectable video quality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCandidate {
    /// Display label, formatted `"{width}x{height}"`
    pub label: String,
    /// Which track to force when this candidate is chosen
    pub token: OverrideToken,
    /// Ordering key; equal-rank candidates keep discovery order
    pub rank: u32,
}

/// Ordered set of selectable qualities, ranked strictly descending
///
/// Rebuilt wholesale on every ready transition, never partially patched.
/// Read-only to the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCatalog {
    candidates: Vec<QualityCandidate>,
}

impl QualityCatalog {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QualityCandidate> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QualityCandidate> {
        self.candidates.iter()
    }

    /// A user cannot choose among fewer than two options; with zero or one
    /// candidates the manual-selection affordance stays hidden
    pub fn offers_choice(&self) -> bool {
        self.candidates.len() > 1
    }
}

/// Builds a [`QualityCatalog`] from a topology snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityCatalogBuilder {
    metric: RankMetric,
}

impl QualityCatalogBuilder {
    pub fn new(metric: RankMetric) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> RankMetric {
        self.metric
    }

    /// Walk the snapshot and rank every playable video track
    ///
    /// Renderers that are not video, or that carry no track groups, are
    /// skipped entirely. Within a video renderer, only tracks whose
    /// support flag is exactly `Handled` are included: unsupported tracks
    /// and tracks exceeding device capability would fail if forced.
    pub fn build(&self, snapshot: &TrackTopologySnapshot) -> QualityCatalog {
        let mut candidates = Vec::new();

        for (renderer_index, renderer) in snapshot.iter().enumerate() {
            if !renderer.offers_video() {
                continue;
            }

            for (group_index, group) in renderer.iter().enumerate() {
                for (track_index, format) in group.iter().enumerate() {
                    if !format.is_playable() {
                        continue;
                    }

                    candidates.push(QualityCandidate {
                        label: format.to_string(),
                        token: OverrideToken::new(renderer_index, group_index, track_index),
                        rank: self.metric.rank_of(format),
                    });
                }
            }
        }

        // Stable sort: equal ranks keep discovery order
        candidates.sort_by(|a, b| b.rank.cmp(&a.rank));

        debug!(
            qualities = candidates.len(),
            metric = ?self.metric,
            "Quality catalog built"
        );

        QualityCatalog { candidates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{RendererDescriptor, TrackGroup, TrackKind, TrackSupport};

    fn video_renderer(tracks: Vec<TrackFormat>) -> RendererDescriptor {
        RendererDescriptor::video(vec![TrackGroup::new(tracks)])
    }

    #[test]
    fn test_catalog_sorted_descending() {
        let snapshot = TrackTopologySnapshot::new(vec![video_renderer(vec![
            TrackFormat::handled(640, 360),
            TrackFormat::handled(1920, 1080),
            TrackFormat::handled(1280, 720),
        ])]);

        let catalog = QualityCatalogBuilder::default().build(&snapshot);

        let ranks: Vec<u32> = catalog.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1080, 720, 360]);
        let labels: Vec<&str> = catalog.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["1920x1080", "1280x720", "640x360"]);
    }

    #[test]
    fn test_equal_ranks_keep_discovery_order() {
        // Two 720-high tracks at different widths, then a lower quality
        let snapshot = TrackTopologySnapshot::new(vec![video_renderer(vec![
            TrackFormat::handled(1280, 720),
            TrackFormat::handled(960, 720),
            TrackFormat::handled(640, 360),
        ])]);

        let catalog = QualityCatalogBuilder::default().build(&snapshot);

        let labels: Vec<&str> = catalog.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["1280x720", "960x720", "640x360"]);
    }

    #[test]
    fn test_unplayable_tracks_excluded() {
        let snapshot = TrackTopologySnapshot::new(vec![video_renderer(vec![
            TrackFormat::handled(1280, 720),
            TrackFormat::new(1920, 1080, TrackSupport::Unsupported),
            TrackFormat::new(3840, 2160, TrackSupport::ExceedsCapabilities),
        ])]);

        let catalog = QualityCatalogBuilder::default().build(&snapshot);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).map(|c| c.label.as_str()), Some("1280x720"));
    }

    #[test]
    fn test_non_video_renderers_skipped() {
        let snapshot = TrackTopologySnapshot::new(vec![
            RendererDescriptor::non_video(TrackKind::Audio),
            RendererDescriptor::new(
                TrackKind::Audio,
                vec![TrackGroup::new(vec![TrackFormat::handled(0, 0)])],
            ),
            video_renderer(vec![TrackFormat::handled(1280, 720)]),
        ]);

        let catalog = QualityCatalogBuilder::default().build(&snapshot);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().token.renderer_index(), 2);
    }

    #[test]
    fn test_video_renderer_without_groups_skipped() {
        let snapshot = TrackTopologySnapshot::new(vec![RendererDescriptor::new(
            TrackKind::Video,
            Vec::new(),
        )]);

        assert!(QualityCatalogBuilder::default().build(&snapshot).is_empty());
    }

    #[test]
    fn test_empty_snapshot_yields_empty_catalog() {
        let catalog = QualityCatalogBuilder::default().build(&TrackTopologySnapshot::empty());
        assert!(catalog.is_empty());
        assert!(!catalog.offers_choice());
    }

    #[test]
    fn test_single_quality_offers_no_choice() {
        let snapshot =
            TrackTopologySnapshot::new(vec![video_renderer(vec![TrackFormat::handled(1280, 720)])]);

        let catalog = QualityCatalogBuilder::default().build(&snapshot);

        assert_eq!(catalog.len(), 1);
        assert!(!catalog.offers_choice());
    }

    #[test]
    fn test_exceeds_capability_only_yields_empty_catalog() {
        let snapshot = TrackTopologySnapshot::new(vec![video_renderer(vec![TrackFormat::new(
            3840,
            2160,
            TrackSupport::ExceedsCapabilities,
        )])]);

        let catalog = QualityCatalogBuilder::default().build(&snapshot);

        assert!(catalog.is_empty());
        assert!(!catalog.offers_choice());
    }

    #[test]
    fn test_width_metric_ranks_by_width() {
        // Portrait source: height metric and width metric disagree
        let snapshot = TrackTopologySnapshot::new(vec![video_renderer(vec![
            TrackFormat::handled(720, 1280),
            TrackFormat::handled(1920, 1080),
        ])]);

        let by_height = QualityCatalogBuilder::new(RankMetric::Height).build(&snapshot);
        assert_eq!(by_height.get(0).map(|c| c.rank), Some(1280));

        let by_width = QualityCatalogBuilder::new(RankMetric::Width).build(&snapshot);
        assert_eq!(by_width.get(0).map(|c| c.rank), Some(1920));
        assert_eq!(by_width.get(0).map(|c| c.label.as_str()), Some("1920x1080"));
    }

    #[test]
    fn test_tokens_record_discovery_position() {
        let snapshot = TrackTopologySnapshot::new(vec![
            RendererDescriptor::non_video(TrackKind::Audio),
            RendererDescriptor::video(vec![
                TrackGroup::new(vec![TrackFormat::handled(640, 360)]),
                TrackGroup::new(vec![
                    TrackFormat::new(1280, 720, TrackSupport::Unsupported),
                    TrackFormat::handled(1920, 1080),
                ]),
            ]),
        ]);

        let catalog = QualityCatalogBuilder::default().build(&snapshot);

        assert_eq!(catalog.len(), 2);
        let top = catalog.get(0).unwrap();
        assert_eq!(top.label, "1920x1080");
        assert_eq!(top.token.renderer_index(), 1);
        assert_eq!(top.token.group_index(), 1);
        assert_eq!(top.token.track_index(), 1);
    }
}
