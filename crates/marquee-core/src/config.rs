//! Player configuration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::RankMetric;
use crate::error::{Error, Result};

/// Schemes the streaming source factory knows how to open
const SUPPORTED_SCHEMES: &[&str] = &["ws", "wss", "http", "https"];

/// Configuration for one playback session
///
/// The source fields are opaque to this crate; they are forwarded to the
/// external source factory that prepares the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Stream URI handed to the source factory
    pub source: Url,
    /// Accept any TLS certificate the source presents
    pub trust_all_certs: bool,
    /// Begin playback as soon as the engine has prepared the source
    pub play_when_ready: bool,
    /// Resolution dimension used to rank the quality catalog
    pub rank_metric: RankMetric,
}

impl PlayerConfig {
    /// Configuration for the given stream URI with default behavior:
    /// certificate validation on, playback starting as soon as prepared,
    /// qualities ranked by height
    pub fn for_source(uri: &str) -> Result<Self> {
        let source = Url::parse(uri)?;

        if !SUPPORTED_SCHEMES.contains(&source.scheme()) {
            return Err(Error::UnsupportedScheme(source.scheme().to_string()));
        }

        Ok(Self {
            source,
            trust_all_certs: false,
            play_when_ready: true,
            rank_metric: RankMetric::default(),
        })
    }

    /// Disable certificate validation on the source connection
    pub fn with_trust_all_certs(mut self, trust_all_certs: bool) -> Self {
        self.trust_all_certs = trust_all_certs;
        self
    }

    pub fn with_play_when_ready(mut self, play_when_ready: bool) -> Self {
        self.play_when_ready = play_when_ready;
        self
    }

    pub fn with_rank_metric(mut self, rank_metric: RankMetric) -> Self {
        self.rank_metric = rank_metric;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_websocket_source_accepted() {
        let config = PlayerConfig::for_source("wss://demo.example.com/live/stream").unwrap();

        assert_eq!(config.source.scheme(), "wss");
        assert!(!config.trust_all_certs);
        assert!(config.play_when_ready);
        assert_eq!(config.rank_metric, RankMetric::Height);
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        let err = PlayerConfig::for_source("ftp://example.com/stream").unwrap_err();
        assert!(matches!(err, Error::UnsupportedScheme(scheme) if scheme == "ftp"));
    }

    #[test]
    fn test_unparseable_uri_rejected() {
        let err = PlayerConfig::for_source("not a uri").unwrap_err();
        assert!(matches!(err, Error::InvalidSourceUri(_)));
        assert_eq!(err.error_code(), "INVALID_SOURCE_URI");
    }

    #[test]
    fn test_builder_setters() {
        let config = PlayerConfig::for_source("wss://demo.example.com/live/stream")
            .unwrap()
            .with_trust_all_certs(true)
            .with_play_when_ready(false)
            .with_rank_metric(RankMetric::Width);

        assert!(config.trust_all_certs);
        assert!(!config.play_when_ready);
        assert_eq!(config.rank_metric, RankMetric::Width);
    }
}
