//! Snapshot acquisition.
//!
//! One fetch per render, no caching and no retries. Every failure mode
//! funnels into the same fallback render; the error is tagged anyway so the
//! two render paths stay exhaustive and the log line can name the cause.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Config;
use crate::snapshot::MetricsSnapshot;

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

/// Well-known location of the metrics document relative to the site root.
pub const DATA_RESOURCE: &str = "data/metrics.json";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected http status {0}")]
    Status(u16),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed metrics document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SourceError {
    /// Short tag for structured logs.
    pub fn cause(&self) -> &'static str {
        match self {
            SourceError::Http(_) => "http",
            SourceError::Status(_) => "status",
            SourceError::Io { .. } => "io",
            SourceError::Parse(_) => "parse",
        }
    }
}

#[async_trait]
pub trait Source {
    async fn load(&self) -> Result<MetricsSnapshot, SourceError>;
}

/// Picks the acquisition backend: HTTP when a site base URL is configured,
/// otherwise the local data file next to the page being rendered.
pub fn build(cfg: &Config) -> anyhow::Result<Box<dyn Source + Send + Sync>> {
    match &cfg.data_url {
        Some(base) => Ok(Box::new(HttpSource::new(base)?)),
        None => Ok(Box::new(FileSource::new(&cfg.data_path))),
    }
}
