use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{Source, SourceError};
use crate::snapshot::MetricsSnapshot;

/// Reads the metrics document straight off disk. This is the generator's
/// default: the snapshot sits next to the page it is rendered into.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl Source for FileSource {
    async fn load(&self) -> Result<MetricsSnapshot, SourceError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_a_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, r#"{{"stars": 42, "timestamp": "2024-01-01"}}"#).unwrap();

        let snap = FileSource::new(&path).load().await.unwrap();
        assert_eq!(snap.stars, Some(42.0));
        assert_eq!(snap.timestamp.as_deref(), Some("2024-01-01"));
    }

    #[tokio::test]
    async fn missing_file_tags_io() {
        let err = FileSource::new("/nonexistent/metrics.json")
            .load()
            .await
            .unwrap_err();
        assert_eq!(err.cause(), "io");
    }

    #[tokio::test]
    async fn malformed_json_tags_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FileSource::new(&path).load().await.unwrap_err();
        assert_eq!(err.cause(), "parse");
    }
}
