use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{Source, SourceError, DATA_RESOURCE};
use crate::snapshot::MetricsSnapshot;

/// Fetches the metrics document from a site over HTTP, the way the browser
/// renderer would: one GET of `data/metrics.json` relative to the site root.
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        // Treat the base as a directory so the join stays relative.
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base)?.join(DATA_RESOURCE)?;
        Ok(Self {
            client: Client::new(),
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Source for HttpSource {
    async fn load(&self) -> Result<MetricsSnapshot, SourceError> {
        let resp = self.client.get(self.url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_the_well_known_resource() {
        let s = HttpSource::new("https://example.org/dash").unwrap();
        assert_eq!(s.url().as_str(), "https://example.org/dash/data/metrics.json");
        let s = HttpSource::new("https://example.org/dash/").unwrap();
        assert_eq!(s.url().as_str(), "https://example.org/dash/data/metrics.json");
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(HttpSource::new("not a url").is_err());
    }
}
