use serde::{Deserialize, Serialize};

/// One metrics document as produced by the collection workflow.
///
/// Every field is independently optional: the workflow fills what it can and
/// leaves the rest null, and downstream rendering must treat absence as a
/// normal state. Unknown keys in the document are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsSnapshot {
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub stars: Option<f64>,
    #[serde(default)]
    pub merged_prs_week: Option<f64>,
    #[serde(default)]
    pub commit_streak_days: Option<f64>,
    #[serde(default)]
    pub errors_prevented_month: Option<f64>,
    /// Fraction in [0,1]; rendered as a percentage.
    #[serde(default)]
    pub false_positive_rate: Option<f64>,
    #[serde(default)]
    pub mttr_minutes: Option<f64>,
    /// USD amount; rendered as currency.
    #[serde(default)]
    pub money_saved_usd_month: Option<f64>,
    #[serde(default)]
    pub customers_live: Option<f64>,
    /// Fraction in [0,1]; rendered as a percentage.
    #[serde(default)]
    pub uptime_pct: Option<f64>,
    /// Opaque display string, typically RFC3339 from the collector.
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_absent_are_equivalent() {
        let a: MetricsSnapshot = serde_json::from_str(r#"{"stars": null}"#).unwrap();
        let b: MetricsSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(a, b);
        assert!(a.stars.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let s: MetricsSnapshot =
            serde_json::from_str(r#"{"stars": 42, "forks": 7, "extra": {"x": 1}}"#).unwrap();
        assert_eq!(s.stars, Some(42.0));
    }

    #[test]
    fn full_document_round_trips() {
        let raw = r#"{
            "timestamp": "2024-01-01T00:00:00Z",
            "repo": "your-org/detector",
            "stars": 42,
            "merged_prs_week": 3,
            "commit_streak_days": 12,
            "errors_prevented_month": 900,
            "false_positive_rate": 0.021,
            "mttr_minutes": 18,
            "money_saved_usd_month": 5000,
            "customers_live": 4,
            "uptime_pct": 0.9995
        }"#;
        let s: MetricsSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(s.repo.as_deref(), Some("your-org/detector"));
        assert_eq!(s.false_positive_rate, Some(0.021));
        assert_eq!(s.timestamp.as_deref(), Some("2024-01-01T00:00:00Z"));
    }
}
