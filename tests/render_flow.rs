//! End-to-end render flow: site directory in, materialized page out.

use std::fs;
use std::path::Path;

use pulseboard::cards::FALLBACK_TEXT;
use pulseboard::config::Config;
use pulseboard::render::{self, Rendered};

const TEMPLATE: &str = concat!(
    "<!doctype html><html><body>",
    "<header><span id=\"updated\"></span></header>",
    "<div class=\"grid\" id=\"grid\"><div class=\"card\">loading</div></div>",
    "</body></html>"
);

fn site_config(dir: &Path) -> Config {
    let site_dir = dir.display().to_string();
    Config {
        repo: "your-org/hallucination-detector".to_string(),
        gh_token: None,
        gh_api_base: "https://api.github.com".to_string(),
        page_path: format!("{}/index.html", site_dir),
        data_path: format!("{}/data/metrics.json", site_dir),
        data_url: None,
        errors_prevented_month: None,
        false_positive_rate: None,
        mttr_minutes: None,
        money_saved_usd_month: None,
        customers_live: None,
        uptime_pct: None,
        site_dir,
    }
}

fn write_site(dir: &Path, data: Option<&str>) -> Config {
    fs::write(dir.join("index.html"), TEMPLATE).unwrap();
    if let Some(body) = data {
        fs::create_dir_all(dir.join("data")).unwrap();
        fs::write(dir.join("data/metrics.json"), body).unwrap();
    }
    site_config(dir)
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sparse_snapshot_renders_ten_cards() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_site(
        dir.path(),
        Some(
            r#"{"repo":"x","stars":42,"false_positive_rate":0.021,
                "money_saved_usd_month":5000,"timestamp":"2024-01-01"}"#,
        ),
    );

    let rendered = render::run(&cfg).await.unwrap();
    assert_eq!(rendered, Rendered::Success);

    let html = fs::read_to_string(&cfg.page_path).unwrap();
    assert_eq!(html.matches("<div class=\"card\">").count(), 10);
    assert!(html.contains(">42<"));
    assert!(html.contains(">2.1%<"));
    assert!(html.contains(">$5,000<"));
    assert!(html.contains("Updated: 2024-01-01"));
    // Absent fields render the placeholder, never a null literal.
    assert!(html.contains("—"));
    assert!(!html.contains("null"));
    assert!(!html.contains("loading"));
}

#[tokio::test]
async fn rendering_twice_in_place_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_site(dir.path(), Some(r#"{"stars": 7, "timestamp": "t"}"#));

    render::run(&cfg).await.unwrap();
    let first = fs::read_to_string(&cfg.page_path).unwrap();
    render::run(&cfg).await.unwrap();
    let second = fs::read_to_string(&cfg.page_path).unwrap();
    assert_eq!(first, second);
    assert_eq!(second.matches("<div class=\"card\">").count(), 10);
}

// ---------------------------------------------------------------------------
// Fallback path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_data_file_renders_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_site(dir.path(), None);

    let rendered = render::run(&cfg).await.unwrap();
    assert_eq!(rendered, Rendered::Fallback);

    let html = fs::read_to_string(&cfg.page_path).unwrap();
    assert_eq!(html.matches("<div class=\"card\">").count(), 1);
    assert!(html.contains(FALLBACK_TEXT));
    // Status element stays exactly as the template left it.
    assert!(html.contains("<span id=\"updated\"></span>"));
}

#[tokio::test]
async fn malformed_data_renders_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_site(dir.path(), Some("{definitely not json"));

    let rendered = render::run(&cfg).await.unwrap();
    assert_eq!(rendered, Rendered::Fallback);
    let html = fs::read_to_string(&cfg.page_path).unwrap();
    assert!(html.contains(FALLBACK_TEXT));
}

// ---------------------------------------------------------------------------
// Page contract violations are fatal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn page_without_grid_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_site(dir.path(), Some("{}"));
    fs::write(&cfg.page_path, "<html><body>nothing here</body></html>").unwrap();

    assert!(render::run(&cfg).await.is_err());
}

#[tokio::test]
async fn missing_page_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = site_config(dir.path());
    assert!(render::run(&cfg).await.is_err());
}
