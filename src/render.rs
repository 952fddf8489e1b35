//! The render pipeline: acquired snapshot in, materialized page out.

use anyhow::{Context, Result};

use crate::cards::{fallback_html, grid_html, project};
use crate::config::Config;
use crate::format::text;
use crate::logging::{json_log, log, obj, v_num, v_str, Level};
use crate::page::{Page, PageError};
use crate::snapshot::MetricsSnapshot;
use crate::source::{self, SourceError};

/// The two terminal render states. There is no loading state and no retry:
/// one pass through the pipeline ends in exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered {
    Success,
    Fallback,
}

/// Materializes one acquisition outcome into the page.
///
/// Success replaces the grid with the ten cards and rewrites the status line
/// as `Updated: <timestamp>`. Any acquisition failure collapses into the
/// single fallback card, and the status element is deliberately left as it
/// was (matching the long-standing behavior of the dashboard).
pub fn render_dashboard(
    outcome: Result<MetricsSnapshot, SourceError>,
    page: &mut Page,
) -> Result<Rendered, PageError> {
    match outcome {
        Ok(snap) => {
            let cards = project(&snap);
            page.set_grid(&grid_html(&cards))?;
            let line = format!("Updated: {}", text(snap.timestamp.as_deref()));
            if !page.set_status(&line)? {
                log(
                    Level::Warn,
                    "render",
                    obj(&[("warning", v_str("no_status_element"))]),
                );
            }
            Ok(Rendered::Success)
        }
        Err(err) => {
            page.set_grid(&fallback_html())?;
            log(
                Level::Warn,
                "render",
                obj(&[
                    ("outcome", v_str("fallback")),
                    ("cause", v_str(err.cause())),
                    ("error", v_str(&err.to_string())),
                ]),
            );
            Ok(Rendered::Fallback)
        }
    }
}

/// The argument-free entry flow: load the page, acquire the snapshot once,
/// render, write the page back.
pub async fn run(cfg: &Config) -> Result<Rendered> {
    let raw = std::fs::read_to_string(&cfg.page_path)
        .with_context(|| format!("cannot read page {}", cfg.page_path))?;
    let mut page = Page::parse(raw).context("page violates the dashboard contract")?;

    let src = source::build(cfg)?;
    let outcome = src.load().await;
    if let Ok(snap) = &outcome {
        json_log(
            "source",
            obj(&[
                ("status", v_str("loaded")),
                ("stars", v_num(snap.stars.unwrap_or(-1.0))),
            ]),
        );
    }

    let rendered = render_dashboard(outcome, &mut page)?;
    std::fs::write(&cfg.page_path, page.html())
        .with_context(|| format!("cannot write page {}", cfg.page_path))?;
    json_log(
        "render",
        obj(&[
            ("page", v_str(&cfg.page_path)),
            (
                "outcome",
                v_str(match rendered {
                    Rendered::Success => "success",
                    Rendered::Fallback => "fallback",
                }),
            ),
        ]),
    );
    Ok(rendered)
}
