//! Field projection: one snapshot becomes a fixed, ordered row of cards.

use crate::format::{currency, number, percent, text};
use crate::snapshot::MetricsSnapshot;

pub const FALLBACK_TEXT: &str = "No data yet. Run the metrics workflow.";

/// One rendered unit: a label above a formatted value.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub label: &'static str,
    pub value: String,
}

/// The ten dashboard rows, in display order. The order is a presentation
/// invariant: it never depends on which fields are present.
pub fn project(s: &MetricsSnapshot) -> Vec<Card> {
    let row = |label, value| Card { label, value };
    vec![
        row("Repo", text(s.repo.as_deref())),
        row("Stars", number(s.stars)),
        row("Merged PRs (7d)", number(s.merged_prs_week)),
        row("Commit Streak (days)", number(s.commit_streak_days)),
        row("Errors Prevented (30d)", number(s.errors_prevented_month)),
        row("False Positive Rate", percent(s.false_positive_rate)),
        row("MTTR (min)", number(s.mttr_minutes)),
        row("Money Saved (30d)", currency(s.money_saved_usd_month)),
        row("Live Customers", number(s.customers_live)),
        row("Uptime %", percent(s.uptime_pct)),
    ]
}

pub fn card_html(card: &Card) -> String {
    format!(
        "<div class=\"card\"><div class=\"muted\">{}</div><div class=\"value\">{}</div></div>",
        escape(card.label),
        escape(&card.value)
    )
}

/// Markup for the whole grid: the concatenation of every card.
pub fn grid_html(cards: &[Card]) -> String {
    cards.iter().map(card_html).collect()
}

/// The single card shown when no snapshot could be acquired.
pub fn fallback_html() -> String {
    format!("<div class=\"card\">{}</div>", FALLBACK_TEXT)
}

/// Minimal HTML escaping for values interpolated into card markup.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
