//! GitHub metrics collection: the workflow that produces `metrics.json`.

use std::collections::HashSet;

use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::snapshot::MetricsSnapshot;

pub struct GitHub {
    client: Client,
    base: String,
    repo: String,
    token: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RepoInfo {
    stargazers_count: u64,
}

#[derive(Deserialize, Debug)]
struct SearchResult {
    total_count: u64,
}

#[derive(Deserialize, Debug)]
struct CommitEntry {
    commit: CommitMeta,
}

#[derive(Deserialize, Debug)]
struct CommitMeta {
    author: Option<CommitAuthor>,
}

#[derive(Deserialize, Debug)]
struct CommitAuthor {
    date: String,
}

impl GitHub {
    pub fn new(cfg: &Config) -> Result<Self> {
        // GitHub rejects requests without a User-Agent.
        let client = Client::builder().user_agent("pulseboard-metrics").build()?;
        Ok(Self {
            client,
            base: cfg.gh_api_base.clone(),
            repo: cfg.repo.clone(),
            token: cfg.gh_token.clone(),
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let req = self.client.get(format!("{}{}", self.base, path));
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    pub async fn stars(&self) -> Result<u64> {
        let info: RepoInfo = self
            .get(&format!("/repos/{}", self.repo))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(info.stargazers_count)
    }

    pub async fn merged_prs_week(&self) -> Result<u64> {
        let since = (Utc::now().date_naive() - Duration::days(7)).format("%Y-%m-%d");
        let q = format!("repo:{} is:pr is:merged merged:>={}", self.repo, since);
        let found: SearchResult = self
            .get("/search/issues")
            .query(&[("q", q.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(found.total_count)
    }

    /// Consecutive days with at least one commit, counted back from today.
    /// A proxy built from the most recent 100 commits.
    pub async fn commit_streak_days(&self) -> Result<u64> {
        let commits: Vec<CommitEntry> = self
            .get(&format!("/repos/{}/commits", self.repo))
            .query(&[("per_page", "100")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let dates = commit_dates(&commits);
        Ok(streak_ending(&dates, Utc::now().date_naive()))
    }

    /// Gathers the repo metrics and assembles the full snapshot. Business
    /// KPIs come from the config when set; otherwise they stay null for the
    /// downstream pipeline.
    pub async fn collect(&self, cfg: &Config) -> Result<MetricsSnapshot> {
        Ok(MetricsSnapshot {
            timestamp: Some(Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
            repo: Some(self.repo.clone()),
            stars: Some(self.stars().await? as f64),
            merged_prs_week: Some(self.merged_prs_week().await? as f64),
            commit_streak_days: Some(self.commit_streak_days().await? as f64),
            errors_prevented_month: cfg.errors_prevented_month,
            false_positive_rate: cfg.false_positive_rate,
            mttr_minutes: cfg.mttr_minutes,
            money_saved_usd_month: cfg.money_saved_usd_month,
            customers_live: cfg.customers_live,
            uptime_pct: cfg.uptime_pct,
        })
    }
}

fn commit_dates(commits: &[CommitEntry]) -> HashSet<NaiveDate> {
    commits
        .iter()
        .filter_map(|c| c.commit.author.as_ref())
        .filter_map(|a| a.date.get(..10))
        .filter_map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .collect()
}

fn streak_ending(dates: &HashSet<NaiveDate>, today: NaiveDate) -> u64 {
    let mut streak = 0;
    let mut day = today;
    while dates.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}
