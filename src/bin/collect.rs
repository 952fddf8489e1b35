//! Metrics collection workflow: query GitHub, write `site/data/metrics.json`.

use std::path::Path;

use anyhow::{Context, Result};

use pulseboard::config::Config;
use pulseboard::github::GitHub;
use pulseboard::logging::{json_log, obj, v_num, v_str};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let gh = GitHub::new(&cfg)?;
    json_log(
        "collect",
        obj(&[
            ("repo", v_str(&cfg.repo)),
            ("auth", v_str(if cfg.gh_token.is_some() { "token" } else { "anonymous" })),
        ]),
    );

    let snapshot = gh.collect(&cfg).await?;
    if let Some(parent) = Path::new(&cfg.data_path).parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    let body = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(&cfg.data_path, body)
        .with_context(|| format!("cannot write {}", cfg.data_path))?;

    json_log(
        "collect",
        obj(&[
            ("status", v_str("written")),
            ("path", v_str(&cfg.data_path)),
            ("stars", v_num(snapshot.stars.unwrap_or(-1.0))),
        ]),
    );
    Ok(())
}
