#[derive(Clone, Debug)]
pub struct Config {
    /// GitHub repo slug the collector reports on, "owner/name".
    pub repo: String,
    pub gh_token: Option<String>,
    pub gh_api_base: String,
    /// Directory holding the static site (page template plus data file).
    pub site_dir: String,
    pub page_path: String,
    pub data_path: String,
    /// When set, the renderer fetches `data/metrics.json` relative to this
    /// URL instead of reading the local data file.
    pub data_url: Option<String>,
    // Business KPI overrides; the collector writes null when unset and the
    // downstream pipeline fills them in.
    pub errors_prevented_month: Option<f64>,
    pub false_positive_rate: Option<f64>,
    pub mttr_minutes: Option<f64>,
    pub money_saved_usd_month: Option<f64>,
    pub customers_live: Option<f64>,
    pub uptime_pct: Option<f64>,
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Config {
    pub fn from_env() -> Self {
        let site_dir = std::env::var("SITE_DIR").unwrap_or_else(|_| "site".to_string());
        Self {
            repo: std::env::var("REPO")
                .unwrap_or_else(|_| "your-org/hallucination-detector".to_string()),
            gh_token: std::env::var("GH_TOKEN").ok(),
            gh_api_base: std::env::var("GH_API_BASE")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            page_path: std::env::var("PAGE_PATH")
                .unwrap_or_else(|_| format!("{}/index.html", site_dir)),
            data_path: std::env::var("DATA_PATH")
                .unwrap_or_else(|_| format!("{}/data/metrics.json", site_dir)),
            data_url: std::env::var("DATA_URL").ok(),
            errors_prevented_month: env_f64("ERRORS_PREVENTED_MONTH"),
            false_positive_rate: env_f64("FALSE_POSITIVE_RATE"),
            mttr_minutes: env_f64("MTTR_MINUTES"),
            money_saved_usd_month: env_f64("MONEY_SAVED_USD_MONTH"),
            customers_live: env_f64("CUSTOMERS_LIVE"),
            uptime_pct: env_f64("UPTIME_PCT"),
            site_dir,
        }
    }
}
