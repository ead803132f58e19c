use std::time::Duration;

use reqwest::Url;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL of the folio API. `None` means the built-in demo content
    /// and the simulated engagement backend are used.
    pub api_url: Option<String>,
    /// Public address of the site, used to build share links.
    pub share_base_url: Url,
    /// Simulated latency of the demo comment backend.
    pub comment_latency: Duration,
    /// Simulated latency of the demo catalog load.
    pub load_latency: Duration,
}

impl SiteConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                  |
    /// |----------------------------|--------------------------|
    /// | `FOLIO_API_URL`            | unset (demo mode)        |
    /// | `FOLIO_SHARE_BASE_URL`     | `http://localhost:5173/` |
    /// | `FOLIO_COMMENT_LATENCY_MS` | `1000`                   |
    /// | `FOLIO_LOAD_LATENCY_MS`    | `500`                    |
    ///
    /// # Panics
    ///
    /// Panics if a value is present but malformed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = std::env::var("FOLIO_API_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());

        let share_base_url = std::env::var("FOLIO_SHARE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5173/".into())
            .parse()
            .expect("FOLIO_SHARE_BASE_URL must be an absolute URL");

        Self {
            api_url,
            share_base_url,
            comment_latency: millis_from_env("FOLIO_COMMENT_LATENCY_MS", 1000),
            load_latency: millis_from_env("FOLIO_LOAD_LATENCY_MS", 500),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            share_base_url: Url::parse("http://localhost:5173/")
                .expect("default share base URL is valid"),
            comment_latency: Duration::from_millis(1000),
            load_latency: Duration::from_millis(500),
        }
    }
}

fn millis_from_env(key: &str, default: u64) -> Duration {
    let ms: u64 = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|e| panic!("{key} must be a whole number of milliseconds: {e}"));
    Duration::from_millis(ms)
}
