use std::env;
use std::str::FromStr;

use log::warn;

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub api_base_url: String,
    pub photo_base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub bootstrap_ttl_secs: i64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://fantasy.premierleague.com/api".to_string(),
            photo_base_url: "https://resources.premierleague.com/premierleague/photos/players/110x140"
                .to_string(),
            // The provider rejects non-browser clients with 403
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            timeout_secs: 10,
            bootstrap_ttl_secs: 300,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Base URL the photo references in responses point at
    pub public_base_url: String,
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:5000".to_string(),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5000".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub fdr_lookahead_weeks: usize,
    pub health_fixture_count: usize,
    pub detailed_fixture_count: usize,
    pub top_per_position: usize,
    pub max_swaps_per_position: usize,
    pub replacements_per_swap: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            fdr_lookahead_weeks: 3,
            health_fixture_count: 3,
            detailed_fixture_count: 5,
            top_per_position: 5,
            max_swaps_per_position: 5,
            replacements_per_swap: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub provider: ProviderSettings,
    pub server: ServerSettings,
    pub scoring: ScoringSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by whatever is set in the environment (and `.env`)
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(url) = env::var("FPL_API_BASE_URL") {
            config.provider.api_base_url = trim_base(&url);
        }
        if let Ok(url) = env::var("FPL_PHOTO_BASE_URL") {
            config.provider.photo_base_url = trim_base(&url);
        }
        if let Some(ttl) = parse_var("FPL_BOOTSTRAP_TTL_SECS") {
            config.provider.bootstrap_ttl_secs = ttl;
        }
        if let Some(timeout) = parse_var("FPL_TIMEOUT_SECS") {
            config.provider.timeout_secs = timeout;
        }
        if let Ok(url) = env::var("PUBLIC_BASE_URL") {
            config.server.public_base_url = trim_base(&url);
        }
        if let Ok(origins) = env::var("CORS_ORIGINS") {
            config.server.cors_origins = parse_origins(&origins);
        }

        config
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.provider.api_base_url = trim_base(url);
        self
    }

    pub fn with_photo_base_url(mut self, url: &str) -> Self {
        self.provider.photo_base_url = trim_base(url);
        self
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: '{}' is not a valid value", name, raw);
            None
        }
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
