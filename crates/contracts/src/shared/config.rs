use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

macro_rules! default_base_url {
    () => {
        "https://api.escuelajs.co/api/v1"
    };
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = concat!("\n[api]\nbase_url = \"", default_base_url!(), "\"\n");

/// Parse a configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.api.base_url = normalize_base_url(&config.api.base_url);
    if config.api.base_url.is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    Ok(config)
}

/// Load the embedded default configuration
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

/// Strip surrounding whitespace and trailing slashes
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl ApiConfig {
    /// Replace the base URL with a non-blank override
    pub fn with_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(normalize_base_url).filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: normalize_base_url(default_base_url!()),
        }
    }
}
