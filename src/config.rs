use std::time::Duration;

use serde::Deserialize;

/// Where the print service lives and how to talk to it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    /// Name of the tunnel-bypass header, sent with value `true`. Empty disables it.
    pub tunnel_header: String,
    pub cache_bust: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub print_delay_ms: u64,
    pub size_decimals: i32,
    pub date_format: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    pub filter: String,
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

// Mirror defaults from config/default.toml. Kept in code so the web UI, which
// cannot read files, gets the same values.
impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            tunnel_header: "ngrok-skip-browser-warning".to_string(),
            cache_bust: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            print_delay_ms: 500,
            size_decimals: 2,
            date_format: crate::format::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "info".to_string(), dir: None }
    }
}

impl BackendConfig {
    /// The tunnel-bypass header as `(name, value)`, if enabled.
    pub fn tunnel_header(&self) -> Option<(&str, &str)> {
        let name = self.tunnel_header.trim();
        (!name.is_empty()).then_some((name, "true"))
    }

    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl UiConfig {
    pub fn print_delay(&self) -> Duration {
        Duration::from_millis(self.print_delay_ms)
    }
}

#[cfg(feature = "native")]
const DEFAULTS: &str = include_str!("../config/default.toml");

/// Loads the configuration: embedded defaults -> printdock.toml -> $PRINTDOCK_CONFIG -> env.
#[cfg(feature = "native")]
pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();
    load_with(std::env::var("PRINTDOCK_CONFIG").ok().as_deref())
}

#[cfg(feature = "native")]
pub fn load_with(custom_path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        // Optional local file: printdock.toml (in CWD)
        .add_source(::config::File::with_name("printdock").required(false));

    if let Some(path) = custom_path {
        builder = builder.add_source(::config::File::with_name(path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("PRINTDOCK").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

#[cfg(feature = "native")]
pub fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    let base = cfg.backend.base_url.trim();
    if base.is_empty() {
        return Err(anyhow::anyhow!("backend.base_url must not be empty"));
    }
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(anyhow::anyhow!("backend.base_url must be an http(s) URL, got {}", base));
    }
    if !(0..=8).contains(&cfg.ui.size_decimals) {
        return Err(anyhow::anyhow!("ui.size_decimals must be in 0..=8"));
    }
    if !crate::format::is_valid_date_format(&cfg.ui.date_format) {
        return Err(anyhow::anyhow!("ui.date_format is not a valid strftime pattern: {}", cfg.ui.date_format));
    }
    Ok(())
}

/// Settings that are valid but probably unintended. Logged by the binary once
/// logging is up.
#[cfg(feature = "native")]
pub fn warnings(cfg: &AppConfig) -> Vec<String> {
    let mut out = Vec::new();
    if cfg.ui.print_delay_ms > 60_000 {
        out.push(format!("ui.print_delay_ms is {} ms, bulk prints will be slow", cfg.ui.print_delay_ms));
    }
    out
}
