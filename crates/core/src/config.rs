use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `AD_BUILDER__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Milliseconds the autosave indicator waits before flipping
    /// from "saving" to "saved".
    #[serde(default = "default_autosave_settle_ms")]
    pub autosave_settle_ms: u64,
    /// Music track preselected on a fresh draft.
    #[serde(default = "default_music_track")]
    pub default_music_track: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_autosave_settle_ms() -> u64 {
    1000
}
fn default_music_track() -> String {
    "uplifting-keys".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            autosave_settle_ms: default_autosave_settle_ms(),
            default_music_track: default_music_track(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            wizard: WizardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("AD_BUILDER")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
