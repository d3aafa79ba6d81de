use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::presentation::config::keybindings::KeyBindings;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Environment variables with this prefix override file settings,
/// e.g. `STOREFRONT_API__BASE_URL`.
const ENV_PREFIX: &str = "STOREFRONT";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
pub struct ConnectivityConfig {
    #[serde(default = "default_probe_interval_secs")]
    pub probe_interval_secs: u64,
    #[serde(default = "default_health_path")]
    pub health_path: String,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_interval_secs: default_probe_interval_secs(),
            health_path: default_health_path(),
        }
    }
}

fn default_probe_interval_secs() -> u64 {
    15
}

fn default_health_path() -> String {
    "health".to_string()
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub sort_fields: Vec<String>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            categories: vec![],
            sort_fields: vec![],
        }
    }
}

fn default_columns() -> usize {
    4
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    /// Loads the embedded defaults, then any user config file, then environment overrides
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5))
            .set_default("_data_dir", data_dir.display().to_string())?
            .set_default("_config_dir", config_dir.display().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // User bindings extend the defaults instead of replacing them
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }

        if cfg.listing.columns == 0 {
            return Err(ConfigError::Message(
                "listing.columns must be at least 1".to_string(),
            ));
        }

        Ok(cfg)
    }

    pub fn data_dir(&self) -> PathBuf {
        if self.config._data_dir.as_os_str().is_empty() {
            utils::get_data_dir()
        } else {
            self.config._data_dir.clone()
        }
    }
}
