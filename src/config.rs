use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use clap::Parser;
use std::fs;
use tracing::{info, warn};

/// Image stored for every newly registered point until uploads are supported
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1542838132-92c53300491e?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=crop&w=400&q=60";

/// Port the server listens on unless configured otherwise
pub const DEFAULT_PORT: u16 = 3333;

/// Configuration for the Ecoleta server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// URL for the database connection
    pub database_url: String,
    /// Port to listen on
    pub port: u16,
    /// Base URL clients reach the server at, used to build item image URLs
    pub public_url: String,
    /// Image URL stored for newly created points
    pub placeholder_image: String,
    /// Directory for rotated log files; stdout only when unset
    pub log_dir: Option<String>,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default)]
    pub placeholder_image: Option<String>,
    #[serde(default)]
    pub log_dir: Option<String>,
    /// Server URL for the CLI client; ignored by the server
    #[serde(default)]
    pub server_url: Option<String>,
}

/// The subset of the configuration request handlers need
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL used to build item image URLs
    pub public_url: String,
    /// Image URL stored for newly created points
    pub placeholder_image: String,
}

/// Command line arguments for the server
#[derive(Parser, Debug)]
#[clap(name = "ecoleta", about = "Registry of recycling collection points")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Port to listen on
    #[clap(long, env = "PORT")]
    pub port: Option<u16>,

    /// Public base URL of the server
    #[clap(long, env = "ECOLETA_PUBLIC_URL")]
    pub public_url: Option<String>,

    /// Image URL stored for new points
    #[clap(long, env = "ECOLETA_PLACEHOLDER_IMAGE")]
    pub placeholder_image: Option<String>,

    /// Directory for log files
    #[clap(long, env = "ECOLETA_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Debug mode
    #[clap(long, env = "ECOLETA_DEBUG", default_value_t = false)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            port: update.port.unwrap_or(self.port),
            public_url: update.public_url.unwrap_or(self.public_url),
            placeholder_image: update.placeholder_image.unwrap_or(self.placeholder_image),
            log_dir: update.log_dir.or(self.log_dir),
        }
    }

    /// Returns the settings shared with request handlers
    pub fn settings(&self) -> Settings {
        Settings {
            public_url: self.public_url.clone(),
            placeholder_image: self.placeholder_image.clone(),
        }
    }
}

/// Returns the base (default) configuration
///
/// With a config directory the database lives next to the config file,
/// otherwise in the working directory.
pub fn base_config(config_path: Option<PathBuf>) -> Config {
    let database_url = config_path.map_or("ecoleta.db".to_string(), |path| path.join("ecoleta.db").to_string_lossy().to_string());

    Config {
        database_url,
        port: DEFAULT_PORT,
        public_url: format!("http://localhost:{}", DEFAULT_PORT),
        placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        log_dir: None,
    }
}

/// Loads configuration from a TOML file
///
/// A missing path or missing file is not an error and yields an empty update.
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate, String> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    match fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<ConfigUpdate>(&content) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", config_path);
                Ok(config)
            },
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                Err(format!("Failed to parse config file: {}", e))
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            Err(format!("Failed to read config file: {}", e))
        }
    }
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: &CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url.clone(),
        port: args.port,
        public_url: args.public_url.clone(),
        placeholder_image: args.placeholder_image.clone(),
        log_dir: args.log_dir.clone(),
        server_url: None,
    }
}

/// Returns the platform config directory, if it exists
pub fn get_config_dir_path() -> Option<PathBuf> {
    let Some(proj_dirs) = ProjectDirs::from("org", "ecoleta", "ecoleta") else {
        warn!("Could not determine XDG config directory, skipping config file");
        return None;
    };

    let path = proj_dirs.config_dir().to_path_buf();
    if !path.exists() {
        info!("Config path not found at {:?}, using defaults", path);
        return None;
    }

    Some(path)
}

/// Gets the complete configuration by combining defaults with
/// values from config file, environment variables, and command line arguments
/// in order of increasing precedence
pub fn get_config(args: &CliArgs) -> Config {
    let config_dir = get_config_dir_path();

    let base = base_config(config_dir.clone());
    let file_update = config_from_file(config_dir.map(|dir| dir.join("config.toml")))
        .unwrap_or_default();

    let config = base
        .apply_update(file_update)
        .apply_update(config_from_args(args));

    info!("Final configuration: database_url={}, port={}, public_url={}",
          config.database_url, config.port, config.public_url);

    config
}
