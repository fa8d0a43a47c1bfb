use lazy_static::lazy_static;
use std::env;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use eyre::Result;
use eyre::WrapErr;
use log::{debug, warn};

use crate::convert::NumberBase;
use crate::functions::parse_boolish;
use crate::output::OutputFormat;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Number system selected when none is given on the command line
    pub default_base: NumberBase,
    pub output: OutputFormat,
    pub color: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_base: NumberBase::Decimal,
            output: OutputFormat::Table,
            color: true,
        }
    }
}

impl GlobalConfig {

    // Path to the config file
    pub fn path() -> PathBuf {
        let default_filename = "radix-tools.toml";
        let filename = match env::current_exe() {
            Ok(path) => path.file_stem()
                .map(|name| format!("{}.toml", name.to_string_lossy()))
                .unwrap_or_else(|| default_filename.to_string()),
            Err(e) => {
                warn!("Failed to get the current executable path: {}", e);
                default_filename.to_string()
            },
        };
        CONFIG_DIR.join(filename)
    }

    /// Creates a new `GlobalConfig` with default values, identical to `default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the config file at `path`, without environment overrides.
    /// A missing file yields the defaults; an unreadable one is reported.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let config_str = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file at {:?}", path))?;
        toml::from_str(&config_str).wrap_err("Failed to parse config TOML")
    }

    /// Loads the file-backed configuration, falling back to defaults on error.
    pub fn load_file() -> Self {
        let config_path = Self::path();
        Self::load_from(&config_path).unwrap_or_else(|err| {
            warn!("Error loading config: {:?}. Using defaults.", err);
            Self::default()
        })
    }

    // Load configuration from the TOML file and override with environment variables
    pub fn load() -> Self {
        let mut config = Self::load_file();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Applies `RADIX_DEFAULT_BASE`, `RADIX_OUTPUT` and `RADIX_COLOR` overrides.
    /// Unparseable values are ignored with a warning.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("RADIX_DEFAULT_BASE") {
            match val.parse() {
                Ok(base) => self.default_base = base,
                Err(e) => warn!("Ignoring RADIX_DEFAULT_BASE: {}", e),
            }
        }
        if let Some(val) = var("RADIX_OUTPUT") {
            match val.parse() {
                Ok(format) => self.output = format,
                Err(e) => warn!("Ignoring RADIX_OUTPUT: {}", e),
            }
        }
        if let Some(val) = var("RADIX_COLOR") {
            match parse_boolish(&val) {
                Ok(color) => self.color = color,
                Err(e) => warn!("Ignoring RADIX_COLOR: {}", e),
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("Failed to create config directory {:?}", dir))?;
        }
        let toml_str = toml::to_string(self)
            .wrap_err("Failed to serialize config to TOML")?;
        fs::write(path, toml_str)
            .wrap_err_with(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }

    // Save the current configuration to the TOML file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).wrap_err("Failed to serialize config to TOML")
    }
}

// Immutable global configuration
lazy_static! {
    pub static ref CONFIG: GlobalConfig = GlobalConfig::load();

    pub static ref CONFIG_DIR: PathBuf = {
        // Check for environment variable
        if let Ok(env_dir) = env::var("RADIX_TOOLS_DIR") {
            PathBuf::from(env_dir)
        } else {
            // Default to $HOME/.radix-tools if not set
            match home::home_dir() {
                Some(home_dir) => home_dir.join(".radix-tools"),
                None => {
                    warn!("HOME directory could not be determined. Using current directory as fallback.");
                    PathBuf::from(".radix-tools")
                }
            }
        }
    };
}
