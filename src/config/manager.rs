use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::fs::atomic_write;
use crate::paths;
use crate::translation::TranslationPolicy;
use crate::ui::Style;

pub const DEFAULT_BASE_URL: &str = "https://api.ai.it.ufl.edu";
pub const DEFAULT_MODEL: &str = "mistral-7b-instruct";
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Settings in the `[translator]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// The OpenAI-compatible API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Default model name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Default sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Default translation policy key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl TranslatorConfig {
    /// Gets the API key, preferring the named environment variable over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/polytrans/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translator: TranslatorConfig,
}

/// Resolved settings, read once at startup and passed to the client factory.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The API base URL; requests go to `{base_url}/chat/completions`.
    pub base_url: String,
    /// The bearer credential. There is no default.
    pub api_key: Option<String>,
    /// The model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// How requests are phrased and replies cleaned.
    pub policy: TranslationPolicy,
}

impl Settings {
    /// The API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() <= 4 {
                "*".repeat(chars.len())
            } else {
                let visible: String = chars[chars.len() - 4..].iter().collect();
                format!("{}{visible}", "*".repeat(chars.len() - 4))
            }
        })
    }
}

/// Overrides taken from the command line or the environment.
///
/// These take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    /// Raw temperature text, parsed during resolution.
    pub temperature: Option<String>,
    pub policy: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolves settings by merging overrides, the config file and built-in defaults.
///
/// A missing API key is not an error here: the request itself fails without one.
///
/// # Errors
///
/// Returns an error if the temperature is not a finite number or the policy is unknown.
pub fn resolve_settings(options: &ResolveOptions, config_file: &ConfigFile) -> Result<Settings> {
    let file = &config_file.translator;

    let base_url = non_empty(options.base_url.as_ref())
        .or(file.base_url.as_ref())
        .map_or_else(|| DEFAULT_BASE_URL.to_string(), Clone::clone);

    let model = non_empty(options.model.as_ref())
        .or(file.model.as_ref())
        .map_or_else(|| DEFAULT_MODEL.to_string(), Clone::clone);

    let temperature = match non_empty(options.temperature.as_ref()) {
        Some(raw) => match raw.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => value,
            _ => bail!("Invalid temperature '{raw}': LLM_TEMPERATURE must be a finite number"),
        },
        None => match file.temperature {
            Some(value) if !value.is_finite() => {
                bail!("Invalid temperature '{value}' in config file: must be a finite number")
            }
            value => value.unwrap_or(DEFAULT_TEMPERATURE),
        },
    };

    let policy = match non_empty(options.policy.as_ref()).or(file.policy.as_ref()) {
        Some(key) => TranslationPolicy::resolve(key.trim())?,
        None => TranslationPolicy::default(),
    };

    let api_key = non_empty(options.api_key.as_ref())
        .cloned()
        .or_else(|| file.get_api_key());

    Ok(Settings {
        base_url,
        api_key,
        model,
        temperature,
        policy,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/polytrans/config.toml`
    /// or `~/.config/polytrans/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or malformed one is reported
    /// on stderr before falling back.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|e| {
            crate::warn!("{} {e:#}\nUsing default settings.", Style::warning("Warning:"));
            ConfigFile::default()
        })
    }
}
