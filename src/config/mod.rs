mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    ResolveOptions, Settings, TranslatorConfig, resolve_settings,
};
