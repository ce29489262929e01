//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    ConfigManager, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ResolveOptions, Settings,
    TranslatorConfig, resolve_settings,
};
use crate::status;
use crate::translation::TranslationPolicy;
use crate::ui::{PromptOutcome, Style, run_prompts};

use super::translate::load_config_file;

/// Prints the settings a translation would use right now.
pub fn show_settings(options: &ResolveOptions) -> Result<()> {
    let settings = resolve_settings(options, &load_config_file())?;
    let config_path = ConfigManager::new()
        .map_or_else(|_| "(unavailable)".to_string(), |m| m.config_path().display().to_string());

    println!("{}", Style::header("Current settings"));
    println!("  {}  {}", Style::label("config     "), Style::secondary(config_path));
    print_settings(&settings);

    Ok(())
}

fn print_settings(settings: &Settings) {
    println!("  {}  {}", Style::label("base_url   "), Style::value(&settings.base_url));
    println!("  {}  {}", Style::label("model      "), Style::value(&settings.model));
    println!("  {}  {}", Style::label("temperature"), Style::value(settings.temperature));
    println!("  {}  {}", Style::label("policy     "), Style::value(settings.policy));
    println!(
        "  {}  {}",
        Style::label("api_key    "),
        settings
            .masked_api_key()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
}

/// Runs the configure command to edit default settings interactively.
pub fn run_configure() -> Result<()> {
    if run_prompts(run_configure_inner)? == PromptOutcome::Cancelled {
        eprintln!();
        status!("{}", Style::secondary("Configuration unchanged"));
    }
    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();
    let current = config.translator.clone();

    let base_url = prompt_text(
        "API base URL:",
        current.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        "Requests go to <base URL>/chat/completions",
    )?;

    let model = prompt_text(
        "Default model:",
        current.model.as_deref().unwrap_or(DEFAULT_MODEL),
        "Model identifier sent with every request",
    )?;

    let temperature = prompt_temperature(current.temperature.unwrap_or(DEFAULT_TEMPERATURE))?;

    let policy = select_policy(current.policy.as_deref())?;

    let api_key_env = Text::new("API key environment variable:")
        .with_default(current.api_key_env.as_deref().unwrap_or("API_KEY"))
        .with_help_message("Name of the variable holding the key; API_KEY is always checked first")
        .prompt()?;
    let api_key_env = api_key_env.trim();

    config.translator = TranslatorConfig {
        base_url: Some(base_url),
        model: Some(model),
        temperature: Some(temperature),
        policy: Some(policy.key().to_string()),
        api_key: current.api_key,
        api_key_env: (!api_key_env.is_empty() && api_key_env != "API_KEY")
            .then(|| api_key_env.to_string()),
    };

    manager.save(&config)?;

    status!(
        "\n{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn prompt_text(message: &str, default: &str, help: &str) -> Result<String> {
    let value = Text::new(message)
        .with_default(default)
        .with_help_message(help)
        .prompt()?;

    let value = value.trim();
    if value.is_empty() {
        bail!("Value cannot be empty");
    }

    Ok(value.to_string())
}

fn prompt_temperature(default: f32) -> Result<f32> {
    let raw = Text::new("Sampling temperature:")
        .with_default(&default.to_string())
        .with_help_message("0.0 gives the most deterministic translations")
        .prompt()?;

    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => bail!("Invalid temperature '{raw}': must be a number"),
    }
}

fn select_policy(default: Option<&str>) -> Result<TranslationPolicy> {
    let options: Vec<String> = TranslationPolicy::all()
        .iter()
        .map(|p| format!("{} - {}", p.key(), p.description()))
        .collect();

    let default_index = default
        .and_then(|d| TranslationPolicy::all().iter().position(|p| p.key() == d))
        .unwrap_or(0);

    let selection = Select::new("Default policy:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // split() always returns at least one element
    let key = selection.split(" - ").next().unwrap_or(&selection);
    Ok(TranslationPolicy::resolve(key)?)
}
