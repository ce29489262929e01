use anyhow::{Result, bail};
use std::io::{self, IsTerminal};

use crate::config::{ConfigFile, ConfigManager, ResolveOptions, resolve_settings};
use crate::input::InputReader;
use crate::output;
use crate::translation::{OpenAiClient, TranslationRequest, Translator, resolve_language};
use crate::ui::Spinner;

/// Reported when the text or the target language is missing.
pub const MISSING_INPUT_MESSAGE: &str =
    "TEXT and TARGET_LANGUAGE environment variables are required";

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub to: Option<String>,
    pub glossary: Option<String>,
    pub resolve: ResolveOptions,
}

/// Loads the user's config file; a missing home directory means no file.
pub fn load_config_file() -> ConfigFile {
    ConfigManager::new().map_or_else(|_| ConfigFile::default(), |m| m.load_or_default())
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let text = match options.file.as_deref() {
        Some(path) => {
            let text = InputReader::read(path)?;
            if text.is_empty() {
                bail!("Input is empty");
            }
            Some(text)
        }
        None => options.text,
    };

    let (Some(text), Some(to)) = (
        text.filter(|t| !t.is_empty()),
        options.to.filter(|t| !t.is_empty()),
    ) else {
        bail!(MISSING_INPUT_MESSAGE);
    };

    let target_language = resolve_language(&to)?;
    let settings = resolve_settings(&options.resolve, &load_config_file())?;

    let translator = Translator::new(OpenAiClient::from_settings(&settings), settings.policy);
    let request = TranslationRequest::new(text, target_language).with_glossary(options.glossary);

    let spinner = if output::is_quiet() || !io::stderr().is_terminal() {
        Spinner::hidden()
    } else {
        Spinner::new("Translating...")
    };

    let result = translator.translate(&request).await;
    spinner.stop();

    println!("{}", result?);

    Ok(())
}
