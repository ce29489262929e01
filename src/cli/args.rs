use clap::{Parser, Subcommand};

use crate::config::ResolveOptions;

#[derive(Parser, Debug)]
#[command(name = "polytrans")]
#[command(about = "Glossary-aware translation through OpenAI-compatible chat endpoints")]
#[command(version)]
pub struct Args {
    /// Text to translate
    #[arg(long, env = "TEXT", hide_env_values = true)]
    pub text: Option<String>,

    /// Read the text to translate from a file ("-" for stdin)
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Target language name or ISO 639-1 code (e.g., French, es)
    #[arg(short = 't', long = "to", env = "TARGET_LANGUAGE")]
    pub to: Option<String>,

    /// Glossary of term=translation lines passed to the model verbatim
    #[arg(short = 'g', long, env = "LLM_SYSTEM_PROMPT", hide_env_values = true)]
    pub glossary: Option<String>,

    /// API base URL (requests go to <BASE_URL>/chat/completions)
    #[arg(short = 'e', long, env = "BASE_URL")]
    pub base_url: Option<String>,

    /// API key sent as a bearer token
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model name
    #[arg(short = 'm', long, env = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long, env = "LLM_TEMPERATURE", allow_hyphen_values = true)]
    pub temperature: Option<String>,

    /// Translation policy (clean, faithful)
    #[arg(short = 'p', long, env = "TRANSLATION_POLICY")]
    pub policy: Option<String>,

    /// Suppress the progress spinner and status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Settings overrides taken from flags and environment variables.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            temperature: self.temperature.clone(),
            policy: self.policy.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages,
    /// List translation policies, or show one in detail
    Policies {
        /// Policy to show
        name: Option<String>,
    },
    /// Configure default settings
    Configure {
        /// Show the resolved settings instead of editing them
        #[arg(long)]
        show: bool,
    },
}
