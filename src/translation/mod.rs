mod client;
mod error;
mod language;
mod policy;
mod prompt;
mod sanitize;
mod translator;

pub use client::{ChatMessage, ChatProvider, OpenAiClient, Role};
pub use error::ProviderError;
pub use language::{SUPPORTED_LANGUAGES, language_name, print_languages, resolve_language};
pub use policy::{PolicyError, TranslationPolicy};
pub use prompt::{build_system_prompt, build_user_content};
pub use sanitize::{COMMENTARY_MARKERS, SKIP_RULES, SkipRule, sanitize_reply, skip_reason};
pub use translator::{TranslationRequest, Translator};
