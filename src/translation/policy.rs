//! Translation policies.
//!
//! A policy fixes what the model is told to do with emojis and code blocks,
//! and whether its reply is cleaned up afterwards.

use std::fmt;

// {target_language} is a placeholder for string replacement, not a format argument
#[allow(clippy::literal_string_with_formatting_args)]
const CLEAN_PROMPT_TEMPLATE: &str = "You are a professional translator. Translate the user's message into {target_language}.\n\
     CRITICAL: Return ONLY the translated text. Do not add explanations, notes, or commentary.\n\
     Preserve meaning, tone, punctuation, and Markdown formatting.\n\
     Remove all emojis from the translation - do not include any emojis in your response.\n\
     If the input is already in {target_language}, provide a natural {target_language} rewrite.\n\
     Your response must contain only the translation, nothing else.";

#[allow(clippy::literal_string_with_formatting_args)]
const FAITHFUL_PROMPT_TEMPLATE: &str = "You are a professional translator. Translate the user's message into \
     {target_language} that is easy for the user to read.\n\
     Preserve meaning, tone, emojis, punctuation, and any Markdown formatting.\n\
     Preserve code blocks verbatim. Do not add commentary - return only the translation.\n\
     If the input already appears to be in {target_language}, return a clear, natural rewrite in {target_language}.";

/// How a translation is requested and post-processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TranslationPolicy {
    /// Emojis removed, reply reduced to a single clean line.
    #[default]
    Clean,
    /// Emojis and code blocks preserved, reply returned untouched.
    Faithful,
}

impl TranslationPolicy {
    const ALL: [Self; 2] = [Self::Clean, Self::Faithful];

    /// All available policies, default first.
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// The key used in config files and on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Faithful => "faithful",
        }
    }

    /// Human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Clean => "Single-line output, emojis removed, model commentary stripped",
            Self::Faithful => "Emojis and code blocks preserved, reply returned as-is",
        }
    }

    /// System prompt template with a `{target_language}` placeholder.
    pub const fn prompt_template(self) -> &'static str {
        match self {
            Self::Clean => CLEAN_PROMPT_TEMPLATE,
            Self::Faithful => FAITHFUL_PROMPT_TEMPLATE,
        }
    }

    /// Returns `true` if replies go through the sanitizer.
    pub const fn sanitizes_reply(self) -> bool {
        matches!(self, Self::Clean)
    }

    /// Looks up a policy by key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|policy| policy.key() == key)
    }

    /// Looks up a policy by key, failing with the list of valid keys.
    pub fn resolve(key: &str) -> Result<Self, PolicyError> {
        Self::from_key(key).ok_or_else(|| PolicyError::NotFound {
            key: key.to_string(),
        })
    }
}

impl fmt::Display for TranslationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a policy key is unknown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("Translation policy '{key}' not found\n\nAvailable policies: {}", available_keys())]
    NotFound { key: String },
}

fn available_keys() -> String {
    TranslationPolicy::all()
        .iter()
        .map(|p| p.key())
        .collect::<Vec<_>>()
        .join(", ")
}
