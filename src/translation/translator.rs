use anyhow::{Result, bail};

use super::client::{ChatMessage, ChatProvider};
use super::policy::TranslationPolicy;
use super::prompt::{build_system_prompt, build_user_content};
use super::sanitize::sanitize_reply;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
    /// Free-form glossary, inserted into the prompt verbatim.
    pub glossary: Option<String>,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target_language: target_language.into(),
            glossary: None,
        }
    }

    #[must_use]
    pub fn with_glossary(mut self, glossary: Option<String>) -> Self {
        self.glossary = glossary;
        self
    }
}

/// Builds prompts for a [`ChatProvider`] and post-processes its replies
/// according to a [`TranslationPolicy`].
pub struct Translator<P> {
    provider: P,
    policy: TranslationPolicy,
}

impl<P: ChatProvider> Translator<P> {
    pub const fn new(provider: P, policy: TranslationPolicy) -> Self {
        Self { provider, policy }
    }

    /// The system and user messages sent for `request`.
    pub fn messages(&self, request: &TranslationRequest) -> Result<[ChatMessage; 2]> {
        if request.target_language.trim().is_empty() {
            bail!("Target language must not be empty");
        }

        Ok([
            ChatMessage::system(build_system_prompt(
                self.policy,
                &request.target_language,
            )),
            ChatMessage::user(build_user_content(
                &request.text,
                request.glossary.as_deref(),
            )),
        ])
    }

    /// Sends one request to the provider and returns the translation.
    ///
    /// Provider failures are returned unchanged; nothing is retried.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let messages = self.messages(request)?;
        let reply = self.provider.complete(&messages).await?;

        if self.policy.sanitizes_reply() {
            Ok(sanitize_reply(&reply))
        } else {
            Ok(reply)
        }
    }
}
