//! # polytrans - Glossary-aware Translation CLI
//!
//! `polytrans` translates one piece of text per invocation through an
//! OpenAI-compatible chat-completion endpoint. It is built to be spawned by a
//! chat server: inputs arrive as environment variables, the translation is
//! written to stdout, and failures exit with status 1 and an `Error:` line on
//! stderr.
//!
//! ## Quick Start
//!
//! ```bash
//! export API_KEY=sk-...
//! TEXT="Hello world" TARGET_LANGUAGE=fr polytrans
//!
//! # Bias word choice with a glossary
//! polytrans --text "The patient has heart failure" --to es \
//!     --glossary "Heart failure=Insuficiencia cardiaca"
//!
//! # Keep emojis and code blocks, return the reply untouched
//! polytrans --policy faithful --file notes.md --to Japanese
//! ```
//!
//! ## Configuration
//!
//! Flags and environment variables override `~/.config/polytrans/config.toml`:
//!
//! ```toml
//! [translator]
//! base_url = "https://api.ai.it.ufl.edu"
//! model = "mistral-7b-instruct"
//! temperature = 0.0
//! policy = "clean"
//! api_key_env = "UF_API_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and settings resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Prompt building, the chat-completion client and reply cleanup.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
