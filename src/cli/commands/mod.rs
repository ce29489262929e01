//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Policy listing command handler.
pub mod policies;

/// Translation command handler.
pub mod translate;
