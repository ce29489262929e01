use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Completed,
    /// Escape or Ctrl+C; nothing after the prompt ran.
    Cancelled,
}

/// Runs `session`, turning an inquire cancellation into
/// [`PromptOutcome::Cancelled`]. Every other error is returned.
pub fn run_prompts<F>(session: F) -> Result<PromptOutcome>
where
    F: FnOnce() -> Result<()>,
{
    match session() {
        Ok(()) => Ok(PromptOutcome::Completed),
        Err(e) => match e.downcast_ref::<InquireError>() {
            Some(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(PromptOutcome::Cancelled)
            }
            _ => Err(e),
        },
    }
}
