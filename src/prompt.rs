//! User-prompt abstraction for numeric command parameters.
//!
//! The host shows a modal input dialog and answers synchronously. Cancelling
//! the dialog and typing something that is not a number are different
//! outcomes: the first aborts the command quietly, the second is reported
//! back to the user and may be retried.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

use crate::consts::{INVALID_NUMBER_MESSAGE, INVALID_NUMBER_TITLE};
use crate::error::CommandError;

/// Blocking request/response dialog surface provided by the host UI.
pub trait Prompt {
    /// Ask for a line of text, pre-filled with `default`. `None` means the user cancelled.
    fn prompt_for_text(&mut self, title: &str, message: &str, default: &str) -> Option<String>;

    /// Tell the user their last answer was rejected.
    fn show_error(&mut self, _title: &str, _message: &str) {}
}

/// What to ask for when a command needs an integer from the user.
#[derive(Debug, Clone, Copy)]
pub struct IntegerRequest<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub default: i32,
}

/// Parse a user's answer as a signed integer. Surrounding whitespace is ignored.
///
/// # Errors
///
/// `InvalidParameter` carrying the raw input when it is not an `i32`.
pub fn parse_integer(input: &str) -> Result<i32, CommandError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| CommandError::InvalidParameter { input: input.to_string() })
}

/// Ask once for an integer.
///
/// # Errors
///
/// `Cancelled` if the user aborted, `InvalidParameter` for non-numeric text.
pub fn prompt_for_integer(prompt: &mut dyn Prompt, request: IntegerRequest<'_>) -> Result<i32, CommandError> {
    let default = request.default.to_string();
    let Some(answer) = prompt.prompt_for_text(request.title, request.message, &default) else {
        return Err(CommandError::Cancelled);
    };
    parse_integer(&answer)
}

/// Ask for an integer up to `attempts` times, showing an error after each bad answer.
///
/// An `attempts` of zero is treated as one.
///
/// # Errors
///
/// `Cancelled` as soon as the user aborts; `InvalidParameter` with the last
/// bad answer once every attempt is used up.
pub fn prompt_for_integer_with_retry(
    prompt: &mut dyn Prompt,
    request: IntegerRequest<'_>,
    attempts: u32,
) -> Result<i32, CommandError> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match prompt_for_integer(prompt, request) {
            Err(CommandError::InvalidParameter { input }) => {
                tracing::warn!(%input, attempt, attempts, "rejected non-numeric input");
                prompt.show_error(INVALID_NUMBER_TITLE, INVALID_NUMBER_MESSAGE);
                if attempt >= attempts {
                    return Err(CommandError::InvalidParameter { input });
                }
                attempt += 1;
            }
            other => return other,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::VecDeque;

    use super::Prompt;

    /// Prompt that replays canned answers and records what it was asked.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        answers: VecDeque<Option<String>>,
        /// `(title, message, default)` of every request, in order.
        pub requests: Vec<(String, String, String)>,
        /// `(title, message)` of every error shown, in order.
        pub errors: Vec<(String, String)>,
    }

    impl ScriptedPrompt {
        /// Answers given in order; `None` cancels.
        pub fn new(answers: &[Option<&str>]) -> Self {
            Self { answers: answers.iter().map(|a| a.map(str::to_string)).collect(), ..Self::default() }
        }

        /// A prompt whose user answers `text` once.
        pub fn answering(text: &str) -> Self {
            Self::new(&[Some(text)])
        }

        /// A prompt whose user cancels.
        pub fn cancelling() -> Self {
            Self::new(&[None])
        }
    }

    impl Prompt for ScriptedPrompt {
        fn prompt_for_text(&mut self, title: &str, message: &str, default: &str) -> Option<String> {
            self.requests.push((title.to_string(), message.to_string(), default.to_string()));
            self.answers.pop_front().flatten()
        }

        fn show_error(&mut self, title: &str, message: &str) {
            self.errors.push((title.to_string(), message.to_string()));
        }
    }
}
