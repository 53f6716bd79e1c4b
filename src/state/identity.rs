//! Identity form view state and username validation.
//!
//! DESIGN
//! ======
//! Form state is an immutable value: every event produces a new
//! `IdentityFormState` instead of mutating fields in place. Submission is split
//! into a pure evaluation (`evaluate_submission`) and a dispatch step that
//! performs the two side effects.
//!
//! Blank input is ignored silently while short or malformed input produces a
//! specific failure message. Callers must keep that asymmetry.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use thiserror::Error;

use crate::state::toast::Notify;

/// Minimum accepted username length, in characters.
pub const MIN_USERNAME_LEN: usize = 3;

/// HTML `pattern` attribute mirroring [`is_username_char`].
pub const USERNAME_PATTERN: &str = "[a-zA-Z0-9_-]+";

/// Success notification shown after an identity is accepted.
pub const WELCOME_MESSAGE: &str = "Welcome to the chat!";

/// Why a candidate username was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Username must be at least 3 characters long")]
    TooShort,
    #[error("Username can only contain letters, numbers, underscores, and hyphens")]
    InvalidCharacters,
}

/// Local state of the identity form: the input buffer and the busy flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityFormState {
    pub username: String,
    pub busy: bool,
}

impl IdentityFormState {
    /// State after the user edits the input field.
    pub fn with_input(&self, value: impl Into<String>) -> Self {
        Self {
            username: value.into(),
            busy: self.busy,
        }
    }

    /// State while a submission is being handled.
    pub fn submitting(&self) -> Self {
        Self {
            username: self.username.clone(),
            busy: true,
        }
    }

    /// State once submission handling has finished, whatever the outcome.
    pub fn settled(&self) -> Self {
        Self {
            username: self.username.clone(),
            busy: false,
        }
    }
}

/// Result of evaluating one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a submission already in flight. Nothing is shown.
    Ignored,
    /// The name passed validation and should be handed to the caller.
    Accepted(String),
    /// The name failed a rule; the error carries the user-facing message.
    Rejected(IdentityError),
}

impl SubmitOutcome {
    /// Perform the side effects for this outcome.
    ///
    /// `on_accept` runs at most once and only for `Accepted`, before the
    /// success notification. Rejections notify failure and never call it.
    pub fn dispatch<N, F>(self, notifier: &mut N, on_accept: F)
    where
        N: Notify + ?Sized,
        F: FnOnce(String),
    {
        match self {
            Self::Ignored => {}
            Self::Accepted(name) => {
                log::info!("identity accepted: {name}");
                on_accept(name);
                notifier.success(WELCOME_MESSAGE);
            }
            Self::Rejected(err) => {
                log::warn!("identity rejected: {err}");
                notifier.failure(&err.to_string());
            }
        }
    }
}

/// Whether `c` may appear in a username.
pub fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Check the length and character rules against the raw input.
///
/// Length is counted in UTF-16 code units, the unit browser inputs report,
/// so an astral character such as an emoji counts twice. The character rule
/// applies to the whole string, so surrounding whitespace is a violation.
pub fn validate_username(input: &str) -> Result<(), IdentityError> {
    if input.encode_utf16().count() < MIN_USERNAME_LEN {
        return Err(IdentityError::TooShort);
    }
    if !input.chars().all(is_username_char) {
        return Err(IdentityError::InvalidCharacters);
    }
    Ok(())
}

/// Whether `input` is empty once whitespace and byte-order marks are stripped.
pub fn is_blank(input: &str) -> bool {
    input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Decide what a submit of `state` should do.
pub fn evaluate_submission(state: &IdentityFormState) -> SubmitOutcome {
    if state.busy || is_blank(&state.username) {
        return SubmitOutcome::Ignored;
    }
    match validate_username(&state.username) {
        Ok(()) => SubmitOutcome::Accepted(state.username.clone()),
        Err(err) => SubmitOutcome::Rejected(err),
    }
}
