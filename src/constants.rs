//! Constants used throughout the inquest library

/// Message printed when the user cancels an in-progress prompt
pub const DEFAULT_CANCEL_MESSAGE: &str = "Cancelled by user";

/// Prompt validation messages
pub mod validation {
    pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";
    pub const EMPTY_CHOICES: &str = "choice prompts need at least one item";
}
