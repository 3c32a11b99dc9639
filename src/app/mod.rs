//! Prompt application abstractions
//!
//! This module defines the contract between the question adapter and the
//! engine that actually renders a prompt, plus the concrete terminal-backed
//! implementations.
//!
//! The module is structured in layers:
//! - the [`PromptApp`] trait: a pure interface independent of any UI library
//! - `dialoguer`: concrete implementations using the dialoguer library

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub mod dialoguer;

pub use self::dialoguer::{
    ConfirmPrompt, MultiSelectPrompt, SecretOptions, SelectPrompt, TextPrompt,
};

/// A ready-to-run interactive prompt.
///
/// An application runs to completion exactly once and reports the collected
/// answer as a [`serde_json::Value`]. The adapter driving it never reaches
/// into its internals; it only starts the run, blocking or async.
#[async_trait]
pub trait PromptApp: Send {
    /// Run the prompt to completion, blocking the calling thread.
    fn run(&mut self) -> Result<Value>;

    /// Run the prompt to completion without blocking the async runtime.
    async fn run_async(&mut self) -> Result<Value>;
}
