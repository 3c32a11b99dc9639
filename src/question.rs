//! The question adapter
//!
//! Wraps a ready-to-run prompt application and layers two orthogonal
//! concerns over the raw run: converting a user interrupt into a clean
//! cancelled result, and conditional skipping with a stored default. The
//! `unsafe_*` variants expose the raw run for callers that want to handle
//! the interrupt themselves.

use std::io::{self, Write};
use std::sync::Arc;

use serde_json::Value;

use crate::app::PromptApp;
use crate::constants::DEFAULT_CANCEL_MESSAGE;
use crate::error::{Error, Result};
use crate::output::{PatchScope, StdoutPatcher, TermPatcher};
use crate::runtime::{self, ActivationHook, AsyncRuntimeMode};

/// Per-call options for the safe ask entry points.
#[derive(Debug, Clone)]
pub struct AskOptions {
    /// Wrap the run in a patched-stdout region. Honored on the sync path;
    /// the async run manages its own output (see
    /// [`Question::unsafe_ask_async`]).
    pub patch_stdout: bool,
    /// Message printed when the user cancels the prompt.
    pub cancel_message: String,
}

impl Default for AskOptions {
    fn default() -> Self {
        Self {
            patch_stdout: false,
            cancel_message: DEFAULT_CANCEL_MESSAGE.to_string(),
        }
    }
}

/// A question to be prompted.
///
/// Questions are usually created through the crate-level constructors
/// ([`text`](crate::text), [`confirm`](crate::confirm), ...) around a
/// prompt application; asking one runs that application to completion.
pub struct Question {
    application: Box<dyn PromptApp>,
    should_skip_question: bool,
    default: Value,
    patcher: Arc<dyn StdoutPatcher>,
    async_mode: &'static AsyncRuntimeMode,
    activation: ActivationHook,
}

impl Question {
    pub fn new(application: impl PromptApp + 'static) -> Self {
        Self {
            application: Box::new(application),
            should_skip_question: false,
            default: Value::Null,
            patcher: Arc::new(TermPatcher::new()),
            async_mode: runtime::process_mode(),
            activation: runtime::default_activation_hook(),
        }
    }

    /// Skip the question when `condition` holds and return `default`
    /// instead. The application is never run for a skipped question.
    pub fn skip_if(mut self, condition: bool, default: Value) -> Self {
        self.should_skip_question = condition;
        self.default = default;
        self
    }

    /// Replace the stdout patcher used for patched runs.
    pub fn with_stdout_patcher(mut self, patcher: impl StdoutPatcher + 'static) -> Self {
        self.patcher = Arc::new(patcher);
        self
    }

    /// Replace the activation state and hook driving async-mode setup.
    ///
    /// The default is the process-wide mode; passing a dedicated instance
    /// isolates embedders (and tests) from it.
    pub fn with_async_mode(
        mut self,
        mode: &'static AsyncRuntimeMode,
        activation: ActivationHook,
    ) -> Self {
        self.async_mode = mode;
        self.activation = activation;
        self
    }

    /// Ask the question synchronously with default options.
    pub fn ask(self) -> Result<Option<Value>> {
        self.ask_with(&AskOptions::default())
    }

    /// Ask the question synchronously.
    ///
    /// A user interrupt is reported as `Ok(None)` after printing the
    /// cancel message; every other error propagates unchanged.
    pub fn ask_with(self, options: &AskOptions) -> Result<Option<Value>> {
        if self.should_skip_question {
            log::debug!("Skipping question, returning the configured default.");
            return Ok(Some(self.default));
        }

        // Buffered prompt text must be visible before the renderer takes
        // over the terminal.
        io::stdout().flush()?;

        match self.unsafe_ask(options.patch_stdout) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Interrupted) => {
                println!("\n{}\n", options.cancel_message);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Ask the question synchronously without catching user interrupts.
    pub fn unsafe_ask(mut self, patch_stdout: bool) -> Result<Value> {
        if self.should_skip_question {
            return Ok(self.default);
        }

        if patch_stdout {
            let _scope = PatchScope::enter(Arc::clone(&self.patcher))?;
            self.application.run()
        } else {
            self.application.run()
        }
    }

    /// Ask the question from an async context with default options.
    pub async fn ask_async(self) -> Result<Option<Value>> {
        self.ask_async_with(&AskOptions::default()).await
    }

    /// Async counterpart of [`ask_with`](Question::ask_with).
    pub async fn ask_async_with(self, options: &AskOptions) -> Result<Option<Value>> {
        if self.should_skip_question {
            log::debug!("Skipping question, returning the configured default.");
            return Ok(Some(self.default));
        }

        match self.unsafe_ask_async(options.patch_stdout).await {
            Ok(value) => Ok(Some(value)),
            Err(Error::Interrupted) => {
                println!("\n{}\n", options.cancel_message);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Async counterpart of [`unsafe_ask`](Question::unsafe_ask).
    ///
    /// The first call in the process performs the one-time async-mode
    /// activation before the run starts.
    pub async fn unsafe_ask_async(mut self, patch_stdout: bool) -> Result<Value> {
        if self.should_skip_question {
            return Ok(self.default);
        }

        if !self.async_mode.is_activated() {
            self.async_mode.ensure_activated(|| (self.activation)()).await?;
        }

        // The async run manages its own output; the patch scope applies on
        // the sync path only. Pinned by `async_patch_stdout_is_inert`.
        let _ = patch_stdout;

        self.application.run_async().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullApp;

    #[async_trait::async_trait]
    impl PromptApp for NullApp {
        fn run(&mut self) -> Result<Value> {
            Ok(Value::Null)
        }

        async fn run_async(&mut self) -> Result<Value> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn ask_options_default_uses_standard_message() {
        let options = AskOptions::default();

        assert!(!options.patch_stdout);
        assert_eq!(options.cancel_message, DEFAULT_CANCEL_MESSAGE);
    }

    #[test]
    fn skip_if_stores_condition_and_default() {
        let question = Question::new(NullApp).skip_if(true, Value::from(7));

        assert!(question.should_skip_question);
        assert_eq!(question.default, Value::from(7));
    }

    #[test]
    fn questions_default_to_not_skipping() {
        let question = Question::new(NullApp);

        assert!(!question.should_skip_question);
        assert_eq!(question.default, Value::Null);
    }
}
