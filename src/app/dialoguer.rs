//! Dialoguer-based prompt applications
//!
//! Concrete implementations of the [`PromptApp`] contract using the
//! dialoguer library for terminal user interaction. Every application owns
//! a plain-data configuration, so the async path can hand a copy of itself
//! to a blocking worker thread.

use async_trait::async_trait;
use dialoguer::{Confirm, Input, MultiSelect, Password, Select};
use serde::Deserialize;
use serde_json::Value;

use super::PromptApp;
use crate::constants::validation::{EMPTY_CHOICES, PASSWORDS_MISMATCH};
use crate::error::{Error, Result};

/// Password entry settings for a text prompt
#[derive(Debug, Clone, Deserialize)]
pub struct SecretOptions {
    /// Ask for the value a second time and compare
    #[serde(default)]
    pub confirm: bool,
    /// Error shown when the confirmation does not match
    #[serde(default = "default_mismatch_error")]
    pub mismatch_error: String,
}

fn default_mismatch_error() -> String {
    PASSWORDS_MISMATCH.to_string()
}

impl Default for SecretOptions {
    fn default() -> Self {
        Self { confirm: false, mismatch_error: default_mismatch_error() }
    }
}

/// Free-text input, optionally in hidden (password) mode
#[derive(Debug, Clone, Deserialize)]
pub struct TextPrompt {
    /// Message displayed to the user
    pub message: String,
    /// Optional value accepted when the user submits an empty line
    #[serde(default)]
    pub default: Option<String>,
    /// When set, input is hidden and optionally confirmed
    #[serde(default)]
    pub secret: Option<SecretOptions>,
}

impl TextPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), default: None, secret: None }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Switch to hidden input without confirmation.
    pub fn secret(self) -> Self {
        self.with_secret(SecretOptions::default())
    }

    pub fn with_secret(mut self, options: SecretOptions) -> Self {
        self.secret = Some(options);
        self
    }

    fn interact(&self) -> Result<Value> {
        if let Some(secret) = &self.secret {
            let mut password = Password::new().with_prompt(&self.message);

            if secret.confirm {
                password = password.with_confirmation(
                    format!("{} (confirm)", self.message),
                    secret.mismatch_error.clone(),
                );
            }

            Ok(Value::String(password.interact()?))
        } else {
            let mut input: Input<String> = Input::new().with_prompt(&self.message);

            if let Some(default) = &self.default {
                input = input.default(default.clone());
            }

            Ok(Value::String(input.interact_text()?))
        }
    }
}

#[async_trait]
impl PromptApp for TextPrompt {
    fn run(&mut self) -> Result<Value> {
        self.interact()
    }

    async fn run_async(&mut self) -> Result<Value> {
        let prompt = self.clone();
        tokio::task::spawn_blocking(move || prompt.interact()).await?
    }
}

/// Boolean yes/no confirmation
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmPrompt {
    /// Message displayed to the user
    pub message: String,
    /// Answer preselected when the user just hits enter
    #[serde(default)]
    pub default: bool,
}

impl ConfirmPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), default: false }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    fn interact(&self) -> Result<Value> {
        let answer = Confirm::new()
            .with_prompt(&self.message)
            .default(self.default)
            .interact()?;

        Ok(Value::Bool(answer))
    }
}

#[async_trait]
impl PromptApp for ConfirmPrompt {
    fn run(&mut self) -> Result<Value> {
        self.interact()
    }

    async fn run_async(&mut self) -> Result<Value> {
        let prompt = self.clone();
        tokio::task::spawn_blocking(move || prompt.interact()).await?
    }
}

/// Single choice out of a fixed item list
#[derive(Debug, Clone, Deserialize)]
pub struct SelectPrompt {
    /// Message displayed to the user
    pub message: String,
    /// Items offered for selection
    pub items: Vec<String>,
    /// Index of the preselected item
    #[serde(default)]
    pub default: Option<usize>,
}

impl SelectPrompt {
    pub fn new(message: impl Into<String>, items: Vec<String>) -> Self {
        Self { message: message.into(), items, default: None }
    }

    pub fn with_default(mut self, index: usize) -> Self {
        self.default = Some(index);
        self
    }

    fn interact(&self) -> Result<Value> {
        if self.items.is_empty() {
            return Err(Error::ValidationError(EMPTY_CHOICES.to_string()));
        }

        let mut select = Select::new().with_prompt(&self.message).items(&self.items);

        if let Some(index) = self.default.filter(|i| *i < self.items.len()) {
            select = select.default(index);
        }

        let index = select.interact()?;
        Ok(Value::String(self.items[index].clone()))
    }
}

#[async_trait]
impl PromptApp for SelectPrompt {
    fn run(&mut self) -> Result<Value> {
        self.interact()
    }

    async fn run_async(&mut self) -> Result<Value> {
        let prompt = self.clone();
        tokio::task::spawn_blocking(move || prompt.interact()).await?
    }
}

/// Multiple choice out of a fixed item list
#[derive(Debug, Clone, Deserialize)]
pub struct MultiSelectPrompt {
    /// Message displayed to the user
    pub message: String,
    /// Items offered for selection
    pub items: Vec<String>,
    /// Per-item preselection flags; shorter lists are padded with `false`
    #[serde(default)]
    pub defaults: Vec<bool>,
}

impl MultiSelectPrompt {
    pub fn new(message: impl Into<String>, items: Vec<String>) -> Self {
        Self { message: message.into(), items, defaults: Vec::new() }
    }

    pub fn with_defaults(mut self, defaults: Vec<bool>) -> Self {
        self.defaults = defaults;
        self
    }

    fn resolved_defaults(&self) -> Vec<bool> {
        let mut defaults = self.defaults.clone();
        defaults.resize(self.items.len(), false);
        defaults
    }

    fn interact(&self) -> Result<Value> {
        if self.items.is_empty() {
            return Err(Error::ValidationError(EMPTY_CHOICES.to_string()));
        }

        let indices = MultiSelect::new()
            .with_prompt(&self.message)
            .items(&self.items)
            .defaults(&self.resolved_defaults())
            .interact()?;

        let selected: Vec<Value> =
            indices.iter().map(|&i| Value::String(self.items[i].clone())).collect();

        Ok(Value::Array(selected))
    }
}

#[async_trait]
impl PromptApp for MultiSelectPrompt {
    fn run(&mut self) -> Result<Value> {
        self.interact()
    }

    async fn run_async(&mut self) -> Result<Value> {
        let prompt = self.clone();
        tokio::task::spawn_blocking(move || prompt.interact()).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_prompt_builder_sets_fields() {
        let prompt = TextPrompt::new("Project name").with_default("demo");

        assert_eq!(prompt.message, "Project name");
        assert_eq!(prompt.default.as_deref(), Some("demo"));
        assert!(prompt.secret.is_none());
    }

    #[test]
    fn secret_defaults_use_standard_mismatch_message() {
        let prompt = TextPrompt::new("Token").secret();

        let secret = prompt.secret.expect("secret mode set");
        assert!(!secret.confirm);
        assert_eq!(secret.mismatch_error, PASSWORDS_MISMATCH);
    }

    #[test]
    fn text_prompt_deserializes_with_defaults() {
        let prompt: TextPrompt =
            serde_json::from_value(json!({ "message": "Name" })).unwrap();

        assert_eq!(prompt.message, "Name");
        assert!(prompt.default.is_none());
        assert!(prompt.secret.is_none());
    }

    #[test]
    fn secret_options_deserialize_with_confirmation() {
        let prompt: TextPrompt = serde_json::from_value(json!({
            "message": "Password",
            "secret": { "confirm": true }
        }))
        .unwrap();

        let secret = prompt.secret.expect("secret mode set");
        assert!(secret.confirm);
        assert_eq!(secret.mismatch_error, PASSWORDS_MISMATCH);
    }

    #[test]
    fn confirm_prompt_deserializes_default_flag() {
        let prompt: ConfirmPrompt = serde_json::from_value(json!({
            "message": "Continue?",
            "default": true
        }))
        .unwrap();

        assert!(prompt.default);
    }

    #[test]
    fn select_with_no_items_is_a_validation_error() {
        let mut prompt = SelectPrompt::new("Pick one", Vec::new());

        let err = prompt.run().unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn multi_select_with_no_items_is_a_validation_error() {
        let mut prompt = MultiSelectPrompt::new("Pick some", Vec::new());

        let err = prompt.run().unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn multi_select_pads_short_default_lists() {
        let prompt = MultiSelectPrompt::new(
            "Pick some",
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        )
        .with_defaults(vec![true]);

        assert_eq!(prompt.resolved_defaults(), vec![true, false, false]);
    }

    #[test]
    fn select_out_of_range_default_is_ignored() {
        let prompt = SelectPrompt::new("Pick one", vec!["a".to_string()]).with_default(5);

        // The guard in interact() drops the index; the config keeps it.
        assert_eq!(prompt.default, Some(5));
        assert_eq!(prompt.default.filter(|i| *i < prompt.items.len()), None);
    }
}
