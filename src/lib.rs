//! Interactive command-line questions with synchronous and asynchronous
//! entry points.
//!
//! A [`Question`] wraps a ready-to-run prompt application and adds three
//! things on top of the raw run: conversion of a user interrupt into a
//! clean cancelled result, conditional skipping with a stored default, and
//! scoped stdout patching while the renderer owns the terminal.

/// Prompt application contract and the dialoguer-backed implementations.
pub mod app;

/// Constants used throughout the library.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Sequencing of multiple named questions.
pub mod form;

/// Scoped terminal-output patching during interactive renders.
pub mod output;

/// The core question adapter.
pub mod question;

/// One-time async-mode activation for the cooperative path.
pub mod runtime;

pub use app::{ConfirmPrompt, MultiSelectPrompt, PromptApp, SelectPrompt, TextPrompt};
pub use error::{Error, Result};
pub use form::Form;
pub use question::{AskOptions, Question};

/// Build a free-text question.
pub fn text(message: impl Into<String>) -> Question {
    Question::new(TextPrompt::new(message))
}

/// Build a hidden-input (password) question.
pub fn password(message: impl Into<String>) -> Question {
    Question::new(TextPrompt::new(message).secret())
}

/// Build a yes/no confirmation question.
pub fn confirm(message: impl Into<String>, default: bool) -> Question {
    Question::new(ConfirmPrompt::new(message).with_default(default))
}

/// Build a single-choice question over `items`.
pub fn select(message: impl Into<String>, items: Vec<String>) -> Question {
    Question::new(SelectPrompt::new(message, items))
}

/// Build a multiple-choice question over `items`.
pub fn multiselect(message: impl Into<String>, items: Vec<String>) -> Question {
    Question::new(MultiSelectPrompt::new(message, items))
}
