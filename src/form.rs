//! Question sequencing
//!
//! Asks an ordered set of named questions as one unit and collects the
//! answers into a JSON map, the shape downstream consumers (templates,
//! config writers) expect. One user interrupt cancels the whole form.

use serde_json::{Map, Value};

use crate::constants::DEFAULT_CANCEL_MESSAGE;
use crate::error::{Error, Result};
use crate::question::Question;

/// An ordered list of named questions asked as one unit.
#[derive(Default)]
pub struct Form {
    entries: Vec<(String, Question)>,
}

impl Form {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append a named question.
    pub fn question(mut self, name: impl Into<String>, question: Question) -> Self {
        self.entries.push((name.into(), question));
        self
    }

    /// Number of questions in the form.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ask every question in order.
    ///
    /// Skipped questions contribute their configured default. On a user
    /// interrupt the cancel message is printed once and `Ok(None)` is
    /// returned; answers gathered so far are discarded.
    pub fn ask(self) -> Result<Option<Map<String, Value>>> {
        let mut answers = Map::new();

        for (name, question) in self.entries {
            match question.unsafe_ask(false) {
                Ok(answer) => {
                    answers.insert(name, answer);
                }
                Err(Error::Interrupted) => {
                    println!("\n{DEFAULT_CANCEL_MESSAGE}\n");
                    return Ok(None);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(Some(answers))
    }

    /// Async counterpart of [`ask`](Form::ask).
    pub async fn ask_async(self) -> Result<Option<Map<String, Value>>> {
        let mut answers = Map::new();

        for (name, question) in self.entries {
            match question.unsafe_ask_async(false).await {
                Ok(answer) => {
                    answers.insert(name, answer);
                }
                Err(Error::Interrupted) => {
                    println!("\n{DEFAULT_CANCEL_MESSAGE}\n");
                    return Ok(None);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(Some(answers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TextPrompt;

    #[test]
    fn form_builder_keeps_entry_count() {
        let form = Form::new()
            .question("name", Question::new(TextPrompt::new("Name")))
            .question("city", Question::new(TextPrompt::new("City")));

        assert_eq!(form.len(), 2);
        assert!(!form.is_empty());
    }

    #[test]
    fn empty_form_yields_empty_answers() {
        let answers = Form::new().ask().unwrap().expect("nothing to cancel");
        assert!(answers.is_empty());
    }
}
