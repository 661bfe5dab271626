//! Create-Poll form state
//!
//! The option list starts with two empty fields and can never drop below two.
//! Blank entries are stripped at submission time, not while editing.

use super::types::ValidationError;
use crate::api::NewPoll;
use crate::logic::poll::{can_remove_option, non_blank_options, MIN_OPTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateField {
    Title,
    Description,
    Option(usize),
}

#[derive(Clone, Debug)]
pub struct CreatePollForm {
    pub title: String,
    pub description: String,
    options: Vec<String>,
    /// 0 = title, 1 = description, 2.. = option fields
    pub focus: usize,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for CreatePollForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePollForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            options: vec![String::new(); MIN_OPTIONS],
            focus: 0,
            error: None,
            submitting: false,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Title, description, then one field per option
    pub fn field_count(&self) -> usize {
        2 + self.options.len()
    }

    pub fn focused_field(&self) -> CreateField {
        match self.focus {
            0 => CreateField::Title,
            1 => CreateField::Description,
            n => CreateField::Option((n - 2).min(self.options.len() - 1)),
        }
    }

    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.focused_field() {
            CreateField::Title => &mut self.title,
            CreateField::Description => &mut self.description,
            CreateField::Option(i) => &mut self.options[i],
        }
    }

    /// Append an empty option field and return its index
    pub fn add_option(&mut self) -> usize {
        self.options.push(String::new());
        self.options.len() - 1
    }

    /// Remove an option field. Refused when it would leave fewer than two.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if index >= self.options.len() || !can_remove_option(self.options.len()) {
            return false;
        }
        self.options.remove(index);
        self.focus = self.focus.min(self.field_count() - 1);
        true
    }

    pub fn edit_option(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Build the request body, or say why it cannot be sent
    pub fn submission(&self) -> Result<NewPoll, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let options = non_blank_options(&self.options);
        if options.len() < MIN_OPTIONS {
            return Err(ValidationError::TooFewOptions {
                found: options.len(),
            });
        }

        Ok(NewPoll {
            title: self.title.clone(),
            description: self.description.clone(),
            options,
        })
    }
}
