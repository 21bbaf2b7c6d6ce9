//! Validation rules for User documents
//!
//! Rules are evaluated imperatively. Every failing field is collected into a
//! single [`ValidationErrors`] so callers can report all problems at once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Wire names of the User fields, used as keys in validation messages
pub mod fields {
    pub const NAME: &str = "user";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "mobile";
    pub const AGE: &str = "age";
    pub const INTERESTS: &str = "interest";
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All failed rules for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error with exactly one failed field
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First message recorded for `field`
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` when nothing failed, otherwise `Err(self)`
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User validation failed")?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{}{}: {}", sep, error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"))
}

/// Simple `local@domain.tld` check, no whitespace allowed anywhere
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Trim a name, recording an error when nothing is left
pub fn check_name(raw: &str, errors: &mut ValidationErrors) -> String {
    let name = raw.trim();
    if name.is_empty() {
        errors.push(fields::NAME, "Name is required");
    }
    name.to_string()
}

/// Trim and lowercase an email, recording an error when it is empty or malformed
pub fn check_email(raw: &str, errors: &mut ValidationErrors) -> String {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        errors.push(fields::EMAIL, "Email is required");
    } else if !is_valid_email(&email) {
        errors.push(fields::EMAIL, "Please enter a valid email address");
    }
    email
}
