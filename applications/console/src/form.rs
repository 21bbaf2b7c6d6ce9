//! User form: raw text in, API payload out.

use roster_core::types::{User, UserPayload};
use roster_core::validation::{fields, is_valid_email, ValidationErrors};

/// Raw text of every form field, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub interests: String,
}

impl UserForm {
    /// Pre-populate the form for editing an existing user
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.to_string(),
            age: user.age.to_string(),
            interests: interests_to_text(&user.interests),
        }
    }

    /// Check every field and build the payload to submit
    ///
    /// All failures are collected so they can be shown next to their fields
    /// at once.
    pub fn submit(&self) -> Result<UserPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(fields::NAME, "Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(fields::EMAIL, "Email is required");
        } else if !is_valid_email(email) {
            errors.push(fields::EMAIL, "Invalid email");
        }

        let phone = match self.phone.trim() {
            "" => {
                errors.push(fields::PHONE, "Mobile number is required");
                None
            }
            raw => raw.parse::<i64>().map_or_else(
                |_| {
                    errors.push(fields::PHONE, "Mobile number must be a number");
                    None
                },
                Some,
            ),
        };

        let age = match self.age.trim() {
            "" => {
                errors.push(fields::AGE, "Age is required");
                None
            }
            raw => raw.parse::<u32>().map_or_else(
                |_| {
                    errors.push(fields::AGE, "Age must be a non-negative number");
                    None
                },
                Some,
            ),
        };

        if self.interests.trim().is_empty() {
            errors.push(fields::INTERESTS, "Interests are required");
        }

        errors.into_result(UserPayload {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            phone,
            age,
            interests: Some(text_to_interests(&self.interests)),
        })
    }
}

/// Field values supplied on the command line; `None` leaves a field as is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<String>,
    pub interests: Option<String>,
}

impl FieldInput {
    pub fn apply_to(self, form: &mut UserForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(email) = self.email {
            form.email = email;
        }
        if let Some(phone) = self.phone {
            form.phone = phone;
        }
        if let Some(age) = self.age {
            form.age = age;
        }
        if let Some(interests) = self.interests {
            form.interests = interests;
        }
    }
}

/// Join interests for display in a single text field
pub fn interests_to_text(interests: &[String]) -> String {
    interests.join(", ")
}

/// Split comma-separated text, trimming and dropping blank entries
pub fn text_to_interests(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
