/// User domain types
use crate::types::UserId;
use crate::validation::{self, fields, ValidationErrors};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A stored user document
///
/// Field names on the wire follow the public API (`_id`, `user`, `mobile`,
/// `interest`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, never reused
    #[serde(rename = "_id")]
    pub id: UserId,

    /// Display name
    #[serde(rename = "user")]
    pub name: String,

    /// Lowercased, unique across all users
    pub email: String,

    #[serde(rename = "mobile")]
    pub phone: i64,

    pub age: u32,

    #[serde(rename = "interest", default)]
    pub interests: Vec<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a fresh document with a generated ID and matching timestamps
    pub fn new(fields: NewUser) -> Self {
        let now = now();
        Self {
            id: UserId::generate(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            age: fields.age,
            interests: fields.interests,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the document as modified
    pub fn touch(&mut self) {
        self.updated_at = now().max(self.updated_at);
    }
}

// Stored timestamps keep millisecond precision, so fresh ones do too.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Fields required to create a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: i64,
    pub age: u32,
    pub interests: Vec<String>,
}

impl NewUser {
    /// Check and normalize the fields (trimmed name, trimmed lowercase email)
    pub fn validate(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = validation::check_name(&self.name, &mut errors);
        let email = validation::check_email(&self.email, &mut errors);
        errors.into_result(Self {
            name,
            email,
            ..self
        })
    }
}

/// Partial update; `None` leaves the stored field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<i64>,
    pub age: Option<u32>,
    pub interests: Option<Vec<String>>,
}

impl UserPatch {
    /// Check and normalize the fields that are present
    pub fn validate(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = self
            .name
            .map(|name| validation::check_name(&name, &mut errors));
        let email = self
            .email
            .map(|email| validation::check_email(&email, &mut errors));
        errors.into_result(Self {
            name,
            email,
            ..self
        })
    }

    /// Copy the present fields onto `user`. Timestamps are left alone.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        if let Some(interests) = self.interests {
            user.interests = interests;
        }
    }
}

/// JSON body of the create and update requests
///
/// Every field is optional so a missing field turns into a validation
/// message rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "user", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "mobile", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(rename = "interest", default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

impl UserPayload {
    /// Require every mandatory field and normalize the result
    pub fn into_new_user(self) -> Result<NewUser, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = validation::check_name(self.name.as_deref().unwrap_or_default(), &mut errors);
        let email = validation::check_email(self.email.as_deref().unwrap_or_default(), &mut errors);
        if self.phone.is_none() {
            errors.push(fields::PHONE, "Phone number is required");
        }
        if self.age.is_none() {
            errors.push(fields::AGE, "Age is required");
        }

        errors.into_result(NewUser {
            name,
            email,
            phone: self.phone.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            interests: self.interests.unwrap_or_default(),
        })
    }

    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            name: self.name,
            email: self.email,
            phone: self.phone,
            age: self.age,
            interests: self.interests,
        }
    }
}

impl From<NewUser> for UserPayload {
    fn from(user: NewUser) -> Self {
        Self {
            name: Some(user.name),
            email: Some(user.email),
            phone: Some(user.phone),
            age: Some(user.age),
            interests: Some(user.interests),
        }
    }
}
