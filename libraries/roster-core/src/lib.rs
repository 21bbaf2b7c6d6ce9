//! Roster Core
//!
//! Domain types, validation rules, and the repository contract shared by the
//! Roster server, storage layer, and clients.
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::UserPayload;
//!
//! let payload = UserPayload {
//!     name: Some("Jane".to_string()),
//!     email: Some("Jane@X.com".to_string()),
//!     phone: Some(5551234),
//!     age: Some(30),
//!     interests: None,
//! };
//!
//! let user = payload.into_new_user().unwrap();
//! assert_eq!(user.email, "jane@x.com");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;
pub mod validation;

pub use error::{Result, RosterError};
pub use storage::UserRepository;
pub use types::{NewUser, User, UserId, UserPatch, UserPayload};
pub use validation::{FieldError, ValidationErrors};
