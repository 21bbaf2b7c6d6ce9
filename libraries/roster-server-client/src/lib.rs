//! Roster Server Client
//!
//! HTTP client library for the Roster user API.
//!
//! # Example
//!
//! ```ignore
//! use roster_server_client::{ClientConfig, UserClient, UserService};
//! use roster_core::types::UserPayload;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UserClient::new(ClientConfig::new("http://localhost:3001/api"))?;
//!
//!     let created = client
//!         .create_user(&UserPayload {
//!             name: Some("Jane".into()),
//!             email: Some("jane@x.com".into()),
//!             phone: Some(5551234),
//!             age: Some(30),
//!             interests: Some(vec!["chess".into()]),
//!         })
//!         .await?;
//!
//!     let fetched = client.get_user_by_id(&created.id).await?;
//!     println!("{} <{}>", fetched.name, fetched.email);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod service;
mod types;

pub use client::UserClient;
pub use error::{Result, ServerClientError};
pub use service::UserService;
pub use types::{ClientConfig, DEFAULT_API_URL};
