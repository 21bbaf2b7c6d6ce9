//! Roster Storage
//!
//! `SQLite` persistence for User documents.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `users` module owns its queries and row mapping
//! - **Explicit lifecycle**: [`UserStore::open`] connects and migrates,
//!   [`UserStore::close`] releases the pool; nothing is global
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::{storage::UserRepository, types::UserPayload};
//! use roster_storage::UserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = UserStore::open("sqlite://roster.db").await?;
//!
//! let payload = UserPayload {
//!     name: Some("Jane".into()),
//!     email: Some("jane@x.com".into()),
//!     phone: Some(5551234),
//!     age: Some(30),
//!     interests: Some(vec!["chess".into()]),
//! };
//! let user = store.create(payload.into_new_user()?).await?;
//! println!("created {}", user.id);
//!
//! store.close().await;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod users;

pub use context::UserStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://roster.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;
    use std::time::Duration;

    tracing::debug!(url = %database_url, "Creating pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30));

    // Every connection to an in-memory database gets its own empty database,
    // so keep exactly one alive for the lifetime of the pool.
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    tracing::debug!("Pool created");

    Ok(pool)
}
