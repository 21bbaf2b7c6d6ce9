use crate::{create_pool, error::StorageError, run_migrations, users};
use async_trait::async_trait;
use roster_core::{
    error::Result,
    storage::UserRepository,
    types::{NewUser, User, UserId, UserPatch},
};
use sqlx::SqlitePool;

/// `SQLite`-backed user store
///
/// Opened explicitly at startup, passed to whoever needs it, and closed
/// explicitly at shutdown.
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Connect to `database_url` and bring the schema up to date
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn open(database_url: &str) -> std::result::Result<Self, StorageError> {
        let pool = create_pool(database_url).await?;
        run_migrations(&pool).await?;
        tracing::info!("User store ready");
        Ok(Self { pool })
    }

    /// Close every connection, waiting for in-flight queries
    ///
    /// Consumes the store so no handle to the closed pool survives.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("User store closed");
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: NewUser) -> Result<User> {
        users::create(&self.pool, user).await
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User> {
        users::get_by_id(&self.pool, id).await
    }

    async fn update(&self, id: &UserId, patch: UserPatch) -> Result<User> {
        users::update(&self.pool, id, patch).await
    }

    async fn delete(&self, id: &UserId) -> Result<()> {
        users::delete(&self.pool, id).await
    }
}
