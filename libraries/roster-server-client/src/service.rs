//! Abstraction over the user API so callers can swap the transport.

use crate::error::Result;
use async_trait::async_trait;
use roster_core::types::{User, UserId, UserPayload};

/// One method per API route.
#[async_trait]
pub trait UserService: Send + Sync {
    /// GET /users
    async fn get_users(&self) -> Result<Vec<User>>;

    /// GET /user/:id
    async fn get_user_by_id(&self, id: &UserId) -> Result<User>;

    /// POST /add-user
    async fn create_user(&self, user: &UserPayload) -> Result<User>;

    /// PUT /update-user/:id
    async fn update_user(&self, id: &UserId, user: &UserPayload) -> Result<User>;

    /// DELETE /delete-user/:id
    async fn delete_user(&self, id: &UserId) -> Result<()>;
}
