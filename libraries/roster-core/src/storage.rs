//! Repository trait for User documents

use crate::error::Result;
use crate::types::{NewUser, User, UserId, UserPatch};
use async_trait::async_trait;

/// Mediates every read and write of User documents
///
/// Implementations validate input before writing and enforce email
/// uniqueness, reporting violations as `RosterError::Validation`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the ID and both timestamps
    async fn create(&self, user: NewUser) -> Result<User>;

    /// All users, oldest first
    async fn get_all(&self) -> Result<Vec<User>>;

    /// Fails with `NotFound` for an unknown ID
    async fn get_by_id(&self, id: &UserId) -> Result<User>;

    /// Apply `patch` and touch `updated_at`
    async fn update(&self, id: &UserId, patch: UserPatch) -> Result<User>;

    /// Hard delete
    async fn delete(&self, id: &UserId) -> Result<()>;
}
