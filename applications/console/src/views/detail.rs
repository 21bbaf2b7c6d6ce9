use super::Page;
use roster_core::types::UserId;
use roster_server_client::UserService;

/// Fetch one user for read-only display
pub async fn show_user<S: UserService + ?Sized>(service: &S, id: &UserId) -> Page {
    tracing::debug!(%id, "Loading user");
    match service.get_user_by_id(id).await {
        Ok(user) => Page::Detail(user),
        Err(e) => {
            tracing::error!(%id, "Failed to fetch user: {}", e);
            Page::NotFound
        }
    }
}
