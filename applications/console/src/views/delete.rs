use super::{list_users, Page};
use roster_core::types::UserId;
use roster_server_client::UserService;

/// Delete a user, then show the list
///
/// The list is always fetched fresh, so a user whose delete failed is
/// still shown; the failure is logged and reported as a notice.
pub async fn delete_user<S: UserService + ?Sized>(service: &S, id: &UserId) -> Page {
    let failure = match service.delete_user(id).await {
        Ok(()) => {
            tracing::info!(%id, "User deleted");
            None
        }
        Err(e) => {
            tracing::error!(%id, "Failed to delete user: {}", e);
            Some(format!("Could not delete {}: {}", id, e))
        }
    };

    match list_users(service).await {
        Page::List { users, .. } => Page::List {
            users,
            notice: failure,
        },
        other => other,
    }
}
