use super::Page;
use roster_server_client::UserService;

/// Fetch every user; on failure log and show an empty list
pub async fn list_users<S: UserService + ?Sized>(service: &S) -> Page {
    tracing::debug!("Loading users");
    match service.get_users().await {
        Ok(users) => Page::list(users),
        Err(e) => {
            tracing::error!("Failed to fetch users: {}", e);
            Page::list(Vec::new())
        }
    }
}
