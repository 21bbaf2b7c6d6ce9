use super::{list_users, Page};
use crate::form::{FieldInput, UserForm};
use roster_core::types::UserId;
use roster_server_client::UserService;

const TITLE: &str = "Edit User";

/// Load a user into the form, apply `input`, and save
///
/// A user that cannot be loaded sends the caller back to the list.
pub async fn edit_user<S: UserService + ?Sized>(
    service: &S,
    id: &UserId,
    input: FieldInput,
) -> Page {
    let user = match service.get_user_by_id(id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(%id, "Failed to fetch user: {}", e);
            return list_users(service).await;
        }
    };

    let mut form = UserForm::from_user(&user);
    input.apply_to(&mut form);

    let payload = match form.submit() {
        Ok(payload) => payload,
        Err(errors) => {
            return Page::Form {
                title: TITLE,
                form,
                errors,
                failure: None,
            }
        }
    };

    match service.update_user(id, &payload).await {
        Ok(_) => {
            tracing::info!(%id, "User updated");
            list_users(service).await
        }
        Err(e) => {
            tracing::error!(%id, "Failed to update user: {}", e);
            Page::Form {
                title: TITLE,
                form,
                errors: Default::default(),
                failure: Some(e.to_string()),
            }
        }
    }
}
