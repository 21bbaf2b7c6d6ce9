use super::{list_users, Page};
use crate::form::{FieldInput, UserForm};
use roster_server_client::UserService;

const TITLE: &str = "Add User";

/// Fill an empty form, create the user, then show the list
///
/// Invalid input or a failed request keeps the form on screen.
pub async fn add_user<S: UserService + ?Sized>(service: &S, input: FieldInput) -> Page {
    let mut form = UserForm::default();
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

    match service.create_user(&payload).await {
        Ok(user) => {
            tracing::info!(id = %user.id, "User created");
            list_users(service).await
        }
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            Page::Form {
                title: TITLE,
                form,
                errors: Default::default(),
                failure: Some(e.to_string()),
            }
        }
    }
}
