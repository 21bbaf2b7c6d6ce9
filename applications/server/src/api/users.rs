/// User CRUD API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use roster_core::types::{User, UserId, UserPayload};

/// POST /api/add-user
/// Create a user from the submitted fields
pub async fn create_user(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let Json(payload) = body?;
    let new_user = payload.into_new_user()?;
    let user = app_state.users.create(new_user).await?;
    tracing::info!(id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.get_all().await?;
    Ok(Json(users))
}

/// GET /api/user/:id
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state.users.get_by_id(&UserId::new(id)).await?;
    Ok(Json(user))
}

/// PUT /api/update-user/:id
/// Apply only the fields present in the body
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: std::result::Result<Json<UserPayload>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(payload) = body?;
    let user = app_state
        .users
        .update(&UserId::new(id), payload.into_patch())
        .await?;
    tracing::info!(id = %user.id, "User updated");
    Ok(Json(user))
}

/// DELETE /api/delete-user/:id
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let id = UserId::new(id);
    app_state.users.delete(&id).await?;
    tracing::info!(%id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
