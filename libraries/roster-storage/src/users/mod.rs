//! User document queries

use chrono::{DateTime, Utc};
use roster_core::{
    error::Result,
    types::{NewUser, User, UserId, UserPatch},
    validation::fields,
    RosterError,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const USER_COLUMNS: &str =
    "id, name, email, mobile, age, interests, created_at, updated_at";

/// Insert a new user
///
/// The fields are validated and normalized first. The store assigns the
/// identifier and both timestamps.
pub async fn create(pool: &SqlitePool, new_user: NewUser) -> Result<User> {
    let user = User::new(new_user.validate()?);
    let interests = serde_json::to_string(&user.interests)?;

    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, mobile, age, interests, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(user.phone)
    .bind(i64::from(user.age))
    .bind(interests)
    .bind(user.created_at.timestamp_millis())
    .bind(user.updated_at.timestamp_millis())
    .execute(pool)
    .await
    .map_err(map_write_error)?;

    tracing::debug!(id = %user.id, "Created user");
    Ok(user)
}

/// Get all users, oldest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, rowid"
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(user_from_row).collect()
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<User> {
    let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RosterError::not_found("User", id.as_str()))?;

    user_from_row(&row)
}

/// Apply a partial update
///
/// Only the fields present in `patch` change, plus `updated_at`.
pub async fn update(pool: &SqlitePool, id: &UserId, patch: UserPatch) -> Result<User> {
    let patch = patch.validate()?;
    let mut user = get_by_id(pool, id).await?;

    patch.apply_to(&mut user);
    user.touch();

    let interests = serde_json::to_string(&user.interests)?;
    let result = sqlx::query(
        r#"
        UPDATE users
        SET name = ?, email = ?, mobile = ?, age = ?, interests = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(user.phone)
    .bind(i64::from(user.age))
    .bind(interests)
    .bind(user.updated_at.timestamp_millis())
    .bind(id)
    .execute(pool)
    .await
    .map_err(map_write_error)?;

    // Deleted between the read and the write
    if result.rows_affected() == 0 {
        return Err(RosterError::not_found("User", id.as_str()));
    }

    tracing::debug!(id = %id, "Updated user");
    Ok(user)
}

/// Delete a user permanently
pub async fn delete(pool: &SqlitePool, id: &UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RosterError::not_found("User", id.as_str()));
    }

    tracing::debug!(id = %id, "Deleted user");
    Ok(())
}

fn user_from_row(row: &SqliteRow) -> Result<User> {
    let age = u32::try_from(row.try_get::<i64, _>("age")?)
        .map_err(|_| RosterError::storage("Invalid age"))?;
    let interests: Vec<String> = serde_json::from_str(row.try_get::<&str, _>("interests")?)?;

    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("mobile")?,
        age,
        interests,
        created_at: timestamp(row.try_get("created_at")?)?,
        updated_at: timestamp(row.try_get("updated_at")?)?,
    })
}

fn timestamp(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| RosterError::storage("Invalid timestamp"))
}

/// The unique index on `email` is the only constraint a write can trip.
fn map_write_error(err: sqlx::Error) -> RosterError {
    let duplicate = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if duplicate {
        RosterError::validation(fields::EMAIL, "Email is already in use")
    } else {
        err.into()
    }
}
