//! Text rendering of [`Page`]s.

use crate::views::Page;
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use roster_core::types::User;
use roster_core::validation::fields;
use std::fmt::Write;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Actions")]
    actions: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            id: user.id.to_string(),
            actions: format!(
                "roster show {id} | roster edit {id} | roster delete {id}",
                id = user.id
            ),
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn field(label: &'static str, value: impl Into<String>) -> FieldRow {
    FieldRow {
        label,
        value: value.into(),
    }
}

/// Render a page as terminal text
pub fn render(page: &Page) -> String {
    match page {
        Page::List { users, notice } => render_list(users, notice.as_deref()),
        Page::Detail(user) => render_detail(user),
        Page::NotFound => format!("{}\n", "User not found".red().bold()),
        Page::Form {
            title,
            form,
            errors,
            failure,
        } => {
            let mut out = format!("{}\n", title.bold());
            if let Some(failure) = failure {
                let _ = writeln!(out, "{}", failure.red());
            }
            let rows = vec![
                form_row("Name", &form.name, errors.message_for(fields::NAME)),
                form_row("Email", &form.email, errors.message_for(fields::EMAIL)),
                form_row("Mobile", &form.phone, errors.message_for(fields::PHONE)),
                form_row("Age", &form.age, errors.message_for(fields::AGE)),
                form_row(
                    "Interests (comma-separated)",
                    &form.interests,
                    errors.message_for(fields::INTERESTS),
                ),
            ];
            let _ = writeln!(out, "{}", Table::new(rows).with(Style::rounded()));
            out
        }
    }
}

fn form_row(label: &'static str, value: &str, error: Option<&str>) -> FieldRow {
    match error {
        Some(message) => field(label, format!("{} {}", value, message.red())),
        None => field(label, value),
    }
}

fn render_list(users: &[User], notice: Option<&str>) -> String {
    let mut out = format!("{}\n", "Users".bold());
    if let Some(notice) = notice {
        let _ = writeln!(out, "{}", notice.yellow());
    }
    if users.is_empty() {
        let _ = writeln!(out, "{}", "No users found".bright_black());
        return out;
    }
    let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
    let _ = writeln!(out, "{}", Table::new(rows).with(Style::rounded()));
    out
}

fn render_detail(user: &User) -> String {
    let personal = vec![
        field("Name", user.name.as_str()),
        field("Email", user.email.as_str()),
        field("Mobile", user.phone.to_string()),
        field("Age", user.age.to_string()),
        field("Interests", user.interests.join(", ")),
    ];
    let system = vec![
        field("ID", user.id.to_string()),
        field("Created At", local_time(user.created_at)),
        field("Updated At", local_time(user.updated_at)),
    ];

    let mut out = format!("{}\n\n", "User Details".bold());
    let _ = writeln!(out, "{}", "Personal Information".cyan());
    let _ = writeln!(out, "{}\n", Table::new(personal).with(Style::rounded()));
    let _ = writeln!(out, "{}", "System Information".cyan());
    let _ = writeln!(out, "{}", Table::new(system).with(Style::rounded()));
    out
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
