//! Views: each one wraps a single adapter call and produces a [`Page`].

mod add;
mod delete;
mod detail;
mod edit;
mod list;

pub use add::add_user;
pub use delete::delete_user;
pub use detail::show_user;
pub use edit::edit_user;
pub use list::list_users;

use crate::form::UserForm;
use roster_core::types::User;
use roster_core::ValidationErrors;

/// What the terminal shows after a view has run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// All users, with an optional one-line notice above the table
    List {
        users: Vec<User>,
        notice: Option<String>,
    },
    /// Read-only view of one user
    Detail(User),
    /// The requested user could not be loaded
    NotFound,
    /// A form that was not submitted, with the reason
    Form {
        title: &'static str,
        form: UserForm,
        errors: ValidationErrors,
        failure: Option<String>,
    },
}

impl Page {
    pub(crate) fn list(users: Vec<User>) -> Self {
        Page::List {
            users,
            notice: None,
        }
    }
}
