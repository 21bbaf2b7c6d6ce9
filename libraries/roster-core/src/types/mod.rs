mod ids;
mod user;

pub use ids::UserId;
pub use user::{NewUser, User, UserPatch, UserPayload};
