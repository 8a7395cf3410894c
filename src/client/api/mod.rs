//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login against `/User/Authentication`
//! - [`RevueApi`] - Revue create/list/edit/delete

mod auth;
mod revue;

pub use auth::AuthApi;
pub use revue::RevueApi;
