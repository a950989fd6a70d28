//! Domain models for the storefront.
//!
//! - [`user`] - Users and credentials exchanged with the authentication service
//! - [`session`] - The session context stored between requests

pub mod session;
pub mod user;

pub use session::{AuthToken, CurrentUser, keys as session_keys};
pub use user::{Credentials, LoginSession, User};
