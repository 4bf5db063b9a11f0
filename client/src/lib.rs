//! Client library for the synopsis service
//!
//! This library fetches dataset synopses with bounded retry, looks up the
//! signed-in user, and runs filter form sessions on top of the core reducer.

pub mod auth;
pub mod error;
pub mod session;
pub mod synopsis;
pub mod user;

pub use auth::{StaticToken, TokenProvider};
pub use error::{FetchError, Result};
pub use session::{fetch_action, load_into, FormSession, StoreHandle};
pub use synopsis::SynopsisClient;
pub use user::UserClient;
