//! Data models for the filter builder
//!
//! This module provides the synopsis returned by the synopsis service,
//! the filters a user assembles against it, and the signed-in user.

mod synopsis;
mod filter;
mod user;

pub use synopsis::{ColType, Column, Synopsis, SynopsisError, SynopsisResponse};
pub use filter::{Filter, FilterId, FilterType, ScoreType};
pub use user::User;
