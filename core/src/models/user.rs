//! Authenticated account

use serde::{Serialize, Deserialize};

/// The signed-in user as reported by the current-user endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier
    pub id: String,

    /// Account email address
    pub email: String,
}
