//! The fixed user directory served by `/api/users`.
//!
//! This is demo data: the records are compile-time constants assembled into
//! owned values once at startup and shared read-only across handlers.

use serde::{Deserialize, Serialize};

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable numeric id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role label shown in the frontend.
    pub role: String,
}

impl User {
    fn new(id: u32, name: &str, email: &str, role: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }
}

/// The three fixed demo records.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Alice Johnson", "alice@example.com", "admin"),
        User::new(2, "Bob Smith", "bob@example.com", "developer"),
        User::new(3, "Carol Williams", "carol@example.com", "viewer"),
    ]
}
