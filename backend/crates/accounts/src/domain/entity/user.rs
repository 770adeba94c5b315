//! User Entity
//!
//! The persisted account row. Created only after OTP verification
//! succeeds; never mutated or deleted by this module.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::value_object::email::Email;

/// A user account as stored in the persistent store.
///
/// The `id` is assigned by the store on insert, not minted here.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique, lowercased email
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: String,
    /// Optional mobile number
    pub mobile: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Account data ready for insertion (no id yet).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    pub password_hash: String,
    pub mobile: Option<String>,
}
