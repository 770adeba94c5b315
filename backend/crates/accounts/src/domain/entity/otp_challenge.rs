//! OTP Challenge Entity
//!
//! A pending one-time password verification: the (identity, code, expiry)
//! tuple created when registration is requested. Challenges live only in
//! process memory and are consumed on successful verification.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::value_object::email::Email;
use crate::domain::value_object::otp_code::OtpCode;

/// A pending OTP challenge for one identity.
///
/// One active challenge per email; a new registration attempt for the
/// same email overwrites the prior challenge (last write wins).
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    pub email: Email,
    pub code: OtpCode,
    pub issued_at: DateTime<Utc>,
    pub expires_at_ms: i64,
}

impl OtpChallenge {
    /// Create a new challenge expiring `ttl` from now.
    pub fn new(email: Email, code: OtpCode, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            email,
            code,
            issued_at: now,
            expires_at_ms: now.timestamp_millis() + ttl.as_millis() as i64,
        }
    }

    /// Check if the challenge has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}
