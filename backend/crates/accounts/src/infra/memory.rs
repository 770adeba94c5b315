//! In-Memory OTP Challenge Store
//!
//! Challenges are deliberately not persisted: a process restart loses all
//! pending registrations, which is an accepted limitation of the design.
//! The map is owned by this service object and reached only through the
//! [`OtpChallengeStore`] trait; there is no ambient global state.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::entity::OtpChallenge;
use crate::domain::repository::{OtpChallengeStore, OtpVerification};
use crate::domain::value_object::{Email, OtpCode};
use crate::error::{AccountError, AccountResult};

/// Mutex-protected challenge map keyed by email.
///
/// Every operation takes the lock for the duration of the map access and
/// never across an await point, so operations on the same identity are
/// linearizable. The single lock serializes across identities too, which
/// is more than the contract requires but fine at this scale.
#[derive(Debug, Default)]
pub struct InMemoryOtpStore {
    entries: Mutex<HashMap<String, OtpChallenge>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AccountResult<std::sync::MutexGuard<'_, HashMap<String, OtpChallenge>>> {
        self.entries
            .lock()
            .map_err(|_| AccountError::Internal("OTP store lock poisoned".to_string()))
    }
}

impl OtpChallengeStore for InMemoryOtpStore {
    async fn put(&self, email: &Email, code: OtpCode, ttl: Duration) -> AccountResult<()> {
        let challenge = OtpChallenge::new(email.clone(), code, ttl);

        // Last write wins: a repeated registration attempt supersedes the
        // earlier challenge
        self.lock()?.insert(email.as_str().to_string(), challenge);

        Ok(())
    }

    async fn verify(&self, email: &Email, submitted: &str) -> AccountResult<OtpVerification> {
        let mut entries = self.lock()?;

        let outcome = match entries.get(email.as_str()) {
            None => OtpVerification::NotFound,
            Some(challenge) if challenge.is_expired() => {
                entries.remove(email.as_str());
                OtpVerification::Expired
            }
            Some(challenge) if !challenge.code.matches(submitted) => OtpVerification::Invalid,
            Some(_) => {
                // Single use: a match consumes the challenge
                entries.remove(email.as_str());
                OtpVerification::Valid
            }
        };

        Ok(outcome)
    }

    async fn remove(&self, email: &Email) -> AccountResult<()> {
        self.lock()?.remove(email.as_str());
        Ok(())
    }
}
