//! Repository and Notifier Traits
//!
//! Interfaces for persistence and delivery. Implementations live in the
//! infrastructure layer.

use std::time::Duration;

use crate::domain::entity::{NewUser, User};
use crate::domain::value_object::{Email, OtpCode};
use crate::error::AccountResult;

/// Outcome of checking a submitted code against the stored challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpVerification {
    /// Code matched; the challenge has been consumed (single use)
    Valid,
    /// Code mismatched; the challenge is retained for retries until expiry
    Invalid,
    /// Challenge past its expiry; it has been evicted
    Expired,
    /// No challenge recorded for this identity
    NotFound,
}

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new account; the store assigns the id.
    async fn insert(&self, user: &NewUser) -> AccountResult<User>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>>;

    /// Check if an email already has an account
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;
}

/// OTP challenge store trait
///
/// Operations on the same identity are linearizable with respect to each
/// other; cross-identity operations may proceed concurrently.
#[trait_variant::make(OtpChallengeStore: Send)]
pub trait LocalOtpChallengeStore {
    /// Record a challenge, overwriting any existing one for this identity.
    async fn put(&self, email: &Email, code: OtpCode, ttl: Duration) -> AccountResult<()>;

    /// Check a submitted code. See [`OtpVerification`] for the state
    /// transitions each outcome implies.
    async fn verify(&self, email: &Email, submitted: &str) -> AccountResult<OtpVerification>;

    /// Drop the challenge for this identity, if any. Used to invalidate a
    /// challenge whose delivery failed.
    async fn remove(&self, email: &Email) -> AccountResult<()>;
}

/// Outbound OTP delivery trait
#[trait_variant::make(OtpNotifier: Send)]
pub trait LocalOtpNotifier {
    /// Deliver the code to the identity's mailbox.
    async fn deliver_code(&self, recipient: &Email, code: &OtpCode) -> AccountResult<()>;
}
