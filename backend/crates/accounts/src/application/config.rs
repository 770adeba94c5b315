//! Application Configuration
//!
//! Configuration for the accounts application layer. The token secret is
//! passed in here once at startup and shared read-only afterwards.

use std::time::Duration;

/// Accounts application configuration
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Signing secret for session tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Session token TTL
    pub token_ttl: Duration,
    /// OTP challenge TTL
    pub otp_ttl: Duration,
    /// Upper bound on one OTP delivery attempt
    pub notifier_timeout: Duration,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            otp_ttl: Duration::from_secs(5 * 60),      // 5 minutes
            notifier_timeout: Duration::from_secs(10),
        }
    }
}

impl AccountsConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }
}
