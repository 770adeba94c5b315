//! Sign In Use Case
//!
//! Authenticates a returning user and issues a session token. An unknown
//! email and a wrong password are rejected identically so callers cannot
//! enumerate accounts.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};
use platform::token::TokenService;

use crate::application::config::AccountsConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{AccountError, AccountResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    users: Arc<U>,
    tokens: TokenService,
    config: Arc<AccountsConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(users: Arc<U>, config: Arc<AccountsConfig>) -> Self {
        let tokens = TokenService::new(&config.token_secret);
        Self {
            users,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AccountResult<SignInOutput> {
        // A malformed email cannot match an account; same rejection
        let email = Email::new(input.email).map_err(|_| AccountError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AccountError::InvalidCredentials)?;

        // A stored hash that fails to parse verifies false (fails closed)
        let stored_hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || {
            match HashedPassword::from_phc_string(stored_hash) {
                Ok(hash) => hash.verify(&password),
                Err(_) => false,
            }
        })
        .await
        .map_err(|e| AccountError::Internal(e.to_string()))?;

        if !verified {
            return Err(AccountError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&user.id.to_string(), email.as_str(), self.config.token_ttl)?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(SignInOutput { token })
    }
}
