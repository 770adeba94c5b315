//! Confirm Registration Use Case
//!
//! Second half of the registration flow: consumes the OTP challenge,
//! hashes the password, persists the account, and issues a session token.
//! The client re-submits the profile fields alongside the code; no
//! registration state is carried server-side between the two steps apart
//! from the challenge itself.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenService;
use uuid::Uuid;

use crate::application::config::AccountsConfig;
use crate::domain::entity::NewUser;
use crate::domain::repository::{OtpChallengeStore, OtpVerification, UserRepository};
use crate::domain::value_object::Email;
use crate::error::{AccountError, AccountResult};

/// Confirm registration input
pub struct ConfirmRegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mobile: Option<String>,
    pub otp: String,
}

/// Confirm registration output
#[derive(Debug)]
pub struct ConfirmRegistrationOutput {
    pub user_id: Uuid,
    pub token: String,
}

/// Confirm registration use case
pub struct ConfirmRegistrationUseCase<U, S>
where
    U: UserRepository,
    S: OtpChallengeStore,
{
    users: Arc<U>,
    otp_store: Arc<S>,
    tokens: TokenService,
    config: Arc<AccountsConfig>,
}

impl<U, S> ConfirmRegistrationUseCase<U, S>
where
    U: UserRepository,
    S: OtpChallengeStore,
{
    pub fn new(users: Arc<U>, otp_store: Arc<S>, config: Arc<AccountsConfig>) -> Self {
        let tokens = TokenService::new(&config.token_secret);
        Self {
            users,
            otp_store,
            tokens,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: ConfirmRegistrationInput,
    ) -> AccountResult<ConfirmRegistrationOutput> {
        let email = Email::new(input.email)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;

        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AccountError::Validation("Name cannot be empty".to_string()));
        }

        // Policy-checked before the challenge is touched: a rejected
        // password must not consume the single-use code
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AccountError::PasswordValidation(e.to_string()))?;

        // NotFound, Expired, and Invalid all collapse into one rejection;
        // the caller learns nothing about which it was
        match self.otp_store.verify(&email, &input.otp).await? {
            OtpVerification::Valid => {}
            outcome => {
                tracing::debug!(email = %email, ?outcome, "OTP verification rejected");
                return Err(AccountError::InvalidOtp);
            }
        }

        // Argon2 is deliberately slow; keep it off the async workers
        let password_hash = tokio::task::spawn_blocking(move || password.hash())
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))?
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let new_user = NewUser {
            name,
            email: email.clone(),
            password_hash: password_hash.as_phc_string().to_string(),
            mobile: input.mobile,
        };

        // The challenge is already consumed; if the insert loses a
        // uniqueness race the client restarts registration from scratch
        let user = self.users.insert(&new_user).await?;

        let token = self
            .tokens
            .issue(&user.id.to_string(), email.as_str(), self.config.token_ttl)?;

        tracing::info!(user_id = %user.id, email = %email, "Registration completed");

        Ok(ConfirmRegistrationOutput {
            user_id: user.id,
            token,
        })
    }
}
