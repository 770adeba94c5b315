//! Request Registration Use Case
//!
//! First half of the registration flow: checks the email is free,
//! records an OTP challenge, and asks the notifier to deliver the code.
//! The code itself never leaves through this use case's output.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::repository::{OtpChallengeStore, OtpNotifier, UserRepository};
use crate::domain::value_object::{Email, OtpCode};
use crate::error::{AccountError, AccountResult};

/// Request registration input
pub struct RequestRegistrationInput {
    pub email: String,
}

/// Request registration use case
pub struct RequestRegistrationUseCase<U, S, N>
where
    U: UserRepository,
    S: OtpChallengeStore,
    N: OtpNotifier,
{
    users: Arc<U>,
    otp_store: Arc<S>,
    notifier: Arc<N>,
    config: Arc<AccountsConfig>,
}

impl<U, S, N> RequestRegistrationUseCase<U, S, N>
where
    U: UserRepository,
    S: OtpChallengeStore,
    N: OtpNotifier,
{
    pub fn new(
        users: Arc<U>,
        otp_store: Arc<S>,
        notifier: Arc<N>,
        config: Arc<AccountsConfig>,
    ) -> Self {
        Self {
            users,
            otp_store,
            notifier,
            config,
        }
    }

    pub async fn execute(&self, input: RequestRegistrationInput) -> AccountResult<()> {
        let email = Email::new(input.email)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;

        // Uniqueness is checked before any OTP is issued
        if self.users.exists_by_email(&email).await? {
            return Err(AccountError::AlreadyRegistered);
        }

        let code = OtpCode::generate();
        self.otp_store
            .put(&email, code.clone(), self.config.otp_ttl)
            .await?;

        // Delivery is bounded; an unbounded SMTP wait would pin the request.
        let delivery = tokio::time::timeout(
            self.config.notifier_timeout,
            self.notifier.deliver_code(&email, &code),
        )
        .await;

        let failed = match delivery {
            Ok(Ok(())) => false,
            Ok(Err(e)) => {
                tracing::error!(email = %email, error = %e, "OTP delivery failed");
                true
            }
            Err(_) => {
                tracing::error!(email = %email, "OTP delivery timed out");
                true
            }
        };

        if failed {
            // Drop the challenge so a stale, unconfirmable code does not
            // block re-registration until it expires naturally.
            self.otp_store.remove(&email).await?;
            return Err(AccountError::DeliveryFailed);
        }

        tracing::info!(email = %email, "OTP challenge issued");

        Ok(())
    }
}
