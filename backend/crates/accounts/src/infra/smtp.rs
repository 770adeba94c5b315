//! SMTP OTP Notifier
//!
//! Delivers OTP codes over SMTP. With no host configured the notifier
//! runs in no-op mode and only logs, which keeps development and tests
//! workable without mail infrastructure.

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

use crate::domain::repository::OtpNotifier;
use crate::domain::value_object::{Email, OtpCode};
use crate::error::{AccountError, AccountResult};

/// SMTP transport settings, read from the environment by the binary.
#[derive(Debug, Clone, Default)]
pub struct SmtpSettings {
    /// Relay host; empty means no-op mode
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    /// From address, e.g. "Accounts <no-reply@example.com>"
    pub from: String,
    pub use_starttls: bool,
}

/// Fire-and-forget OTP delivery over SMTP.
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn new(settings: &SmtpSettings) -> AccountResult<Self> {
        let from = settings
            .from
            .parse::<Mailbox>()
            .map_err(|e| AccountError::Internal(format!("Invalid SMTP from address: {}", e)))?;

        let transport = if settings.host.trim().is_empty() {
            tracing::warn!("SMTP host not configured; OTP notifier will operate in no-op mode");
            None
        } else {
            let builder = if settings.use_starttls {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            }
            .map_err(|e| {
                AccountError::Internal(format!("Failed to configure SMTP transport: {}", e))
            })?
            .port(settings.port);

            let builder = if let (Some(username), Some(password)) =
                (&settings.username, &settings.password)
            {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            } else {
                builder
            };

            Some(Arc::new(builder.build()))
        };

        Ok(Self { transport, from })
    }
}

impl OtpNotifier for SmtpNotifier {
    async fn deliver_code(&self, recipient: &Email, code: &OtpCode) -> AccountResult<()> {
        let Some(transport) = &self.transport else {
            // No-op mode: the code would otherwise be unreachable
            tracing::debug!(recipient = %recipient, code = %code.as_str(), "No-op OTP delivery");
            return Ok(());
        };

        let to = recipient
            .as_str()
            .parse::<Mailbox>()
            .map_err(|e| AccountError::Internal(format!("Invalid recipient address: {}", e)))?;

        let body = format!(
            "Your verification code is {}.\n\n\
             It expires in a few minutes. If you did not request this, \
             please ignore this email.",
            code.as_str()
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Your verification code")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| AccountError::Internal(format!("Failed to build email: {}", e)))?;

        transport.send(message).await.map_err(|e| {
            tracing::error!(recipient = %recipient, error = %e, "SMTP send failed");
            AccountError::DeliveryFailed
        })?;

        tracing::info!(recipient = %recipient, "OTP email sent");

        Ok(())
    }
}
