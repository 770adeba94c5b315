//! Accounts Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use platform::token::TokenService;

use crate::application::config::AccountsConfig;
use crate::domain::repository::{OtpChallengeStore, OtpNotifier, UserRepository};
use crate::infra::memory::InMemoryOtpStore;
use crate::infra::postgres::PgUserRepository;
use crate::infra::smtp::SmtpNotifier;
use crate::presentation::handlers::{self, AccountsAppState};
use crate::presentation::middleware::{TokenGateState, require_token};

/// Create the accounts router with the PostgreSQL repository and SMTP
/// notifier. Owns a fresh in-memory OTP store.
pub fn accounts_router(
    users: PgUserRepository,
    notifier: SmtpNotifier,
    config: AccountsConfig,
) -> Router {
    accounts_router_generic(users, InMemoryOtpStore::new(), notifier, config)
}

/// Create a generic accounts router for any seam implementations
pub fn accounts_router_generic<U, S, N>(
    users: U,
    otp_store: S,
    notifier: N,
    config: AccountsConfig,
) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: OtpChallengeStore + Send + Sync + 'static,
    N: OtpNotifier + Send + Sync + 'static,
{
    let gate = TokenGateState {
        tokens: TokenService::new(&config.token_secret),
    };

    let state = AccountsAppState {
        users: Arc::new(users),
        otp_store: Arc::new(otp_store),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(axum::middleware::from_fn(move |req, next| {
            require_token(gate.clone(), req, next)
        }));

    Router::new()
        .route("/register", post(handlers::register::<U, S, N>))
        .route("/verify-otp", post(handlers::verify_otp::<U, S, N>))
        .route("/login", post(handlers::login::<U, S, N>))
        .merge(protected)
        .with_state(state)
}
