//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::token::Claims;

use crate::application::config::AccountsConfig;
use crate::application::{
    ConfirmRegistrationInput, ConfirmRegistrationUseCase, RequestRegistrationInput,
    RequestRegistrationUseCase, SignInInput, SignInUseCase,
};
use crate::domain::repository::{OtpChallengeStore, OtpNotifier, UserRepository};
use crate::error::AccountResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MeResponse, RegisterRequest, RegisterResponse, VerifyOtpRequest,
    VerifyOtpResponse,
};

/// Shared state for accounts handlers
pub struct AccountsAppState<U, S, N>
where
    U: UserRepository + Send + Sync + 'static,
    S: OtpChallengeStore + Send + Sync + 'static,
    N: OtpNotifier + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub otp_store: Arc<S>,
    pub notifier: Arc<N>,
    pub config: Arc<AccountsConfig>,
}

impl<U, S, N> Clone for AccountsAppState<U, S, N>
where
    U: UserRepository + Send + Sync + 'static,
    S: OtpChallengeStore + Send + Sync + 'static,
    N: OtpNotifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            otp_store: self.otp_store.clone(),
            notifier: self.notifier.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/accounts/register
pub async fn register<U, S, N>(
    State(state): State<AccountsAppState<U, S, N>>,
    Json(req): Json<RegisterRequest>,
) -> AccountResult<Json<RegisterResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    S: OtpChallengeStore + Send + Sync + 'static,
    N: OtpNotifier + Send + Sync + 'static,
{
    let use_case = RequestRegistrationUseCase::new(
        state.users.clone(),
        state.otp_store.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    let input = RequestRegistrationInput { email: req.email };

    use_case.execute(input).await?;

    Ok(Json(RegisterResponse {
        message: "OTP sent".to_string(),
    }))
}

// ============================================================================
// Verify OTP
// ============================================================================

/// POST /api/accounts/verify-otp
pub async fn verify_otp<U, S, N>(
    State(state): State<AccountsAppState<U, S, N>>,
    Json(req): Json<VerifyOtpRequest>,
) -> AccountResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    S: OtpChallengeStore + Send + Sync + 'static,
    N: OtpNotifier + Send + Sync + 'static,
{
    let use_case = ConfirmRegistrationUseCase::new(
        state.users.clone(),
        state.otp_store.clone(),
        state.config.clone(),
    );

    let input = ConfirmRegistrationInput {
        name: req.name,
        email: req.email,
        password: req.password,
        mobile: req.mobile,
        otp: req.otp,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(VerifyOtpResponse {
            user_id: output.user_id,
            token: output.token,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/accounts/login
pub async fn login<U, S, N>(
    State(state): State<AccountsAppState<U, S, N>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<Json<LoginResponse>>
where
    U: UserRepository + Send + Sync + 'static,
    S: OtpChallengeStore + Send + Sync + 'static,
    N: OtpNotifier + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.users.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}

// ============================================================================
// Me (protected resource example)
// ============================================================================

/// GET /api/accounts/me
///
/// Sits behind the token gate; the middleware has already verified the
/// bearer token and attached the decoded claims.
pub async fn me(Extension(claims): Extension<Claims>) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: claims.sub,
        email: claims.email,
        expires_at: claims.exp,
    })
}
