//! Application Layer
//!
//! Use cases orchestrating the registration and login flows.

pub mod config;
pub mod confirm_registration;
pub mod request_registration;
pub mod sign_in;

pub use confirm_registration::{
    ConfirmRegistrationInput, ConfirmRegistrationOutput, ConfirmRegistrationUseCase,
};
pub use request_registration::{RequestRegistrationInput, RequestRegistrationUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
