//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Signed session tokens (JWT, HS256)
//! - One-time password generation

pub mod otp;
pub mod password;
pub mod token;
