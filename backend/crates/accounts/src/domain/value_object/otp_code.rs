//! OTP Code Value Object
//!
//! The 6-digit numeric code proving control of an email address.

use kernel::error::app_error::{AppError, AppResult};

use platform::otp::{OTP_CODE_LEN, generate_code};

/// A 6-digit numeric one-time password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Generate a fresh random code.
    pub fn generate() -> Self {
        Self(generate_code())
    }

    /// Validate a submitted code's shape.
    pub fn new(code: impl Into<String>) -> AppResult<Self> {
        let code = code.into();

        if code.len() != OTP_CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::bad_request("Code must be 6 digits"));
        }

        Ok(Self(code))
    }

    /// Compare against a submitted code.
    pub fn matches(&self, submitted: &str) -> bool {
        self.0 == submitted
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_validates() {
        let code = OtpCode::generate();
        assert!(OtpCode::new(code.as_str()).is_ok());
    }

    #[test]
    fn test_shape_validation() {
        assert!(OtpCode::new("123456").is_ok());
        assert!(OtpCode::new("12345").is_err());
        assert!(OtpCode::new("1234567").is_err());
        assert!(OtpCode::new("12345a").is_err());
        assert!(OtpCode::new("").is_err());
    }

    #[test]
    fn test_matches() {
        let code = OtpCode::new("123456").unwrap();
        assert!(code.matches("123456"));
        assert!(!code.matches("000000"));
    }
}
