//! One-Time Password Generation
//!
//! Produces the short-lived numeric codes used for email verification.
//! Codes are drawn from the OS CSPRNG; predictability within the
//! challenge's validity window would defeat the verification step.

use rand::Rng;
use rand::rngs::OsRng;

/// Number of digits in a generated code
pub const OTP_CODE_LEN: usize = 6;

/// Generate a 6-digit numeric code, uniform in 100000..=999999.
pub fn generate_code() -> String {
    let code: u32 = OsRng.gen_range(100_000..=999_999);
    code.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        for _ in 0..1000 {
            let code = generate_code();
            assert_eq!(code.len(), OTP_CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_codes_vary() {
        let first = generate_code();
        let varied = (0..100).any(|_| generate_code() != first);
        assert!(varied, "1000000-way collision 100 times is not randomness");
    }
}
