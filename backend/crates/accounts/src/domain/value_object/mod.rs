pub mod email;
pub mod otp_code;

pub use email::Email;
pub use otp_code::OtpCode;
