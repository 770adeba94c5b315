//! Infrastructure Layer
//!
//! Concrete implementations of the domain seams: PostgreSQL for the
//! users relation, an in-process map for OTP challenges, SMTP for
//! delivery.

pub mod memory;
pub mod postgres;
pub mod smtp;
