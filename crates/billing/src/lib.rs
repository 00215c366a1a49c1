//! Billing values for the ward system.
//!
//! This crate provides [`PhoneCall`], an immutable billed call duration and per-minute rate with
//! checked arithmetic. Every constructor and operator validates its result; failures are reported
//! as [`BillingError`] rather than producing an out-of-range value.

pub mod phone_call;

pub use phone_call::PhoneCall;

/// Errors returned by billing operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BillingError {
    #[error("call duration must be a positive whole number of seconds")]
    InvalidDuration,

    #[error("call rate must be a positive number")]
    InvalidRate,

    #[error("multiplier must be a positive number")]
    InvalidMultiplier,

    #[error("cannot compare a phone call with a missing value")]
    NullArgument,

    #[error("value is not a phone call")]
    TypeMismatch,

    #[error("cannot add calls with different rates ({left} and {right})")]
    IncompatibleRates { left: f64, right: f64 },
}

/// Type alias for Results that can fail with a [`BillingError`].
pub type BillingResult<T> = Result<T, BillingError>;
