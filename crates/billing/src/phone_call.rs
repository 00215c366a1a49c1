//! Billed phone calls.
//!
//! A [`PhoneCall`] is a pure value: a duration in whole seconds and a rate per minute. Both are
//! strictly positive once constructed, and every operator builds its result through
//! [`PhoneCall::new`] so the same checks apply.
//!
//! Arithmetic:
//! - `a + b` sums durations and requires both calls to share a rate
//! - `call * m` scales the rate only; the duration is kept as is

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul};

use ward_types::Locale;

use crate::{BillingError, BillingResult};

/// An immutable billed call.
#[derive(Clone, Copy, Debug)]
pub struct PhoneCall {
    time: i64,
    rate: f64,
}

impl PhoneCall {
    /// Creates a call of `time` seconds billed at `rate` per minute.
    ///
    /// # Errors
    ///
    /// - [`BillingError::InvalidDuration`] if `time` is not positive
    /// - [`BillingError::InvalidRate`] if `rate` is not a finite positive number
    pub fn new(time: i64, rate: f64) -> BillingResult<Self> {
        if time <= 0 {
            return Err(BillingError::InvalidDuration);
        }
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(BillingError::InvalidRate);
        }
        Ok(Self { time, rate })
    }

    /// Duration in seconds.
    pub fn time(&self) -> i64 {
        self.time
    }

    /// Rate per minute.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Cost of the call rounded to two decimal places (ties to even).
    pub fn cost(&self) -> f64 {
        let cost = self.time as f64 * self.rate / 60.0;
        (cost * 100.0).round_ties_even() / 100.0
    }

    /// Human-readable description in the given locale.
    pub fn describe(&self, locale: Locale) -> String {
        let rate = locale.format_decimal(self.rate);
        match locale {
            Locale::English => format!("Call: {} s at {} rub./min.", self.time, rate),
            Locale::Russian => format!("Разговор: {} с по {} руб./мин.", self.time, rate),
        }
    }

    /// Equality against an arbitrary, possibly missing value.
    ///
    /// # Errors
    ///
    /// - [`BillingError::NullArgument`] if `other` is `None`
    /// - [`BillingError::TypeMismatch`] if `other` is not a `PhoneCall`
    pub fn try_equals(&self, other: Option<&dyn Any>) -> BillingResult<bool> {
        let other = other.ok_or(BillingError::NullArgument)?;
        let other = other
            .downcast_ref::<PhoneCall>()
            .ok_or(BillingError::TypeMismatch)?;
        Ok(self == other)
    }

    /// Sums the durations of two calls billed at the same rate.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::IncompatibleRates`] if the rates differ, or
    /// [`BillingError::InvalidDuration`] if the total duration does not fit.
    pub fn checked_add(self, other: PhoneCall) -> BillingResult<PhoneCall> {
        if self.rate != other.rate {
            tracing::debug!(left = self.rate, right = other.rate, "rejected call addition");
            return Err(BillingError::IncompatibleRates {
                left: self.rate,
                right: other.rate,
            });
        }
        let time = self
            .time
            .checked_add(other.time)
            .ok_or(BillingError::InvalidDuration)?;
        PhoneCall::new(time, self.rate)
    }

    /// Scales the rate by `multiplier`, keeping the duration.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::InvalidMultiplier`] if `multiplier` is not a finite positive
    /// number.
    pub fn scaled(self, multiplier: f64) -> BillingResult<PhoneCall> {
        if !(multiplier > 0.0 && multiplier.is_finite()) {
            tracing::debug!(multiplier, "rejected call multiplier");
            return Err(BillingError::InvalidMultiplier);
        }
        PhoneCall::new(self.time, self.rate * multiplier)
    }
}

impl fmt::Display for PhoneCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(Locale::English))
    }
}

impl PartialEq for PhoneCall {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.rate == other.rate
    }
}

// Rates are finite and positive, so `==` on them is reflexive.
impl Eq for PhoneCall {}

impl Hash for PhoneCall {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.time.hash(state);
        self.rate.to_bits().hash(state);
    }
}

impl Add for PhoneCall {
    type Output = BillingResult<PhoneCall>;

    fn add(self, other: PhoneCall) -> Self::Output {
        self.checked_add(other)
    }
}

impl Mul<f64> for PhoneCall {
    type Output = BillingResult<PhoneCall>;

    fn mul(self, multiplier: f64) -> Self::Output {
        self.scaled(multiplier)
    }
}
