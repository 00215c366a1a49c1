//! Shared leaf types for the ward record crates.
//!
//! These are small tag values with no payload that every other crate depends on:
//! - [`ServiceType`]: the billing category of a patient stay
//! - [`Locale`]: the label preset used when rendering human-readable text

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing shared tag values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypesError {
    /// The input did not name a known service type.
    #[error("unknown service type: {0}")]
    UnknownServiceType(String),
    /// The input did not name a supported locale.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// Result type for tag parsing.
pub type TypesResult<T> = Result<T, TypesError>;

/// Billing category of a patient stay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ServiceType {
    /// Covered by an insurance policy.
    #[default]
    Insurance,
    /// Paid by the patient.
    Paid,
}

impl ServiceType {
    /// Convert to the wire string.
    pub fn to_wire(self) -> &'static str {
        match self {
            ServiceType::Insurance => "insurance",
            ServiceType::Paid => "paid",
        }
    }

    /// Parse from a wire string, ignoring ASCII case.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insurance" => Some(ServiceType::Insurance),
            "paid" => Some(ServiceType::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_wire())
    }
}

impl FromStr for ServiceType {
    type Err = TypesError;

    fn from_str(s: &str) -> TypesResult<Self> {
        Self::from_wire(s).ok_or_else(|| TypesError::UnknownServiceType(s.to_owned()))
    }
}

impl serde::Serialize for ServiceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_wire())
    }
}

impl<'de> serde::Deserialize<'de> for ServiceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Label preset used for rendered text.
///
/// The locale decides the wording of info blocks and the decimal separator used when
/// rendering fractional amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl Locale {
    /// Short language code (`en`, `ru`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Russian => "ru",
        }
    }

    /// Decimal separator conventionally used by this locale.
    pub fn decimal_separator(self) -> char {
        match self {
            Locale::English => '.',
            Locale::Russian => ',',
        }
    }

    /// Render a float with the shortest round-trip representation and this locale's
    /// decimal separator. Whole numbers carry no fractional part.
    pub fn format_decimal(self, value: f64) -> String {
        let rendered = value.to_string();
        match self.decimal_separator() {
            '.' => rendered,
            sep => rendered.replace('.', &sep.to_string()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = TypesError;

    fn from_str(s: &str) -> TypesResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ru" | "russian" => Ok(Locale::Russian),
            _ => Err(TypesError::UnknownLocale(s.to_owned())),
        }
    }
}

impl serde::Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
