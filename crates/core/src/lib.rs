//! # Ward Core
//!
//! Core domain model for hospital ward records.
//!
//! This crate contains pure in-memory data operations:
//! - Patient records of several kinds, with validated stay dates and locale-collated ordering
//! - Three-line info blocks rendered from configurable labels
//! - Departments holding a deduplicated, insertion-ordered set of shared patient records
//!
//! **No I/O concerns**: argument parsing, environment handling and printing belong in `ward-cli`.

pub mod collation;
pub mod config;
pub mod constants;
pub mod department;
pub mod error;
pub mod id;
pub mod info;
pub mod labels;
pub mod patient;
pub mod validation;

pub use collation::NameCollator;
pub use config::CoreConfig;
pub use department::Department;
pub use error::{PatientError, PatientResult};
pub use id::PatientId;
pub use labels::InfoLabels;
pub use patient::{Patient, PatientKind, Stay};

// Re-export shared tag types so callers need a single dependency.
pub use ward_types::{Locale, ServiceType};
