//! Constants used throughout the ward core crate.
//!
//! This module holds the rendering formats so that every info block agrees on them.

/// `chrono` format for admission and discharge dates (`dd.MM.yyyy`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// `chrono` format for the exact time-of-day of a day-patient visit (`HH:mm:ss`).
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Number of lines in a rendered info block.
pub const INFO_LINES: usize = 3;
