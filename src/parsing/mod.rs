//! Conversion of raw service documents into typed records.

pub mod error;
pub mod location;
pub mod timestamp;
pub mod warning;

pub use error::ParseError;
pub use location::{parse_hour, resolve_timezone};
pub use warning::{parse_warning, parse_warning_key, parse_warning_value};
