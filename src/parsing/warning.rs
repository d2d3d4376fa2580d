use crate::parsing::error::ParseError;
use crate::parsing::timestamp::from_epoch_millis;
use crate::types::raw::RawWarning;
use crate::types::warning::{Severity, Warning, WarningType};
use chrono_tz::Tz;

/// Validates a raw warning and converts its instants into `tz`.
///
/// `title`, `description`, `type`, `severity`, `issuedAt`, `validFrom` and `validTo`
/// are required; `note` and `area` are optional.
///
/// # Errors
///
/// * [`ParseError::MissingWarningField`] for an absent required field.
/// * [`ParseError::InvalidSeverity`] for a severity outside 1 to 4.
/// * [`ParseError::InvalidWarningWindow`] when `validTo` precedes `validFrom`.
pub fn parse_warning(raw: &RawWarning, tz: Tz) -> Result<Warning, ParseError> {
    let title = raw
        .title
        .clone()
        .ok_or_else(|| ParseError::MissingWarningField {
            field: "title",
            title: String::new(),
        })?;
    let missing = |field: &'static str| ParseError::MissingWarningField {
        field,
        title: title.clone(),
    };

    let description = raw.description.clone().ok_or_else(|| missing("description"))?;
    let kind = raw.kind.as_deref().ok_or_else(|| missing("type"))?;
    let level = raw.severity.ok_or_else(|| missing("severity"))?;
    let issued_at = raw.issued_at.ok_or_else(|| missing("issuedAt"))?;
    let valid_from = raw.valid_from.ok_or_else(|| missing("validFrom"))?;
    let valid_to = raw.valid_to.ok_or_else(|| missing("validTo"))?;

    let severity = Severity::from_level(level).ok_or(ParseError::InvalidSeverity(level))?;

    if valid_from > valid_to {
        return Err(ParseError::InvalidWarningWindow {
            title,
            valid_from,
            valid_to,
        });
    }

    Ok(Warning {
        description,
        note: raw.note.clone(),
        area: raw.area.clone(),
        kind: WarningType::parse(kind),
        severity,
        issued_at: from_epoch_millis(issued_at, tz)?,
        valid_from: from_epoch_millis(valid_from, tz)?,
        valid_to: from_epoch_millis(valid_to, tz)?,
        title,
    })
}

/// Decodes and validates one entry of the warnings document.
///
/// # Errors
///
/// [`ParseError::Json`] when the entry has the wrong shape, otherwise as
/// [`parse_warning`].
pub fn parse_warning_value(value: &serde_json::Value, tz: Tz) -> Result<Warning, ParseError> {
    parse_warning(&RawWarning::from_value(value)?, tz)
}

/// Parses a key of the hour-scoped warnings map into epoch milliseconds.
pub fn parse_warning_key(key: &str) -> Result<i64, ParseError> {
    key.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidWarningKey(key.to_string()))
}
