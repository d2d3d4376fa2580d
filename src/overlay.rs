//! Attaches warnings from a separately fetched warnings document to the current
//! conditions, the hourly records and the daily records of a [`Location`].
//!
//! Hours (and the current conditions) match hour-scoped warnings by exact epoch
//! millisecond timestamp. Days match day-scoped warnings when the warning starts or
//! ends on that date; a warning spanning three or more days is not attached to the
//! days strictly in between.
//!
//! The pass is one-shot. Running it twice on the same location attaches every
//! warning twice.

use crate::parsing::timestamp::{date_key, date_key_of};
use crate::parsing::warning::{parse_warning_key, parse_warning_value};
use crate::types::location::Location;
use crate::types::raw::WarningsFeed;
use crate::types::warning::Warning;
use crate::types::weather_data::hourly::Hour;
use chrono_tz::Tz;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Counts of what a single overlay pass attached and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayReport {
    /// Hourly records (including the current conditions) that received warnings.
    pub hours: usize,
    /// Daily records that received warnings.
    pub days: usize,
    /// Feed entries dropped because they could not be parsed.
    pub skipped: usize,
}

/// Attaches the warnings of `feed` to `location`.
///
/// A malformed warning or feed key is logged and skipped; the remaining entries are
/// still attached.
pub fn apply_warnings(location: &mut Location, feed: &WarningsFeed) -> OverlayReport {
    let tz = location.timezone;
    let mut report = OverlayReport::default();

    let by_timestamp = index_hour_warnings(feed, tz, &mut report);
    if let Some(currently) = location.currently.as_mut() {
        if attach_to_hour(currently, &by_timestamp) {
            report.hours += 1;
        }
    }
    for hour in location.hourly.values_mut() {
        if attach_to_hour(hour, &by_timestamp) {
            report.hours += 1;
        }
    }

    let day_scoped = parse_all(&feed.location_warnings, tz, &mut report);
    for day in location.daily.values_mut() {
        let key = date_key_of(day.date);
        let matching: Vec<Arc<Warning>> = day_scoped
            .iter()
            .filter(|warning| touches_day(warning, &key))
            .cloned()
            .collect();
        if !matching.is_empty() {
            day.attach_warnings(&matching);
            report.days += 1;
        }
    }

    debug!(
        "Warning overlay attached to {} hours and {} days, skipped {} entries",
        report.hours, report.days, report.skipped
    );
    report
}

/// Whether the warning starts or ends on the date with key `day_key`.
fn touches_day(warning: &Warning, day_key: &str) -> bool {
    date_key(&warning.valid_from) == day_key || date_key(&warning.valid_to) == day_key
}

fn attach_to_hour(hour: &mut Hour, by_timestamp: &HashMap<i64, Vec<Arc<Warning>>>) -> bool {
    match by_timestamp.get(&hour.timestamp.timestamp_millis()) {
        Some(warnings) if !warnings.is_empty() => {
            hour.attach_warnings(warnings);
            true
        }
        _ => false,
    }
}

/// Parses the hour-scoped map once, so records sharing a timestamp share the same
/// [`Warning`] instances.
fn index_hour_warnings(
    feed: &WarningsFeed,
    tz: Tz,
    report: &mut OverlayReport,
) -> HashMap<i64, Vec<Arc<Warning>>> {
    let mut by_timestamp: HashMap<i64, Vec<Arc<Warning>>> = HashMap::new();
    for (key, raw_warnings) in &feed.warnings {
        let millis = match parse_warning_key(key) {
            Ok(millis) => millis,
            Err(e) => {
                warn!("Skipping {} warnings: {}", raw_warnings.len(), e);
                report.skipped += raw_warnings.len();
                continue;
            }
        };
        let parsed = parse_all(raw_warnings, tz, report);
        by_timestamp.entry(millis).or_default().extend(parsed);
    }
    by_timestamp
}

fn parse_all(
    raw_warnings: &[serde_json::Value],
    tz: Tz,
    report: &mut OverlayReport,
) -> Vec<Arc<Warning>> {
    raw_warnings
        .iter()
        .filter_map(|raw| match parse_warning_value(raw, tz) {
            Ok(warning) => Some(Arc::new(warning)),
            Err(e) => {
                warn!("Skipping malformed warning: {}", e);
                report.skipped += 1;
                None
            }
        })
        .collect()
}

impl Location {
    /// Attaches warnings from `feed`, see [`apply_warnings`].
    pub fn apply_warnings(&mut self, feed: &WarningsFeed) -> OverlayReport {
        apply_warnings(self, feed)
    }
}
