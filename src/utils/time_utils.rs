use chrono::{DateTime, Local, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const S_IN_MIN: i64 = 60;
    /// Chart axis labels: time of day only
    pub const CHART_TIME_FORMAT: &str = "%H:%M:%S";
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Axis label for a sample, in the viewer's local time.
pub fn chart_label(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(TimeUtils::CHART_TIME_FORMAT)
        .to_string()
}

pub fn utc_to_string(timestamp: DateTime<Utc>) -> String {
    // Used for display purposes
    timestamp.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

/// Whole minutes spanned by `[oldest, newest]`.
pub fn span_minutes(oldest: DateTime<Utc>, newest: DateTime<Utc>) -> i64 {
    (newest - oldest).num_seconds() / TimeUtils::S_IN_MIN
}
