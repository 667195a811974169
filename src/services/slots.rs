use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use chrono_tz::Tz;

use crate::errors::AppError;

/// Every appointment occupies exactly this many minutes. The webhook and the
/// shop hours in the prompt both assume it.
pub const SLOT_MINUTES: i64 = 30;

const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl SlotWindow {
    /// Parses an ISO-8601 start time and builds the 30 minute window in `tz`.
    pub fn starting_at(raw: &str, tz: Tz) -> Result<Self, AppError> {
        let start = parse_start_time(raw, tz)?;
        Ok(Self {
            start,
            end: start + Duration::minutes(SLOT_MINUTES),
        })
    }

    pub fn start_iso(&self) -> String {
        iso(&self.start)
    }

    pub fn end_iso(&self) -> String {
        iso(&self.end)
    }

    pub fn date(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn start_clock(&self) -> String {
        self.start.format("%H:%M:%S%.f").to_string()
    }

    pub fn end_clock(&self) -> String {
        self.end.format("%H:%M:%S%.f").to_string()
    }
}

/// Times with an offset are converted into `tz`; times without one are read
/// as wall-clock time in `tz`. A bare date means midnight.
pub fn parse_start_time(raw: &str, tz: Tz) -> Result<DateTime<Tz>, AppError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&tz));
    }

    let zulu = raw
        .strip_suffix('Z')
        .or_else(|| raw.strip_suffix('z'))
        .map(|rest| format!("{rest}+0000"));
    let with_offset = zulu.as_deref().unwrap_or(raw);
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(with_offset, fmt).ok())
    {
        return Ok(dt.with_timezone(&tz));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| AppError::InvalidTime(format!("not an ISO-8601 date-time: {raw}")))?;

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(AppError::InvalidTime(format!(
            "{raw} does not exist in {}",
            tz.name()
        ))),
    }
}

fn iso(dt: &DateTime<Tz>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Paris;

    #[test]
    fn test_window_from_offset_time() {
        let slot = SlotWindow::starting_at("2025-10-20T14:00:00+02:00", Paris).unwrap();
        assert_eq!(slot.start_iso(), "2025-10-20T14:00:00+02:00");
        assert_eq!(slot.end_iso(), "2025-10-20T14:30:00+02:00");
        assert_eq!(slot.date(), "2025-10-20");
        assert_eq!(slot.start_clock(), "14:00:00");
        assert_eq!(slot.end_clock(), "14:30:00");
    }

    #[test]
    fn test_utc_input_converted_to_shop_time() {
        let slot = SlotWindow::starting_at("2025-10-20T12:00:00Z", Paris).unwrap();
        assert_eq!(slot.start_iso(), "2025-10-20T14:00:00+02:00");
        assert_eq!(slot.end_iso(), "2025-10-20T14:30:00+02:00");
    }

    #[test]
    fn test_naive_input_is_shop_wall_time() {
        let slot = SlotWindow::starting_at("2025-12-02T10:00:00", Paris).unwrap();
        assert_eq!(slot.start_iso(), "2025-12-02T10:00:00+01:00");
        assert_eq!(slot.end_clock(), "10:30:00");

        let short = SlotWindow::starting_at("2025-12-02T10:00", Paris).unwrap();
        assert_eq!(short, slot);
    }

    #[test]
    fn test_window_is_thirty_minutes_across_dst_change() {
        // Paris leaves summer time at 03:00 on 2025-10-26.
        let slot = SlotWindow::starting_at("2025-10-26T00:45:00Z", Paris).unwrap();
        assert_eq!(slot.end - slot.start, Duration::minutes(SLOT_MINUTES));
        assert_eq!(slot.start_iso(), "2025-10-26T02:45:00+02:00");
        assert_eq!(slot.end_iso(), "2025-10-26T02:15:00+01:00");
    }

    #[test]
    fn test_nonexistent_wall_time_rejected() {
        // 02:30 is skipped when Paris enters summer time on 2025-03-30.
        let err = SlotWindow::starting_at("2025-03-30T02:30:00", Paris).unwrap_err();
        assert!(matches!(err, AppError::InvalidTime(_)));
    }

    #[test]
    fn test_offset_without_seconds() {
        let slot = SlotWindow::starting_at("2025-10-20T14:00+02:00", Paris).unwrap();
        assert_eq!(slot.start_iso(), "2025-10-20T14:00:00+02:00");
        assert_eq!(slot.end_iso(), "2025-10-20T14:30:00+02:00");

        let utc = SlotWindow::starting_at("2025-10-20T12:00Z", Paris).unwrap();
        assert_eq!(utc, slot);
    }

    #[test]
    fn test_basic_format_offset() {
        let slot = SlotWindow::starting_at("2025-10-20T14:00:00+0200", Paris).unwrap();
        assert_eq!(slot.start_iso(), "2025-10-20T14:00:00+02:00");

        let other_zone = SlotWindow::starting_at("2025-10-20 08:00:00-0400", Paris).unwrap();
        assert_eq!(other_zone, slot);
    }

    #[test]
    fn test_date_only_is_shop_midnight() {
        let slot = SlotWindow::starting_at("2025-10-20", Paris).unwrap();
        assert_eq!(slot.start_iso(), "2025-10-20T00:00:00+02:00");
        assert_eq!(slot.end_clock(), "00:30:00");
        assert_eq!(slot.date(), "2025-10-20");
    }

    #[test]
    fn test_clock_keeps_fractional_seconds() {
        let slot = SlotWindow::starting_at("2025-10-20T14:00:00.123456+02:00", Paris).unwrap();
        assert_eq!(slot.start_iso(), "2025-10-20T14:00:00.123456+02:00");
        assert_eq!(slot.start_clock(), "14:00:00.123456");
        assert_eq!(slot.end_clock(), "14:30:00.123456");
    }

    #[test]
    fn test_garbage_rejected() {
        let err = parse_start_time("demain à 14h", Paris).unwrap_err();
        assert!(matches!(err, AppError::InvalidTime(_)));
    }
}
