//! Time-of-day parsing and conversion into a target zone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone};
use chrono_tz::Tz;

use super::error::{BoardError, BoardResult};

/// A wall-clock hour:minute pair with no date or zone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl FromStr for TimeOfDay {
    type Err = BoardError;

    /// Parse 24-hour `"HH:MM"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Convert an entered time of day for display in the target zone.
///
/// The entered time is anchored to today's date in the system-local
/// calendar and interpreted as local wall-clock time; `source_id` is
/// carried in the request but does not shift the instant (faithful to
/// the behavior this tool replicates — the source selector is display
/// input only). The resulting instant is rendered in `target_id` as
/// 12-hour `h:mm AM/PM`.
///
/// A nonexistent local time (DST gap) is reported as an invalid time;
/// an ambiguous one takes the earliest interpretation.
pub fn convert(
    now: DateTime<Local>,
    time: TimeOfDay,
    _source_id: &str,
    target_id: &str,
) -> BoardResult<String> {
    let tz: Tz = target_id
        .parse()
        .map_err(|_| BoardError::UnknownZone(target_id.to_string()))?;
    let anchored = now
        .date_naive()
        .and_hms_opt(time.hour, time.minute, 0)
        .ok_or_else(|| BoardError::InvalidTime(time.to_string()))?;
    let instant = Local
        .from_local_datetime(&anchored)
        .earliest()
        .ok_or_else(|| BoardError::InvalidTime(time.to_string()))?;
    Ok(instant.with_timezone(&tz).format("%-I:%M %p").to_string())
}

/// Current time in `zone_id` as 12-hour `h:mm:ss AM/PM`, for the live
/// board rows.
pub fn format_zone_time(now: DateTime<Local>, zone_id: &str) -> BoardResult<String> {
    let tz: Tz = zone_id
        .parse()
        .map_err(|_| BoardError::UnknownZone(zone_id.to_string()))?;
    Ok(now.with_timezone(&tz).format("%-I:%M:%S %p").to_string())
}
