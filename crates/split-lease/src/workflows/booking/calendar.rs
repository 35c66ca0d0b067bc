use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Offset-less date-time layouts interpreted as wall-clock time in the
/// calendar zone.
const LOCAL_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The zone in which guest-facing dates are "local".
///
/// Date strings are read the way the marketplace front end reads them:
///
/// - `YYYY-MM-DD` is midnight UTC of that date
/// - RFC 3339 strings are the instant they name
/// - date-times without an offset are wall-clock time in this zone
///
/// Weekdays and local midnight are taken in this zone, while results are
/// reported as the UTC calendar date. For zones west of UTC a bare date
/// therefore lands on the previous local weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingCalendar {
    zone: Tz,
}

impl BookingCalendar {
    pub const fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub const fn utc() -> Self {
        Self::new(chrono_tz::UTC)
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Parse any supported date representation into an instant.
    pub fn parse_instant(&self, raw: &str) -> Option<DateTime<Utc>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|midnight| Utc.from_utc_datetime(&midnight));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(dt.with_timezone(&Utc));
        }

        LOCAL_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .and_then(|naive| self.resolve_local(naive))
    }

    /// Calendar date of `instant` in this zone.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.zone).date_naive()
    }

    /// Weekday index of `instant` in this zone (Sunday = 0).
    pub fn weekday_index(&self, instant: DateTime<Utc>) -> i64 {
        i64::from(
            instant
                .with_timezone(&self.zone)
                .weekday()
                .num_days_from_sunday(),
        )
    }

    /// Move `instant` by whole local calendar days, keeping its wall-clock time.
    pub fn add_local_days(&self, instant: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
        let local = instant.with_timezone(&self.zone).naive_local();
        let shifted = local.checked_add_signed(Duration::days(days))?;
        self.resolve_local(shifted)
    }

    /// Stand-in for a missing minimum date: the Unix epoch.
    pub(crate) fn epoch(&self) -> DateTime<Utc> {
        DateTime::<Utc>::default()
    }

    // Wall-clock times skipped by a DST jump resolve one hour later; repeated
    // times resolve to the earlier instant.
    fn resolve_local(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.zone
            .from_local_datetime(&naive)
            .earliest()
            .or_else(|| {
                let later = naive.checked_add_signed(Duration::hours(1))?;
                self.zone.from_local_datetime(&later).earliest()
            })
            .map(|local| local.with_timezone(&Utc))
    }
}

impl Default for BookingCalendar {
    fn default() -> Self {
        Self::new(chrono_tz::America::New_York)
    }
}

/// `YYYY-MM-DD` of the instant's UTC calendar date.
pub fn format_iso_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}
