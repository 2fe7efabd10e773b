use anyhow::{Result, anyhow, bail};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Convert a raw serial-date value into a naive datetime.
///
/// The raw format counts fractional days in a proleptic Gregorian serial
/// system where day 1 is 0001-01-01. The fixed correction (366 days, 5 hours)
/// compensates for the source format's epoch and timezone convention and must
/// not change: downstream consumers compare rendered timestamps byte for byte.
///
/// The day fraction is resolved to whole microseconds (nearest), matching the
/// precision of the reference exports.
pub fn serial_to_datetime(raw: f64) -> Result<NaiveDateTime> {
    if !raw.is_finite() {
        bail!("Raw timestamp is not a finite number: {raw}");
    }

    let ordinal = raw.floor();
    if ordinal < 1.0 || ordinal > i32::MAX as f64 {
        bail!("Raw timestamp {raw} is outside the serial date range");
    }
    let micros = ((raw - ordinal) * MICROS_PER_DAY).round() as i64;

    let date = NaiveDate::from_num_days_from_ce_opt(ordinal as i32)
        .ok_or_else(|| anyhow!("Raw timestamp {raw} is outside the serial date range"))?;

    date.and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::microseconds(micros))
        .and_then(|dt| dt.checked_sub_signed(Duration::days(366)))
        .and_then(|dt| dt.checked_sub_signed(Duration::hours(5)))
        .ok_or_else(|| anyhow!("Raw timestamp {raw} overflows the datetime range"))
}

/// Render a converted datetime the way the reference exports do: seconds
/// precision when the microsecond field is zero, 6 fractional digits otherwise.
pub fn format_dataset_datetime(dt: NaiveDateTime) -> String {
    if dt.nanosecond() == 0 {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

/// Unix seconds of a converted datetime (naive values carry the source
/// collection's clock, so no further offset is applied).
pub fn datetime_to_unix(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp()
}
