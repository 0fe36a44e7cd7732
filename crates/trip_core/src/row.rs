//! Row-level parsing and validation for trip CSV lines.
//!
//! A trip line carries six comma-separated columns:
//! `TripID,PickupZoneID,DropoffZoneID,PickupDateTime,DistanceKm,FareAmount`.
//! Only the pickup zone and the pickup hour are extracted; the remaining
//! columns only count toward the minimum column check.

use csv::StringRecord;
use thiserror::Error;

/// Minimum number of columns a trip row must carry.
pub const MIN_FIELDS: usize = 6;

/// Column index of the pickup zone id.
pub const ZONE_FIELD: usize = 1;

/// Column index of the pickup date-time.
pub const PICKUP_FIELD: usize = 3;

/// Number of hourly buckets per zone.
pub const HOURS_PER_DAY: usize = 24;

/// Shortest accepted pickup timestamp, `YYYY-MM-DD HH:MM`.
const MIN_PICKUP_LEN: usize = 16;
/// Byte offset of the space between date and time.
const TIME_SEPARATOR_OFFSET: usize = 10;

/// The two fields of a trip line that feed aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow<'a> {
    pub zone: &'a str,
    /// Pickup hour of day, always in `0..24`.
    pub hour: u8,
}

/// Why a line was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RejectReason {
    #[error("fewer than 6 fields")]
    TooFewFields,
    #[error("empty pickup zone")]
    EmptyZone,
    #[error("pickup timestamp shorter than 16 characters")]
    PickupTooShort,
    #[error("no space between pickup date and time")]
    MissingTimeSeparator,
    #[error("pickup hour is not two decimal digits")]
    NonDigitHour,
    #[error("pickup hour outside 0-23")]
    HourOutOfRange,
    #[error("line is not valid UTF-8")]
    InvalidEncoding,
}

impl RejectReason {
    pub const ALL: [RejectReason; 7] = [
        RejectReason::TooFewFields,
        RejectReason::EmptyZone,
        RejectReason::PickupTooShort,
        RejectReason::MissingTimeSeparator,
        RejectReason::NonDigitHour,
        RejectReason::HourOutOfRange,
        RejectReason::InvalidEncoding,
    ];

    /// Short snake_case label used as a log field value.
    pub fn label(self) -> &'static str {
        match self {
            RejectReason::TooFewFields => "too_few_fields",
            RejectReason::EmptyZone => "empty_zone",
            RejectReason::PickupTooShort => "pickup_too_short",
            RejectReason::MissingTimeSeparator => "missing_time_separator",
            RejectReason::NonDigitHour => "non_digit_hour",
            RejectReason::HourOutOfRange => "hour_out_of_range",
            RejectReason::InvalidEncoding => "invalid_encoding",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Result of classifying one line: either a row to count or the reason it was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome<'a> {
    Accepted(TripRow<'a>),
    Rejected(RejectReason),
}

impl<'a> RowOutcome<'a> {
    pub fn accepted(self) -> Option<TripRow<'a>> {
        match self {
            RowOutcome::Accepted(row) => Some(row),
            RowOutcome::Rejected(_) => None,
        }
    }
}

impl<'a> From<Result<TripRow<'a>, RejectReason>> for RowOutcome<'a> {
    fn from(result: Result<TripRow<'a>, RejectReason>) -> Self {
        match result {
            Ok(row) => RowOutcome::Accepted(row),
            Err(reason) => RowOutcome::Rejected(reason),
        }
    }
}

/// Classify a raw line (without its line terminator).
///
/// The line is split on `,` with no quoting support.
pub fn parse_line(line: &str) -> RowOutcome<'_> {
    let fields: Vec<&str> = line.splitn(MIN_FIELDS, ',').collect();
    if fields.len() < MIN_FIELDS {
        return RowOutcome::Rejected(RejectReason::TooFewFields);
    }
    validate(fields[ZONE_FIELD], fields[PICKUP_FIELD]).into()
}

/// Classify a record produced by a non-quoting, flexible CSV reader.
pub fn parse_record(record: &StringRecord) -> RowOutcome<'_> {
    if record.len() < MIN_FIELDS {
        return RowOutcome::Rejected(RejectReason::TooFewFields);
    }
    validate(&record[ZONE_FIELD], &record[PICKUP_FIELD]).into()
}

fn validate<'a>(zone: &'a str, pickup: &str) -> Result<TripRow<'a>, RejectReason> {
    if zone.is_empty() {
        return Err(RejectReason::EmptyZone);
    }
    let hour = pickup_hour(pickup)?;
    Ok(TripRow { zone, hour })
}

/// Extract the hour from a `YYYY-MM-DD HH:MM[...]` timestamp.
///
/// Only the fixed-width layout is checked: length, the space at offset 10
/// and the two hour digits right after it. Date and minute digits are not
/// inspected.
pub fn pickup_hour(pickup: &str) -> Result<u8, RejectReason> {
    let bytes = pickup.as_bytes();
    if bytes.len() < MIN_PICKUP_LEN {
        return Err(RejectReason::PickupTooShort);
    }
    if bytes[TIME_SEPARATOR_OFFSET] != b' ' {
        return Err(RejectReason::MissingTimeSeparator);
    }

    let tens = bytes[TIME_SEPARATOR_OFFSET + 1];
    let ones = bytes[TIME_SEPARATOR_OFFSET + 2];
    if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
        return Err(RejectReason::NonDigitHour);
    }

    let hour = (tens - b'0') * 10 + (ones - b'0');
    if usize::from(hour) >= HOURS_PER_DAY {
        return Err(RejectReason::HourOutOfRange);
    }
    Ok(hour)
}

/// Per-reason tally of dropped lines, kept for log output only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectTally {
    counts: [u64; RejectReason::ALL.len()],
}

impl RejectTally {
    pub fn record(&mut self, reason: RejectReason) {
        self.counts[reason.index()] += 1;
    }

    pub fn count(&self, reason: RejectReason) -> u64 {
        self.counts[reason.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Reasons with a non-zero count, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (RejectReason, u64)> + '_ {
        RejectReason::ALL
            .iter()
            .map(|reason| (*reason, self.count(*reason)))
            .filter(|(_, count)| *count > 0)
    }
}
