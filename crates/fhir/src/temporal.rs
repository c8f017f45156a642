//! Partial-precision date and time values.
//!
//! FHIR allows `date` and `dateTime` values to stop at the year or month
//! (`"2020"`, `"2020-03"`), which no `chrono` type can hold. These types
//! validate the lexical form with `chrono`, remember the precision, and
//! write back exactly what they were given.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} `{text}`: {reason}")]
pub struct TemporalError {
    pub kind: &'static str,
    pub text: String,
    pub reason: &'static str,
}

impl TemporalError {
    fn new(kind: &'static str, text: &str, reason: &'static str) -> Self {
        TemporalError {
            kind,
            text: text.to_string(),
            reason,
        }
    }
}

/// How much of a temporal value was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemporalPrecision {
    Year,
    Month,
    Day,
    Second,
    /// Seconds with a fractional part.
    Fraction,
}

/// A FHIR `date`: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

impl PrecisionDate {
    pub fn parse(text: &str) -> Result<Self, TemporalError> {
        parse_date(text, "date")
    }

    pub fn from_year(year: i32) -> Result<Self, TemporalError> {
        if !(0..=9999).contains(&year) {
            return Err(TemporalError::new("date", &year.to_string(), "year out of range"));
        }
        Ok(PrecisionDate {
            year,
            month: None,
            day: None,
        })
    }

    pub fn from_year_month(year: i32, month: u32) -> Result<Self, TemporalError> {
        let date = PrecisionDate::from_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(TemporalError::new(
                "date",
                &format!("{year:04}-{month:02}"),
                "month out of range",
            ));
        }
        Ok(PrecisionDate {
            month: Some(month),
            ..date
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn precision(&self) -> TemporalPrecision {
        match (self.month, self.day) {
            (None, _) => TemporalPrecision::Year,
            (Some(_), None) => TemporalPrecision::Month,
            (Some(_), Some(_)) => TemporalPrecision::Day,
        }
    }

    /// The full calendar date, when the value has day precision.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month?, self.day?)
    }
}

impl From<NaiveDate> for PrecisionDate {
    fn from(date: NaiveDate) -> Self {
        PrecisionDate {
            year: date.year(),
            month: Some(date.month()),
            day: Some(date.day()),
        }
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{month:02}")?;
            if let Some(day) = self.day {
                write!(f, "-{day:02}")?;
            }
        }
        Ok(())
    }
}

/// A FHIR `dateTime`: a partial date, or a full timestamp with seconds and
/// a zone offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDateTime {
    text: String,
    date: PrecisionDate,
    precision: TemporalPrecision,
}

impl PrecisionDateTime {
    pub fn parse(text: &str) -> Result<Self, TemporalError> {
        let (date, precision) = match text.split_once('T') {
            None => {
                let date = parse_date(text, "dateTime")?;
                (date, date.precision())
            }
            Some((date, _)) => {
                let date = parse_date(date, "dateTime")?;
                if date.precision() != TemporalPrecision::Day {
                    return Err(TemporalError::new(
                        "dateTime",
                        text,
                        "a time needs a full date",
                    ));
                }
                (date, parse_timestamp(text, "dateTime")?)
            }
        };
        Ok(PrecisionDateTime {
            text: text.to_string(),
            date,
            precision,
        })
    }

    pub fn precision(&self) -> TemporalPrecision {
        self.precision
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The date part at whatever precision it was given.
    pub fn date(&self) -> PrecisionDate {
        self.date
    }

    /// The instant, when the value carries a time of day.
    pub fn to_chrono(&self) -> Option<DateTime<FixedOffset>> {
        if self.precision < TemporalPrecision::Second {
            return None;
        }
        DateTime::parse_from_rfc3339(&self.text).ok()
    }
}

impl From<DateTime<FixedOffset>> for PrecisionDateTime {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PrecisionDateTime {
            text: value.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            date: value.date_naive().into(),
            precision: seconds_precision(&value),
        }
    }
}

impl From<PrecisionDate> for PrecisionDateTime {
    fn from(date: PrecisionDate) -> Self {
        PrecisionDateTime {
            text: date.to_string(),
            date,
            precision: date.precision(),
        }
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A FHIR `instant`: always a full timestamp with a zone offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionInstant {
    text: String,
    value: DateTime<FixedOffset>,
    precision: TemporalPrecision,
}

impl PrecisionInstant {
    pub fn parse(text: &str) -> Result<Self, TemporalError> {
        let precision = parse_timestamp(text, "instant")?;
        let value = DateTime::parse_from_rfc3339(text)
            .map_err(|_| TemporalError::new("instant", text, "not an RFC 3339 timestamp"))?;
        Ok(PrecisionInstant {
            text: text.to_string(),
            value,
            precision,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> TemporalPrecision {
        self.precision
    }

    pub fn to_chrono(&self) -> DateTime<FixedOffset> {
        self.value
    }
}

impl From<DateTime<FixedOffset>> for PrecisionInstant {
    fn from(value: DateTime<FixedOffset>) -> Self {
        PrecisionInstant {
            text: value.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            value,
            precision: seconds_precision(&value),
        }
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A FHIR `time`: `hh:mm:ss` with optional fractional seconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionTime {
    text: String,
    value: NaiveTime,
}

impl PrecisionTime {
    pub fn parse(text: &str) -> Result<Self, TemporalError> {
        let bytes = text.as_bytes();
        if bytes.len() < 8 || bytes[2] != b':' || bytes[5] != b':' {
            return Err(TemporalError::new("time", text, "expected hh:mm:ss"));
        }
        let value = NaiveTime::parse_from_str(text, "%H:%M:%S%.f")
            .map_err(|_| TemporalError::new("time", text, "not a valid time of day"))?;
        Ok(PrecisionTime {
            text: text.to_string(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> TemporalPrecision {
        if self.text.contains('.') {
            TemporalPrecision::Fraction
        } else {
            TemporalPrecision::Second
        }
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        self.value
    }
}

impl From<NaiveTime> for PrecisionTime {
    fn from(value: NaiveTime) -> Self {
        let text = if value.nanosecond() == 0 {
            value.format("%H:%M:%S").to_string()
        } else {
            value.format("%H:%M:%S%.f").to_string()
        };
        PrecisionTime { text, value }
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn parse_date(text: &str, kind: &'static str) -> Result<PrecisionDate, TemporalError> {
    let mut parts = text.split('-');
    let year = parts
        .next()
        .and_then(|part| digits(part, 4))
        .ok_or_else(|| TemporalError::new(kind, text, "expected a four digit year"))?;
    let month = match parts.next() {
        None => None,
        Some(part) => Some(
            digits(part, 2)
                .filter(|month| (1..=12).contains(month))
                .ok_or_else(|| TemporalError::new(kind, text, "month out of range"))?,
        ),
    };
    let day = match parts.next() {
        None => None,
        Some(part) => Some(
            digits(part, 2).ok_or_else(|| TemporalError::new(kind, text, "expected a two digit day"))?,
        ),
    };
    if parts.next().is_some() {
        return Err(TemporalError::new(kind, text, "unexpected trailing component"));
    }
    let date = PrecisionDate {
        year: year as i32,
        month,
        day,
    };
    if date.day.is_some() && date.to_naive_date().is_none() {
        return Err(TemporalError::new(kind, text, "no such calendar day"));
    }
    Ok(date)
}

/// Validates `YYYY-MM-DDThh:mm:ss[.f](Z|+hh:mm)` and reports its precision.
fn parse_timestamp(text: &str, kind: &'static str) -> Result<TemporalPrecision, TemporalError> {
    let value = DateTime::parse_from_rfc3339(text)
        .map_err(|_| TemporalError::new(kind, text, "expected seconds and a zone offset"))?;
    let time = text.split_once('T').map_or("", |(_, time)| time);
    if time.len() < 8 || time.as_bytes()[2] != b':' || time.as_bytes()[5] != b':' {
        return Err(TemporalError::new(kind, text, "expected hh:mm:ss"));
    }
    Ok(if time.contains('.') {
        TemporalPrecision::Fraction
    } else {
        seconds_precision(&value)
    })
}

fn seconds_precision(value: &DateTime<FixedOffset>) -> TemporalPrecision {
    if value.nanosecond() == 0 {
        TemporalPrecision::Second
    } else {
        TemporalPrecision::Fraction
    }
}

fn digits(part: &str, width: usize) -> Option<u32> {
    if part.len() == width && part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

// Each type travels as its lexical string.
macro_rules! lexical_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = TemporalError;

                fn from_str(text: &str) -> Result<Self, Self::Err> {
                    <$ty>::parse(text)
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let text = std::string::String::deserialize(deserializer)?;
                    <$ty>::parse(&text).map_err(serde::de::Error::custom)
                }
            }
        )*
    };
}

lexical_serde!(PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_dates_keep_their_precision() {
        let year = PrecisionDate::parse("2020").unwrap();
        assert_eq!(year.precision(), TemporalPrecision::Year);
        assert_eq!(year.to_naive_date(), None);
        assert_eq!(year.to_string(), "2020");

        let month = PrecisionDate::parse("2020-03").unwrap();
        assert_eq!(month.precision(), TemporalPrecision::Month);
        assert_eq!(month.month(), Some(3));
        assert_eq!(month.to_string(), "2020-03");

        let day = PrecisionDate::parse("1970-03-30").unwrap();
        assert_eq!(
            day.to_naive_date(),
            NaiveDate::from_ymd_opt(1970, 3, 30)
        );
    }

    #[test]
    fn bad_dates_are_rejected() {
        for text in ["20", "2020-13", "2020-02-30", "2020-1-01", "2020-01-01-01", ""] {
            assert!(PrecisionDate::parse(text).is_err(), "{text} should not parse");
        }
    }

    #[test]
    fn date_times_at_each_precision() {
        let cases = [
            ("2015", TemporalPrecision::Year),
            ("2015-02", TemporalPrecision::Month),
            ("2015-02-07", TemporalPrecision::Day),
            ("2015-02-07T13:28:17-05:00", TemporalPrecision::Second),
            ("2017-01-01T00:00:00.000Z", TemporalPrecision::Fraction),
        ];
        for (text, precision) in cases {
            let value = PrecisionDateTime::parse(text).unwrap();
            assert_eq!(value.precision(), precision, "{text}");
            assert_eq!(value.to_string(), text);
        }

        let full = PrecisionDateTime::parse("2015-02-07T13:28:17-05:00").unwrap();
        assert!(full.to_chrono().is_some());
        assert_eq!(full.date().to_string(), "2015-02-07");
        assert_eq!(PrecisionDateTime::parse("2015").unwrap().to_chrono(), None);
    }

    #[test]
    fn date_times_need_seconds_and_an_offset() {
        assert!(PrecisionDateTime::parse("2015-02-07T13:28").is_err());
        assert!(PrecisionDateTime::parse("2015-02-07T13:28:17").is_err());
        assert!(PrecisionDateTime::parse("2015-02T13:28:17Z").is_err());
    }

    #[test]
    fn instants_and_times() {
        let instant = PrecisionInstant::parse("2013-06-08T10:57:34.2112+01:00").unwrap();
        assert_eq!(instant.precision(), TemporalPrecision::Fraction);
        assert_eq!(instant.to_string(), "2013-06-08T10:57:34.2112+01:00");
        assert!(PrecisionInstant::parse("2013-06-08").is_err());

        let time = PrecisionTime::parse("09:30:00").unwrap();
        assert_eq!(time.to_naive_time(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert!(PrecisionTime::parse("9:30").is_err());
        assert!(PrecisionTime::parse("25:00:00").is_err());
    }

    #[test]
    fn serde_uses_the_lexical_form() {
        let value: PrecisionDate = serde_json::from_str("\"2020-03\"").unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"2020-03\"");
        assert!(serde_json::from_str::<PrecisionDateTime>("\"yesterday\"").is_err());
    }
}
