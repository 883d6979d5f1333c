//! Date-parsing collaborator
//!
//! Text tokens under the `DateTime` interpretation are turned into UTC
//! timestamps by a [`DateParser`]. [`FlexibleDateParser`] recognises the
//! common machine and human layouts and resolves numeric day/month ordering
//! according to [`DateParseOptions`].

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

/// A token the parser could not turn into a timestamp
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse {token:?} as datetime: {reason}")]
pub struct DateParseFailure {
    pub token: String,
    pub reason: String,
}

impl DateParseFailure {
    pub fn new(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

/// Parse a text token into a calendar timestamp, or fail
pub trait DateParser {
    /// # Errors
    /// Returns [`DateParseFailure`] when the token is not a recognisable date/time.
    fn parse(&self, token: &str) -> Result<DateTime<Utc>, DateParseFailure>;
}

/// Handling of numeric dates such as `01/02/2006`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParseOptions {
    /// Retry with day and month swapped when the preferred order fails
    pub retry_ambiguous_with_swap: bool,
    /// Read `01/02/2006` as January 2nd instead of February 1st
    pub prefer_month_first: bool,
}

impl Default for DateParseOptions {
    fn default() -> Self {
        Self {
            retry_ambiguous_with_swap: true,
            prefer_month_first: false,
        }
    }
}

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y/%m/%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f %z UTC",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y.%m.%d %H:%M:%S%.f",
    "%d %b %Y %H:%M:%S%.f",
    "%d %b %Y %H:%M",
    "%d %b %Y, %H:%M:%S%.f",
    "%d %b %Y, %H:%M",
    "%b %d %Y %H:%M:%S%.f",
    "%b %d, %Y %H:%M:%S%.f",
    "%B %d, %Y %H:%M:%S%.f",
    "%a %b %e %H:%M:%S %Y",
];

const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y-%b-%d",
    "%d %b %Y",
    "%d-%b-%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%A, %d %b %Y",
];

// Numeric layouts with the day first; the month-first variants are derived
// by swapping %d and %m, the two-digit-year variants by swapping %Y for %y.
const DAY_FIRST_DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
];

const DAY_FIRST_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Default [`DateParser`] built on chrono's format parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlexibleDateParser {
    options: DateParseOptions,
}

impl FlexibleDateParser {
    pub fn new(options: DateParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DateParseOptions {
        self.options
    }

    fn parse_epoch(token: &str) -> Option<DateTime<Utc>> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match token.len() {
            4 => token
                .parse::<i32>()
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
                .map(midnight),
            8 => NaiveDate::parse_from_str(token, "%Y%m%d").ok().map(midnight),
            10 => token
                .parse::<i64>()
                .ok()
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
            13 => token
                .parse::<i64>()
                .ok()
                .and_then(DateTime::from_timestamp_millis),
            _ => None,
        }
    }

    fn parse_unambiguous(token: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(token) {
            return Some(dt.with_timezone(&Utc));
        }
        ZONED_FORMATS
            .iter()
            .find_map(|f| {
                DateTime::parse_from_str(token, f)
                    .ok()
                    .filter(|dt| spells_out_year(token, f, dt.year()))
            })
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|| parse_naive(token, NAIVE_DATETIME_FORMATS.iter().copied()))
            .or_else(|| parse_date(token, NAIVE_DATE_FORMATS.iter().copied()))
    }

    fn parse_numeric(&self, token: &str, month_first: bool) -> Option<DateTime<Utc>> {
        let layout = |f: &&str| {
            if month_first {
                swap_day_month(f)
            } else {
                (*f).to_string()
            }
        };
        let with_short_years = |formats: &[&str]| -> Vec<String> {
            let full: Vec<String> = formats.iter().map(layout).collect();
            let short: Vec<String> = full.iter().map(|f| f.replace("%Y", "%y")).collect();
            full.into_iter().chain(short).collect()
        };
        let datetime_formats = with_short_years(DAY_FIRST_DATETIME_FORMATS);
        let date_formats = with_short_years(DAY_FIRST_DATE_FORMATS);
        parse_naive(token, datetime_formats.iter().map(String::as_str))
            .or_else(|| parse_date(token, date_formats.iter().map(String::as_str)))
    }
}

impl DateParser for FlexibleDateParser {
    fn parse(&self, token: &str) -> Result<DateTime<Utc>, DateParseFailure> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(DateParseFailure::new(token, "empty token"));
        }

        if let Some(dt) = Self::parse_epoch(trimmed).or_else(|| Self::parse_unambiguous(trimmed)) {
            return Ok(dt);
        }

        let preferred = self.options.prefer_month_first;
        if let Some(dt) = self.parse_numeric(trimmed, preferred) {
            return Ok(dt);
        }
        if self.options.retry_ambiguous_with_swap {
            if let Some(dt) = self.parse_numeric(trimmed, !preferred) {
                return Ok(dt);
            }
        }

        Err(DateParseFailure::new(token, "unrecognised date/time layout"))
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn parse_naive<'f>(token: &str, formats: impl IntoIterator<Item = &'f str>) -> Option<DateTime<Utc>> {
    formats
        .into_iter()
        .find_map(|f| {
            NaiveDateTime::parse_from_str(token, f)
                .ok()
                .filter(|dt| spells_out_year(token, f, dt.year()))
        })
        .map(|dt| dt.and_utc())
}

fn parse_date<'f>(token: &str, formats: impl IntoIterator<Item = &'f str>) -> Option<DateTime<Utc>> {
    formats
        .into_iter()
        .find_map(|f| {
            NaiveDate::parse_from_str(token, f)
                .ok()
                .filter(|d| spells_out_year(token, f, d.year()))
        })
        .map(midnight)
}

// chrono's %Y accepts "21" as the year 21; a full-year layout only counts
// when the token carries all four digits.
fn spells_out_year(token: &str, format: &str, year: i32) -> bool {
    !format.contains("%Y") || token.contains(&format!("{year:04}"))
}

fn swap_day_month(format: &str) -> String {
    format
        .replace("%d", "\u{0}")
        .replace("%m", "%d")
        .replace('\u{0}', "%m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_swap_day_month() {
        assert_eq!(swap_day_month("%d/%m/%Y %H:%M"), "%m/%d/%Y %H:%M");
    }

    #[test]
    fn test_iso_date() {
        let parser = FlexibleDateParser::default();
        assert_eq!(parser.parse("2020-01-03").unwrap(), ymd(2020, 1, 3));
    }

    #[test]
    fn test_day_first_preference() {
        let parser = FlexibleDateParser::default();
        assert_eq!(parser.parse("01/02/2006").unwrap(), ymd(2006, 2, 1));
    }

    #[test]
    fn test_month_first_preference() {
        let parser = FlexibleDateParser::new(DateParseOptions {
            retry_ambiguous_with_swap: false,
            prefer_month_first: true,
        });
        assert_eq!(parser.parse("01/02/2006").unwrap(), ymd(2006, 1, 2));
    }

    #[test]
    fn test_swap_retry() {
        let parser = FlexibleDateParser::default();
        assert_eq!(parser.parse("02/13/2006").unwrap(), ymd(2006, 2, 13));

        let strict = FlexibleDateParser::new(DateParseOptions {
            retry_ambiguous_with_swap: false,
            prefer_month_first: false,
        });
        assert!(strict.parse("02/13/2006").is_err());
    }

    #[test]
    fn test_two_digit_years_pivot() {
        let parser = FlexibleDateParser::default();
        assert_eq!(parser.parse("01/02/21").unwrap(), ymd(2021, 2, 1));
        assert_eq!(parser.parse("31/12/99").unwrap(), ymd(1999, 12, 31));
        assert_eq!(parser.parse("31.12.69").unwrap(), ymd(2069, 12, 31));
    }

    #[test]
    fn test_spells_out_year() {
        assert!(spells_out_year("01/02/2021", "%d/%m/%Y", 2021));
        assert!(!spells_out_year("01/02/21", "%Y/%m/%d", 1));
        assert!(spells_out_year("01/02/21", "%d/%m/%y", 2021));
    }

    #[test]
    fn test_garbage_fails() {
        let parser = FlexibleDateParser::default();
        let err = parser.parse("hello").unwrap_err();
        assert_eq!(err.token, "hello");
        assert!(parser.parse("   ").is_err());
    }
}
