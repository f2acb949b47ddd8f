use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{CampaignError, Result};
use crate::schema::fields::{Field, FieldSet};

pub const DEFAULT_DIMENSIONS: &str = "country,category";
pub const DEFAULT_DURATION: &str = "1-12-2018,1-12-2019";

/// Primary (`x`) and secondary (`y`) grouping axes. Never equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub x: Field,
    pub y: Field,
}

/// Inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duration {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn parse_field(param: &'static str, token: &str) -> Result<Field> {
    token
        .parse::<Field>()
        .map_err(|e| CampaignError::invalid_param(param, e.to_string()))
}

/// Parses `key,key`. Defaults to `country,category`.
pub fn validate_dimensions(raw: Option<&str>) -> Result<Dimensions> {
    let raw = raw.unwrap_or(DEFAULT_DIMENSIONS);
    let tokens = raw.split(',').collect::<Vec<_>>();

    let [x, y] = tokens.as_slice() else {
        return Err(CampaignError::invalid_param(
            "dimensions",
            format!("expected exactly two comma-separated keys, got '{raw}'"),
        ));
    };

    let x = parse_field("dimensions", x)?;
    let y = parse_field("dimensions", y)?;
    if x == y {
        return Err(CampaignError::invalid_param(
            "dimensions",
            format!("both dimensions are '{x}'"),
        ));
    }

    Ok(Dimensions { x, y })
}

/// Parses `key(,key)*` into a set. Defaults to every key.
pub fn validate_fields(raw: Option<&str>) -> Result<FieldSet> {
    let default = Field::all_joined();
    let raw = raw.unwrap_or(&default);

    if raw.is_empty() {
        return Err(CampaignError::invalid_param("fields", "at least one key is required"));
    }

    raw.split(',').map(|token| parse_field("fields", token)).collect()
}

/// Parses `D-M-YYYY,D-M-YYYY`. Defaults to `1-12-2018,1-12-2019`.
pub fn validate_duration(raw: Option<&str>) -> Result<Duration> {
    let raw = raw.unwrap_or(DEFAULT_DURATION);
    let tokens = raw.split(',').collect::<Vec<_>>();

    let [start, end] = tokens.as_slice() else {
        return Err(CampaignError::invalid_param(
            "duration",
            format!("expected two comma-separated dates, got '{raw}'"),
        ));
    };

    let start = parse_date(start)?;
    let end = parse_date(end)?;
    if end < start {
        return Err(CampaignError::invalid_param(
            "duration",
            format!("end date {end} is before start date {start}"),
        ));
    }

    Ok(Duration { start, end })
}

fn digits(part: &str, min: usize, max: usize) -> Option<u32> {
    let ok = (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit());
    if ok {
        part.parse().ok()
    } else {
        None
    }
}

// D[D]-M[M]-YYYY, day-month-year order.
fn parse_date(token: &str) -> Result<NaiveDate> {
    let bad = || CampaignError::invalid_param("duration", format!("'{token}' is not a D-M-YYYY date"));

    let parts = token.split('-').collect::<Vec<_>>();
    let [day, month, year] = parts.as_slice() else {
        return Err(bad());
    };

    let day = digits(day, 1, 2).ok_or_else(bad)?;
    let month = digits(month, 1, 2).ok_or_else(bad)?;
    let year = digits(year, 4, 4).ok_or_else(bad)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        CampaignError::invalid_param("duration", format!("'{token}' is not a calendar date"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_and_double_digit_parts() {
        assert_eq!(parse_date("1-2-2019").unwrap(), NaiveDate::from_ymd_opt(2019, 2, 1).unwrap());
        assert_eq!(parse_date("09-11-2019").unwrap(), NaiveDate::from_ymd_opt(2019, 11, 9).unwrap());
    }

    #[test]
    fn rejects_malformed_date_tokens() {
        for token in ["", "1-12", "1-12-19", "123-1-2019", "1-12-2019-1", "a-12-2019", "+1-12-2019", " 1-12-2019"] {
            assert!(parse_date(token).is_err(), "{token:?} should be rejected");
        }
    }

    #[test]
    fn rejects_dates_that_do_not_exist() {
        for token in ["0-12-2019", "31-2-2019", "1-0-2019", "1-13-2019"] {
            assert!(parse_date(token).is_err(), "{token:?} should be rejected");
        }
    }
}
