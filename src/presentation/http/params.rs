// src/presentation/http/params.rs
//! Multi-valued query-string handling for the list endpoints.
//!
//! `?id=1&id=2` supplies two values for `id`. Empty values are dropped, so
//! `?action=` is the same as leaving `action` out.
use crate::application::error::{ApplicationError, ApplicationResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(raw: Option<&str>) -> ApplicationResult<Self> {
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(raw.unwrap_or(""))
            .map_err(|err| ApplicationError::validation(format!("malformed query string: {err}")))?;
        Ok(Self { pairs })
    }

    pub fn values<'a, 'k>(&'a self, key: &'k str) -> impl Iterator<Item = &'a str> + use<'a, 'k> {
        self.pairs
            .iter()
            .filter(move |(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// Values with surrounding whitespace removed. Values that strip to
    /// nothing are dropped.
    pub fn stripped<'a, 'k>(&'a self, key: &'k str) -> impl Iterator<Item = &'a str> + use<'a, 'k> {
        self.values(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// The last non-empty value for `key`.
    pub fn last(&self, key: &str) -> Option<&str> {
        self.values(key).last()
    }

    pub fn strings(&self, key: &str) -> Vec<String> {
        self.values(key).map(str::to_string).collect()
    }

    pub fn stripped_strings(&self, key: &str) -> Vec<String> {
        self.stripped(key).map(str::to_string).collect()
    }

    /// Parses every value for `key`; the first failure is reported with its
    /// parse error.
    pub fn parsed<T>(&self, key: &str) -> ApplicationResult<Vec<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.values(key)
            .map(|value| {
                value
                    .parse::<T>()
                    .map_err(|err| ApplicationError::invalid_parameter(key, err))
            })
            .collect()
    }

    pub fn datetime(&self, key: &str) -> ApplicationResult<Option<DateTime<Utc>>> {
        self.last(key)
            .map(|value| {
                parse_datetime(value).ok_or_else(|| {
                    ApplicationError::invalid_parameter(
                        key,
                        format!("{value:?} is not a valid date/time"),
                    )
                })
            })
            .transpose()
    }
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// RFC 3339, or a naive date/time taken as UTC. A bare date means midnight.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
