//! Lazy field coercion.
//!
//! Nothing here runs when a resource is fetched. A field is looked up and
//! coerced only when [`Resource::get`](crate::rest::Resource::get) is
//! called, and each read recomputes the result from the raw data.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde_json::Value;

use crate::rest::errors::ResourceError;
use crate::rest::kind::{Coercion, ResourceKind};
use crate::rest::resource::Resource;
use crate::session::Session;

/// Wire format of `created_at`-style timestamps.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Wire format of `started_at`-style clock times.
pub const TIME_FORMAT: &str = "%H:%M";
/// Wire format of calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A field value after its kind's coercion has been applied.
#[derive(Debug, Clone)]
pub enum Field<'s> {
    /// A field with no declared coercion, or a non-string value under a
    /// date/time coercion (including `null`).
    Value(Value),
    /// A [`Coercion::DateTime`] field.
    DateTime(DateTime<Utc>),
    /// A [`Coercion::Time`] field.
    Time(NaiveTime),
    /// A [`Coercion::Date`] field.
    Date(NaiveDate),
    /// A [`Coercion::Nested`] field holding one object.
    Resource(Resource<'s>),
    /// A [`Coercion::Nested`] field holding an array of objects.
    Resources(Vec<Resource<'s>>),
}

impl<'s> Field<'s> {
    /// Returns `true` for a raw JSON `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns the raw value, if this field was not coerced.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the datetime, if this is a datetime field.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns the time, if this is a time field.
    #[must_use]
    pub const fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the date, if this is a date field.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the nested resource, if this field holds one.
    #[must_use]
    pub const fn as_resource(&self) -> Option<&Resource<'s>> {
        match self {
            Self::Resource(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the nested resources, if this field holds an array of them.
    #[must_use]
    pub fn as_resources(&self) -> Option<&[Resource<'s>]> {
        match self {
            Self::Resources(r) => Some(r),
            _ => None,
        }
    }
}

/// Parses a `%Y-%m-%dT%H:%M:%SZ` timestamp.
///
/// # Errors
///
/// Returns the chrono parse error for malformed input.
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parses a 24-hour `%H:%M` clock time.
///
/// # Errors
///
/// Returns the chrono parse error for malformed input.
pub fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
}

/// Parses a `%Y-%m-%d` date.
///
/// # Errors
///
/// Returns the chrono parse error for malformed input.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// Applies `kind`'s coercion for `field` to a raw value.
pub(crate) fn coerce<'s>(
    kind: &'static ResourceKind,
    field: &str,
    value: &Value,
    session: &'s Session,
) -> Result<Field<'s>, ResourceError> {
    let invalid = |reason: String| ResourceError::InvalidField {
        kind: kind.name,
        field: field.to_string(),
        reason,
    };

    let Some(coercion) = kind.coercion(field) else {
        return Ok(Field::Value(value.clone()));
    };

    match (coercion, value) {
        (Coercion::DateTime, Value::String(s)) => parse_datetime(s)
            .map(Field::DateTime)
            .map_err(|e| invalid(format!("'{s}' is not a datetime: {e}"))),
        (Coercion::Time, Value::String(s)) => parse_time(s)
            .map(Field::Time)
            .map_err(|e| invalid(format!("'{s}' is not a time: {e}"))),
        (Coercion::Date, Value::String(s)) => parse_date(s)
            .map(Field::Date)
            .map_err(|e| invalid(format!("'{s}' is not a date: {e}"))),
        (Coercion::Nested(nested), Value::Array(items)) => items
            .iter()
            .map(|item| Resource::wrap_nested(nested, item, session))
            .collect::<Result<Vec<_>, _>>()
            .map(Field::Resources)
            .map_err(|e| invalid(e.to_string())),
        (Coercion::Nested(nested), Value::Object(_)) => {
            Resource::wrap_nested(nested, value, session)
                .map(Field::Resource)
                .map_err(|e| invalid(e.to_string()))
        }
        (Coercion::Nested(nested), Value::Bool(_) | Value::Number(_) | Value::String(_)) => {
            Err(invalid(format!("expected {} object, got {value}", nested.name)))
        }
        _ => Ok(Field::Value(value.clone())),
    }
}
