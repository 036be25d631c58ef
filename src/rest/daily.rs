//! The daily summary fetch.
//!
//! The `Day` kind has no item path of its own. It is fetched from `/daily`
//! (today) or `/daily/{day_of_year}/{year}`, and [`BoundDay`] is the only
//! handle it gets.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::rest::errors::ResourceError;
use crate::rest::fetch::{self, Params};
use crate::rest::kind::ResourceKind;
use crate::rest::resource::Resource;
use crate::session::Session;

/// Which day to fetch a summary for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayArg {
    /// A calendar date. Any year passed alongside it is ignored.
    Date(NaiveDate),
    /// A day-of-year (with a year), or a non-positive offset meaning that
    /// many days before today (without one).
    Number(i64),
}

impl From<NaiveDate> for DayArg {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<i64> for DayArg {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for DayArg {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

/// Resolves the arguments of [`BoundDay::for_date`] to a day-of-year and
/// year, relative to `today`. `None` means "today, unqualified".
///
/// # Errors
///
/// Returns [`ResourceError::InvalidArgument`] for a positive day without a
/// year, an offset combined with a year, an offset reaching before the
/// calendar's range, or a day-of-year that does not exist in the year.
pub fn resolve_day(
    day: Option<DayArg>,
    year: Option<i32>,
    today: NaiveDate,
) -> Result<Option<(u32, i32)>, ResourceError> {
    let date = match (day, year) {
        (None, _) => return Ok(None),
        (Some(DayArg::Date(date)), _) => date,
        (Some(DayArg::Number(n)), None) if n > 0 => {
            return Err(ResourceError::InvalidArgument(format!(
                "day {n} needs an explicit year"
            )));
        }
        (Some(DayArg::Number(n)), None) => today
            .checked_sub_days(Days::new(n.unsigned_abs()))
            .ok_or_else(|| {
                ResourceError::InvalidArgument(format!("{n} days before {today} is out of range"))
            })?,
        (Some(DayArg::Number(n)), Some(year)) => u32::try_from(n)
            .ok()
            .and_then(|ordinal| NaiveDate::from_yo_opt(year, ordinal))
            .ok_or_else(|| {
                ResourceError::InvalidArgument(format!("{n} is not a day of the year {year}"))
            })?,
    };

    Ok(Some((date.ordinal(), date.year())))
}

/// The restricted handle for the daily summary kind.
#[derive(Clone, Copy, Debug)]
pub struct BoundDay<'s> {
    session: &'s Session,
    kind: &'static ResourceKind,
}

impl<'s> BoundDay<'s> {
    /// Binds the daily summary `kind` to `session`.
    #[must_use]
    pub const fn new(session: &'s Session, kind: &'static ResourceKind) -> Self {
        Self { session, kind }
    }

    /// Fetches today's summary from `/daily`.
    ///
    /// # Errors
    ///
    /// Propagates transport errors unchanged.
    pub fn today(&self) -> Result<Resource<'s>, ResourceError> {
        self.for_date(None, None)
    }

    /// Fetches the summary for `day`, optionally qualified by `year`.
    ///
    /// ```rust,ignore
    /// session.day().for_date(None, None)?;                           // /daily
    /// session.day().for_date(Some((-3).into()), None)?;              // three days ago
    /// session.day().for_date(Some(73.into()), Some(2011))?;          // /daily/73/2011
    /// session.day().for_date(Some(NaiveDate::from_ymd_opt(2011, 3, 14).unwrap().into()), None)?;
    /// ```
    ///
    /// # Errors
    ///
    /// See [`resolve_day`]; transport errors propagate unchanged.
    pub fn for_date(
        &self,
        day: Option<DayArg>,
        year: Option<i32>,
    ) -> Result<Resource<'s>, ResourceError> {
        let path = match resolve_day(day, year, Local::now().date_naive())? {
            Some((day, year)) => format!("/daily/{day}/{year}"),
            None => "/daily".to_string(),
        };
        fetch::fetch_one(self.session, self.kind, &path, &Params::new())
    }
}
