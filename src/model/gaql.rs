/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Validating builder for GAQL (Google Ads Query Language) queries
//!
//! Every value placed into a query goes through a typed method that checks it
//! against a strict pattern, so caller-supplied text can never change the shape
//! of the query.
//!
//! ```
//! use gads_client::model::gaql::{DateRange, QueryBuilder};
//!
//! let query = QueryBuilder::select(&["campaign.id", "metrics.clicks"])
//!     .from("campaign")
//!     .where_date_range("segments.date", &DateRange::Last7Days)
//!     .unwrap()
//!     .where_ids_in("campaign.id", &["1", "2"])
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     query,
//!     "SELECT campaign.id, metrics.clicks FROM campaign \
//!      WHERE segments.date DURING LAST_7_DAYS AND campaign.id IN (1, 2)"
//! );
//! ```

use crate::error::AppError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)*$").expect("valid regex"));
static ENUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid regex"));
static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

/// Builder for a single-line GAQL query
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    fields: Vec<String>,
    resource: String,
    conditions: Vec<String>,
}

impl QueryBuilder {
    /// Starts a query selecting the given fields
    #[must_use]
    pub fn select(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Sets the resource queried in `FROM`
    #[must_use]
    pub fn from(mut self, resource: &str) -> Self {
        self.resource = resource.to_string();
        self
    }

    /// Adds `field = 'LITERAL'` for an enum value such as a campaign status
    pub fn where_enum(mut self, field: &str, literal: &str) -> Result<Self, AppError> {
        validate_field(field)?;
        validate_enum_literal(literal)?;
        self.conditions.push(format!("{field} = '{literal}'"));
        Ok(self)
    }

    /// Adds `field = TRUE|FALSE`
    pub fn where_bool(mut self, field: &str, value: bool) -> Result<Self, AppError> {
        validate_field(field)?;
        let literal = if value { "TRUE" } else { "FALSE" };
        self.conditions.push(format!("{field} = {literal}"));
        Ok(self)
    }

    /// Adds `field = <numeric id>`
    pub fn where_id(mut self, field: &str, id: &str) -> Result<Self, AppError> {
        validate_field(field)?;
        validate_id(id)?;
        self.conditions.push(format!("{field} = {id}"));
        Ok(self)
    }

    /// Adds `field IN (<id>, <id>, ...)`; the list must not be empty
    pub fn where_ids_in<S: AsRef<str>>(mut self, field: &str, ids: &[S]) -> Result<Self, AppError> {
        validate_field(field)?;
        if ids.is_empty() {
            return Err(AppError::Validation(format!(
                "id list for {field} must not be empty"
            )));
        }
        for id in ids {
            validate_id(id.as_ref())?;
        }
        let joined = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
        self.conditions.push(format!("{field} IN ({joined})"));
        Ok(self)
    }

    /// Adds a date condition: `DURING <literal>` or `BETWEEN '<start>' AND '<end>'`
    pub fn where_date_range(mut self, field: &str, range: &DateRange) -> Result<Self, AppError> {
        validate_field(field)?;
        range.validate()?;
        self.conditions.push(format!("{field} {}", range.condition()));
        Ok(self)
    }

    /// Renders the query
    ///
    /// Fails when no field is selected, when the resource is missing, or when
    /// a selected field or resource name is malformed.
    pub fn build(&self) -> Result<String, AppError> {
        if self.fields.is_empty() {
            return Err(AppError::Validation(
                "query must select at least one field".to_string(),
            ));
        }
        for field in &self.fields {
            validate_field(field)?;
        }
        if self.resource.is_empty() {
            return Err(AppError::Validation(
                "query must have a FROM resource".to_string(),
            ));
        }
        validate_field(&self.resource)?;

        let mut query = format!("SELECT {} FROM {}", self.fields.join(", "), self.resource);
        if !self.conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.conditions.join(" AND "));
        }
        Ok(query)
    }
}

/// Date range for a `segments.date` condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    /// Today only
    Today,
    /// Yesterday only
    Yesterday,
    /// The last 7 days, not including today
    Last7Days,
    /// The last 14 days, not including today
    Last14Days,
    /// The last 30 days, not including today
    #[default]
    Last30Days,
    /// The 5 day business week, Monday through Friday, of the previous business week
    LastBusinessWeek,
    /// The 7 day period starting with the previous Monday
    LastWeekMonSun,
    /// The 7 day period starting with the previous Sunday
    LastWeekSunSat,
    /// The period between the previous Sunday and the current day
    ThisWeekSunToday,
    /// The period between the previous Monday and the current day
    ThisWeekMonToday,
    /// All days in the current month
    ThisMonth,
    /// All days in the previous month
    LastMonth,
    /// Explicit inclusive range
    Custom {
        /// First day (inclusive)
        start: NaiveDate,
        /// Last day (inclusive)
        end: NaiveDate,
    },
}

impl DateRange {
    /// Creates an explicit date range, rejecting `start > end`
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        let range = DateRange::Custom { start, end };
        range.validate()?;
        Ok(range)
    }

    fn validate(&self) -> Result<(), AppError> {
        match self {
            DateRange::Custom { start, end } if start > end => Err(AppError::Validation(format!(
                "date range start {start} is after end {end}"
            ))),
            _ => Ok(()),
        }
    }

    /// The GAQL literal for predefined ranges, `None` for custom ranges
    #[must_use]
    pub fn literal(&self) -> Option<&'static str> {
        let literal = match self {
            DateRange::Today => "TODAY",
            DateRange::Yesterday => "YESTERDAY",
            DateRange::Last7Days => "LAST_7_DAYS",
            DateRange::Last14Days => "LAST_14_DAYS",
            DateRange::Last30Days => "LAST_30_DAYS",
            DateRange::LastBusinessWeek => "LAST_BUSINESS_WEEK",
            DateRange::LastWeekMonSun => "LAST_WEEK_MON_SUN",
            DateRange::LastWeekSunSat => "LAST_WEEK_SUN_SAT",
            DateRange::ThisWeekSunToday => "THIS_WEEK_SUN_TODAY",
            DateRange::ThisWeekMonToday => "THIS_WEEK_MON_TODAY",
            DateRange::ThisMonth => "THIS_MONTH",
            DateRange::LastMonth => "LAST_MONTH",
            DateRange::Custom { .. } => return None,
        };
        Some(literal)
    }

    fn condition(&self) -> String {
        match self {
            DateRange::Custom { start, end } => format!(
                "BETWEEN '{}' AND '{}'",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
            predefined => format!("DURING {}", predefined.literal().unwrap_or("LAST_30_DAYS")),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRange::Custom { start, end } => write!(f, "{start}..{end}"),
            predefined => f.write_str(predefined.literal().unwrap_or_default()),
        }
    }
}

impl FromStr for DateRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let range = match s.trim().to_uppercase().as_str() {
            "TODAY" => DateRange::Today,
            "YESTERDAY" => DateRange::Yesterday,
            "LAST_7_DAYS" => DateRange::Last7Days,
            "LAST_14_DAYS" => DateRange::Last14Days,
            "LAST_30_DAYS" => DateRange::Last30Days,
            "LAST_BUSINESS_WEEK" => DateRange::LastBusinessWeek,
            "LAST_WEEK_MON_SUN" => DateRange::LastWeekMonSun,
            "LAST_WEEK_SUN_SAT" => DateRange::LastWeekSunSat,
            "THIS_WEEK_SUN_TODAY" => DateRange::ThisWeekSunToday,
            "THIS_WEEK_MON_TODAY" => DateRange::ThisWeekMonToday,
            "THIS_MONTH" => DateRange::ThisMonth,
            "LAST_MONTH" => DateRange::LastMonth,
            _ => {
                return Err(AppError::Validation(format!(
                    "unsupported date range: {s}"
                )));
            }
        };
        Ok(range)
    }
}

/// Strips dashes from a customer id (`123-456-7890`) and checks it is numeric
pub fn normalize_customer_id(customer_id: &str) -> Result<String, AppError> {
    let normalized = customer_id.trim().replace('-', "");
    if !ID_RE.is_match(&normalized) {
        return Err(AppError::Validation(format!(
            "invalid customer id: {customer_id}"
        )));
    }
    Ok(normalized)
}

/// Checks that an id (campaign, budget...) is purely numeric
pub fn validate_id(id: &str) -> Result<(), AppError> {
    if ID_RE.is_match(id) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("invalid numeric id: {id}")))
    }
}

fn validate_field(field: &str) -> Result<(), AppError> {
    if FIELD_RE.is_match(field) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("invalid GAQL field: {field}")))
    }
}

fn validate_enum_literal(literal: &str) -> Result<(), AppError> {
    if ENUM_RE.is_match(literal) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "invalid GAQL enum literal: {literal}"
        )))
    }
}
