//! Datetime tools - current time, age, and day arithmetic.

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, Utc};
use serde_json::{Value, json};

use super::common::{int_arg, str_arg};
use crate::domains::tools::descriptor::{ToolDescriptor, ToolHandler};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::schema::{ParameterSchema, PropertySchema};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// All datetime tool descriptors, in registration order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "get_current_time",
            "Get the current time, optionally shifted by a UTC offset in hours",
            ParameterSchema::object()
                .optional("utc_offset", PropertySchema::number("UTC offset in hours (default: 0)")),
            GetCurrentTime,
        ),
        ToolDescriptor::new(
            "calculate_age",
            "Calculate age in years from a birthdate",
            ParameterSchema::object()
                .required("birthdate", PropertySchema::string("Birthdate (format: YYYY-MM-DD)")),
            CalculateAge,
        ),
        ToolDescriptor::new(
            "add_days",
            "Add days to a date (negative values subtract)",
            ParameterSchema::object()
                .required("date", PropertySchema::string("Start date (format: YYYY-MM-DD or RFC 3339)"))
                .required("days", PropertySchema::number("Number of days to add")),
            AddDays,
        ),
        ToolDescriptor::new(
            "day_of_week",
            "Get the day of the week for a date",
            ParameterSchema::object()
                .required("date", PropertySchema::string("Date (format: YYYY-MM-DD or RFC 3339)")),
            DayOfWeek,
        ),
    ]
}

/// Parse a date argument as `YYYY-MM-DD`, falling back to RFC 3339.
fn parse_date(input: &str) -> Result<NaiveDate, ToolError> {
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date);
    }
    chrono::DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.date_naive())
        .map_err(|_| ToolError::execution_failed(format!("Invalid date: {input}")))
}

struct GetCurrentTime;

#[async_trait::async_trait]
impl ToolHandler for GetCurrentTime {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let offset_hours = int_arg(&arguments, "utc_offset", 0);

        // Bounds first: the seconds multiplication must not overflow.
        if !(-24..=24).contains(&offset_hours) {
            return Err(ToolError::execution_failed("Invalid UTC offset"));
        }
        let offset = FixedOffset::east_opt(offset_hours as i32 * 3600)
            .ok_or_else(|| ToolError::execution_failed("Invalid UTC offset"))?;

        let now = Utc::now();
        let local = now.with_timezone(&offset);

        Ok(json!({
            "iso": now.to_rfc3339(),
            "timestamp": now.timestamp_millis(),
            "utc_offset": offset_hours,
            "formatted": local.format("%Y-%m-%d %H:%M:%S").to_string(),
        }))
    }
}

struct CalculateAge;

#[async_trait::async_trait]
impl ToolHandler for CalculateAge {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let birthdate = str_arg(&arguments, "birthdate");

        let birth = NaiveDate::parse_from_str(&birthdate, DATE_FORMAT)
            .map_err(|_| ToolError::execution_failed(format!("Invalid birthdate: {birthdate}")))?;
        let today = Utc::now().date_naive();

        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }

        let next_birthday = next_occurrence(today, birth.month(), birth.day());

        Ok(json!({
            "age": age,
            "birthdate": birthdate,
            "next_birthday": next_birthday.format(DATE_FORMAT).to_string(),
        }))
    }
}

/// First occurrence of `month`/`day` strictly after `today`.
/// February 29 falls back to March 1 in non-leap years.
fn next_occurrence(today: NaiveDate, month: u32, day: u32) -> NaiveDate {
    for year in [today.year(), today.year() + 1] {
        let candidate = NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1));
        if let Some(date) = candidate {
            if date > today {
                return date;
            }
        }
    }
    // Unreachable for valid month/day pairs; keep a sane fallback.
    today
}

struct AddDays;

#[async_trait::async_trait]
impl ToolHandler for AddDays {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let date = str_arg(&arguments, "date");
        let days = int_arg(&arguments, "days", 0);

        let start = parse_date(&date)?;
        let delta = Duration::try_days(days)
            .ok_or_else(|| ToolError::execution_failed("Date out of range"))?;
        let result = start
            .checked_add_signed(delta)
            .ok_or_else(|| ToolError::execution_failed("Date out of range"))?;

        Ok(json!({
            "original_date": date,
            "days_added": days,
            "result_date": result.format(DATE_FORMAT).to_string(),
        }))
    }
}

struct DayOfWeek;

#[async_trait::async_trait]
impl ToolHandler for DayOfWeek {
    async fn execute(&self, arguments: Value) -> Result<Value, ToolError> {
        let date = str_arg(&arguments, "date");
        let parsed = parse_date(&date)?;

        let weekday = parsed.weekday();
        let day_name = match weekday {
            chrono::Weekday::Mon => "Monday",
            chrono::Weekday::Tue => "Tuesday",
            chrono::Weekday::Wed => "Wednesday",
            chrono::Weekday::Thu => "Thursday",
            chrono::Weekday::Fri => "Friday",
            chrono::Weekday::Sat => "Saturday",
            chrono::Weekday::Sun => "Sunday",
        };

        Ok(json!({
            "date": date,
            "day_name": day_name,
            "day_number": weekday.num_days_from_sunday(),
        }))
    }
}
