use std::fmt;

use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Literal error values spreadsheet exports leave behind in CSV cells.
const SPREADSHEET_ERROR_LITERALS: &[&str] = &[
    "#N/A", "#DIV/0!", "#VALUE!", "#REF!", "#NAME?", "#NUM!", "#NULL!",
];

/// A single typed cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Error(String),
}

impl Value {
    /// Types a raw CSV field. An empty field is a missing value; anything
    /// that is not recognisably a number, boolean, date, datetime or error
    /// literal stays text, untrimmed.
    pub fn infer(raw: &str) -> Value {
        if raw.is_empty() {
            return Value::Null;
        }
        let trimmed = raw.trim();
        if SPREADSHEET_ERROR_LITERALS
            .iter()
            .any(|literal| trimmed.eq_ignore_ascii_case(literal))
        {
            return Value::Error(trimmed.to_ascii_uppercase());
        }
        if let Some(number) = parse_number(trimmed) {
            return number;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return Value::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Value::Boolean(false);
        }
        if let Ok(date) = parse_naive_date(trimmed) {
            return Value::Date(date);
        }
        if let Ok(datetime) = parse_naive_datetime(trimmed) {
            return Value::DateTime(datetime);
        }
        Value::Text(raw.to_string())
    }

    /// Stable, locale-independent text form used for samples and date bounds.
    ///
    /// `Null` renders as the empty string; callers that care about nulls
    /// filter them out first.
    pub fn canonical_text(&self) -> Result<String, &'static str> {
        match self {
            Value::Null => Ok(String::new()),
            Value::Boolean(b) => Ok(b.to_string()),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Float(f) => format_float(*f),
            Value::Text(s) => Ok(s.clone()),
            Value::Date(d) => Ok(d.format(DATE_FORMAT).to_string()),
            Value::DateTime(dt) => Ok(dt.format(DATETIME_FORMAT).to_string()),
            Value::Error(code) => Ok(code.clone()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Error(_) => "error",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical_text() {
            Ok(text) => f.write_str(&text),
            Err(reason) => write!(f, "<{reason}>"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

fn format_float(value: f64) -> Result<String, &'static str> {
    if value.is_nan() {
        return Err("NaN has no canonical text form");
    }
    if value.is_infinite() {
        return Err("infinite values have no canonical text form");
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        Ok(format!("{value:.0}"))
    } else {
        Ok(value.to_string())
    }
}

// A number whose canonical text differs from the input (zero-padded codes,
// integers beyond i64, trailing zeros) stays text so samples echo the input.
// Zeros are exempt: `0.0` and `-0` must still classify as empty.
fn parse_number(trimmed: &str) -> Option<Value> {
    let number = if let Ok(parsed) = trimmed.parse::<i64>() {
        Value::Integer(parsed)
    } else if looks_numeric(trimmed)
        && let Ok(parsed) = trimmed.parse::<f64>()
    {
        Value::Float(parsed)
    } else {
        return None;
    };
    let is_zero = match number {
        Value::Integer(value) => value == 0,
        Value::Float(value) => value == 0.0,
        _ => false,
    };
    (is_zero || number.canonical_text().is_ok_and(|text| text == trimmed)).then_some(number)
}

// Rejects words such as "inf" or "NaN" that `f64::from_str` would accept.
fn looks_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && value.chars().any(|c| c.is_ascii_digit())
}

pub fn parse_naive_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| anyhow!("Failed to parse '{value}' as date"))
}

pub fn parse_naive_datetime(value: &str) -> Result<NaiveDateTime> {
    const DATETIME_FORMATS: &[&str] = &[DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
    for fmt in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(parsed);
        }
    }
    Err(anyhow!("Failed to parse '{value}' as datetime"))
}
