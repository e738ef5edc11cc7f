use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use regex::Regex;
use std::sync::LazyLock;

use crate::identifiers::DatatypeTag;
use crate::validation::ValidationError;

/// Tags understood by [`SemanticValue::extract`].
pub const BUILTIN_TAGS: &[&str] = &[
    "text", "url", "email", "date", "datetime", "number", "integer", "boolean",
];

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://\S+$").expect("invalid regex"));
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\s@]+)@([^\s@.]+(?:\.[^\s@.]+)+)$").expect("invalid regex")
});
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid regex"));
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("invalid regex")
});
static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+$").expect("invalid regex"));

/// Semantic value extracted from property text.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticValue {
    /// Free text (`text`), accepted unchanged.
    Text(String),
    /// Absolute URL (`url`).
    Url(String),
    /// Mail address (`email`); the domain is kept lowercased.
    Email {
        /// Part before the `@`, case preserved.
        local: String,
        /// Domain part, lowercased.
        domain: String,
    },
    /// Calendar date (`date`, `YYYY-MM-DD`).
    Date(NaiveDate),
    /// RFC 3339 timestamp with offset (`datetime`).
    DateTime(DateTime<FixedOffset>),
    /// Finite decimal number (`number`).
    Number(f64),
    /// Signed 64-bit integer (`integer`).
    Integer(i64),
    /// `true` or `false`, case-insensitive (`boolean`).
    Boolean(bool),
}

impl SemanticValue {
    /// Extracts the semantic value of `text` for a datatype tag.
    pub fn extract(tag: &DatatypeTag, text: &str) -> Result<Self, ValidationError> {
        match tag.as_str() {
            "text" => Ok(SemanticValue::Text(text.to_string())),
            "url" => url(text),
            "email" => email(text),
            "date" => date(text),
            "datetime" => datetime(text),
            "number" => number(text),
            "integer" => integer(text),
            "boolean" => boolean(text),
            other => Err(ValidationError::UnknownDatatype(other.to_string())),
        }
    }

    /// Returns true when `text` is a valid instance of the datatype.
    pub fn recognizes(tag: &DatatypeTag, text: &str) -> bool {
        Self::extract(tag, text).is_ok()
    }

    /// Canonical string form of the value.
    pub fn canonical_form(&self) -> String {
        match self {
            SemanticValue::Text(s) | SemanticValue::Url(s) => s.clone(),
            SemanticValue::Email { local, domain } => format!("{}@{}", local, domain),
            SemanticValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            SemanticValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            SemanticValue::Number(n) => n.to_string(),
            SemanticValue::Integer(i) => i.to_string(),
            SemanticValue::Boolean(b) => b.to_string(),
        }
    }
}

fn url(text: &str) -> Result<SemanticValue, ValidationError> {
    if !URL_PATTERN.is_match(text) {
        return Err(mismatch("url", text));
    }
    Ok(SemanticValue::Url(text.to_string()))
}

fn email(text: &str) -> Result<SemanticValue, ValidationError> {
    let caps = EMAIL_PATTERN
        .captures(text)
        .ok_or_else(|| mismatch("email", text))?;
    Ok(SemanticValue::Email {
        local: caps[1].to_string(),
        domain: caps[2].to_lowercase(),
    })
}

fn date(text: &str) -> Result<SemanticValue, ValidationError> {
    // chrono accepts unpadded fields; the shape check keeps the lexical form strict
    if !DATE_PATTERN.is_match(text) {
        return Err(mismatch("date", text));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(SemanticValue::Date)
        .map_err(|_| ValidationError::OutOfBounds {
            field: "date",
            value: text.to_string(),
        })
}

fn datetime(text: &str) -> Result<SemanticValue, ValidationError> {
    DateTime::parse_from_rfc3339(text)
        .map(SemanticValue::DateTime)
        .map_err(|_| mismatch("datetime", text))
}

fn number(text: &str) -> Result<SemanticValue, ValidationError> {
    if !NUMBER_PATTERN.is_match(text) {
        return Err(mismatch("number", text));
    }
    let value: f64 = text.parse().map_err(|_| mismatch("number", text))?;
    if !value.is_finite() {
        return Err(ValidationError::OutOfBounds {
            field: "number",
            value: text.to_string(),
        });
    }
    Ok(SemanticValue::Number(value))
}

fn integer(text: &str) -> Result<SemanticValue, ValidationError> {
    if !INTEGER_PATTERN.is_match(text) {
        return Err(mismatch("integer", text));
    }
    text.parse::<i64>()
        .map(SemanticValue::Integer)
        .map_err(|_| ValidationError::OutOfBounds {
            field: "integer",
            value: text.to_string(),
        })
}

fn boolean(text: &str) -> Result<SemanticValue, ValidationError> {
    if text.eq_ignore_ascii_case("true") {
        Ok(SemanticValue::Boolean(true))
    } else if text.eq_ignore_ascii_case("false") {
        Ok(SemanticValue::Boolean(false))
    } else {
        Err(mismatch("boolean", text))
    }
}

fn mismatch(field: &'static str, text: &str) -> ValidationError {
    ValidationError::PatternMismatch {
        field,
        value: text.to_string(),
    }
}
