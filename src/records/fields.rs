//! Field coercion shared by every resource.
//!
//! The spreadsheet behind each resource is edited by hand, so rows come
//! back with inconsistent casing, numbers where strings are expected and
//! stray whitespace. Everything is funneled through [`normalize`] and a
//! table of [`Field`] definitions so both the write and read paths agree
//! on what a field is called and what it falls back to.

use std::fmt;

use serde_json::{Map, Value};

/// Maximum number of characters of an upstream body echoed back in
/// error details.
pub const DETAILS_LIMIT: usize = 500;

/// Coerce any JSON value into a trimmed string.
///
/// Total and idempotent: `normalize(&Value::String(normalize(v)))` is
/// always equal to `normalize(v)`.
pub fn normalize(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Parse a head count, falling back to 1 for anything blank,
/// non-numeric or below one.
pub fn guest_count(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = raw
        .parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64));

    match parsed {
        Some(n) if n >= 1 => n.to_string(),
        _ => String::from("1"),
    }
}

/// Canonical casing for the RSVP column. Unknown answers are kept as
/// typed.
pub fn rsvp(raw: &str) -> String {
    let raw = raw.trim();
    match raw.to_ascii_lowercase().as_str() {
        "yes" => String::from("Yes"),
        "no" => String::from("No"),
        "maybe" => String::from("Maybe"),
        _ => raw.to_string(),
    }
}

/// Cut a string down to `limit` characters for use in diagnostics.
pub fn truncate(raw: &str, limit: usize) -> String {
    match raw.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &raw[..idx]),
        None => raw.to_string(),
    }
}

/// What to substitute when a field resolves to an empty string.
#[derive(Clone, Copy, Debug)]
pub enum Fallback {
    Empty,
    Text(&'static str),
    /// Guest head count, see [`guest_count`]
    Count,
    /// RSVP answer, see [`rsvp`]
    Rsvp,
}

/// A canonical field name plus the legacy keys accepted in its place,
/// in lookup order.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub fallback: Fallback,
}

impl Field {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            aliases: &[],
            fallback: Fallback::Empty,
        }
    }

    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub const fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    fn candidates(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Lookup key for rename-aware updates.
pub const ORIGINAL_NAME: Field = Field::new("originalName").aliases(&["OriginalName"]);

/// Reasons a write is refused before anything is sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing(&'static str),
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "{} is required", field),
            Self::InvalidEmail => write!(f, "Invalid email format"),
        }
    }
}

/// Read-only view over a JSON object that resolves [`Field`]s.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Resolve a field to its normalized value. The first candidate key
    /// holding a non-empty value wins, then the fallback applies.
    pub fn get(&self, field: &Field) -> String {
        let value = field
            .candidates()
            .filter_map(|key| self.map.get(key))
            .map(normalize)
            .find(|v| !v.is_empty())
            .unwrap_or_default();

        match field.fallback {
            Fallback::Empty => value,
            Fallback::Text(default) if value.is_empty() => default.to_string(),
            Fallback::Text(_) => value,
            Fallback::Count => guest_count(&value),
            Fallback::Rsvp => rsvp(&value),
        }
    }

    /// Resolve a key field, refusing anything that is not a non-blank
    /// string. Uses the same candidate as [`Fields::get`], so the
    /// validated key is the one written into the record.
    pub fn require(&self, field: &Field) -> Result<String, ValidationError> {
        let value = field
            .candidates()
            .filter_map(|key| self.map.get(key))
            .find(|value| !normalize(value).is_empty());

        match value {
            Some(Value::String(s)) => Ok(s.trim().to_string()),
            _ => Err(ValidationError::Missing(field.name)),
        }
    }
}
