use serde::{Serialize, Serializer};

use super::statements::Stmt;

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Program { body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Value held by a literal expression.
///
/// Serialized as the bare value. Integral numbers are emitted without a
/// fractional part, so `1` stays `1` rather than `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
}

impl LiteralValue {
    /// Converts the text of a `NUMBER` token.
    ///
    /// Underscores are ignored and `0x`/`0b` prefixes select the radix. Text
    /// that is not a valid number is kept as a string value.
    pub fn from_number_text(raw: &str) -> Self {
        let digits: String = raw.chars().filter(|c| *c != '_').collect();

        let parsed = if let Some(hex) = strip_radix_prefix(&digits, 'x') {
            u64::from_str_radix(hex, 16).ok().map(|value| value as f64)
        } else if let Some(binary) = strip_radix_prefix(&digits, 'b') {
            u64::from_str_radix(binary, 2).ok().map(|value| value as f64)
        } else {
            digits.parse::<f64>().ok()
        };

        match parsed {
            Some(value) if value.is_finite() => LiteralValue::Number(value),
            _ => LiteralValue::String(String::from(raw)),
        }
    }
}

impl Serialize for LiteralValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LiteralValue::Number(value)
                if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER =>
            {
                serializer.serialize_i64(*value as i64)
            }
            LiteralValue::Number(value) => serializer.serialize_f64(*value),
            LiteralValue::String(value) => serializer.serialize_str(value),
            LiteralValue::Boolean(value) => serializer.serialize_bool(*value),
            LiteralValue::Null => serializer.serialize_unit(),
        }
    }
}

fn strip_radix_prefix(digits: &str, marker: char) -> Option<&str> {
    let rest = digits.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}
