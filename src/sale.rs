use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use std::fmt::Display;

/// Defines the JSON format for one sales record.
///
/// `Product` is matched against catalogue titles; a product name that is not
/// a string is treated as missing. A missing `Quantity` counts as zero, but a
/// `Quantity` that is present and `null` is kept, so that it can be reported
/// as invalid. The whole record is kept as read, fields in input order, for
/// diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sale {
    pub product: Option<String>,
    pub quantity: Option<Quantity>,
    pub record: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Sale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = Map::<String, Value>::deserialize(deserializer)?;
        let product = match record.get("Product") {
            Some(Value::String(name)) => Some(name.clone()),
            _ => None,
        };
        let quantity = record.get("Quantity").cloned().map(Quantity::from);
        Ok(Self {
            product,
            quantity,
            record,
        })
    }
}

impl Sale {
    /// Returns the quantity sold as a number, or `None` if the recorded
    /// quantity can't be interpreted as one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sales_cost::Sale;
    /// let sale: Sale = serde_json::from_str(r#"{"Product": "Mouse"}"#).unwrap();
    /// assert_eq!(sale.quantity(), Some(0.0));
    /// let sale: Sale = serde_json::from_str(r#"{"Quantity": "abc"}"#).unwrap();
    /// assert_eq!(sale.quantity(), None);
    /// ```
    #[must_use]
    pub fn quantity(&self) -> Option<f64> {
        self.quantity.as_ref().map_or(Some(0.0), Quantity::to_f64)
    }
}

impl Display for Sale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(&self.record).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

/// A quantity as it appears in the sales file, before conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    Number(f64),
    Flag(bool),
    Text(String),
    Other(Value),
}

impl From<Value> for Quantity {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(n) => Self::Number(n),
                None => Self::Other(Value::Number(n)),
            },
            Value::Bool(b) => Self::Flag(b),
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl Quantity {
    /// Converts the quantity to a number.
    ///
    /// Strings are parsed after trimming surrounding whitespace, and may group
    /// digits with underscores (`1_000`). Booleans count as 1 or 0. Anything
    /// else fails.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Text(s) => parse_number(s),
            Self::Other(_) => None,
        }
    }
}

// Underscores are only allowed between two digits.
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let well_grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    if !well_grouped {
        return None;
    }
    text.replace('_', "").parse().ok()
}
