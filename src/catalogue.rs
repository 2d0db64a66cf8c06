use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError};

use std::collections::HashMap;

/// Defines the JSON format for one entry in the price catalogue.
///
/// Both fields are optional: an entry whose `title` is missing or not a
/// string, or whose `price` is missing or not a number, never makes it into
/// the [`PriceMap`]. Any other fields in the entry are ignored, and an entry
/// that isn't a JSON object at all has neither field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogueEntry {
    pub title: Option<String>,
    pub price: Option<f64>,
}

#[serde_as]
#[derive(Deserialize)]
struct Fields {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    title: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    price: Option<f64>,
}

impl<'de> Deserialize<'de> for CatalogueEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Value::Object(fields) = Value::deserialize(deserializer)? else {
            return Ok(Self::default());
        };
        let Fields { title, price } =
            Fields::deserialize(Value::Object(fields)).map_err(de::Error::custom)?;
        Ok(Self { title, price })
    }
}

/// Maps product titles to unit prices.
///
/// When the catalogue lists the same title more than once, the entry that
/// appears last wins.
#[derive(Debug, Default)]
pub struct PriceMap(HashMap<String, f64>);

impl PriceMap {
    /// Builds the map in a single pass over `entries`, skipping any entry
    /// without both a title and a price.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sales_cost::{CatalogueEntry, PriceMap};
    /// let entries = vec![
    ///     CatalogueEntry { title: Some("Mouse".into()), price: Some(10.5) },
    ///     CatalogueEntry { title: Some("Cable".into()), price: None },
    /// ];
    /// let prices = PriceMap::from_entries(&entries);
    /// assert_eq!(prices.price("Mouse"), Some(10.5));
    /// assert_eq!(prices.price("Cable"), None);
    /// ```
    #[must_use]
    pub fn from_entries(entries: &[CatalogueEntry]) -> Self {
        let mut prices = HashMap::with_capacity(entries.len());
        for entry in entries {
            let (Some(title), Some(price)) = (&entry.title, entry.price) else {
                tracing::debug!(?entry, "skipping catalogue entry without title or price");
                continue;
            };
            if let Some(previous) = prices.insert(title.clone(), price) {
                tracing::debug!(%title, previous, price, "duplicate catalogue title, keeping last");
            }
        }
        Self(prices)
    }

    /// Returns the unit price for `title`, if the catalogue has one.
    #[must_use]
    pub fn price(&self, title: &str) -> Option<f64> {
        self.0.get(title).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
