//! Scryfall response bodies and headers consumed by the builders.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Permalink of the matched card, sent on named-card lookups.
pub const CARD_HEADER: &str = "x-scryfall-card";

/// Image URL of the matched card, sent on named-card lookups.
pub const CARD_IMAGE_HEADER: &str = "x-scryfall-card-image";

/// Error object returned alongside any non-200 status.
#[derive(Deserialize, Debug)]
pub struct ErrorPayload {
    pub details: Option<String>,
}

/// Paginated list returned by `/cards/search`.
#[derive(Deserialize, Debug)]
pub struct CardList {
    pub data: Option<Vec<CardEntry>>,
    #[serde(default)]
    pub total_cards: u64,
}

#[derive(Deserialize, Debug)]
pub struct CardEntry {
    pub name: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub scryfall_uri: String,
    #[serde(default, deserialize_with = "price")]
    pub usd: Option<String>,
    #[serde(default, deserialize_with = "price")]
    pub tix: Option<String>,
    pub prices: Option<Prices>,
}

/// Newer search payloads nest prices under `prices` instead of top-level keys.
#[derive(Deserialize, Debug)]
pub struct Prices {
    #[serde(default, deserialize_with = "price")]
    pub usd: Option<String>,
    #[serde(default, deserialize_with = "price")]
    pub tix: Option<String>,
}

impl CardEntry {
    pub fn usd(&self) -> Option<&str> {
        non_empty(self.usd.as_deref())
            .or_else(|| non_empty(self.prices.as_ref().and_then(|p| p.usd.as_deref())))
    }

    pub fn tix(&self) -> Option<&str> {
        non_empty(self.tix.as_deref())
            .or_else(|| non_empty(self.prices.as_ref().and_then(|p| p.tix.as_deref())))
    }
}

/// Prices are strings on the wire, but a bare number is accepted too. Anything
/// else is treated as missing rather than failing the whole list.
fn price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
