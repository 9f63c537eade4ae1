//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Ordinal price tier, serialized as its display symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Upscale,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    /// Display symbol (`$` through `$$$$`)
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Budget => "$",
            Self::Moderate => "$$",
            Self::Upscale => "$$$",
            Self::Luxury => "$$$$",
        }
    }

    /// Symbol length, used as the sort key for price ordering
    pub fn tier(&self) -> usize {
        self.symbol().len()
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Restaurant entity. Created once from seed data at startup, never mutated.
///
/// `available_today` is an informational flag only; slot-level availability
/// comes from the availability module and the two signals are not reconciled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub price_range: PriceRange,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub gallery: Vec<String>,
    pub address: String,
    pub phone: String,
    pub hours: String,
    pub amenities: Vec<String>,
    /// Non-negative decimal string, e.g. "2.4" (miles)
    pub distance: String,
    pub description: String,
    pub dietary_options: Vec<String>,
    pub available_today: bool,
}

impl Restaurant {
    /// Distance parsed as a number, for sorting. Unparsable values sort last.
    pub fn distance_value(&self) -> f64 {
        self.distance.parse().unwrap_or(f64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_tier_ordering() {
        assert!(PriceRange::Budget.tier() < PriceRange::Moderate.tier());
        assert!(PriceRange::Upscale.tier() < PriceRange::Luxury.tier());
        assert_eq!(PriceRange::Luxury.tier(), 4);
    }

    #[test]
    fn test_price_range_serializes_as_symbol() {
        let json = serde_json::to_string(&PriceRange::Upscale).unwrap();
        assert_eq!(json, "\"$$$\"");
        let back: PriceRange = serde_json::from_str("\"$$\"").unwrap();
        assert_eq!(back, PriceRange::Moderate);
    }
}
