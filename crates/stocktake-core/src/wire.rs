//! # Wire Boundary
//!
//! Lenient deserialization of backend stocktake payloads.
//!
//! ## The Coercion Policy, In One Place
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Backend JSON                    RawStocktakeLine      StocktakeLine    │
//! │                                                                         │
//! │  "12.5000"  (string decimal) ──►  Some(12.5)      ──►  12.5             │
//! │  12.5       (number)         ──►  Some(12.5)      ──►  12.5             │
//! │  null / absent               ──►  None            ──►  0  (uom → 1)     │
//! │  "N/A" / {} (junk)           ──►  None            ──►  0  (uom → 1)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The backend serializes decimal fields as strings by convention, but a
//! field-level parse failure is absorbed rather than surfaced: a corrupted
//! value degrades to a zero quantity instead of breaking the count form.
//! Only a malformed payload envelope is an error. Every formula downstream
//! of [`RawStocktakeLine::normalize`] can therefore assume non-null
//! decimals.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::StocktakeResult;
use crate::types::{Category, StocktakeLine, Subcategory};

// =============================================================================
// Lenient Decimal Parsing
// =============================================================================

/// Coerces a loose JSON value into a decimal, if it holds one.
fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse()
                .ok()
                .or_else(|| Decimal::from_scientific(trimmed).ok())
        }
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

/// Field-level deserializer: string, number, null, junk → `Option<Decimal>`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_decimal))
}

/// Coerces raw form-input text to a decimal, defaulting to zero.
///
/// The single-value counterpart of the wire coercion, for text the user
/// typed into a count field before category rounding is applied.
pub fn parse_user_decimal(input: &str) -> Decimal {
    let trimmed = input.trim();
    trimmed
        .parse()
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
        .unwrap_or(Decimal::ZERO)
}

// =============================================================================
// Raw Line
// =============================================================================

/// Nested item reference carried by some backend list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItemRef {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub uom: Option<Decimal>,
}

/// A stocktake line exactly as the backend sends it: every numeric field
/// optional, decimals as strings, unknown fields (including any sales
/// figure) ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStocktakeLine {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub opening_qty: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub purchases: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub waste: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub counted_full_units: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub counted_partial_units: Option<Decimal>,
    /// Unit factor, first priority.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub item_uom: Option<Decimal>,
    /// Unit factor, second priority.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub uom: Option<Decimal>,
    /// Unit factor, third priority (nested item master data).
    #[serde(default)]
    pub item: Option<RawItemRef>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub valuation_cost: Option<Decimal>,
    #[serde(default)]
    pub category_code: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub item_size: Option<String>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub expected_qty: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub counted_qty: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub variance_qty: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub expected_value: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub counted_value: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub variance_value: Option<Decimal>,
}

impl RawStocktakeLine {
    /// Applies the default-to-zero policy once, producing a line the
    /// calculators can trust.
    ///
    /// Unit-factor resolution walks `item_uom`, then `uom`, then the
    /// nested `item.uom`, skipping missing and zero values, and falls back
    /// to one.
    pub fn normalize(self) -> StocktakeLine {
        let unit_factor = [self.item_uom, self.uom, self.item.and_then(|i| i.uom)]
            .into_iter()
            .flatten()
            .find(|factor| !factor.is_zero())
            .unwrap_or(Decimal::ONE);

        StocktakeLine {
            opening_qty: self.opening_qty.unwrap_or_default(),
            purchases: self.purchases.unwrap_or_default(),
            waste: self.waste.unwrap_or_default(),
            counted_full_units: self.counted_full_units.unwrap_or_default(),
            counted_partial_units: self.counted_partial_units.unwrap_or_default(),
            uom: unit_factor,
            valuation_cost: self.valuation_cost.unwrap_or_default(),
            category: self.category_code.as_deref().and_then(Category::from_code),
            subcategory: self.subcategory.as_deref().and_then(Subcategory::from_code),
            item_size: self.item_size.unwrap_or_default(),
            expected_qty: self.expected_qty.unwrap_or_default(),
            counted_qty: self.counted_qty.unwrap_or_default(),
            variance_qty: self.variance_qty.unwrap_or_default(),
            expected_value: self.expected_value.unwrap_or_default(),
            counted_value: self.counted_value.unwrap_or_default(),
            variance_value: self.variance_value.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Payload Parsing
// =============================================================================

/// Parses a single line object from a backend payload.
pub fn parse_line(json: &str) -> StocktakeResult<StocktakeLine> {
    let raw: RawStocktakeLine = serde_json::from_str(json)?;
    Ok(raw.normalize())
}

/// Parses a backend list payload into normalized lines.
pub fn parse_lines(json: &str) -> StocktakeResult<Vec<StocktakeLine>> {
    let raw: Vec<RawStocktakeLine> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(RawStocktakeLine::normalize).collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
