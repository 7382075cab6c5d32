//! # Domain Types
//!
//! Core domain types for the stocktake valuation engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  StocktakeLine  │   │   ItemProfile   │   │   LineValues    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  opening_qty    │   │  category       │   │  expected_value │       │
//! │  │  purchases      │   │  subcategory    │   │  counted_value  │       │
//! │  │  waste          │   │  item_size      │   │  variance_value │       │
//! │  │  counts + uom   │   │  uom            │   └─────────────────┘       │
//! │  │  backend rollups│   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Category     │   │  MovementType   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  D  Draught     │   │  Purchase       │                             │
//! │  │  B  BottledBeer │   │  Waste          │                             │
//! │  │  S  Spirits     │   └─────────────────┘                             │
//! │  │  W  Wine        │                                                   │
//! │  │  M  Minerals    │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Units Model
//! Every quantity is held in base units ("servings"): one pour, one bottle,
//! one measure. A bulk packaging unit (keg, case, dozen) holds `uom` base
//! units, so a raw count of "2 kegs and 3 pints" with `uom = 10` is
//! `2 × 10 + 3 = 23` servings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{StocktakeError, StocktakeResult};

// =============================================================================
// Category
// =============================================================================

/// Stock category, keyed by the backend's single-letter codes.
///
/// ## Why a Closed Enum?
/// The source of truth branches on raw code strings (`'B'`, `'M'`, ...).
/// A closed enum makes the rounding-rule selection exhaustive at compile
/// time and removes typo risk from every call site.
///
/// Lines whose code is missing or unrecognized carry `Option<Category> =
/// None` and fall into the generic two-decimal rounding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    /// Keg beer tracked in pints/pours.
    #[serde(rename = "D")]
    Draught,
    /// Bottled beer, counted in whole bottles only.
    #[serde(rename = "B")]
    BottledBeer,
    /// Spirits tracked in measures.
    #[serde(rename = "S")]
    Spirits,
    /// Wine tracked in glasses/bottles.
    #[serde(rename = "W")]
    Wine,
    /// Minerals, syrups and juices (soft stock).
    #[serde(rename = "M")]
    Minerals,
}

impl Category {
    /// Parses a backend category code. Unknown codes map to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "D" => Some(Category::Draught),
            "B" => Some(Category::BottledBeer),
            "S" => Some(Category::Spirits),
            "W" => Some(Category::Wine),
            "M" => Some(Category::Minerals),
            _ => None,
        }
    }

    /// The backend's single-letter code for this category.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Category::Draught => "D",
            Category::BottledBeer => "B",
            Category::Spirits => "S",
            Category::Wine => "W",
            Category::Minerals => "M",
        }
    }
}

// =============================================================================
// Subcategory
// =============================================================================

/// Subcategory refinement for minerals.
///
/// Syrups and juices support millilitre-level sub-bottle tracking, which is
/// why their input widgets accept three decimal places (8.008 = 8 bottles
/// and 8 ml).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Subcategory {
    Syrups,
    Juices,
}

impl Subcategory {
    /// Parses a backend subcategory string. Unknown values map to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "SYRUPS" => Some(Subcategory::Syrups),
            "JUICES" => Some(Subcategory::Juices),
            _ => None,
        }
    }
}

// =============================================================================
// Movement Type
// =============================================================================

/// Supply-side stock movements that can be entered against a line.
///
/// Sales are NOT a movement here: expected stock reflects only supply-side
/// changes, and consumption is reconciled through the variance against the
/// physical count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    Purchase,
    Waste,
}

impl MovementType {
    /// Parses a movement code from the UI/backend (`"PURCHASE"`, `"WASTE"`).
    pub fn parse(code: &str) -> StocktakeResult<Self> {
        match code.trim() {
            "PURCHASE" => Ok(MovementType::Purchase),
            "WASTE" => Ok(MovementType::Waste),
            other => Err(StocktakeError::UnknownMovementType(other.to_string())),
        }
    }

    /// The wire code for this movement.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            MovementType::Purchase => "PURCHASE",
            MovementType::Waste => "WASTE",
        }
    }
}

// =============================================================================
// Item Profile
// =============================================================================

/// The slice of an item's master data that drives display and rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemProfile {
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
    /// Free-text size descriptor, inspected for `"Doz"` to pick dozen-based
    /// rounding (e.g. `"330ml Doz"`).
    pub item_size: String,
    /// Base units per full packaging unit (servings per keg, bottles per
    /// case). Zero is treated as one, matching the backend's coercion.
    #[ts(as = "String")]
    pub uom: Decimal,
}

impl ItemProfile {
    /// True when the size descriptor marks a dozen-based pack.
    #[inline]
    pub fn is_dozen_pack(&self) -> bool {
        self.item_size.contains("Doz")
    }

    /// True for categories counted in whole units only: bottled beer, and
    /// dozen-packed minerals.
    pub fn whole_units_only(&self) -> bool {
        match self.category {
            Some(Category::BottledBeer) => true,
            Some(Category::Minerals) => self.is_dozen_pack(),
            _ => false,
        }
    }

    /// The unit factor with the zero guard applied.
    #[inline]
    pub fn unit_factor(&self) -> Decimal {
        if self.uom.is_zero() {
            Decimal::ONE
        } else {
            self.uom
        }
    }
}

// =============================================================================
// Stocktake Line
// =============================================================================

/// A single stocktake line, normalized from a backend payload.
///
/// Movement quantities and costs are inputs to the calculators; the rollup
/// fields (`expected_qty` onwards) are the backend-computed figures carried
/// for display and cross-checking, and are the fields the optimistic update
/// helpers overwrite while a mutation is in flight.
///
/// All values are transient UI form state. The backend remains the source
/// of truth and may overwrite any optimistic rollup on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct StocktakeLine {
    /// Stock on hand at the opening of the period, in base units.
    #[ts(as = "String")]
    pub opening_qty: Decimal,
    /// Running purchase total for the period, in base units.
    #[ts(as = "String")]
    pub purchases: Decimal,
    /// Running waste total for the period, in base units.
    #[ts(as = "String")]
    pub waste: Decimal,
    /// User-entered count of full packaging units.
    #[ts(as = "String")]
    pub counted_full_units: Decimal,
    /// User-entered count of loose base units.
    #[ts(as = "String")]
    pub counted_partial_units: Decimal,
    /// Base units per full packaging unit. Never zero after normalization.
    #[ts(as = "String")]
    pub uom: Decimal,
    /// Currency cost per base unit.
    #[ts(as = "String")]
    pub valuation_cost: Decimal,
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
    pub item_size: String,

    // Backend-computed rollups.
    #[ts(as = "String")]
    pub expected_qty: Decimal,
    #[ts(as = "String")]
    pub counted_qty: Decimal,
    #[ts(as = "String")]
    pub variance_qty: Decimal,
    #[ts(as = "String")]
    pub expected_value: Decimal,
    #[ts(as = "String")]
    pub counted_value: Decimal,
    #[ts(as = "String")]
    pub variance_value: Decimal,
}

impl Default for StocktakeLine {
    fn default() -> Self {
        Self {
            opening_qty: Decimal::ZERO,
            purchases: Decimal::ZERO,
            waste: Decimal::ZERO,
            counted_full_units: Decimal::ZERO,
            counted_partial_units: Decimal::ZERO,
            // A missing unit factor coerces to one, not zero: a line with no
            // packaging data counts one base unit per full unit.
            uom: Decimal::ONE,
            valuation_cost: Decimal::ZERO,
            category: None,
            subcategory: None,
            item_size: String::new(),
            expected_qty: Decimal::ZERO,
            counted_qty: Decimal::ZERO,
            variance_qty: Decimal::ZERO,
            expected_value: Decimal::ZERO,
            counted_value: Decimal::ZERO,
            variance_value: Decimal::ZERO,
        }
    }
}

impl StocktakeLine {
    /// The unit factor with the zero guard applied.
    #[inline]
    pub fn unit_factor(&self) -> Decimal {
        if self.uom.is_zero() {
            Decimal::ONE
        } else {
            self.uom
        }
    }

    /// The display/rounding profile for this line's item.
    pub fn profile(&self) -> ItemProfile {
        ItemProfile {
            category: self.category,
            subcategory: self.subcategory,
            item_size: self.item_size.clone(),
            uom: self.uom,
        }
    }
}

// =============================================================================
// Line Values
// =============================================================================

/// Currency valuation of a line's expected, counted and variance quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineValues {
    #[ts(as = "String")]
    pub expected_value: Decimal,
    #[ts(as = "String")]
    pub counted_value: Decimal,
    #[ts(as = "String")]
    pub variance_value: Decimal,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_round_trip() {
        for code in ["D", "B", "S", "W", "M"] {
            let category = Category::from_code(code).unwrap();
            assert_eq!(category.code(), code);
        }
    }

    #[test]
    fn test_unknown_category_is_none() {
        assert_eq!(Category::from_code("X"), None);
        assert_eq!(Category::from_code(""), None);
    }

    #[test]
    fn test_subcategory_parsing() {
        assert_eq!(Subcategory::from_code("SYRUPS"), Some(Subcategory::Syrups));
        assert_eq!(Subcategory::from_code("JUICES"), Some(Subcategory::Juices));
        assert_eq!(Subcategory::from_code("CORDIALS"), None);
    }

    #[test]
    fn test_movement_type_parse() {
        assert_eq!(MovementType::parse("PURCHASE").unwrap(), MovementType::Purchase);
        assert_eq!(MovementType::parse("WASTE").unwrap(), MovementType::Waste);
        assert!(MovementType::parse("SALE").is_err());
    }

    #[test]
    fn test_whole_units_only() {
        let mut item = ItemProfile {
            category: Some(Category::BottledBeer),
            subcategory: None,
            item_size: "330ml".to_string(),
            uom: Decimal::from(24),
        };
        assert!(item.whole_units_only());

        item.category = Some(Category::Minerals);
        assert!(!item.whole_units_only());

        item.item_size = "200ml Doz".to_string();
        assert!(item.whole_units_only());

        item.category = Some(Category::Spirits);
        assert!(!item.whole_units_only());
    }

    #[test]
    fn test_unit_factor_zero_guard() {
        let mut line = StocktakeLine::default();
        assert_eq!(line.unit_factor(), Decimal::ONE);

        line.uom = Decimal::ZERO;
        assert_eq!(line.unit_factor(), Decimal::ONE);

        line.uom = Decimal::from(88);
        assert_eq!(line.unit_factor(), Decimal::from(88));
    }

    #[test]
    fn test_line_deserializes_with_partial_fields() {
        let line: StocktakeLine =
            serde_json::from_str(r#"{"opening_qty": "12.5", "category": "D"}"#).unwrap();
        assert_eq!(line.opening_qty, "12.5".parse::<Decimal>().unwrap());
        assert_eq!(line.category, Some(Category::Draught));
        assert_eq!(line.uom, Decimal::ONE);
    }
}
