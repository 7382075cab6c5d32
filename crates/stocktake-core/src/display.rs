//! # Display & Input Formatting
//!
//! Converts raw base-unit quantities into the full/partial split the count
//! forms show, and selects the category-specific rounding and input-widget
//! rules.
//!
//! ## Rounding Rules by Category
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category                      Partial units      Input widget          │
//! │  ───────────────────────────   ─────────────      ─────────────         │
//! │  B  bottled beer               whole number       step 1                │
//! │  M  minerals, "Doz" size       whole number       step 1                │
//! │  M  minerals, SYRUPS/JUICES    2 dp display       step 0.001, 3 dp      │
//! │  D  draught                    2 dp               step 0.01,  2 dp      │
//! │  everything else (incl. no     2 dp               step 0.01,  2 dp      │
//! │  category on the line)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The three-decimal rule applies to the INPUT widget only: juices track
//! millilitres below the bottle (8.008 = 8 bottles + 8 ml), but display
//! rounding for minerals stays at the generic two decimals.
//!
//! Precision is category-determined, never user-configurable.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Category, ItemProfile, Subcategory};

// =============================================================================
// Rounding Rule Selection
// =============================================================================

/// Decimal places for partial-unit display/validation, by category.
///
/// Lines without a recognized category fall into the generic two-decimal
/// arm, the backend's safe default.
pub fn partial_decimals(category: Option<Category>, item_size: &str) -> u32 {
    match category {
        Some(Category::BottledBeer) => 0,
        Some(Category::Minerals) if item_size.contains("Doz") => 0,
        // Draught partial pours display at two decimals, same as the
        // general case; kept as its own arm because the backend special-
        // cases the code path.
        Some(Category::Draught) => 2,
        _ => 2,
    }
}

// =============================================================================
// Display Units
// =============================================================================

/// A base-unit quantity split into full packaging units and a rounded
/// partial remainder, plus the decimal places the partial was rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayUnits {
    #[ts(as = "String")]
    pub full: Decimal,
    #[ts(as = "String")]
    pub partial: Decimal,
    pub decimals: u32,
}

/// Splits a base-unit quantity into display units for an item.
///
/// `full = floor(servings / uom)`, `partial = servings mod uom`, with the
/// partial rounded per the item's category rule.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use stocktake_core::display::to_display_units;
/// use stocktake_core::types::{Category, ItemProfile};
///
/// let item = ItemProfile {
///     category: Some(Category::BottledBeer),
///     subcategory: None,
///     item_size: "330ml".to_string(),
///     uom: Decimal::from(10),
/// };
/// let units = to_display_units(Decimal::from(23), &item);
/// assert_eq!(units.full, Decimal::from(2));
/// assert_eq!(units.partial, Decimal::from(3));
/// assert_eq!(units.decimals, 0);
/// ```
pub fn to_display_units(servings: Decimal, item: &ItemProfile) -> DisplayUnits {
    let uom = item.unit_factor();
    let full = (servings / uom).floor();
    let partial = servings % uom;
    let decimals = partial_decimals(item.category, &item.item_size);
    DisplayUnits {
        full,
        partial: partial.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero),
        decimals,
    }
}

// =============================================================================
// Input Validation & Formatting
// =============================================================================

/// Rounds a user-entered partial-unit value to its category's precision.
///
/// Whole-number rounding for bottled beer and dozen-packed minerals, two
/// decimals otherwise. (Raw text input is coerced through
/// [`crate::wire::parse_user_decimal`] before reaching this.)
pub fn validate_partial_units(
    value: Decimal,
    category: Option<Category>,
    item_size: &str,
) -> Decimal {
    let decimals = partial_decimals(category, item_size);
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a user-entered value for redisplay: a whole-number string for
/// the integer categories, otherwise exactly two decimal places.
pub fn format_user_input(value: Decimal, category: Option<Category>, item_size: &str) -> String {
    let decimals = partial_decimals(category, item_size);
    fixed(value, decimals)
}

/// Formats a decimal with exactly `scale` decimal places (round half away
/// from zero). The UI-boundary serialization for all fixed-decimal output.
pub fn fixed(value: Decimal, scale: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded.to_string()
}

// =============================================================================
// Input Widget Configuration
// =============================================================================

/// Configuration for a partial-units input widget.
///
/// Pure configuration data, not validation: callers must still enforce
/// `pattern` on what the user actually types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InputConfig {
    #[ts(as = "String")]
    pub step: Decimal,
    pub decimals: u32,
    /// Regex the widget should accept.
    pub pattern: String,
    /// Placeholder example shown in the empty widget.
    pub example: String,
    /// HTML input type.
    #[serde(rename = "type")]
    pub input_type: String,
}

impl InputConfig {
    /// Selects the input configuration for an item.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use stocktake_core::display::InputConfig;
    /// use stocktake_core::types::{Category, ItemProfile, Subcategory};
    ///
    /// let juice = ItemProfile {
    ///     category: Some(Category::Minerals),
    ///     subcategory: Some(Subcategory::Juices),
    ///     item_size: "1L".to_string(),
    ///     uom: Decimal::from(12),
    /// };
    /// let config = InputConfig::for_item(&juice);
    /// assert_eq!(config.decimals, 3);
    /// assert_eq!(config.step, Decimal::new(1, 3));
    /// ```
    pub fn for_item(item: &ItemProfile) -> Self {
        if item.whole_units_only() {
            return InputConfig {
                step: Decimal::ONE,
                decimals: 0,
                pattern: r"^\d+$".to_string(),
                example: "12".to_string(),
                input_type: "number".to_string(),
            };
        }

        let ml_tracked = item.category == Some(Category::Minerals)
            && matches!(
                item.subcategory,
                Some(Subcategory::Syrups) | Some(Subcategory::Juices)
            );
        if ml_tracked {
            return InputConfig {
                step: Decimal::new(1, 3),
                decimals: 3,
                pattern: r"^\d+(\.\d{1,3})?$".to_string(),
                example: "8.008".to_string(),
                input_type: "number".to_string(),
            };
        }

        InputConfig {
            step: Decimal::new(1, 2),
            decimals: 2,
            pattern: r"^\d+(\.\d{1,2})?$".to_string(),
            example: "12.34".to_string(),
            input_type: "number".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn item(category: Option<Category>, subcategory: Option<Subcategory>, size: &str) -> ItemProfile {
        ItemProfile {
            category,
            subcategory,
            item_size: size.to_string(),
            uom: Decimal::from(10),
        }
    }

    #[test]
    fn test_display_units_bottled_beer() {
        let units = to_display_units(dec("23"), &item(Some(Category::BottledBeer), None, "330ml"));
        assert_eq!(units.full, dec("2"));
        assert_eq!(units.partial, dec("3"));
        assert_eq!(units.decimals, 0);
    }

    #[test]
    fn test_display_units_spirits_two_decimals() {
        let units = to_display_units(dec("23.456"), &item(Some(Category::Spirits), None, "70cl"));
        assert_eq!(units.full, dec("2"));
        assert_eq!(units.partial, dec("3.46"));
        assert_eq!(units.decimals, 2);
    }

    #[test]
    fn test_display_units_draught() {
        let keg = ItemProfile {
            category: Some(Category::Draught),
            subcategory: None,
            item_size: "50L Keg".to_string(),
            uom: dec("88"),
        };
        let units = to_display_units(dec("217.505"), &keg);
        assert_eq!(units.full, dec("2"));
        // 217.505 - 2×88 = 41.505 → 41.51 at two decimals
        assert_eq!(units.partial, dec("41.51"));
        assert_eq!(units.decimals, 2);
    }

    #[test]
    fn test_display_units_dozen_minerals_round_to_whole() {
        let units = to_display_units(
            dec("25.4"),
            &item(Some(Category::Minerals), None, "200ml Doz"),
        );
        assert_eq!(units.full, dec("2"));
        assert_eq!(units.partial, dec("5"));
        assert_eq!(units.decimals, 0);
    }

    #[test]
    fn test_display_units_missing_category_uses_generic_rule() {
        let units = to_display_units(dec("23.456"), &item(None, None, ""));
        assert_eq!(units.partial, dec("3.46"));
        assert_eq!(units.decimals, 2);
    }

    #[test]
    fn test_display_units_zero_uom_guard() {
        let mut profile = item(Some(Category::Spirits), None, "");
        profile.uom = Decimal::ZERO;
        let units = to_display_units(dec("7.25"), &profile);
        assert_eq!(units.full, dec("7"));
        assert_eq!(units.partial, dec("0.25"));
    }

    #[test]
    fn test_validate_partial_units() {
        assert_eq!(
            validate_partial_units(dec("3.7"), Some(Category::BottledBeer), ""),
            dec("4")
        );
        assert_eq!(
            validate_partial_units(dec("3.456"), Some(Category::Spirits), ""),
            dec("3.46")
        );
        assert_eq!(
            validate_partial_units(dec("3.7"), Some(Category::Minerals), "Doz"),
            dec("4")
        );
        assert_eq!(
            validate_partial_units(dec("3.7"), Some(Category::Minerals), "330ml"),
            dec("3.7")
        );
    }

    #[test]
    fn test_format_user_input() {
        assert_eq!(format_user_input(dec("3.7"), Some(Category::BottledBeer), ""), "4");
        assert_eq!(format_user_input(dec("3.5"), Some(Category::Spirits), ""), "3.50");
        assert_eq!(format_user_input(dec("3.456"), None, ""), "3.46");
    }

    #[test]
    fn test_fixed_pads_and_rounds() {
        assert_eq!(fixed(dec("3"), 4), "3.0000");
        assert_eq!(fixed(dec("3.00005"), 4), "3.0001");
        assert_eq!(fixed(dec("-1.005"), 2), "-1.01");
    }

    #[test]
    fn test_input_config_integer_categories() {
        let config = InputConfig::for_item(&item(Some(Category::BottledBeer), None, "330ml"));
        assert_eq!(config.step, Decimal::ONE);
        assert_eq!(config.decimals, 0);
        assert_eq!(config.pattern, r"^\d+$");

        let dozen = InputConfig::for_item(&item(Some(Category::Minerals), None, "200ml Doz"));
        assert_eq!(dozen.decimals, 0);
    }

    #[test]
    fn test_input_config_ml_tracked_minerals() {
        for sub in [Subcategory::Syrups, Subcategory::Juices] {
            let config = InputConfig::for_item(&item(Some(Category::Minerals), Some(sub), "1L"));
            assert_eq!(config.step, Decimal::new(1, 3));
            assert_eq!(config.decimals, 3);
            assert_eq!(config.pattern, r"^\d+(\.\d{1,3})?$");
        }
    }

    #[test]
    fn test_input_config_generic() {
        let config = InputConfig::for_item(&item(Some(Category::Wine), None, "75cl"));
        assert_eq!(config.step, Decimal::new(1, 2));
        assert_eq!(config.decimals, 2);
        assert_eq!(config.pattern, r"^\d+(\.\d{1,2})?$");
        assert_eq!(config.input_type, "number");

        // Juices outside minerals get the generic rule too.
        let config = InputConfig::for_item(&item(Some(Category::Wine), Some(Subcategory::Juices), ""));
        assert_eq!(config.decimals, 2);
    }
}
