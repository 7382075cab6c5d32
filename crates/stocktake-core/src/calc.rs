//! # Quantity & Valuation Calculators
//!
//! The core stocktake formulas. Every function here is total and
//! deterministic, and the formula ordering is load-bearing: the backend of
//! record computes the same figures, and the two paths must agree to the
//! cross-check tolerance. Do not reassociate or "simplify" these
//! expressions.
//!
//! ## The Three Quantities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  counted  = counted_full_units × uom + counted_partial_units            │
//! │  expected = opening_qty + purchases − waste                             │
//! │  variance = counted − expected                                          │
//! │                                                                         │
//! │  variance > 0 → surplus     variance < 0 → shortage                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sales are deliberately absent from `expected`: expected remaining stock
//! reflects only supply-side movements, and consumption shows up as the
//! variance against the physical count. Any sales figure on the wire is
//! ignored.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{LineValues, StocktakeLine};
use crate::{QUANTITY_SCALE, VALUE_SCALE};

// =============================================================================
// Quantity Calculators
// =============================================================================

/// Counted quantity in base units: `full_units × uom + partial_units`.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use stocktake_core::{calc, types::StocktakeLine};
///
/// let line = StocktakeLine {
///     counted_full_units: Decimal::from(2),
///     counted_partial_units: Decimal::from(3),
///     uom: Decimal::from(10),
///     ..StocktakeLine::default()
/// };
/// assert_eq!(calc::counted_qty(&line), Decimal::from(23));
/// ```
pub fn counted_qty(line: &StocktakeLine) -> Decimal {
    line.counted_full_units * line.unit_factor() + line.counted_partial_units
}

/// Expected quantity in base units: `opening_qty + purchases − waste`.
///
/// Sales are excluded by contract; see the module docs.
pub fn expected_qty(line: &StocktakeLine) -> Decimal {
    line.opening_qty + line.purchases - line.waste
}

/// Variance in base units: `counted − expected`.
pub fn variance_qty(line: &StocktakeLine) -> Decimal {
    counted_qty(line) - expected_qty(line)
}

// =============================================================================
// Valuation
// =============================================================================

/// Currency valuation of the line's expected, counted and variance
/// quantities, each `quantity × valuation_cost`.
pub fn line_values(line: &StocktakeLine) -> LineValues {
    let cost = line.valuation_cost;
    let expected = expected_qty(line);
    let counted = counted_qty(line);
    LineValues {
        expected_value: expected * cost,
        counted_value: counted * cost,
        variance_value: (counted - expected) * cost,
    }
}

// =============================================================================
// Scale Helpers
// =============================================================================

/// Rounds a base-unit quantity to the canonical 4-decimal scale.
///
/// Round-half-away-from-zero, matching the backend's display rounding.
#[inline]
pub fn round_qty(qty: Decimal) -> Decimal {
    qty.round_dp_with_strategy(QUANTITY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a currency value to the canonical 2-decimal scale.
#[inline]
pub fn round_value(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(VALUE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Unit Tests
// =============================================================================
