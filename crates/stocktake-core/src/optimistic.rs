//! # Optimistic Update Helpers
//!
//! Lets a count form reflect a movement or count entry immediately, before
//! the backend round-trip confirms it.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User enters movement/count                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_movement / apply_count  ← THIS MODULE (pure, returns new line)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI renders optimistic rollups while the POST is in flight              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Backend response overwrites the line (source of truth)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both helpers recompute rollups with the exact `calc` formulas, rounded
//! to the canonical scales (4 decimals for quantities, 2 for currency).
//! The input line is never mutated.

use rust_decimal::Decimal;

use crate::calc;
use crate::types::{MovementType, StocktakeLine};

// =============================================================================
// Movement Entry
// =============================================================================

/// Applies a purchase or waste entry of `quantity` base units, returning a
/// new line with the movement total and the expected-side rollups updated.
///
/// Counted rollups are untouched: entering a delivery does not change what
/// was physically counted.
pub fn apply_movement(
    line: &StocktakeLine,
    movement: MovementType,
    quantity: Decimal,
) -> StocktakeLine {
    let mut next = line.clone();
    match movement {
        MovementType::Purchase => next.purchases = calc::round_qty(next.purchases + quantity),
        MovementType::Waste => next.waste = calc::round_qty(next.waste + quantity),
    }

    let expected = calc::expected_qty(&next);
    let counted = calc::counted_qty(&next);
    next.expected_qty = calc::round_qty(expected);
    next.variance_qty = calc::round_qty(counted - expected);
    next.expected_value = calc::round_value(expected * next.valuation_cost);
    next.variance_value = calc::round_value((counted - expected) * next.valuation_cost);
    next
}

// =============================================================================
// Count Entry
// =============================================================================

/// Applies a raw count entry, returning a new line with the counts and the
/// counted-side rollups updated.
///
/// `expected_qty` is never altered here: counting stock cannot change how
/// much stock was supposed to be there.
pub fn apply_count(
    line: &StocktakeLine,
    full_units: Decimal,
    partial_units: Decimal,
) -> StocktakeLine {
    let mut next = line.clone();
    next.counted_full_units = full_units;
    next.counted_partial_units = partial_units;

    let expected = calc::expected_qty(&next);
    let counted = calc::counted_qty(&next);
    next.counted_qty = calc::round_qty(counted);
    next.variance_qty = calc::round_qty(counted - expected);
    next.counted_value = calc::round_value(counted * next.valuation_cost);
    next.variance_value = calc::round_value((counted - expected) * next.valuation_cost);
    next
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::fixed;
    use crate::{CROSS_CHECK_TOLERANCE, QUANTITY_SCALE};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn backend_line() -> StocktakeLine {
        StocktakeLine {
            opening_qty: dec("88.0"),
            purchases: dec("176.0"),
            waste: dec("4.5"),
            counted_full_units: dec("2"),
            counted_partial_units: dec("41.5"),
            uom: dec("88"),
            valuation_cost: dec("0.52"),
            expected_qty: dec("259.5"),
            counted_qty: dec("217.5"),
            variance_qty: dec("-42.0"),
            expected_value: dec("134.94"),
            counted_value: dec("113.10"),
            variance_value: dec("-21.84"),
            ..StocktakeLine::default()
        }
    }

    #[test]
    fn test_purchase_increases_purchases_exactly() {
        let line = backend_line();
        let next = apply_movement(&line, MovementType::Purchase, dec("5"));
        assert_eq!(next.purchases, line.purchases + dec("5"));
        assert_eq!(next.waste, line.waste);
    }

    #[test]
    fn test_purchase_recomputes_expected_consistently() {
        let next = apply_movement(&backend_line(), MovementType::Purchase, dec("5"));
        assert_eq!(next.expected_qty, calc::round_qty(calc::expected_qty(&next)));
        // 88 + 181 - 4.5
        assert_eq!(next.expected_qty, dec("264.5"));
        assert_eq!(next.variance_qty, dec("-47"));
        assert_eq!(next.expected_value, calc::round_value(dec("264.5") * dec("0.52")));
        assert_eq!(next.variance_value, calc::round_value(dec("-47") * dec("0.52")));
    }

    #[test]
    fn test_waste_movement() {
        let line = backend_line();
        let next = apply_movement(&line, MovementType::Waste, dec("2.5"));
        assert_eq!(next.waste, dec("7"));
        assert_eq!(next.purchases, line.purchases);
        assert_eq!(next.expected_qty, dec("257"));
    }

    #[test]
    fn test_movement_leaves_counted_rollups_alone() {
        let line = backend_line();
        let next = apply_movement(&line, MovementType::Purchase, dec("5"));
        assert_eq!(next.counted_qty, line.counted_qty);
        assert_eq!(next.counted_value, line.counted_value);
    }

    #[test]
    fn test_movement_does_not_mutate_input() {
        let line = backend_line();
        let snapshot = line.clone();
        let _ = apply_movement(&line, MovementType::Waste, dec("9.9"));
        assert_eq!(line, snapshot);
    }

    #[test]
    fn test_apply_count_never_alters_expected() {
        let line = backend_line();
        let next = apply_count(&line, dec("3"), dec("0.75"));
        assert_eq!(next.expected_qty, line.expected_qty);
        assert_eq!(next.expected_value, line.expected_value);
    }

    #[test]
    fn test_apply_count_recomputes_counted_rollups() {
        let next = apply_count(&backend_line(), dec("3"), dec("0.75"));
        assert_eq!(next.counted_full_units, dec("3"));
        assert_eq!(next.counted_partial_units, dec("0.75"));
        // 3 × 88 + 0.75
        assert_eq!(next.counted_qty, dec("264.75"));
        assert_eq!(next.variance_qty, dec("5.25"));
        assert_eq!(next.counted_value, calc::round_value(dec("264.75") * dec("0.52")));
        assert_eq!(next.variance_value, calc::round_value(dec("5.25") * dec("0.52")));
    }

    #[test]
    fn test_fixed_string_round_trip_within_tolerance() {
        let next = apply_movement(&backend_line(), MovementType::Purchase, dec("0.3333"));
        let rendered = fixed(next.variance_qty, QUANTITY_SCALE);
        let reparsed: Decimal = rendered.parse().unwrap();
        assert!((reparsed - next.variance_qty).abs() <= CROSS_CHECK_TOLERANCE);
    }
}
