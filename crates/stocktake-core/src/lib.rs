//! # stocktake-core: Pure Valuation Logic for Hotel Stocktakes
//!
//! This crate is the arithmetic heart of the stocktake workflow. It turns
//! raw counts (full units + partials) into base-unit quantities, computes
//! expected stock from supply-side movements, values the variance in
//! currency terms, and selects the category-specific rounding rules the
//! count forms use — all as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Stocktake Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Staff Web Front-End (TypeScript)                 │   │
//! │  │    Count forms ──► Movement modals ──► Variance dashboards      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ exported .ts bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stocktake-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │  ┌────────┐ ┌──────┐ ┌─────────┐ ┌────────────┐ ┌────────────┐ │   │
//! │  │  │ types  │ │ calc │ │ display │ │ optimistic │ │ crosscheck │ │   │
//! │  │  │ Line   │ │ qty  │ │ rounding│ │  updates   │ │  reports   │ │   │
//! │  │  │ enums  │ │ value│ │ widgets │ │            │ │            │ │   │
//! │  │  └────────┘ └──────┘ └─────────┘ └────────────┘ └────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ wire::parse_lines                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 REST Backend (source of truth)                  │   │
//! │  │        Stocktake lines, movements, persisted rollups            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (StocktakeLine, Category, MovementType, ...)
//! - [`wire`] - Lenient backend payload parsing and normalization
//! - [`calc`] - Counted/expected/variance quantities and valuation
//! - [`display`] - Full/partial unit splitting and input-widget rules
//! - [`optimistic`] - Pure optimistic-update helpers for in-flight edits
//! - [`crosscheck`] - Frontend-vs-backend consistency reports
//! - [`error`] - Wire-boundary error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output. Safe to call concurrently from any UI call site.
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here.
//! 3. **Exact Decimals**: All quantities and currency values are
//!    `rust_decimal::Decimal` - no binary-float drift in business figures.
//! 4. **Backend Parity**: Formula ordering and rounding points match the
//!    backend of record exactly; discrepancies surface via [`crosscheck`].
//! 5. **Total Arithmetic**: Malformed upstream numerics coerce to zero at
//!    the wire boundary; nothing past it can fail or panic.
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use stocktake_core::{calc, wire};
//!
//! let line = wire::parse_line(
//!     r#"{
//!         "opening_qty": "88.0000",
//!         "purchases": "176.0000",
//!         "waste": "4.5000",
//!         "counted_full_units": "2",
//!         "counted_partial_units": "41.5",
//!         "item_uom": "88.00",
//!         "valuation_cost": "0.52",
//!         "category_code": "D"
//!     }"#,
//! )?;
//!
//! assert_eq!(calc::expected_qty(&line), Decimal::from(2595) / Decimal::from(10));
//! assert_eq!(calc::counted_qty(&line), Decimal::from(2175) / Decimal::from(10));
//! assert_eq!(calc::variance_qty(&line), Decimal::from(-42));
//! # Ok::<(), stocktake_core::StocktakeError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calc;
pub mod crosscheck;
pub mod display;
pub mod error;
pub mod optimistic;
pub mod types;
pub mod wire;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stocktake_core::StocktakeLine` instead of
// `use stocktake_core::types::StocktakeLine`

pub use crosscheck::{CrossCheckReport, FieldCheck};
pub use display::{DisplayUnits, InputConfig};
pub use error::{StocktakeError, StocktakeResult};
pub use types::{Category, ItemProfile, LineValues, MovementType, StocktakeLine, Subcategory};

use rust_decimal::Decimal;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Decimal places for base-unit quantities in optimistic rollups.
///
/// ## Why 4?
/// The backend persists movement quantities at scale 4; matching it keeps
/// optimistic figures byte-identical to the confirmed response.
pub const QUANTITY_SCALE: u32 = 4;

/// Decimal places for currency values.
pub const VALUE_SCALE: u32 = 2;

/// Absolute tolerance for frontend-vs-backend cross-checks (0.0001).
///
/// Wide enough to absorb float drift from the backend's serialization
/// path, tight enough to catch a real formula divergence.
pub const CROSS_CHECK_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_constant() {
        assert_eq!(CROSS_CHECK_TOLERANCE, "0.0001".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_scales() {
        assert_eq!(QUANTITY_SCALE, 4);
        assert_eq!(VALUE_SCALE, 2);
    }
}
