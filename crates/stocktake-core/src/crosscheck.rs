//! # Cross-Validation
//!
//! Development-time consistency check between two independently implemented
//! computation paths: this crate's calculators and the backend of record.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calc::expected_qty(line)  ──┐                                          │
//! │  calc::counted_qty(line)   ──┼──►  compare, |Δ| ≤ 0.0001  ──► report    │
//! │  calc::variance_qty(line)  ──┘           ▲                              │
//! │                                          │                              │
//! │  line.expected_qty / counted_qty / variance_qty (backend rollups)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The comparison is advisory, never a runtime correctness gate: the report
//! is returned to the caller, and the caller decides whether to call
//! [`CrossCheckReport::log`]. The tolerance absorbs float drift from the
//! backend's serialization path.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calc;
use crate::types::StocktakeLine;
use crate::CROSS_CHECK_TOLERANCE;

// =============================================================================
// Report Types
// =============================================================================

/// One field's frontend-vs-backend comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldCheck {
    #[ts(as = "String")]
    pub frontend: Decimal,
    #[ts(as = "String")]
    pub backend: Decimal,
    pub matched: bool,
    /// Absolute difference between the two figures.
    #[ts(as = "String")]
    pub difference: Decimal,
}

impl FieldCheck {
    fn compare(frontend: Decimal, backend: Decimal) -> Self {
        let difference = (frontend - backend).abs();
        FieldCheck {
            frontend,
            backend,
            matched: difference <= CROSS_CHECK_TOLERANCE,
            difference,
        }
    }
}

/// Comparison of the three rollup quantities for one line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrossCheckReport {
    pub expected: FieldCheck,
    pub counted: FieldCheck,
    pub variance: FieldCheck,
}

impl CrossCheckReport {
    /// True when all three fields agree within tolerance.
    pub fn is_consistent(&self) -> bool {
        self.expected.matched && self.counted.matched && self.variance.matched
    }

    /// Emits advisory tracing output: a warning on mismatch, a debug
    /// confirmation otherwise. Calling this is the caller's choice.
    pub fn log(&self, item_name: &str) {
        if self.is_consistent() {
            tracing::debug!(item = item_name, "stocktake cross-check passed");
        } else {
            tracing::warn!(
                item = item_name,
                expected_frontend = %self.expected.frontend,
                expected_backend = %self.expected.backend,
                counted_frontend = %self.counted.frontend,
                counted_backend = %self.counted.backend,
                variance_frontend = %self.variance.frontend,
                variance_backend = %self.variance.backend,
                "stocktake cross-check mismatch"
            );
        }
    }
}

// =============================================================================
// Check Operations
// =============================================================================

/// Compares quantities recomputed from `frontend`'s movement/count inputs
/// against the rollups `backend` carries for the same line.
pub fn check_lines(frontend: &StocktakeLine, backend: &StocktakeLine) -> CrossCheckReport {
    CrossCheckReport {
        expected: FieldCheck::compare(calc::expected_qty(frontend), backend.expected_qty),
        counted: FieldCheck::compare(calc::counted_qty(frontend), backend.counted_qty),
        variance: FieldCheck::compare(calc::variance_qty(frontend), backend.variance_qty),
    }
}

/// Checks one line against its own backend-supplied rollups.
pub fn check_line(line: &StocktakeLine) -> CrossCheckReport {
    check_lines(line, line)
}

// =============================================================================
// Unit Tests
// =============================================================================
