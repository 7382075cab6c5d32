//! # Error Types
//!
//! Domain-specific error types for stocktake-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stocktake-core errors (this file)                                     │
//! │  └── StocktakeError   - Wire-boundary failures only                    │
//! │                                                                         │
//! │  Everything past the wire boundary is TOTAL: the calculators,          │
//! │  display formatters, optimistic helpers and cross-check never fail.    │
//! │  Missing or malformed numerics coerce to zero during normalization     │
//! │  (unit factors to one), so malformed upstream data degrades to a       │
//! │  zero quantity instead of breaking a stocktake form mid-count.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Only the payload envelope can fail; arithmetic stays infallible

use thiserror::Error;

// =============================================================================
// Stocktake Error
// =============================================================================

/// Wire-boundary errors.
///
/// These only occur when a backend payload cannot be read at all, or when a
/// caller supplies a movement code outside the closed set. Field-level junk
/// inside an otherwise well-formed payload is absorbed, not surfaced.
#[derive(Debug, Error)]
pub enum StocktakeError {
    /// The payload envelope is not valid JSON (or not the expected shape).
    ///
    /// ## When This Occurs
    /// - Truncated response body
    /// - Backend returned an HTML error page instead of JSON
    #[error("malformed stocktake payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A movement code outside the closed `PURCHASE` / `WASTE` set.
    #[error("unknown movement type: {0}")]
    UnknownMovementType(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StocktakeError.
pub type StocktakeResult<T> = Result<T, StocktakeError>;

// =============================================================================
// Unit Tests
// =============================================================================
