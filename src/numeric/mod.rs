// ============================================================================
// Numeric Module
// Exact minor-unit arithmetic for book state
// ============================================================================
//
// This module provides:
// - MinorUnits<D>: integer minor-unit quantity with compile-time scale
// - NumericError: error types for conversions and arithmetic
// - Price/Size type aliases (cents, satoshis)
//
// Design principles:
// - No floating-point operations on persisted state
// - All fallible arithmetic returns Result (no panics)
// - Decimal conversion only at API boundaries (feed decoding, display)

mod errors;
mod minor_units;

pub use errors::{NumericError, NumericResult};
pub use minor_units::{MinorUnits, Price, Size};
