//! # Metrify
//!
//! Detects imperial measurement expressions embedded in free-form shopping
//! text and renders metric equivalents, without disturbing prices, stock
//! labels, or values that were already converted.
//!
//! ## Features
//!
//! - Ordered pattern registry covering lengths, dimensions, areas, weights,
//!   volumes, temperature, pressure, speed, and distance
//! - First-registered-wins overlap resolution producing a disjoint,
//!   position-ordered token stream
//! - Keyword-window disambiguation of bare `oz` between weight and volume
//! - Idempotence guard that refuses to re-annotate already-converted text
//! - Exact two-decimal metric formatting with per-category unit thresholds
//!
//! ## Usage
//!
//! ```rust
//! use metrify::{annotate, convert, find_measurements};
//!
//! assert_eq!(annotate("USB Cable 6.6FT"), "USB Cable 6.6FT (2.01 m)");
//!
//! let tokens = find_measurements("Oven safe to 350°F");
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(convert(&tokens[0]).as_deref(), Some("176.67 °C"));
//! ```

pub mod conversion;
pub mod disambiguation;
pub mod measurement;
mod numeric;
pub mod patterns;
pub mod rebuild;
pub mod scanner;

pub use conversion::{ConversionResult, UnitCategory};
pub use measurement::{Measurement, Token};
pub use rebuild::annotate;
pub use scanner::{find_measurements, has_measurements, strip_direction_markers};

/// Render the metric equivalent of a token, or `None` when its kind has no
/// conversion.
pub fn convert(token: &Token) -> Option<String> {
    conversion::convert(&token.measurement).map(|result| result.text)
}
