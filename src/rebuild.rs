//! # Text Rebuilding
//!
//! Splices the scanned text back together with a metric annotation appended
//! after each accepted measurement, leaving everything between tokens
//! untouched.

use log::debug;

use crate::conversion;
use crate::scanner::{find_measurements, strip_direction_markers};

/// Rebuild `text` with ` (<metric>)` appended after each detected
/// measurement.
///
/// Text that was already annotated is left alone, so the operation is
/// idempotent. Tokens whose kind has no conversion are skipped by omission.
/// When nothing is detected the input is returned unchanged; when
/// annotations are inserted the rebuilt base is the mark-stripped text that
/// token indexes refer to (see
/// [`strip_direction_markers`](crate::strip_direction_markers)).
///
/// # Examples
///
/// ```rust
/// use metrify::annotate;
///
/// assert_eq!(annotate("USB Cable 6.6FT"), "USB Cable 6.6FT (2.01 m)");
/// assert_eq!(annotate("Great product, 5 stars"), "Great product, 5 stars");
/// ```
pub fn annotate(text: &str) -> String {
    let tokens = find_measurements(text);
    if tokens.is_empty() {
        return text.to_string();
    }

    let cleaned = strip_direction_markers(text);
    let mut result = String::with_capacity(cleaned.len() + tokens.len() * 12);
    let mut last = 0;

    for token in &tokens {
        let Some(conversion) = conversion::convert(&token.measurement) else {
            continue;
        };

        debug!(
            "annotating '{}' ({}) with '{}'",
            token.matched,
            token.measurement.kind_name(),
            conversion.text
        );
        result.push_str(&cleaned[last..token.end()]);
        result.push_str(" (");
        result.push_str(&conversion.text);
        result.push(')');
        last = token.end();
    }
    result.push_str(&cleaned[last..]);

    result
}
