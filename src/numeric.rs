//! # Numeric Parsing
//!
//! Turns numeral substrings captured by the measurement patterns into
//! floating-point values.

/// Parse a numeral captured by a measurement pattern.
///
/// Comma thousands separators are stripped before parsing ("1,200" becomes
/// 1200.0). A leading sign is accepted; only the fahrenheit pattern captures
/// one.
///
/// The pattern grammars only ever capture well-formed numerals, so a parse
/// failure here is an internal inconsistency rather than an input error, and
/// panics.
pub(crate) fn parse_number(raw: &str) -> f64 {
    raw.replace(',', "")
        .parse()
        .expect("pattern digit grammar should guarantee a parseable numeral")
}

/// Combine a whole part and a `numerator/denominator` part ("3 1/2") into a
/// single value.
pub(crate) fn mixed_fraction(whole: &str, numerator: &str, denominator: &str) -> f64 {
    parse_number(whole) + parse_number(numerator) / parse_number(denominator)
}
