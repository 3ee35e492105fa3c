//! # Ounce Disambiguation
//!
//! A bare `oz` is ambiguous: product listings use it both for weight
//! ("16 oz coffee beans") and for volume ("18 oz water bottle"). The
//! resolver is a fixed keyword heuristic over a small context window, not
//! any kind of inference.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::measurement::{Measurement, Token};

/// Characters of context inspected on each side of an ambiguous match.
const CONTEXT_WINDOW: usize = 50;

lazy_static! {
    /// Context words implying a liquid product.
    static ref LIQUID_KEYWORDS: Regex = Regex::new(
        r"(?i)\b(?:bottle|water|liquid|beverage|juice|milk|drink|rinse|pitcher|jug|carafe|canteen|thermos|tumbler|flask|spray|solution)\b"
    )
    .expect("liquid keyword pattern should be valid");

    /// Context words implying a dry or solid product.
    static ref DRY_KEYWORDS: Regex = Regex::new(
        r"(?i)\b(?:bean|beans|powder|flour|coffee|grain|seed|seeds|nut|nuts|spice|spices|herb|herbs|sugar|salt|rice|oat|oats|protein|supplement|extract)\b"
    )
    .expect("dry keyword pattern should be valid");
}

/// Resolve ambiguous-ounce tokens against their surrounding text.
///
/// Dry keywords are checked first and win when both kinds appear in the
/// window; liquid keywords alone reclassify to fluid ounces; with neither,
/// the weight reading is kept. Tokens of any other kind pass through
/// unchanged.
pub fn disambiguate(tokens: Vec<Token>, text: &str) -> Vec<Token> {
    tokens
        .into_iter()
        .map(|mut token| {
            let Measurement::Ounces(value) = token.measurement else {
                return token;
            };

            let context = context_window(text, token.index, token.end());
            token.measurement = if DRY_KEYWORDS.is_match(context) {
                Measurement::WeightOunces(value)
            } else if LIQUID_KEYWORDS.is_match(context) {
                debug!("'{}' reclassified as fluid ounces", token.matched);
                Measurement::FluidOunces(value)
            } else {
                Measurement::WeightOunces(value)
            };
            token
        })
        .collect()
}

/// Up to [`CONTEXT_WINDOW`] characters on each side of `[start, end)`,
/// clamped to the text.
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let mut start = start.min(text.len());
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = end.clamp(start, text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }

    let begin = text[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_WINDOW - 1)
        .map_or(0, |(i, _)| i);
    let finish = text[end..]
        .char_indices()
        .nth(CONTEXT_WINDOW)
        .map_or(text.len(), |(i, _)| end + i);

    &text[begin..finish]
}
