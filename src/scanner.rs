//! # Scanner Module
//!
//! Runs every registry pattern against an input string and resolves the
//! competing matches into a disjoint, time-ordered token stream.
//!
//! ## Overlap policy
//!
//! Rules are evaluated in registry order; a candidate whose span intersects
//! any already-accepted span is discarded. Earlier-registered rules therefore
//! shadow later ones regardless of match length. The tie-break is
//! first-registered-wins, not longest-match.
//!
//! ## Idempotence guard
//!
//! A candidate immediately followed by a parenthesized metric annotation is
//! discarded as already converted, which keeps repeated scans of the same
//! text from stacking annotations. The guard's unit alternation is generated
//! from the formatter's own unit table.

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::conversion::ANNOTATION_UNITS;
use crate::disambiguation;
use crate::measurement::Token;
use crate::patterns::REGISTRY;

/// Invisible directional/zero-width marks stripped before matching.
const DIRECTION_MARKERS: [char; 3] = ['\u{200e}', '\u{200f}', '\u{200b}'];

lazy_static! {
    /// Matches a parenthesized metric annotation at the start of the text
    /// following a candidate: optional whitespace, then `(12.34 unit)` with
    /// an optional `x`/`×`-separated value sequence. Case-sensitive, so the
    /// recognized spellings are exactly the formatter's.
    static ref ALREADY_ANNOTATED: Regex = Regex::new(&format!(
        r"^\s*\(-?\d+(?:\.\d+)?(?:\s*[×x]\s*-?\d+(?:\.\d+)?)*\s*(?:{})\)",
        ANNOTATION_UNITS.join("|"),
    ))
    .expect("annotation guard pattern should be valid");
}

/// Claimed span bookkeeping used to enforce token disjointness during a scan.
struct CoveredRange {
    start: usize,
    end: usize,
}

impl CoveredRange {
    fn overlaps(&self, start: usize, end: usize) -> bool {
        start < self.end && end > self.start
    }
}

/// Remove invisible directional marks (LTR/RTL marks, zero-width space) from
/// `text`.
///
/// Matching always runs on the stripped text and token indexes refer to it;
/// callers that need [`annotate`](crate::annotate)'s output base to be
/// byte-identical to their input should strip marks themselves first.
pub fn strip_direction_markers(text: &str) -> String {
    text.chars()
        .filter(|c| !DIRECTION_MARKERS.contains(c))
        .collect()
}

/// Find every measurement expression in `text`.
///
/// Returns tokens sorted ascending by start index, with pairwise-disjoint
/// match ranges and ambiguous ounces already resolved against their
/// surrounding context.
///
/// # Examples
///
/// ```rust
/// use metrify::{find_measurements, Measurement};
///
/// let tokens = find_measurements("Cable is 6.6 ft long");
///
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].matched, "6.6 ft");
/// assert_eq!(tokens[0].index, 9);
/// assert_eq!(tokens[0].measurement, Measurement::Feet(6.6));
/// ```
pub fn find_measurements(text: &str) -> Vec<Token> {
    let cleaned = strip_direction_markers(text);

    let mut tokens: Vec<Token> = Vec::new();
    let mut covered: Vec<CoveredRange> = Vec::new();

    for rule in REGISTRY.iter() {
        let mut pos = 0;
        while let Some(caps) = rule.captures_from(&cleaned, pos) {
            let matched = caps.get(0).expect("whole-match group is always present");
            let (start, end) = (matched.start(), matched.end());
            pos = end;

            if covered.iter().any(|range| range.overlaps(start, end)) {
                trace!(
                    "{}: '{}' overlaps an earlier match, skipped",
                    rule.name,
                    matched.as_str()
                );
                continue;
            }

            if ALREADY_ANNOTATED.is_match(&cleaned[end..]) {
                debug!(
                    "{}: '{}' already carries a metric annotation, skipped",
                    rule.name,
                    matched.as_str()
                );
                continue;
            }

            trace!("{}: matched '{}' at {}", rule.name, matched.as_str(), start);
            tokens.push(Token {
                measurement: rule.build_measurement(&caps),
                matched: matched.as_str().to_string(),
                index: start,
            });
            covered.push(CoveredRange { start, end });
        }
    }

    // Registry order is priority order, not text order.
    tokens.sort_by_key(|token| token.index);

    let tokens = disambiguation::disambiguate(tokens, &cleaned);
    debug!("found {} measurement token(s)", tokens.len());
    tokens
}

/// Whether `text` contains at least one measurement expression.
pub fn has_measurements(text: &str) -> bool {
    !find_measurements(text).is_empty()
}
