//! # Measurement Patterns Module
//!
//! The ordered catalogue of measurement shapes the scanner recognizes. Each
//! [`PatternRule`] pairs a case-insensitive matching rule with a token
//! builder.
//!
//! Registration order is a priority list: the scanner keeps the
//! first-registered match wherever two rules claim overlapping text, so
//! combined and compound forms (feet+inches, sq ft, lbs+oz, mph) are
//! registered before their simpler components (feet, inches, pounds, ounces,
//! miles). The tie-break is first-registered-wins, not longest-match.

use fancy_regex::{Captures, Regex};
use lazy_static::lazy_static;

use crate::measurement::Measurement;
use crate::numeric;

/// Numeral grammar shared by the rules: optional comma grouping of exactly
/// three digits, optional decimal part. Signs are added only where a rule
/// permits them.
const NUM: &str = r"\d{1,3}(?:,\d{3})*(?:\.\d+)?";

/// Stop-words that may follow a bare `in` without it meaning inches
/// ("5 in stock", "comes in a box"). The bare-`in` alternative refuses to
/// match when one of these follows.
const IN_STOP_WORDS: &str = "the|a|an|stock|store|cart|total|color|this|that|our|your|my|its|one|all|any|no|each|every|some|most|both|part|front|back|between|addition|order|length";

/// One entry in the pattern registry: a measurement shape's matching rule
/// paired with its token builder.
pub struct PatternRule {
    /// Rule tag used in logs
    pub name: &'static str,
    regex: Regex,
    build: fn(&Captures) -> Measurement,
}

impl PatternRule {
    fn new(name: &'static str, pattern: &str, build: fn(&Captures) -> Measurement) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("measurement pattern should be valid"),
            build,
        }
    }

    /// Next match at or after `pos`. The grammars below cannot drive the
    /// engine into a failure, so one is treated as an internal defect.
    pub(crate) fn captures_from<'t>(&self, text: &'t str, pos: usize) -> Option<Captures<'t>> {
        self.regex
            .captures_from_pos(text, pos)
            .expect("measurement pattern evaluation should not fail")
    }

    /// Build the measurement for a successful match.
    pub(crate) fn build_measurement(&self, caps: &Captures) -> Measurement {
        (self.build)(caps)
    }
}

/// A capture group's text. Groups referenced here always participate in a
/// successful match of their rule.
fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i)
        .expect("capture group should participate in match")
        .as_str()
}

fn number(caps: &Captures, i: usize) -> f64 {
    numeric::parse_number(group(caps, i))
}

lazy_static! {
    /// The pattern registry, in priority order.
    pub static ref REGISTRY: Vec<PatternRule> = build_registry();
}

fn build_registry() -> Vec<PatternRule> {
    vec![
        PatternRule::new(
            "fractional_ft_in",
            r#"(?i)(\d+)\s*['′’]\s*(\d+)\s+(\d+)/(\d+)\s*["″”]"#,
            |caps| Measurement::FractionalFeetInches {
                feet: number(caps, 1),
                inches: numeric::mixed_fraction(group(caps, 2), group(caps, 3), group(caps, 4)),
            },
        ),
        PatternRule::new(
            "combined_ft_in",
            &format!(r#"(?i)({NUM})\s*(?:feet|foot|ft|['′’])\s*({NUM})\s*(?:inches|inch|in\.?|["″”])"#),
            |caps| Measurement::FeetInches {
                feet: number(caps, 1),
                inches: number(caps, 2),
            },
        ),
        PatternRule::new(
            "dimensions_3d",
            &format!(r#"(?i)({NUM})\s*[x×]\s*({NUM})\s*[x×]\s*({NUM})\s*(?:inches|inch|in\.|in\b|["″”])"#),
            |caps| Measurement::Dimensions3D([number(caps, 1), number(caps, 2), number(caps, 3)]),
        ),
        PatternRule::new(
            "dimensions_2d",
            &format!(r#"(?i)({NUM})\s*[x×]\s*({NUM})\s*(?:inches|inch|in\.|in\b|["″”])"#),
            |caps| Measurement::Dimensions2D([number(caps, 1), number(caps, 2)]),
        ),
        PatternRule::new(
            "sq_feet",
            &format!(r"(?i)({NUM})\s*(?:square\s+feet|square\s+foot|sq\.?\s*ft\.?|ft²)(?!\w)"),
            |caps| Measurement::SquareFeet(number(caps, 1)),
        ),
        PatternRule::new(
            "sq_inches",
            &format!(r"(?i)({NUM})\s*(?:square\s+inches?|sq\.?\s*in\.?|in²)(?!\w)"),
            |caps| Measurement::SquareInches(number(caps, 1)),
        ),
        PatternRule::new(
            "combined_lbs_oz",
            &format!(r"(?i)({NUM})\s*(?:pounds?|lbs?\.?)\s+({NUM})\s*(?:ounces?|onzas?|oz\.?)\b"),
            |caps| Measurement::PoundsOunces {
                pounds: number(caps, 1),
                ounces: number(caps, 2),
            },
        ),
        PatternRule::new(
            "pounds",
            &format!(r"(?i)({NUM})\s*(?:pounds?|lbs?\.?)\b"),
            |caps| Measurement::Pounds(number(caps, 1)),
        ),
        PatternRule::new(
            "feet",
            // Must not precede another numeral, which belongs to the
            // combined feet+inches form.
            &format!(r"(?i)({NUM})\s*(?:feet|foot|ft\.|ft\b|['′’])(?!\s*\d)"),
            |caps| Measurement::Feet(number(caps, 1)),
        ),
        PatternRule::new(
            "inches",
            &format!(
                r#"(?i)({NUM})\s*(?:inches|inch|in\b(?!\s*(?:{IN_STOP_WORDS}))|in\.|["″”])"#
            ),
            |caps| Measurement::Inches(number(caps, 1)),
        ),
        PatternRule::new(
            "fluid_oz",
            &format!(r"(?i)({NUM})\s*(?:fl\.?\s*oz\.?|fluid\s+ounces?)\b"),
            |caps| Measurement::FluidOunces(number(caps, 1)),
        ),
        PatternRule::new(
            "oz",
            &format!(r"(?i)({NUM})\s*(?:ounces?|onzas?|oz\.?)\b"),
            |caps| Measurement::Ounces(number(caps, 1)),
        ),
        PatternRule::new(
            "gallons",
            &format!(r"(?i)({NUM})\s*(?:gallons?|gal\.?)\b"),
            |caps| Measurement::Gallons(number(caps, 1)),
        ),
        PatternRule::new(
            "quarts",
            &format!(r"(?i)({NUM})\s*(?:quarts?|qt\.?)\b"),
            |caps| Measurement::Quarts(number(caps, 1)),
        ),
        PatternRule::new(
            "pints",
            &format!(r"(?i)({NUM})\s*(?:pints?|pt\.?)\b"),
            |caps| Measurement::Pints(number(caps, 1)),
        ),
        PatternRule::new(
            "fahrenheit",
            // The degree glyph is required; a bare trailing F is a model
            // number or size, not a temperature.
            &format!(r"(?i)(-?{NUM})\s*(?:°\s*F|℉|degrees\s+fahrenheit)(?!\w)"),
            |caps| Measurement::Fahrenheit(number(caps, 1)),
        ),
        PatternRule::new(
            "psi",
            &format!(r"(?i)({NUM})\s*psi\b"),
            |caps| Measurement::Psi(number(caps, 1)),
        ),
        PatternRule::new(
            "mph",
            &format!(r"(?i)({NUM})\s*(?:mph|miles\s+per\s+hour)\b"),
            |caps| Measurement::MilesPerHour(number(caps, 1)),
        ),
        PatternRule::new(
            "miles",
            &format!(r"(?i)({NUM})\s*(?:miles?|mi\.?)\b"),
            |caps| Measurement::Miles(number(caps, 1)),
        ),
    ]
}
