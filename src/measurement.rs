//! # Measurement Data Model
//!
//! This module defines the core types produced by the scanner: the
//! [`Measurement`] sum type carrying each recognized kind's numeric payload,
//! and the [`Token`] record tying a measurement to its location in the
//! scanned text.

use serde::{Deserialize, Serialize};

use crate::conversion::{self, ConversionResult};

/// A recognized imperial measurement with its numeric payload.
///
/// One variant per supported measurement shape. `Ounces` is the ambiguous
/// bare-`oz` reading, resolved to `WeightOunces` or `FluidOunces` by the
/// disambiguator before tokens are returned to callers. `Unknown` is the
/// forward-compatibility catch-all: it is never produced by the pattern
/// registry and carries no conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    /// Feet with a fractional inch part (`5' 3 1/2"`)
    FractionalFeetInches {
        /// Whole feet
        feet: f64,
        /// Inches including the fractional part
        inches: f64,
    },
    /// Combined feet and inches (`5 feet 3 inches`, `5'3"`)
    FeetInches {
        /// Whole feet
        feet: f64,
        /// Inches
        inches: f64,
    },
    /// Three-axis inch dimensions (`10 x 5 x 2 inches`)
    Dimensions3D([f64; 3]),
    /// Two-axis inch dimensions (`10 x 5 inches`)
    Dimensions2D([f64; 2]),
    /// Square feet (`400 sq ft`, `12 ft²`)
    SquareFeet(f64),
    /// Square inches (`144 sq in`, `20 in²`)
    SquareInches(f64),
    /// Combined pounds and ounces (`2 lbs 4 oz`)
    PoundsOunces {
        /// Pounds
        pounds: f64,
        /// Ounces
        ounces: f64,
    },
    /// Pounds (`5 lbs`)
    Pounds(f64),
    /// Standalone feet (`6.6 ft`)
    Feet(f64),
    /// Standalone inches (`36 in`)
    Inches(f64),
    /// Fluid ounces (`8 fl oz`)
    FluidOunces(f64),
    /// Bare ounces, ambiguous between weight and volume until disambiguated
    Ounces(f64),
    /// Ounces resolved to a weight reading
    WeightOunces(f64),
    /// Gallons (`2 gal`)
    Gallons(f64),
    /// Quarts (`3 qt`)
    Quarts(f64),
    /// Pints (`2 pints`)
    Pints(f64),
    /// Degrees fahrenheit (`350°F`); the only kind with a signed value
    Fahrenheit(f64),
    /// Pounds per square inch (`35 PSI`)
    Psi(f64),
    /// Miles per hour (`60 mph`)
    MilesPerHour(f64),
    /// Miles (`0.5 mi`)
    Miles(f64),
    /// Unrecognized measurement kind; has no conversion
    Unknown(String),
}

impl Measurement {
    /// Short tag for logging and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Measurement::FractionalFeetInches { .. } => "fractional_ft_in",
            Measurement::FeetInches { .. } => "combined_ft_in",
            Measurement::Dimensions3D(_) => "dimensions_3d",
            Measurement::Dimensions2D(_) => "dimensions_2d",
            Measurement::SquareFeet(_) => "sq_feet",
            Measurement::SquareInches(_) => "sq_inches",
            Measurement::PoundsOunces { .. } => "combined_lbs_oz",
            Measurement::Pounds(_) => "pounds",
            Measurement::Feet(_) => "feet",
            Measurement::Inches(_) => "inches",
            Measurement::FluidOunces(_) => "fluid_oz",
            Measurement::Ounces(_) => "oz",
            Measurement::WeightOunces(_) => "weight_oz",
            Measurement::Gallons(_) => "gallons",
            Measurement::Quarts(_) => "quarts",
            Measurement::Pints(_) => "pints",
            Measurement::Fahrenheit(_) => "fahrenheit",
            Measurement::Psi(_) => "psi",
            Measurement::MilesPerHour(_) => "mph",
            Measurement::Miles(_) => "miles",
            Measurement::Unknown(_) => "unknown",
        }
    }
}

/// One recognized measurement occurrence in scanned text.
///
/// `index` and `matched.len()` define a half-open byte range over the
/// mark-stripped text. Across a scan result these ranges are pairwise
/// disjoint and sorted ascending by `index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The recognized measurement and its payload
    pub measurement: Measurement,
    /// The exact substring consumed by the pattern
    pub matched: String,
    /// Byte offset of the match in the mark-stripped text
    pub index: usize,
}

impl Token {
    /// End offset (exclusive) of the matched range.
    pub fn end(&self) -> usize {
        self.index + self.matched.len()
    }

    /// Metric conversion for this token, if its kind has one.
    pub fn conversion(&self) -> Option<ConversionResult> {
        conversion::convert(&self.measurement)
    }
}
