//! # Metric Conversion and Formatting
//!
//! Maps each [`Measurement`] kind to its metric value and renders it with
//! category-specific unit and threshold rules. Conversion is a pure function
//! of the measurement payload; the constant tables below are the only state.
//!
//! The unit spellings live in [`unit`] and are collected in
//! `ANNOTATION_UNITS`, which the scanner's already-annotated guard is built
//! from. Adding an output unit here makes the guard recognize it
//! automatically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::measurement::Measurement;

const CM_PER_INCH: f64 = 2.54;
const CM_PER_FOOT: f64 = 30.48;
const ML_PER_FL_OZ: f64 = 29.5735;
const G_PER_OZ: f64 = 28.3495;
const G_PER_POUND: f64 = 453.592;
const ML_PER_GALLON: f64 = 3785.41;
const ML_PER_QUART: f64 = 946.353;
const ML_PER_PINT: f64 = 473.176;
const SQ_CM_PER_SQ_IN: f64 = 6.4516;
const SQ_CM_PER_SQ_FT: f64 = 929.0304;
const BAR_PER_PSI: f64 = 0.0689476;
const KM_PER_MILE: f64 = 1.60934;

/// Metric unit spellings used in rendered conversions.
pub mod unit {
    /// Centimetres
    pub const CM: &str = "cm";
    /// Metres
    pub const M: &str = "m";
    /// Millilitres
    pub const ML: &str = "mL";
    /// Litres
    pub const L: &str = "L";
    /// Grams
    pub const G: &str = "g";
    /// Kilograms
    pub const KG: &str = "kg";
    /// Degrees celsius
    pub const CELSIUS: &str = "°C";
    /// Bar
    pub const BAR: &str = "bar";
    /// Kilometres per hour
    pub const KM_PER_H: &str = "km/h";
    /// Kilometres
    pub const KM: &str = "km";
    /// Square metres
    pub const SQ_M: &str = "m²";
    /// Square centimetres
    pub const SQ_CM: &str = "cm²";
}

/// Every unit spelling the formatter can emit, in the order the scanner's
/// already-annotated guard tries them.
pub(crate) const ANNOTATION_UNITS: [&str; 12] = [
    unit::CM,
    unit::M,
    unit::ML,
    unit::L,
    unit::G,
    unit::KG,
    unit::CELSIUS,
    unit::BAR,
    unit::KM_PER_H,
    unit::KM,
    unit::SQ_M,
    unit::SQ_CM,
];

/// Unit family a conversion was rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitCategory {
    /// Centimetres or metres
    Length,
    /// Square centimetres or square metres
    Area,
    /// Millilitres or litres
    Volume,
    /// Grams or kilograms
    Weight,
    /// Degrees celsius
    Temperature,
    /// Bar
    Pressure,
    /// Kilometres per hour
    Speed,
    /// Kilometres
    Distance,
}

/// A rendered metric equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Formatted metric value, e.g. `"2.01 m"`
    pub text: String,
    /// Unit family the value was rendered in
    pub category: UnitCategory,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render centimetres, switching to metres at 100 cm.
fn length(cm: f64) -> ConversionResult {
    let text = if cm >= 100.0 {
        format!("{:.2} {}", cm / 100.0, unit::M)
    } else {
        format!("{:.2} {}", cm, unit::CM)
    };
    ConversionResult {
        text,
        category: UnitCategory::Length,
    }
}

/// Render per-axis centimetre values joined by ` x `. The unit is chosen
/// from the largest axis and applied to all of them.
fn dimensions(cm_axes: &[f64]) -> ConversionResult {
    let max = cm_axes.iter().cloned().fold(0.0_f64, f64::max);
    let (scale, suffix) = if max >= 100.0 {
        (100.0, unit::M)
    } else {
        (1.0, unit::CM)
    };
    let rendered: Vec<String> = cm_axes
        .iter()
        .map(|cm| format!("{:.2}", cm / scale))
        .collect();
    ConversionResult {
        text: format!("{} {}", rendered.join(" x "), suffix),
        category: UnitCategory::Length,
    }
}

/// Render millilitres, switching to litres at 1000 mL.
fn volume(ml: f64) -> ConversionResult {
    let text = if ml >= 1000.0 {
        format!("{:.2} {}", ml / 1000.0, unit::L)
    } else {
        format!("{:.2} {}", ml, unit::ML)
    };
    ConversionResult {
        text,
        category: UnitCategory::Volume,
    }
}

/// Render grams, switching to kilograms at 1000 g.
fn weight(g: f64) -> ConversionResult {
    let text = if g >= 1000.0 {
        format!("{:.2} {}", g / 1000.0, unit::KG)
    } else {
        format!("{:.2} {}", g, unit::G)
    };
    ConversionResult {
        text,
        category: UnitCategory::Weight,
    }
}

/// Render square centimetres, switching to square metres at 10000 cm².
fn area(sq_cm: f64) -> ConversionResult {
    let text = if sq_cm >= 10000.0 {
        format!("{:.2} {}", sq_cm / 10000.0, unit::SQ_M)
    } else {
        format!("{:.2} {}", sq_cm, unit::SQ_CM)
    };
    ConversionResult {
        text,
        category: UnitCategory::Area,
    }
}

/// Render a value in a single fixed target unit.
fn fixed(value: f64, suffix: &str, category: UnitCategory) -> ConversionResult {
    ConversionResult {
        text: format!("{:.2} {}", value, suffix),
        category,
    }
}

/// Convert a measurement to its rendered metric equivalent.
///
/// Returns `None` for kinds without a conversion; callers drop those tokens
/// rather than failing.
pub fn convert(measurement: &Measurement) -> Option<ConversionResult> {
    use Measurement::*;

    let result = match measurement {
        FractionalFeetInches { feet, inches } | FeetInches { feet, inches } => {
            length(feet * CM_PER_FOOT + inches * CM_PER_INCH)
        }
        Dimensions3D(values) => {
            let cm: Vec<f64> = values.iter().map(|v| v * CM_PER_INCH).collect();
            dimensions(&cm)
        }
        Dimensions2D(values) => {
            let cm: Vec<f64> = values.iter().map(|v| v * CM_PER_INCH).collect();
            dimensions(&cm)
        }
        SquareFeet(v) => area(v * SQ_CM_PER_SQ_FT),
        SquareInches(v) => area(v * SQ_CM_PER_SQ_IN),
        PoundsOunces { pounds, ounces } => weight(pounds * G_PER_POUND + ounces * G_PER_OZ),
        Pounds(v) => weight(v * G_PER_POUND),
        Feet(v) => length(v * CM_PER_FOOT),
        Inches(v) => length(v * CM_PER_INCH),
        FluidOunces(v) => volume(v * ML_PER_FL_OZ),
        // A raw ambiguous ounce only reaches conversion when a caller builds
        // its own token stream; the default reading is weight.
        Ounces(v) | WeightOunces(v) => weight(v * G_PER_OZ),
        Gallons(v) => volume(v * ML_PER_GALLON),
        Quarts(v) => volume(v * ML_PER_QUART),
        Pints(v) => volume(v * ML_PER_PINT),
        Fahrenheit(v) => fixed((v - 32.0) * 5.0 / 9.0, unit::CELSIUS, UnitCategory::Temperature),
        Psi(v) => fixed(v * BAR_PER_PSI, unit::BAR, UnitCategory::Pressure),
        MilesPerHour(v) => fixed(v * KM_PER_MILE, unit::KM_PER_H, UnitCategory::Speed),
        Miles(v) => fixed(v * KM_PER_MILE, unit::KM, UnitCategory::Distance),
        Unknown(_) => return None,
    };

    Some(result)
}
