#[cfg(test)]
mod tests {
    use metrify::{find_measurements, Measurement, Token};

    /// Scan `text` expecting exactly one token.
    fn single(text: &str) -> Token {
        let tokens = find_measurements(text);
        assert_eq!(tokens.len(), 1, "expected one token in '{}'", text);
        tokens.into_iter().next().unwrap()
    }

    fn assert_none(text: &str) {
        let tokens = find_measurements(text);
        assert!(
            tokens.is_empty(),
            "expected no tokens in '{}', got {:?}",
            text,
            tokens
        );
    }

    #[test]
    fn test_fractional_feet_inches() {
        let token = single(r#"5' 3 1/2""#);
        assert_eq!(
            token.measurement,
            Measurement::FractionalFeetInches {
                feet: 5.0,
                inches: 3.5
            }
        );
        assert_eq!(token.matched, r#"5' 3 1/2""#);
    }

    #[test]
    fn test_combined_feet_inches() {
        assert_eq!(
            single("5 feet 3 inches").measurement,
            Measurement::FeetInches {
                feet: 5.0,
                inches: 3.0
            }
        );
        assert_eq!(
            single("5'3\"").measurement,
            Measurement::FeetInches {
                feet: 5.0,
                inches: 3.0
            }
        );
        assert_eq!(
            single("10ft 6in").measurement,
            Measurement::FeetInches {
                feet: 10.0,
                inches: 6.0
            }
        );
    }

    #[test]
    fn test_combined_wins_over_standalone() {
        assert_eq!(
            single("5 ft 10 in").measurement,
            Measurement::FeetInches {
                feet: 5.0,
                inches: 10.0
            }
        );
        assert_eq!(
            single("The cable is 5 feet 3 inches long").measurement,
            Measurement::FeetInches {
                feet: 5.0,
                inches: 3.0
            }
        );
    }

    #[test]
    fn test_dimensions_3d() {
        assert_eq!(
            single("10 x 5 x 2 inches").measurement,
            Measurement::Dimensions3D([10.0, 5.0, 2.0])
        );
        assert_eq!(
            single("10.5 x 5.25 x 2.1 in.").measurement,
            Measurement::Dimensions3D([10.5, 5.25, 2.1])
        );
        assert_eq!(
            single("10 \u{d7} 5 \u{d7} 2 inches").measurement,
            Measurement::Dimensions3D([10.0, 5.0, 2.0])
        );
    }

    #[test]
    fn test_dimensions_2d() {
        assert_eq!(
            single("10 x 5 inches").measurement,
            Measurement::Dimensions2D([10.0, 5.0])
        );
    }

    #[test]
    fn test_feet() {
        assert_eq!(single("6.6 feet").measurement, Measurement::Feet(6.6));
        assert_eq!(single("10 ft").measurement, Measurement::Feet(10.0));
        assert_eq!(single("6.6FT").measurement, Measurement::Feet(6.6));
        assert_eq!(single("400 ft cable").measurement, Measurement::Feet(400.0));
    }

    #[test]
    fn test_feet_with_comma_numbers() {
        let token = single("1,200 ft");
        assert_eq!(token.measurement, Measurement::Feet(1200.0));
        assert_eq!(token.matched, "1,200 ft");

        assert_eq!(single("10,000 ft").measurement, Measurement::Feet(10000.0));
        assert_eq!(single("1,200.5 ft").measurement, Measurement::Feet(1200.5));
    }

    #[test]
    fn test_inches() {
        assert_eq!(single("36 inches").measurement, Measurement::Inches(36.0));
        assert_eq!(
            single("He said 12\" is enough").measurement,
            Measurement::Inches(12.0)
        );
        assert_eq!(single("6 in.").measurement, Measurement::Inches(6.0));
        assert_eq!(
            single("1,200 inches").measurement,
            Measurement::Inches(1200.0)
        );
    }

    #[test]
    fn test_bare_in() {
        assert_eq!(single("36 in").measurement, Measurement::Inches(36.0));
        assert_eq!(
            single("36 in, very nice").measurement,
            Measurement::Inches(36.0)
        );
        assert_eq!(single("2.5 in").measurement, Measurement::Inches(2.5));
    }

    #[test]
    fn test_bare_in_stop_words() {
        assert_none("5 in stock");
        assert_none("5 in the box");
        assert_none("5 in cart");
        assert_none("comes in a box");
        assert_none("available in all colors");
        assert_none("Included in the box");
        assert_none("Only $10 in stock");
    }

    #[test]
    fn test_smart_quotes() {
        assert_eq!(single("6\u{2019}").measurement, Measurement::Feet(6.0));
        assert_eq!(single("12\u{201d}").measurement, Measurement::Inches(12.0));
        assert_eq!(
            single("5\u{2019}3\u{201d}").measurement,
            Measurement::FeetInches {
                feet: 5.0,
                inches: 3.0
            }
        );
    }

    #[test]
    fn test_square_feet() {
        assert_eq!(
            single("400 sq ft").measurement,
            Measurement::SquareFeet(400.0)
        );
        assert_eq!(
            single("100 square feet").measurement,
            Measurement::SquareFeet(100.0)
        );
        assert_eq!(single("12 ft² area").measurement, Measurement::SquareFeet(12.0));
        assert_eq!(
            single("50 sq. ft.").measurement,
            Measurement::SquareFeet(50.0)
        );
        assert_eq!(
            single("1,200 sq ft").measurement,
            Measurement::SquareFeet(1200.0)
        );
    }

    #[test]
    fn test_square_inches() {
        assert_eq!(
            single("144 sq in").measurement,
            Measurement::SquareInches(144.0)
        );
        assert_eq!(
            single("10 square inches").measurement,
            Measurement::SquareInches(10.0)
        );
        assert_eq!(single("20 in²").measurement, Measurement::SquareInches(20.0));
    }

    #[test]
    fn test_square_feet_does_not_steal_plain_feet() {
        let tokens = find_measurements("Room is 400 sq ft with 10 ft ceilings");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].measurement, Measurement::SquareFeet(400.0));
        assert_eq!(tokens[1].measurement, Measurement::Feet(10.0));
    }

    #[test]
    fn test_combined_lbs_oz() {
        assert_eq!(
            single("2 lbs 4 oz bag").measurement,
            Measurement::PoundsOunces {
                pounds: 2.0,
                ounces: 4.0
            }
        );
        assert_eq!(
            single("5 pounds 8 ounces").measurement,
            Measurement::PoundsOunces {
                pounds: 5.0,
                ounces: 8.0
            }
        );
        assert_eq!(
            single("1 lb 2 oz").measurement,
            Measurement::PoundsOunces {
                pounds: 1.0,
                ounces: 2.0
            }
        );
        assert_eq!(
            single("1,000 lbs 4 oz").measurement,
            Measurement::PoundsOunces {
                pounds: 1000.0,
                ounces: 4.0
            }
        );
    }

    #[test]
    fn test_pounds() {
        assert_eq!(single("5 lbs").measurement, Measurement::Pounds(5.0));
        assert_eq!(single("2.5 pounds").measurement, Measurement::Pounds(2.5));
        assert_eq!(single("10 lb.").measurement, Measurement::Pounds(10.0));
        assert_eq!(single("1,200 lbs").measurement, Measurement::Pounds(1200.0));
    }

    #[test]
    fn test_fluid_ounces() {
        assert_eq!(single("8 fl oz").measurement, Measurement::FluidOunces(8.0));
        assert_eq!(
            single("8 fl. oz.").measurement,
            Measurement::FluidOunces(8.0)
        );
        assert_eq!(
            single("20 fluid ounces").measurement,
            Measurement::FluidOunces(20.0)
        );
    }

    #[test]
    fn test_bare_ounces_default_to_weight() {
        assert_eq!(single("8 oz").measurement, Measurement::WeightOunces(8.0));
        assert_eq!(
            single("16 ounces").measurement,
            Measurement::WeightOunces(16.0)
        );
        assert_eq!(single("1 onza").measurement, Measurement::WeightOunces(1.0));
        assert_eq!(
            single("16 onzas").measurement,
            Measurement::WeightOunces(16.0)
        );
        assert_eq!(
            single("1,500 oz").measurement,
            Measurement::WeightOunces(1500.0)
        );
    }

    #[test]
    fn test_ounce_disambiguation_in_context() {
        assert_eq!(
            single("18 oz water bottle").measurement,
            Measurement::FluidOunces(18.0)
        );
        assert_eq!(
            single("16 oz coffee beans").measurement,
            Measurement::WeightOunces(16.0)
        );
        assert_eq!(
            single("16 oz beans drink").measurement,
            Measurement::WeightOunces(16.0)
        );
    }

    #[test]
    fn test_fluid_and_ambiguous_ounces_together() {
        let tokens = find_measurements("32 fl oz bottle, 4 oz per serving");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].measurement, Measurement::FluidOunces(32.0));
        // "bottle" sits inside the context window, so the bare oz reads as
        // fluid too.
        assert_eq!(tokens[1].measurement, Measurement::FluidOunces(4.0));
    }

    #[test]
    fn test_gallons() {
        assert_eq!(single("2 gallons").measurement, Measurement::Gallons(2.0));
        assert_eq!(single("1 gallon").measurement, Measurement::Gallons(1.0));
        assert_eq!(single("5 gal").measurement, Measurement::Gallons(5.0));
        assert_eq!(single("0.5 gal.").measurement, Measurement::Gallons(0.5));
        assert_eq!(
            single("1,000 gallons").measurement,
            Measurement::Gallons(1000.0)
        );
    }

    #[test]
    fn test_quarts() {
        assert_eq!(single("1 quart").measurement, Measurement::Quarts(1.0));
        assert_eq!(single("2 quarts").measurement, Measurement::Quarts(2.0));
        assert_eq!(single("3 qt").measurement, Measurement::Quarts(3.0));
        assert_eq!(single("1 qt bag").measurement, Measurement::Quarts(1.0));
    }

    #[test]
    fn test_pints() {
        assert_eq!(single("2 pints").measurement, Measurement::Pints(2.0));
        assert_eq!(single("1 pint").measurement, Measurement::Pints(1.0));
        assert_eq!(single("3 pt").measurement, Measurement::Pints(3.0));
        assert_eq!(single("2 pt size").measurement, Measurement::Pints(2.0));
    }

    #[test]
    fn test_fahrenheit() {
        assert_eq!(single("350°F").measurement, Measurement::Fahrenheit(350.0));
        assert_eq!(single("72 °F").measurement, Measurement::Fahrenheit(72.0));
        assert_eq!(
            single("350\u{2109}").measurement,
            Measurement::Fahrenheit(350.0)
        );
        assert_eq!(
            single("350 degrees fahrenheit").measurement,
            Measurement::Fahrenheit(350.0)
        );
        assert_eq!(single("-40°F").measurement, Measurement::Fahrenheit(-40.0));
    }

    #[test]
    fn test_fahrenheit_range() {
        let tokens = find_measurements("72°F to 104°F");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].measurement, Measurement::Fahrenheit(72.0));
        assert_eq!(tokens[1].measurement, Measurement::Fahrenheit(104.0));
    }

    #[test]
    fn test_fahrenheit_requires_degree_glyph() {
        assert_none("Model F150");
        assert_none("350 F");
    }

    #[test]
    fn test_psi() {
        assert_eq!(single("35 PSI").measurement, Measurement::Psi(35.0));
        assert_eq!(single("120 psi").measurement, Measurement::Psi(120.0));
        assert_eq!(single("2,500 psi").measurement, Measurement::Psi(2500.0));
    }

    #[test]
    fn test_mph() {
        assert_eq!(single("60 mph").measurement, Measurement::MilesPerHour(60.0));
        assert_eq!(
            single("100 MPH").measurement,
            Measurement::MilesPerHour(100.0)
        );
        assert_eq!(
            single("20 miles per hour").measurement,
            Measurement::MilesPerHour(20.0)
        );
    }

    #[test]
    fn test_miles() {
        assert_eq!(single("5 miles").measurement, Measurement::Miles(5.0));
        assert_eq!(single("1 mile").measurement, Measurement::Miles(1.0));
        assert_eq!(single("0.5 mi").measurement, Measurement::Miles(0.5));
        assert_eq!(
            single("5 miles from here").measurement,
            Measurement::Miles(5.0)
        );
        assert_eq!(
            single("1,000 miles").measurement,
            Measurement::Miles(1000.0)
        );
    }

    #[test]
    fn test_unit_abbreviations_inside_words_do_not_match() {
        assert_none("Check out this album");
        assert_none("Visit our gallery");
        assert_none("5 mild days");
        assert_none("PSI Sigma fraternity");
    }

    #[test]
    fn test_already_metric_text_is_ignored() {
        assert_none("25.4 x 12.7 x 5.08 cm");
    }

    #[test]
    fn test_already_annotated_spans_are_skipped() {
        assert_none("6.6FT (2.01 m)");
        assert_none("36 inches (91.44 cm)");
        assert_none("16 oz (473.18 mL)");
        assert_none("8 oz (227.00 g)");
        assert_none("35 PSI (2.41 bar)");
        assert_none("350°F (176.67 °C)");
        assert_none("10 x 5 x 2 inches (25.40 \u{d7} 12.70 \u{d7} 5.08 cm)");
    }

    #[test]
    fn test_unannotated_span_still_matches() {
        assert_eq!(single("6.6FT cable").measurement, Measurement::Feet(6.6));
    }

    #[test]
    fn test_direction_markers_are_stripped_for_matching() {
        let token = single("\u{200e}6.6 feet\u{200f}");
        assert_eq!(token.measurement, Measurement::Feet(6.6));
        assert_eq!(token.index, 0);
    }

    #[test]
    fn test_token_ranges_are_disjoint_and_ordered() {
        let text = "Box: 10 x 5 x 2 inches, 2 lbs 4 oz, holds 2 gallons, \
                    rated 35 PSI at 72°F, ships 5 miles in a 400 sq ft hub";
        let tokens = find_measurements(text);

        assert!(tokens.len() >= 6);
        for pair in tokens.windows(2) {
            assert!(
                pair[0].index + pair[0].matched.len() <= pair[1].index,
                "token ranges should be disjoint and sorted: {:?}",
                pair
            );
        }
    }
}
