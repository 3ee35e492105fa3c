//! # Annotation Examples
//!
//! This example demonstrates how to scan product text for imperial
//! measurements and render metric annotations.

use metrify::{annotate, find_measurements};

fn main() {
    env_logger::init();

    // Example product listing text with various measurements
    let listing = r#"
Heavy-Duty Storage Shelf
- Dimensions: 48 x 24 x 12 inches
- Height adjustable up to 6 ft
- Holds 2 lbs 4 oz per tray
- Rated for temperatures up to 150°F
- Only 5 in stock!
"#;

    println!("🔍 Scanning product listing for measurements...\n");

    let tokens = find_measurements(listing);
    println!("📏 Found {} measurements:", tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let rendered = token
            .conversion()
            .map(|conversion| conversion.text)
            .unwrap_or_else(|| "no conversion".to_string());
        println!(
            "  • Measurement {}: '{}' ({}) -> {}",
            i + 1,
            token.matched,
            token.measurement.kind_name(),
            rendered
        );
    }

    println!("\n📝 Annotated listing:");
    println!("{}", annotate(listing));

    // Second scan of annotated output appends nothing new
    let annotated = annotate(listing);
    assert_eq!(annotate(&annotated), annotated);
    println!("✅ Re-scanning the annotated text leaves it unchanged.");
}
