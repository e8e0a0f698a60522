//! Error handling example for aeropath-rs
//!
//! This example demonstrates validation failures and id-not-found results.

use aeropath_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== AeroPath Error Handling Example ===\n");

    let mut log = TravelLog::with_sample_data();

    // Example 1: Invalid coordinate text is rejected before a City exists
    println!("--- Example 1: Form validation ---");
    let inputs = [("48.85", "2.35"), ("ninety", "0"), ("91", "0"), ("", "10")];
    for (lat, lon) in inputs {
        let form = CityForm {
            name: "Somewhere".into(),
            country: "Nowhere".into(),
            latitude: lat.into(),
            longitude: lon.into(),
            ..CityForm::default()
        };
        match form.into_city() {
            Ok(city) => println!("  ✓ ({lat}, {lon}) -> {:?}", city.coordinate),
            Err(e) => println!("  ✗ ({lat}, {lon}) -> {e}"),
        }
    }
    println!();

    // Example 2: Ratings are clamped, not rejected
    println!("--- Example 2: Rating clamp ---");
    for stars in [-3, 0, 3, 7] {
        println!("  {stars} -> {}", Rating::new(stars));
    }
    println!();

    // Example 3: Unknown ids are reported and leave the log untouched
    println!("--- Example 3: Update a city that is not in the log ---");
    let stranger = City::new("Atlantis", "Ocean", Coordinate::new(0.0, 0.0));
    match log.update_city(stranger) {
        Ok(()) => println!("  updated"),
        Err(e) => println!("  ✗ {e} (still {} cities)", log.cities().len()),
    }
    println!();

    // Example 4: Default collections cannot be deleted
    println!("--- Example 4: Delete a default collection ---");
    let favorites = log.collections()[0].id;
    if let Err(e) = log.delete_collection(favorites) {
        println!("  ✗ {e}");
    }

    Ok(())
}
