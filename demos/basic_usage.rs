//! Basic usage example for aeropath-rs
//!
//! This example demonstrates how to:
//! - Build a travel log from the sample dataset
//! - Add, edit and favorite cities
//! - Read the derived travel statistics

use aeropath_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== AeroPath Basic Usage Example ===\n");

    let mut log = TravelLog::with_sample_data();
    println!("✓ Sample travel log loaded ({} cities)\n", log.cities().len());

    // Example 1: Default view (newest first)
    println!("--- Example 1: Cities, newest first ---");
    for (i, city) in log.filtered_cities().iter().enumerate() {
        println!("{}. {} ({} stars)", i + 1, city.full_name(), city.rating);
    }
    println!();

    // Example 2: Add a city from form input
    println!("--- Example 2: Add a city ---");
    let lisbon = CityForm {
        name: "Lisbon".into(),
        country: "Portugal".into(),
        latitude: "38.7223".into(),
        longitude: "-9.1393".into(),
        rating: 4,
        notes: "Trams, tiles and pastéis de nata".into(),
        ..CityForm::default()
    }
    .into_city()?;
    let lisbon_id = lisbon.id;
    log.add_city(lisbon);
    println!("Added Lisbon, now {} cities\n", log.cities().len());

    // Example 3: Favorite it
    println!("--- Example 3: Toggle favorite ---");
    log.toggle_favorite(lisbon_id)?;
    let favorites: Vec<&str> = log.favorite_cities().iter().map(|c| c.name.as_str()).collect();
    println!("Favorites: {}\n", favorites.join(", "));

    // Example 4: Statistics
    println!("--- Example 4: Travel statistics ---");
    let stats = log.travel_stats();
    println!("Cities: {}", stats.total_cities);
    println!("Countries: {}", stats.total_countries);
    println!("Average rating: {:.1}", stats.average_rating);
    println!("Highest rated: {:?}", stats.favorite_city);
    println!("Total distance: {:.0} km", stats.total_distance);
    println!("Visit streak: {} day(s)", stats.visit_streak);

    Ok(())
}
