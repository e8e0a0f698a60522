// crates/aeropath-core/src/sample.rs
use crate::geo::Coordinate;
use crate::model::City;
use chrono::{DateTime, Duration, Utc};

/// (name, country, lat, lon, days ago, rating, notes, favorite)
type SampleRow = (&'static str, &'static str, f64, f64, i64, i64, &'static str, bool);

const SAMPLE_CITIES: [SampleRow; 8] = [
    ("Paris", "France", 48.8566, 2.3522, 5, 5, "Incredible city! The Eiffel Tower is simply amazing.", true),
    ("Tokyo", "Japan", 35.6762, 139.6503, 15, 5, "Futuristic city with amazing culture.", true),
    ("New York", "USA", 40.7128, -74.0060, 30, 4, "The city that never sleeps.", false),
    ("London", "United Kingdom", 51.5074, -0.1278, 45, 4, "Classic beauty and history.", true),
    ("Sydney", "Australia", -33.8688, 151.2093, 60, 5, "Opera House and harbor - unforgettable!", false),
    ("Rome", "Italy", 41.9028, 12.4964, 90, 5, "Eternal city with incredible history.", true),
    ("Barcelona", "Spain", 41.3851, 2.1734, 120, 4, "Gaudi and the sea - perfect combination.", false),
    ("Amsterdam", "Netherlands", 52.3676, 4.9041, 150, 4, "Canals and bicycles - unique experience.", true),
];

/// The demonstration dataset, with visit dates relative to `now`.
pub fn sample_cities(now: DateTime<Utc>) -> Vec<City> {
    SAMPLE_CITIES
        .iter()
        .map(|&(name, country, lat, lon, days_ago, rating, notes, favorite)| {
            City::new(name, country, Coordinate::new(lat, lon))
                .with_visit_date(now - Duration::days(days_ago))
                .with_rating(rating)
                .with_notes(notes)
                .with_favorite(favorite)
        })
        .collect()
}
