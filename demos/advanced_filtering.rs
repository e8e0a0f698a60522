//! Advanced filtering example for aeropath-rs
//!
//! This example demonstrates the search → filter → sort pipeline and the
//! analytics breakdowns.

use aeropath_rs::prelude::*;
use aeropath_rs::stats;
use chrono::Utc;

fn main() -> Result<()> {
    println!("=== AeroPath Advanced Filtering Example ===\n");

    let mut log = TravelLog::with_clock(FixedClock(Utc::now()));
    log.load_sample_data();

    // Example 1: Every filter, sorted by name
    println!("--- Example 1: Each filter option ---");
    log.set_sort(SortOption::Name);
    for filter in FilterOption::ALL {
        log.set_filter(filter);
        let names: Vec<&str> = log.filtered_cities().iter().map(|c| c.name.as_str()).collect();
        println!("{:<18} {}", filter.label(), names.join(", "));
    }
    println!();

    // Example 2: Search composes with filter
    println!("--- Example 2: Search 'a' among favorites, best rated first ---");
    log.set_filter(FilterOption::Favorites);
    log.set_sort(SortOption::Rating);
    log.set_search_text("a");
    for city in log.filtered_cities() {
        println!("- {} ({} stars)", city.full_name(), city.rating);
    }
    println!();

    // Example 3: Custom window for "recent"
    println!("--- Example 3: Recent = last 60 days ---");
    log.set_search_text("");
    log.set_config(QueryConfig {
        recent_window_days: 60,
        ..QueryConfig::default()
    });
    log.set_filter(FilterOption::Recent);
    log.set_sort(SortOption::DateOldest);
    for city in log.filtered_cities() {
        println!("- {} on {}", city.name, city.visit_date.format("%Y-%m-%d"));
    }
    println!();

    // Example 4: Breakdowns
    println!("--- Example 4: Country distribution ---");
    for (country, n) in stats::country_distribution(log.cities()) {
        println!("{country}: {n}");
    }

    Ok(())
}
