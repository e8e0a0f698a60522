//! aeropath: command-line interface for aeropath-core
//!
//! Inspect and edit a travel log from the terminal: print the statistics
//! summary and analytics breakdowns, list cities through the
//! search/filter/sort pipeline, add/toggle/delete entries, and export.
//!
//! Usage examples
//! --------------
//!
//! - Stats for the built-in sample dataset
//!   $ aeropath stats
//!
//! - Write the sample dataset, then work on that file
//!   $ aeropath sample -o trips.json
//!   $ aeropath -i trips.json list --search par --sort rating
//!   $ aeropath -i trips.json favorite "New York"
//!
//! - Export as CSV to stdout
//!   $ aeropath -i trips.json export --format csv
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`);
//! `--verbose` switches to `debug`.
mod args;

use crate::args::{CliArgs, Commands};
use aeropath_core::export::ExportFormat;
use aeropath_core::loader::{load_from_path, save_to_path};
use aeropath_core::prelude::*;
use aeropath_core::sample::sample_cities;
use aeropath_core::stats;
use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let now = match args.now.as_deref() {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("--now '{s}' is not an RFC 3339 timestamp"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let mut log = TravelLog::with_clock(FixedClock(now));
    match args.input.as_deref() {
        Some(path) => {
            let starts_new = matches!(args.command, Commands::Add { .. });
            let cities = load_input(path, starts_new)?;
            info!(path, count = cities.len(), "loaded travel log");
            log.replace_all(cities);
        }
        None => log.load_sample_data(),
    }

    match args.command {
        Commands::Stats => print_stats(&log.travel_stats()),

        Commands::Analytics => {
            let cities = log.cities();
            println!("Rating distribution:");
            for (rating, n) in stats::rating_distribution(cities).iter().rev() {
                println!("  {}  {n}", "★".repeat(*rating as usize));
            }
            println!("Visits per month:");
            for (month, n) in stats::monthly_visits(cities) {
                println!("  {month}  {n}");
            }
            println!("Countries:");
            for (country, n) in stats::country_distribution(cities) {
                println!("  {country}  {n}");
            }
        }

        Commands::List {
            search,
            filter,
            sort,
        } => {
            log.set_filter(filter.parse()?);
            log.set_sort(sort.parse()?);
            if let Some(q) = search {
                log.set_search_text(q);
            }
            if log.filtered_cities().is_empty() {
                println!("No cities match.");
            }
            for c in log.filtered_cities() {
                println!(
                    "{}, {}  {}  {}{}",
                    c.name,
                    c.country,
                    "★".repeat(c.rating.get() as usize),
                    c.visit_date.format("%Y-%m-%d"),
                    if c.is_favorite { "  ♥" } else { "" }
                );
            }
        }

        Commands::Add {
            name,
            country,
            latitude,
            longitude,
            date,
            rating,
            notes,
            favorite,
        } => {
            let path = writable_input(args.input.as_deref())?;
            let visit_date = date.as_deref().map(parse_day).transpose()?;
            let city = CityForm {
                name,
                country,
                latitude,
                longitude,
                visit_date,
                rating,
                notes,
                is_favorite: favorite,
            }
            .into_city()?;
            println!("Added {} ({})", city.full_name(), city.id);
            log.add_city(city);
            save_to_path(path, ExportFormat::Json, log.cities(), now)?;
        }

        Commands::Favorite { name } => {
            let path = writable_input(args.input.as_deref())?;
            let id = match log.find_city(&name) {
                Some(c) => c.id,
                None => bail!("No city named {name}"),
            };
            log.toggle_favorite(id)?;
            if let Some(c) = log.city(id) {
                let state = if c.is_favorite { "now" } else { "no longer" };
                println!("{} is {state} a favorite", c.full_name());
            }
            save_to_path(path, ExportFormat::Json, log.cities(), now)?;
        }

        Commands::Delete { name } => {
            let path = writable_input(args.input.as_deref())?;
            let city = match log.find_city(&name) {
                Some(c) => c.clone(),
                None => bail!("No city named {name}"),
            };
            log.delete_city(city.id)?;
            println!("Deleted {}", city.full_name());
            save_to_path(path, ExportFormat::Json, log.cities(), now)?;
        }

        Commands::Export { format, output } => {
            let format: ExportFormat = format.parse()?;
            match output {
                Some(path) => {
                    save_to_path(&path, format, log.cities(), now)?;
                    eprintln!("Wrote {} ({}) to {path}", format, format.mime_type());
                }
                None => {
                    let bytes = log.export(format)?;
                    std::io::stdout().lock().write_all(&bytes)?;
                }
            }
        }

        Commands::Sample { output } => {
            save_to_path(&output, ExportFormat::Json, &sample_cities(now), now)?;
            println!("Wrote sample travel log to {output}");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the log at `path`. With `allow_missing`, a file that does not exist
/// yet is an empty log.
fn load_input(path: &str, allow_missing: bool) -> anyhow::Result<Vec<City>> {
    if allow_missing && !Path::new(path).exists() {
        info!(path, "no travel log yet, starting empty");
        return Ok(Vec::new());
    }
    Ok(load_from_path(path)?)
}

fn writable_input(input: Option<&str>) -> anyhow::Result<&str> {
    input.context("this command modifies the log; pass --input <path>")
}

/// `YYYY-MM-DD` at midnight UTC.
fn parse_day(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("--date '{s}' is not YYYY-MM-DD"))?;
    Ok(day.and_time(NaiveTime::MIN).and_utc())
}

fn print_stats(s: &TravelStats) {
    println!("Travel statistics:");
    println!("  Cities: {}", s.total_cities);
    println!("  Countries: {}", s.total_countries);
    println!("  Average rating: {:.1}", s.average_rating);
    println!(
        "  Highest rated: {}",
        s.favorite_city.as_deref().unwrap_or("-")
    );
    println!(
        "  Most visited country: {}",
        s.most_visited_country.as_deref().unwrap_or("-")
    );
    println!("  Total distance: {:.0} km", s.total_distance);
    println!("  Visit streak: {} day(s)", s.visit_streak);
    match s.last_visit_date {
        Some(d) => println!("  Last visit: {}", d.format("%Y-%m-%d")),
        None => println!("  Last visit: -"),
    }
}
