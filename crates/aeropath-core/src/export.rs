// crates/aeropath-core/src/export.rs

//! Export encodings: JSON document, CSV table and a plain-text report.

use crate::error::{Result, TravelLogError};
use crate::model::City;
use crate::stats::TravelStats;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

pub const CSV_HEADER: &str = "Name,Country,Latitude,Longitude,Visit Date,Rating,Notes,Is Favorite";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    /// Printable summary report.
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Text];

    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Text => "text/plain",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExportFormat::Json => "Structured data format, easy to import",
            ExportFormat::Csv => "Spreadsheet format, compatible with Excel",
            ExportFormat::Text => "Printable report with statistics",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Text => "Text",
        })
    }
}

impl FromStr for ExportFormat {
    type Err = TravelLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" | "pdf" => Ok(ExportFormat::Text),
            other => Err(TravelLogError::UnknownOption(format!("format '{other}'"))),
        }
    }
}

/// Top-level JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub cities: Vec<City>,
    pub statistics: TravelStats,
    pub export_date: DateTime<Utc>,
}

impl ExportData {
    pub fn new(cities: &[City], now: DateTime<Utc>) -> Self {
        Self {
            cities: cities.to_vec(),
            statistics: TravelStats::from_cities(cities),
            export_date: now,
        }
    }
}

#[cfg(feature = "json")]
pub fn export_json(cities: &[City], now: DateTime<Utc>) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&ExportData::new(cities, now))?)
}

/// One row per city under [`CSV_HEADER`].
///
/// Commas in notes become semicolons; no other quoting is done.
pub fn export_csv(cities: &[City]) -> String {
    let mut out = String::with_capacity(64 * (cities.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for c in cities {
        let _ = writeln!(
            out,
            "{},{},{:?},{:?},{},{},{},{}",
            c.name,
            c.country,
            c.coordinate.latitude,
            c.coordinate.longitude,
            c.visit_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            c.rating,
            c.notes.replace(',', ";"),
            if c.is_favorite { "Yes" } else { "No" },
        );
    }
    out
}

/// Plain-text summary: aggregate stats followed by a bulleted city list.
pub fn export_text(cities: &[City], now: DateTime<Utc>) -> String {
    let stats = TravelStats::from_cities(cities);
    let mut out = String::new();
    let _ = writeln!(out, "AeroPath Travel Report");
    let _ = writeln!(out, "Generated: {}", now.format("%Y-%m-%d %H:%M UTC"));
    out.push('\n');
    let _ = writeln!(out, "Total Cities: {}", stats.total_cities);
    let _ = writeln!(out, "Total Countries: {}", stats.total_countries);
    let _ = writeln!(out, "Average Rating: {:.1}", stats.average_rating);
    let _ = writeln!(out, "Total Distance: {:.0} km", stats.total_distance);
    out.push('\n');
    let _ = writeln!(out, "Cities:");
    for c in cities {
        let _ = writeln!(out, "• {}, {} ({} stars)", c.name, c.country, c.rating);
    }
    out
}

/// Encodes `cities` in `format`.
pub fn export(format: ExportFormat, cities: &[City], now: DateTime<Utc>) -> Result<Vec<u8>> {
    match format {
        #[cfg(feature = "json")]
        ExportFormat::Json => export_json(cities, now),
        #[cfg(not(feature = "json"))]
        ExportFormat::Json => Err(TravelLogError::UnsupportedFormat(
            "JSON export requires the `json` feature".to_string(),
        )),
        ExportFormat::Csv => Ok(export_csv(cities).into_bytes()),
        ExportFormat::Text => Ok(export_text(cities, now).into_bytes()),
    }
}
