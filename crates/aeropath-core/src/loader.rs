// crates/aeropath-core/src/loader.rs

//! # Loader
//!
//! File transport for the travel log: reads JSON exports back in and writes
//! any [`ExportFormat`] to disk. Paths ending in `.gz` are gzip-framed when
//! the `compact` feature is enabled.

use crate::error::{Result, TravelLogError};
use crate::export::{self, ExportFormat};
use crate::model::City;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Reads the cities of a JSON export.
///
/// The stored `statistics` block is ignored; stats are always derived from
/// the cities. Ratings are clamped on read and missing ids are generated.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let cities = load_from_reader(reader)?;
    debug!(path = %path.display(), count = cities.len(), "travel log loaded");
    Ok(cities)
}

#[cfg(feature = "json")]
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<City>> {
    #[derive(serde::Deserialize)]
    struct CitiesOnly {
        cities: Vec<City>,
    }
    let doc: CitiesOnly = serde_json::from_reader(reader)?;
    Ok(doc.cities)
}

#[cfg(not(feature = "json"))]
pub fn load_from_reader<R: Read>(_reader: R) -> Result<Vec<City>> {
    Err(TravelLogError::UnsupportedFormat(
        "JSON import requires the `json` feature".to_string(),
    ))
}

/// Writes `cities` to `path` in `format`.
pub fn save_to_path(
    path: impl AsRef<Path>,
    format: ExportFormat,
    cities: &[City],
    now: DateTime<Utc>,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = export::export(format, cities, now)?;
    let mut writer = create_stream(path)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    debug!(path = %path.display(), %format, bytes = bytes.len(), "travel log saved");
    Ok(())
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a gzip decoder for `.gz` paths.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        TravelLogError::NotFound(format!("Travel log not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(TravelLogError::UnsupportedFormat(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }
    Ok(Box::new(reader))
}

/// Writer counterpart of [`open_stream`]. The gzip trailer is written on drop.
fn create_stream(path: &Path) -> Result<Box<dyn Write>> {
    let writer = BufWriter::new(File::create(path)?);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::write::GzEncoder;
            use flate2::Compression;
            return Ok(Box::new(GzEncoder::new(writer, Compression::default())));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(TravelLogError::UnsupportedFormat(format!(
                "{} is gzip-compressed; enable the `compact` feature",
                path.display()
            )));
        }
    }
    Ok(Box::new(writer))
}
