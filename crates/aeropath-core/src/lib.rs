// crates/aeropath-core/src/lib.rs

//! # aeropath-core
//!
//! In-memory travel log. Records visited cities and derives everything the
//! presentation layer shows from that single collection:
//!
//! - [`model`]: the [`City`] record, photo attachments and [`Collection`] groupings.
//! - [`stats`]: the [`TravelStats`] snapshot (distance, visit streak, arg-max lookups).
//! - [`query`]: the search → filter → sort pipeline behind the list view.
//! - [`store`]: the authoritative, id-addressed city list.
//! - [`travel_log`]: the coordinator that owns the store and the query state.
//!
//! ```rust
//! use aeropath_core::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
//! let mut log = TravelLog::with_clock(FixedClock(now));
//! log.add_city(City::new("Paris", "France", Coordinate::new(48.8566, 2.3522)).with_rating(5));
//! log.add_city(City::new("Rome", "Italy", Coordinate::new(41.9028, 12.4964)).with_rating(4));
//!
//! log.set_sort(SortOption::Name);
//! let names: Vec<&str> = log.filtered_cities().iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["Paris", "Rome"]);
//! assert_eq!(log.travel_stats().total_countries, 2);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clock;
pub mod error;
pub mod export;
pub mod geo;
pub mod loader;
pub mod model;
pub mod query;
pub mod sample;
pub mod stats;
pub mod store;
pub mod text;
pub mod traits;
pub mod travel_log;

// Re-exports
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::error::{Result, TravelLogError};
pub use crate::geo::{haversine_km, Coordinate};
pub use crate::model::{City, CityForm, Collection, CollectionColor, Photo, Rating};
pub use crate::query::{FilterOption, QueryConfig, QueryState, SortOption};
pub use crate::stats::TravelStats;
pub use crate::store::CityStore;
pub use crate::travel_log::TravelLog;

pub mod prelude {
    //! Convenience glob import: `use aeropath_core::prelude::*;`
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::error::{Result, TravelLogError};
    pub use crate::export::ExportFormat;
    pub use crate::geo::Coordinate;
    pub use crate::model::{City, CityForm, Collection, CollectionColor, Photo, Rating};
    pub use crate::query::{FilterOption, QueryConfig, SortOption};
    pub use crate::stats::TravelStats;
    pub use crate::traits::NameMatch;
    pub use crate::travel_log::TravelLog;
}
