//! aeropath-cli
//! ============
//!
//! Command-line interface for the `aeropath-core` travel log.
//!
//! This crate primarily provides a binary (`aeropath`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! aeropath --help
//! aeropath stats
//! aeropath sample -o trips.json
//! aeropath -i trips.json list --filter favorites --sort name
//! aeropath -i trips.json add Lisbon Portugal 38.72 -9.14 --rating 4
//! aeropath -i trips.json export --format csv -o trips.csv
//! ```
//!
//! For programmatic access use the [`aeropath-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
