//! Workspace umbrella crate: re-exports `aeropath-core` so the demos can
//! `use aeropath_rs::prelude::*`.
pub use aeropath_core::*;
