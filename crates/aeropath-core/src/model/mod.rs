// crates/aeropath-core/src/model/mod.rs
pub mod city;
pub mod collection;
pub mod photo;

pub use city::{City, CityForm, Rating};
pub use collection::{Collection, CollectionColor};
pub use photo::Photo;
