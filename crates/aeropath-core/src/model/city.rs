// crates/aeropath-core/src/model/city.rs
use super::Photo;
use crate::error::{Result, TravelLogError};
use crate::geo::Coordinate;
use crate::text::contains_ignore_case;
use crate::traits::NameMatch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A 1–5 star rating.
///
/// Out-of-range input is clamped, never rejected. This also applies when
/// deserializing, so a stored `7` reads back as `5`.
///
/// ```rust
/// use aeropath_core::Rating;
///
/// assert_eq!(Rating::new(7).get(), 5);
/// assert_eq!(Rating::new(-3).get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: i64) -> Self {
        Self(stars.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl From<i64> for Rating {
    fn from(v: i64) -> Self {
        Self::new(v)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One visited place.
///
/// `id` is assigned at creation and survives edits: an update replaces every
/// other field but callers keep matching by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub coordinate: Coordinate,
    pub visit_date: DateTime<Utc>,
    pub rating: Rating,
    #[serde(default)]
    pub notes: String,
    /// Insertion order is display order.
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl City {
    /// New entry visited now, rated 5, not a favorite.
    pub fn new(name: impl Into<String>, country: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            country: country.into(),
            coordinate,
            visit_date: Utc::now(),
            rating: Rating::default(),
            notes: String::new(),
            photos: Vec::new(),
            is_favorite: false,
        }
    }

    pub fn with_visit_date(mut self, visit_date: DateTime<Utc>) -> Self {
        self.visit_date = visit_date;
        self
    }

    /// Sets the rating, clamped to 1..=5.
    pub fn with_rating(mut self, stars: i64) -> Self {
        self.rating = Rating::new(stars);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_photos(mut self, photos: Vec<Photo>) -> Self {
        self.photos = photos;
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn add_photo(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    /// `"name, country"`
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    /// Copy of this record with `is_favorite` inverted.
    pub fn toggled_favorite(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }

    /// Matches on the city name or the country.
    fn matches_search(&self, q: &str) -> bool {
        self.name_contains(q) || contains_ignore_case(&self.country, q)
    }
}

/// Raw add/edit form input.
///
/// Everything arrives as text except the date, rating and flag. Validation
/// happens here, before a [`City`] exists.
#[derive(Debug, Clone)]
pub struct CityForm {
    pub name: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
    /// `None` means "now".
    pub visit_date: Option<DateTime<Utc>>,
    pub rating: i64,
    pub notes: String,
    pub is_favorite: bool,
}

impl Default for CityForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            country: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            visit_date: None,
            rating: Rating::MAX as i64,
            notes: String::new(),
            is_favorite: false,
        }
    }
}

impl CityForm {
    /// Pre-fills a form for editing an existing entry.
    pub fn from_city(city: &City) -> Self {
        Self {
            name: city.name.clone(),
            country: city.country.clone(),
            latitude: city.coordinate.latitude.to_string(),
            longitude: city.coordinate.longitude.to_string(),
            visit_date: Some(city.visit_date),
            rating: city.rating.get() as i64,
            notes: city.notes.clone(),
            is_favorite: city.is_favorite,
        }
    }

    /// Builds a fresh entry with a new id.
    pub fn into_city(self) -> Result<City> {
        let coordinate = self.validate()?;
        Ok(City {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            country: self.country.trim().to_string(),
            coordinate,
            visit_date: self.visit_date.unwrap_or_else(Utc::now),
            rating: Rating::new(self.rating),
            notes: self.notes,
            photos: Vec::new(),
            is_favorite: self.is_favorite,
        })
    }

    /// Builds the replacement record for `existing`, keeping its id and photos.
    pub fn apply_to(self, existing: &City) -> Result<City> {
        let coordinate = self.validate()?;
        Ok(City {
            id: existing.id,
            name: self.name.trim().to_string(),
            country: self.country.trim().to_string(),
            coordinate,
            visit_date: self.visit_date.unwrap_or(existing.visit_date),
            rating: Rating::new(self.rating),
            notes: self.notes,
            photos: existing.photos.clone(),
            is_favorite: self.is_favorite,
        })
    }

    fn validate(&self) -> Result<Coordinate> {
        if self.name.trim().is_empty() {
            return Err(TravelLogError::MissingField("name"));
        }
        if self.country.trim().is_empty() {
            return Err(TravelLogError::MissingField("country"));
        }
        if self.latitude.trim().is_empty() {
            return Err(TravelLogError::MissingField("latitude"));
        }
        if self.longitude.trim().is_empty() {
            return Err(TravelLogError::MissingField("longitude"));
        }
        Coordinate::parse(&self.latitude, &self.longitude)
    }
}
