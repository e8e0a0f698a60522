// crates/aeropath-core/src/model/collection.rs
use super::City;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed color palette for collection tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionColor {
    #[default]
    Blue,
    Red,
    Green,
    Orange,
    Purple,
    Pink,
    Yellow,
    Indigo,
}

impl CollectionColor {
    pub const ALL: [CollectionColor; 8] = [
        CollectionColor::Blue,
        CollectionColor::Red,
        CollectionColor::Green,
        CollectionColor::Orange,
        CollectionColor::Purple,
        CollectionColor::Pink,
        CollectionColor::Yellow,
        CollectionColor::Indigo,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            CollectionColor::Blue => "Blue",
            CollectionColor::Red => "Red",
            CollectionColor::Green => "Green",
            CollectionColor::Orange => "Orange",
            CollectionColor::Purple => "Purple",
            CollectionColor::Pink => "Pink",
            CollectionColor::Yellow => "Yellow",
            CollectionColor::Indigo => "Indigo",
        }
    }
}

impl fmt::Display for CollectionColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A named grouping of cities.
///
/// Membership is by id reference only; cities know nothing about the
/// collections they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub color: CollectionColor,
    /// Ordered, duplicate-free.
    city_ids: Vec<Uuid>,
    pub created_date: DateTime<Utc>,
    /// `true` for system-seeded collections.
    pub is_default: bool,
}

impl Collection {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: CollectionColor,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            color,
            city_ids: Vec::new(),
            created_date: Utc::now(),
            is_default: false,
        }
    }

    /// The system-seeded collections every new log starts with.
    pub fn defaults() -> Vec<Collection> {
        [
            ("Favorites", "My favorite cities", CollectionColor::Red),
            ("Europe", "Cities in Europe", CollectionColor::Blue),
            ("Asia", "Cities in Asia", CollectionColor::Green),
            ("Recent", "Recently visited cities", CollectionColor::Orange),
        ]
        .into_iter()
        .map(|(name, description, color)| Collection {
            is_default: true,
            ..Collection::new(name, description, color)
        })
        .collect()
    }

    pub fn city_ids(&self) -> &[Uuid] {
        &self.city_ids
    }

    /// Adds `id` at the end. Returns `false` if it was already a member.
    pub fn add_city(&mut self, id: Uuid) -> bool {
        if self.contains(id) {
            return false;
        }
        self.city_ids.push(id);
        true
    }

    /// Returns `false` if `id` was not a member.
    pub fn remove_city(&mut self, id: Uuid) -> bool {
        let before = self.city_ids.len();
        self.city_ids.retain(|c| *c != id);
        self.city_ids.len() != before
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.city_ids.contains(&id)
    }

    pub fn city_count(&self) -> usize {
        self.city_ids.len()
    }

    /// Resolves members against `cities`, in collection order.
    ///
    /// Ids with no matching city are skipped.
    pub fn cities_in<'a>(&self, cities: &'a [City]) -> Vec<&'a City> {
        self.city_ids
            .iter()
            .filter_map(|id| cities.iter().find(|c| c.id == *id))
            .collect()
    }
}
