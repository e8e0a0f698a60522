// crates/aeropath-core/src/store.rs
use crate::error::{Result, TravelLogError};
use crate::model::City;
use crate::traits::NameMatch;
use tracing::{debug, warn};
use uuid::Uuid;

/// The authoritative, ordered city list.
///
/// Every mutation addresses entries by id. Unknown ids are reported as
/// [`TravelLogError::CityNotFound`] and leave the list untouched.
///
/// Mutations take `&mut self`, so a shared store has to sit behind a single
/// writer (e.g. a `Mutex`) to keep read-then-write-by-id consistent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityStore {
    cities: Vec<City>,
}

impl CityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cities(cities: Vec<City>) -> Self {
        Self { cities }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// First city whose name equals `name`, ignoring case and accents.
    pub fn find_by_name(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.is_named(name))
    }

    /// Appends `city`. Ids are not checked for uniqueness.
    pub fn add(&mut self, city: City) {
        debug!(id = %city.id, name = %city.name, "city added");
        self.cities.push(city);
    }

    /// Replaces the entry with `city.id` in place, keeping its position.
    pub fn update(&mut self, city: City) -> Result<()> {
        let idx = self.position(city.id)?;
        debug!(id = %city.id, index = idx, "city updated");
        self.cities[idx] = city;
        Ok(())
    }

    /// Removes every entry with `id`.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.cities.len();
        self.cities.retain(|c| c.id != id);
        let removed = before - self.cities.len();
        if removed == 0 {
            warn!(%id, "delete: city not found");
            return Err(TravelLogError::CityNotFound(id));
        }
        debug!(%id, removed, "city deleted");
        Ok(())
    }

    /// Flips `is_favorite` on the entry with `id`; nothing else changes.
    pub fn toggle_favorite(&mut self, id: Uuid) -> Result<&City> {
        let idx = self.position(id)?;
        let toggled = self.cities[idx].toggled_favorite();
        debug!(%id, is_favorite = toggled.is_favorite, "favorite toggled");
        self.cities[idx] = toggled;
        Ok(&self.cities[idx])
    }

    /// Swaps in a whole new collection (bulk load).
    pub fn replace_all(&mut self, cities: Vec<City>) {
        debug!(count = cities.len(), "city collection replaced");
        self.cities = cities;
    }

    fn position(&self, id: Uuid) -> Result<usize> {
        self.cities.iter().position(|c| c.id == id).ok_or_else(|| {
            warn!(%id, "city not found");
            TravelLogError::CityNotFound(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::model::Photo;

    fn store() -> CityStore {
        CityStore::from_cities(vec![
            City::new("Paris", "France", Coordinate::new(48.8566, 2.3522)),
            City::new("Rome", "Italy", Coordinate::new(41.9028, 12.4964)),
            City::new("Oslo", "Norway", Coordinate::new(59.9139, 10.7522)),
        ])
    }

    #[test]
    fn add_appends() {
        let mut s = CityStore::new();
        assert!(s.is_empty());
        s.add(City::new("Lima", "Peru", Coordinate::new(-12.05, -77.04)));
        assert_eq!(s.len(), 1);
        assert_eq!(s.cities()[0].name, "Lima");
    }

    #[test]
    fn update_replaces_in_place() {
        let mut s = store();
        let rome = s.cities()[1].clone();
        let edited = City {
            notes: "Colosseum".into(),
            ..rome.clone()
        }
        .with_rating(2);
        s.update(edited).unwrap();
        assert_eq!(s.cities()[1].id, rome.id);
        assert_eq!(s.cities()[1].notes, "Colosseum");
        assert_eq!(s.cities()[1].rating.get(), 2);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn update_unknown_id_leaves_collection_unchanged() {
        let mut s = store();
        let before = s.clone();
        let stranger = City::new("Lima", "Peru", Coordinate::new(-12.05, -77.04));
        let id = stranger.id;
        assert!(matches!(s.update(stranger), Err(TravelLogError::CityNotFound(x)) if x == id));
        assert_eq!(s, before);
    }

    #[test]
    fn delete_removes_by_id() {
        let mut s = store();
        let id = s.cities()[0].id;
        s.delete(id).unwrap();
        assert_eq!(s.len(), 2);
        assert!(s.get(id).is_none());
        assert!(s.delete(id).is_err());
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn duplicate_ids_update_first_and_delete_all() {
        let mut s = store();
        let first = City::new("Lima", "Peru", Coordinate::new(-12.05, -77.04));
        let second = City {
            name: "Lima 2".into(),
            ..first.clone()
        };
        s.add(first.clone());
        s.add(second);
        assert_eq!(s.len(), 5);

        s.update(City {
            notes: "edited".into(),
            ..first.clone()
        })
        .unwrap();
        let dupes: Vec<(&str, &str)> = s
            .cities()
            .iter()
            .filter(|c| c.id == first.id)
            .map(|c| (c.name.as_str(), c.notes.as_str()))
            .collect();
        assert_eq!(dupes, [("Lima", "edited"), ("Lima 2", "")]);

        s.delete(first.id).unwrap();
        assert_eq!(s.len(), 3);
        assert!(s.get(first.id).is_none());
    }

    #[test]
    fn toggle_favorite_preserves_other_fields() {
        let mut s = store();
        let photo = Photo::new(vec![0xFF, 0xD8], "p1");
        let paris = City {
            notes: "x".into(),
            photos: vec![photo.clone()],
            ..s.cities()[0].clone()
        };
        s.update(paris.clone()).unwrap();

        let toggled = s.toggle_favorite(paris.id).unwrap().clone();
        assert!(toggled.is_favorite);
        assert_eq!(toggled.notes, "x");
        assert_eq!(toggled.photos, vec![photo]);
        assert_eq!(City { is_favorite: false, ..toggled }, paris);

        s.toggle_favorite(paris.id).unwrap();
        assert_eq!(s.get(paris.id), Some(&paris));
    }

    #[test]
    fn toggle_unknown_id_is_reported() {
        let mut s = store();
        let before = s.clone();
        assert!(s.toggle_favorite(Uuid::new_v4()).is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn find_by_name_folds() {
        let s = store();
        assert_eq!(s.find_by_name("OSLO").map(|c| c.country.as_str()), Some("Norway"));
        assert!(s.find_by_name("Osl").is_none());
    }
}
