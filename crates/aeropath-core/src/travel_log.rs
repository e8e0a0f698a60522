// crates/aeropath-core/src/travel_log.rs

//! Application-state coordinator.
//!
//! [`TravelLog`] is the single owner of the city collection. It holds the
//! current query state and re-runs the query pipeline after every mutation
//! and every query change, so [`TravelLog::filtered_cities`] is always in
//! sync. Statistics are derived on demand and never cached.

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TravelLogError};
use crate::export::{self, ExportFormat};
use crate::model::{City, Collection, CollectionColor};
use crate::query::{self, FilterOption, QueryConfig, QueryState, SortOption};
use crate::sample::sample_cities;
use crate::stats::TravelStats;
use crate::store::CityStore;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TravelLog<C: Clock = SystemClock> {
    store: CityStore,
    collections: Vec<Collection>,
    query: QueryState,
    config: QueryConfig,
    filtered: Vec<City>,
    selected: Option<Uuid>,
    clock: C,
}

impl TravelLog<SystemClock> {
    /// Empty log on the system clock, seeded with the default collections.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Log pre-populated with the demonstration dataset.
    pub fn with_sample_data() -> Self {
        let mut log = Self::new();
        log.load_sample_data();
        log
    }
}

impl Default for TravelLog<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TravelLog<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: CityStore::new(),
            collections: Collection::defaults(),
            query: QueryState::default(),
            config: QueryConfig::default(),
            filtered: Vec::new(),
            selected: None,
            clock,
        }
    }

    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // -----------------------------------------------------------------------
    // Collection of cities
    // -----------------------------------------------------------------------

    pub fn cities(&self) -> &[City] {
        self.store.cities()
    }

    pub fn city(&self, id: Uuid) -> Option<&City> {
        self.store.get(id)
    }

    /// Lookup by name, ignoring case and accents.
    pub fn find_city(&self, name: &str) -> Option<&City> {
        self.store.find_by_name(name)
    }

    /// Result of the last pipeline run.
    pub fn filtered_cities(&self) -> &[City] {
        &self.filtered
    }

    pub fn load_sample_data(&mut self) {
        let now = self.now();
        self.replace_all(sample_cities(now));
    }

    /// Replaces the whole collection. Selection and collection memberships
    /// pointing at ids that no longer exist are dropped.
    pub fn replace_all(&mut self, cities: Vec<City>) {
        self.store.replace_all(cities);
        let store = &self.store;
        if self.selected.is_some_and(|id| store.get(id).is_none()) {
            self.selected = None;
        }
        for col in &mut self.collections {
            let dangling: Vec<Uuid> = col
                .city_ids()
                .iter()
                .copied()
                .filter(|id| store.get(*id).is_none())
                .collect();
            for id in dangling {
                col.remove_city(id);
            }
        }
        self.refresh();
    }

    pub fn add_city(&mut self, city: City) {
        self.store.add(city);
        self.refresh();
    }

    pub fn update_city(&mut self, city: City) -> Result<()> {
        self.store.update(city)?;
        self.refresh();
        Ok(())
    }

    /// Deletes the city and removes it from every collection.
    pub fn delete_city(&mut self, id: Uuid) -> Result<()> {
        self.store.delete(id)?;
        for col in &mut self.collections {
            col.remove_city(id);
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.refresh();
        Ok(())
    }

    pub fn toggle_favorite(&mut self, id: Uuid) -> Result<()> {
        self.store.toggle_favorite(id)?;
        self.refresh();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Query state
    // -----------------------------------------------------------------------

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.refresh();
    }

    pub fn set_filter(&mut self, filter: FilterOption) {
        self.query.filter = filter;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.query.sort = sort;
        self.refresh();
    }

    pub fn set_config(&mut self, config: QueryConfig) {
        self.config = config;
        self.refresh();
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    pub fn select_city(&mut self, id: Uuid) -> Result<()> {
        if self.store.get(id).is_none() {
            return Err(TravelLogError::CityNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn selected_city(&self) -> Option<&City> {
        self.selected.and_then(|id| self.store.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    pub fn travel_stats(&self) -> TravelStats {
        TravelStats::from_cities(self.store.cities())
    }

    /// Favorited cities in collection order, regardless of the query state.
    pub fn favorite_cities(&self) -> Vec<&City> {
        self.store.cities().iter().filter(|c| c.is_favorite).collect()
    }

    /// Cities inside the recent window, regardless of the query state.
    pub fn recent_cities(&self) -> Vec<&City> {
        let now = self.now();
        self.store
            .cities()
            .iter()
            .filter(|c| self.config.is_recent(c, now))
            .collect()
    }

    /// Serializes the whole log (not the filtered view).
    pub fn export(&self, format: ExportFormat) -> Result<Vec<u8>> {
        export::export(format, self.store.cities(), self.now())
    }

    // -----------------------------------------------------------------------
    // Collections (groupings)
    // -----------------------------------------------------------------------

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, id: Uuid) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    pub fn create_collection(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        color: CollectionColor,
    ) -> Uuid {
        let col = Collection::new(name, description, color);
        let id = col.id;
        debug!(%id, name = %col.name, "collection created");
        self.collections.push(col);
        id
    }

    /// Removes a user-created collection. Default collections are refused.
    pub fn delete_collection(&mut self, id: Uuid) -> Result<Collection> {
        let idx = self.collection_position(id)?;
        if self.collections[idx].is_default {
            return Err(TravelLogError::DefaultCollection(
                self.collections[idx].name.clone(),
            ));
        }
        Ok(self.collections.remove(idx))
    }

    /// Returns `false` if the city was already a member.
    pub fn add_to_collection(&mut self, collection_id: Uuid, city_id: Uuid) -> Result<bool> {
        if self.store.get(city_id).is_none() {
            return Err(TravelLogError::CityNotFound(city_id));
        }
        let idx = self.collection_position(collection_id)?;
        Ok(self.collections[idx].add_city(city_id))
    }

    /// Returns `false` if the city was not a member.
    pub fn remove_from_collection(&mut self, collection_id: Uuid, city_id: Uuid) -> Result<bool> {
        let idx = self.collection_position(collection_id)?;
        Ok(self.collections[idx].remove_city(city_id))
    }

    pub fn collection_cities(&self, collection_id: Uuid) -> Result<Vec<&City>> {
        let col = self
            .collection(collection_id)
            .ok_or(TravelLogError::CollectionNotFound(collection_id))?;
        Ok(col.cities_in(self.store.cities()))
    }

    fn collection_position(&self, id: Uuid) -> Result<usize> {
        self.collections
            .iter()
            .position(|c| c.id == id)
            .ok_or(TravelLogError::CollectionNotFound(id))
    }

    fn refresh(&mut self) {
        self.filtered = query::apply(self.store.cities(), &self.query, &self.config, self.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::geo::Coordinate;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn log() -> TravelLog<FixedClock> {
        let mut log = TravelLog::with_clock(FixedClock(now()));
        log.load_sample_data();
        log
    }

    fn names(cities: &[City]) -> Vec<&str> {
        cities.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn mutations_refresh_the_filtered_view() {
        let mut log = TravelLog::with_clock(FixedClock(now()));
        assert!(log.filtered_cities().is_empty());

        let lima = City::new("Lima", "Peru", Coordinate::new(-12.05, -77.04)).with_visit_date(now());
        let id = lima.id;
        log.add_city(lima);
        assert_eq!(names(log.filtered_cities()), ["Lima"]);

        log.set_filter(FilterOption::Favorites);
        assert!(log.filtered_cities().is_empty());
        log.toggle_favorite(id).unwrap();
        assert_eq!(names(log.filtered_cities()), ["Lima"]);

        log.delete_city(id).unwrap();
        assert!(log.filtered_cities().is_empty());
    }

    #[test]
    fn default_view_is_newest_first() {
        let log = log();
        assert_eq!(log.filtered_cities().len(), 8);
        assert_eq!(log.filtered_cities()[0].name, "Paris");
        assert_eq!(log.filtered_cities()[7].name, "Amsterdam");
    }

    #[test]
    fn query_changes_rerun_pipeline() {
        let mut log = log();
        log.set_search_text("a");
        log.set_sort(SortOption::Name);
        assert_eq!(
            names(log.filtered_cities()),
            ["Amsterdam", "Barcelona", "New York", "Paris", "Rome", "Sydney", "Tokyo"]
        );
        log.set_filter(FilterOption::Favorites);
        assert_eq!(
            names(log.filtered_cities()),
            ["Amsterdam", "Paris", "Rome", "Tokyo"]
        );
        log.set_search_text("");
        assert_eq!(log.filtered_cities().len(), 5);
        log.set_filter(FilterOption::All);
        assert_eq!(log.filtered_cities().len(), 8);
    }

    #[test]
    fn derived_views_ignore_query_state() {
        let mut log = log();
        log.set_search_text("zzz");
        assert!(log.filtered_cities().is_empty());

        let favs: Vec<&str> = log.favorite_cities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(favs, ["Paris", "Tokyo", "London", "Rome", "Amsterdam"]);

        // New York sits exactly 30 days back and is included
        let recent: Vec<&str> = log.recent_cities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(recent, ["Paris", "Tokyo", "New York"]);
    }

    #[test]
    fn config_changes_window() {
        let mut log = log();
        log.set_config(QueryConfig {
            recent_window_days: 10,
            ..QueryConfig::default()
        });
        log.set_filter(FilterOption::Recent);
        assert_eq!(names(log.filtered_cities()), ["Paris"]);
    }

    #[test]
    fn update_unknown_id_is_an_error_and_no_op() {
        let mut log = log();
        let before: Vec<City> = log.cities().to_vec();
        let stranger = City::new("Lima", "Peru", Coordinate::new(0.0, 0.0));
        assert!(log.update_city(stranger).is_err());
        assert_eq!(log.cities(), before.as_slice());
    }

    #[test]
    fn selection_follows_deletes() {
        let mut log = log();
        let id = log.find_city("tokyo").unwrap().id;
        log.select_city(id).unwrap();
        assert_eq!(log.selected_city().map(|c| c.name.as_str()), Some("Tokyo"));
        log.delete_city(id).unwrap();
        assert!(log.selected_city().is_none());
        assert!(log.select_city(id).is_err());
    }

    #[test]
    fn stats_are_recomputed_on_demand() {
        let mut log = log();
        assert_eq!(log.travel_stats().total_cities, 8);
        let id = log.find_city("Paris").unwrap().id;
        log.delete_city(id).unwrap();
        let stats = log.travel_stats();
        assert_eq!(stats.total_cities, 7);
        assert_eq!(stats.last_visit_date, Some(now() - Duration::days(15)));
    }

    #[test]
    fn collections_lifecycle() {
        let mut log = log();
        assert_eq!(log.collections().len(), 4);

        let trip = log.create_collection("Med trip", "", CollectionColor::Yellow);
        let rome = log.find_city("Rome").unwrap().id;
        let barcelona = log.find_city("Barcelona").unwrap().id;
        assert!(log.add_to_collection(trip, rome).unwrap());
        assert!(log.add_to_collection(trip, barcelona).unwrap());
        assert!(!log.add_to_collection(trip, rome).unwrap());
        assert!(log.add_to_collection(trip, Uuid::new_v4()).is_err());

        let members: Vec<&str> = log
            .collection_cities(trip)
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(members, ["Rome", "Barcelona"]);

        log.delete_city(rome).unwrap();
        assert_eq!(log.collection(trip).unwrap().city_count(), 1);

        assert!(log.remove_from_collection(trip, barcelona).unwrap());
        assert_eq!(log.delete_collection(trip).unwrap().name, "Med trip");
        assert!(matches!(
            log.delete_collection(trip),
            Err(TravelLogError::CollectionNotFound(_))
        ));

        let favorites = log.collections()[0].id;
        assert!(matches!(
            log.delete_collection(favorites),
            Err(TravelLogError::DefaultCollection(_))
        ));
    }
}
