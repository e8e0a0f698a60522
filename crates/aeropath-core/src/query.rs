// crates/aeropath-core/src/query.rs

//! The search → filter → sort pipeline that produces the displayed list.
//!
//! The three stages always run, always in that order. Given the same cities,
//! query state, config and `now`, [`apply`] returns the same list.

use crate::error::TravelLogError;
use crate::model::City;
use crate::traits::NameMatch;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Category filter applied after search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOption {
    #[default]
    All,
    Favorites,
    /// Rating at or above [`QueryConfig::high_rating_threshold`].
    HighRated,
    /// Visited within [`QueryConfig::recent_window_days`] of now.
    Recent,
}

impl FilterOption {
    pub const ALL: [FilterOption; 4] = [
        FilterOption::All,
        FilterOption::Favorites,
        FilterOption::HighRated,
        FilterOption::Recent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterOption::All => "All",
            FilterOption::Favorites => "Favorites",
            FilterOption::HighRated => "High Rating (4-5)",
            FilterOption::Recent => "Last Month",
        }
    }

    pub fn matches(self, city: &City, config: &QueryConfig, now: DateTime<Utc>) -> bool {
        match self {
            FilterOption::All => true,
            FilterOption::Favorites => city.is_favorite,
            FilterOption::HighRated => city.rating.get() >= config.high_rating_threshold,
            FilterOption::Recent => config.is_recent(city, now),
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterOption {
    type Err = TravelLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterOption::All),
            "favorites" | "favourites" => Ok(FilterOption::Favorites),
            "high-rated" | "highrated" | "high_rated" => Ok(FilterOption::HighRated),
            "recent" => Ok(FilterOption::Recent),
            other => Err(TravelLogError::UnknownOption(format!("filter '{other}'"))),
        }
    }
}

/// Sort order applied last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    #[default]
    DateNewest,
    DateOldest,
    /// Highest rating first.
    Rating,
    Name,
    Country,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::DateNewest,
        SortOption::DateOldest,
        SortOption::Rating,
        SortOption::Name,
        SortOption::Country,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOption::DateNewest => "Date (Newest)",
            SortOption::DateOldest => "Date (Oldest)",
            SortOption::Rating => "Rating",
            SortOption::Name => "Name",
            SortOption::Country => "Country",
        }
    }

    pub fn compare(self, a: &City, b: &City) -> Ordering {
        match self {
            SortOption::DateNewest => b.visit_date.cmp(&a.visit_date),
            SortOption::DateOldest => a.visit_date.cmp(&b.visit_date),
            SortOption::Rating => b.rating.cmp(&a.rating),
            SortOption::Name => a.name.cmp(&b.name),
            SortOption::Country => a.country.cmp(&b.country),
        }
    }

    /// Stable sort: ties keep their incoming order.
    pub fn sort(self, cities: &mut [City]) {
        cities.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOption {
    type Err = TravelLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" | "date-newest" => Ok(SortOption::DateNewest),
            "oldest" | "date-oldest" => Ok(SortOption::DateOldest),
            "rating" => Ok(SortOption::Rating),
            "name" => Ok(SortOption::Name),
            "country" => Ok(SortOption::Country),
            other => Err(TravelLogError::UnknownOption(format!("sort '{other}'"))),
        }
    }
}

/// Tunables for the category filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    pub recent_window_days: i64,
    pub high_rating_threshold: u8,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            recent_window_days: 30,
            high_rating_threshold: 4,
        }
    }
}

impl QueryConfig {
    /// Oldest visit date still counted as recent.
    pub fn recent_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.recent_window_days)
    }

    /// Inclusive of exactly `recent_window_days` ago.
    pub fn is_recent(&self, city: &City, now: DateTime<Utc>) -> bool {
        city.visit_date >= self.recent_cutoff(now)
    }
}

/// User-selected query state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Empty text disables the search stage.
    pub search_text: String,
    pub filter: FilterOption,
    pub sort: SortOption,
}

/// Runs search, then the category filter, then the sort.
pub fn apply(
    cities: &[City],
    state: &QueryState,
    config: &QueryConfig,
    now: DateTime<Utc>,
) -> Vec<City> {
    let searching = !state.search_text.is_empty();
    let mut out: Vec<City> = cities
        .iter()
        .filter(|c| !searching || c.matches_search(&state.search_text))
        .filter(|c| state.filter.matches(c, config, now))
        .cloned()
        .collect();
    state.sort.sort(&mut out);

    debug!(
        input = cities.len(),
        output = out.len(),
        search = %state.search_text,
        filter = ?state.filter,
        sort = ?state.sort,
        "query pipeline applied"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    fn city(name: &str, country: &str) -> City {
        City::new(name, country, Coordinate::new(0.0, 0.0)).with_visit_date(now())
    }

    fn names(cities: &[City]) -> Vec<&str> {
        cities.iter().map(|c| c.name.as_str()).collect()
    }

    fn run(cities: &[City], state: &QueryState) -> Vec<City> {
        apply(cities, state, &QueryConfig::default(), now())
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let cities = [city("Paris", "France"), city("Rome", "Italy")];
        let state = QueryState {
            search_text: "par".into(),
            ..QueryState::default()
        };
        assert_eq!(names(&run(&cities, &state)), ["Paris"]);

        let state = QueryState {
            search_text: "ITA".into(),
            ..QueryState::default()
        };
        assert_eq!(names(&run(&cities, &state)), ["Rome"]);
    }

    #[test]
    fn empty_search_keeps_all() {
        let cities = [city("Paris", "France"), city("Rome", "Italy")];
        assert_eq!(run(&cities, &QueryState::default()).len(), 2);
    }

    #[test]
    fn high_rated_and_favorites_select_the_same_city_differently() {
        let cities = [
            city("A", "X").with_rating(5).with_favorite(true),
            city("B", "X").with_rating(2),
        ];
        for filter in [FilterOption::HighRated, FilterOption::Favorites] {
            let state = QueryState {
                filter,
                ..QueryState::default()
            };
            assert_eq!(names(&run(&cities, &state)), ["A"], "{filter:?}");
        }
    }

    #[test]
    fn high_rated_boundary() {
        let cities = [city("four", "X").with_rating(4), city("three", "X").with_rating(3)];
        let state = QueryState {
            filter: FilterOption::HighRated,
            ..QueryState::default()
        };
        assert_eq!(names(&run(&cities, &state)), ["four"]);
    }

    #[test]
    fn recent_is_inclusive_of_window_edge() {
        let cities = [
            city("edge", "X").with_visit_date(now() - Duration::days(30)),
            city("old", "X").with_visit_date(now() - Duration::days(30) - Duration::seconds(1)),
            city("today", "X"),
        ];
        let state = QueryState {
            filter: FilterOption::Recent,
            sort: SortOption::Name,
            ..QueryState::default()
        };
        assert_eq!(names(&run(&cities, &state)), ["edge", "today"]);
    }

    #[test]
    fn search_runs_before_filter() {
        let cities = [
            city("Paris", "France").with_favorite(true),
            city("Parma", "Italy"),
            city("Oslo", "Norway").with_favorite(true),
        ];
        let state = QueryState {
            search_text: "par".into(),
            filter: FilterOption::Favorites,
            sort: SortOption::Name,
        };
        assert_eq!(names(&run(&cities, &state)), ["Paris"]);
    }

    #[test]
    fn sort_by_name() {
        let cities = [city("Rome", "Italy"), city("Paris", "France")];
        let state = QueryState {
            sort: SortOption::Name,
            ..QueryState::default()
        };
        assert_eq!(names(&run(&cities, &state)), ["Paris", "Rome"]);
    }

    #[test]
    fn sort_orders() {
        let base = now();
        let cities = [
            city("b", "Norway").with_rating(3).with_visit_date(base - Duration::days(2)),
            city("a", "Chile").with_rating(5).with_visit_date(base - Duration::days(1)),
            city("c", "Austria").with_rating(4).with_visit_date(base - Duration::days(3)),
        ];
        let sorted = |sort| {
            let state = QueryState {
                sort,
                ..QueryState::default()
            };
            let out = run(&cities, &state);
            out.into_iter().map(|c| c.name).collect::<Vec<_>>()
        };
        assert_eq!(sorted(SortOption::DateNewest), ["a", "b", "c"]);
        assert_eq!(sorted(SortOption::DateOldest), ["c", "b", "a"]);
        assert_eq!(sorted(SortOption::Rating), ["a", "c", "b"]);
        assert_eq!(sorted(SortOption::Country), ["c", "a", "b"]);
    }

    #[test]
    fn rating_sort_is_stable() {
        let cities = [
            city("first", "X").with_rating(4),
            city("top", "X").with_rating(5),
            city("second", "X").with_rating(4),
        ];
        let state = QueryState {
            sort: SortOption::Rating,
            ..QueryState::default()
        };
        assert_eq!(names(&run(&cities, &state)), ["top", "first", "second"]);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let cities = [
            city("Rome", "Italy").with_rating(4),
            city("Paris", "France").with_rating(4),
            city("Oslo", "Norway").with_rating(2),
        ];
        let state = QueryState {
            search_text: "o".into(),
            filter: FilterOption::All,
            sort: SortOption::Rating,
        };
        assert_eq!(run(&cities, &state), run(&cities, &state));
    }

    #[test]
    fn options_parse() {
        assert_eq!("High-Rated".parse::<FilterOption>().unwrap(), FilterOption::HighRated);
        assert_eq!("oldest".parse::<SortOption>().unwrap(), SortOption::DateOldest);
        assert!(matches!(
            "sideways".parse::<SortOption>(),
            Err(TravelLogError::UnknownOption(_))
        ));
    }
}
