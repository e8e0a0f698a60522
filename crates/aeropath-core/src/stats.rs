// crates/aeropath-core/src/stats.rs

//! Derived travel statistics.
//!
//! Everything here is a pure function of a city slice. An empty slice is a
//! normal input and yields zeros and `None`s.

use crate::geo::haversine_km;
use crate::model::City;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Summary snapshot of a travel log.
///
/// Recomputed in full from the city collection; never mutated on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelStats {
    pub total_cities: usize,
    /// Distinct `country` strings, case-sensitive.
    pub total_countries: usize,
    /// Mean rating, `0.0` when empty.
    pub average_rating: f64,
    /// Name of the highest-rated city (not necessarily a favorited one).
    pub favorite_city: Option<String>,
    pub most_visited_country: Option<String>,
    /// Kilometres along the chronological visit order.
    pub total_distance: f64,
    /// Consecutive calendar days with a visit, counted back from the latest visit.
    pub visit_streak: usize,
    pub last_visit_date: Option<DateTime<Utc>>,
}

impl TravelStats {
    pub fn from_cities(cities: &[City]) -> Self {
        let average_rating = if cities.is_empty() {
            0.0
        } else {
            let sum: u32 = cities.iter().map(|c| c.rating.get() as u32).sum();
            sum as f64 / cities.len() as f64
        };

        Self {
            total_cities: cities.len(),
            total_countries: cities
                .iter()
                .map(|c| c.country.as_str())
                .collect::<HashSet<_>>()
                .len(),
            average_rating,
            favorite_city: highest_rated(cities).map(|c| c.name.clone()),
            most_visited_country: most_visited_country(cities).map(str::to_owned),
            total_distance: total_distance(cities),
            visit_streak: visit_streak(cities),
            last_visit_date: cities.iter().map(|c| c.visit_date).max(),
        }
    }
}

/// Highest-rated city. Ties go to the first one in input order.
pub fn highest_rated(cities: &[City]) -> Option<&City> {
    cities.iter().fold(None, |best: Option<&City>, c| match best {
        Some(b) if b.rating >= c.rating => Some(b),
        _ => Some(c),
    })
}

/// Country with the most cities. Ties go to the country that appears first.
pub fn most_visited_country(cities: &[City]) -> Option<&str> {
    country_counts(cities)
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (country, n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((country, n)),
        })
        .map(|(country, _)| country)
}

/// Cities per country, in order of first appearance.
pub fn country_counts(cities: &[City]) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<(&str, usize)> = Vec::new();
    for c in cities {
        match index.get(c.country.as_str()).copied() {
            Some(i) => out[i].1 += 1,
            None => {
                index.insert(c.country.as_str(), out.len());
                out.push((c.country.as_str(), 1));
            }
        }
    }
    out
}

/// Cities per country, most visited first. Equal counts keep first-appearance order.
pub fn country_distribution(cities: &[City]) -> Vec<(&str, usize)> {
    let mut counts = country_counts(cities);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Number of cities per star rating. Only ratings that occur are present.
pub fn rating_distribution(cities: &[City]) -> BTreeMap<u8, usize> {
    let mut out = BTreeMap::new();
    for c in cities {
        *out.entry(c.rating.get()).or_insert(0) += 1;
    }
    out
}

/// Visits per calendar month (abbreviated name), January first.
///
/// Years are merged; months without visits are omitted.
pub fn monthly_visits(cities: &[City]) -> Vec<(String, usize)> {
    let mut buckets: [Option<(String, usize)>; 12] = Default::default();
    for c in cities {
        let slot = &mut buckets[c.visit_date.month0() as usize];
        match slot {
            Some((_, n)) => *n += 1,
            None => *slot = Some((c.visit_date.format("%b").to_string(), 1)),
        }
    }
    buckets.into_iter().flatten().collect()
}

/// Sum of great-circle gaps between consecutive visits in visit-date order.
///
/// Equal dates keep input order. Fewer than two cities yields `0.0`.
pub fn total_distance(cities: &[City]) -> f64 {
    let mut route: Vec<&City> = cities.iter().collect();
    route.sort_by_key(|c| c.visit_date);
    route
        .windows(2)
        .map(|pair| haversine_km(&pair[0].coordinate, &pair[1].coordinate))
        .sum()
}

/// Consecutive calendar days with at least one visit, walking back from the
/// most recent visit.
///
/// Several visits on the same day each extend the count. Days are UTC
/// calendar days.
pub fn visit_streak(cities: &[City]) -> usize {
    let mut dates: Vec<DateTime<Utc>> = cities.iter().map(|c| c.visit_date).collect();
    if dates.is_empty() {
        return 0;
    }
    dates.sort_by(|a, b| b.cmp(a));

    let mut streak = 1;
    for pair in dates.windows(2) {
        let gap = (pair[0].date_naive() - pair[1].date_naive()).num_days();
        if gap > 1 {
            break;
        }
        streak += 1;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use chrono::{Duration, TimeZone};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 10, 0, 0).unwrap()
    }

    fn city(name: &str, country: &str, rating: i64, visited: DateTime<Utc>) -> City {
        City::new(name, country, Coordinate::new(0.0, 0.0))
            .with_rating(rating)
            .with_visit_date(visited)
    }

    #[test]
    fn empty_collection_defaults() {
        let s = TravelStats::from_cities(&[]);
        assert_eq!(s.total_cities, 0);
        assert_eq!(s.total_countries, 0);
        assert_eq!(s.average_rating, 0.0);
        assert_eq!(s.favorite_city, None);
        assert_eq!(s.most_visited_country, None);
        assert_eq!(s.total_distance, 0.0);
        assert_eq!(s.visit_streak, 0);
        assert_eq!(s.last_visit_date, None);
        assert_eq!(s, TravelStats::default());
    }

    #[test]
    fn counts_and_average() {
        let cities = [
            city("Paris", "France", 5, day(1)),
            city("Lyon", "France", 3, day(2)),
            city("Rome", "Italy", 4, day(3)),
            city("Nice", "france", 2, day(4)),
        ];
        let s = TravelStats::from_cities(&cities);
        assert_eq!(s.total_cities, 4);
        // case-sensitive
        assert_eq!(s.total_countries, 3);
        assert_eq!(s.average_rating, 3.5);
        assert_eq!(s.most_visited_country.as_deref(), Some("France"));
        assert_eq!(s.last_visit_date, Some(day(4)));
    }

    #[test]
    fn favorite_city_is_highest_rated_not_favorited() {
        let cities = [
            city("Oslo", "Norway", 3, day(1)).with_favorite(true),
            city("Rome", "Italy", 5, day(2)),
        ];
        let s = TravelStats::from_cities(&cities);
        assert_eq!(s.favorite_city.as_deref(), Some("Rome"));
    }

    #[test]
    fn arg_max_ties_go_to_first_encountered() {
        let cities = [
            city("Kyoto", "Japan", 4, day(1)),
            city("Porto", "Portugal", 5, day(2)),
            city("Lisbon", "Portugal", 5, day(3)),
            city("Osaka", "Japan", 2, day(4)),
        ];
        assert_eq!(highest_rated(&cities).map(|c| c.name.as_str()), Some("Porto"));
        assert_eq!(most_visited_country(&cities), Some("Japan"));
    }

    #[test]
    fn distance_identical_coordinates_is_zero() {
        let cities = [city("A", "X", 3, day(1)), city("B", "X", 3, day(2))];
        assert_eq!(total_distance(&cities), 0.0);
        assert_eq!(total_distance(&cities[..1]), 0.0);
    }

    #[test]
    fn distance_one_degree_latitude() {
        let mut b = city("B", "X", 3, day(2));
        b.coordinate = Coordinate::new(1.0, 0.0);
        let cities = [city("A", "X", 3, day(1)), b];
        let d = total_distance(&cities);
        assert!((d - 111.19).abs() < 1.0, "got {d}");
    }

    #[test]
    fn distance_follows_visit_order_not_input_order() {
        let at = |lat: f64, d: u32| {
            let mut c = city("c", "X", 3, day(d));
            c.coordinate = Coordinate::new(lat, 0.0);
            c
        };
        // chronological: 0 -> 1 -> 2 degrees, input order scrambled
        let cities = [at(2.0, 3), at(0.0, 1), at(1.0, 2)];
        let d = total_distance(&cities);
        assert!((d - 2.0 * 111.19).abs() < 2.0, "got {d}");
    }

    #[test]
    fn streak_breaks_on_gap() {
        let d = day(20);
        let cities = [
            city("a", "X", 3, d - Duration::days(2)),
            city("b", "X", 3, d),
            city("c", "X", 3, d - Duration::days(5)),
            city("d", "X", 3, d - Duration::days(1)),
        ];
        assert_eq!(visit_streak(&cities), 3);
    }

    #[test]
    fn streak_uses_calendar_days() {
        // 23:30 and 00:30 two days later are 25 hours apart but two calendar days
        let late = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2024, 3, 3, 0, 30, 0).unwrap();
        assert_eq!(visit_streak(&[city("a", "X", 3, late), city("b", "X", 3, early)]), 1);

        // 00:10 and 23:50 the previous day are one calendar day apart
        let a = Utc.with_ymd_and_hms(2024, 3, 2, 0, 10, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 1, 23, 50, 0).unwrap();
        assert_eq!(visit_streak(&[city("a", "X", 3, a), city("b", "X", 3, b)]), 2);
    }

    #[test]
    fn streak_counts_same_day_visits() {
        let cities = [
            city("a", "X", 3, day(5)),
            city("b", "X", 3, day(5)),
            city("c", "X", 3, day(4)),
        ];
        assert_eq!(visit_streak(&cities), 3);
        assert_eq!(visit_streak(&cities[..1]), 1);
        assert_eq!(visit_streak(&[]), 0);
    }

    #[test]
    fn distributions() {
        let cities = [
            city("Paris", "France", 5, day(1)),
            city("Rome", "Italy", 4, day(2)),
            city("Milan", "Italy", 4, day(3)),
            city("Oslo", "Norway", 5, Utc.with_ymd_and_hms(2023, 12, 24, 0, 0, 0).unwrap()),
        ];
        let ratings = rating_distribution(&cities);
        assert_eq!(ratings.get(&5), Some(&2));
        assert_eq!(ratings.get(&4), Some(&2));
        assert_eq!(ratings.get(&1), None);

        assert_eq!(
            country_distribution(&cities),
            vec![("Italy", 2), ("France", 1), ("Norway", 1)]
        );
        assert_eq!(
            monthly_visits(&cities),
            vec![("Mar".to_string(), 3), ("Dec".to_string(), 1)]
        );
    }
}
