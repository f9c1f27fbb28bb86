//! # Query Engine
//!
//! Pure filtering and sorting over a slice of [`LoaderRecord`]s. Given the
//! same records and specs, [`query`] always produces the same output; it
//! never mutates its input and never fails; an empty result is the worst
//! case.
//!
//! All filter predicates are conjunctive: a record must satisfy every
//! active constraint. Sorting uses `Vec::sort_by`, which is stable, so
//! records with equal sort keys retain catalog insertion order.

use crate::model::{Complexity, LoaderRecord, SizeClass, Speed};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::str::FromStr;

/// The set of active constraints narrowing the catalog. `None` fields (and
/// a blank search term) impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search_term: String,
    pub category: Option<String>,
    pub complexity: Option<Complexity>,
    pub size: Option<SizeClass>,
    pub speed: Option<Speed>,
}

impl FilterSpec {
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.category.is_none()
            && self.complexity.is_none()
            && self.size.is_none()
            && self.speed.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Downloads,
    Likes,
    Created,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "downloads" => Ok(SortKey::Downloads),
            "likes" => Ok(SortKey::Likes),
            "created" => Ok(SortKey::Created),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

impl SortKey {
    /// Parses a key string, falling back to name ordering for anything
    /// unrecognized. Sorting must never fail.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The chosen ordering applied to filtered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Filters and sorts `records` according to `filter` and `sort`. Pure: the input is
/// untouched and matching records are cloned into the result.
pub fn query(records: &[LoaderRecord], filter: &FilterSpec, sort: &SortSpec) -> Vec<LoaderRecord> {
    let term = filter.search_term.trim().to_lowercase();

    let mut results: Vec<LoaderRecord> = records
        .iter()
        .filter(|r| matches_filter(r, filter, &term))
        .cloned()
        .collect();

    results.sort_by(|a, b| {
        let ord = compare_records(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    results
}

fn matches_filter(record: &LoaderRecord, filter: &FilterSpec, term: &str) -> bool {
    if let Some(category) = &filter.category {
        if &record.category != category {
            return false;
        }
    }

    if !term.is_empty() && !matches_search(record, term) {
        return false;
    }

    if let Some(complexity) = filter.complexity {
        if record.complexity != complexity {
            return false;
        }
    }
    if let Some(size) = filter.size {
        if record.size != size {
            return false;
        }
    }
    if let Some(speed) = filter.speed {
        if record.speed != speed {
            return false;
        }
    }

    true
}

/// Case-insensitive substring match over name, category, description, and
/// every tag. `term` must already be lowercased.
fn matches_search(record: &LoaderRecord, term: &str) -> bool {
    record.name.to_lowercase().contains(term)
        || record.category.to_lowercase().contains(term)
        || record.description.to_lowercase().contains(term)
        || record.tags.iter().any(|t| t.to_lowercase().contains(term))
}

/// Comparator for the given sort key, always in ascending sense.
///
/// Dates that fail to parse sort after all valid dates and compare equal to
/// each other; a descending sort therefore shows them first. Ties under any
/// key are left to the caller's stable sort.
fn compare_records(a: &LoaderRecord, b: &LoaderRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Downloads => a.downloads.cmp(&b.downloads),
        SortKey::Likes => a.likes.cmp(&b.likes),
        SortKey::Created => {
            let da = parse_created(&a.created_at);
            let db = parse_created(&b.created_at);
            match (da, db) {
                (Some(da), Some(db)) => da.cmp(&db),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
    }
}

fn parse_created(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, category: &str) -> LoaderRecord {
        LoaderRecord {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            tags: vec![],
            description: String::new(),
            markup: "<div></div>".to_string(),
            style: String::new(),
            script: None,
            complexity: Complexity::Simple,
            size: SizeClass::Md,
            speed: Speed::Normal,
            downloads: 0,
            likes: 0,
            created_at: "2024-01-01".to_string(),
        }
    }

    fn catalog() -> Vec<LoaderRecord> {
        let mut heart = record("heart-1", "Beating Heart", "hearts");
        heart.tags = vec!["heart".into(), "beat".into()];
        heart.description = "Animated beating heart loader".into();
        heart.likes = 30;
        heart.downloads = 850;
        heart.complexity = Complexity::Complex;

        let mut spin = record("spin-1", "Classic Spinner", "spinners");
        spin.likes = 10;
        spin.downloads = 1250;
        spin.size = SizeClass::Lg;
        spin.created_at = "2024-02-01".into();

        let mut dots = record("dots-1", "Bouncing Dots", "dots");
        dots.likes = 50;
        dots.downloads = 400;
        dots.speed = Speed::Fast;
        dots.created_at = "2023-12-01".into();

        vec![heart, spin, dots]
    }

    #[test]
    fn unconstrained_filter_keeps_everything() {
        let records = catalog();
        let results = query(&records, &FilterSpec::default(), &SortSpec::default());
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn category_filter_keeps_exact_matches_only() {
        let records = catalog();
        let filter = FilterSpec {
            category: Some("spinners".into()),
            ..Default::default()
        };
        let results = query(&records, &filter, &SortSpec::default());
        assert_eq!(results.len(), 1);
        assert!(results.iter().all(|r| r.category == "spinners"));
    }

    #[test]
    fn search_matches_name_category_description_and_tags() {
        let records = catalog();
        for term in ["Beating", "hearts", "Animated beating", "beat"] {
            let filter = FilterSpec {
                search_term: term.to_string(),
                ..Default::default()
            };
            let results = query(&records, &filter, &SortSpec::default());
            assert!(
                results.iter().any(|r| r.id == "heart-1"),
                "term {:?} should match the heart record",
                term
            );
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = catalog();
        let upper = FilterSpec {
            search_term: "SPIN".into(),
            ..Default::default()
        };
        let lower = FilterSpec {
            search_term: "spin".into(),
            ..Default::default()
        };
        let a = query(&records, &upper, &SortSpec::default());
        let b = query(&records, &lower, &SortSpec::default());
        let ids = |v: &[LoaderRecord]| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
        assert!(!a.is_empty());
    }

    #[test]
    fn whitespace_search_term_is_no_constraint() {
        let records = catalog();
        let filter = FilterSpec {
            search_term: "   ".into(),
            ..Default::default()
        };
        assert_eq!(query(&records, &filter, &SortSpec::default()).len(), 3);
    }

    #[test]
    fn filters_are_conjunctive() {
        let records = catalog();
        // Complex + hearts matches only the heart; complex + dots matches nothing
        let filter = FilterSpec {
            category: Some("hearts".into()),
            complexity: Some(Complexity::Complex),
            ..Default::default()
        };
        assert_eq!(query(&records, &filter, &SortSpec::default()).len(), 1);

        let filter = FilterSpec {
            category: Some("dots".into()),
            complexity: Some(Complexity::Complex),
            ..Default::default()
        };
        assert!(query(&records, &filter, &SortSpec::default()).is_empty());
    }

    #[test]
    fn size_and_speed_filter_exactly() {
        let records = catalog();
        let filter = FilterSpec {
            size: Some(SizeClass::Lg),
            ..Default::default()
        };
        let results = query(&records, &filter, &SortSpec::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "spin-1");

        let filter = FilterSpec {
            speed: Some(Speed::Fast),
            ..Default::default()
        };
        let results = query(&records, &filter, &SortSpec::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "dots-1");
    }

    #[test]
    fn query_is_idempotent() {
        let records = catalog();
        let filter = FilterSpec {
            search_term: "loader".into(),
            ..Default::default()
        };
        let sort = SortSpec {
            key: SortKey::Downloads,
            direction: SortDirection::Descending,
        };
        let a = query(&records, &filter, &sort);
        let b = query(&records, &filter, &sort);
        let ids = |v: &[LoaderRecord]| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn sorts_by_likes_descending() {
        let records = catalog(); // likes: 30, 10, 50
        let sort = SortSpec {
            key: SortKey::Likes,
            direction: SortDirection::Descending,
        };
        let results = query(&records, &FilterSpec::default(), &sort);
        let likes: Vec<u64> = results.iter().map(|r| r.likes).collect();
        assert_eq!(likes, vec![50, 30, 10]);
    }

    #[test]
    fn sorts_by_name_case_insensitively() {
        let mut records = catalog();
        records.push(record("z", "abacus", "spinners"));
        let results = query(&records, &FilterSpec::default(), &SortSpec::default());
        assert_eq!(results[0].name, "abacus");
        assert_eq!(results[1].name, "Beating Heart");
    }

    #[test]
    fn sorts_by_created_date_chronologically() {
        let records = catalog();
        let sort = SortSpec {
            key: SortKey::Created,
            direction: SortDirection::Ascending,
        };
        let results = query(&records, &FilterSpec::default(), &sort);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["dots-1", "heart-1", "spin-1"]);
    }

    #[test]
    fn malformed_dates_sort_after_valid_ones() {
        let mut records = catalog();
        let mut bad = record("bad-1", "Broken Date", "spinners");
        bad.created_at = "yesterday-ish".into();
        records.insert(0, bad);

        let sort = SortSpec {
            key: SortKey::Created,
            direction: SortDirection::Ascending,
        };
        let results = query(&records, &FilterSpec::default(), &sort);
        assert_eq!(results.last().unwrap().id, "bad-1");
    }

    #[test]
    fn equal_keys_retain_catalog_order() {
        // All records share created_at; stable sort must keep input order.
        let records = vec![
            record("a", "A", "spinners"),
            record("b", "B", "spinners"),
            record("c", "C", "spinners"),
        ];
        let sort = SortSpec {
            key: SortKey::Created,
            direction: SortDirection::Ascending,
        };
        let results = query(&records, &FilterSpec::default(), &sort);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn unknown_sort_key_falls_back_to_name() {
        assert_eq!(SortKey::parse_lenient("popularity"), SortKey::Name);
        assert_eq!(SortKey::parse_lenient(""), SortKey::Name);
        assert_eq!(SortKey::parse_lenient("likes"), SortKey::Likes);
    }

    #[test]
    fn empty_catalog_yields_empty_results() {
        let results = query(&[], &FilterSpec::default(), &SortSpec::default());
        assert!(results.is_empty());
    }
}
