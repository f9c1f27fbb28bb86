//! # Catalog Store
//!
//! Holds the static collection of [`LoaderRecord`]s for a session. The
//! catalog is injected input: callers construct it from a JSON file or from
//! the built-in dataset, and nothing in the library mutates it afterwards.
//!
//! The built-in dataset is a curated seed (embedded `data/loaders.json`)
//! extended by a deterministic generator up to [`BUILTIN_CATALOG_SIZE`]
//! records, so demos and tests see a realistically sized catalog without
//! shipping megabytes of snippet text.

use crate::error::{LoadzError, Result};
use crate::model::{Complexity, LoaderRecord, SizeClass, Speed};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// Total number of records in the built-in catalog.
pub const BUILTIN_CATALOG_SIZE: usize = 1000;

const SEED_JSON: &str = include_str!("../../data/loaders.json");

static SEED_RECORDS: Lazy<Vec<LoaderRecord>> = Lazy::new(|| {
    serde_json::from_str(SEED_JSON).expect("embedded seed catalog is valid JSON")
});

/// The full in-memory collection of loader records available to
/// filter, sort, and paginate.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<LoaderRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate record ids.
    pub fn new(records: Vec<LoaderRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(LoadzError::Catalog(format!(
                    "Duplicate loader id: {}",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    /// Loads a catalog from a JSON file containing an array of records.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(LoadzError::Io)?;
        let records: Vec<LoaderRecord> =
            serde_json::from_str(&content).map_err(LoadzError::Serialization)?;
        Self::new(records)
    }

    /// The built-in catalog: curated seed records plus generated ones.
    pub fn builtin() -> Self {
        let mut records = SEED_RECORDS.clone();
        let generated = generate_records(records.len(), BUILTIN_CATALOG_SIZE);
        records.extend(generated);
        // Seed ids are hand-written and generated ids are namespaced, so
        // uniqueness holds by construction.
        Self { records }
    }

    pub fn records(&self) -> &[LoaderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LoaderRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

const GENERATED_CATEGORIES: [&str; 10] = [
    "spinners", "dots", "bars", "rings", "flowers", "hearts", "waves", "svg", "morphing",
    "gradient",
];

/// Extends the seed with programmatically generated records until the
/// catalog holds `total` entries. Every field is a pure function of the
/// record's ordinal so the built-in catalog is reproducible across runs.
fn generate_records(from: usize, total: usize) -> Vec<LoaderRecord> {
    let mut records = Vec::with_capacity(total.saturating_sub(from));
    for i in from..total {
        let category = GENERATED_CATEGORIES[i % GENERATED_CATEGORIES.len()];
        let mut name_cat: Vec<char> = category.chars().collect();
        name_cat[0] = name_cat[0].to_ascii_uppercase();
        let name_cat: String = name_cat.into_iter().collect();

        let side = 20 + (i % 5) * 10;
        let hue = (i * 36) % 3600;
        let radius = if i % 2 == 0 { "50%" } else { "10%" };
        let duration = 1 + (i % 3);

        records.push(LoaderRecord {
            id: format!("generated-{}-{}", category, i),
            name: format!("{} Loader {}", name_cat, i),
            category: category.to_string(),
            tags: vec![category.to_string(), "generated".into(), "modern".into()],
            description: format!("Generated {} loader with unique animation", category),
            markup: format!("<div class=\"loader-{}\"></div>", i),
            style: format!(
                ".loader-{i} {{\n  width: {side}px;\n  height: {side}px;\n  background: hsl({h}.{d}, 70%, 60%);\n  border-radius: {radius};\n  animation: anim-{i} {duration}s linear infinite;\n}}\n\n@keyframes anim-{i} {{\n  0% {{ transform: rotate(0deg); }}\n  100% {{ transform: rotate(360deg); }}\n}}",
                i = i,
                side = side,
                h = hue / 10,
                d = hue % 10,
                radius = radius,
                duration = duration,
            ),
            script: None,
            complexity: match i % 3 {
                0 => Complexity::Simple,
                1 => Complexity::Medium,
                _ => Complexity::Complex,
            },
            size: match i % 5 {
                0 => SizeClass::Xs,
                1 => SizeClass::Sm,
                2 => SizeClass::Md,
                3 => SizeClass::Lg,
                _ => SizeClass::Xl,
            },
            speed: match i % 3 {
                0 => Speed::Slow,
                1 => Speed::Normal,
                _ => Speed::Fast,
            },
            downloads: ((i as u64 * 37) % 2000) + 100,
            likes: ((i as u64 * 17) % 200) + 10,
            created_at: "2024-01-12".to_string(),
        });
    }
    records
}
