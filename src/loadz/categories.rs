//! Category metadata is descriptive configuration, not query logic: a
//! lookup table of display name, blurb, and icon keyed by category id,
//! combined with live counts from the catalog.

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: &'static str,
    pub count: usize,
}

const KNOWN_CATEGORIES: [(&str, &str, &str, &str); 10] = [
    ("spinners", "Spinners", "Rotating spinners", "◌"),
    ("dots", "Dots", "Dot-based animations", "⋯"),
    ("bars", "Bars", "Bar and line loaders", "▮"),
    ("rings", "Rings", "Circular ring animations", "◯"),
    ("flowers", "Flowers", "Organic flower designs", "✿"),
    ("hearts", "Hearts", "Heart-shaped loaders", "♥"),
    ("waves", "Waves", "Wave and flow animations", "≈"),
    ("svg", "SVG", "SVG-based animations", "▰"),
    ("morphing", "Morphing", "Shape morphing effects", "◇"),
    ("gradient", "Gradient", "Gradient animations", "▒"),
];

const FALLBACK_ICON: &str = "•";

/// Builds the category table for a catalog: "all" first, then every known
/// category, then any category present in the data but missing from the
/// table (new categories need no code changes).
pub fn category_summary(catalog: &Catalog) -> Vec<CategoryInfo> {
    let count_for = |id: &str| {
        catalog
            .records()
            .iter()
            .filter(|r| r.category == id)
            .count()
    };

    let mut summary = vec![CategoryInfo {
        id: "all".to_string(),
        name: "All".to_string(),
        description: "All available loaders".to_string(),
        icon: FALLBACK_ICON,
        count: catalog.len(),
    }];

    for (id, name, description, icon) in KNOWN_CATEGORIES {
        summary.push(CategoryInfo {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon,
            count: count_for(id),
        });
    }

    for record in catalog.records() {
        if summary.iter().all(|c| c.id != record.category) {
            let mut name: Vec<char> = record.category.chars().collect();
            if let Some(first) = name.first_mut() {
                *first = first.to_ascii_uppercase();
            }
            summary.push(CategoryInfo {
                id: record.category.clone(),
                name: name.into_iter().collect(),
                description: format!("{} loaders", record.category),
                icon: FALLBACK_ICON,
                count: count_for(&record.category),
            });
        }
    }

    summary
}
