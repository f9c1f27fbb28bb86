//! # Gallery Session
//!
//! The stateful entry point the CLI (or any other UI) talks to. A
//! [`GallerySession`] owns the catalog plus the current filter, sort, and
//! page selections, re-runs the query engine and paginator after every
//! mutation, and hands the rendering layer a [`GalleryView`], the only
//! thing it is allowed to observe.
//!
//! Two invariants live here and nowhere else:
//!
//! - Any filter or sort change resets the current page to 1, so narrowing
//!   the results can never leave the user stranded past the end.
//! - Explicit page navigation clamps to `[1, max(1, total_pages)]`;
//!   `next_page` on the last page is a no-op, not an error.
//!
//! Everything is synchronous and single-threaded; recomputation is a cheap
//! from-scratch pass over a catalog of ~10^3 records.

use crate::catalog::Catalog;
use crate::model::LoaderRecord;
use crate::query::{query, FilterSpec, SortDirection, SortKey, SortSpec};
use crate::paginate::paginate;

/// Records shown per page.
pub const PAGE_SIZE: usize = 24;

/// What the rendering layer sees after each recomputation.
#[derive(Debug, Clone)]
pub struct GalleryView {
    pub page_items: Vec<LoaderRecord>,
    pub total_results: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

pub struct GallerySession {
    catalog: Catalog,
    filter: FilterSpec,
    sort: SortSpec,
    current_page: usize,
}

impl GallerySession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: FilterSpec::default(),
            sort: SortSpec::default(),
            current_page: 1,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_search_term(&mut self, term: &str) -> GalleryView {
        self.filter.search_term = term.to_string();
        self.reset_page_and_view()
    }

    /// `"all"` or blank input clears the constraint. Categories are an open
    /// set, so any other value is taken as-is; a value matching nothing
    /// simply yields an empty result.
    pub fn set_category(&mut self, category: &str) -> GalleryView {
        let trimmed = category.trim();
        self.filter.category = if trimmed.is_empty() || trimmed == "all" {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.reset_page_and_view()
    }

    /// Unknown complexity values sanitize to "no constraint".
    pub fn set_complexity_filter(&mut self, complexity: &str) -> GalleryView {
        self.filter.complexity = complexity.parse().ok();
        self.reset_page_and_view()
    }

    pub fn set_size_filter(&mut self, size: &str) -> GalleryView {
        self.filter.size = size.parse().ok();
        self.reset_page_and_view()
    }

    pub fn set_speed_filter(&mut self, speed: &str) -> GalleryView {
        self.filter.speed = speed.parse().ok();
        self.reset_page_and_view()
    }

    /// Unknown keys fall back to name ordering; the direction is kept.
    pub fn set_sort_key(&mut self, key: &str) -> GalleryView {
        self.sort.key = SortKey::parse_lenient(key);
        self.reset_page_and_view()
    }

    pub fn toggle_sort_direction(&mut self) -> GalleryView {
        self.sort.direction = self.sort.direction.toggled();
        self.reset_page_and_view()
    }

    /// Restores defaults: no filters, name ascending, page 1.
    pub fn reset_filters(&mut self) -> GalleryView {
        self.filter = FilterSpec::default();
        self.sort = SortSpec::default();
        self.reset_page_and_view()
    }

    pub fn go_to_page(&mut self, page: usize) -> GalleryView {
        self.current_page = page.max(1);
        self.clamped_view()
    }

    pub fn next_page(&mut self) -> GalleryView {
        self.current_page += 1;
        self.clamped_view()
    }

    pub fn previous_page(&mut self) -> GalleryView {
        self.current_page = self.current_page.saturating_sub(1).max(1);
        self.clamped_view()
    }

    /// Recomputes the view for the current selections without mutating them.
    pub fn view(&self) -> GalleryView {
        self.compute(self.current_page)
    }

    fn reset_page_and_view(&mut self) -> GalleryView {
        self.current_page = 1;
        self.view()
    }

    fn clamped_view(&mut self) -> GalleryView {
        let results = query(self.catalog.records(), &self.filter, &self.sort);
        let max_page = crate::paginate::total_pages(results.len(), PAGE_SIZE).max(1);
        self.current_page = self.current_page.min(max_page);

        let page = paginate(&results, PAGE_SIZE, self.current_page);
        GalleryView {
            total_results: results.len(),
            total_pages: page.total_pages,
            current_page: self.current_page,
            page_items: page.items,
        }
    }

    fn compute(&self, current_page: usize) -> GalleryView {
        let results = query(self.catalog.records(), &self.filter, &self.sort);
        let page = paginate(&results, PAGE_SIZE, current_page);
        GalleryView {
            total_results: results.len(),
            total_pages: page.total_pages,
            current_page,
            page_items: page.items,
        }
    }
}
