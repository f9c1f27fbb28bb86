//! # Loadz Architecture
//!
//! Loadz is a **UI-agnostic gallery library** for browsing a catalog of
//! loading-animation snippets. The CLI in `main.rs` is one client of the
//! library, not the other way around, and that distinction should guide
//! all development.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - Owns the filter/sort/page selections                     │
//! │  - Enforces the page-reset and page-clamp invariants        │
//! │  - Exposes a GalleryView after every mutation               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline (query.rs, paginate.rs)                           │
//! │  - Pure functions: records in, ordered page out             │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs)                                       │
//! │  - Immutable, id-unique record collection                   │
//! │  - Built-in dataset or a user-supplied JSON file            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, **never** writes to stdout/stderr, **never** calls
//! `std::process::exit`, and **never** assumes a terminal. The same core
//! could serve a TUI, a web service, or any other UI.
//!
//! The pipeline also has no fatal conditions: unknown filter or sort input
//! sanitizes to "no constraint"/fallback ordering, blank searches match
//! everything, out-of-range pages clamp, and malformed dates merely degrade
//! the Created sort order. The worst observable outcome is an empty view.
//!
//! ## Module Overview
//!
//! - [`catalog`]: the record collection and its providers
//! - [`query`]: filter + sort pipeline (the interesting part)
//! - [`paginate`]: fixed-size 1-based page slicing
//! - [`session`]: the stateful view controller UIs talk to
//! - [`categories`]: descriptive category metadata with live counts
//! - [`snippet`]: copy/export formatting and tar.gz archives
//! - [`clipboard`]: cross-platform clipboard support
//! - [`config`]: configuration management
//! - [`model`]: core data types (`LoaderRecord` and friends)
//! - [`error`]: error types

pub mod catalog;
pub mod categories;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod model;
pub mod paginate;
pub mod query;
pub mod session;
pub mod snippet;
