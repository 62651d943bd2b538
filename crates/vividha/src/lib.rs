//! Vividha: data layer for a cultural-heritage and tourism dashboard.
//!
//! The library holds the reproducible core of the application: loading flat
//! delimited datasets into an in-memory table, filtering that table with
//! user-selected predicates, carrying per-session UI state, and appending
//! artifact submissions to a flat-file registry.
//!
//! # Core Principles
//!
//! - **Read-only loads**: dataset files are never modified; the registry is
//!   the single append-only output.
//! - **Pure filtering**: a filtered view is an order-preserving subset of
//!   the loaded table; the table itself is untouched.
//! - **Failures as values**: a missing or malformed file is a returned
//!   error, never a panic.
//!
//! # Example
//!
//! ```no_run
//! use vividha::{DataSource, Dataset, FilterSpec, LocalFiles};
//!
//! let source = LocalFiles::new("data");
//! let (table, meta) = source.load(Dataset::Cultural).unwrap();
//! println!("{} rows from {}", meta.row_count, meta.file);
//!
//! let view = FilterSpec::new().with_region("Bihar").apply(&table);
//! println!("{} rows in Bihar", view.row_count());
//! ```

pub mod data;
pub mod error;
pub mod filter;
pub mod model;
pub mod registry;
pub mod session;

pub use data::{
    DataSource, DataTable, Dataset, LocalFiles, Parser, ParserConfig, RemoteConfig,
    RemoteDatabase, SourceMetadata,
};
pub use error::{Result, VividhaError};
pub use filter::{FilterSpec, RangeFilter};
pub use model::{ArtAsset, ArtifactSubmission, CulturalRecord};
pub use registry::Registry;
pub use session::Session;
