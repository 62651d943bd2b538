//! Page view-model builders.
//!
//! Each page consumes the data source and the session and produces a
//! serializable view for the client to render; pages never call into one
//! another.

pub mod dashboards;
pub mod experiences;
pub mod explorer;
pub mod preservation;
pub mod settings;

/// The navigable pages, in sidebar order: (slug, title).
pub const PAGES: [(&str, &str); 5] = [
    ("explorer", "Discover Art"),
    ("experiences", "Cultural Experiences"),
    ("dashboards", "Responsible Tourism"),
    ("preservation", "Preservation Hub"),
    ("settings", "Settings"),
];
