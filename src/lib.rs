//! Pulseboard: a static metrics dashboard generator.
//!
//! A collection workflow writes `site/data/metrics.json`; the renderer
//! acquires that snapshot once, projects it into a fixed grid of labeled
//! cards and materializes the result into the site's HTML page, falling
//! back to a single placeholder card when no data is available.

pub mod cards;
pub mod config;
pub mod format;
pub mod github;
pub mod logging;
pub mod page;
pub mod render;
pub mod snapshot;
pub mod source;
