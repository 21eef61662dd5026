//! Core pipeline and consumer-side logic for the portfolio site.
//!
//! This crate ties content discovery to the export artifact (`pipeline`,
//! `export`) and provides the read side the site uses at start-up
//! (`catalog`, `page`).

pub mod catalog;
pub mod export;
pub mod mock;
pub mod page;
pub mod pipeline;

pub use catalog::Catalog;
pub use page::{PageState, ProjectPage};
