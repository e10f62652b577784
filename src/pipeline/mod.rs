//! Pipeline entry points for crawler operations.
//!
//! - `Crawler::run`: drive one traversal strategy from a start URL to a
//!   drained frontier

pub mod crawl;

pub use crawl::Crawler;
