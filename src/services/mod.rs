//! Service layer for the crawler application.
//!
//! This module contains the collaborators the traversal engine consumes:
//! - Page fetching (`PageFetcher`, `HttpFetcher`)
//! - HTML parsing (`PageDocument`)
//! - Link extraction and scoping (`extract_links`)
//! - Relevance scoring (`RelevanceScorer`)

mod fetcher;
mod html;
mod links;
mod scoring;

pub use fetcher::{FetchedPage, HttpFetcher, PageFetcher};
pub use html::PageDocument;
pub use links::extract_links;
pub use scoring::RelevanceScorer;
