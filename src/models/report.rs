//! Crawl result structures returned to the caller.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Timing and counters for a single crawl run.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlStats {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the frontier drained (or the page budget was hit)
    pub finished_at: DateTime<Utc>,

    /// Number of URLs dispatched (fetch attempted)
    pub pages_visited: usize,

    /// Total in-scope candidate links discovered across all pages
    pub links_discovered: usize,

    /// Fetches that failed with a transport error or non-2xx status
    pub fetch_failures: usize,
}

/// Final result of one crawl run.
///
/// `visited` is sorted for stable output; the underlying set carries no
/// ordering. `scores` is present only for the priority strategy.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    /// Canonical form of the start URL
    pub start_url: String,

    /// Strategy name the run was executed with
    pub strategy: String,

    /// Every URL dispatched during the run
    pub visited: Vec<String>,

    /// Relevance score per fetched URL (priority strategy only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<BTreeMap<String, u64>>,

    /// Run statistics
    pub stats: CrawlStats,
}
