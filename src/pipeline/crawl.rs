// src/pipeline/crawl.rs

//! Crawl driver.
//!
//! One fetch/extract/admit loop shared by all four traversal strategies.
//! The frontier decides order; the driver owns everything else: the
//! visited check-and-set at dispatch time, fetch error recovery, link
//! extraction, and (for the priority strategy) scoring and pruning.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

use chrono::Utc;
use url::Url;

use crate::error::{AppError, Result};
use crate::frontier::{EntryMeta, StrategyKind};
use crate::models::{Config, CrawlReport, CrawlStats};
use crate::services::{
    HttpFetcher, PageDocument, PageFetcher, RelevanceScorer, extract_links,
};
use crate::utils;

/// Drives a crawl run against a fetch collaborator.
pub struct Crawler {
    config: Config,
    fetcher: Box<dyn PageFetcher>,
}

impl Crawler {
    /// Create a crawler with the production HTTP fetcher.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.crawler)?;
        Ok(Self {
            config,
            fetcher: Box::new(fetcher),
        })
    }

    /// Create a crawler with a custom fetch collaborator.
    pub fn with_fetcher(config: Config, fetcher: Box<dyn PageFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Run one crawl to completion.
    ///
    /// Fails fast on an invalid start URL; every per-page failure after
    /// that is recovered locally and the run continues until the frontier
    /// empties or the page budget is hit.
    pub async fn run(
        &self,
        start_url: &str,
        strategy: StrategyKind,
        keywords: &[String],
    ) -> Result<CrawlReport> {
        let start = parse_start_url(start_url)?;
        let base_domain = utils::authority(&start)
            .ok_or_else(|| AppError::config(format!("Start URL has no host: {start_url}")))?;

        let scorer = if strategy.is_scored() {
            Some(RelevanceScorer::new(keywords)?)
        } else {
            None
        };

        let started_at = Utc::now();
        let max_pages = self.config.crawler.max_pages;
        let delay = Duration::from_millis(self.config.crawler.request_delay_ms);

        let mut frontier = strategy.build();
        let mut scores: HashMap<String, u64> = HashMap::new();
        let mut pages_visited = 0usize;
        let mut links_discovered = 0usize;
        let mut fetch_failures = 0usize;

        log::info!("Starting {strategy} crawl of {start} (domain: {base_domain})");

        frontier.offer(start.to_string(), EntryMeta::root());

        while let Some((url, meta)) = frontier.next() {
            if max_pages > 0 && pages_visited >= max_pages {
                log::info!("Page budget of {max_pages} reached, stopping");
                break;
            }

            // Pop-time re-check: the same URL can be enqueued from two
            // different parents before either copy is dispatched.
            if !frontier.mark_visited(&url) {
                continue;
            }
            pages_visited += 1;

            let page = match self.fetcher.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    log::warn!("Fetch failed for {url}: {e}");
                    fetch_failures += 1;
                    continue;
                }
            };

            if !page.is_success() {
                log::warn!("Skipping {url}: HTTP {}", page.status);
                fetch_failures += 1;
                continue;
            }

            // Canonical URLs re-parse; anything that doesn't is a dead end.
            let Ok(base) = Url::parse(&url) else {
                continue;
            };

            let (candidates, score) =
                process_page(&page.body, &base, &base_domain, scorer.as_ref());
            links_discovered += candidates.len();
            log::debug!("{url}: {} in-scope links", candidates.len());

            if let Some(score) = score {
                scores.insert(url.clone(), score);
                if score == 0 {
                    // Fish-search branch cutting: a zero-relevance page
                    // contributes no children.
                    log::debug!("Pruning subtree of zero-relevance page {url}");
                    continue;
                }
            }

            let child_meta = EntryMeta {
                depth: meta.depth + 1,
                score: score.unwrap_or(0),
            };
            for link in candidates {
                frontier.offer(link, child_meta);
            }

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        let mut visited: Vec<String> = frontier.into_visited().into_iter().collect();
        visited.sort();

        let stats = CrawlStats {
            started_at,
            finished_at: Utc::now(),
            pages_visited,
            links_discovered,
            fetch_failures,
        };
        log::info!(
            "Crawl complete: {} pages visited, {} failures",
            stats.pages_visited,
            stats.fetch_failures
        );

        Ok(CrawlReport {
            start_url: start.to_string(),
            strategy: strategy.to_string(),
            visited,
            scores: scorer
                .is_some()
                .then(|| scores.into_iter().collect::<BTreeMap<_, _>>()),
            stats,
        })
    }
}

/// Parse, extract, and (for the priority strategy) score one fetched body.
///
/// The parsed DOM stays inside this call and never crosses an await point.
fn process_page(
    body: &str,
    base: &Url,
    base_domain: &str,
    scorer: Option<&RelevanceScorer>,
) -> (BTreeSet<String>, Option<u64>) {
    let doc = PageDocument::parse(body);
    let links = extract_links(&doc, base, base_domain);
    let score = scorer.map(|s| s.score(&doc, base.as_str()));
    (links, score)
}

/// Validate the start URL. Invalid input here is a fatal configuration
/// error, not a crawl-time error.
fn parse_start_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::config(format!("Invalid start URL '{raw}': {e}")))?;
    if !utils::is_http_scheme(&url) {
        return Err(AppError::config(format!(
            "Start URL must be http or https: {raw}"
        )));
    }
    Ok(url)
}
