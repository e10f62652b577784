// src/frontier/mod.rs

//! Traversal frontiers for the crawler.
//!
//! A frontier owns the visited set and the ordering structure that decides
//! which discovered URL is dispatched next:
//! - `PreorderFrontier`: pre-order depth-first descent (recursive semantics
//!   on an explicit stack)
//! - `FifoFrontier`: breadth-first, level order
//! - `LifoFrontier`: depth-first, most recent discovery first
//! - `PriorityFrontier`: fish-search, highest relevance first

mod fifo;
mod lifo;
mod preorder;
mod priority;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub use fifo::FifoFrontier;
pub use lifo::LifoFrontier;
pub use preorder::PreorderFrontier;
pub use priority::PriorityFrontier;

use crate::error::AppError;

/// Ordering metadata attached to a queued URL.
///
/// `score` is the relevance score of the page that discovered the URL; it is
/// only meaningful to the priority frontier. The start URL enters with the
/// unscored placeholder of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryMeta {
    /// Link distance from the start URL
    pub depth: usize,

    /// Relevance score of the discovering page
    pub score: u64,
}

impl EntryMeta {
    /// Metadata for the start URL before its own fetch.
    pub fn root() -> Self {
        Self::default()
    }
}

/// Common capability surface of all traversal strategies.
///
/// The frontier owns the visited set for the run. `mark_visited` is the
/// check-and-set the driver calls at dispatch time; `offer` admits a
/// candidate only while it is unvisited. Duplicate queue entries are
/// possible (the same URL can be discovered from two parents before either
/// is dispatched), which is why the driver re-checks at pop time.
pub trait Frontier {
    /// Whether any URL is still awaiting dispatch.
    fn is_empty(&self) -> bool;

    /// Record a URL as dispatched. Returns `false` if it already was.
    fn mark_visited(&mut self, url: &str) -> bool;

    /// Admit a candidate URL if it has not been dispatched yet.
    fn offer(&mut self, url: String, meta: EntryMeta);

    /// Remove and return the next URL to dispatch.
    fn next(&mut self) -> Option<(String, EntryMeta)>;

    /// URLs dispatched so far.
    fn visited(&self) -> &HashSet<String>;

    /// Consume the frontier, returning the accumulated visited set.
    fn into_visited(self: Box<Self>) -> HashSet<String>;
}

/// Selectable traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Pre-order depth-first descent, children in document order
    Recursive,
    /// Breadth-first (queue)
    Bfs,
    /// Depth-first (stack)
    Dfs,
    /// Relevance-guided priority search (fish-search)
    Priority,
}

impl StrategyKind {
    /// Build an empty frontier for this strategy.
    pub fn build(&self) -> Box<dyn Frontier> {
        match self {
            StrategyKind::Recursive => Box::new(PreorderFrontier::new()),
            StrategyKind::Bfs => Box::new(FifoFrontier::new()),
            StrategyKind::Dfs => Box::new(LifoFrontier::new()),
            StrategyKind::Priority => Box::new(PriorityFrontier::new()),
        }
    }

    /// Whether this strategy scores pages and prunes zero-relevance subtrees.
    pub fn is_scored(&self) -> bool {
        matches!(self, StrategyKind::Priority)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Recursive => "recursive",
            StrategyKind::Bfs => "bfs",
            StrategyKind::Dfs => "dfs",
            StrategyKind::Priority => "priority",
        };
        f.write_str(name)
    }
}

impl FromStr for StrategyKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recursive" => Ok(StrategyKind::Recursive),
            "bfs" => Ok(StrategyKind::Bfs),
            "dfs" => Ok(StrategyKind::Dfs),
            "priority" | "fish" => Ok(StrategyKind::Priority),
            other => Err(AppError::config(format!(
                "Unknown strategy '{other}' (expected recursive, bfs, dfs, or priority)"
            ))),
        }
    }
}
