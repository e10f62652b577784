//! Relevance scoring for the priority (fish-search) strategy.

use regex::Regex;

use crate::error::{AppError, Result};
use crate::services::PageDocument;

/// Scores fetched pages against a fixed keyword set.
///
/// With no keywords the score is the page's anchor count, a proxy for how
/// much of a hub it is. With keywords it is the number of case-insensitive
/// whole-word occurrences in the visible text, plus 2 for every keyword
/// that appears anywhere in the URL string. Scoring is a pure function of
/// the document and URL.
pub struct RelevanceScorer {
    keywords: Vec<String>,
    word_patterns: Vec<Regex>,
}

impl RelevanceScorer {
    /// Compile word-boundary patterns for the keyword set.
    pub fn new(keywords: &[String]) -> Result<Self> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        let word_patterns = keywords
            .iter()
            .map(|keyword| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
                Regex::new(&pattern)
                    .map_err(|e| AppError::config(format!("Invalid keyword '{keyword}': {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            keywords,
            word_patterns,
        })
    }

    /// Whether any keywords were supplied.
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// Score one fetched page.
    pub fn score(&self, doc: &PageDocument, url: &str) -> u64 {
        if self.keywords.is_empty() {
            return doc.anchor_count() as u64;
        }

        let text = doc.visible_text();
        let url_lower = url.to_lowercase();

        let mut total = 0u64;
        for (keyword, pattern) in self.keywords.iter().zip(&self.word_patterns) {
            total += pattern.find_iter(&text).count() as u64;
            if url_lower.contains(&keyword.to_lowercase()) {
                total += 2;
            }
        }
        total
    }
}
