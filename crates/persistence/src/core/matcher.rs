//! Text matching capability.
//!
//! Free-text search is expressed as a [`TextMatcher`] owned by the store,
//! so the filter contract stays the same whether matching is a plain
//! substring scan, a regular expression, or a future full-text index.

use std::fmt::Debug;

use parking_lot::Mutex;
use regex::{Regex, RegexBuilder};

/// Decides whether a stored text field matches a free-text query.
pub trait TextMatcher: Debug + Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Returns true if `text` matches `query`.
    fn matches(&self, text: &str, query: &str) -> bool;
}

/// Case-insensitive substring matching.
///
/// An empty query matches every text.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl TextMatcher for SubstringMatcher {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn matches(&self, text: &str, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        text.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Case-insensitive regular expression matching.
///
/// Queries that are not valid patterns are matched literally. Only the
/// most recently compiled pattern is cached.
#[derive(Debug, Default)]
pub struct RegexMatcher {
    cache: Mutex<Option<(String, Option<Regex>)>>,
}

impl RegexMatcher {
    /// Creates a matcher with an empty pattern cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn compile(query: &str) -> Option<Regex> {
        RegexBuilder::new(query)
            .case_insensitive(true)
            .build()
            .or_else(|_| {
                RegexBuilder::new(&regex::escape(query))
                    .case_insensitive(true)
                    .build()
            })
            .ok()
    }

    fn is_match(regex: Option<&Regex>, text: &str, query: &str) -> bool {
        match regex {
            Some(regex) => regex.is_match(text),
            None => SubstringMatcher.matches(text, query),
        }
    }
}

impl TextMatcher for RegexMatcher {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn matches(&self, text: &str, query: &str) -> bool {
        let mut cache = self.cache.lock();
        if let Some((cached, regex)) = cache.as_ref() {
            if cached == query {
                return Self::is_match(regex.as_ref(), text, query);
            }
        }
        let regex = Self::compile(query);
        let matched = Self::is_match(regex.as_ref(), text, query);
        *cache = Some((query.to_string(), regex));
        matched
    }
}

/// Text matching strategy selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMatchMode {
    /// [`SubstringMatcher`]
    #[default]
    Substring,
    /// [`RegexMatcher`]
    Regex,
}

impl TextMatchMode {
    /// Builds the matcher for this mode.
    pub fn matcher(self) -> std::sync::Arc<dyn TextMatcher> {
        match self {
            TextMatchMode::Substring => std::sync::Arc::new(SubstringMatcher),
            TextMatchMode::Regex => std::sync::Arc::new(RegexMatcher::new()),
        }
    }
}

impl std::str::FromStr for TextMatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(TextMatchMode::Substring),
            "regex" => Ok(TextMatchMode::Regex),
            other => Err(format!(
                "unknown text match mode '{}' (expected substring or regex)",
                other
            )),
        }
    }
}

impl std::fmt::Display for TextMatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextMatchMode::Substring => write!(f, "substring"),
            TextMatchMode::Regex => write!(f, "regex"),
        }
    }
}
