//! Domain types served by the API.
//!
//! Field names match the JSON wire shape stored in the `books` and `verses`
//! collections, so documents deserialize directly into these types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Collection holding [`Book`] documents.
pub const BOOKS_COLLECTION: &str = "books";

/// Collection holding [`Verse`] documents.
pub const VERSES_COLLECTION: &str = "verses";

/// A supported text language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (also the canonical language for book names).
    English,
    /// Hindi.
    Hindi,
    /// Hebrew.
    Hebrew,
    /// Greek.
    Greek,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Hebrew,
        Language::Greek,
    ];

    /// Returns the language code used as a map key.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Hebrew => "hebrew",
            Language::Greek => "greek",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Parses a language code. Codes are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| format!("unsupported language '{}'", s))
    }
}

/// A book of scripture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier (e.g., `gen`).
    pub id: String,
    /// Display name keyed by language code.
    pub name: BTreeMap<String, String>,
    /// Testament code (`old`, `new`). Other codes are kept as stored.
    pub testament: String,
    /// Number of chapters.
    pub chapters: u32,
}

impl Book {
    /// Returns the English name, used as the book key on verses.
    pub fn english_name(&self) -> Option<&str> {
        self.name.get(Language::English.code()).map(String::as_str)
    }
}

/// A single verse with parallel-language text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Unique identifier, conventionally `<book>-<chapter>-<verse>`.
    pub id: String,
    /// English name of the book.
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number within the chapter.
    pub verse: u32,
    /// Body text keyed by language code.
    pub text: BTreeMap<String, String>,
    /// Romanized text keyed by language code.
    #[serde(default)]
    pub transliteration: BTreeMap<String, String>,
    /// Citations of related verses (`"<Book> <Chapter>:<Verse>"`).
    #[serde(default)]
    pub cross_references: Vec<String>,
    /// Free text keyed by note category (e.g., `commentary`).
    #[serde(default)]
    pub notes: BTreeMap<String, String>,
}

/// A page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matching verses for the requested page.
    pub verses: Vec<Verse>,
    /// Number of matches ignoring limit and offset.
    pub total_count: u64,
}

/// A verse together with the verses it cites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferences {
    /// The requested verse.
    pub original_verse: Verse,
    /// Resolved citations, in citation order.
    pub cross_references: Vec<Verse>,
}
