//! Search filter construction.
//!
//! Translates search parameters into a store [`Filter`] over the `verses`
//! collection. A testament constraint requires one lookup against `books`
//! to find the English names of the books in that testament.

use serde_json::Value;
use tracing::debug;
use verbum_persistence::core::DocumentStore;
use verbum_persistence::error::StorageResult;
use verbum_persistence::types::{Filter, FindOptions, Projection, lookup_path};

use crate::models::{BOOKS_COLLECTION, Language};

/// Maximum number of books read when resolving a testament.
const TESTAMENT_LOOKUP_LIMIT: usize = 100;

/// Builds the filter for a verse search.
///
/// # Example
///
/// ```rust,ignore
/// let filter = SearchQueryBuilder::new("shepherd")
///     .language("english")
///     .testament(Some("old"))
///     .build(store)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct SearchQueryBuilder<'a> {
    query: &'a str,
    language: &'a str,
    book: Option<&'a str>,
    testament: Option<&'a str>,
}

impl<'a> SearchQueryBuilder<'a> {
    /// Creates a builder for a free-text query in English.
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            language: Language::English.code(),
            book: None,
            testament: None,
        }
    }

    /// Sets the language whose text is searched.
    ///
    /// Unsupported languages add no text constraint.
    pub fn language(mut self, language: &'a str) -> Self {
        self.language = language;
        self
    }

    /// Restricts results to one book (by English name).
    pub fn book(mut self, book: Option<&'a str>) -> Self {
        self.book = book;
        self
    }

    /// Restricts results to books of a testament. Overrides [`book`](Self::book).
    pub fn testament(mut self, testament: Option<&'a str>) -> Self {
        self.testament = testament;
        self
    }

    /// Builds the filter, looking up testament books when needed.
    pub async fn build<S>(&self, store: &S) -> StorageResult<Filter>
    where
        S: DocumentStore + ?Sized,
    {
        let mut filter = Filter::new();

        match self.language.parse::<Language>() {
            Ok(language) => {
                filter = filter.matches_text(format!("text.{}", language.code()), self.query);
            }
            Err(_) => {
                debug!(language = %self.language, "Unsupported language, no text constraint");
            }
        }

        if let Some(book) = self.book {
            filter = filter.eq("book", book);
        }

        if let Some(testament) = self.testament {
            let names = testament_book_names(store, testament).await?;
            debug!(testament = %testament, books = ?names, "Resolved testament books");
            // Replaces any book constraint set above.
            filter = filter.one_of("book", names);
        }

        Ok(filter)
    }
}

/// Returns the English names of the books in a testament.
///
/// An unknown testament yields an empty list.
pub async fn testament_book_names<S>(store: &S, testament: &str) -> StorageResult<Vec<String>>
where
    S: DocumentStore + ?Sized,
{
    let name_path = "name.english";
    let options = FindOptions::new()
        .limit(TESTAMENT_LOOKUP_LIMIT)
        .projection(Projection::include([name_path]));

    let books = store
        .find(
            BOOKS_COLLECTION,
            &Filter::new().eq("testament", testament),
            &options,
        )
        .await?;

    Ok(books
        .iter()
        .filter_map(|book| lookup_path(book, name_path).and_then(Value::as_str))
        .map(String::from)
        .collect())
}
