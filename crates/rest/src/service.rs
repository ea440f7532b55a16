//! Retrieval service.
//!
//! [`ScriptureService`] implements every read the API offers on top of a
//! [`DocumentStore`]. Handlers are thin wrappers around these methods.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use verbum_persistence::core::DocumentStore;
use verbum_persistence::types::{Filter, FindOptions, Projection};

use crate::error::{RestError, RestResult};
use crate::models::{
    BOOKS_COLLECTION, Book, CrossReferences, Language, SearchResult, VERSES_COLLECTION, Verse,
};
use crate::query::SearchQueryBuilder;
use crate::references::{Citation, CitationError};

/// Maximum number of books returned by [`ScriptureService::list_books`].
const BOOK_LIST_LIMIT: usize = 100;

/// Maximum number of verses returned by [`ScriptureService::get_chapter`].
const CHAPTER_LIMIT: usize = 1000;

/// Page size limits applied to searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Limit used when a search does not specify one.
    pub default_page_size: usize,
    /// Largest limit a search may request.
    pub max_page_size: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 1000,
        }
    }
}

/// Parameters of a verse search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Free-text query.
    pub q: String,
    /// Language whose text is searched.
    #[serde(default = "default_language")]
    pub language: String,
    /// Restrict to one book (English name).
    pub book: Option<String>,
    /// Restrict to a testament (`old`, `new`). Overrides `book`.
    pub testament: Option<String>,
    /// Maximum number of verses to return.
    pub limit: Option<usize>,
    /// Number of matching verses to skip.
    pub offset: Option<usize>,
}

fn default_language() -> String {
    Language::English.code().to_string()
}

impl SearchRequest {
    /// Creates a request for `q` with every other parameter defaulted.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            language: default_language(),
            book: None,
            testament: None,
            limit: None,
            offset: None,
        }
    }
}

/// Outcome of resolving one cross-reference citation.
#[derive(Debug, Clone, PartialEq)]
pub enum CrossReferenceOutcome {
    /// The citation names an existing verse.
    Resolved(Verse),
    /// The citation was dropped.
    Skipped {
        /// The citation as stored.
        citation: String,
        /// Why it was dropped.
        reason: SkipReason,
    },
}

/// Why a cross-reference was not resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The citation could not be parsed.
    Unparseable(CitationError),
    /// No verse matches the parsed citation.
    Unresolved,
}

/// Read operations over books and verses.
pub struct ScriptureService<S> {
    store: Arc<S>,
    limits: PageLimits,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for ScriptureService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            limits: self.limits,
        }
    }
}

/// Deserializes a stored document.
fn decode<T: DeserializeOwned>(collection: &str, document: Value) -> RestResult<T> {
    serde_json::from_value(document).map_err(|e| RestError::InternalError {
        message: format!("malformed document in '{}': {}", collection, e),
    })
}

fn decode_all<T: DeserializeOwned>(collection: &str, documents: Vec<Value>) -> RestResult<Vec<T>> {
    documents
        .into_iter()
        .map(|document| decode(collection, document))
        .collect()
}

impl<S: DocumentStore> ScriptureService<S> {
    /// Creates a service over `store`.
    pub fn new(store: Arc<S>, limits: PageLimits) -> Self {
        Self { store, limits }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the page limits applied to searches.
    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    /// Lists all books in stored order.
    pub async fn list_books(&self) -> RestResult<Vec<Book>> {
        let options = FindOptions::new()
            .limit(BOOK_LIST_LIMIT)
            .projection(Projection::without_surrogate_key());
        let documents = self
            .store
            .find(BOOKS_COLLECTION, &Filter::new(), &options)
            .await?;
        decode_all(BOOKS_COLLECTION, documents)
    }

    /// Returns the verses of one chapter of a book, in stored order.
    ///
    /// An unknown book or chapter yields an empty list.
    pub async fn get_chapter(&self, book_name: &str, chapter: i64) -> RestResult<Vec<Verse>> {
        let filter = Filter::new().eq("book", book_name).eq("chapter", chapter);
        let options = FindOptions::new()
            .limit(CHAPTER_LIMIT)
            .projection(Projection::without_surrogate_key());
        let documents = self
            .store
            .find(VERSES_COLLECTION, &filter, &options)
            .await?;
        decode_all(VERSES_COLLECTION, documents)
    }

    /// Returns the verse with the given identifier.
    pub async fn get_verse(&self, verse_id: &str) -> RestResult<Verse> {
        self.find_verse(Filter::new().eq("id", verse_id))
            .await?
            .ok_or_else(|| RestError::verse_not_found(verse_id))
    }

    /// Searches verses.
    ///
    /// `total_count` counts every match regardless of `limit` and `offset`.
    pub async fn search(&self, request: &SearchRequest) -> RestResult<SearchResult> {
        let filter = SearchQueryBuilder::new(&request.q)
            .language(&request.language)
            .book(request.book.as_deref())
            .testament(request.testament.as_deref())
            .build(self.store.as_ref())
            .await?;

        let limit = request
            .limit
            .unwrap_or(self.limits.default_page_size)
            .min(self.limits.max_page_size);
        let offset = request.offset.unwrap_or(0);

        let total_count = self.store.count(VERSES_COLLECTION, &filter).await?;

        let options = FindOptions::new()
            .skip(offset)
            .limit(limit)
            .projection(Projection::without_surrogate_key());
        let documents = self
            .store
            .find(VERSES_COLLECTION, &filter, &options)
            .await?;

        Ok(SearchResult {
            verses: decode_all(VERSES_COLLECTION, documents)?,
            total_count,
        })
    }

    /// Returns a verse and the verses its cross-references cite.
    ///
    /// Citations that cannot be parsed or resolved are omitted.
    pub async fn get_cross_references(&self, verse_id: &str) -> RestResult<CrossReferences> {
        let original_verse = self.get_verse(verse_id).await?;

        let cross_references = self
            .resolve_cross_references(&original_verse)
            .await?
            .into_iter()
            .filter_map(|outcome| match outcome {
                CrossReferenceOutcome::Resolved(verse) => Some(verse),
                CrossReferenceOutcome::Skipped { citation, reason } => {
                    debug!(
                        verse_id = %verse_id,
                        citation = %citation,
                        reason = ?reason,
                        "Skipping cross-reference"
                    );
                    None
                }
            })
            .collect();

        Ok(CrossReferences {
            original_verse,
            cross_references,
        })
    }

    /// Resolves each citation of `verse`, in citation order.
    pub async fn resolve_cross_references(
        &self,
        verse: &Verse,
    ) -> RestResult<Vec<CrossReferenceOutcome>> {
        let mut outcomes = Vec::with_capacity(verse.cross_references.len());

        for reference in &verse.cross_references {
            let outcome = match Citation::parse(reference) {
                Err(e) => CrossReferenceOutcome::Skipped {
                    citation: reference.clone(),
                    reason: SkipReason::Unparseable(e),
                },
                Ok(citation) => match self.find_cited_verse(&citation).await? {
                    Some(verse) => CrossReferenceOutcome::Resolved(verse),
                    None => CrossReferenceOutcome::Skipped {
                        citation: reference.clone(),
                        reason: SkipReason::Unresolved,
                    },
                },
            };
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Returns a uniformly random verse.
    ///
    /// Falls back to the first stored verse if sampling returns nothing.
    pub async fn get_daily_verse(&self) -> RestResult<Verse> {
        let projection = Projection::without_surrogate_key();

        let sampled = self
            .store
            .sample(VERSES_COLLECTION, 1, &projection)
            .await?
            .into_iter()
            .next();

        let document = match sampled {
            Some(document) => Some(document),
            None => {
                self.store
                    .find_one(VERSES_COLLECTION, &Filter::new(), &projection)
                    .await?
            }
        };

        match document {
            Some(document) => decode(VERSES_COLLECTION, document),
            None => Err(RestError::NotFound {
                resource: "Verse".to_string(),
                id: None,
            }),
        }
    }

    /// Checks that the store is reachable.
    pub async fn health(&self) -> RestResult<()> {
        self.store
            .health_check()
            .await
            .map_err(|e| RestError::ServiceUnavailable {
                message: e.to_string(),
            })
    }

    async fn find_cited_verse(&self, citation: &Citation) -> RestResult<Option<Verse>> {
        let filter = Filter::new()
            .eq("book", citation.book.as_str())
            .eq("chapter", citation.chapter)
            .eq("verse", citation.verse);
        self.find_verse(filter).await
    }

    async fn find_verse(&self, filter: Filter) -> RestResult<Option<Verse>> {
        self.store
            .find_one(
                VERSES_COLLECTION,
                &filter,
                &Projection::without_surrogate_key(),
            )
            .await?
            .map(|document| decode(VERSES_COLLECTION, document))
            .transpose()
    }
}
