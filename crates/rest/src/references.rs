//! Citation parsing.
//!
//! Cross-references are stored as free-text citations of the form
//! `"<Book> <Chapter>:<Verse>"`. Book names may contain spaces
//! (`"1 John 1:1"`): the chapter is whatever follows the last space before
//! the colon.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A parsed `"<Book> <Chapter>:<Verse>"` citation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Citation {
    /// Book name, exactly as written.
    pub book: String,
    /// Chapter number.
    pub chapter: i64,
    /// Verse number.
    pub verse: i64,
}

/// Why a citation could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CitationError {
    /// The citation does not contain exactly one `:`.
    #[error("expected exactly one ':' separating chapter and verse")]
    MissingColon,

    /// The verse segment is not an integer.
    #[error("invalid verse number '{0}'")]
    InvalidVerse(String),

    /// No space separates the book name from the chapter.
    #[error("missing chapter number")]
    MissingChapter,

    /// The chapter segment is not an integer.
    #[error("invalid chapter number '{0}'")]
    InvalidChapter(String),
}

impl Citation {
    /// Parses a citation.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbum_rest::references::{Citation, CitationError};
    ///
    /// let citation = Citation::parse("1 John 1:9").unwrap();
    /// assert_eq!(citation.book, "1 John");
    /// assert_eq!((citation.chapter, citation.verse), (1, 9));
    ///
    /// assert_eq!(Citation::parse("John 1"), Err(CitationError::MissingColon));
    /// ```
    pub fn parse(input: &str) -> Result<Self, CitationError> {
        let mut segments = input.split(':');
        let (Some(book_chapter), Some(verse), None) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(CitationError::MissingColon);
        };

        let verse =
            parse_number(verse).ok_or_else(|| CitationError::InvalidVerse(verse.to_string()))?;

        let (book, chapter) = book_chapter
            .rsplit_once(' ')
            .ok_or(CitationError::MissingChapter)?;

        let chapter = parse_number(chapter)
            .ok_or_else(|| CitationError::InvalidChapter(chapter.to_string()))?;

        Ok(Citation {
            book: book.to_string(),
            chapter,
            verse,
        })
    }
}

/// Parses an unsigned decimal integer, tolerating surrounding whitespace.
fn parse_number(segment: &str) -> Option<i64> {
    let digits = segment.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromStr for Citation {
    type Err = CitationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Citation::parse(s)
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}
