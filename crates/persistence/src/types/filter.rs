//! Document filters.
//!
//! A [`Filter`] is a conjunction of per-field clauses. Fields are addressed
//! by dotted paths (`text.english`, `name.english`). Each field holds at
//! most one clause: setting a clause for a field that already has one
//! replaces it.

use serde_json::Value;

use crate::core::TextMatcher;

/// A condition applied to a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The field equals the value.
    Eq(Value),
    /// The field equals one of the values. An empty set matches nothing.
    In(Vec<Value>),
    /// The field is a string accepted by the store's text matcher.
    Matches(String),
}

impl Condition {
    /// Evaluates the condition against a field value (`None` if absent).
    pub fn evaluate(&self, field: Option<&Value>, matcher: &dyn TextMatcher) -> bool {
        match (self, field) {
            (Condition::Eq(expected), Some(actual)) => actual == expected,
            (Condition::In(values), Some(actual)) => values.iter().any(|v| v == actual),
            (Condition::Matches(query), Some(Value::String(text))) => {
                matcher.matches(text, query)
            }
            _ => false,
        }
    }
}

/// A conjunction of field conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, Condition)>,
}

impl Filter {
    /// Creates an empty filter, which matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the condition for `field`, replacing any existing one.
    pub fn set(&mut self, field: impl Into<String>, condition: Condition) {
        let field = field.into();
        match self.clauses.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = condition,
            None => self.clauses.push((field, condition)),
        }
    }

    /// Builder form of [`Filter::set`] with [`Condition::Eq`].
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, Condition::Eq(value.into()));
        self
    }

    /// Builder form of [`Filter::set`] with [`Condition::In`].
    pub fn one_of<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set(
            field,
            Condition::In(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Builder form of [`Filter::set`] with [`Condition::Matches`].
    pub fn matches_text(mut self, field: impl Into<String>, query: impl Into<String>) -> Self {
        self.set(field, Condition::Matches(query.into()));
        self
    }

    /// Returns the condition set for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&Condition> {
        self.clauses
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, c)| c)
    }

    /// Iterates over `(field, condition)` pairs in insertion order.
    pub fn clauses(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.clauses.iter().map(|(f, c)| (f.as_str(), c))
    }

    /// Returns true if the filter has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns the number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Evaluates the filter against a whole document.
    pub fn evaluate(&self, document: &Value, matcher: &dyn TextMatcher) -> bool {
        self.clauses
            .iter()
            .all(|(field, condition)| condition.evaluate(lookup_path(document, field), matcher))
    }
}

/// Resolves a dotted path inside a JSON document.
pub fn lookup_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |current, segment| current.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SubstringMatcher;
    use serde_json::json;

    fn verse() -> Value {
        json!({
            "id": "gen-1-1",
            "book": "Genesis",
            "chapter": 1,
            "verse": 1,
            "text": {"english": "In the beginning God created the heavens and the earth."}
        })
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(Filter::new().evaluate(&verse(), &SubstringMatcher));
        assert!(Filter::new().is_empty());
    }

    #[test]
    fn test_eq_on_string_and_number() {
        let filter = Filter::new().eq("book", "Genesis").eq("chapter", 1);
        assert!(filter.evaluate(&verse(), &SubstringMatcher));

        let filter = Filter::new().eq("book", "Genesis").eq("chapter", 2);
        assert!(!filter.evaluate(&verse(), &SubstringMatcher));
    }

    #[test]
    fn test_in_condition() {
        let filter = Filter::new().one_of("book", ["John", "Genesis"]);
        assert!(filter.evaluate(&verse(), &SubstringMatcher));

        let empty: Vec<String> = Vec::new();
        let filter = Filter::new().one_of("book", empty);
        assert!(!filter.evaluate(&verse(), &SubstringMatcher));
    }

    #[test]
    fn test_matches_on_nested_path() {
        let filter = Filter::new().matches_text("text.english", "BEGINNING");
        assert!(filter.evaluate(&verse(), &SubstringMatcher));

        let filter = Filter::new().matches_text("text.hindi", "beginning");
        assert!(!filter.evaluate(&verse(), &SubstringMatcher));
    }

    #[test]
    fn test_matches_requires_string_field() {
        let filter = Filter::new().matches_text("chapter", "1");
        assert!(!filter.evaluate(&verse(), &SubstringMatcher));
    }

    #[test]
    fn test_set_replaces_existing_clause() {
        let filter = Filter::new()
            .eq("book", "Exodus")
            .one_of("book", ["Genesis"]);
        assert_eq!(filter.len(), 1);
        assert_eq!(
            filter.get("book"),
            Some(&Condition::In(vec![json!("Genesis")]))
        );
        assert!(filter.evaluate(&verse(), &SubstringMatcher));
    }

    #[test]
    fn test_lookup_path() {
        let doc = verse();
        assert_eq!(lookup_path(&doc, "text.english").and_then(Value::as_str).map(|s| &s[..2]), Some("In"));
        assert!(lookup_path(&doc, "text.greek").is_none());
        assert!(lookup_path(&doc, "chapter.inner").is_none());
    }
}
