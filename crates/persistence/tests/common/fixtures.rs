//! Test fixtures for persistence layer testing.
//!
//! A handful of book and verse documents shaped like the ones the scripture
//! service stores.

use serde_json::{Value, json};

/// Book documents in insertion order.
pub fn books() -> Vec<Value> {
    vec![
        json!({"id": "gen", "name": {"english": "Genesis"}, "testament": "old", "chapters": 50}),
        json!({"id": "joh", "name": {"english": "John"}, "testament": "new", "chapters": 21}),
        json!({"id": "psa", "name": {"english": "Psalms"}, "testament": "old", "chapters": 150}),
    ]
}

/// Verse documents in insertion order.
pub fn verses() -> Vec<Value> {
    vec![
        verse("gen-1-1", "Genesis", 1, 1, "In the beginning God created the heaven and the earth."),
        verse("joh-1-1", "John", 1, 1, "In the beginning was the Word."),
        verse("psa-23-1", "Psalms", 23, 1, "The LORD is my shepherd; I shall not want."),
        verse("gen-1-2", "Genesis", 1, 2, "And the earth was without form, and void."),
    ]
}

fn verse(id: &str, book: &str, chapter: u32, verse: u32, english: &str) -> Value {
    json!({
        "id": id,
        "book": book,
        "chapter": chapter,
        "verse": verse,
        "text": {"english": english},
        "cross_references": [],
        "active": true
    })
}

/// Extracts the `id` field of each document.
pub fn ids(documents: &[Value]) -> Vec<String> {
    documents
        .iter()
        .filter_map(|d| d.get("id").and_then(Value::as_str))
        .map(String::from)
        .collect()
}
