//! Integration tests for the scripture API routes.
//!
//! Every test runs against an in-memory store seeded with the built-in
//! sample data.

mod common;

use axum::http::StatusCode;
use common::{RestTestHarness, verse_ids};
use serde_json::{Value, json};
use verbum_persistence::DocumentStore;
use verbum_rest::ServerConfig;
use verbum_rest::handlers::ROOT_MESSAGE;

// ============================================================================
// Root
// ============================================================================

#[tokio::test]
async fn test_root_with_trailing_slash() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": ROOT_MESSAGE }));
}

#[tokio::test]
async fn test_root_without_trailing_slash() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], ROOT_MESSAGE);
}

// ============================================================================
// Books
// ============================================================================

#[tokio::test]
async fn test_list_books() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/books").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let books = body.as_array().expect("books array");
    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["id"], "gen");
    assert_eq!(books[0]["name"]["english"], "Genesis");
    assert_eq!(books[0]["testament"], "old");
    assert_eq!(books[0]["chapters"], 50);
    assert!(books.iter().all(|b| b.get("_id").is_none()));
}

#[tokio::test]
async fn test_list_books_empty_store() {
    let harness = RestTestHarness::empty();

    let response = harness.get("/api/books").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_books_with_unlisted_testament() {
    let harness = RestTestHarness::seeded().await;
    harness
        .store
        .insert_many(
            "books",
            vec![json!({
                "id": "tob",
                "name": {"english": "Tobit"},
                "testament": "deuterocanonical",
                "chapters": 14
            })],
        )
        .await
        .unwrap();

    let response = harness.get("/api/books").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().map(Vec::len), Some(4));
    assert_eq!(body[3]["testament"], "deuterocanonical");
}

#[tokio::test]
async fn test_chapter_in_order() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/books/Genesis/chapters/1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(verse_ids(&body), vec!["gen-1-1", "gen-1-2"]);
}

#[tokio::test]
async fn test_chapter_with_no_verses() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/books/Genesis/chapters/99").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_chapter_unknown_book() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/books/Revelation/chapters/1").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_chapter_book_name_is_case_sensitive() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/books/genesis/chapters/1").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_chapter_non_integer_is_bad_request() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/books/Genesis/chapters/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}

// ============================================================================
// Verses
// ============================================================================

#[tokio::test]
async fn test_get_verse() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/verses/psa-23-1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], "psa-23-1");
    assert_eq!(body["book"], "Psalms");
    assert_eq!(body["chapter"], 23);
    assert_eq!(body["verse"], 1);
    assert_eq!(body["text"]["english"], "The Lord is my shepherd; I shall not want.");
    assert!(body["transliteration"].is_object());
    assert!(body["notes"].is_object());
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn test_get_verse_not_found() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/verses/rev-1-1").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "detail": "Verse not found" }));
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_english() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "beginning")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(verse_ids(&body["verses"]), vec!["gen-1-1", "joh-1-1"]);
    assert_eq!(body["total_count"], 2);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "SHEPHERD")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(verse_ids(&body["verses"]), vec!["psa-23-1"]);
}

#[tokio::test]
async fn test_search_other_language() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "λόγος"), ("language", "greek")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(verse_ids(&body["verses"]), vec!["joh-1-1"]);
    assert_eq!(body["total_count"], 1);
}

#[tokio::test]
async fn test_search_no_match() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "zzzz")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "verses": [], "total_count": 0 }));
}

#[tokio::test]
async fn test_search_total_count_ignores_paging() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "the"), ("limit", "1"), ("offset", "1")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["verses"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["total_count"], 4);
    assert_eq!(verse_ids(&body["verses"]), vec!["joh-1-1"]);
}

#[tokio::test]
async fn test_search_offset_past_end() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "the"), ("offset", "10")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "verses": [], "total_count": 4 }));
}

#[tokio::test]
async fn test_search_by_book() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "God"), ("book", "Genesis")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(verse_ids(&body["verses"]), vec!["gen-1-1", "gen-1-2"]);
}

#[tokio::test]
async fn test_search_by_testament() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "the"), ("testament", "old")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        verse_ids(&body["verses"]),
        vec!["gen-1-1", "psa-23-1", "gen-1-2"]
    );
    assert_eq!(body["total_count"], 3);
}

#[tokio::test]
async fn test_search_testament_overrides_book() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query(
            "/api/search",
            &[("q", "beginning"), ("book", "Genesis"), ("testament", "new")],
        )
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(verse_ids(&body["verses"]), vec!["joh-1-1"]);
}

#[tokio::test]
async fn test_search_unsupported_language_ignores_query() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "zzzz"), ("language", "latin")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total_count"], 4);
}

#[tokio::test]
async fn test_search_limit_is_capped() {
    let config = ServerConfig {
        max_page_size: 2,
        ..ServerConfig::for_testing()
    };
    let harness = RestTestHarness::seeded_with_config(config).await;

    let response = harness
        .get_with_query("/api/search", &[("q", "the"), ("limit", "500")])
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["verses"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["total_count"], 4);
}

#[tokio::test]
async fn test_search_missing_query_is_bad_request() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/search").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_search_non_integer_limit_is_bad_request() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "God"), ("limit", "abc")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_negative_offset_is_bad_request() {
    let harness = RestTestHarness::seeded().await;

    let response = harness
        .get_with_query("/api/search", &[("q", "God"), ("offset", "-1")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// Cross-references
// ============================================================================

#[tokio::test]
async fn test_cross_references_resolves_known_verses() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/cross-references/gen-1-1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["original_verse"]["id"], "gen-1-1");
    assert_eq!(verse_ids(&body["cross_references"]), vec!["joh-1-1"]);
}

#[tokio::test]
async fn test_cross_references_skips_unknown_books() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/cross-references/joh-1-1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(verse_ids(&body["cross_references"]), vec!["gen-1-1"]);
}

#[tokio::test]
async fn test_cross_references_none_resolvable() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/cross-references/psa-23-1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["cross_references"], json!([]));
}

#[tokio::test]
async fn test_cross_references_not_found() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/cross-references/rev-1-1").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "detail": "Verse not found" }));
}

// ============================================================================
// Daily verse
// ============================================================================

#[tokio::test]
async fn test_daily_verse() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/api/daily-verse").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let id = body["id"].as_str().expect("verse id");
    assert!(["gen-1-1", "joh-1-1", "psa-23-1", "gen-1-2"].contains(&id));
}

#[tokio::test]
async fn test_daily_verse_empty_store() {
    let harness = RestTestHarness::empty();

    let response = harness.get("/api/daily-verse").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}

// ============================================================================
// Operational endpoints
// ============================================================================

#[tokio::test]
async fn test_health() {
    let harness = RestTestHarness::seeded().await;

    let response = harness.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "memory");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_liveness() {
    let harness = RestTestHarness::empty();

    harness.get("/_liveness").await.assert_status_ok();
}

#[tokio::test]
async fn test_readiness() {
    let harness = RestTestHarness::empty();

    let response = harness.get("/_readiness").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["storage"], "ok");
}

#[tokio::test]
async fn test_operational_routes_are_not_prefixed() {
    let harness = RestTestHarness::seeded().await;

    harness.get("/api/health").await.assert_status_not_found();
}

// ============================================================================
// Configuration
// ============================================================================

#[tokio::test]
async fn test_custom_prefix() {
    let config = ServerConfig {
        api_prefix: "/v1/".to_string(),
        ..ServerConfig::for_testing()
    };
    let harness = RestTestHarness::seeded_with_config(config).await;

    harness.get("/v1/verses/gen-1-1").await.assert_status_ok();
    harness.get("/v1").await.assert_status_ok();
    harness.get("/api/verses/gen-1-1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_unknown_route() {
    let harness = RestTestHarness::seeded().await;

    harness.get("/api/psalms").await.assert_status_not_found();
}
