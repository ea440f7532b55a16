//! Behavioral checks every [`DocumentStore`] backend must pass.
//!
//! Backend test files call each check with a freshly created store.

use serde_json::json;

use verbum_persistence::core::DocumentStore;
use verbum_persistence::types::{Filter, FindOptions, Projection, SURROGATE_KEY};

use super::fixtures::{books, ids, verses};

/// Loads the book and verse fixtures.
pub async fn seed(store: &dyn DocumentStore) {
    assert_eq!(store.insert_many("books", books()).await.unwrap(), 3);
    assert_eq!(store.insert_many("verses", verses()).await.unwrap(), 4);
}

pub async fn check_native_order(store: &dyn DocumentStore) {
    seed(store).await;
    let docs = store
        .find("verses", &Filter::new(), &FindOptions::new())
        .await
        .unwrap();
    assert_eq!(ids(&docs), vec!["gen-1-1", "joh-1-1", "psa-23-1", "gen-1-2"]);
}

pub async fn check_equality_filters(store: &dyn DocumentStore) {
    seed(store).await;

    let filter = Filter::new().eq("book", "Genesis").eq("chapter", 1);
    let docs = store
        .find("verses", &filter, &FindOptions::new())
        .await
        .unwrap();
    assert_eq!(ids(&docs), vec!["gen-1-1", "gen-1-2"]);

    let filter = Filter::new().eq("active", true).eq("verse", 2);
    assert_eq!(store.count("verses", &filter).await.unwrap(), 1);

    let filter = Filter::new().eq("name.english", "John");
    let book = store
        .find_one("books", &filter, &Projection::All)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(book["id"], "joh");
}

pub async fn check_membership_filters(store: &dyn DocumentStore) {
    seed(store).await;

    let filter = Filter::new().one_of("book", ["Genesis", "Psalms"]);
    let docs = store
        .find("verses", &filter, &FindOptions::new())
        .await
        .unwrap();
    assert_eq!(ids(&docs), vec!["gen-1-1", "psa-23-1", "gen-1-2"]);

    let empty: Vec<String> = Vec::new();
    let filter = Filter::new().one_of("book", empty);
    assert_eq!(store.count("verses", &filter).await.unwrap(), 0);
}

pub async fn check_last_condition_wins(store: &dyn DocumentStore) {
    seed(store).await;

    let filter = Filter::new()
        .eq("book", "John")
        .one_of("book", ["Psalms"]);
    let docs = store
        .find("verses", &filter, &FindOptions::new())
        .await
        .unwrap();
    assert_eq!(ids(&docs), vec!["psa-23-1"]);
}

pub async fn check_text_matching(store: &dyn DocumentStore) {
    seed(store).await;

    let filter = Filter::new().matches_text("text.english", "the BEGINNING");
    assert_eq!(store.count("verses", &filter).await.unwrap(), 2);

    let filter = Filter::new().matches_text("text.hindi", "beginning");
    assert_eq!(store.count("verses", &filter).await.unwrap(), 0);

    let filter = Filter::new().matches_text("chapter", "1");
    assert_eq!(store.count("verses", &filter).await.unwrap(), 0);
}

pub async fn check_pagination(store: &dyn DocumentStore) {
    seed(store).await;

    let options = FindOptions::new().skip(1).limit(2);
    let docs = store
        .find("verses", &Filter::new(), &options)
        .await
        .unwrap();
    assert_eq!(ids(&docs), vec!["joh-1-1", "psa-23-1"]);

    let options = FindOptions::new().skip(100).limit(2);
    let docs = store
        .find("verses", &Filter::new(), &options)
        .await
        .unwrap();
    assert!(docs.is_empty());

    let options = FindOptions::new().limit(0);
    let docs = store
        .find("verses", &Filter::new(), &options)
        .await
        .unwrap();
    assert!(docs.is_empty());

    // Counts ignore pagination.
    assert_eq!(store.count("verses", &Filter::new()).await.unwrap(), 4);
}

pub async fn check_projection(store: &dyn DocumentStore) {
    seed(store).await;

    let docs = store
        .find("books", &Filter::new(), &FindOptions::new())
        .await
        .unwrap();
    assert!(docs.iter().all(|d| d.get(SURROGATE_KEY).is_some()));

    let options = FindOptions::new().projection(Projection::without_surrogate_key());
    let docs = store.find("books", &Filter::new(), &options).await.unwrap();
    assert_eq!(docs[0], books()[0]);

    let options = FindOptions::new().projection(Projection::include(["name.english"]));
    let docs = store
        .find("books", &Filter::new().eq("testament", "old"), &options)
        .await
        .unwrap();
    assert_eq!(
        docs,
        vec![
            json!({"name": {"english": "Genesis"}}),
            json!({"name": {"english": "Psalms"}}),
        ]
    );
}

pub async fn check_sampling(store: &dyn DocumentStore) {
    assert!(store
        .sample("verses", 1, &Projection::All)
        .await
        .unwrap()
        .is_empty());

    seed(store).await;

    let all = ids(&verses());
    for _ in 0..10 {
        let docs = store
            .sample("verses", 1, &Projection::without_surrogate_key())
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert!(all.contains(&ids(&docs)[0]));
        assert!(docs[0].get(SURROGATE_KEY).is_none());
    }

    let docs = store.sample("verses", 10, &Projection::All).await.unwrap();
    assert_eq!(docs.len(), 4);
}

pub async fn check_find_one_miss(store: &dyn DocumentStore) {
    seed(store).await;
    let filter = Filter::new().eq("id", "rev-1-1");
    assert!(store
        .find_one("verses", &filter, &Projection::All)
        .await
        .unwrap()
        .is_none());
}
