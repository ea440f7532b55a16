//! Find options: projection and skip/limit pagination.

use serde_json::{Map, Value};

use super::filter::lookup_path;

/// Field name of the store-generated surrogate key.
pub const SURROGATE_KEY: &str = "_id";

/// Selects which fields of a document are returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Projection {
    /// Return documents unchanged.
    #[default]
    All,
    /// Remove the listed (dotted) paths.
    Exclude(Vec<String>),
    /// Keep only the listed (dotted) paths.
    Include(Vec<String>),
}

impl Projection {
    /// Projection that hides the surrogate key.
    pub fn without_surrogate_key() -> Self {
        Projection::Exclude(vec![SURROGATE_KEY.to_string()])
    }

    /// Projection that keeps only the given paths.
    pub fn include<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::Include(paths.into_iter().map(Into::into).collect())
    }

    /// Applies the projection to a document.
    pub fn apply(&self, document: Value) -> Value {
        match self {
            Projection::All => document,
            Projection::Exclude(paths) => {
                let mut document = document;
                for path in paths {
                    remove_path(&mut document, path);
                }
                document
            }
            Projection::Include(paths) => {
                let mut out = Value::Object(Map::new());
                for path in paths {
                    if let Some(value) = lookup_path(&document, path) {
                        insert_path(&mut out, path, value.clone());
                    }
                }
                out
            }
        }
    }
}

fn remove_path(document: &mut Value, path: &str) {
    match path.rsplit_once('.') {
        None => {
            if let Some(obj) = document.as_object_mut() {
                obj.remove(path);
            }
        }
        Some((parent, leaf)) => {
            let parent = parent
                .split('.')
                .try_fold(document, |current, segment| current.get_mut(segment));
            if let Some(obj) = parent.and_then(Value::as_object_mut) {
                obj.remove(leaf);
            }
        }
    }
}

fn insert_path(target: &mut Value, path: &str, value: Value) {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((leaf, parents)) = segments.split_last() else {
        return;
    };
    let mut current = target;
    for segment in parents {
        let Some(obj) = current.as_object_mut() else {
            return;
        };
        current = obj
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Some(obj) = current.as_object_mut() {
        obj.insert(leaf.to_string(), value);
    }
}

/// Options for a find operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Number of matching documents to skip.
    pub skip: usize,
    /// Maximum number of documents to return (`None` = unbounded).
    pub limit: Option<usize>,
    /// Fields to return.
    pub projection: Projection,
}

impl FindOptions {
    /// Creates options with no skip, no limit and no projection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of documents to skip.
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the maximum number of documents to return.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the projection.
    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }
}
