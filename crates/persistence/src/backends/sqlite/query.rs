//! Compiles [`Filter`]s into SQL over the JSON `data` column.

use rusqlite::types::Value as SqlValue;
use serde_json::Value;

use crate::types::{Condition, Filter};

/// Name of the SQL function backed by the store's text matcher.
pub(crate) const TEXT_MATCH_FN: &str = "text_matches";

/// A WHERE clause with its positional parameters.
#[derive(Debug, Default)]
pub(crate) struct WhereClause {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// Builds `collection = ? AND <conditions>` for a collection and filter.
pub(crate) fn build_where(collection: &str, filter: &Filter) -> WhereClause {
    let mut clause = WhereClause {
        sql: "collection = ?".to_string(),
        params: vec![SqlValue::Text(collection.to_string())],
    };

    for (field, condition) in filter.clauses() {
        let path = json_path(field);
        clause.sql.push_str(" AND ");
        match condition {
            Condition::Eq(value) => push_eq(&mut clause, &path, value),
            Condition::In(values) if values.is_empty() => clause.sql.push('0'),
            Condition::In(values) => {
                clause.sql.push('(');
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        clause.sql.push_str(" OR ");
                    }
                    push_eq(&mut clause, &path, value);
                }
                clause.sql.push(')');
            }
            Condition::Matches(query) => {
                clause.sql.push_str(&format!(
                    "(json_type(data, ?) = 'text' AND {}(json_extract(data, ?), ?))",
                    TEXT_MATCH_FN
                ));
                clause.params.push(SqlValue::Text(path.clone()));
                clause.params.push(SqlValue::Text(path));
                clause.params.push(SqlValue::Text(query.clone()));
            }
        }
    }

    clause
}

fn json_path(field: &str) -> String {
    format!("$.{}", field)
}

fn push_eq(clause: &mut WhereClause, path: &str, value: &Value) {
    match value {
        Value::Null => {
            clause.sql.push_str("json_type(data, ?) = 'null'");
            clause.params.push(SqlValue::Text(path.to_string()));
        }
        Value::Bool(b) => {
            clause
                .sql
                .push_str("json_type(data, ?) = ?");
            clause.params.push(SqlValue::Text(path.to_string()));
            clause
                .params
                .push(SqlValue::Text(if *b { "true" } else { "false" }.to_string()));
        }
        Value::Number(n) => {
            clause.sql.push_str("json_extract(data, ?) = ?");
            clause.params.push(SqlValue::Text(path.to_string()));
            clause.params.push(match n.as_i64() {
                Some(i) => SqlValue::Integer(i),
                None => SqlValue::Real(n.as_f64().unwrap_or(f64::NAN)),
            });
        }
        Value::String(s) => {
            clause
                .sql
                .push_str("(json_type(data, ?) = 'text' AND json_extract(data, ?) = ?)");
            clause.params.push(SqlValue::Text(path.to_string()));
            clause.params.push(SqlValue::Text(path.to_string()));
            clause.params.push(SqlValue::Text(s.clone()));
        }
        Value::Array(_) | Value::Object(_) => {
            clause.sql.push_str("json_extract(data, ?) = json(?)");
            clause.params.push(SqlValue::Text(path.to_string()));
            clause.params.push(SqlValue::Text(value.to_string()));
        }
    }
}

/// Converts a count or offset to an SQLite integer, saturating.
pub(crate) fn to_sql_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
