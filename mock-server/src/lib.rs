//! Generic REST resource store, the backend the sync client targets.
//!
//! # Design
//! Rows are untyped JSON objects grouped into named tables; any table name
//! works, and a table springs into existence on first write. The server
//! owns three fields on every row: `id` (sequential per table),
//! `created_at` and `updated_at` (RFC 3339 UTC). Updates merge the request
//! body into the stored row; fields the client does not send keep their
//! current values, and the server-owned fields cannot be overwritten.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

type Row = Map<String, Value>;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Row>,
}

type Db = Arc<RwLock<HashMap<String, Table>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/{table}", get(list_rows).post(create_row))
        .route("/{table}/{id}", axum::routing::put(update_row).delete(delete_row))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Merge `changes` into `row`, skipping the server-owned fields.
fn apply_changes(row: &mut Row, changes: Row) {
    for (key, value) in changes {
        if key == "id" || key == "created_at" || key == "updated_at" {
            continue;
        }
        row.insert(key, value);
    }
    row.insert("updated_at".to_string(), json!(Utc::now()));
}

async fn list_rows(State(db): State<Db>, Path(table): Path<String>) -> Json<Vec<Value>> {
    let db = db.read().await;
    let rows = db
        .get(&table)
        .map(|t| t.rows.values().cloned().map(Value::Object).collect())
        .unwrap_or_default();
    Json(rows)
}

async fn create_row(
    State(db): State<Db>,
    Path(table): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let Value::Object(mut row) = body else {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    };
    let mut db = db.write().await;
    let table = db.entry(table).or_default();
    table.next_id += 1;
    let id = table.next_id;
    let now = json!(Utc::now());
    row.insert("id".to_string(), json!(id));
    row.insert("created_at".to_string(), now.clone());
    row.insert("updated_at".to_string(), now);
    table.rows.insert(id, row.clone());
    tracing::debug!(id, "row created");
    Ok((StatusCode::CREATED, Json(Value::Object(row))))
}

async fn update_row(
    State(db): State<Db>,
    Path((table, id)): Path<(String, i64)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let Value::Object(changes) = body else {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    };
    let mut db = db.write().await;
    let row = db
        .get_mut(&table)
        .and_then(|t| t.rows.get_mut(&id))
        .ok_or(StatusCode::NOT_FOUND)?;
    apply_changes(row, changes);
    Ok(Json(Value::Object(row.clone())))
}

async fn delete_row(
    State(db): State<Db>,
    Path((table, id)): Path<(String, i64)>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    db.get_mut(&table)
        .and_then(|t| t.rows.remove(&id))
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn apply_changes_merges_new_and_existing_fields() {
        let mut stored = row(&[
            ("title", json!("Walk dog")),
            ("completed", json!(false)),
        ]);
        apply_changes(&mut stored, row(&[("completed", json!(true))]));
        assert_eq!(stored["title"], "Walk dog");
        assert_eq!(stored["completed"], true);
    }

    #[test]
    fn apply_changes_refuses_server_owned_fields() {
        let mut stored = row(&[
            ("id", json!(1)),
            ("created_at", json!("2025-01-15T10:30:00Z")),
            ("title", json!("Walk dog")),
        ]);
        apply_changes(
            &mut stored,
            row(&[
                ("id", json!(999)),
                ("created_at", json!("1970-01-01T00:00:00Z")),
                ("title", json!("Walk cat")),
            ]),
        );
        assert_eq!(stored["id"], 1);
        assert_eq!(stored["created_at"], "2025-01-15T10:30:00Z");
        assert_eq!(stored["title"], "Walk cat");
    }

    #[test]
    fn apply_changes_bumps_updated_at() {
        let mut stored = row(&[("updated_at", json!("2025-01-15T10:30:00Z"))]);
        apply_changes(&mut stored, Row::new());
        assert_ne!(stored["updated_at"], "2025-01-15T10:30:00Z");
    }
}
