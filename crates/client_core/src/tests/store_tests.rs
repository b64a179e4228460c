use super::*;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use shared::error::{ApiError, ErrorCode};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Recorded {
    List,
    Insert(BookFields),
    Update(String, BookFields),
    Delete(String),
}

#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

async fn spawn_catalog_server() -> (String, Arc<Mutex<Vec<Recorded>>>) {
    let state = ServerState::default();
    let requests = state.requests.clone();
    let app = Router::new()
        .route(
            "/books/",
            get(|State(state): State<ServerState>| async move {
                state.requests.lock().await.push(Recorded::List);
                Json(serde_json::json!([
                    { "id": 1, "title": "Dune", "author": "Herbert" },
                    { "id": 2, "title": "Emma", "author": "Austen" }
                ]))
            }),
        )
        .route(
            "/books/insertItem",
            post(
                |State(state): State<ServerState>, Json(fields): Json<BookFields>| async move {
                    state
                        .requests
                        .lock()
                        .await
                        .push(Recorded::Insert(fields.clone()));
                    Json(BookRecord {
                        id: BookId::Numeric(3),
                        title: fields.title,
                        author: fields.author,
                    })
                },
            ),
        )
        .route(
            "/books/updateItem/:id",
            put(
                |State(state): State<ServerState>,
                 Path(id): Path<String>,
                 Json(fields): Json<BookFields>| async move {
                    state
                        .requests
                        .lock()
                        .await
                        .push(Recorded::Update(id, fields));
                    StatusCode::OK
                },
            ),
        )
        .route(
            "/books/deleteItem/:id",
            delete(
                |State(state): State<ServerState>, Path(id): Path<String>| async move {
                    if id == "404" {
                        return (
                            StatusCode::NOT_FOUND,
                            Json(ApiError::new(ErrorCode::NotFound, "no such book")),
                        )
                            .into_response();
                    }
                    state.requests.lock().await.push(Recorded::Delete(id));
                    StatusCode::NO_CONTENT.into_response()
                },
            ),
        )
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/books/"), requests)
}

#[tokio::test]
async fn list_decodes_records_in_server_order() {
    let (base_url, requests) = spawn_catalog_server().await;
    let store = HttpBookStore::new(base_url);

    let books = store.list().await.expect("list");
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, BookId::Numeric(1));
    assert_eq!(books[1].title, "Emma");
    assert_eq!(*requests.lock().await, vec![Recorded::List]);
}

#[tokio::test]
async fn create_posts_fields_and_returns_assigned_record() {
    let (base_url, requests) = spawn_catalog_server().await;
    let store = HttpBookStore::new(base_url);

    let record = store
        .create(&BookFields::new("Solaris", "Lem"))
        .await
        .expect("create");
    assert_eq!(record.id, BookId::Numeric(3));
    assert_eq!(
        *requests.lock().await,
        vec![Recorded::Insert(BookFields::new("Solaris", "Lem"))]
    );
}

#[tokio::test]
async fn update_and_delete_address_record_by_id() {
    let (base_url, requests) = spawn_catalog_server().await;
    let store = HttpBookStore::new(base_url);

    store
        .update(&BookId::Numeric(1), &BookFields::new("Dune Messiah", "Herbert"))
        .await
        .expect("update");
    store
        .delete(&BookId::Text("abc".to_string()))
        .await
        .expect("delete");

    assert_eq!(
        *requests.lock().await,
        vec![
            Recorded::Update("1".to_string(), BookFields::new("Dune Messiah", "Herbert")),
            Recorded::Delete("abc".to_string()),
        ]
    );
}

#[tokio::test]
async fn error_status_becomes_transport_error_with_api_message() {
    let (base_url, requests) = spawn_catalog_server().await;
    let store = HttpBookStore::new(base_url);

    let err = store
        .delete(&BookId::Numeric(404))
        .await
        .expect_err("must fail");
    assert_eq!(err.op, StoreOp::Delete);
    assert!(err.message.contains("404"), "{err}");
    assert!(err.message.contains("no such book"), "{err}");
    assert!(requests.lock().await.is_empty());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let store = HttpBookStore::new(format!("http://{addr}"));
    let err = store.list().await.expect_err("must fail");
    assert_eq!(err.op, StoreOp::List);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let store = HttpBookStore::new("http://localhost:3000/books/");
    assert_eq!(store.api_base_url(), "http://localhost:3000/books");
}

#[test]
fn error_body_with_unknown_code_falls_back_to_status() {
    let body = r#"{"code":"internal","message":"database down"}"#;
    let err = TransportError::from_status(
        StoreOp::Update,
        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        body,
    );
    assert_eq!(err.op, StoreOp::Update);
    assert_eq!(err.message, "server returned 500 Internal Server Error");

    let body = r#"{"code":"not_found","message":"no such book"}"#;
    let err = TransportError::from_status(StoreOp::Update, reqwest::StatusCode::NOT_FOUND, body);
    assert_eq!(
        err.message,
        "server returned 404 Not Found: NotFound: no such book"
    );
}
