// tests/support/helpers.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use routedoc::domain::book::BookStore;
use routedoc::infrastructure::InMemoryBookStore;
use routedoc::presentation::http::{routes::build_router, swagger::SwaggerConfig};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const WRITER_TOKEN: &str = "u1;o1;READER,WRITER";
pub const READER_TOKEN: &str = "u2;o1;READER";

pub fn swagger_config() -> SwaggerConfig {
    SwaggerConfig {
        name: "Books service".into(),
        version: "0.0.1".into(),
        description: "Books service description".into(),
        host: "localhost:3000".into(),
        base_path: "/".into(),
    }
}

pub fn make_book_router() -> axum::Router {
    let store: Arc<dyn BookStore> = Arc::new(InMemoryBookStore::new());
    build_router(store, &swagger_config()).expect("book routes register")
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-auth", token);
    }
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

pub async fn send(app: &axum::Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "response is not JSON ({err}): {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

pub async fn expect_status(resp: Response, expected: StatusCode) -> Vec<u8> {
    let status = resp.status();
    let bytes = body_bytes(resp).await;
    assert_eq!(
        status,
        expected,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&bytes)
    );
    bytes
}
