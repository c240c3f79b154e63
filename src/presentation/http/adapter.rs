// src/presentation/http/adapter.rs
//! Transport adapter: bridges an incoming request to an endpoint handler and
//! maps the handler's outcome back to an HTTP response.
use crate::application::{HandlerError, HandlerResult};
use crate::domain::context::{ContextError, IdentityContext};
use crate::presentation::http::endpoint::HttpMethod;
use axum::{
    Json,
    body::{self, Body},
    extract::{FromRequestParts, Path, Request},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::{future::Future, pin::Pin, sync::Arc};

/// Largest request body accepted by the adapter.
pub const BODY_LIMIT: usize = 1024 * 1024;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Argument bag handed to a handler: path parameters, the query group and the
/// body, merged by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Decode an argument. Missing and `null` arguments yield `None`; values
    /// that do not decode are answered with 400.
    pub fn decode<T: DeserializeOwned>(&self, name: &str) -> HandlerResult<Option<T>> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|err| HandlerError::bad_request(format!("invalid `{name}`: {err}"))),
        }
    }
}

pub trait EndpointHandler: Send + Sync + 'static {
    fn call(&self, args: Arguments, context: Option<IdentityContext>) -> BoxFuture<HandlerResult>;
}

impl<F, Fut> EndpointHandler for F
where
    F: Fn(Arguments, Option<IdentityContext>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    fn call(&self, args: Arguments, context: Option<IdentityContext>) -> BoxFuture<HandlerResult> {
        Box::pin(self(args, context))
    }
}

/// Which request sources feed the argument bag.
#[derive(Debug, Clone, Default)]
pub(crate) struct ArgumentBinding {
    /// Declared placeholder names in path order; `None` leaves path values out.
    pub path_params: Option<Vec<String>>,
    pub query: Option<String>,
    pub body: Option<String>,
    pub auth_header: Option<String>,
}

#[derive(Clone)]
pub(crate) struct TransportAdapter {
    inner: Arc<AdapterInner>,
}

struct AdapterInner {
    operation: String,
    method: HttpMethod,
    router_path: String,
    binding: ArgumentBinding,
    handler: Arc<dyn EndpointHandler>,
}

impl TransportAdapter {
    pub(crate) fn new(
        operation: String,
        method: HttpMethod,
        router_path: String,
        binding: ArgumentBinding,
        handler: Arc<dyn EndpointHandler>,
    ) -> Self {
        Self {
            inner: Arc::new(AdapterInner {
                operation,
                method,
                router_path,
                binding,
                handler,
            }),
        }
    }

    pub(crate) async fn handle(self, request: Request) -> Response {
        let inner = &self.inner;
        let (mut parts, body) = request.into_parts();
        let mut args = Arguments::new();

        if let Some(names) = &inner.binding.path_params {
            // The bound route may spell its placeholders differently from this
            // declaration, so values are matched by position.
            match Path::<Vec<(String, String)>>::from_request_parts(&mut parts, &()).await {
                Ok(Path(params)) => {
                    for (name, (_, value)) in names.iter().zip(params) {
                        args.insert(name.as_str(), Value::String(value));
                    }
                }
                Err(rejection) => return rejection.into_response(),
            }
        }

        if let Some(name) = &inner.binding.query {
            match parse_urlencoded(parts.uri.query().unwrap_or_default()) {
                Ok(query) => args.insert(name.as_str(), query),
                Err(err) => return err.into_response(),
            }
        }

        if let Some(name) = &inner.binding.body {
            match read_body(&parts.headers, body).await {
                Ok(value) => args.insert(name.as_str(), value),
                Err(err) => return err.into_response(),
            }
        }

        let context = match &inner.binding.auth_header {
            Some(header_name) => match extract_context(&parts.headers, header_name) {
                Ok(context) => Some(context),
                Err(err) => {
                    tracing::warn!(
                        operation = %inner.operation,
                        error = %err,
                        "identity context extraction failed"
                    );
                    return HandlerError::internal(err.to_string()).into_response();
                }
            },
            None => None,
        };

        tracing::info!(
            operation = %inner.operation,
            method = %inner.method,
            path = %inner.router_path,
            args = ?args,
            context = ?context,
            "dispatching request"
        );

        match inner.handler.call(args, context).await {
            Ok(Value::Null) if inner.method == HttpMethod::Get => {
                StatusCode::NOT_FOUND.into_response()
            }
            Ok(Value::Null) => StatusCode::OK.into_response(),
            Ok(value) => Json(value).into_response(),
            Err(err) => {
                let status = err.status_code();
                if status.is_server_error() {
                    tracing::error!(operation = %inner.operation, error = %err, "handler failed");
                } else {
                    tracing::warn!(operation = %inner.operation, error = %err, "handler rejected request");
                }
                err.into_response()
            }
        }
    }
}

fn extract_context(headers: &HeaderMap, header_name: &str) -> Result<IdentityContext, ContextError> {
    let raw = headers
        .get(header_name)
        .ok_or_else(|| ContextError::MissingHeader(header_name.to_string()))?;
    let token = raw
        .to_str()
        .map_err(|err| ContextError::Malformed(err.to_string()))?;
    IdentityContext::from_token(token)
}

/// Parse a urlencoded string into a JSON object. Repeated keys collect into
/// an array.
fn parse_urlencoded(input: &str) -> HandlerResult<Value> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(input)
        .map_err(|err| HandlerError::bad_request(format!("invalid urlencoded data: {err}")))?;

    let mut map = Map::new();
    for (key, value) in pairs {
        let value = Value::String(value);
        match map.get_mut(&key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(key, value);
            }
        }
    }
    Ok(Value::Object(map))
}

async fn read_body(headers: &HeaderMap, body: Body) -> HandlerResult<Value> {
    let bytes = body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|err| HandlerError::bad_request(format!("failed to read request body: {err}")))?;

    if bytes.is_empty() {
        return Ok(Value::Null);
    }

    let is_form = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        let text = std::str::from_utf8(&bytes)
            .map_err(|err| HandlerError::bad_request(format!("invalid form body: {err}")))?;
        parse_urlencoded(text)
    } else {
        serde_json::from_slice(&bytes)
            .map_err(|err| HandlerError::bad_request(format!("invalid JSON body: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn repeated_query_keys_become_arrays() {
        let value = parse_urlencoded("limit=10&tag=a&tag=b&tag=c").unwrap();
        assert_eq!(value, json!({ "limit": "10", "tag": ["a", "b", "c"] }));
        assert_eq!(parse_urlencoded("").unwrap(), json!({}));
    }

    #[test]
    fn decode_treats_null_as_absent() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Item {
            id: String,
        }

        let mut args = Arguments::new();
        args.insert("item", json!({ "id": "1" }));
        args.insert("nothing", Value::Null);
        args.insert("broken", json!(5));

        assert_eq!(
            args.decode::<Item>("item").unwrap(),
            Some(Item { id: "1".into() })
        );
        assert_eq!(args.decode::<Item>("nothing").unwrap(), None);
        assert_eq!(args.decode::<Item>("missing").unwrap(), None);
        let err = args.decode::<Item>("broken").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn context_is_read_from_the_named_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-token", HeaderValue::from_static("u1;o1;READER"));
        let ctx = extract_context(&headers, "x-token").unwrap();
        assert_eq!(ctx.roles, vec!["READER"]);
        assert_eq!(
            extract_context(&headers, "x-auth").unwrap_err(),
            ContextError::MissingHeader("x-auth".into())
        );
    }

    #[tokio::test]
    async fn form_bodies_are_parsed_into_objects() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        let value = read_body(&headers, Body::from("id=1&name=Dune")).await.unwrap();
        assert_eq!(value, json!({ "id": "1", "name": "Dune" }));
    }

    #[tokio::test]
    async fn empty_body_is_null_and_bad_json_is_rejected() {
        let headers = HeaderMap::new();
        assert_eq!(read_body(&headers, Body::empty()).await.unwrap(), Value::Null);
        let err = read_body(&headers, Body::from("{not json")).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
