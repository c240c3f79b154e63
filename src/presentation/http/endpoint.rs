// src/presentation/http/endpoint.rs
//! Declarative description of one endpoint.
//!
//! A declaration is written once per handler and feeds both the documentation
//! entry and the router binding. Builder methods keep call sites short:
//!
//! ```
//! use routedoc::presentation::http::endpoint::{BodyParameter, EndpointDeclaration, UrlParameter};
//!
//! let decl = EndpointDeclaration::new("/books/{book_id}")
//!     .description("Update a book")
//!     .tag("Books")
//!     .auth("x-auth")
//!     .parameter(UrlParameter::new("book_id", "Book id"))
//!     .body(BodyParameter::new("update", "New book").required(true).schema_ref("#/definitions/Book"))
//!     .success("#/definitions/Book");
//! assert_eq!(decl.path, "/books/{book_id}");
//! ```
use axum::routing::MethodFilter;
use serde_json::{Value, json};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Key used for this method inside a documentation path item.
    pub const fn doc_key(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }

    pub(crate) const fn filter(self) -> MethodFilter {
        match self {
            Self::Get => MethodFilter::GET,
            Self::Post => MethodFilter::POST,
            Self::Put => MethodFilter::PUT,
            Self::Delete => MethodFilter::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParameter {
    pub name: String,
    pub description: String,
    pub kind: Option<String>,
}

impl UrlParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: None,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyParameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub kind: String,
    pub schema: Option<Value>,
    pub items: Option<Value>,
}

impl BodyParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            kind: "object".into(),
            schema: None,
            items: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Shorthand for a `{"$ref": reference}` schema.
    pub fn schema_ref(self, reference: impl Into<String>) -> Self {
        self.schema(json!({ "$ref": reference.into() }))
    }

    pub fn items(mut self, items: Value) -> Self {
        self.items = Some(items);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryField {
    pub name: String,
    pub kind: String,
    pub required: Option<bool>,
    pub items: Option<Value>,
}

impl QueryField {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            required: None,
            items: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn items(mut self, items: Value) -> Self {
        self.items = Some(items);
        self
    }
}

/// Group of query-string fields delivered to the handler as one argument.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryGroup {
    pub name: String,
    pub description: String,
    pub items: Vec<QueryField>,
}

impl QueryGroup {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
        }
    }

    pub fn field(mut self, field: QueryField) -> Self {
        self.items.push(field);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EndpointDeclaration {
    /// Path template; placeholders may be written `{name}` or `:name`.
    pub path: String,
    /// Name of the header carrying the identity token.
    pub auth: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub operation_id: Option<String>,
    pub parameters: Option<Vec<UrlParameter>>,
    pub query: Option<QueryGroup>,
    pub body: Option<BodyParameter>,
    /// Schema reference for the 200 response, e.g. `#/definitions/Book`.
    pub success: Option<String>,
}

impl EndpointDeclaration {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn auth(mut self, header: impl Into<String>) -> Self {
        self.auth = Some(header.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    pub fn parameter(mut self, parameter: UrlParameter) -> Self {
        self.parameters.get_or_insert_with(Vec::new).push(parameter);
        self
    }

    pub fn query(mut self, query: QueryGroup) -> Self {
        self.query = Some(query);
        self
    }

    pub fn body(mut self, body: BodyParameter) -> Self {
        self.body = Some(body);
        self
    }

    pub fn success(mut self, reference: impl Into<String>) -> Self {
        self.success = Some(reference.into());
        self
    }
}
