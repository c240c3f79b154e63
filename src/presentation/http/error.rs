// src/presentation/http/error.rs
use crate::application::HandlerError;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Declaration problems detected while registering endpoints or schemas.
/// These abort startup; they are never produced while serving.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("{method} {path} has been already declared")]
    DuplicateRoute { method: String, path: String },

    #[error("{0} model has been already defined")]
    DuplicateDefinition(String),

    #[error("argument `{name}` of {path} is bound by more than one source")]
    ArgumentCollision { name: String, path: String },

    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("no router has been set on the registrar")]
    RouterNotSet,

    #[error("invalid schema for {name}: {reason}")]
    InvalidSchema { name: String, reason: String },
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[derive(Serialize)]
struct ErrorBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.message_text(),
        };
        (status, Json(body)).into_response()
    }
}
