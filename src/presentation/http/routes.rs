// src/presentation/http/routes.rs
use crate::domain::book::BookStore;
use crate::presentation::http::{
    controllers::books,
    docs::{docs_router, redirect_to_ui},
    error::RegistrationResult,
    registrar::Registrar,
    swagger::SwaggerConfig,
};
use axum::{Router, http::Method, routing::get};
use std::{sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Registrar with every application endpoint declared.
pub fn build_registrar(store: Arc<dyn BookStore>) -> RegistrationResult<Registrar> {
    let mut registrar = Registrar::with_router(Router::new());
    books::register_book_routes(&mut registrar, store)?;
    Ok(registrar)
}

pub fn build_router(store: Arc<dyn BookStore>, swagger: &SwaggerConfig) -> RegistrationResult<Router> {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let registrar = build_registrar(store)?;
    let document = registrar.generate_document(swagger);

    Ok(registrar
        .into_router()?
        .merge(docs_router(document))
        .route("/", get(redirect_to_ui))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
