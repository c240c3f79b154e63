// src/presentation/http/docs.rs
use crate::presentation::http::swagger::SwaggerDocument;
use axum::{Json, Router, response::Redirect, routing::get};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa_swagger_ui::{Config, SwaggerUi};

pub const SWAGGER_JSON_PATH: &str = "/swagger.json";
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// Send visitors to the Swagger UI. Bound by the application, since `/` may
/// belong to an endpoint elsewhere.
pub async fn redirect_to_ui() -> Redirect {
    Redirect::permanent(SWAGGER_UI_PATH)
}

/// Serve the generated document and a Swagger UI pointing at it. Only
/// [`SWAGGER_JSON_PATH`] and [`SWAGGER_UI_PATH`] are bound.
pub fn docs_router(document: SwaggerDocument) -> Router {
    let swagger = SwaggerUi::new(SWAGGER_UI_PATH).config(Config::from(SWAGGER_JSON_PATH));

    Router::new()
        .route(
            SWAGGER_JSON_PATH,
            get(move || {
                let document = document.clone();
                async move { Json(document) }
            }),
        )
        .merge(swagger)
}

pub fn write_snapshot(document: &SwaggerDocument, output_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, document)?;
    Ok(())
}
