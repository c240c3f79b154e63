// src/presentation/http/swagger/mod.rs
pub mod registry;
pub mod transform;
pub mod types;

pub use registry::{DocumentRegistry, definition_ref};
pub use types::{
    Info, Operation, Parameter, ParameterLocation, PathItem, Response, SwaggerConfig,
    SwaggerDocument,
};

pub const SWAGGER_VERSION: &str = "2.0";
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Assemble the full document from the registry's current contents.
///
/// Safe to call at any time; each call reflects what has been registered so far.
pub fn generate_document(registry: &DocumentRegistry, config: &SwaggerConfig) -> SwaggerDocument {
    SwaggerDocument {
        swagger: SWAGGER_VERSION.into(),
        info: Info {
            version: config.version.clone(),
            title: config.name.clone(),
            description: config.description.clone(),
        },
        host: config.host.clone(),
        base_path: config.base_path.clone(),
        schemes: vec!["http".into()],
        consumes: vec![JSON_MEDIA_TYPE.into()],
        produces: vec![JSON_MEDIA_TYPE.into()],
        paths: registry.paths().clone(),
        definitions: registry.definitions().clone(),
    }
}
