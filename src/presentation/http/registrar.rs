// src/presentation/http/registrar.rs
//! Endpoint registrar.
//!
//! Each registration records a documentation entry in the owned
//! [`DocumentRegistry`] and binds a transport adapter on the router under
//! the same method and (translated) path.
use crate::application::HandlerResult;
use crate::domain::context::IdentityContext;
use crate::presentation::http::{
    adapter::{ArgumentBinding, Arguments, EndpointHandler, TransportAdapter},
    endpoint::{EndpointDeclaration, HttpMethod},
    error::{RegistrationError, RegistrationResult},
    path::{placeholder_names, route_shape, to_router_path, validate_router_path},
    swagger::{
        DocumentRegistry, Operation, Response, SwaggerConfig, SwaggerDocument, generate_document,
        transform,
    },
};
use axum::{Router, extract::Request, routing::on};
use serde_json::json;
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    future::Future,
    sync::Arc,
};
use utoipa::ToSchema;

#[derive(Default)]
pub struct Registrar {
    registry: DocumentRegistry,
    router: Option<Router>,
    /// Bound (route shape, method) pairs.
    bound: HashSet<(String, HttpMethod)>,
    /// First router path seen for each route shape. Later registrations of
    /// the same shape bind under it so the router never sees two spellings
    /// of one route.
    shapes: HashMap<String, String>,
}

impl Registrar {
    /// Registrar without a router; call [`Registrar::set_router`] before
    /// registering endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_router(router: Router) -> Self {
        let mut registrar = Self::new();
        registrar.set_router(router);
        registrar
    }

    pub fn set_router(&mut self, router: Router) {
        self.router = Some(router);
    }

    pub fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }

    pub fn define_schema(
        &mut self,
        name: impl Into<String>,
        shape: serde_json::Value,
    ) -> RegistrationResult<()> {
        self.registry.define_schema(name, shape)
    }

    pub fn define_schema_for<T: ToSchema>(&mut self) -> RegistrationResult<String> {
        self.registry.define_schema_for::<T>()
    }

    pub fn generate_document(&self, config: &SwaggerConfig) -> SwaggerDocument {
        generate_document(&self.registry, config)
    }

    pub fn get<F, Fut>(
        &mut self,
        declaration: EndpointDeclaration,
        handler: F,
    ) -> RegistrationResult<&mut Self>
    where
        F: Fn(Arguments, Option<IdentityContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register(declaration, HttpMethod::Get, handler)
    }

    pub fn post<F, Fut>(
        &mut self,
        declaration: EndpointDeclaration,
        handler: F,
    ) -> RegistrationResult<&mut Self>
    where
        F: Fn(Arguments, Option<IdentityContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register(declaration, HttpMethod::Post, handler)
    }

    pub fn put<F, Fut>(
        &mut self,
        declaration: EndpointDeclaration,
        handler: F,
    ) -> RegistrationResult<&mut Self>
    where
        F: Fn(Arguments, Option<IdentityContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register(declaration, HttpMethod::Put, handler)
    }

    pub fn delete<F, Fut>(
        &mut self,
        declaration: EndpointDeclaration,
        handler: F,
    ) -> RegistrationResult<&mut Self>
    where
        F: Fn(Arguments, Option<IdentityContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register(declaration, HttpMethod::Delete, handler)
    }

    pub fn register<F, Fut>(
        &mut self,
        declaration: EndpointDeclaration,
        method: HttpMethod,
        handler: F,
    ) -> RegistrationResult<&mut Self>
    where
        F: Fn(Arguments, Option<IdentityContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register_handler(declaration, method, Arc::new(handler))
    }

    /// Register an already type-erased handler.
    pub fn register_handler(
        &mut self,
        declaration: EndpointDeclaration,
        method: HttpMethod,
        handler: Arc<dyn EndpointHandler>,
    ) -> RegistrationResult<&mut Self> {
        let duplicate = || RegistrationError::DuplicateRoute {
            method: method.to_string(),
            path: declaration.path.clone(),
        };

        if self.registry.contains_operation(&declaration.path, method) {
            return Err(duplicate());
        }

        let router_path = to_router_path(&declaration.path);
        validate_router_path(&router_path).map_err(|reason| RegistrationError::InvalidPath {
            path: declaration.path.clone(),
            reason,
        })?;

        let shape = route_shape(&router_path);
        if self.bound.contains(&(shape.clone(), method)) {
            return Err(duplicate());
        }

        check_argument_names(&declaration, &router_path)?;

        if self.router.is_none() {
            return Err(RegistrationError::RouterNotSet);
        }

        self.registry
            .insert_operation(&declaration.path, method, document_operation(&declaration))?;

        let operation = declaration
            .operation_id
            .clone()
            .unwrap_or_else(|| format!("{method} {}", declaration.path));
        let bound_path = self
            .shapes
            .get(&shape)
            .cloned()
            .unwrap_or_else(|| router_path.clone());
        let binding = ArgumentBinding {
            path_params: declaration.parameters.as_ref().map(|_| {
                placeholder_names(&router_path)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            }),
            query: declaration.query.as_ref().map(|q| q.name.clone()),
            body: declaration.body.as_ref().map(|b| b.name.clone()),
            auth_header: declaration.auth.clone(),
        };
        let adapter = TransportAdapter::new(operation, method, bound_path.clone(), binding, handler);

        tracing::debug!(
            method = %method,
            path = %declaration.path,
            router_path = %bound_path,
            "endpoint registered"
        );

        let handler = on(method.filter(), move |request: Request| {
            adapter.clone().handle(request)
        });
        self.router = self
            .router
            .take()
            .map(|router| router.route(&bound_path, handler));
        self.shapes.entry(shape.clone()).or_insert(bound_path);
        self.bound.insert((shape, method));

        Ok(self)
    }

    /// Hand back the router carrying every bound endpoint.
    pub fn into_router(self) -> RegistrationResult<Router> {
        self.router.ok_or(RegistrationError::RouterNotSet)
    }

    pub fn into_parts(self) -> (Option<Router>, DocumentRegistry) {
        (self.router, self.registry)
    }
}

/// Path placeholders, the query group and the body share one argument bag,
/// so their names must not overlap. Placeholders only reach the bag when the
/// declaration lists path parameters.
fn check_argument_names(declaration: &EndpointDeclaration, router_path: &str) -> RegistrationResult<()> {
    let mut seen = HashSet::new();
    let placeholders = if declaration.parameters.is_some() {
        placeholder_names(router_path)
    } else {
        Vec::new()
    };
    let query = declaration.query.as_ref().map(|q| q.name.as_str());
    let body = declaration.body.as_ref().map(|b| b.name.as_str());

    for name in placeholders
        .into_iter()
        .chain(query)
        .chain(body)
    {
        if !seen.insert(name) {
            return Err(RegistrationError::ArgumentCollision {
                name: name.to_string(),
                path: declaration.path.clone(),
            });
        }
    }
    Ok(())
}

fn document_operation(declaration: &EndpointDeclaration) -> Operation {
    let mut parameters = Vec::new();
    if let Some(header) = &declaration.auth {
        parameters.push(transform::auth_header_parameter(header));
    }
    parameters.extend(transform::url_parameters(declaration.parameters.as_deref()));
    parameters.extend(transform::body_parameters(declaration.body.as_ref()));
    parameters.extend(transform::query_parameters(declaration.query.as_ref()));

    let responses = declaration.success.as_ref().map(|reference| {
        BTreeMap::from([(
            "200".to_string(),
            Response {
                description: "OK".into(),
                schema: Some(json!({ "$ref": reference })),
            },
        )])
    });

    Operation {
        description: declaration.description.clone(),
        tags: declaration.tags.clone(),
        operation_id: declaration.operation_id.clone(),
        parameters,
        responses,
    }
}
