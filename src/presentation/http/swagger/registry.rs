// src/presentation/http/swagger/registry.rs
use super::types::{Operation, PathItem};
use crate::presentation::http::{
    endpoint::HttpMethod,
    error::{RegistrationError, RegistrationResult},
};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::{PartialSchema, ToSchema};

/// Accumulated documentation state: operations per path and named schemas.
///
/// Populated during registration; read when the document is generated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentRegistry {
    paths: BTreeMap<String, PathItem>,
    definitions: BTreeMap<String, Value>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_schema(&mut self, name: impl Into<String>, shape: Value) -> RegistrationResult<()> {
        let name = name.into();
        if self.definitions.contains_key(&name) {
            return Err(RegistrationError::DuplicateDefinition(name));
        }
        tracing::debug!(schema = %name, "schema defined");
        self.definitions.insert(name, shape);
        Ok(())
    }

    /// Define a schema derived from `T` and return its `#/definitions/...` reference.
    pub fn define_schema_for<T: ToSchema>(&mut self) -> RegistrationResult<String> {
        let name = T::name().into_owned();
        let shape = serde_json::to_value(<T as PartialSchema>::schema()).map_err(|err| {
            RegistrationError::InvalidSchema {
                name: name.clone(),
                reason: err.to_string(),
            }
        })?;
        let reference = definition_ref(&name);
        self.define_schema(name, shape)?;
        Ok(reference)
    }

    pub fn contains_operation(&self, path: &str, method: HttpMethod) -> bool {
        self.operation(path, method).is_some()
    }

    pub fn operation(&self, path: &str, method: HttpMethod) -> Option<&Operation> {
        self.paths.get(path).and_then(|item| item.get(method.doc_key()))
    }

    pub fn definition(&self, name: &str) -> Option<&Value> {
        self.definitions.get(name)
    }

    pub fn paths(&self) -> &BTreeMap<String, PathItem> {
        &self.paths
    }

    pub fn definitions(&self) -> &BTreeMap<String, Value> {
        &self.definitions
    }

    pub(crate) fn insert_operation(
        &mut self,
        path: &str,
        method: HttpMethod,
        operation: Operation,
    ) -> RegistrationResult<()> {
        let item = self.paths.entry(path.to_string()).or_default();
        if item.contains_key(method.doc_key()) {
            return Err(RegistrationError::DuplicateRoute {
                method: method.to_string(),
                path: path.to_string(),
            });
        }
        item.insert(method.doc_key().to_string(), operation);
        Ok(())
    }
}

pub fn definition_ref(name: &str) -> String {
    format!("#/definitions/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize, ToSchema)]
    #[allow(dead_code)]
    struct Widget {
        id: String,
    }

    fn operation(description: &str) -> Operation {
        Operation {
            description: Some(description.into()),
            tags: None,
            operation_id: None,
            parameters: Vec::new(),
            responses: None,
        }
    }

    #[test]
    fn duplicate_definition_keeps_original_shape() {
        let mut registry = DocumentRegistry::new();
        registry
            .define_schema("Book", json!({ "type": "object" }))
            .unwrap();
        let err = registry
            .define_schema("Book", json!({ "type": "string" }))
            .unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateDefinition("Book".into()));
        assert_eq!(err.to_string(), "Book model has been already defined");
        assert_eq!(registry.definition("Book"), Some(&json!({ "type": "object" })));
    }

    #[test]
    fn duplicate_operation_keeps_first_entry() {
        let mut registry = DocumentRegistry::new();
        registry
            .insert_operation("/x", HttpMethod::Get, operation("first"))
            .unwrap();
        registry
            .insert_operation("/x", HttpMethod::Post, operation("post"))
            .unwrap();
        let err = registry
            .insert_operation("/x", HttpMethod::Get, operation("second"))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateRoute { .. }));
        let kept = registry.operation("/x", HttpMethod::Get).unwrap();
        assert_eq!(kept.description.as_deref(), Some("first"));
        assert_eq!(registry.paths()["/x"].len(), 2);
    }

    #[test]
    fn schema_derived_from_type_is_registered_under_its_name() {
        let mut registry = DocumentRegistry::new();
        let reference = registry.define_schema_for::<Widget>().unwrap();
        assert_eq!(reference, "#/definitions/Widget");
        let shape = registry.definition("Widget").unwrap();
        assert_eq!(shape["type"], "object");
        assert_eq!(shape["properties"]["id"]["type"], "string");
        assert!(registry.define_schema_for::<Widget>().is_err());
    }
}
