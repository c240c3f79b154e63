// src/presentation/http/swagger/transform.rs
//! Conversions from declaration parameters to documentation parameters.
//! Output order always follows input order.
use super::types::{Parameter, ParameterLocation};
use crate::domain::context::TOKEN_EXAMPLE;
use crate::presentation::http::endpoint::{BodyParameter, QueryGroup, UrlParameter};
use serde_json::Value;

pub fn auth_header_parameter(header: &str) -> Parameter {
    Parameter {
        description: Some("User JWT token".into()),
        required: Some(true),
        kind: Some("string".into()),
        example: Some(Value::String(TOKEN_EXAMPLE.into())),
        ..Parameter::new(header, ParameterLocation::Header)
    }
}

pub fn url_parameters(parameters: Option<&[UrlParameter]>) -> Vec<Parameter> {
    parameters
        .unwrap_or_default()
        .iter()
        .map(|param| Parameter {
            description: Some(param.description.clone()),
            // Swagger 2.0 requires path parameters to be marked required.
            required: Some(true),
            kind: Some(param.kind.clone().unwrap_or_else(|| "string".into())),
            ..Parameter::new(&param.name, ParameterLocation::Path)
        })
        .collect()
}

pub fn body_parameters(body: Option<&BodyParameter>) -> Vec<Parameter> {
    body.map(|body| Parameter {
        description: Some(body.description.clone()),
        required: Some(body.required),
        kind: Some(body.kind.clone()),
        schema: body.schema.clone(),
        items: body.items.clone(),
        ..Parameter::new(&body.name, ParameterLocation::Body)
    })
    .into_iter()
    .collect()
}

pub fn query_parameters(query: Option<&QueryGroup>) -> Vec<Parameter> {
    let Some(query) = query else {
        return Vec::new();
    };

    query
        .items
        .iter()
        .map(|field| Parameter {
            description: Some(query.description.clone()),
            required: field.required,
            kind: Some(field.kind.clone()),
            items: field.items.clone(),
            ..Parameter::new(&field.name, ParameterLocation::Query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::http::endpoint::QueryField;
    use serde_json::json;

    #[test]
    fn absent_inputs_produce_no_parameters() {
        assert!(url_parameters(None).is_empty());
        assert!(body_parameters(None).is_empty());
        assert!(query_parameters(None).is_empty());
    }

    #[test]
    fn url_parameters_default_to_string_in_path() {
        let params = [
            UrlParameter::new("book_id", "Book id"),
            UrlParameter::new("page", "Page").kind("integer"),
        ];
        let out = url_parameters(Some(&params));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "book_id");
        assert_eq!(out[0].location, ParameterLocation::Path);
        assert_eq!(out[0].kind.as_deref(), Some("string"));
        assert_eq!(out[1].kind.as_deref(), Some("integer"));
    }

    #[test]
    fn body_parameter_passes_schema_and_required_through() {
        let body = BodyParameter::new("book", "New book")
            .required(true)
            .schema_ref("#/definitions/Book");
        let out = body_parameters(Some(&body));
        assert_eq!(out.len(), 1);
        let value = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "book",
                "in": "body",
                "description": "New book",
                "required": true,
                "type": "object",
                "schema": { "$ref": "#/definitions/Book" }
            })
        );
    }

    #[test]
    fn query_fields_share_group_description() {
        let group = QueryGroup::new("q", "Paging options")
            .field(QueryField::new("limit", "integer").required(false))
            .field(QueryField::new("offset", "integer").required(true));
        let out = query_parameters(Some(&group));
        let names: Vec<&str> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["limit", "offset"]);
        assert!(out.iter().all(|p| p.location == ParameterLocation::Query));
        assert!(
            out.iter()
                .all(|p| p.description.as_deref() == Some("Paging options"))
        );
        assert_eq!(out[0].required, Some(false));
        assert_eq!(out[1].required, Some(true));
    }

    #[test]
    fn auth_header_parameter_is_required_string() {
        let value = serde_json::to_value(auth_header_parameter("x-auth")).unwrap();
        assert_eq!(value["in"], "header");
        assert_eq!(value["required"], true);
        assert_eq!(value["type"], "string");
        assert_eq!(value["description"], "User JWT token");
        assert_eq!(value["example"], TOKEN_EXAMPLE);
    }
}
