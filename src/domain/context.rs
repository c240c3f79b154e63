// src/domain/context.rs
use serde::Serialize;
use thiserror::Error;

/// Example token shown in the generated documentation for auth headers.
pub const TOKEN_EXAMPLE: &str = "user_id;organization_id;READER,WRITER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("missing auth header: {0}")]
    MissingHeader(String),
    #[error("malformed identity token: {0}")]
    Malformed(String),
}

/// Identity forwarded to handlers of endpoints that declare an auth header.
///
/// Built from a pre-issued token of the form `author;organization;role1,role2`.
/// Field contents are taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityContext {
    pub author: String,
    pub organization: String,
    pub roles: Vec<String>,
}

impl IdentityContext {
    pub fn from_token(token: &str) -> Result<Self, ContextError> {
        let mut fields = token.split(';');
        let (Some(author), Some(organization), Some(roles)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(ContextError::Malformed(format!(
                "expected `author;organization;roles`, got {} field(s)",
                token.split(';').count()
            )));
        };

        Ok(Self {
            author: author.to_string(),
            organization: organization.to_string(),
            roles: roles.split(',').map(str::to_string).collect(),
        })
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
