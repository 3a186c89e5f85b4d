//! Schema declaration for the virtual API.
//!
//! Maps endpoint identifiers to per-method definitions of candidate
//! responses, an optional request-body shape, and candidate errors.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// HTTP verbs the engine can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// The wire-format verb name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate responses and errors for one endpoint/method pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointDefinition {
    /// Candidate response payloads, in declaration order. One of these is
    /// returned per simulated call.
    #[serde(default)]
    pub responses: Vec<serde_json::Value>,

    /// Expected request-body shape. Documentation for callers only; the
    /// engine never inspects it at runtime.
    #[serde(default)]
    pub body: Option<serde_json::Value>,

    /// Error descriptors selectable with `use_error_idx`, in declaration
    /// order.
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// Immutable mapping from endpoint identifier to per-method definitions.
///
/// Set once at engine construction and read-only afterward, so in-flight
/// simulated calls may share it freely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiSchema {
    routes: HashMap<String, HashMap<HttpMethod, EndpointDefinition>>,
}

impl ApiSchema {
    /// Load a schema from a YAML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let schema: Self = serde_yaml::from_str(&content)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Validate the schema.
    ///
    /// Every endpoint/method pair must declare at least one candidate
    /// response; selecting from an empty list at call time is a contract
    /// violation, so catch it here.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (endpoint, methods) in &self.routes {
            for (method, definition) in methods {
                if definition.responses.is_empty() {
                    anyhow::bail!(
                        "{} {}: at least one candidate response is required",
                        method,
                        endpoint
                    );
                }
            }
        }
        Ok(())
    }

    /// Add a definition for an endpoint/method pair, replacing any
    /// existing one.
    pub fn with_route(
        mut self,
        endpoint: impl Into<String>,
        method: HttpMethod,
        definition: EndpointDefinition,
    ) -> Self {
        self.routes
            .entry(endpoint.into())
            .or_default()
            .insert(method, definition);
        self
    }

    /// Look up the definition for an endpoint/method pair.
    pub fn endpoint(&self, endpoint: &str, method: HttpMethod) -> Option<&EndpointDefinition> {
        self.routes.get(endpoint).and_then(|methods| methods.get(&method))
    }

    /// Number of declared endpoint/method routes.
    pub fn route_count(&self) -> usize {
        self.routes.values().map(|methods| methods.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_simple_schema() {
        let yaml = r#"
/users:
  GET:
    responses:
      - - id: 1
          name: Ada
      - []
  POST:
    body:
      name: string
    responses:
      - id: 2
        name: Grace
    errors:
      - message: bad request
        code: 400
"#;
        let schema: ApiSchema = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schema.route_count(), 2);

        let get = schema.endpoint("/users", HttpMethod::Get).unwrap();
        assert_eq!(get.responses.len(), 2);
        assert!(get.errors.is_empty());

        let post = schema.endpoint("/users", HttpMethod::Post).unwrap();
        assert_eq!(post.errors[0].code, 400);
        assert_eq!(post.body, Some(json!({"name": "string"})));
    }

    #[test]
    fn test_lookup_misses() {
        let yaml = "{/health: {GET: {responses: [{status: ok}]}}}";
        let schema: ApiSchema = serde_yaml::from_str(yaml).unwrap();

        assert!(schema.endpoint("/health", HttpMethod::Get).is_some());
        assert!(schema.endpoint("/health", HttpMethod::Post).is_none());
        assert!(schema.endpoint("/missing", HttpMethod::Get).is_none());
    }

    #[test]
    fn test_method_serde_names() {
        let method: HttpMethod = serde_yaml::from_str("PATCH").unwrap();
        assert_eq!(method, HttpMethod::Patch);
        assert_eq!(method.to_string(), "PATCH");
        assert!(serde_yaml::from_str::<HttpMethod>("patch").is_err());
    }

    #[test]
    fn test_validate_rejects_empty_responses() {
        let schema = ApiSchema::default().with_route(
            "/users",
            HttpMethod::Get,
            EndpointDefinition::default(),
        );
        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("GET /users"));
    }

    #[test]
    fn test_with_route_replaces_existing() {
        let schema = ApiSchema::default()
            .with_route(
                "/users",
                HttpMethod::Get,
                EndpointDefinition {
                    responses: vec![json!("old")],
                    ..Default::default()
                },
            )
            .with_route(
                "/users",
                HttpMethod::Get,
                EndpointDefinition {
                    responses: vec![json!("new")],
                    ..Default::default()
                },
            );

        assert_eq!(schema.route_count(), 1);
        let definition = schema.endpoint("/users", HttpMethod::Get).unwrap();
        assert_eq!(definition.responses, vec![json!("new")]);
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "/health:\n  GET:\n    responses:\n      - status: ok\n"
        )
        .unwrap();

        let schema = ApiSchema::from_file(file.path()).unwrap();
        assert_eq!(schema.route_count(), 1);
    }

    #[test]
    fn test_from_file_validates() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "/health:\n  GET:\n    responses: []\n").unwrap();

        assert!(ApiSchema::from_file(file.path()).is_err());
    }
}
