//! Request routing and the extraction route, independent of the socket.

use std::sync::Arc;

use serde_json::{Value, json};
use sp_config::ServerConfig;
use sp_core::ExtractionRequest;
use sp_extract::{StructuredExtractor, extract_form_data};
use sp_schema::{SchemaError, SchemaRegistry};
use tiny_http::Method;

/// Where a request goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// CORS preflight on the extraction path.
    Preflight,
    Extract,
    NotFound,
    MethodNotAllowed,
}

/// Status and optional JSON body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

impl Reply {
    #[must_use]
    pub const fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    #[must_use]
    pub const fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    #[must_use]
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, json!({ "error": message.into() }))
    }
}

/// Routes requests and runs extractions.
pub struct Handler {
    path: String,
    max_body_bytes: usize,
    service: Arc<dyn StructuredExtractor>,
    registry: SchemaRegistry,
}

impl Handler {
    #[must_use]
    pub fn new(config: &ServerConfig, service: Arc<dyn StructuredExtractor>) -> Self {
        Self {
            path: config.path.clone(),
            max_body_bytes: config.max_body_bytes,
            service,
            registry: SchemaRegistry::new(),
        }
    }

    #[must_use]
    pub const fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// Match `method` and `url` (query string ignored) against the extraction path.
    #[must_use]
    pub fn route(&self, method: &Method, url: &str) -> Route {
        let path = url.split_once('?').map_or(url, |(path, _)| path);
        if path != self.path {
            return Route::NotFound;
        }
        match method {
            Method::Post => Route::Extract,
            Method::Options => Route::Preflight,
            _ => Route::MethodNotAllowed,
        }
    }

    /// Validate `body` and answer it with extracted values.
    ///
    /// 400 for malformed or schema-violating bodies, 502 when the extraction
    /// service fails, 200 with the value map otherwise.
    pub async fn extract(&self, body: &[u8]) -> Reply {
        let request = match self.parse(body) {
            Ok(request) => request,
            Err(reply) => return reply,
        };

        tracing::debug!(
            fields = request.fields.len(),
            chars = request.text.len(),
            "extraction request accepted"
        );

        match extract_form_data(self.service.as_ref(), &request.text, &request.fields).await {
            Ok(values) => match serde_json::to_value(&values) {
                Ok(body) => Reply::json(200, body),
                Err(e) => Reply::error(500, format!("failed to encode values: {e}")),
            },
            Err(e) => {
                tracing::error!(error = %e, "extraction failed");
                Reply::error(502, e.to_string())
            }
        }
    }

    fn parse(&self, body: &[u8]) -> Result<ExtractionRequest, Reply> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Reply::error(400, format!("invalid JSON: {e}")))?;

        match self.registry.validate("extraction_request", &value) {
            Ok(()) => {}
            Err(SchemaError::ValidationFailed { errors }) => {
                return Err(Reply::json(
                    400,
                    json!({ "error": "invalid extraction request", "details": errors }),
                ));
            }
            Err(e) => return Err(Reply::error(500, e.to_string())),
        }

        serde_json::from_value(value).map_err(|e| Reply::error(400, e.to_string()))
    }
}
