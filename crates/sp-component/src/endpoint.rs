//! Transports for the extraction request.

use std::sync::Arc;

use async_trait::async_trait;
use sp_core::{ExtractedValues, ExtractionRequest, PasteError};
use sp_extract::{StructuredExtractor, extract_form_data};

/// Something that answers `{text, fields}` with extracted values.
#[async_trait]
pub trait ExtractionEndpoint: Send + Sync {
    /// Send `request` to `url`.
    ///
    /// # Errors
    ///
    /// Returns `PasteError::ExtractionFailed` when the endpoint rejects the
    /// request or answers with an unusable body.
    async fn extract(
        &self,
        url: &str,
        request: &ExtractionRequest,
    ) -> Result<ExtractedValues, PasteError>;
}

/// `POST <url>` with a JSON body.
#[derive(Debug, Clone, Default)]
pub struct HttpEndpoint {
    http: reqwest::Client,
}

impl HttpEndpoint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ExtractionEndpoint for HttpEndpoint {
    async fn extract(
        &self,
        url: &str,
        request: &ExtractionRequest,
    ) -> Result<ExtractedValues, PasteError> {
        tracing::debug!(%url, fields = request.fields.len(), "posting extraction request");

        let resp = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| PasteError::Unknown(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PasteError::ExtractionFailed(format!("endpoint returned {status}")));
        }

        resp.json::<ExtractedValues>()
            .await
            .map_err(|e| PasteError::ExtractionFailed(format!("invalid response body: {e}")))
    }
}

/// Runs extraction in-process. The URL is only used for logging.
pub struct LocalEndpoint {
    service: Arc<dyn StructuredExtractor>,
}

impl LocalEndpoint {
    #[must_use]
    pub fn new(service: Arc<dyn StructuredExtractor>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ExtractionEndpoint for LocalEndpoint {
    async fn extract(
        &self,
        url: &str,
        request: &ExtractionRequest,
    ) -> Result<ExtractedValues, PasteError> {
        tracing::debug!(%url, fields = request.fields.len(), "extracting in-process");
        extract_form_data(self.service.as_ref(), &request.text, &request.fields)
            .await
            .map_err(|e| PasteError::ExtractionFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use sp_core::{FieldDescriptor, FormValue};
    use sp_extract::ExtractError;

    struct Canned(Result<Value, ()>);

    #[async_trait]
    impl StructuredExtractor for Canned {
        async fn generate_object(&self, _prompt: &str, _schema: &Value) -> Result<Value, ExtractError> {
            self.0
                .clone()
                .map_err(|()| ExtractError::Parse("model output unusable".into()))
        }
    }

    fn request() -> ExtractionRequest {
        ExtractionRequest {
            text: "reach me at a@b.com".into(),
            fields: vec![FieldDescriptor::new("email", "email")],
        }
    }

    #[tokio::test]
    async fn local_endpoint_conforms_service_output() {
        let endpoint = LocalEndpoint::new(Arc::new(Canned(Ok(json!({
            "email": "a@b.com",
            "unrelated": "dropped"
        })))));

        let values = endpoint.extract("local", &request()).await.unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values["email"], FormValue::from("a@b.com"));
    }

    #[tokio::test]
    async fn local_endpoint_failure_is_extraction_failed() {
        let endpoint = LocalEndpoint::new(Arc::new(Canned(Err(()))));
        let err = endpoint.extract("local", &request()).await.unwrap_err();
        assert!(matches!(err, PasteError::ExtractionFailed(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_unknown() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = HttpEndpoint::new()
            .extract(&format!("http://127.0.0.1:{port}/api/extract"), &request())
            .await
            .unwrap_err();
        assert!(matches!(err, PasteError::Unknown(_)));
    }
}
