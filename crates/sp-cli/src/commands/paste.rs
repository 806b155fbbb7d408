use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use sp_component::{
    ClickOutcome, EventLog, ExtractionEndpoint, HttpEndpoint, LocalEndpoint, PasteEvent,
    SmartPaste, TextClipboard,
};
use sp_config::{ComponentConfig, SmartPasteConfig};
use sp_core::{ExtractedValues, PasteError};
use sp_extract::OpenAiExtractor;
use sp_form::Form;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PasteArgs;
use crate::input::{read_json, read_text};
use crate::output::output;

/// Endpoint label used when extraction runs in-process.
const IN_PROCESS: &str = "in-process";

/// What a paste run did, printed as the command result.
#[derive(Debug, Serialize)]
pub struct PasteReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<ExtractedValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PasteError>,
    pub events: Vec<PasteEvent>,
    pub form: Form,
}

/// Handle `smartpaste paste`.
pub async fn handle(
    args: &PasteArgs,
    config: &SmartPasteConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form: Form = read_json(&args.form)?;
    let text = read_text(args.text.as_deref())?;

    let mut component = config.component.clone();
    if let Some(endpoint) = &args.endpoint {
        component.endpoint = Some(endpoint.clone());
    }

    let transport: Arc<dyn ExtractionEndpoint> = if component.endpoint.is_some() {
        Arc::new(HttpEndpoint::new())
    } else {
        let extractor = OpenAiExtractor::from_config(&config.openai)?;
        component.endpoint = Some(IN_PROCESS.to_string());
        Arc::new(LocalEndpoint::new(Arc::new(extractor)))
    };

    let report = run(component, text, form, transport).await;
    output(&report, flags.format)?;

    match report.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// One mounted click cycle over `form`.
pub async fn run(
    config: ComponentConfig,
    text: String,
    form: Form,
    transport: Arc<dyn ExtractionEndpoint>,
) -> PasteReport {
    let events = Arc::new(EventLog::new());
    let trigger = SmartPaste::new(
        config,
        Arc::new(TextClipboard::new(text)),
        transport,
        events.clone(),
    );
    trigger.mount();

    let controls = Mutex::new(form.controls);
    let outcome = trigger.handle_click(Some(&controls)).await;
    trigger.unmount();

    let form = Form::new(controls.into_inner().unwrap_or_else(PoisonError::into_inner));
    let (status, values, error) = match outcome {
        ClickOutcome::Completed(values) => ("completed", Some(values), None),
        ClickOutcome::Failed(error) => ("failed", None, Some(error)),
        ClickOutcome::Ignored => (
            "ignored",
            None,
            Some(PasteError::Unknown("paste was ignored".into())),
        ),
    };

    PasteReport {
        status,
        values,
        error,
        events: events.events(),
        form,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sp_component::ExtractionEndpoint;
    use sp_config::ComponentConfig;
    use sp_core::{ExtractedValues, ExtractionRequest, FormValue, PasteError};
    use sp_form::{Control, Form};

    use super::run;

    struct Fixed(Result<ExtractedValues, PasteError>);

    #[async_trait]
    impl ExtractionEndpoint for Fixed {
        async fn extract(
            &self,
            _url: &str,
            _request: &ExtractionRequest,
        ) -> Result<ExtractedValues, PasteError> {
            self.0.clone()
        }
    }

    fn form() -> Form {
        Form::new(vec![
            Control::input("email", "email"),
            Control::select("plan", &["free", "pro"]),
        ])
    }

    fn config() -> ComponentConfig {
        ComponentConfig::default().with_endpoint("http://localhost:8787/api/extract")
    }

    #[tokio::test]
    async fn completed_run_reports_filled_form() {
        let values: ExtractedValues = [
            ("email".to_string(), FormValue::from("a@b.com")),
            ("plan".to_string(), FormValue::from("pro")),
        ]
        .into_iter()
        .collect();

        let report = run(config(), "clip".into(), form(), Arc::new(Fixed(Ok(values)))).await;

        assert_eq!(report.status, "completed");
        assert_eq!(report.form.get("email").unwrap().value, "a@b.com");
        assert_eq!(report.form.get("plan").unwrap().value, "pro");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["events"][0]["type"], "ai-paste-extracted");
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn failed_run_reports_error_event() {
        let report = run(
            config(),
            "clip".into(),
            form(),
            Arc::new(Fixed(Err(PasteError::ExtractionFailed(
                "endpoint returned 500".into(),
            )))),
        )
        .await;

        assert_eq!(report.status, "failed");
        assert_eq!(report.form, form());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["error"],
            json!({"name": "ExtractionFailedError", "message": "endpoint returned 500"})
        );
        assert_eq!(json["events"][0]["type"], "ai-paste-error");
    }

    #[tokio::test]
    async fn unconfigured_endpoint_fails_fast() {
        let report = run(
            ComponentConfig::default(),
            "clip".into(),
            form(),
            Arc::new(Fixed(Ok(ExtractedValues::new()))),
        )
        .await;

        assert_eq!(report.error, Some(PasteError::ApiNotConfigured));
    }
}
