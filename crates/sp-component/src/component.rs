//! The paste trigger and its execution state machine.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sp_config::ComponentConfig;
use sp_core::{ErrorPresentation, ExecutionState, ExtractedValues, ExtractionRequest, PasteError};
use sp_form::{FormElement, extract_fields, synchronize};

use crate::clipboard::Clipboard;
use crate::endpoint::ExtractionEndpoint;
use crate::events::{EventSink, PasteEvent};

/// Observable state of the trigger control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    pub label: String,
    pub disabled: bool,
    /// Text of the inline error region. Always `None` with event presentation.
    pub error_text: Option<String>,
}

/// Result of one click.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Unmounted, or an action was already running.
    Ignored,
    Completed(ExtractedValues),
    Failed(PasteError),
}

struct Inner {
    state: ExecutionState,
    mounted: bool,
    endpoint: Option<String>,
    view: TriggerView,
}

enum Start {
    Ignored,
    Rejected(PasteError),
    Running(String),
}

/// One smart paste trigger bound to one form.
///
/// Construct with configuration, then [`mount`](Self::mount). Clicks on an
/// unmounted trigger are ignored. At most one action runs at a time; the
/// execution state is checked and set under one lock.
pub struct SmartPaste {
    config: ComponentConfig,
    clipboard: Arc<dyn Clipboard>,
    endpoint: Arc<dyn ExtractionEndpoint>,
    events: Arc<dyn EventSink>,
    inner: Mutex<Inner>,
}

impl SmartPaste {
    #[must_use]
    pub fn new(
        config: ComponentConfig,
        clipboard: Arc<dyn Clipboard>,
        endpoint: Arc<dyn ExtractionEndpoint>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let inner = Inner {
            state: ExecutionState::Idle,
            mounted: false,
            endpoint: config.endpoint.clone(),
            view: TriggerView {
                label: config.idle_label.clone(),
                disabled: false,
                error_text: None,
            },
        };
        Self {
            config,
            clipboard,
            endpoint,
            events,
            inner: Mutex::new(inner),
        }
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Render the trigger and start accepting clicks. Returns `false` if
    /// already mounted.
    pub fn mount(&self) -> bool {
        let mut inner = self.inner();
        if inner.mounted {
            return false;
        }
        inner.mounted = true;
        if !inner.state.is_executing() {
            inner.view = TriggerView {
                label: self.config.idle_label.clone(),
                disabled: false,
                error_text: None,
            };
        }
        tracing::debug!("smart paste mounted");
        true
    }

    /// Stop accepting clicks. A running action still completes. Returns
    /// `false` if not mounted.
    pub fn unmount(&self) -> bool {
        let mut inner = self.inner();
        if !inner.mounted {
            return false;
        }
        inner.mounted = false;
        inner.view.error_text = None;
        tracing::debug!("smart paste unmounted");
        true
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner().mounted
    }

    /// The effective endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> Option<String> {
        self.inner().endpoint.clone()
    }

    pub fn set_endpoint(&self, url: impl Into<String>) {
        self.inner().endpoint = Some(url.into());
    }

    /// Attribute hook: `api` updates the endpoint, other names are ignored.
    pub fn attribute_changed(&self, name: &str, value: Option<&str>) {
        if name == "api" {
            self.inner().endpoint = value.map(str::to_string);
        }
    }

    #[must_use]
    pub fn state(&self) -> ExecutionState {
        self.inner().state.clone()
    }

    #[must_use]
    pub fn view(&self) -> TriggerView {
        self.inner().view.clone()
    }

    /// Run one paste action against `form`. `None` means the trigger is not
    /// inside a form.
    pub async fn handle_click<E: FormElement + Send>(
        &self,
        form: Option<&Mutex<Vec<E>>>,
    ) -> ClickOutcome {
        let url = match self.start(form.is_some()) {
            Start::Ignored => {
                tracing::debug!("click ignored");
                return ClickOutcome::Ignored;
            }
            Start::Rejected(err) => {
                self.fail(&err);
                return ClickOutcome::Failed(err);
            }
            Start::Running(url) => url,
        };

        let result = match form {
            Some(form) => self.run(form, &url).await,
            None => Err(PasteError::NoFormFound),
        };

        match result {
            Ok(values) => {
                let mut inner = self.inner();
                inner.state = ExecutionState::Idle;
                self.restore(&mut inner.view);
                ClickOutcome::Completed(values)
            }
            Err(err) => {
                self.fail(&err);
                ClickOutcome::Failed(err)
            }
        }
    }

    fn start(&self, has_form: bool) -> Start {
        let mut inner = self.inner();
        if !inner.mounted || inner.state.is_executing() {
            return Start::Ignored;
        }
        if !has_form {
            return Start::Rejected(PasteError::NoFormFound);
        }
        let Some(url) = inner.endpoint.clone().filter(|url| !url.trim().is_empty()) else {
            return Start::Rejected(PasteError::ApiNotConfigured);
        };

        inner.state = ExecutionState::Executing;
        inner.view.disabled = true;
        inner.view.label.clone_from(&self.config.busy_label);
        if self.config.error_presentation == ErrorPresentation::Inline {
            inner.view.error_text = None;
        }
        Start::Running(url)
    }

    async fn run<E: FormElement + Send>(
        &self,
        form: &Mutex<Vec<E>>,
        url: &str,
    ) -> Result<ExtractedValues, PasteError> {
        let text = self.clipboard.read_text().await?;

        let fields = {
            let elements = form
                .lock()
                .map_err(|_| PasteError::Unknown("form is unavailable".into()))?;
            extract_fields(elements.as_slice())
        };
        tracing::debug!(fields = fields.len(), chars = text.len(), "collected form fields");

        let request = ExtractionRequest { text, fields };
        let values = self.endpoint.extract(url, &request).await?;

        self.events.dispatch(PasteEvent::Extracted(values.clone()));

        let mut elements = form
            .lock()
            .map_err(|_| PasteError::Unknown("form is unavailable".into()))?;
        synchronize(
            elements.as_mut_slice(),
            &request.fields,
            &values,
            self.config.null_values,
        );
        drop(elements);

        tracing::info!(filled = values.len(), "smart paste completed");
        Ok(values)
    }

    fn restore(&self, view: &mut TriggerView) {
        view.disabled = false;
        view.label.clone_from(&self.config.idle_label);
    }

    /// Record and surface `err`, leaving the trigger idle.
    fn fail(&self, err: &PasteError) {
        tracing::error!(error = err.name(), "{err}");
        {
            let mut inner = self.inner();
            inner.state = ExecutionState::Error(err.to_string());
            self.restore(&mut inner.view);
            if self.config.error_presentation == ErrorPresentation::Inline {
                inner.view.error_text = Some(err.to_string());
            }
        }
        if self.config.error_presentation == ErrorPresentation::Event {
            self.events.dispatch(PasteEvent::Error(err.clone()));
        }
    }
}
