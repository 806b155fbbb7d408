//! `tiny_http` accept loop.

use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use sp_config::ServerConfig;
use sp_extract::StructuredExtractor;
use tiny_http::{Header, Request, Response};
use tokio::runtime::Handle;

use crate::error::ServerError;
use crate::handler::{Handler, Reply, Route};

/// How often the accept loop checks for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Stops a running [`ExtractionServer`].
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    stop: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Ask the accept loop to exit. Requests already accepted still get an answer.
    pub fn shutdown(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

/// The extraction endpoint, bound and ready to serve.
pub struct ExtractionServer {
    http: tiny_http::Server,
    addr: SocketAddr,
    path: String,
    allow_origin: Arc<str>,
    handler: Arc<Handler>,
    stop: Arc<AtomicBool>,
}

impl ExtractionServer {
    /// Bind `config.bind` and prepare to answer with `service`.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if the address cannot be opened.
    pub fn bind(
        config: &ServerConfig,
        service: Arc<dyn StructuredExtractor>,
    ) -> Result<Self, ServerError> {
        let bind_error = |message: String| ServerError::Bind {
            addr: config.bind.clone(),
            message,
        };
        let http = tiny_http::Server::http(config.bind.as_str())
            .map_err(|e| bind_error(e.to_string()))?;
        let addr = http
            .server_addr()
            .to_ip()
            .ok_or_else(|| bind_error("not an IP listener".into()))?;

        Ok(Self {
            http,
            addr,
            path: config.path.clone(),
            allow_origin: Arc::from(config.allow_origin.as_str()),
            handler: Arc::new(Handler::new(config, service)),
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Full URL of the extraction route, for pointing triggers at this server.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}{}", self.addr, self.path)
    }

    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            stop: Arc::clone(&self.stop),
        }
    }

    /// Serve until shut down.
    ///
    /// `tiny_http` reads and writes block, so the accept loop runs in
    /// `spawn_blocking` and hands every request to its own blocking worker.
    /// A slow extraction never holds up other clients.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Io` if accepting fails, or `ServerError::Join` if
    /// the loop panics.
    pub async fn serve(self) -> Result<(), ServerError> {
        tracing::info!(addr = %self.addr, "extraction endpoint listening");
        let runtime = Handle::current();
        tokio::task::spawn_blocking(move || self.accept_loop(&runtime))
            .await
            .map_err(|e| ServerError::Join(e.to_string()))?
    }

    fn accept_loop(&self, runtime: &Handle) -> Result<(), ServerError> {
        while !self.stop.load(Ordering::SeqCst) {
            if let Some(request) = self.http.recv_timeout(POLL_INTERVAL)? {
                let handler = Arc::clone(&self.handler);
                let origin = Arc::clone(&self.allow_origin);
                let worker = runtime.clone();
                runtime.spawn_blocking(move || handle(request, &handler, &origin, &worker));
            }
        }
        tracing::info!(addr = %self.addr, "extraction endpoint stopped");
        Ok(())
    }
}

fn handle(mut request: Request, handler: &Handler, allow_origin: &str, runtime: &Handle) {
    let method = request.method().clone();
    let url = request.url().to_string();

    let reply = match handler.route(&method, &url) {
        Route::Preflight => Reply::empty(204),
        Route::NotFound => Reply::error(404, "not found"),
        Route::MethodNotAllowed => Reply::error(405, "method not allowed"),
        Route::Extract => match read_body(&mut request, handler.max_body_bytes()) {
            Ok(Some(body)) => runtime.block_on(handler.extract(&body)),
            Ok(None) => Reply::error(413, "request body too large"),
            Err(e) => Reply::error(400, format!("failed to read body: {e}")),
        },
    };

    tracing::info!(%method, %url, status = reply.status, "request handled");
    if let Err(e) = request.respond(response(&reply, allow_origin)) {
        tracing::warn!(error = %e, "failed to send response");
    }
}

fn response(reply: &Reply, allow_origin: &str) -> Response<std::io::Cursor<Vec<u8>>> {
    let body = reply
        .body
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    let mut headers = vec![
        ("Access-Control-Allow-Origin", allow_origin),
        ("Access-Control-Allow-Methods", "POST, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
    ];
    if reply.body.is_some() {
        headers.push(("Content-Type", "application/json"));
    }
    if reply.status == 405 {
        headers.push(("Allow", "POST, OPTIONS"));
    }

    headers.into_iter().fold(
        Response::from_string(body).with_status_code(reply.status),
        |response, (name, value)| match Header::from_bytes(name, value) {
            Ok(header) => response.with_header(header),
            Err(()) => {
                tracing::warn!(header = name, "skipping invalid header value");
                response
            }
        },
    )
}

/// Read at most `limit` bytes. `None` if the body is larger.
fn read_body(request: &mut Request, limit: usize) -> std::io::Result<Option<Vec<u8>>> {
    if request.body_length().is_some_and(|len| len > limit) {
        return Ok(None);
    }

    let mut body = Vec::new();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    request.as_reader().take(cap).read_to_end(&mut body)?;
    Ok((body.len() <= limit).then_some(body))
}
