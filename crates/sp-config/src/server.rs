//! Extraction endpoint server configuration.

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    String::from("127.0.0.1:8787")
}

fn default_path() -> String {
    String::from("/api/extract")
}

fn default_allow_origin() -> String {
    String::from("*")
}

const fn default_max_body_bytes() -> usize {
    1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Route accepting `POST` extraction requests.
    #[serde(default = "default_path")]
    pub path: String,

    /// Value of `Access-Control-Allow-Origin` on every response.
    #[serde(default = "default_allow_origin")]
    pub allow_origin: String,

    /// Request bodies above this size are rejected with 413.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            path: default_path(),
            allow_origin: default_allow_origin(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}
