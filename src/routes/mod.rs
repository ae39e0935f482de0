//! Request routing
//!
//! Maps a parsed request onto one of the fixed behaviors. Rules are checked in
//! order and the first match wins:
//!
//! 1. `GET /` → 200, no body
//! 2. `/echo/{text}` → 200 `text/plain` echoing `{text}`
//! 3. `/user-agent` → 200 `text/plain` with the `User-Agent` value, or `None`
//! 4. `/files/{name}` → 200 `application/octet-stream`, or 404
//! 5. anything else → 404
//!
//! Only rule 1 looks at the method.

pub mod files;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::Config;
use crate::http::parser::parse_http_request;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

pub use files::FileResolver;

const ECHO_PREFIX: &str = "/echo/";
const USER_AGENT_PREFIX: &str = "/user-agent";
const FILES_PREFIX: &str = "/files/";

/// Body sent for `/user-agent` when the client sent no `User-Agent`.
pub const MISSING_USER_AGENT: &str = "None";

#[derive(Debug, Clone, Default)]
pub struct Router {
    files: FileResolver,
}

impl Router {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self {
            files: FileResolver::new(directory),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.directory.clone())
    }

    /// Parses raw request bytes and routes them. Malformed input yields 400.
    pub async fn respond(&self, raw: &[u8]) -> Response {
        match parse_http_request(raw) {
            Ok(request) => self.route(&request).await,
            Err(e) => {
                warn!("Error parsing request: {}", e);
                Response::bad_request()
            }
        }
    }

    pub async fn route(&self, req: &Request) -> Response {
        debug!(method = %req.method, path = %req.path, "Routing request");

        let path = req.path.as_str();

        if req.method == Method::GET && path == "/" {
            return Response::ok();
        }

        if let Some(text) = path.strip_prefix(ECHO_PREFIX) {
            return Response::text(text.to_string());
        }

        if path.starts_with(USER_AGENT_PREFIX) {
            let agent = req.user_agent().unwrap_or_else(|| {
                debug!("User-Agent header not found");
                MISSING_USER_AGENT
            });
            return Response::text(agent.to_string());
        }

        if let Some(name) = path.strip_prefix(FILES_PREFIX) {
            return match self.files.resolve(name).await {
                Some(content) => Response::octet_stream(content),
                None => Response::not_found(),
            };
        }

        Response::not_found()
    }
}
