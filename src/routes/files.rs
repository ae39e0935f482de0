//! File lookup for the `/files/` route.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

/// Reads files relative to an optional base directory.
///
/// Without a base directory nothing resolves.
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
    base: Option<PathBuf>,
}

impl FileResolver {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    pub fn base(&self) -> Option<&Path> {
        self.base.as_deref()
    }

    /// Reads `relative` under the base directory.
    ///
    /// Returns `None` for any failure and for an empty file. The path is
    /// joined as-is; `..` segments are not normalized.
    pub async fn resolve(&self, relative: &str) -> Option<Bytes> {
        let Some(base) = &self.base else {
            debug!(file = relative, "No directory configured for file serving");
            return None;
        };

        let path = base.join(relative);
        match tokio::fs::read(&path).await {
            Ok(content) if content.is_empty() => {
                debug!(path = %path.display(), "File is empty");
                None
            }
            Ok(content) => Some(Bytes::from(content)),
            Err(e) => {
                debug!(path = %path.display(), "File error: {}", e);
                None
            }
        }
    }
}
