//! Image preview pipeline - Turns a selected image file into a data URL for display.
//!
//! Reading the file is the only asynchronous step in the admin layer. Each call to
//! [`PreviewPipeline::select`] takes a new selection token; when a read finishes it is
//! applied only if its token is still the latest, so a slow read of an earlier file can
//! never overwrite the preview of a later one.

use crate::errors::{Error, Result};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::{
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Source of image bytes for a selected file.
#[async_trait]
pub trait FileReader: Send + Sync {
    /// Reads the whole file at `path`.
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads files from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsReader;

#[async_trait]
impl FileReader for FsReader {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

/// MIME type for an image, judged by its file extension.
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Encodes `bytes` as a base64 data URL.
#[must_use]
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// What happened to a finished read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The read was the latest selection and now is the preview
    Applied,
    /// A newer selection (or a discard) happened first; the result was dropped
    Stale,
}

#[derive(Debug, Default)]
struct PreviewSlot {
    latest: u64,
    value: Option<String>,
}

/// Holds the pending image preview of one create/edit form.
///
/// Cloning shares the same slot.
#[derive(Clone)]
pub struct PreviewPipeline {
    reader: Arc<dyn FileReader>,
    slot: Arc<Mutex<PreviewSlot>>,
}

impl Default for PreviewPipeline {
    fn default() -> Self {
        Self::new(Arc::new(FsReader))
    }
}

fn lock(slot: &Mutex<PreviewSlot>) -> MutexGuard<'_, PreviewSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl PreviewPipeline {
    /// Creates a pipeline reading files through `reader`.
    #[must_use]
    pub fn new(reader: Arc<dyn FileReader>) -> Self {
        Self {
            reader,
            slot: Arc::default(),
        }
    }

    /// Starts reading `path` in the background. Must be called from within a Tokio runtime.
    ///
    /// The returned task resolves to [`PreviewOutcome::Applied`] if this selection became
    /// the preview, or [`PreviewOutcome::Stale`] if it was superseded. A failed read of the
    /// latest selection resolves to [`Error::ImageRead`] and keeps the previous preview.
    pub fn select(&self, path: impl Into<PathBuf>) -> JoinHandle<Result<PreviewOutcome>> {
        let path = path.into();
        let token = {
            let mut slot = lock(&self.slot);
            slot.latest += 1;
            slot.latest
        };
        debug!(path = %path.display(), token, "Image selected");

        let reader = Arc::clone(&self.reader);
        let slot = Arc::clone(&self.slot);
        tokio::spawn(async move {
            let read = reader.read(&path).await;

            let mut slot = lock(&slot);
            if slot.latest != token {
                debug!(path = %path.display(), token, latest = slot.latest, "Discarding stale image read");
                return Ok(PreviewOutcome::Stale);
            }

            match read {
                Ok(bytes) => {
                    slot.value = Some(encode_data_url(mime_for(&path), &bytes));
                    info!(path = %path.display(), size = bytes.len(), "Image preview ready");
                    Ok(PreviewOutcome::Applied)
                }
                Err(source) => {
                    warn!(path = %path.display(), error = %source, "Failed to read selected image");
                    Err(Error::ImageRead { path, source })
                }
            }
        })
    }

    /// The current preview, if any.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        lock(&self.slot).value.clone()
    }

    /// Clears the preview and invalidates every read still in flight.
    pub fn discard(&self) {
        let mut slot = lock(&self.slot);
        slot.latest += 1;
        slot.value = None;
    }
}
