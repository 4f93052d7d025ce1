//! Snapshots: the paragraph text of one fetched page.
//!
//! A snapshot is a single transient string. It has no identity and no
//! persistence contract beyond "write to a named file" — rerunning against
//! the same file overwrites it.

use crate::extract::paragraph_text;
use crate::fetch::{FetchError, PageFetcher};
use std::io;
use std::path::Path;
use tracing::info;

/// The extracted paragraph text of one fetched page.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Concatenated paragraph text, single-space joined.
    pub text: String,
}

impl Snapshot {
    /// Build a snapshot from raw document text.
    pub fn from_document(html: &str) -> Self {
        Self {
            text: paragraph_text(html),
        }
    }

    /// Whether the page yielded no paragraph text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Write the snapshot text to a file as UTF-8, overwriting any
    /// existing content.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, &self.text)
    }
}

/// Fetch a URL and extract its paragraph text.
///
/// This is the shared sequence behind both the web form and the snap
/// command. The fetched body reaches the extractor unmodified, whatever
/// the response status was.
pub async fn capture(fetcher: &PageFetcher, url: &str) -> Result<Snapshot, FetchError> {
    let resp = fetcher.get(url).await?;
    let snapshot = Snapshot::from_document(&resp.body);
    info!(
        "captured {url}: status {}, {} chars of paragraph text",
        resp.status,
        snapshot.text.len()
    );
    Ok(snapshot)
}
