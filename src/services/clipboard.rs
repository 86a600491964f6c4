//! System clipboard access
//!
//! Writes go through the `TextClipboard` trait so the copy flow can be
//! exercised without a real clipboard.

use anyhow::{anyhow, Result};

/// Write-only text clipboard
pub trait TextClipboard {
    /// Place `text` on the clipboard, replacing any previous contents
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by the host platform
///
/// The handle is acquired once at startup; on headless systems it is
/// simply absent and every write fails with a diagnostic.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("system clipboard unavailable: {}", e);
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl TextClipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| anyhow!("clipboard not available"))?;
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}
