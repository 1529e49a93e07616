//! Clipboard functionality

use crate::utils::error::{Result, VidlinkError};
use arboard::Clipboard;

/// Get clipboard content
pub fn get_clipboard_content() -> Result<String> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| VidlinkError::ClipboardError(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .get_text()
        .map_err(|e| VidlinkError::ClipboardError(format!("Failed to read clipboard: {}", e)))
}
