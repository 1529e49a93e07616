//! Utility modules for error handling and configuration

pub mod clipboard;
pub mod config;
pub mod error;
pub mod paths;

// Re-export for convenience
pub use clipboard::get_clipboard_content;
pub use config::Settings;
pub use error::VidlinkError;
pub use paths::{get_config_dir, get_settings_path};
