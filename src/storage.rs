//! Browser Persistence
//!
//! The startpage lives in localStorage as JSON. Anything unreadable or
//! inconsistent falls back to the built-in defaults.

use startpage_core::domain::{DomainError, Startpage};
use startpage_core::DragConfig;
use thiserror::Error;

use crate::defaults;

pub const STATE_KEY: &str = "startpage.state";
pub const DND_CONFIG_KEY: &str = "startpage.dnd-config";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("local storage access failed: {0}")]
    Access(String),
    #[error("invalid stored JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stored startpage is inconsistent: {0}")]
    Invalid(#[from] DomainError),
    #[error("stored startpage has no dashboards")]
    Empty,
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)
}

fn read_key(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|e| StorageError::Access(format!("{:?}", e)))
}

/// Parse and validate a stored startpage
pub fn parse_startpage(json: &str) -> Result<Startpage, StorageError> {
    let startpage: Startpage = serde_json::from_str(json)?;
    if startpage.dashboards.is_empty() {
        return Err(StorageError::Empty);
    }
    for dashboard in &startpage.dashboards {
        dashboard.validate()?;
    }
    Ok(startpage)
}

pub fn load_startpage() -> Result<Option<Startpage>, StorageError> {
    read_key(STATE_KEY)?.map(|json| parse_startpage(&json)).transpose()
}

pub fn save_startpage(startpage: &Startpage) -> Result<(), StorageError> {
    let json = serde_json::to_string(startpage)?;
    local_storage()?
        .set_item(STATE_KEY, &json)
        .map_err(|e| StorageError::Access(format!("{:?}", e)))
}

/// Stored startpage, or the defaults when there is none or it is unusable
pub fn initial_startpage() -> Startpage {
    match load_startpage() {
        Ok(Some(startpage)) => {
            log::info!("Loaded {} dashboard(s) from storage", startpage.dashboards.len());
            startpage
        }
        Ok(None) => defaults::startpage(),
        Err(e) => {
            log::warn!("Ignoring stored startpage: {}", e);
            defaults::startpage()
        }
    }
}

/// Drag tunables, with optional JSON overrides from localStorage
pub fn load_drag_config() -> DragConfig {
    match read_key(DND_CONFIG_KEY) {
        Ok(Some(json)) => DragConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Invalid {} override, using defaults: {}", DND_CONFIG_KEY, e);
            DragConfig::default()
        }),
        Ok(None) => DragConfig::default(),
        Err(e) => {
            log::debug!("Drag config override unavailable: {}", e);
            DragConfig::default()
        }
    }
}
