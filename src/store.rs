//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;
use startpage_core::domain::{Dashboard, DashboardId, Startpage};

use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Every dashboard plus the active selection
    pub startpage: Startpage,
}

impl AppState {
    pub fn new(startpage: Startpage) -> Self {
        Self { startpage }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Active dashboard (tracked)
pub fn store_active_dashboard(store: &AppStore) -> Option<Arc<Dashboard>> {
    store.startpage().with(|sp| sp.active_dashboard().cloned())
}

/// Replace the active dashboard with a committed tree and persist
pub fn store_commit_dashboard(store: &AppStore, dashboard: Dashboard) {
    store.startpage().update(|sp| *sp = sp.with_active_dashboard(dashboard));
    persist(store);
}

/// Switch dashboards and persist the selection
pub fn store_select_dashboard(store: &AppStore, id: DashboardId) {
    store.startpage().update(|sp| sp.select_dashboard(id));
    persist(store);
}

fn persist(store: &AppStore) {
    let snapshot = store.startpage().get_untracked();
    if let Err(e) = storage::save_startpage(&snapshot) {
        log::warn!("Failed to persist startpage: {}", e);
    }
}
