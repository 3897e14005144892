//! Startpage Frontend App
//!
//! Wires the persisted store to the drag engine and renders the active
//! dashboard.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndContext, DragDropEngine};
use reactive_stores::Store;
use startpage_core::domain::Dashboard;

use crate::components::{DashboardTabs, DashboardView};
use crate::storage;
use crate::store::{store_active_dashboard, store_commit_dashboard, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(storage::initial_startpage()));
    provide_context(store);

    let active = Signal::derive(move || store_active_dashboard(&store));
    let on_commit = Callback::new(move |dashboard: Dashboard| {
        log::info!("Committing reordered dashboard {}", dashboard.id);
        store_commit_dashboard(&store, dashboard);
    });

    let signals = create_dnd_signals();
    let engine = DragDropEngine::new(storage::load_drag_config(), active, on_commit, signals);
    let dnd = DndContext::new(engine);
    provide_context(dnd);

    // A drag in flight must not outlive the view it is rearranging
    on_cleanup(move || dnd.engine().cancel());

    let summary = move || {
        active
            .get()
            .map(|d| format!("{} columns · {} groups · {} items", d.columns.len(), d.group_count(), d.item_count()))
            .unwrap_or_default()
    };

    view! {
        <div class="app-layout">
            <DashboardTabs />
            <DashboardView dashboard=active />
            <footer class="app-footer">{summary}</footer>
        </div>
    }
}
