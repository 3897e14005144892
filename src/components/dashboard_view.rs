//! Dashboard View Component
//!
//! Lays out the active dashboard's columns left to right, followed by the
//! zone that appends a dragged column.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_dragdrop::DndContext;
use startpage_core::domain::Dashboard;
use startpage_core::DropTarget;

use super::ColumnView;

#[component]
pub fn DashboardView(dashboard: Signal<Option<Arc<Dashboard>>>) -> impl IntoView {
    let signals = expect_context::<DndContext>().signals;
    let columns = move || dashboard.get().map(|d| d.columns.clone()).unwrap_or_default();

    let end_zone = DropTarget::after_last_column();
    let end_class = move || format!("column-end{}", signals.zone_class(&end_zone));

    view! {
        <div class="dashboard">
            // Keyed on the shared pointer too, so only subtrees a move rebuilt re-render
            <For
                each=columns
                key=|column| (column.id.clone(), Arc::as_ptr(column) as usize)
                children=move |column| view! { <ColumnView column=column /> }
            />
            <div class=end_class data-drop-zone="end"></div>
        </div>
    }
}
