//! Dashboard Tab Bar Component
//!
//! Tab bar for switching between dashboards.

use leptos::prelude::*;

use crate::store::{store_select_dashboard, use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardTabs() -> impl IntoView {
    let store = use_app_store();

    let dashboards = move || {
        store.startpage().with(|sp| {
            sp.dashboards
                .iter()
                .map(|d| (d.id.clone(), d.name.clone()))
                .collect::<Vec<_>>()
        })
    };
    let active_id = move || store.startpage().with(|sp| sp.active_dashboard().map(|d| d.id.clone()));

    view! {
        <nav class="dashboard-tabs">
            <For
                each=dashboards
                key=|(id, name)| (id.clone(), name.clone())
                children=move |(id, name)| {
                    let tab_id = id.clone();
                    let tab_class = move || {
                        if active_id().as_ref() == Some(&tab_id) { "dashboard-tab active" } else { "dashboard-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| store_select_dashboard(&store, id.clone())
                        >
                            {name}
                        </button>
                    }
                }
            />
        </nav>
    }
}
