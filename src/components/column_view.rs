//! Column View Component

use std::sync::Arc;

use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_mousedown, make_on_touchcancel, make_on_touchend, make_on_touchmove, make_on_touchstart,
    DndContext,
};
use startpage_core::domain::Column;
use startpage_core::{DragEntity, DropTarget};

use super::GroupView;

#[component]
pub fn ColumnView(column: Arc<Column>) -> impl IntoView {
    let dnd = expect_context::<DndContext>();
    let signals = dnd.signals;

    let entity = DragEntity::column(column.id.clone());
    let zone = DropTarget::column(column.id.clone());
    let on_mousedown = make_on_mousedown(dnd, entity.clone());
    let on_touchstart = make_on_touchstart(dnd, entity.clone());

    let column_class = move || {
        let dragging = if signals.is_dragging(&entity) { " dragging" } else { "" };
        format!("column{}{}", dragging, signals.zone_class(&zone))
    };

    let column_id = column.id.clone();
    let groups = column.groups.clone();

    view! {
        <section
            class=column_class
            style=format!("width: {}px;", column.width)
            data-drop-zone="column"
            data-column-id=column.id.to_string()
            data-drag-source=""
        >
            <header
                class="column-header"
                on:mousedown=on_mousedown
                on:touchstart=on_touchstart
                on:touchmove=make_on_touchmove(dnd)
                on:touchend=make_on_touchend(dnd)
                on:touchcancel=make_on_touchcancel(dnd)
            >
                <span class="drag-handle">"⠿"</span>
                <h2>{column.name.clone()}</h2>
            </header>
            <div class="column-groups">
                <For
                    each=move || groups.clone()
                    key=|group| (group.id.clone(), Arc::as_ptr(group) as usize)
                    children=move |group| view! { <GroupView column_id=column_id.clone() group=group /> }
                />
            </div>
        </section>
    }
}
