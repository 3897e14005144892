//! Group View Component

use std::sync::Arc;

use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_mousedown, make_on_touchcancel, make_on_touchend, make_on_touchmove, make_on_touchstart,
    DndContext,
};
use startpage_core::domain::{ColumnId, Group, GroupKind};
use startpage_core::{DragEntity, DropTarget};

use super::ItemRow;

#[component]
pub fn GroupView(column_id: ColumnId, group: Arc<Group>) -> impl IntoView {
    let dnd = expect_context::<DndContext>();
    let signals = dnd.signals;

    let entity = DragEntity::group(column_id.clone(), group.id.clone());
    let zone = DropTarget::group(column_id.clone(), group.id.clone());
    let on_mousedown = make_on_mousedown(dnd, entity.clone());
    let on_touchstart = make_on_touchstart(dnd, entity.clone());

    let kind_class = match group.kind {
        GroupKind::Links => "group links",
        GroupKind::Widget => "group widget",
    };
    let group_class = move || {
        let dragging = if signals.is_dragging(&entity) { " dragging" } else { "" };
        format!("{}{}{}", kind_class, dragging, signals.zone_class(&zone))
    };

    let group_id = group.id.clone();
    let items = group.items.clone();
    let is_empty = items.is_empty();
    let item_column_id = column_id.clone();

    view! {
        <section
            class=group_class
            data-drop-zone="group"
            data-column-id=column_id.to_string()
            data-group-id=group.id.to_string()
            data-drag-source=""
        >
            <header
                class="group-header"
                on:mousedown=on_mousedown
                on:touchstart=on_touchstart
                on:touchmove=make_on_touchmove(dnd)
                on:touchend=make_on_touchend(dnd)
                on:touchcancel=make_on_touchcancel(dnd)
            >
                <span class="drag-handle">"⠿"</span>
                <h3>{group.name.clone()}</h3>
            </header>
            <ul class="group-items">
                <For
                    each=move || items.clone()
                    key=|item| (item.id.clone(), Arc::as_ptr(item) as usize)
                    children=move |item| {
                        view! { <ItemRow column_id=item_column_id.clone() group_id=group_id.clone() item=item /> }
                    }
                />
            </ul>
            <Show when=move || is_empty>
                <p class="group-empty">"Drop items here"</p>
            </Show>
        </section>
    }
}
