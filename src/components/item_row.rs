//! Item Row Component
//!
//! One draggable row. The whole row is the drag handle; links swallow the
//! click that ends a drag.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_dragdrop::{
    make_on_click_guard, make_on_mousedown, make_on_touchcancel, make_on_touchend, make_on_touchmove,
    make_on_touchstart, DndContext,
};
use startpage_core::domain::{ColumnId, GroupId, Item, ItemBody};
use startpage_core::{DragEntity, DropTarget};

#[component]
pub fn ItemRow(column_id: ColumnId, group_id: GroupId, item: Arc<Item>) -> impl IntoView {
    let dnd = expect_context::<DndContext>();
    let signals = dnd.signals;

    let entity = DragEntity::item(column_id.clone(), group_id.clone(), item.id.clone());
    let zone = DropTarget::item(column_id.clone(), group_id.clone(), item.id.clone());
    let on_mousedown = make_on_mousedown(dnd, entity.clone());
    let on_touchstart = make_on_touchstart(dnd, entity.clone());

    let kind = item.kind().as_str();
    let row_class = move || {
        let dragging = if signals.is_dragging(&entity) { " dragging" } else { "" };
        format!("item {}{}{}", kind, dragging, signals.zone_class(&zone))
    };

    let body = match &item.body {
        ItemBody::Link { title, url, icon } => view! {
            <a href=url.clone() draggable="false" on:click=make_on_click_guard(dnd)>
                {icon.clone().map(|src| view! { <img class="item-icon" src=src alt="" draggable="false" /> })}
                <span class="item-title">{title.clone()}</span>
            </a>
        }
        .into_any(),
        ItemBody::Separator => view! { <hr class="item-separator" /> }.into_any(),
        ItemBody::Text { text } => view! { <span class="item-text">{text.clone()}</span> }.into_any(),
        ItemBody::ButtonHolder { buttons } => {
            let buttons = buttons.clone();
            view! {
                <div class="item-buttons">
                    {buttons
                        .into_iter()
                        .map(|b| view! { <button type="button" data-flow-id=b.flow_id>{b.label}</button> })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
        ItemBody::HomeyCapability { device_id, .. } => view! {
            <span class="item-capability" data-device-id=device_id.clone()>{item.label().to_string()}</span>
        }
        .into_any(),
        ItemBody::HomeyFlow { flow_id, name } => view! {
            <span class="item-flow" data-flow-id=flow_id.clone()>{name.clone()}</span>
        }
        .into_any(),
    };

    view! {
        <li
            class=row_class
            data-drop-zone="item"
            data-column-id=column_id.to_string()
            data-group-id=group_id.to_string()
            data-item-id=item.id.to_string()
            data-drag-source=""
            on:mousedown=on_mousedown
            on:touchstart=on_touchstart
            on:touchmove=make_on_touchmove(dnd)
            on:touchend=make_on_touchend(dnd)
            on:touchcancel=make_on_touchcancel(dnd)
        >
            {body}
        </li>
    }
}
