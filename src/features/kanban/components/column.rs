use leptos::prelude::*;
use leptos::{ev, html};
use crate::core::models::{BoardIntent, Column, DragItem, DragKind, Id, Task};
use crate::features::dnd::use_dnd;
use crate::features::kanban::hooks::{use_edit_mode, ExitKey};
use super::TaskCard;

/// A column: header with task count, editable title and delete button,
/// then its tasks and an add-task footer.
///
/// The header is the drag handle; the whole column is a drop target.
#[component]
pub fn ColumnContainer(
    column_id: Id,
    #[prop(into)] column: Signal<Option<Column>>,
    #[prop(into)] task_ids: Signal<Vec<Id>>,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    dispatch: Callback<BoardIntent>,
    #[prop(optional)] overlay: bool,
) -> impl IntoView {
    let dnd = use_dnd();
    let edit = use_edit_mode();
    let item = DragItem::column(column_id);
    let kind = DragKind::Column.as_str();

    let title = move || column.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let is_dragging = Memo::new(move |_| !overlay && dnd.is_active(item));

    let input_ref = NodeRef::<html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                web_sys::console::warn_1(&format!("[Column] failed to focus title input: {:?}", e).into());
            }
        }
    });

    let start_drag = move |ev: ev::PointerEvent| {
        if !overlay && edit.get_untracked().is_draggable() {
            dnd.press(item, &ev);
        }
    };

    let enter_edit = move |_: ev::MouseEvent| {
        if overlay || dnd.take_click_suppression() {
            return;
        }
        edit.update(|state| *state = state.on_click(dnd.is_active(item)));
    };

    view! {
        <Show
            when=move || !is_dragging.get()
            fallback=move || view! {
                <div
                    class="kanban-column kanban-column-placeholder"
                    data-dnd-kind=kind
                    data-dnd-id=column_id.to_string()
                ></div>
            }
        >
            <div
                class="kanban-column"
                class:overlay=overlay
                data-dnd-kind=kind
                data-dnd-id=column_id.to_string()
            >
                <div class="column-header" on:pointerdown=start_drag on:click=enter_edit>
                    <div class="column-title">
                        <span class="task-count">{move || task_ids.with(Vec::len)}</span>
                        {move || {
                            if edit.get().is_editing() {
                                view! {
                                    <input
                                        class="column-title-input"
                                        node_ref=input_ref
                                        prop:value=title
                                        on:input=move |ev| {
                                            dispatch.run(BoardIntent::RenameColumn(column_id, event_target_value(&ev)));
                                        }
                                        on:blur=move |_| edit.update(|state| *state = state.on_blur())
                                        on:keydown=move |ev: ev::KeyboardEvent| {
                                            let (key, shift) = (ev.key(), ev.shift_key());
                                            edit.update(|state| *state = state.on_key(ExitKey::Enter, &key, shift));
                                        }
                                    />
                                }
                                .into_any()
                            } else {
                                view! { <h3>{title}</h3> }.into_any()
                            }
                        }}
                    </div>
                    <button
                        class="column-delete-btn"
                        title="Delete column"
                        on:click=move |e: ev::MouseEvent| {
                            e.stop_propagation();
                            if !overlay {
                                dispatch.run(BoardIntent::DeleteColumn(column_id));
                            }
                        }
                    >"🗑"</button>
                </div>
                <div class="column-content">
                    <For
                        each=move || task_ids.get()
                        key=|id| *id
                        children=move |task_id| {
                            let task = Signal::derive(move || {
                                tasks.with(|tasks| tasks.iter().find(|t| t.id == task_id).cloned())
                            });
                            view! { <TaskCard task_id=task_id task=task dispatch=dispatch overlay=overlay /> }
                        }
                    />
                </div>
                <button
                    class="add-task-btn"
                    on:click=move |_| {
                        if !overlay {
                            dispatch.run(BoardIntent::CreateTask(column_id));
                        }
                    }
                >"+ 新增任务"</button>
            </div>
        </Show>
    }
}
