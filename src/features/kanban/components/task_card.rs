use leptos::prelude::*;
use leptos::{ev, html};
use crate::core::models::{BoardIntent, DragItem, DragKind, Id, Task};
use crate::features::dnd::use_dnd;
use crate::features::kanban::hooks::{use_card_state, ExitKey};

/// One task card: read-only text, or a textarea while editing.
///
/// With `overlay` set it renders the copy that follows the pointer during a
/// drag and ignores input.
#[component]
pub fn TaskCard(
    task_id: Id,
    #[prop(into)] task: Signal<Option<Task>>,
    dispatch: Callback<BoardIntent>,
    #[prop(optional)] overlay: bool,
) -> impl IntoView {
    let dnd = use_dnd();
    let state = use_card_state();
    let item = DragItem::task(task_id);
    let kind = DragKind::Task.as_str();

    let content = move || task.with(|t| t.as_ref().map(|t| t.content.clone()).unwrap_or_default());
    let is_dragging = Memo::new(move |_| !overlay && dnd.is_active(item));
    let is_editing = Memo::new(move |_| state.with(|s| s.edit.is_editing()));

    let textarea_ref = NodeRef::<html::Textarea>::new();
    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            if let Err(e) = textarea.focus() {
                web_sys::console::warn_1(&format!("[Task] failed to focus editor: {:?}", e).into());
            }
        }
    });

    let leave_edit = move || state.update(|s| *s = s.on_exit());

    let start_drag = move |ev: ev::PointerEvent| {
        if !overlay && state.get_untracked().edit.is_draggable() {
            dnd.press(item, &ev);
        }
    };

    let enter_edit = move |_: ev::MouseEvent| {
        if overlay || dnd.take_click_suppression() {
            return;
        }
        state.update(|s| *s = s.on_click(dnd.is_active(item)));
    };

    view! {
        {move || {
            if is_dragging.get() {
                view! {
                    <div
                        class="task-card task-card-placeholder"
                        data-dnd-kind=kind
                        data-dnd-id=task_id.to_string()
                    ></div>
                }
                .into_any()
            } else if is_editing.get() {
                view! {
                    <div class="task-card editing" data-dnd-kind=kind data-dnd-id=task_id.to_string()>
                        <textarea
                            class="task-content-input"
                            node_ref=textarea_ref
                            placeholder="请输入任务内容"
                            prop:value=content
                            on:input=move |ev| {
                                dispatch.run(BoardIntent::UpdateTaskContent(task_id, event_target_value(&ev)));
                            }
                            on:blur=move |_| leave_edit()
                            on:keydown=move |ev: ev::KeyboardEvent| {
                                if ExitKey::ShiftEnter.matches(&ev.key(), ev.shift_key()) {
                                    ev.prevent_default();
                                    leave_edit();
                                }
                            }
                        ></textarea>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div
                        class="task-card clickable"
                        class:overlay=overlay
                        data-dnd-kind=kind
                        data-dnd-id=task_id.to_string()
                        on:pointerdown=start_drag
                        on:click=enter_edit
                        on:mouseenter=move |_| state.update(|s| *s = s.on_hover(true))
                        on:mouseleave=move |_| state.update(|s| *s = s.on_hover(false))
                    >
                        <p class="task-content">{content}</p>
                        <Show when=move || !overlay && state.with(|s| s.shows_delete())>
                            <button
                                class="task-delete-btn"
                                title="Delete task"
                                on:click=move |e: ev::MouseEvent| {
                                    e.stop_propagation();
                                    dispatch.run(BoardIntent::DeleteTask(task_id));
                                }
                            >"🗑"</button>
                        </Show>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
