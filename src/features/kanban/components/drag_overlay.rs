use leptos::portal::Portal;
use leptos::prelude::*;
use crate::core::models::{ActiveDrag, Board, BoardIntent};
use crate::features::dnd::use_dnd;
use super::{ColumnContainer, TaskCard};

/// Copy of the dragged column or task, portalled to `document.body` and
/// moved along with the pointer.
#[component]
pub fn DragOverlay(board: ReadSignal<Board>, dispatch: Callback<BoardIntent>) -> impl IntoView {
    let dnd = use_dnd();
    let active = Memo::new(move |_| board.with(|b| b.active().cloned()));

    let style = move || {
        dnd.frame()
            .map(|frame| frame.style())
            .unwrap_or_else(|| "display: none;".to_string())
    };

    view! {
        <Portal>
            <div class="drag-overlay" style=style>
                {move || {
                    active.get().map(|active| match active {
                        ActiveDrag::Column(column) => {
                            let column_id = column.id;
                            let task_ids = Memo::new(move |_| board.with(|b| b.task_ids_in(column_id)));
                            let tasks = Memo::new(move |_| board.with(|b| b.tasks_in(column_id)));
                            view! {
                                <ColumnContainer
                                    column_id=column_id
                                    column=Signal::stored(Some(column))
                                    task_ids=task_ids
                                    tasks=tasks
                                    dispatch=dispatch
                                    overlay=true
                                />
                            }
                            .into_any()
                        }
                        ActiveDrag::Task(task) => {
                            view! {
                                <TaskCard
                                    task_id=task.id
                                    task=Signal::stored(Some(task))
                                    dispatch=dispatch
                                    overlay=true
                                />
                            }
                            .into_any()
                        }
                    })
                }}
            </div>
        </Portal>
    }
}
