use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::core::models::{Board, BoardIntent, Id};
use crate::features::dnd::provide_dnd_context;
use crate::features::kanban::hooks::{use_board, BoardHook};
use super::{ColumnContainer, DragOverlay};

/// The board controller view: owns the board state, installs the drag
/// layer and lays out the columns.
#[component]
pub fn KanbanBoard(#[prop(into)] config: BoardConfig) -> impl IntoView {
    let BoardHook { board, dispatch, on_drag } = use_board(&config);
    let dnd = provide_dnd_context(config.activation_distance, on_drag);

    let column_ids = Memo::new(move |_| board.with(Board::column_ids));

    let column_view = move |column_id: Id| {
        let column = Memo::new(move |_| board.with(|b| b.column(column_id).cloned()));
        let task_ids = Memo::new(move |_| board.with(|b| b.task_ids_in(column_id)));
        let tasks = Memo::new(move |_| board.with(|b| b.tasks_in(column_id)));
        view! {
            <ColumnContainer
                column_id=column_id
                column=column
                task_ids=task_ids
                tasks=tasks
                dispatch=dispatch
            />
        }
    };

    view! {
        <div class="kanban-page" class:dragging=move || dnd.active().is_some()>
            <div class="kanban-board">
                <div class="kanban-columns">
                    <For each=move || column_ids.get() key=|id| *id children=column_view />
                </div>
                <button class="add-column-btn" on:click=move |_| dispatch.run(BoardIntent::CreateColumn)>
                    <span class="add-icon">"+"</span>
                    "新增列"
                </button>
            </div>
            <DragOverlay board=board dispatch=dispatch />
        </div>
    }
}
