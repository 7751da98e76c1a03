use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::core::models::{Board, BoardIntent};
use crate::features::dnd::DragEvent;

#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: ReadSignal<Board>,
    pub dispatch: Callback<BoardIntent>,
    pub on_drag: Callback<DragEvent>,
}

pub fn use_board(config: &BoardConfig) -> BoardHook {
    let board = RwSignal::new(Board::with_config(config));
    let log_drag_events = config.log_drag_events;

    let dispatch = Callback::new(move |intent: BoardIntent| {
        let name = intent.as_str();
        // Title and content edits arrive on every keystroke
        let quiet = matches!(
            intent,
            BoardIntent::RenameColumn(..) | BoardIntent::UpdateTaskContent(..)
        );
        if !quiet {
            web_sys::console::log_1(&format!("[Board] {:?}", intent).into());
        }
        board.maybe_update(|board| {
            let changed = board.apply(intent);
            if !changed {
                web_sys::console::warn_1(&format!("[Board] {} ignored: unknown target", name).into());
            }
            changed
        });
    });

    let on_drag = Callback::new(move |event: DragEvent| {
        if log_drag_events {
            web_sys::console::log_1(&format!("[Board] drag event {:?}", event).into());
        }
        board.maybe_update(|board| apply_drag_event(board, event));
    });

    BoardHook {
        board: board.read_only(),
        dispatch,
        on_drag,
    }
}

/// Folds one drag event into the board. Returns whether anything observable
/// changed, which decides whether the board signal notifies.
///
/// A drop that reorders nothing still changed the board when it cleared the
/// active snapshot, otherwise the overlay would stay up.
pub fn apply_drag_event(board: &mut Board, event: DragEvent) -> bool {
    match event {
        DragEvent::Start { active } => board.on_drag_start(active),
        DragEvent::Over { active, over } => board.on_drag_over(active, over),
        DragEvent::End { active, over } => {
            let was_tracking = board.active().is_some();
            board.on_drag_end(active, over) || was_tracking
        }
        DragEvent::Cancel { .. } => board.on_drag_cancel(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{DragItem, Id};

    fn board_with_task() -> (Board, Id, Id) {
        let mut board = Board::new();
        let column = board.create_column();
        let task = board.create_task(column).unwrap();
        (board, column, task)
    }

    #[test]
    fn start_then_cancel_round_trips_the_snapshot() {
        let (mut board, _, task) = board_with_task();
        let active = DragItem::task(task);

        assert!(apply_drag_event(&mut board, DragEvent::Start { active }));
        assert!(board.active().is_some());
        assert!(apply_drag_event(&mut board, DragEvent::Cancel { active }));
        assert!(board.active().is_none());
    }

    #[test]
    fn task_drop_without_reorder_still_notifies() {
        let (mut board, column, task) = board_with_task();
        let active = DragItem::task(task);
        apply_drag_event(&mut board, DragEvent::Start { active });

        let over = Some(DragItem::column(column));
        assert!(apply_drag_event(&mut board, DragEvent::End { active, over }));
        assert!(board.active().is_none());
    }

    #[test]
    fn stray_end_is_quiet() {
        let (mut board, column, task) = board_with_task();
        let before = board.clone();

        let event = DragEvent::End {
            active: DragItem::task(task),
            over: Some(DragItem::column(column)),
        };
        assert!(!apply_drag_event(&mut board, event));
        assert_eq!(board, before);
    }

    #[test]
    fn column_drop_reorders() {
        let mut board = Board::new();
        let first = board.create_column();
        let second = board.create_column();
        let active = DragItem::column(first);
        apply_drag_event(&mut board, DragEvent::Start { active });

        let over = Some(DragItem::column(second));
        assert!(apply_drag_event(&mut board, DragEvent::End { active, over }));
        assert_eq!(board.column_ids(), vec![second, first]);
    }

    #[test]
    fn over_nothing_changes_nothing() {
        let (mut board, _, task) = board_with_task();
        let active = DragItem::task(task);
        apply_drag_event(&mut board, DragEvent::Start { active });
        assert!(!apply_drag_event(&mut board, DragEvent::Over { active, over: None }));
    }
}
