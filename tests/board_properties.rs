use std::collections::HashSet;

use kanban_board::{Board, BoardIntent, DragItem, Id};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    CreateColumn,
    DeleteColumn(usize),
    RenameColumn(usize, String),
    CreateTask(usize),
    DeleteTask(usize),
    EditTask(usize, String),
    DragTaskOverTask(usize, usize),
    DragTaskOverColumn(usize, usize),
    DropColumn(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::CreateColumn),
        1 => (0usize..8).prop_map(Op::DeleteColumn),
        1 => ((0usize..8), "[a-z ]{0,6}").prop_map(|(i, s)| Op::RenameColumn(i, s)),
        4 => (0usize..8).prop_map(Op::CreateTask),
        1 => (0usize..16).prop_map(Op::DeleteTask),
        1 => ((0usize..16), "[a-z ]{0,6}").prop_map(|(i, s)| Op::EditTask(i, s)),
        2 => ((0usize..16), (0usize..16)).prop_map(|(a, b)| Op::DragTaskOverTask(a, b)),
        2 => ((0usize..16), (0usize..8)).prop_map(|(a, b)| Op::DragTaskOverColumn(a, b)),
        2 => ((0usize..8), (0usize..8)).prop_map(|(a, b)| Op::DropColumn(a, b)),
    ]
}

// Picks an existing id by index, or a fresh id nobody owns when the index
// runs past the end so unknown-target paths get exercised too.
fn pick(ids: &[Id], index: usize) -> Id {
    ids.get(index).copied().unwrap_or_else(Id::new_v4)
}

fn column_ids(board: &Board) -> Vec<Id> {
    board.column_ids()
}

fn task_ids(board: &Board) -> Vec<Id> {
    board.tasks().iter().map(|t| t.id).collect()
}

fn run(board: &mut Board, op: Op) {
    let columns = column_ids(board);
    let tasks = task_ids(board);
    match op {
        Op::CreateColumn => {
            board.apply(BoardIntent::CreateColumn);
        }
        Op::DeleteColumn(i) => {
            board.apply(BoardIntent::DeleteColumn(pick(&columns, i)));
        }
        Op::RenameColumn(i, title) => {
            board.apply(BoardIntent::RenameColumn(pick(&columns, i), title));
        }
        Op::CreateTask(i) => {
            board.apply(BoardIntent::CreateTask(pick(&columns, i)));
        }
        Op::DeleteTask(i) => {
            board.apply(BoardIntent::DeleteTask(pick(&tasks, i)));
        }
        Op::EditTask(i, content) => {
            board.apply(BoardIntent::UpdateTaskContent(pick(&tasks, i), content));
        }
        Op::DragTaskOverTask(a, b) => {
            let active = DragItem::task(pick(&tasks, a));
            board.on_drag_start(active);
            board.on_drag_over(active, Some(DragItem::task(pick(&tasks, b))));
            board.on_drag_end(active, Some(DragItem::task(pick(&tasks, b))));
        }
        Op::DragTaskOverColumn(a, b) => {
            let active = DragItem::task(pick(&tasks, a));
            board.on_drag_start(active);
            board.on_drag_over(active, Some(DragItem::column(pick(&columns, b))));
            board.on_drag_end(active, Some(DragItem::column(pick(&columns, b))));
        }
        Op::DropColumn(a, b) => {
            let active = DragItem::column(pick(&columns, a));
            board.on_drag_start(active);
            board.on_drag_end(active, Some(DragItem::column(pick(&columns, b))));
        }
    }
}

fn assert_tasks_reference_columns(board: &Board) {
    let columns: HashSet<Id> = column_ids(board).into_iter().collect();
    for task in board.tasks() {
        assert!(
            columns.contains(&task.column_id),
            "task {} points at missing column {}",
            task.id,
            task.column_id
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_task_references_an_existing_column(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut board = Board::new();
        for op in ops {
            run(&mut board, op);
            assert_tasks_reference_columns(&board);
            prop_assert!(board.active().is_none());
        }
    }

    #[test]
    fn ids_stay_unique(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut board = Board::new();
        for op in ops {
            run(&mut board, op);
        }
        let mut seen = HashSet::new();
        for id in column_ids(&board).into_iter().chain(task_ids(&board)) {
            prop_assert!(seen.insert(id), "duplicate id {}", id);
        }
    }

    #[test]
    fn deleting_a_column_removes_exactly_its_tasks(
        ops in prop::collection::vec(op_strategy(), 1..60),
        victim in 0usize..8,
    ) {
        let mut board = Board::new();
        for op in ops {
            run(&mut board, op);
        }
        let columns = column_ids(&board);
        prop_assume!(!columns.is_empty());
        let victim = columns[victim % columns.len()];

        let expected: Vec<Id> = board
            .tasks()
            .iter()
            .filter(|t| t.column_id != victim)
            .map(|t| t.id)
            .collect();
        prop_assert!(board.delete_column(victim));
        prop_assert_eq!(task_ids(&board), expected);
        prop_assert!(board.column(victim).is_none());
    }

    #[test]
    fn column_drop_is_an_array_move(count in 2usize..8, from in 0usize..8, to in 0usize..8) {
        let mut board = Board::new();
        for _ in 0..count {
            board.create_column();
        }
        let (from, to) = (from % count, to % count);
        let before = column_ids(&board);
        let moved = before[from];

        board.on_drag_start(DragItem::column(moved));
        board.on_drag_end(DragItem::column(moved), Some(DragItem::column(before[to])));
        let after = column_ids(&board);

        prop_assert_eq!(after[to], moved);
        let mut sorted_before = before.clone();
        let mut sorted_after = after.clone();
        sorted_before.sort();
        sorted_after.sort();
        prop_assert_eq!(sorted_before, sorted_after);

        let others_before: Vec<Id> = before.iter().copied().filter(|id| *id != moved).collect();
        let others_after: Vec<Id> = after.iter().copied().filter(|id| *id != moved).collect();
        prop_assert_eq!(others_before, others_after);
    }

    #[test]
    fn same_value_edits_do_not_reorder(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut board = Board::new();
        for op in ops {
            run(&mut board, op);
        }
        let snapshot = board.clone();
        for column in snapshot.columns() {
            board.rename_column(column.id, column.title.clone());
        }
        for task in snapshot.tasks() {
            board.update_task_content(task.id, task.content.clone());
        }
        prop_assert_eq!(board, snapshot);
    }
}

#[test]
fn two_tasks_then_delete_column_empties_the_board() {
    let mut board = Board::new();
    let column = board.create_column();
    assert_eq!(board.columns()[0].title, "列 1");

    board.apply(BoardIntent::CreateTask(column));
    board.apply(BoardIntent::CreateTask(column));
    let contents: Vec<&str> = board.tasks().iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["Task 1", "Task 2"]);

    board.apply(BoardIntent::DeleteColumn(column));
    assert!(board.columns().is_empty());
    assert!(board.tasks().is_empty());
}

#[test]
fn dragging_a_task_across_columns_and_back() {
    let mut board = Board::new();
    let todo = board.create_column();
    let done = board.create_column();
    let a = board.create_task(todo).unwrap();
    let b = board.create_task(done).unwrap();
    let c = board.create_task(done).unwrap();

    // Hover b in the done column: a joins done right where b was.
    let active = DragItem::task(a);
    board.on_drag_start(active);
    assert!(board.on_drag_over(active, Some(DragItem::task(b))));
    assert_eq!(board.task_ids_in(done), vec![b, a, c]);
    assert!(board.task_ids_in(todo).is_empty());

    // Then over the empty todo column: a goes home, order untouched.
    assert!(board.on_drag_over(active, Some(DragItem::column(todo))));
    assert_eq!(task_ids(&board), vec![b, a, c]);
    assert_eq!(board.task_ids_in(todo), vec![a]);

    assert!(!board.on_drag_end(active, Some(DragItem::column(todo))));
    assert!(board.active().is_none());
    assert_eq!(board.task_count(todo), 1);
    assert_eq!(board.task_count(done), 2);
}
