/// Moves the element at `from` to `to`, shifting everything in between by
/// one slot. This is a move, not a swap.
///
/// Returns `false` and leaves the slice untouched when either index is out
/// of range.
pub fn array_move<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if from > to {
        items[to..=from].rotate_right(1);
    }
    true
}
