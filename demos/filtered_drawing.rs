//! Filtered Recording
//!
//! This example models a drawing surface where every mouse movement updates
//! the state, but only completed strokes earn undo checkpoints. The filter
//! absorbs the high-frequency moves into the current present.
//!
//! Key concepts:
//! - Attaching a `Filter` to an undoable reducer
//! - Filtered actions changing state without clearing the future
//! - Undo stepping over absorbed changes
//!
//! Run with: cargo run --example filtered_drawing

use retrace::{undoable, Filter, Store};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Canvas {
    cursor: (i32, i32),
    strokes: usize,
}

#[derive(Clone, Debug, PartialEq)]
enum DrawAction {
    MoveCursor(i32, i32),
    FinishStroke,
}

fn main() {
    println!("=== Filtered Recording ===\n");

    let reducer = undoable(|action: Option<&DrawAction>, state: Option<&Canvas>| {
        let mut canvas = state.cloned().unwrap_or(Canvas {
            cursor: (0, 0),
            strokes: 0,
        });
        match action {
            Some(DrawAction::MoveCursor(x, y)) => canvas.cursor = (*x, *y),
            Some(DrawAction::FinishStroke) => canvas.strokes += 1,
            None => {}
        }
        canvas
    })
    .with_filter(Filter::new(|action: &DrawAction, _candidate: &Canvas, _state| {
        // Cursor movement is too noisy to checkpoint.
        !matches!(action, DrawAction::MoveCursor(_, _))
    }));

    let mut store = Store::new(reducer);

    store.apply(DrawAction::MoveCursor(3, 4));
    store.apply(DrawAction::MoveCursor(7, 2));
    let state = store.state();
    println!(
        "After two moves: cursor = {:?}, checkpoints = {}",
        state.present().cursor,
        state.past().len()
    );

    store.apply(DrawAction::FinishStroke);
    store.apply(DrawAction::MoveCursor(9, 9));
    store.apply(DrawAction::FinishStroke);
    let state = store.state();
    println!(
        "After two strokes: strokes = {}, checkpoints = {}",
        state.present().strokes,
        state.past().len()
    );

    store.undo();
    let state = store.state();
    println!(
        "After undo: strokes = {}, cursor = {:?} (moves were absorbed, not undone)",
        state.present().strokes,
        state.present().cursor
    );

    println!("\n=== Example Complete ===");
}
