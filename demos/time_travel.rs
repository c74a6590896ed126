//! Time Travel
//!
//! This example exercises the whole-history control actions: rewinding to
//! the beginning with UndoAll and pruning either stack with ClearPast and
//! ClearFuture.
//!
//! Key concepts:
//! - UndoAll as iterated undo
//! - Redo replaying the rewound chronology in order
//! - Clearing stacks without touching the present
//!
//! Run with: cargo run --example time_travel

use retrace::{undoable, HistoryAction};

#[derive(Clone, Debug, PartialEq)]
enum LogAction {
    Append(&'static str),
}

fn main() {
    println!("=== Time Travel ===\n");

    let reducer = undoable(|action: Option<&LogAction>, state: Option<&String>| {
        let mut log = state.cloned().unwrap_or_default();
        if let Some(LogAction::Append(entry)) = action {
            if !log.is_empty() {
                log.push(' ');
            }
            log.push_str(entry);
        }
        log
    });

    let mut state = reducer.reduce(
        HistoryAction::Forward(LogAction::Append("one")),
        None,
    );
    for entry in ["two", "three", "four"] {
        state = reducer.reduce(
            HistoryAction::Forward(LogAction::Append(entry)),
            Some(state),
        );
    }
    println!("Built up: {:?}", state.present());

    state = reducer.reduce(HistoryAction::UndoAll, Some(state));
    println!(
        "After UndoAll: present = {:?}, redoable steps = {}",
        state.present(),
        state.future().len()
    );

    while state.can_redo() {
        state = reducer.reduce(HistoryAction::Redo, Some(state));
        println!("  redo -> {:?}", state.present());
    }

    state = reducer.reduce(HistoryAction::Undo, Some(state));
    state = reducer.reduce(HistoryAction::ClearFuture, Some(state));
    println!(
        "After Undo + ClearFuture: present = {:?}, can_redo = {}",
        state.present(),
        state.can_redo()
    );

    state = reducer.reduce(HistoryAction::ClearPast, Some(state));
    println!(
        "After ClearPast: present = {:?}, can_undo = {}",
        state.present(),
        state.can_undo()
    );

    println!("\n=== Example Complete ===");
}
