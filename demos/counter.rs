//! Undoable Counter
//!
//! This example walks a counter through dispatch, undo, and redo.
//!
//! Key concepts:
//! - Wrapping a plain reducer with `undoable`
//! - Inspecting past / present / future
//! - Undo and redo degrading to no-ops when history is exhausted
//!
//! Run with: cargo run --example counter

use retrace::{undoable, Store};

#[derive(Clone, Debug, PartialEq)]
enum CounterAction {
    Increase,
    Decrease,
}

fn main() {
    println!("=== Undoable Counter ===\n");

    let mut store = Store::new(undoable(
        |action: Option<&CounterAction>, state: Option<&i64>| {
            let current = state.copied().unwrap_or(0);
            match action {
                Some(CounterAction::Increase) => current + 1,
                Some(CounterAction::Decrease) => current - 1,
                None => current,
            }
        },
    ));

    println!("Initial present: {}", store.present());

    store.apply(CounterAction::Increase);
    store.apply(CounterAction::Increase);
    store.apply(CounterAction::Decrease);
    let present = *store.present();
    println!(
        "After +1, +1, -1: present = {}, past = {:?}",
        present,
        store.state().past()
    );

    store.undo();
    let present = *store.present();
    println!(
        "After undo: present = {}, future = {:?}",
        present,
        store.state().future()
    );

    store.redo();
    let present = *store.present();
    println!(
        "After redo: present = {}, future = {:?}",
        present,
        store.state().future()
    );

    // Exhaust the history: the extra undos do nothing.
    for _ in 0..10 {
        store.undo();
    }
    let present = *store.present();
    println!(
        "After ten undos: present = {}, can_undo = {}",
        present,
        store.state().can_undo()
    );

    println!("\n=== Example Complete ===");
}
