//! Property-based tests for the history transformer.
//!
//! These tests use proptest to verify the history laws hold across
//! many randomly generated action sequences.

use proptest::prelude::*;
use retrace::{undoable, Filter, HistoryAction, HistoryState, Undoable};

#[derive(Clone, Debug, PartialEq)]
enum CounterAction {
    Increase,
    Decrease,
    AddTen,
    Null,
}

fn counter_reducer(action: Option<&CounterAction>, state: Option<&i64>) -> i64 {
    let current = state.copied().unwrap_or(0);
    match action {
        Some(CounterAction::Increase) => current + 1,
        Some(CounterAction::Decrease) => current - 1,
        Some(CounterAction::AddTen) => current + 10,
        Some(CounterAction::Null) | None => current,
    }
}

fn counter() -> Undoable<i64, CounterAction, impl Fn(Option<&CounterAction>, Option<&i64>) -> i64>
{
    undoable(counter_reducer)
}

fn run<R>(
    reducer: &Undoable<i64, CounterAction, R>,
    actions: &[HistoryAction<CounterAction>],
) -> HistoryState<i64>
where
    R: Fn(Option<&CounterAction>, Option<&i64>) -> i64,
{
    actions.iter().fold(None, |state, action| {
        Some(reducer.reduce(action.clone(), state))
    })
    .unwrap_or_else(|| reducer.initial_state())
}

fn snapshot_count(state: &HistoryState<i64>) -> usize {
    state.past().len() + 1 + state.future().len()
}

prop_compose! {
    fn arbitrary_action()(variant in 0..8u8) -> HistoryAction<CounterAction> {
        match variant {
            0 => HistoryAction::Forward(CounterAction::Increase),
            1 => HistoryAction::Forward(CounterAction::Decrease),
            2 => HistoryAction::Forward(CounterAction::AddTen),
            3 => HistoryAction::Forward(CounterAction::Null),
            4 => HistoryAction::Undo,
            5 => HistoryAction::Redo,
            6 => HistoryAction::UndoAll,
            _ => HistoryAction::ClearFuture,
        }
    }
}

prop_compose! {
    fn arbitrary_effective_action()(variant in 0..3u8) -> HistoryAction<CounterAction> {
        match variant {
            0 => HistoryAction::Forward(CounterAction::Increase),
            1 => HistoryAction::Forward(CounterAction::Decrease),
            _ => HistoryAction::Forward(CounterAction::AddTen),
        }
    }
}

proptest! {
    #[test]
    fn undo_then_redo_restores_state(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let reducer = counter();
        let state = run(&reducer, &actions);
        prop_assume!(state.can_undo());

        let round_tripped = reducer.reduce(
            HistoryAction::Redo,
            Some(reducer.reduce(HistoryAction::Undo, Some(state.clone()))),
        );
        prop_assert_eq!(round_tripped, state);
    }

    #[test]
    fn redo_then_undo_restores_state(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let reducer = counter();
        let state = run(&reducer, &actions);
        prop_assume!(state.can_redo());

        let round_tripped = reducer.reduce(
            HistoryAction::Undo,
            Some(reducer.reduce(HistoryAction::Redo, Some(state.clone()))),
        );
        prop_assert_eq!(round_tripped, state);
    }

    #[test]
    fn past_grows_once_per_effective_action(
        actions in prop::collection::vec(arbitrary_effective_action(), 1..20)
    ) {
        let reducer = counter();
        let state = run(&reducer, &actions);

        prop_assert_eq!(state.past().len(), actions.len());
        prop_assert!(state.future().is_empty());
    }

    #[test]
    fn noop_actions_never_change_state(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let reducer = counter();
        let state = run(&reducer, &actions);

        let after = reducer.reduce(
            HistoryAction::Forward(CounterAction::Null),
            Some(state.clone()),
        );
        prop_assert_eq!(after, state);
    }

    #[test]
    fn recording_discards_any_future(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let reducer = counter();
        let state = run(&reducer, &actions);
        let past_before = state.past().len();

        let after = reducer.reduce(
            HistoryAction::Forward(CounterAction::Increase),
            Some(state),
        );
        prop_assert!(after.future().is_empty());
        prop_assert_eq!(after.past().len(), past_before + 1);
    }

    #[test]
    fn undo_and_redo_conserve_snapshots(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
        control in prop_oneof![
            Just(HistoryAction::Undo),
            Just(HistoryAction::Redo),
            Just(HistoryAction::UndoAll),
        ]
    ) {
        let reducer = counter();
        let state = run(&reducer, &actions);
        let count_before = snapshot_count(&state);

        let after = reducer.reduce(control, Some(state));
        prop_assert_eq!(snapshot_count(&after), count_before);
    }

    #[test]
    fn undo_all_equals_iterated_undo(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let reducer = counter();
        let state = run(&reducer, &actions);

        let mut iterated = state.clone();
        while iterated.can_undo() {
            iterated = reducer.reduce(HistoryAction::Undo, Some(iterated));
        }
        let all_at_once = reducer.reduce(HistoryAction::UndoAll, Some(state));
        prop_assert_eq!(all_at_once, iterated);
    }

    #[test]
    fn filtered_actions_leave_stacks_untouched(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let reducer = counter().with_filter(Filter::new(
            |action: &CounterAction, _: &i64, _| !matches!(action, CounterAction::Decrease),
        ));
        let state = run(&reducer, &actions);
        let present_before = *state.present();
        let past_before = state.past().clone();
        let future_before = state.future().clone();

        let after = reducer.reduce(
            HistoryAction::Forward(CounterAction::Decrease),
            Some(state),
        );
        prop_assert_eq!(*after.present(), present_before - 1);
        prop_assert_eq!(after.past(), &past_before);
        prop_assert_eq!(after.future(), &future_before);
    }

    #[test]
    fn clearing_never_touches_present(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
        clear in prop_oneof![
            Just(HistoryAction::ClearPast),
            Just(HistoryAction::ClearFuture),
        ]
    ) {
        let reducer = counter();
        let state = run(&reducer, &actions);
        let present_before = *state.present();

        let after = reducer.reduce(clear, Some(state));
        prop_assert_eq!(*after.present(), present_before);
    }

    #[test]
    fn history_roundtrip_serialization(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let reducer = counter();
        let state = run(&reducer, &actions);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: HistoryState<i64> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(deserialized, state);
    }
}
