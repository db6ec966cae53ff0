//! Reducer flows through EffectStore and EffectStoreTestHarness
//!
//! Async completions are simulated with `complete_action`, so no network
//! is involved.

use tui_dispatch::testing::*;
use tui_dispatch::{assert_emitted, assert_not_emitted, EffectStore};
use pokedex::{
    action::Action,
    effect::Effect,
    reducer::reducer,
    state::{AppState, EntryDetail, EntrySummary, Screen, TypeSlot},
};

fn kanto() -> Vec<EntrySummary> {
    ["pikachu", "bulbasaur", "charmander"]
        .into_iter()
        .map(|name| EntrySummary::new(name, format!("https://pokeapi.co/api/v2/pokemon/{name}/")))
        .collect()
}

fn pikachu() -> EntryDetail {
    EntryDetail {
        id: 25,
        name: "pikachu".into(),
        height: "0.4".into(),
        weight: "6.0".into(),
        sprite_url: None,
        types: vec![TypeSlot {
            type_name: "electric".into(),
        }],
    }
}

#[test]
fn test_store_list_load() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    assert!(!store.state().is_loading());

    let result = store.dispatch(Action::ListLoad(150));
    assert!(result.changed);
    assert!(store.state().list_loading);
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(result.effects[0], Effect::FetchList { count: 150 }));

    store.dispatch(Action::ListDidLoad(kanto()));
    assert!(!store.state().is_loading());
    assert_eq!(store.state().entries.len(), 3);
}

#[test]
fn test_list_flow_with_harness() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::ListLoad(150));
    harness.assert_state(|s| s.is_loading());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::FetchList { .. }));

    harness.complete_action(Action::ListDidLoad(kanto()));
    let (changed, total) = harness.process_emitted();
    assert_eq!(total, 1);
    assert_eq!(changed, 1);

    harness.assert_state(|s| !s.is_loading());
    harness.assert_state(|s| s.filtered_entries == s.entries);
}

#[test]
fn test_search_scenario() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::ListDidLoad(kanto()));

    harness.dispatch_collect(Action::SearchTextChange("char".into()));

    harness.assert_state(|s| {
        s.filtered_entries.len() == 1 && s.filtered_entries[0].name == "charmander"
    });
    harness.assert_state(|s| s.entries.len() == 3);
}

#[test]
fn test_detail_not_found_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::EntrySelect("missingno".into()));
    harness.assert_state(|s| s.detail_loading);
    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| {
        matches!(e, Effect::FetchEntry { name } if name == "missingno")
    });

    harness.complete_action(Action::EntryDidError {
        name: "missingno".into(),
        error: "no entry named 'missingno'".into(),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.selection.is_none());
    harness.assert_state(|s| !s.is_loading());
    harness.assert_state(|s| {
        s.last_error.as_deref() == Some("Erreur: no entry named 'missingno'")
    });
}

#[test]
fn test_overlapping_fetches_keep_loading_until_both_settle() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_all([
        Action::ListLoad(150),
        Action::EntrySelect("pikachu".into()),
    ]);
    harness.complete_action(Action::ListDidLoad(kanto()));
    harness.process_emitted();
    harness.assert_state(|s| s.is_loading());

    harness.complete_action(Action::EntryDidLoad(pikachu()));
    harness.process_emitted();
    harness.assert_state(|s| !s.is_loading());
    harness.assert_state(|s| s.selection.as_ref().map(|d| d.id) == Some(25));
}

#[test]
fn test_navigate_while_selected() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::EntryDidLoad(pikachu()));

    harness.dispatch_collect(Action::NavigateTo(Screen::Profile));

    harness.assert_state(|s| s.selection.is_none());
    harness.assert_state(|s| s.active_screen == Screen::Profile);
}

#[test]
fn test_action_categories() {
    let did_load = Action::ListDidLoad(Vec::new());
    let entry_did = Action::EntryDidLoad(pikachu());

    assert_eq!(did_load.category(), Some("list_did"));
    assert!(did_load.is_list_did());
    assert!(entry_did.is_entry_did());
    assert_eq!(Action::Quit.category(), None);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![Action::ListLoad(150), Action::ListDidLoad(kanto())];

    assert_emitted!(actions, Action::ListLoad(_));
    assert_emitted!(actions, Action::ListDidLoad(_));
    assert_not_emitted!(actions, Action::ListDidError(_));
    assert_not_emitted!(actions, Action::Quit);
}

#[test]
fn test_effect_task_keys_are_per_kind() {
    let list = Effect::FetchList { count: 150 };
    let entry = Effect::FetchEntry {
        name: "pikachu".into(),
    };

    assert_eq!(list.task_key(), "catalog_list");
    assert_eq!(entry.task_key(), "catalog_entry");
    assert_eq!(
        entry.task_key(),
        Effect::FetchEntry {
            name: "bulbasaur".into()
        }
        .task_key()
    );
    assert_ne!(list.task_key(), entry.task_key());
}
