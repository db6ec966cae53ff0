//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== List actions =====
        Action::ListLoad(count) => {
            if count == 0 {
                return DispatchResult::unchanged();
            }
            state.list_loading = true;
            state.last_error = None;
            DispatchResult::changed_with(Effect::FetchList { count })
        }

        Action::ListDidLoad(entries) => {
            state.set_entries(entries);
            state.list_loading = false;
            DispatchResult::changed()
        }

        Action::ListDidError(error) => {
            state.record_error(&error);
            state.list_loading = false;
            DispatchResult::changed()
        }

        // ===== Entry actions =====
        Action::EntrySelect(name) => {
            if name.trim().is_empty() {
                return DispatchResult::unchanged();
            }
            state.detail_loading = true;
            state.last_error = None;
            DispatchResult::changed_with(Effect::FetchEntry { name })
        }

        Action::EntryDidLoad(detail) => {
            state.selection = Some(detail);
            state.detail_loading = false;
            DispatchResult::changed()
        }

        Action::EntryDidError { error, .. } => {
            state.record_error(&error);
            state.detail_loading = false;
            DispatchResult::changed()
        }

        Action::EntryClear => {
            if state.selection.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Search actions =====
        Action::SearchTextChange(text) => {
            if text == state.search_text {
                return DispatchResult::unchanged();
            }
            state.set_search_text(text);
            DispatchResult::changed()
        }

        // ===== Navigation =====
        Action::NavigateTo(screen) => {
            if screen == state.active_screen && state.selection.is_none() && state.cursor == 0 {
                return DispatchResult::unchanged();
            }
            state.active_screen = screen;
            state.selection = None;
            state.cursor = 0;
            DispatchResult::changed()
        }

        Action::CursorSelect(index) => {
            if index < state.visible_entries().len() && index != state.cursor {
                state.cursor = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntryDetail, EntrySummary, Screen, TypeSlot};
    use pretty_assertions::assert_eq;

    fn entries(names: &[&str]) -> Vec<EntrySummary> {
        names
            .iter()
            .map(|name| EntrySummary::new(*name, format!("https://pokeapi.co/api/v2/pokemon/{name}/")))
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
    fn test_list_load_sets_loading_and_clears_error() {
        let mut state = AppState {
            last_error: Some("Erreur: old".into()),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::ListLoad(150));

        assert!(result.changed);
        assert!(state.list_loading);
        assert!(state.is_loading());
        assert_eq!(state.last_error, None);
        assert_eq!(result.effects, vec![Effect::FetchList { count: 150 }]);
    }

    #[test]
    fn test_list_load_zero_is_ignored() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::ListLoad(0));
        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_list_did_load_replaces_entries_and_refilters() {
        let mut state = AppState::default();
        state.set_search_text("char".into());
        state.set_entries(entries(&["ditto"]));
        reducer(&mut state, Action::ListLoad(3));

        reducer(
            &mut state,
            Action::ListDidLoad(entries(&["pikachu", "bulbasaur", "charmander"])),
        );

        assert!(!state.list_loading);
        assert_eq!(state.entries.len(), 3);
        assert_eq!(state.filtered_entries, entries(&["charmander"]));
    }

    #[test]
    fn test_list_did_error_keeps_stale_entries() {
        let mut state = AppState::default();
        state.set_entries(entries(&["pikachu"]));
        reducer(&mut state, Action::ListLoad(10));

        reducer(&mut state, Action::ListDidError("request failed: offline".into()));

        assert!(!state.is_loading());
        assert_eq!(state.entries, entries(&["pikachu"]));
        assert_eq!(
            state.last_error.as_deref(),
            Some("Erreur: request failed: offline")
        );
    }

    #[test]
    fn test_entry_select_emits_fetch() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::EntrySelect("pikachu".into()));
        assert!(state.detail_loading);
        assert_eq!(
            result.effects,
            vec![Effect::FetchEntry {
                name: "pikachu".into()
            }]
        );
    }

    #[test]
    fn test_entry_select_blank_name_is_ignored() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::EntrySelect("  ".into()));
        assert!(!result.changed);
        assert!(!state.detail_loading);
    }

    #[test]
    fn test_entry_error_leaves_selection_unchanged() {
        let mut state = AppState {
            selection: Some(pikachu()),
            ..Default::default()
        };
        reducer(&mut state, Action::EntrySelect("missingno".into()));
        reducer(
            &mut state,
            Action::EntryDidError {
                name: "missingno".into(),
                error: "no entry named 'missingno'".into(),
            },
        );

        assert_eq!(state.selection, Some(pikachu()));
        assert!(!state.is_loading());
        assert_eq!(
            state.last_error.as_deref(),
            Some("Erreur: no entry named 'missingno'")
        );
    }

    #[test]
    fn test_entry_clear() {
        let mut state = AppState {
            selection: Some(pikachu()),
            ..Default::default()
        };
        assert!(reducer(&mut state, Action::EntryClear).changed);
        assert_eq!(state.selection, None);
        assert!(!reducer(&mut state, Action::EntryClear).changed);
    }

    #[test]
    fn test_navigate_deselects() {
        let mut state = AppState {
            selection: Some(pikachu()),
            cursor: 2,
            ..Default::default()
        };

        reducer(&mut state, Action::NavigateTo(Screen::Profile));

        assert_eq!(state.active_screen, Screen::Profile);
        assert_eq!(state.selection, None);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_navigate_to_current_screen_is_noop() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::NavigateTo(Screen::Home)).changed);

        state.cursor = 2;
        assert!(reducer(&mut state, Action::NavigateTo(Screen::Home)).changed);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_search_text_unchanged_is_noop() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::SearchTextChange(String::new())).changed);
        assert!(reducer(&mut state, Action::SearchTextChange("p".into())).changed);
    }

    #[test]
    fn test_cursor_select_bounds() {
        let mut state = AppState::default();
        state.set_entries(entries(&["pikachu", "bulbasaur"]));

        assert!(reducer(&mut state, Action::CursorSelect(1)).changed);
        assert_eq!(state.cursor, 1);
        assert!(!reducer(&mut state, Action::CursorSelect(1)).changed);
        assert!(!reducer(&mut state, Action::CursorSelect(5)).changed);
        assert_eq!(state.cursor, 1);
    }
}
