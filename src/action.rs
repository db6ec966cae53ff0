//! Actions: user intents plus the results of catalog fetches

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{EntryDetail, EntrySummary, Screen};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== List category =====
    /// Intent: fetch the first `n` entries (triggers async task)
    ListLoad(usize),

    /// Result: summary list fetched
    ListDidLoad(Vec<EntrySummary>),

    /// Result: summary list fetch failed
    ListDidError(String),

    // ===== Entry category =====
    /// Intent: fetch and show the detail of one entry by name
    EntrySelect(String),

    /// Result: detail fetched
    EntryDidLoad(EntryDetail),

    /// Result: detail fetch failed
    EntryDidError { name: String, error: String },

    /// Intent: leave the detail view
    EntryClear,

    // ===== Search category =====
    /// Intent: search text changed
    SearchTextChange(String),

    // ===== Navigate category =====
    /// Intent: switch screen (always deselects)
    NavigateTo(Screen),

    // ===== Cursor category =====
    /// Move the list highlight (by index into the visible list)
    CursorSelect(usize),

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement in the search input)
    Render,

    Quit,
}
