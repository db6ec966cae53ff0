//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

/// Number of entries fetched on startup and on refresh
pub const DEFAULT_LIST_LIMIT: usize = 150;

/// Prefix for every user-facing error message
pub const ERROR_PREFIX: &str = "Erreur";

/// Minimal list-view representation of an entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntrySummary {
    pub name: String,
    pub reference_url: String,
}

impl EntrySummary {
    pub fn new(name: impl Into<String>, reference_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference_url: reference_url.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TypeSlot {
    pub type_name: String,
}

/// Full record for a single entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntryDetail {
    pub id: u32,
    pub name: String,
    /// Metres, one decimal
    pub height: String,
    /// Kilograms, one decimal
    pub weight: String,
    pub sprite_url: Option<String>,
    /// Display order
    pub types: Vec<TypeSlot>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Screen {
    #[default]
    Home,
    Search,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Search, Screen::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Accueil",
            Screen::Search => "Recherche",
            Screen::Profile => "Profil",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Screen::Home => 0,
            Screen::Search => 1,
            Screen::Profile => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Screen::Home => Screen::Search,
            Screen::Search => Screen::Profile,
            Screen::Profile => Screen::Home,
        }
    }
}

/// Application state - everything the UI needs to render
///
/// `filtered_entries` is derived from `entries` and `search_text`; only
/// [`AppState::set_entries`] and [`AppState::set_search_text`] may touch it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    pub entries: Vec<EntrySummary>,
    pub filtered_entries: Vec<EntrySummary>,
    pub selection: Option<EntryDetail>,
    pub search_text: String,
    pub active_screen: Screen,

    pub list_loading: bool,
    pub detail_loading: bool,
    pub last_error: Option<String>,

    /// Count used when the list is (re)loaded
    pub list_limit: usize,
    /// Highlighted row in the visible list
    pub cursor: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_LIMIT)
    }
}

impl AppState {
    pub fn new(list_limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            filtered_entries: Vec::new(),
            selection: None,
            search_text: String::new(),
            active_screen: Screen::Home,
            list_loading: false,
            detail_loading: false,
            last_error: None,
            list_limit,
            cursor: 0,
        }
    }

    /// True while any catalog fetch is outstanding
    pub fn is_loading(&self) -> bool {
        self.list_loading || self.detail_loading
    }

    pub fn set_entries(&mut self, entries: Vec<EntrySummary>) {
        self.entries = entries;
        self.rebuild_filtered();
    }

    pub fn set_search_text(&mut self, text: String) {
        self.search_text = text;
        self.rebuild_filtered();
    }

    fn rebuild_filtered(&mut self) {
        self.filtered_entries = filter_entries(&self.entries, &self.search_text);
        self.clamp_cursor();
    }

    /// Rows shown by the list on the active screen
    pub fn visible_entries(&self) -> &[EntrySummary] {
        match self.active_screen {
            Screen::Home => &self.entries,
            Screen::Search => &self.filtered_entries,
            Screen::Profile => &[],
        }
    }

    pub fn entry_at_cursor(&self) -> Option<&EntrySummary> {
        self.visible_entries().get(self.cursor)
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_entries().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    pub fn record_error(&mut self, message: &str) {
        self.last_error = Some(format!("{ERROR_PREFIX}: {message}"));
    }
}

/// Entries whose name contains `text`, ignoring case, in their original order
pub fn filter_entries(entries: &[EntrySummary], text: &str) -> Vec<EntrySummary> {
    if text.is_empty() {
        return entries.to_vec();
    }
    let needle = text.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Catalog")
                .entry("entries", ron_string(&self.entries.len()))
                .entry("filtered", ron_string(&self.filtered_entries.len()))
                .entry(
                    "selection",
                    ron_string(&self.selection.as_ref().map(|detail| detail.name.clone())),
                )
                .entry("limit", ron_string(&self.list_limit)),
            DebugSection::new("Navigation")
                .entry("screen", ron_string(&self.active_screen))
                .entry("search", ron_string(&self.search_text))
                .entry("cursor", ron_string(&self.cursor)),
            DebugSection::new("Status")
                .entry("list_loading", ron_string(&self.list_loading))
                .entry("detail_loading", ron_string(&self.detail_loading))
                .entry("error", ron_string(&self.last_error)),
        ]
    }
}
