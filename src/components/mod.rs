pub mod catalog_view;
pub mod entry_detail;
pub mod entry_list;
pub mod profile_view;
pub mod search_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use catalog_view::{CatalogView, CatalogViewProps};
pub use entry_detail::{EntryDetailView, EntryDetailViewProps};
pub use entry_list::{EntryList, EntryListProps};
pub use profile_view::{ProfileView, ProfileViewProps};
pub use search_bar::{SearchBar, SearchBarProps};

use ratatui::style::Color;

pub(crate) const BG_BASE: Color = Color::Rgb(12, 18, 28);
pub(crate) const BG_PANEL: Color = Color::Rgb(20, 32, 46);
pub(crate) const BG_INPUT: Color = Color::Rgb(30, 46, 62);
pub(crate) const BG_HIGHLIGHT: Color = Color::Rgb(28, 92, 110);
pub(crate) const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
pub(crate) const TEXT_ERROR: Color = Color::Rgb(232, 96, 88);
pub(crate) const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
pub(crate) const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);

/// "mr-mime" -> "Mr Mime"
pub fn display_name(name: &str) -> String {
    name_parts(name).join(" ")
}

/// Capitalized hyphen-separated parts of a catalog name
pub(crate) fn name_parts(name: &str) -> Vec<String> {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect()
}
