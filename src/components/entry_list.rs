use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    highlight_substring, BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle,
};

use super::{
    name_parts, Component, ACCENT_GOLD, ACCENT_TEAL, BG_HIGHLIGHT, BG_PANEL, TEXT_DIM,
    TEXT_ERROR, TEXT_MAIN,
};
use crate::action::Action;
use crate::state::EntrySummary;

pub const LOADING_TEXT: &str = "Chargement...";
pub const EMPTY_TEXT: &str = "Aucun résultat";

/// Catalog list panel: loading indicator, else the entries.
///
/// With nothing to list, the error (if any) takes the list's place.
pub struct EntryList {
    list: SelectList,
}

impl Default for EntryList {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
        }
    }
}

pub struct EntryListProps<'a> {
    pub entries: &'a [EntrySummary],
    pub cursor: usize,
    /// Substring to highlight in names (empty for none)
    pub highlight: &'a str,
    pub is_loading: bool,
    pub error: Option<&'a str>,
    pub is_focused: bool,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// One line per entry. The query is matched against the name only, with
    /// hyphens kept so a match on the raw name lines up with the label.
    fn items(entries: &[EntrySummary], highlight: &str) -> Vec<Line<'static>> {
        let base = Style::default().fg(TEXT_MAIN);
        let dim = Style::default().fg(TEXT_DIM);
        let marked = Style::default()
            .fg(ACCENT_GOLD)
            .add_modifier(Modifier::BOLD);
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let prefix = Span::styled(format!("{:03} ", idx + 1), dim);
                let name = name_parts(&entry.name).join("-");
                let name_spans = if highlight.is_empty() {
                    vec![Span::styled(name, base)]
                } else {
                    highlight_substring(&name, highlight, base, marked).spans
                };
                Line::from(
                    std::iter::once(prefix)
                        .chain(name_spans)
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    fn list_style() -> SelectListStyle {
        SelectListStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: None,
                fg: Some(TEXT_MAIN),
            },
            selection: SelectionStyle {
                style: Some(
                    Style::default()
                        .bg(BG_HIGHLIGHT)
                        .fg(TEXT_MAIN)
                        .add_modifier(Modifier::BOLD),
                ),
                marker: None,
                disabled: false,
            },
            ..SelectListStyle::default()
        }
    }
}

impl Component<Action> for EntryList {
    type Props<'a> = EntryListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.is_loading || props.entries.is_empty() {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Enter {
                return props
                    .entries
                    .get(props.cursor)
                    .map(|entry| Action::EntrySelect(entry.name.clone()))
                    .into_iter()
                    .collect();
            }
        }

        let items = Self::items(props.entries, props.highlight);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.cursor.min(items.len().saturating_sub(1)),
            is_focused: true,
            style: Self::list_style(),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: Action::CursorSelect,
            render_item: &|item| item.clone(),
        };
        self.list.handle_event(event, list_props).into_iter().collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border = if props.is_focused { ACCENT_TEAL } else { TEXT_DIM };
        let title = format!("Pokédex ({})", props.entries.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let message = if props.is_loading {
            Some((LOADING_TEXT.to_string(), Style::default().fg(ACCENT_TEAL)))
        } else if let Some(error) = props.error.filter(|_| props.entries.is_empty()) {
            Some((error.to_string(), Style::default().fg(TEXT_ERROR)))
        } else if props.entries.is_empty() {
            Some((EMPTY_TEXT.to_string(), Style::default().fg(TEXT_DIM)))
        } else {
            None
        };

        if let Some((text, style)) = message {
            let paragraph = Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, inner);
            return;
        }

        let items = Self::items(props.entries, props.highlight);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.cursor.min(items.len().saturating_sub(1)),
            is_focused: props.is_focused,
            style: Self::list_style(),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: Action::CursorSelect,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, inner, list_props);
    }
}
