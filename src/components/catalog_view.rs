use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::entry_list::LOADING_TEXT;
use super::{
    Component, EntryDetailView, EntryDetailViewProps, EntryList, EntryListProps, ProfileView,
    ProfileViewProps, SearchBar, SearchBarProps, ACCENT_GOLD, ACCENT_TEAL, BG_BASE, BG_PANEL,
    TEXT_DIM, TEXT_ERROR, TEXT_MAIN,
};
use crate::action::Action;
use crate::state::{AppState, Screen};

/// Props for CatalogView - read-only view of state
pub struct CatalogViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Root view: screen tabs, the active screen (or the detail view), status bar
pub struct CatalogView {
    list: EntryList,
    search: SearchBar,
    detail: EntryDetailView,
    profile: ProfileView,
    status_bar: StatusBar,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            list: EntryList::new(),
            search: SearchBar::new(),
            detail: EntryDetailView,
            profile: ProfileView,
            status_bar: StatusBar::new(),
        }
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    fn list_props(state: &AppState, is_focused: bool) -> EntryListProps<'_> {
        let highlight = match state.active_screen {
            Screen::Search => state.search_text.as_str(),
            Screen::Home | Screen::Profile => "",
        };
        EntryListProps {
            entries: state.visible_entries(),
            cursor: state.cursor,
            highlight,
            is_loading: state.is_loading(),
            error: state.last_error.as_deref(),
            is_focused,
        }
    }

    fn screen_key(code: KeyCode) -> Option<Screen> {
        match code {
            KeyCode::Char('1') => Some(Screen::Home),
            KeyCode::Char('2') | KeyCode::Char('/') => Some(Screen::Search),
            KeyCode::Char('3') => Some(Screen::Profile),
            _ => None,
        }
    }

    fn hints(state: &AppState) -> Vec<StatusBarHint<'static>> {
        if state.selection.is_some() {
            return vec![
                StatusBarHint::new("Esc", "Retour"),
                StatusBarHint::new("Tab", "Écran"),
                StatusBarHint::new("q", "Quitter"),
            ];
        }
        match state.active_screen {
            Screen::Home => vec![
                StatusBarHint::new("j/k", "Naviguer"),
                StatusBarHint::new("Enter", "Détails"),
                StatusBarHint::new("/", "Rechercher"),
                StatusBarHint::new("r", "Recharger"),
                StatusBarHint::new("Tab", "Écran"),
                StatusBarHint::new("q", "Quitter"),
            ],
            Screen::Search => vec![
                StatusBarHint::new("Up/Down", "Naviguer"),
                StatusBarHint::new("Enter", "Détails"),
                StatusBarHint::new("Esc", "Accueil"),
                StatusBarHint::new("Tab", "Écran"),
            ],
            Screen::Profile => vec![
                StatusBarHint::new("1/2/3", "Écran"),
                StatusBarHint::new("r", "Recharger"),
                StatusBarHint::new("q", "Quitter"),
            ],
        }
    }

    fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = Screen::ALL
            .iter()
            .map(|screen| Line::from(screen.label()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(state.active_screen.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Pokédex")
                    .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
                    .border_style(Style::default().fg(TEXT_DIM)),
            )
            .style(Style::default().fg(TEXT_DIM))
            .highlight_style(
                Style::default()
                    .fg(ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_status(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let (status, style) = match (&state.last_error, state.is_loading()) {
            (_, true) => (LOADING_TEXT.to_string(), Style::default().fg(ACCENT_GOLD)),
            (Some(error), false) => (error.clone(), Style::default().fg(TEXT_ERROR)),
            (None, false) => (String::new(), Style::default()),
        };
        let hints = Self::hints(state);
        let status_items = [StatusBarItem::span(Span::styled(status.as_str(), style))];

        <StatusBar as Component<Action>>::render(
            &mut self.status_bar,
            frame,
            area,
            StatusBarProps {
                left: StatusBarSection::hints(&hints).with_separator("  "),
                center: StatusBarSection::empty(),
                right: StatusBarSection::items(&status_items),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

impl Component<Action> for CatalogView {
    type Props<'a> = CatalogViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let state = props.state;
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.code == KeyCode::Tab {
            return vec![Action::NavigateTo(state.active_screen.next())];
        }

        if let Some(detail) = state.selection.as_ref() {
            if key.code == KeyCode::Char('q') {
                return vec![Action::Quit];
            }
            let props = EntryDetailViewProps {
                detail,
                is_focused: true,
            };
            return self.detail.handle_event(event, props).into_iter().collect();
        }

        match state.active_screen {
            Screen::Search => match key.code {
                KeyCode::Esc => vec![Action::NavigateTo(Screen::Home)],
                KeyCode::Up
                | KeyCode::Down
                | KeyCode::PageUp
                | KeyCode::PageDown
                | KeyCode::Enter => self
                    .list
                    .handle_event(event, Self::list_props(state, true))
                    .into_iter()
                    .collect(),
                _ => {
                    let props = SearchBarProps {
                        query: &state.search_text,
                        is_focused: true,
                    };
                    self.search.handle_event(event, props).into_iter().collect()
                }
            },
            Screen::Home | Screen::Profile => {
                if let Some(screen) = Self::screen_key(key.code) {
                    return vec![Action::NavigateTo(screen)];
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                    KeyCode::Char('r') | KeyCode::F(5) => vec![Action::ListLoad(state.list_limit)],
                    _ if state.active_screen == Screen::Home => self
                        .list
                        .handle_event(event, Self::list_props(state, true))
                        .into_iter()
                        .collect(),
                    _ => Vec::new(),
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        frame.render_widget(Block::default().style(Style::default().bg(BG_BASE)), area);

        let chunks = Layout::vertical([
            Constraint::Length(3), // Tabs
            Constraint::Min(1),    // Screen
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        Self::render_tabs(frame, chunks[0], state);

        if let Some(detail) = state.selection.as_ref() {
            let detail_props = EntryDetailViewProps {
                detail,
                is_focused: props.is_focused,
            };
            self.detail.render(frame, chunks[1], detail_props);
        } else {
            match state.active_screen {
                Screen::Home => {
                    self.list
                        .render(frame, chunks[1], Self::list_props(state, props.is_focused));
                }
                Screen::Search => {
                    let body = Layout::vertical([
                        Constraint::Length(3), // Input
                        Constraint::Min(1),    // Results
                    ])
                    .split(chunks[1]);
                    let search_props = SearchBarProps {
                        query: &state.search_text,
                        is_focused: props.is_focused,
                    };
                    self.search.render(frame, body[0], search_props);
                    self.list
                        .render(frame, body[1], Self::list_props(state, props.is_focused));
                }
                Screen::Profile => {
                    self.profile
                        .render(frame, chunks[1], ProfileViewProps { state });
                }
            }
        }

        self.render_status(frame, chunks[2], state);
    }
}
