use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;

use super::{Component, ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::state::AppState;

/// Read-only summary of what has been loaded
#[derive(Default)]
pub struct ProfileView;

pub struct ProfileViewProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for ProfileView {
    type Props<'a> = ProfileViewProps<'a>;

    fn handle_event(
        &mut self,
        _event: &EventKind,
        _props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let label = Style::default().fg(TEXT_DIM);
        let value = Style::default().fg(ACCENT_TEAL);
        let search = if state.search_text.is_empty() {
            "-".to_string()
        } else {
            format!("\"{}\"", state.search_text)
        };
        let rows = [
            ("Pokémon chargés", state.entries.len().to_string()),
            ("Limite", state.list_limit.to_string()),
            ("Recherche", search),
            ("Résultats", state.filtered_entries.len().to_string()),
        ];
        let text = Text::from(
            rows.into_iter()
                .map(|(name, val)| {
                    Line::from(vec![
                        Span::styled(format!("{name}: "), label),
                        Span::styled(val, value),
                    ])
                })
                .collect::<Vec<_>>(),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Profil")
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(TEXT_DIM));
        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}
