use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::EventKind;

use super::{display_name, Component, ACCENT_GOLD, ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::state::EntryDetail;

pub const BACK_LABEL: &str = "Retour";
pub const NO_SPRITE: &str = "(pas d'image)";

/// Detail view for the current selection
#[derive(Default)]
pub struct EntryDetailView;

pub struct EntryDetailViewProps<'a> {
    pub detail: &'a EntryDetail,
    pub is_focused: bool,
}

impl EntryDetailView {
    fn body(detail: &EntryDetail) -> Text<'static> {
        let label = Style::default().fg(TEXT_DIM);
        let value = Style::default().fg(TEXT_MAIN);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("ID: ", label),
                Span::styled(detail.id.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Taille: ", label),
                Span::styled(format!("{} m", detail.height), value),
            ]),
            Line::from(vec![
                Span::styled("Poids: ", label),
                Span::styled(format!("{} kg", detail.weight), value),
            ]),
            Line::from(vec![
                Span::styled("Sprite: ", label),
                Span::styled(
                    detail
                        .sprite_url
                        .clone()
                        .unwrap_or_else(|| NO_SPRITE.to_string()),
                    value,
                ),
            ]),
            Line::raw(""),
            Line::styled(
                "Types:",
                Style::default()
                    .fg(ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        lines.extend(
            detail
                .types
                .iter()
                .map(|slot| Line::styled(format!("• {}", display_name(&slot.type_name)), value)),
        );
        Text::from(lines)
    }
}

impl Component<Action> for EntryDetailView {
    type Props<'a> = EntryDetailViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                    Some(Action::EntryClear)
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border = if props.is_focused { ACCENT_TEAL } else { TEXT_DIM };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("← {BACK_LABEL}"))
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Name
            Constraint::Min(1),    // Fields
        ])
        .split(inner);

        let heading = Paragraph::new(Line::styled(
            display_name(&props.detail.name),
            Style::default()
                .fg(ACCENT_GOLD)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        let body = Paragraph::new(Self::body(props.detail)).wrap(Wrap { trim: false });
        frame.render_widget(body, chunks[1]);
    }
}
