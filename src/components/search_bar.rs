use ratatui::{layout::Rect, style::Style, Frame};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::{Component, BG_INPUT, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;

pub const PLACEHOLDER: &str = "Rechercher un Pokémon...";

pub struct SearchBar {
    input: TextInput,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_props(query: &str, is_focused: bool) -> TextInputProps<'_, Action> {
        TextInputProps {
            value: query,
            placeholder: PLACEHOLDER,
            is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(BG_INPUT),
                    fg: Some(TEXT_MAIN),
                },
                placeholder_style: Some(Style::default().fg(TEXT_DIM)),
                cursor_style: None,
            },
            on_change: Action::SearchTextChange,
            on_submit: Action::SearchTextChange,
            on_cursor_move: Some(|_| Action::Render),
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let input_props = Self::input_props(props.query, true);
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let input_props = Self::input_props(props.query, props.is_focused);
        self.input.render(frame, area, input_props);
    }
}
