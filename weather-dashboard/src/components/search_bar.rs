//! City search field
//!
//! Every edit emits the complete new term; the reducer re-filters on each one.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use dashboard_core::EventKind;

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Search by city...";

#[derive(Default)]
pub struct SearchBar;

pub struct SearchBarProps<'a> {
    pub term: &'a str,
    pub is_focused: bool,
}

impl SearchBar {
    pub const HEIGHT: u16 = 3;
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: SearchBarProps<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }
        let EventKind::Key(key) = event else {
            return vec![];
        };

        match key.code {
            KeyCode::Esc | KeyCode::Enter => vec![Action::SearchBlur],
            KeyCode::Backspace => {
                let mut term = props.term.to_string();
                if term.pop().is_some() {
                    vec![Action::SearchChange(term)]
                } else {
                    vec![]
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if props.term.is_empty() {
                    vec![]
                } else {
                    vec![Action::SearchChange(String::new())]
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut term = props.term.to_string();
                term.push(c);
                vec![Action::SearchChange(term)]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: SearchBarProps<'_>) {
        let border_color = if props.is_focused {
            Color::Cyan
        } else {
            Color::Rgb(80, 80, 100)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search ");
        let inner = block.inner(area);

        let line = if props.term.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(Span::styled(props.term, Style::default().fg(Color::White).bold()))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);

        if props.is_focused && inner.width > 0 && inner.height > 0 {
            let offset = (props.term.chars().count() as u16).min(inner.width.saturating_sub(1));
            frame.set_cursor_position((inner.x + offset, inner.y));
        }
    }
}
