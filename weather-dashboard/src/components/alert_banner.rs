use crossterm::event::KeyCode;
use dashboard_core::EventKind;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

/// One-line heat alert; `x` asks for it to be dismissed
#[derive(Default)]
pub struct AlertBanner;

pub struct AlertBannerProps<'a> {
    pub message: &'a str,
    pub is_focused: bool,
}

impl AlertBanner {
    pub const HEIGHT: u16 = 1;
}

impl Component<Action> for AlertBanner {
    type Props<'a> = AlertBannerProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: AlertBannerProps<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }
        match event {
            EventKind::Key(key) if key.code == KeyCode::Char('x') => vec![Action::AlertDismiss],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: AlertBannerProps<'_>) {
        let line = Line::from(vec![
            Span::styled(
                " ALERT ",
                Style::default().fg(Color::White).bg(Color::Red).bold(),
            ),
            Span::raw(" "),
            Span::styled(
                props.message,
                Style::default().fg(Color::Rgb(255, 150, 80)).bold(),
            ),
            Span::styled("  x", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" dismiss", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
