use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

/// Bottom line listing the keys that do something right now
pub struct HelpBar;

pub struct HelpBarProps {
    pub search_focused: bool,
    pub has_alert: bool,
    pub can_retry: bool,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: HelpBarProps) {
        let hints: Vec<(&str, &str)> = if props.search_focused {
            vec![("type", "filter"), ("^U", "clear"), ("enter/esc", "done")]
        } else {
            let mut hints = vec![("/", "search"), ("j/k", "scroll")];
            if props.has_alert {
                hints.push(("x", "dismiss"));
            }
            if props.can_retry {
                hints.push(("r", "retry"));
            }
            hints.push(("q", "quit"));
            hints
        };

        let spans = hints.into_iter().flat_map(|(key, label)| {
            [
                Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan).bold()),
                Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray)),
            ]
        });
        frame.render_widget(Paragraph::new(Line::from_iter(spans).centered()), area);
    }
}
