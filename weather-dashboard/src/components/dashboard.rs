//! Dashboard root component
//!
//! Owns the screen layout and routes keys: while the search field has focus it
//! gets every key except Ctrl+C; otherwise the dashboard handles navigation.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
};
use dashboard_core::EventKind;

use super::{
    AlertBanner, AlertBannerProps, CardGrid, Component, DashboardBody, DashboardBodyProps,
    HelpBar, HelpBarProps, SearchBar, SearchBarProps,
};
use crate::action::Action;
use crate::state::{CardLayout, DashboardState};

pub const TITLE: &str = "Real-Time Weather Dashboard";

pub struct DashboardProps<'a> {
    pub state: &'a DashboardState,
}

#[derive(Default)]
pub struct Dashboard {
    search: SearchBar,
    alert: AlertBanner,
    /// Card grid geometry from the last frame
    cards: Option<CardLayout>,
}

impl Dashboard {
    /// Scroll, first reporting the drawn grid geometry if state has a stale one
    fn scroll(&self, state: &DashboardState, delta: i32) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if let Some(layout) = self.cards.filter(|layout| *layout != state.card_layout) {
            actions.push(Action::CardsLayout(layout));
        }
        actions.push(Action::CardsScroll(delta));
        actions
    }
}

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: DashboardProps<'_>) -> Vec<Action> {
        let state = props.state;
        let EventKind::Key(key) = event else {
            return vec![];
        };

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Action::DashboardUnmount, Action::Quit];
        }

        if state.search_focused {
            return self.search.handle_event(
                event,
                SearchBarProps {
                    term: &state.search_term,
                    is_focused: true,
                },
            );
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::DashboardUnmount, Action::Quit],
            KeyCode::Char('/') => vec![Action::SearchFocus],
            KeyCode::Char('x') => match state.alert_message.as_deref() {
                Some(message) => self.alert.handle_event(
                    event,
                    AlertBannerProps {
                        message,
                        is_focused: true,
                    },
                ),
                None => vec![],
            },
            KeyCode::Char('j') | KeyCode::Down => self.scroll(state, 1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll(state, -1),
            KeyCode::Char('r') if state.failure().is_some() => vec![Action::LoadRetry],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardProps<'_>) {
        let state = props.state;

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" {TITLE} "))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center)
            .title_bottom(format!(" {} ", state.source_label));

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let alert_height = if state.alert_message.is_some() {
            AlertBanner::HEIGHT
        } else {
            0
        };
        let [search_area, alert_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(SearchBar::HEIGHT),
            Constraint::Length(alert_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.search.render(
            frame,
            search_area,
            SearchBarProps {
                term: &state.search_term,
                is_focused: state.search_focused,
            },
        );

        if let Some(message) = state.alert_message.as_deref() {
            self.alert.render(
                frame,
                alert_area,
                AlertBannerProps {
                    message,
                    is_focused: !state.search_focused,
                },
            );
        }

        DashboardBody.render(frame, body_area, DashboardBodyProps { state });
        self.cards = Some(CardGrid::layout_for(DashboardBody::cards_area(body_area)));

        HelpBar.render(
            frame,
            help_area,
            HelpBarProps {
                search_focused: state.search_focused,
                has_alert: state.alert_message.is_some(),
                can_retry: state.failure().is_some(),
            },
        );
    }
}
