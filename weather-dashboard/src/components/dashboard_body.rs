use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{CardGrid, CardGridProps, Component, TrendChart, TrendChartProps};
use crate::action::Action;
use crate::state::DashboardState;

pub const LOADING_TEXT: &str = "Loading weather data...";
pub const ERROR_ICON: &str = "⚠";

/// Content between the search bar and the help bar
pub struct DashboardBody;

pub struct DashboardBodyProps<'a> {
    pub state: &'a DashboardState,
}

impl Component<Action> for DashboardBody {
    type Props<'a> = DashboardBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardBodyProps<'_>) {
        let state = props.state;
        match BodyView::from_state(state) {
            BodyView::Failed(message) => render_centered(
                frame,
                area,
                vec![
                    Line::from(vec![
                        Span::styled(ERROR_ICON, Style::default().fg(Color::Red)),
                        Span::styled(
                            " Failed to load weather data",
                            Style::default().fg(Color::Red).bold(),
                        ),
                    ]),
                    Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
                    Line::default(),
                    Line::from(vec![
                        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                        Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
                    ]),
                ],
            ),
            BodyView::Loading => render_centered(
                frame,
                area,
                vec![Line::from(Span::styled(
                    LOADING_TEXT,
                    Style::default().fg(Color::Gray).italic(),
                ))],
            ),
            BodyView::Empty => render_centered(
                frame,
                area,
                vec![Line::from(Span::styled(
                    "No weather data available",
                    Style::default().fg(Color::DarkGray),
                ))],
            ),
            BodyView::NoMatches(term) => render_centered(
                frame,
                area,
                vec![Line::from(Span::styled(
                    format!("No cities match \"{term}\""),
                    Style::default().fg(Color::DarkGray),
                ))],
            ),
            BodyView::Ready => {
                let [cards_area, chart_area] = split_ready(area);

                CardGrid.render(
                    frame,
                    cards_area,
                    CardGridProps {
                        records: &state.filtered_records,
                        threshold: state.alert_threshold,
                        scroll: state.card_scroll,
                    },
                );
                TrendChart.render(
                    frame,
                    chart_area,
                    TrendChartProps {
                        series: &state.chart_series,
                    },
                );
            }
        }
    }
}

impl DashboardBody {
    /// Where the card grid goes when records are showing
    pub fn cards_area(area: Rect) -> Rect {
        let [cards_area, _] = split_ready(area);
        cards_area
    }
}

fn split_ready(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area)
}

enum BodyView<'a> {
    Failed(&'a str),
    Loading,
    /// Loaded, but the source returned nothing
    Empty,
    NoMatches(&'a str),
    Ready,
}

impl<'a> BodyView<'a> {
    fn from_state(state: &'a DashboardState) -> Self {
        if let Some(message) = state.failure() {
            BodyView::Failed(message)
        } else if state.is_loading() {
            BodyView::Loading
        } else if state.all_records.is_empty() {
            BodyView::Empty
        } else if state.filtered_records.is_empty() {
            BodyView::NoMatches(&state.search_term)
        } else {
            BodyView::Ready
        }
    }
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}
