//! Responsive grid of city cards
//!
//! One column below 60 cells, two below 100, three otherwise. `scroll` is the
//! first visible row; the reducer clamps it against [`CardGrid::layout_for`].

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{Component, WeatherCard, WeatherCardProps};
use crate::action::Action;
use crate::state::{CardLayout, WeatherRecord};

pub struct CardGrid;

pub struct CardGridProps<'a> {
    pub records: &'a [WeatherRecord],
    pub threshold: f64,
    pub scroll: usize,
}

impl CardGrid {
    pub fn columns_for_width(width: u16) -> usize {
        match width {
            0..60 => 1,
            60..100 => 2,
            _ => 3,
        }
    }

    /// Geometry of a grid drawn into `area`
    pub fn layout_for(area: Rect) -> CardLayout {
        CardLayout {
            columns: Self::columns_for_width(area.width),
            visible_rows: usize::from(area.height / WeatherCard::HEIGHT),
        }
    }
}

impl Component<Action> for CardGrid {
    type Props<'a> = CardGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: CardGridProps<'_>) {
        if props.records.is_empty() || area.height < WeatherCard::HEIGHT {
            return;
        }

        let layout = Self::layout_for(area);
        let CardLayout {
            columns,
            visible_rows,
        } = layout;
        let total_rows = layout.rows_for(props.records.len());
        let first_row = props.scroll.min(layout.max_scroll(props.records.len()));

        let row_areas =
            Layout::vertical(vec![Constraint::Length(WeatherCard::HEIGHT); visible_rows])
                .split(area);

        for (row_area, chunk) in row_areas
            .iter()
            .zip(props.records.chunks(columns).skip(first_row))
        {
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);
            for (cell, record) in cells.iter().zip(chunk) {
                WeatherCard.render(
                    frame,
                    *cell,
                    WeatherCardProps {
                        record,
                        is_hot: record.temperature > props.threshold,
                    },
                );
            }
        }

        let hidden_below = total_rows.saturating_sub(first_row + visible_rows);
        if first_row > 0 || hidden_below > 0 {
            let last_row = (first_row + visible_rows).min(total_rows);
            let marker = format!(" rows {}-{} of {} ", first_row + 1, last_row, total_rows);
            let marker_area = Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(Line::from(marker).right_aligned())
                    .style(Style::default().fg(Color::DarkGray)),
                marker_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::testing::*;

    fn records(n: usize) -> Vec<WeatherRecord> {
        (0..n)
            .map(|i| WeatherRecord::new(format!("City{i}"), 10.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_columns_by_width() {
        assert_eq!(CardGrid::columns_for_width(40), 1);
        assert_eq!(CardGrid::columns_for_width(80), 2);
        assert_eq!(CardGrid::columns_for_width(120), 3);
    }

    #[test]
    fn test_layout_for_area() {
        let layout = CardGrid::layout_for(Rect::new(0, 0, 120, 9));
        assert_eq!(
            layout,
            CardLayout {
                columns: 3,
                visible_rows: 2,
            }
        );
        assert_eq!(layout.max_scroll(9), 1);
    }

    #[test]
    fn test_renders_all_when_room() {
        let records = records(3);
        let mut render = RenderHarness::new(120, 8);
        let output = render.render_to_string_plain(|frame| {
            CardGrid.render(
                frame,
                frame.area(),
                CardGridProps {
                    records: &records,
                    threshold: 35.0,
                    scroll: 0,
                },
            );
        });
        for city in ["City0", "City1", "City2"] {
            assert!(output.contains(city), "missing {city}");
        }
    }

    #[test]
    fn test_scroll_skips_rows() {
        let records = records(4);
        let mut render = RenderHarness::new(40, 8);
        let output = render.render_to_string_plain(|frame| {
            CardGrid.render(
                frame,
                frame.area(),
                CardGridProps {
                    records: &records,
                    threshold: 35.0,
                    scroll: 1,
                },
            );
        });
        assert!(!output.contains("City0"));
        assert!(output.contains("City1"));
        assert!(output.contains("City2"));
    }

    #[test]
    fn test_scroll_clamped_to_last_page() {
        let records = records(4);
        let mut render = RenderHarness::new(40, 8);
        let output = render.render_to_string_plain(|frame| {
            CardGrid.render(
                frame,
                frame.area(),
                CardGridProps {
                    records: &records,
                    threshold: 35.0,
                    scroll: 99,
                },
            );
        });
        assert!(output.contains("City2"));
        assert!(output.contains("City3"));
    }
}
