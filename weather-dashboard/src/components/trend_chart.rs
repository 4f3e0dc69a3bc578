use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::transform::ChartSeries;

pub const CHART_TITLE: &str = "Temperature Trends";

/// Line chart of temperature per city, in record order
pub struct TrendChart;

pub struct TrendChartProps<'a> {
    pub series: &'a ChartSeries,
}

impl Component<Action> for TrendChart {
    type Props<'a> = TrendChartProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: TrendChartProps<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(Span::styled(
                format!(" {CHART_TITLE} "),
                Style::default().fg(Color::Cyan).bold(),
            ));

        let Some((lo, hi)) = props.series.value_range() else {
            frame.render_widget(
                Paragraph::new("No data")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        };

        // Pad so a flat series still gets a visible band
        let pad = ((hi - lo) * 0.1).max(1.0);
        let (y_min, y_max) = ((lo - pad).floor(), (hi + pad).ceil());
        let x_max = (props.series.len().saturating_sub(1) as f64).max(1.0);

        let points = props.series.points();
        let dataset = Dataset::default()
            .name("°C")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Rgb(255, 150, 80)))
            .data(&points);

        // Axis draws nothing with fewer than two labels
        let mut x_labels: Vec<Span> = props
            .series
            .labels
            .iter()
            .map(|label| Span::styled(label.as_str(), Style::default().fg(Color::Gray)))
            .collect();
        if x_labels.len() == 1 {
            x_labels.push(Span::raw(""));
        }
        let y_labels = [y_min, (y_min + y_max) / 2.0, y_max]
            .map(|v| Span::styled(format!("{v:.0}°"), Style::default().fg(Color::Gray)));

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            )
            .legend_position(None);

        frame.render_widget(chart, area);
    }
}
