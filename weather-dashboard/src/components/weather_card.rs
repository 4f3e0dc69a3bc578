use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherRecord;

/// A single city card: name and temperature
pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub record: &'a WeatherRecord,
    /// Above the alert threshold
    pub is_hot: bool,
}

impl WeatherCard {
    pub const HEIGHT: u16 = 4;
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherCardProps<'_>) {
        let border_color = if props.is_hot {
            Color::Red
        } else {
            Color::Rgb(80, 80, 100)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let record = props.record;
        let lines = vec![
            Line::from(Span::styled(
                record.city.as_str(),
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(Span::styled(
                format!("{:.1}°C", record.temperature),
                Style::default().fg(temp_to_color(record.temperature)).bold(),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}

/// Temperature band color
pub fn temp_to_color(celsius: f64) -> Color {
    match celsius.round() as i64 {
        ..=-10 => Color::Rgb(150, 200, 255),  // Very cold - light blue
        -9..=0 => Color::Rgb(100, 180, 255),  // Cold - blue
        1..=10 => Color::Rgb(100, 220, 200),  // Cool - cyan
        11..=20 => Color::Rgb(150, 230, 150), // Mild - green
        21..=30 => Color::Rgb(255, 220, 100), // Warm - yellow
        31..=40 => Color::Rgb(255, 150, 80),  // Hot - orange
        _ => Color::Rgb(255, 100, 100),       // Very hot - red
    }
}
