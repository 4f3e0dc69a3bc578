pub mod alert_banner;
pub mod card_grid;
pub mod dashboard;
pub mod dashboard_body;
pub mod help_bar;
pub mod search_bar;
pub mod trend_chart;
pub mod weather_card;

// Re-export core Component trait
pub use dashboard_core::Component;

pub use alert_banner::{AlertBanner, AlertBannerProps};
pub use card_grid::{CardGrid, CardGridProps};
pub use dashboard::{Dashboard, DashboardProps, TITLE};
pub use dashboard_body::{DashboardBody, DashboardBodyProps, LOADING_TEXT};
pub use help_bar::{HelpBar, HelpBarProps};
pub use search_bar::{SearchBar, SearchBarProps, PLACEHOLDER};
pub use trend_chart::{TrendChart, TrendChartProps, CHART_TITLE};
pub use weather_card::{temp_to_color, WeatherCard, WeatherCardProps};
