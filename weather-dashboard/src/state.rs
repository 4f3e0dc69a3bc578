//! Dashboard state - single source of truth
//!
//! Components receive `&DashboardState` as props; only the reducer mutates it.

use serde::Deserialize;

use crate::transform::{filter_records, ChartSeries};

/// Temperature above which the load-time alert fires (°C)
pub const DEFAULT_ALERT_THRESHOLD: f64 = 35.0;

/// One city's reported temperature
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    /// Degrees Celsius
    pub temperature: f64,
}

impl WeatherRecord {
    pub fn new(city: impl Into<String>, temperature: f64) -> Self {
        Self {
            city: city.into(),
            temperature,
        }
    }
}

/// Where the load currently stands
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadPhase {
    /// Not mounted yet
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The load failed; the message is shown to the user
    Failed(String),
}

/// Card grid geometry as last drawn
///
/// Scrolling is in whole rows, so the reducer needs this to know how far down
/// the grid can go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLayout {
    pub columns: usize,
    pub visible_rows: usize,
}

impl CardLayout {
    pub fn rows_for(&self, cards: usize) -> usize {
        cards.div_ceil(self.columns.max(1))
    }

    /// Largest first-row offset that still keeps the viewport full
    pub fn max_scroll(&self, cards: usize) -> usize {
        self.rows_for(cards).saturating_sub(self.visible_rows.max(1))
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            columns: 1,
            visible_rows: 1,
        }
    }
}

/// Everything the dashboard needs to render
#[derive(Clone, Debug)]
pub struct DashboardState {
    /// Records as received, in load order. Set once per mount.
    pub all_records: Vec<WeatherRecord>,

    /// Subsequence of `all_records` matching `search_term`
    pub filtered_records: Vec<WeatherRecord>,

    /// Chart projection of `filtered_records`
    pub chart_series: ChartSeries,

    /// Load-time heat alert, cleared by dismissal
    pub alert_message: Option<String>,

    pub phase: LoadPhase,

    /// Raw search text as typed
    pub search_term: String,

    /// Whether keystrokes go to the search field
    pub search_focused: bool,

    /// First visible card row
    pub card_scroll: usize,

    pub card_layout: CardLayout,

    /// False before mount and after teardown; load results are ignored then
    pub mounted: bool,

    pub alert_threshold: f64,

    /// Human-readable name of the data source, shown in the header
    pub source_label: String,
}

impl DashboardState {
    pub fn new(source_label: impl Into<String>, alert_threshold: f64) -> Self {
        Self {
            all_records: Vec::new(),
            filtered_records: Vec::new(),
            chart_series: ChartSeries::default(),
            alert_message: None,
            phase: LoadPhase::Idle,
            search_term: String::new(),
            search_focused: false,
            card_scroll: 0,
            card_layout: CardLayout::default(),
            mounted: false,
            alert_threshold,
            source_label: source_label.into(),
        }
    }

    /// True until the first load result arrives
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading)
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Recompute `filtered_records` and `chart_series` from `all_records`
    pub(crate) fn refresh_view(&mut self) {
        self.filtered_records = filter_records(&self.all_records, &self.search_term);
        self.chart_series = ChartSeries::from_records(&self.filtered_records);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new("demo", DEFAULT_ALERT_THRESHOLD)
    }
}
