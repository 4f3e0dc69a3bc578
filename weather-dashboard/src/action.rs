//! Dashboard actions
//!
//! Naming convention:
//! - Prefix is the area: `Dashboard*`, `Load*`, `Search*`, `Alert*`, `Cards*`
//! - `Did` marks results produced by async tasks

use crate::state::{CardLayout, WeatherRecord};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Lifecycle =====
    /// Dashboard is on screen: start the one-time load
    DashboardMount,

    /// Dashboard is being torn down: cancel the load, ignore late results
    DashboardUnmount,

    // ===== Load =====
    /// Result: summary loaded
    LoadDidComplete(Vec<WeatherRecord>),

    /// Result: summary could not be loaded
    LoadDidFail(String),

    /// Intent: try again after a failure
    LoadRetry,

    // ===== Search =====
    /// Keystrokes now edit the search term
    SearchFocus,

    /// Keystrokes go back to dashboard navigation
    SearchBlur,

    /// The search term is now this text
    SearchChange(String),

    // ===== Alert =====
    /// Hide the heat alert banner
    AlertDismiss,

    // ===== Cards =====
    /// Scroll the card grid by whole rows
    CardsScroll(i32),

    /// The grid was drawn with this geometry
    CardsLayout(CardLayout),

    /// Exit the application
    Quit,
}

impl dashboard_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::DashboardMount => "DashboardMount",
            Action::DashboardUnmount => "DashboardUnmount",
            Action::LoadDidComplete(_) => "LoadDidComplete",
            Action::LoadDidFail(_) => "LoadDidFail",
            Action::LoadRetry => "LoadRetry",
            Action::SearchFocus => "SearchFocus",
            Action::SearchBlur => "SearchBlur",
            Action::SearchChange(_) => "SearchChange",
            Action::AlertDismiss => "AlertDismiss",
            Action::CardsScroll(_) => "CardsScroll",
            Action::CardsLayout(_) => "CardsLayout",
            Action::Quit => "Quit",
        }
    }

    /// Concise log lines for data-heavy actions
    fn summary(&self) -> String {
        match self {
            Action::LoadDidComplete(records) => {
                format!("LoadDidComplete {{ records: {} }}", records.len())
            }
            Action::LoadDidFail(e) => {
                let msg = if e.chars().count() > 40 {
                    format!("{}...", e.chars().take(37).collect::<String>())
                } else {
                    e.clone()
                };
                format!("LoadDidFail({:?})", msg)
            }
            _ => format!("{:?}", self),
        }
    }
}
