//! Reducer - (state, action) -> (changed, effects)
//!
//! All state transitions live here:
//! - mount / unmount bracket the dashboard's lifetime
//! - load results are applied once, and only while mounted and loading
//! - search changes re-derive the filtered view from `all_records`
//! - dismissal clears the alert

use dashboard_core::DispatchResult;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{DashboardState, LoadPhase};
use crate::transform::scan_threshold;

pub fn reducer(state: &mut DashboardState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Lifecycle =====
        Action::DashboardMount => {
            if state.mounted {
                return DispatchResult::unchanged();
            }
            state.mounted = true;
            state.phase = LoadPhase::Loading;
            info!(source = %state.source_label, "Loading weather summary");
            DispatchResult::changed_with(Effect::LoadSummary)
        }

        Action::DashboardUnmount => {
            if !state.mounted {
                return DispatchResult::unchanged();
            }
            state.mounted = false;
            DispatchResult::changed_with(Effect::CancelLoad)
        }

        // ===== Load =====
        Action::LoadDidComplete(records) => {
            if !accepts_load_result(state) {
                debug!(records = records.len(), "Discarding late load result");
                return DispatchResult::unchanged();
            }
            info!(records = records.len(), "Weather summary loaded");
            state.all_records = records;
            state.refresh_view();
            state.alert_message = scan_threshold(&state.all_records, state.alert_threshold);
            if let Some(message) = &state.alert_message {
                info!(alert = %message, "Heat alert raised");
            }
            state.phase = LoadPhase::Loaded;
            DispatchResult::changed()
        }

        Action::LoadDidFail(message) => {
            if !accepts_load_result(state) {
                debug!(error = %message, "Discarding late load failure");
                return DispatchResult::unchanged();
            }
            warn!(error = %message, "Weather summary failed to load");
            state.phase = LoadPhase::Failed(message);
            DispatchResult::changed()
        }

        Action::LoadRetry => {
            if !state.mounted || !matches!(state.phase, LoadPhase::Failed(_)) {
                return DispatchResult::unchanged();
            }
            info!(source = %state.source_label, "Retrying weather summary load");
            state.phase = LoadPhase::Loading;
            DispatchResult::changed_with(Effect::LoadSummary)
        }

        // ===== Search =====
        Action::SearchFocus => {
            let changed = !state.search_focused;
            state.search_focused = true;
            changed_if(changed)
        }

        Action::SearchBlur => {
            let changed = state.search_focused;
            state.search_focused = false;
            changed_if(changed)
        }

        Action::SearchChange(term) => {
            if state.search_term == term {
                return DispatchResult::unchanged();
            }
            state.search_term = term;
            state.refresh_view();
            state.card_scroll = 0;
            DispatchResult::changed()
        }

        // ===== Alert =====
        Action::AlertDismiss => changed_if(state.alert_message.take().is_some()),

        // ===== Cards =====
        Action::CardsScroll(delta) => {
            let max = state.card_layout.max_scroll(state.filtered_records.len());
            let next = if delta.is_negative() {
                state.card_scroll.saturating_sub(delta.unsigned_abs() as usize)
            } else {
                state.card_scroll.saturating_add(delta as usize)
            };
            set_card_scroll(state, next.min(max))
        }

        Action::CardsLayout(layout) => {
            if state.card_layout == layout {
                return DispatchResult::unchanged();
            }
            debug!(columns = layout.columns, rows = layout.visible_rows, "Card grid resized");
            state.card_layout = layout;
            let max = layout.max_scroll(state.filtered_records.len());
            state.card_scroll = state.card_scroll.min(max);
            DispatchResult::changed()
        }

        // Handled by the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Load results only land on a mounted dashboard that is waiting for them
fn accepts_load_result(state: &DashboardState) -> bool {
    state.mounted && state.phase == LoadPhase::Loading
}

fn set_card_scroll(state: &mut DashboardState, row: usize) -> DispatchResult<Effect> {
    let changed = row != state.card_scroll;
    state.card_scroll = row;
    changed_if(changed)
}

fn changed_if(changed: bool) -> DispatchResult<Effect> {
    if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CardLayout, WeatherRecord};
    use crate::transform::ChartSeries;

    fn mounted_state() -> DashboardState {
        let mut state = DashboardState::default();
        reducer(&mut state, Action::DashboardMount);
        state
    }

    fn sample() -> Vec<WeatherRecord> {
        vec![
            WeatherRecord::new("Paris", 30.0),
            WeatherRecord::new("Prague", 10.0),
            WeatherRecord::new("Phoenix", 41.0),
            WeatherRecord::new("Cairo", 44.0),
        ]
    }

    #[test]
    fn test_mount_starts_loading_once() {
        let mut state = DashboardState::default();

        let result = reducer(&mut state, Action::DashboardMount);
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::LoadSummary]);
        assert!(state.mounted);
        assert_eq!(state.phase, LoadPhase::Loading);
        assert!(state.is_loading());

        let result = reducer(&mut state, Action::DashboardMount);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_load_complete_seeds_view_and_alert() {
        let mut state = mounted_state();

        let result = reducer(&mut state, Action::LoadDidComplete(sample()));

        assert!(result.changed);
        assert!(!state.is_loading());
        assert_eq!(state.phase, LoadPhase::Loaded);
        assert_eq!(state.all_records, sample());
        assert_eq!(state.filtered_records, sample());
        assert_eq!(state.chart_series, ChartSeries::from_records(&sample()));
        assert_eq!(
            state.alert_message.as_deref(),
            Some("High temperature alert: Phoenix is 41°C")
        );
    }

    #[test]
    fn test_load_without_hot_city_has_no_alert() {
        let mut state = mounted_state();
        reducer(
            &mut state,
            Action::LoadDidComplete(vec![
                WeatherRecord::new("A", 10.0),
                WeatherRecord::new("B", 20.0),
            ]),
        );
        assert_eq!(state.alert_message, None);
    }

    #[test]
    fn test_load_result_applies_only_once() {
        let mut state = mounted_state();
        reducer(&mut state, Action::LoadDidComplete(sample()));

        let result = reducer(
            &mut state,
            Action::LoadDidComplete(vec![WeatherRecord::new("Late", 99.0)]),
        );

        assert!(!result.changed);
        assert_eq!(state.all_records, sample());
    }

    #[test]
    fn test_late_result_after_unmount_is_noop() {
        let mut state = mounted_state();

        let result = reducer(&mut state, Action::DashboardUnmount);
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::CancelLoad]);

        let result = reducer(&mut state, Action::LoadDidComplete(sample()));
        assert!(!result.changed);
        assert!(state.all_records.is_empty());
        assert_eq!(state.alert_message, None);

        let result = reducer(&mut state, Action::LoadDidFail("late".into()));
        assert!(!result.changed);
        assert_eq!(state.failure(), None);
    }

    #[test]
    fn test_result_before_mount_is_ignored() {
        let mut state = DashboardState::default();
        let result = reducer(&mut state, Action::LoadDidComplete(sample()));
        assert!(!result.changed);
        assert_eq!(state.phase, LoadPhase::Idle);
    }

    #[test]
    fn test_load_failure_is_visible_and_retryable() {
        let mut state = mounted_state();

        let result = reducer(&mut state, Action::LoadDidFail("connection refused".into()));
        assert!(result.changed);
        assert!(!state.is_loading());
        assert_eq!(state.failure(), Some("connection refused"));

        let result = reducer(&mut state, Action::LoadRetry);
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::LoadSummary]);
        assert_eq!(state.phase, LoadPhase::Loading);

        reducer(&mut state, Action::LoadDidComplete(sample()));
        assert_eq!(state.phase, LoadPhase::Loaded);
    }

    #[test]
    fn test_retry_ignored_unless_failed() {
        let mut state = mounted_state();
        let result = reducer(&mut state, Action::LoadRetry);
        assert!(!result.changed);
        assert!(result.effects.is_empty());

        reducer(&mut state, Action::LoadDidComplete(sample()));
        let result = reducer(&mut state, Action::LoadRetry);
        assert!(!result.changed);
        assert_eq!(state.phase, LoadPhase::Loaded);
    }

    #[test]
    fn test_search_filters_from_all_records() {
        let mut state = mounted_state();
        reducer(&mut state, Action::LoadDidComplete(sample()));

        reducer(&mut state, Action::SearchChange("PR".into()));
        assert_eq!(state.search_term, "PR");
        assert_eq!(state.filtered_records, vec![WeatherRecord::new("Prague", 10.0)]);
        assert_eq!(state.chart_series.labels, vec!["Prague"]);
        assert_eq!(state.chart_series.values, vec![10.0]);

        // Widening the term goes back to the full set, not the previous subset
        reducer(&mut state, Action::SearchChange("p".into()));
        assert_eq!(state.filtered_records.len(), 3);

        reducer(&mut state, Action::SearchChange(String::new()));
        assert_eq!(state.filtered_records, sample());
        assert_eq!(state.all_records, sample());
    }

    #[test]
    fn test_same_search_twice_is_idempotent() {
        let mut state = mounted_state();
        reducer(&mut state, Action::LoadDidComplete(sample()));

        let first = reducer(&mut state, Action::SearchChange("a".into()));
        let filtered = state.filtered_records.clone();
        let series = state.chart_series.clone();

        let second = reducer(&mut state, Action::SearchChange("a".into()));
        assert!(first.changed);
        assert!(!second.changed);
        assert_eq!(state.filtered_records, filtered);
        assert_eq!(state.chart_series, series);
    }

    #[test]
    fn test_search_does_not_touch_alert() {
        let mut state = mounted_state();
        reducer(&mut state, Action::LoadDidComplete(sample()));

        reducer(&mut state, Action::SearchChange("paris".into()));
        assert_eq!(
            state.alert_message.as_deref(),
            Some("High temperature alert: Phoenix is 41°C")
        );
    }

    #[test]
    fn test_search_typed_while_loading_applies_on_load() {
        let mut state = mounted_state();
        reducer(&mut state, Action::SearchChange("cai".into()));
        assert!(state.filtered_records.is_empty());

        reducer(&mut state, Action::LoadDidComplete(sample()));
        assert_eq!(state.filtered_records, vec![WeatherRecord::new("Cairo", 44.0)]);
    }

    #[test]
    fn test_dismiss_clears_alert() {
        let mut state = mounted_state();
        reducer(&mut state, Action::LoadDidComplete(sample()));

        let result = reducer(&mut state, Action::AlertDismiss);
        assert!(result.changed);
        assert_eq!(state.alert_message, None);

        let result = reducer(&mut state, Action::AlertDismiss);
        assert!(!result.changed);
        assert_eq!(state.alert_message, None);
    }

    #[test]
    fn test_search_focus_toggles() {
        let mut state = DashboardState::default();
        assert!(reducer(&mut state, Action::SearchFocus).changed);
        assert!(state.search_focused);
        assert!(!reducer(&mut state, Action::SearchFocus).changed);
        assert!(reducer(&mut state, Action::SearchBlur).changed);
        assert!(!state.search_focused);
    }

    #[test]
    fn test_cards_scroll_is_clamped() {
        let mut state = mounted_state();
        reducer(&mut state, Action::LoadDidComplete(sample()));

        assert!(!reducer(&mut state, Action::CardsScroll(-1)).changed);
        assert_eq!(state.card_scroll, 0);

        reducer(&mut state, Action::CardsScroll(10));
        assert_eq!(state.card_scroll, 3);

        reducer(&mut state, Action::CardsScroll(-2));
        assert_eq!(state.card_scroll, 1);

        reducer(&mut state, Action::SearchChange("cairo".into()));
        assert_eq!(state.card_scroll, 0);
    }

    #[test]
    fn test_cards_scroll_counts_rows_not_cards() {
        let mut state = mounted_state();
        let nine = (0..9)
            .map(|i| WeatherRecord::new(format!("City{i}"), 10.0))
            .collect();
        reducer(&mut state, Action::LoadDidComplete(nine));
        reducer(
            &mut state,
            Action::CardsLayout(CardLayout {
                columns: 3,
                visible_rows: 2,
            }),
        );

        for _ in 0..10 {
            reducer(&mut state, Action::CardsScroll(1));
        }
        // 3 rows, 2 visible: one row of travel
        assert_eq!(state.card_scroll, 1);

        assert!(reducer(&mut state, Action::CardsScroll(-1)).changed);
        assert_eq!(state.card_scroll, 0);
    }

    #[test]
    fn test_cards_layout_reclamps_scroll() {
        let mut state = mounted_state();
        reducer(&mut state, Action::LoadDidComplete(sample()));
        reducer(&mut state, Action::CardsScroll(10));
        assert_eq!(state.card_scroll, 3);

        let wide = CardLayout {
            columns: 2,
            visible_rows: 1,
        };
        assert!(reducer(&mut state, Action::CardsLayout(wide)).changed);
        assert_eq!(state.card_scroll, 1);
        assert!(!reducer(&mut state, Action::CardsLayout(wide)).changed);
    }
}
