//! Terminal weather dashboard
//!
//! A single summary load fills a grid of city cards and a temperature trend
//! chart. Typing in the search field narrows both to matching cities, and a
//! one-shot heat alert names the first city above the configured threshold.
//!
//! Data flow follows the usual dispatch loop:
//! key event -> [`components::Dashboard`] -> [`action::Action`] ->
//! [`reducer::reducer`] -> [`effect::Effect`] -> task -> action.

pub mod action;
pub mod components;
pub mod config;
pub mod effect;
pub mod loader;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod transform;
