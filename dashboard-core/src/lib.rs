//! Dispatch runtime behind the weather dashboard
//!
//! State lives in a [`Store`] and changes only through its reducer, which
//! answers each [`Action`] with a [`DispatchResult`]: whether anything changed
//! and which effects to run. The [`Runtime`] owns the terminal loop. It turns
//! key presses into actions via a caller-supplied mapper, hands effects to a
//! handler that may start keyed tasks on the [`TaskManager`], and redraws only
//! after a change.
//!
//! Async results come back as ordinary actions, so the reducer sees them in
//! the same queue as user input.

pub mod action;
pub mod component;
pub mod input;
pub mod runtime;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use input::EventKind;
pub use runtime::{EventOutcome, Runtime};
pub use store::{DispatchResult, Store};
pub use tasks::TaskManager;
