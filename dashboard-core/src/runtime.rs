//! The terminal loop
//!
//! One iteration: reduce every queued action, redraw if any of them changed
//! state, then wait for the next key press or task result. Actions are reduced
//! strictly in arrival order, one at a time.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::action::Action;
use crate::input::{EventKind, TerminalInput};
use crate::store::{Reducer, Store};
use crate::tasks::TaskManager;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What an input event amounts to
#[derive(Debug, PartialEq)]
pub enum EventOutcome<A> {
    Ignored,
    /// Nothing to reduce, but the screen is stale (resize)
    Redraw,
    Dispatch(Vec<A>),
}

impl<A> From<Vec<A>> for EventOutcome<A> {
    fn from(actions: Vec<A>) -> Self {
        if actions.is_empty() {
            EventOutcome::Ignored
        } else {
            EventOutcome::Dispatch(actions)
        }
    }
}

pub struct Runtime<S, A, E> {
    store: Store<S, A, E>,
    pending: VecDeque<A>,
    inbox: mpsc::UnboundedReceiver<A>,
    tasks: TaskManager<A>,
}

impl<S, A: Action, E> Runtime<S, A, E> {
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        let (inbox_tx, inbox) = mpsc::unbounded_channel();
        Self {
            store: Store::new(state, reducer),
            pending: VecDeque::new(),
            inbox,
            tasks: TaskManager::new(inbox_tx),
        }
    }

    /// Queue an action to be reduced when the loop starts
    pub fn enqueue(&mut self, action: A) {
        self.pending.push_back(action);
    }

    /// Drive the UI until `should_quit` matches an action or input closes
    ///
    /// The matching action is not reduced. Every task still running on exit
    /// is aborted.
    pub async fn run<B, R, M, Q, H>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: R,
        mut map_event: M,
        mut should_quit: Q,
        mut handle_effect: H,
    ) -> io::Result<()>
    where
        B: Backend,
        R: FnMut(&mut Frame, Rect, &S),
        M: FnMut(&EventKind, &S) -> EventOutcome<A>,
        Q: FnMut(&A) -> bool,
        H: FnMut(E, &mut TaskManager<A>),
    {
        let mut input = TerminalInput::start(INPUT_POLL_INTERVAL);
        let mut redraw = true;

        let outcome = loop {
            if self.drain(&mut should_quit, &mut handle_effect, &mut redraw) {
                break Ok(());
            }

            if redraw {
                let state = self.store.state();
                if let Err(e) = terminal.draw(|frame| render(frame, frame.area(), state)) {
                    break Err(e);
                }
                redraw = false;
            }

            tokio::select! {
                event = input.next() => {
                    let Some(event) = event else {
                        debug!("Terminal input closed");
                        break Ok(());
                    };
                    match map_event(&event, self.store.state()) {
                        EventOutcome::Ignored => {}
                        EventOutcome::Redraw => redraw = true,
                        EventOutcome::Dispatch(actions) => self.pending.extend(actions),
                    }
                }
                Some(action) = self.inbox.recv() => self.pending.push_back(action),
            }
        };

        drop(input);
        self.tasks.cancel_all();
        outcome
    }

    /// Reduce queued actions; true if one of them asked to quit
    fn drain<Q, H>(&mut self, should_quit: &mut Q, handle_effect: &mut H, redraw: &mut bool) -> bool
    where
        Q: FnMut(&A) -> bool,
        H: FnMut(E, &mut TaskManager<A>),
    {
        while let Some(action) = self.pending.pop_front() {
            if should_quit(&action) {
                debug!(action = action.name(), "Quit requested");
                return true;
            }
            trace!(action = %action.summary(), "Dispatching");
            let result = self.store.dispatch(action);
            *redraw |= result.changed;
            for effect in result.effects {
                handle_effect(effect, &mut self.tasks);
            }
        }
        false
    }
}
