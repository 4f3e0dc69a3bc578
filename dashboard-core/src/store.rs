//! State container and reducer contract

use std::marker::PhantomData;

use crate::action::Action;

/// What a reducer reports back for one action
///
/// `changed` drives redraws; `effects` are work for the runtime's effect
/// handler, in the order they should run.
#[derive(Debug, PartialEq)]
pub struct DispatchResult<E> {
    pub changed: bool,
    pub effects: Vec<E>,
}

impl<E> DispatchResult<E> {
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: Vec::new(),
        }
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }
}

pub(crate) type Reducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Owns the state; the reducer is the only way to change it
pub struct Store<S, A, E> {
    state: S,
    reducer: Reducer<S, A, E>,
    _types: PhantomData<fn(A) -> E>,
}

impl<S, A: Action, E> Store<S, A, E> {
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _types: PhantomData,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        let name = action.name();
        let result = (self.reducer)(&mut self.state, action);
        tracing::debug!(
            action = name,
            changed = result.changed,
            effects = result.effects.len(),
            "Reduced"
        );
        result
    }
}
