//! Filter form session
//!
//! A session owns the form state and feeds it actions. The synopsis is
//! fetched once per session; its outcome arrives as an ordinary action.
//! Outcomes delivered through a [`StoreHandle`] after the session has been
//! dropped are discarded.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use log::debug;
use filter_builder_core::{reduce, FilterAction, FilterState, SynopsisResponse};

use crate::auth::TokenProvider;
use crate::synopsis::SynopsisClient;

/// Owner of one form's state
#[derive(Debug, Default)]
pub struct FormSession {
    store: Arc<Mutex<FilterState>>,
}

/// Weak reference to a session's state
#[derive(Debug, Clone)]
pub struct StoreHandle(Weak<Mutex<FilterState>>);

fn lock(store: &Mutex<FilterState>) -> MutexGuard<'_, FilterState> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

fn apply(store: &Mutex<FilterState>, action: FilterAction) {
    debug!("Dispatching {}", action.kind());
    let mut state = lock(store);
    let current = std::mem::take(&mut *state);
    *state = reduce(current, action);
}

impl FormSession {
    /// Start a session with a fresh form state
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing state
    pub fn with_state(state: FilterState) -> Self {
        Self {
            store: Arc::new(Mutex::new(state)),
        }
    }

    /// Weak handle for delivering actions that may outlive the session
    pub fn handle(&self) -> StoreHandle {
        StoreHandle(Arc::downgrade(&self.store))
    }

    /// Apply an action to the form state
    pub fn dispatch(&self, action: FilterAction) {
        apply(&self.store, action);
    }

    /// Snapshot of the current form state
    pub fn state(&self) -> FilterState {
        lock(&self.store).clone()
    }

    /// Fetch the synopsis and dispatch the outcome
    pub async fn load_synopsis<T: TokenProvider>(&self, client: &SynopsisClient, tokens: &T) {
        let action = fetch_action(client, tokens).await;
        self.dispatch(action);
    }
}

impl StoreHandle {
    /// Apply an action if the session still exists.
    ///
    /// Returns false when the session is gone and the action was dropped.
    pub fn deliver(&self, action: FilterAction) -> bool {
        match self.0.upgrade() {
            Some(store) => {
                apply(&store, action);
                true
            }
            None => {
                debug!("Session closed, discarding {}", action.kind());
                false
            }
        }
    }
}

/// Fetch the synopsis and translate the outcome into an action.
///
/// Data becomes `SYNOPSIS_RECEIVED`; a structured error body, a fetch
/// failure, or a missing token becomes `SYNOPSIS_ERROR_RECEIVED`.
pub async fn fetch_action<T: TokenProvider>(client: &SynopsisClient, tokens: &T) -> FilterAction {
    let token = match tokens.access_token().await {
        Ok(token) => token,
        Err(err) => return FilterAction::SynopsisErrorReceived(err.to_synopsis_error()),
    };

    match client.fetch_synopsis(&token).await {
        Ok(SynopsisResponse::Success { data, .. }) => FilterAction::SynopsisReceived(data),
        Ok(SynopsisResponse::Failure(err)) => FilterAction::SynopsisErrorReceived(err),
        Err(err) => FilterAction::SynopsisErrorReceived(err.to_synopsis_error()),
    }
}

/// Fetch the synopsis for a session that may be closed before the fetch settles.
///
/// Returns whether the outcome was delivered.
pub async fn load_into<T: TokenProvider>(handle: StoreHandle, client: &SynopsisClient, tokens: &T) -> bool {
    let action = fetch_action(client, tokens).await;
    handle.deliver(action)
}
