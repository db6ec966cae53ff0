//! Headless catalog store.
//!
//! Drives the same reducer and effects as the terminal runtime, but awaits
//! every effect inline so each intent settles before the next one starts.
//! Observers get a fresh snapshot through a `watch` channel after every
//! change.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::watch;

use crate::action::Action;
use crate::api::CatalogClient;
use crate::effect::{run_effect, Effect};
use crate::reducer::reducer;
use crate::state::{AppState, Screen};

pub struct CatalogStore<C: CatalogClient + ?Sized> {
    state: AppState,
    client: Arc<C>,
    notify: watch::Sender<AppState>,
}

impl<C: CatalogClient + ?Sized> CatalogStore<C> {
    pub fn new(client: Arc<C>, state: AppState) -> Self {
        let (notify, _) = watch::channel(state.clone());
        Self {
            state,
            client,
            notify,
        }
    }

    /// Create the store and run the initial list fetch with the state's limit.
    pub async fn open(client: Arc<C>, state: AppState) -> Self {
        let limit = state.list_limit;
        let mut store = Self::new(client, state);
        store.load_list(limit).await;
        store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.notify.subscribe()
    }

    pub async fn load_list(&mut self, count: usize) -> bool {
        self.dispatch(Action::ListLoad(count)).await
    }

    pub async fn select_entry(&mut self, name: impl Into<String>) -> bool {
        self.dispatch(Action::EntrySelect(name.into())).await
    }

    pub fn clear_selection(&mut self) -> bool {
        self.dispatch_sync(Action::EntryClear)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        self.dispatch_sync(Action::SearchTextChange(text.into()))
    }

    pub fn navigate_to(&mut self, screen: Screen) -> bool {
        self.dispatch_sync(Action::NavigateTo(screen))
    }

    /// Run `action` and every effect it causes to completion.
    ///
    /// Only the intent methods above reach this; completions come from effects.
    async fn dispatch(&mut self, action: Action) -> bool {
        let mut pending = VecDeque::from([action]);
        let mut changed = false;
        while let Some(action) = pending.pop_front() {
            let (did_change, effects) = self.apply(action);
            changed |= did_change;
            for effect in effects {
                tracing::debug!(?effect, "running effect");
                pending.push_back(run_effect(self.client.as_ref(), effect).await);
            }
        }
        changed
    }

    fn dispatch_sync(&mut self, action: Action) -> bool {
        let (changed, effects) = self.apply(action);
        debug_assert!(effects.is_empty(), "synchronous intent produced effects");
        changed
    }

    fn apply(&mut self, action: Action) -> (bool, Vec<Effect>) {
        tracing::debug!(?action, "dispatch");
        let result = reducer(&mut self.state, action);
        if result.changed {
            self.notify.send_replace(self.state.clone());
        }
        (result.changed, result.effects)
    }
}
