//! List loading with stale-response rejection.
//!
//! Each loader owns a generation counter. Starting a load bumps it and
//! hands out a [`RequestToken`]; a completion whose token is no longer the
//! latest is dropped without touching items, error or the loading flag.

use std::future::Future;

use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{toast_error, use_toast};

/// Identifies one load request of one loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// What happened to a finished request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded,
    Failed(AppError),
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> LoadState<T> {
    /// Start a request: loading on, previous error cleared.
    pub fn begin(&mut self) -> RequestToken {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        RequestToken(self.generation)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.generation
    }

    /// Apply a completed request unless a newer one has started since.
    pub fn finish(&mut self, token: RequestToken, result: Result<Vec<T>, AppError>) -> LoadOutcome {
        if !self.is_current(token) {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                LoadOutcome::Loaded
            }
            Err(err) => {
                self.error = Some(err.friendly_message());
                LoadOutcome::Failed(err)
            }
        }
    }
}

/// Somewhere a [`LoadState`] lives and can be mutated in place.
pub trait LoadSlot<T> {
    fn update<R>(&self, f: impl FnOnce(&mut LoadState<T>) -> R) -> R;
}

impl<T: 'static> LoadSlot<T> for Signal<LoadState<T>> {
    fn update<R>(&self, f: impl FnOnce(&mut LoadState<T>) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

/// Run one request against `slot`.
pub async fn run_load<T, S, F>(slot: &S, fetch: F) -> LoadOutcome
where
    S: LoadSlot<T>,
    F: Future<Output = Result<Vec<T>, AppError>>,
{
    let token = slot.update(|s| s.begin());
    let result = fetch.await;
    let outcome = slot.update(|s| s.finish(token, result));
    if outcome == LoadOutcome::Stale {
        tracing::debug!("discarded stale list response");
    }
    outcome
}

/// Handle to a page's list loader.
pub struct Loader<T: 'static> {
    pub state: Signal<LoadState<T>>,
    nonce: Signal<u64>,
}

impl<T: 'static> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Loader<T> {}

impl<T: Clone + 'static> Loader<T> {
    /// Fetch again with the current filters.
    pub fn reload(&self) {
        let mut nonce = self.nonce;
        nonce += 1;
    }

    pub fn items(&self) -> Vec<T> {
        self.state.read().items.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }
}

/// Load a list when the page mounts, again whenever a signal read by
/// `fetch` changes, and on [`Loader::reload`]. Failures raise a toast.
///
/// `fetch` must read its signals before returning the future so the
/// effect subscribes to them.
pub fn use_loader<T, Fut>(mut fetch: impl FnMut() -> Fut + 'static) -> Loader<T>
where
    T: 'static,
    Fut: Future<Output = Result<Vec<T>, AppError>> + 'static,
{
    let state = use_signal(LoadState::<T>::default);
    let nonce = use_signal(|| 0u64);
    let toast = use_toast();

    use_effect(move || {
        let _ = nonce();
        let request = fetch();
        spawn(async move {
            if let LoadOutcome::Failed(err) = run_load(&state, request).await {
                tracing::error!(error = %err, "list load failed");
                toast_error(&toast, &err.friendly_message());
            }
        });
    });

    Loader { state, nonce }
}
