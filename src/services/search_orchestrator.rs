use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::sync::watch;
use tracing::{error, info, warn};

use super::{
    lookup_client::{lookup_service::PostcodeLookup, types::lookup_error::LookupError},
    suggestion_fetcher::SelectCallback,
};
use crate::types::{
    lookup_result::{LookupQuery, LookupResult},
    notification::{Notification, NotificationSender},
    search_state::SearchState,
};

const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";

#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    /// Places were found and the results dialog is open.
    Found(LookupResult),
    /// 404 or a response without places.
    NoResults,
    /// Nothing usable to search for; no request was made.
    Invalid,
    Failed(LookupError),
    /// A newer search started before this one finished.
    Superseded,
}

impl SearchOutcome {
    pub fn into_result(self) -> Option<LookupResult> {
        match self {
            SearchOutcome::Found(result) => Some(result),
            _ => None,
        }
    }
}

/// Runs searches against the lookup service and drives [`SearchState`].
pub struct SearchOrchestrator {
    lookup: Arc<dyn PostcodeLookup>,
    notifier: NotificationSender,
    state: watch::Sender<SearchState>,
    generation: AtomicU64,
}

impl SearchOrchestrator {
    pub fn new(lookup: Arc<dyn PostcodeLookup>, notifier: NotificationSender) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self {
            lookup,
            notifier,
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// True while a search is in flight; submit controls should be disabled.
    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn close_dialog(&self) {
        self.state.send_if_modified(|state| match state {
            SearchState::Success { dialog_open, .. } if *dialog_open => {
                *dialog_open = false;
                true
            }
            _ => false,
        });
    }

    pub async fn search(&self, query_text: &str, country_code: &str) -> SearchOutcome {
        let query = LookupQuery::new(query_text, country_code);
        let sanitized = query.sanitized();
        if sanitized.trim().is_empty() {
            self.notify(Notification::destructive("Error", EMPTY_QUERY_MESSAGE));
            return SearchOutcome::Invalid;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(SearchState::Loading);

        let response = self.lookup.lookup(&query).await;

        let (next_state, notification, outcome) = match response {
            Ok(result) if result.is_displayable() => {
                info!(
                    "Found {} place(s) for {} in {}",
                    result.places.len(),
                    sanitized,
                    query.country_path()
                );
                (
                    SearchState::Success {
                        result: result.clone(),
                        dialog_open: true,
                    },
                    None,
                    SearchOutcome::Found(result),
                )
            }
            Ok(_) => (
                SearchState::Empty,
                Some(Notification::info(
                    "No results found",
                    "Try a different search term or country",
                )),
                SearchOutcome::NoResults,
            ),
            Err(LookupError::NotFound) => (
                SearchState::Empty,
                Some(Notification::info(
                    "No results found",
                    format!("No results found for {sanitized} in the selected country"),
                )),
                SearchOutcome::NoResults,
            ),
            Err(LookupError::EmptyQuery) => (
                SearchState::Idle,
                Some(Notification::destructive("Error", EMPTY_QUERY_MESSAGE)),
                SearchOutcome::Invalid,
            ),
            Err(e) => {
                error!("Search for {} failed: {}", sanitized, e);
                (
                    SearchState::Error {
                        message: e.to_string(),
                    },
                    Some(Notification::destructive("Error", e.to_string())),
                    SearchOutcome::Failed(e),
                )
            }
        };

        let applied = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next_state;
            true
        });

        if !applied {
            warn!("Discarding stale response for {}", sanitized);
            return SearchOutcome::Superseded;
        }

        if let Some(notification) = notification {
            self.notify(notification);
        }

        outcome
    }

    /// Callback for the suggestion list: selecting an entry searches for it.
    pub fn selection_callback(self: &Arc<Self>) -> SelectCallback {
        let orchestrator = Arc::clone(self);
        Arc::new(move |postcode: String, country_code: String| {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move {
                orchestrator.search(&postcode, &country_code).await;
            });
        })
    }

    fn notify(&self, notification: Notification) {
        // Nobody listening is fine.
        let _ = self.notifier.send(notification);
    }
}
