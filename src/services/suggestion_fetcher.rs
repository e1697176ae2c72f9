use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use super::lookup_client::{lookup_service::PostcodeLookup, types::lookup_error::LookupError};
use crate::types::lookup_result::{LookupQuery, SuggestionEntry};

pub const DEFAULT_SUGGESTION_DELAY: Duration = Duration::from_millis(300);
pub const MIN_SUGGESTION_CHARS: usize = 2;

/// Invoked with `(postcode, country_code)` when a suggestion is chosen.
pub type SelectCallback = Arc<dyn Fn(String, String) + Send + Sync>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuggestionView {
    pub query: String,
    pub loading: bool,
    pub entries: Vec<SuggestionEntry>,
}

impl SuggestionView {
    /// Whether to show the "No postcodes found" placeholder.
    pub fn shows_empty_notice(&self) -> bool {
        !self.query.is_empty() && !self.loading && self.entries.is_empty()
    }
}

/// Looks up a single suggestion for `query`. Failures are logged and yield
/// an empty list.
pub async fn fetch_suggestions(
    lookup: &dyn PostcodeLookup,
    country_code: &str,
    query: &str,
) -> Vec<SuggestionEntry> {
    if query.chars().count() < MIN_SUGGESTION_CHARS {
        return Vec::new();
    }

    let result = lookup
        .lookup(&LookupQuery::new(query, country_code))
        .await
        .and_then(|result| SuggestionEntry::from_result(&result).ok_or(LookupError::NotFound));

    match result {
        Ok(entry) => vec![entry],
        Err(e) => {
            error!("Failed to fetch postcode suggestions for {}: {}", query, e);
            Vec::new()
        }
    }
}

/// Debounced postcode autocomplete scoped to one country.
pub struct SuggestionFetcher {
    lookup: Arc<dyn PostcodeLookup>,
    country_code: String,
    quiet_interval: Duration,
    on_select: SelectCallback,
    view: Arc<watch::Sender<SuggestionView>>,
    pending: Mutex<Option<CancellationToken>>,
}

impl SuggestionFetcher {
    pub fn new(
        lookup: Arc<dyn PostcodeLookup>,
        country_code: impl Into<String>,
        quiet_interval: Duration,
        on_select: SelectCallback,
    ) -> Self {
        let (view, _) = watch::channel(SuggestionView::default());
        Self {
            lookup,
            country_code: country_code.into(),
            quiet_interval,
            on_select,
            view: Arc::new(view),
            pending: Mutex::new(None),
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn view(&self) -> SuggestionView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SuggestionView> {
        self.view.subscribe()
    }

    /// Records new input text and re-arms the debounce timer. Must be called
    /// from within a tokio runtime.
    pub fn on_input(&self, text: &str) {
        let token = CancellationToken::new();
        {
            let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(previous) = pending.replace(token.clone()) {
                previous.cancel();
            }
        }

        let query = text.to_string();
        if query.chars().count() < MIN_SUGGESTION_CHARS {
            token.cancel();
            self.view.send_modify(|view| {
                view.query = query;
                view.loading = false;
                view.entries.clear();
            });
            return;
        }

        self.view.send_modify(|view| view.query = query.clone());

        let lookup = Arc::clone(&self.lookup);
        let view = Arc::clone(&self.view);
        let country_code = self.country_code.clone();
        let quiet_interval = self.quiet_interval;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("Suggestion lookup for {} superseded", query);
                }
                _ = tokio::time::sleep(quiet_interval) => {
                    view.send_if_modified(|view| {
                        if token.is_cancelled() {
                            return false;
                        }
                        view.loading = true;
                        true
                    });

                    let entries = tokio::select! {
                        biased;
                        _ = token.cancelled() => return,
                        entries = fetch_suggestions(lookup.as_ref(), &country_code, &query) => entries,
                    };

                    view.send_if_modified(|view| {
                        if token.is_cancelled() {
                            return false;
                        }
                        view.loading = false;
                        view.entries = entries;
                        true
                    });
                }
            }
        });
    }

    pub fn select(&self, entry: &SuggestionEntry) {
        (self.on_select)(entry.postcode.clone(), entry.country_code.clone());
    }

    /// Selects the entry at `index` in the current list, if there is one.
    pub fn select_index(&self, index: usize) -> bool {
        let entry = self.view.borrow().entries.get(index).cloned();
        match entry {
            Some(entry) => {
                self.select(&entry);
                true
            }
            None => false,
        }
    }
}

impl Drop for SuggestionFetcher {
    fn drop(&mut self) {
        if let Some(token) = self
            .pending
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            token.cancel();
        }
    }
}
