use std::sync::Arc;
use tokio::sync::Mutex;

use crate::client::SearchBackend;
use crate::view::{SearchOutcome, SearchView};

/// Drives a shared `SearchView` against a search backend.
///
/// Clones share the same view, so a handler can spawn overlapping searches;
/// the view's sequence numbers decide which response is kept.
pub struct SearchController<B> {
    backend: Arc<B>,
    view: Arc<Mutex<SearchView>>,
}

impl<B> Clone for SearchController<B> {
    fn clone(&self) -> Self {
        SearchController {
            backend: self.backend.clone(),
            view: self.view.clone(),
        }
    }
}

impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B) -> SearchController<B> {
        SearchController {
            backend: Arc::new(backend),
            view: Arc::new(Mutex::new(SearchView::new())),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn set_query(&self, query: impl Into<String>) {
        self.view.lock().await.set_query(query);
    }

    pub async fn snapshot(&self) -> SearchView {
        self.view.lock().await.clone()
    }

    pub async fn search(&self) -> SearchOutcome {
        let ticket = match self.view.lock().await.begin_search() {
            Some(ticket) => ticket,
            None => {
                log::debug!("empty query, search skipped");
                return SearchOutcome::Skipped;
            }
        };

        // lock is released here; the request may take arbitrarily long
        let response = self.backend.search(ticket.query()).await;
        if let Err(e) = &response {
            log::error!("error fetching data for {:?}, error: {:#}", ticket.query(), e);
        }

        let seq = ticket.seq();
        let outcome = self.view.lock().await.complete(ticket, response);
        if outcome == SearchOutcome::Discarded {
            log::debug!("discarded response to superseded search #{seq}");
        }
        outcome
    }

    /// Backs the "Get Output" button. Only logs.
    pub async fn post_request(&self, text: &str) {
        log::info!("post request with: {text}");
    }
}
