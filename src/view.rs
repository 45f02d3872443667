use crate::client::SearchError;
use crate::data_models::BookResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    Searching,
    Populated,
    Failed { message: String },
}

/// Handed out when a search starts; must be returned to `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query; nothing was sent.
    Skipped,
    Applied { count: usize },
    Failed,
    /// A newer search was issued before this one resolved.
    Discarded,
}

/// State behind the search page: the query being typed and the results of
/// the latest issued search.
///
/// Results are never merged. Starting a search empties them, and only the
/// response to the most recently issued search may fill them again.
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    query: String,
    results: Vec<BookResult>,
    status: ViewStatus,
    output: Option<String>,
    latest: u64,
}

impl SearchView {
    pub fn new() -> SearchView {
        SearchView::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[BookResult] {
        &self.results
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.query.is_empty() {
            return None;
        }
        self.latest += 1;
        self.results.clear();
        self.status = ViewStatus::Searching;
        Some(SearchTicket {
            seq: self.latest,
            query: self.query.clone(),
        })
    }

    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<BookResult>, SearchError>,
    ) -> SearchOutcome {
        if ticket.seq != self.latest {
            return SearchOutcome::Discarded;
        }
        match outcome {
            Ok(books) => {
                let count = books.len();
                self.results = books;
                self.status = ViewStatus::Populated;
                SearchOutcome::Applied { count }
            }
            Err(e) => {
                self.results.clear();
                self.status = ViewStatus::Failed {
                    message: e.to_string(),
                };
                SearchOutcome::Failed
            }
        }
    }
}
