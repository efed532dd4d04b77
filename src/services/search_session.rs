use tracing::{debug, info, warn};

use crate::domain::{Product, ResultSet};
use crate::services::catalog::ProductCatalog;
use crate::services::error::SearchError;

/// Handle for one issued search request.
///
/// Tickets are numbered in issue order; only the newest one may update the
/// session.
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

    /// Performs the request this ticket stands for.
    pub async fn run(&self, catalog: &dyn ProductCatalog) -> Result<Vec<Product>, SearchError> {
        info!(seq = self.seq, query = %self.query, "Searching products");
        catalog.search(&self.query).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Results replaced the previous set
    Applied,
    /// Latest request failed; previous results kept
    Failed,
    /// A newer request was issued meanwhile; outcome dropped
    Stale,
}

/// Search state owned by the search page: the current result set plus
/// bookkeeping for outstanding requests.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    results: ResultSet,
    issued: u64,
    in_flight: Option<u64>,
    last_error: Option<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a search for `query`, or returns `None` for a blank query.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        if query.trim().is_empty() {
            debug!("Ignoring blank search query");
            return None;
        }

        self.issued += 1;
        self.in_flight = Some(self.issued);
        self.last_error = None;

        Some(SearchTicket {
            seq: self.issued,
            query: query.to_string(),
        })
    }

    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<Product>, SearchError>,
    ) -> Completion {
        if ticket.seq != self.issued {
            debug!(
                seq = ticket.seq,
                latest = self.issued,
                "Discarding stale search response"
            );
            return Completion::Stale;
        }

        self.in_flight = None;
        match outcome {
            Ok(products) => {
                info!(seq = ticket.seq, count = products.len(), "Search results applied");
                self.results = ResultSet::from_products(products);
                Completion::Applied
            }
            Err(e) => {
                warn!(seq = ticket.seq, query = %ticket.query, "Search failed: {}", e);
                self.last_error = Some(e.to_string());
                Completion::Failed
            }
        }
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
