//! Game server status board.

use std::str::FromStr;

use codetype_api::types::{Game, Pagination};
use codetype_api::{Client, Error, GameQuery, Query, RequestDescriptor};

use crate::fetch::RequestKey;
use crate::list::{ListPhase, ListState};

pub const GAMES_PATH: &str = "/games";
pub const LIST_ERROR_MESSAGE: &str = "Failed to fetch game servers. Check the API or try again.";
pub const NO_OPEN_MESSAGE: &str = "No open servers at the moment.";
pub const NO_CLOSED_MESSAGE: &str = "No closed servers.";

/// Client-side status filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "open" => Ok(StatusFilter::Open),
            "closed" => Ok(StatusFilter::Closed),
            _ => Err(format!(
                "unknown status '{}', expected all, open or closed",
                s
            )),
        }
    }
}

#[derive(Debug, Default)]
pub struct GameBoard {
    query: GameQuery,
    status: StatusFilter,
    list: ListState<Game>,
}

impl GameBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.query = self.query.with_limit(limit.max(1));
        self
    }

    pub fn page(&self) -> i64 {
        self.query.common.page
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status = status;
    }

    pub fn games(&self) -> &[Game] {
        self.list.items()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.list.pagination()
    }

    pub fn phase(&self) -> ListPhase {
        self.list.phase()
    }

    pub fn loading(&self) -> bool {
        self.list.loading()
    }

    pub fn error(&self) -> Option<&Error> {
        self.list.error()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.list.error().map(|_| LIST_ERROR_MESSAGE)
    }

    pub fn open_games(&self) -> Vec<&Game> {
        self.games().iter().filter(|g| g.is_open()).collect()
    }

    pub fn closed_games(&self) -> Vec<&Game> {
        self.games().iter().filter(|g| g.is_closed()).collect()
    }

    /// Games passing the status filter, in server order.
    pub fn visible(&self) -> Vec<&Game> {
        match self.status {
            StatusFilter::All => self.games().iter().collect(),
            StatusFilter::Open => self.open_games(),
            StatusFilter::Closed => self.closed_games(),
        }
    }

    /// "2 Open · 2 Closed", followed by paging when known.
    pub fn summary(&self) -> String {
        let counts = format!(
            "{} Open · {} Closed",
            self.open_games().len(),
            self.closed_games().len()
        );
        match self.pagination() {
            Some(p) => format!(
                "{} · {} total · Page {} / {}",
                counts, p.total_items, p.page, p.total_pages
            ),
            None => counts,
        }
    }

    pub fn next_page(&mut self) -> bool {
        match self.list.next_target(self.page()) {
            Some(page) => self.set_page(page),
            None => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        match self.list.previous_target(self.page()) {
            Some(page) => self.set_page(page),
            None => false,
        }
    }

    pub fn go_to_page(&mut self, page: i64) -> bool {
        let page = self.list.clamp_page(page);
        self.set_page(page)
    }

    fn set_page(&mut self, page: i64) -> bool {
        let changed = page != self.query.common.page;
        self.query.common.page = page;
        changed
    }

    /// Fetches the current page. A refresh dropped before it settles leaves
    /// a stale ticket behind, which the next refresh supersedes.
    pub async fn refresh(&mut self, client: &Client) {
        let key = RequestKey::new(
            &RequestDescriptor::get(GAMES_PATH).with_query(self.query.to_params()),
        );
        let ticket = self.list.begin(key);
        let query = self.query.clone();
        let result = client.get_games(&query).await;
        if let Err(e) = &result {
            tracing::error!("Failed to fetch game servers: {}", e);
        }
        let page_size = query.common.limit.unwrap_or(result_len(&result));
        self.list.apply(ticket, result, query.common.page, page_size);
    }
}

/// Without an explicit limit the server decides the page size; a response
/// without pagination is then treated as a single page.
fn result_len(result: &Result<codetype_api::types::ListResponse<Game>, Error>) -> i64 {
    result
        .as_ref()
        .map(|resp| resp.data.items.len() as i64)
        .unwrap_or(0)
}
