//! State shared by paginated list views.

use codetype_api::types::{ListResponse, Pagination};
use codetype_api::Error;

use crate::fetch::{FetchState, RequestKey, Ticket};

/// Where a list is in its fetch cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing requested yet.
    Idle,
    Loading,
    /// The last request returned at least one item.
    Populated,
    /// The last request succeeded with zero items.
    Empty,
    /// The last request failed; items and pagination were cleared.
    Failed,
}

/// Items, pagination and fetch state of one list.
#[derive(Debug)]
pub struct ListState<T> {
    items: Vec<T>,
    pagination: Option<Pagination>,
    fetch: FetchState,
    loaded: bool,
    last_key: Option<RequestKey>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
            fetch: FetchState::new(),
            loaded: false,
            last_key: None,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.fetch.loading()
    }

    pub fn error(&self) -> Option<&Error> {
        self.fetch.error()
    }

    pub fn phase(&self) -> ListPhase {
        if self.fetch.loading() {
            ListPhase::Loading
        } else if self.fetch.error().is_some() {
            ListPhase::Failed
        } else if !self.loaded {
            ListPhase::Idle
        } else if self.items.is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Populated
        }
    }

    /// True when `key` is exactly the request currently in flight.
    pub fn is_in_flight(&self, key: &RequestKey) -> bool {
        self.fetch.loading() && self.last_key.as_ref() == Some(key)
    }

    pub fn begin(&mut self, key: RequestKey) -> Ticket {
        self.last_key = Some(key);
        self.fetch.begin()
    }

    /// Applies a list response. `page`/`page_size` are the values that were
    /// requested and only matter when the server sent no pagination block.
    /// Returns `false` when the response was stale and ignored.
    pub fn apply(
        &mut self,
        ticket: Ticket,
        result: Result<ListResponse<T>, Error>,
        page: i64,
        page_size: i64,
    ) -> bool {
        if !self.fetch.settle(ticket, &result) {
            return false;
        }
        self.loaded = result.is_ok();
        match result {
            Ok(resp) => {
                self.pagination = Some(resp.data.pagination_or_derive(page, page_size));
                self.items = resp.data.items;
            }
            Err(_) => {
                self.items.clear();
                self.pagination = None;
            }
        }
        true
    }

    pub fn clear_error(&mut self) {
        self.fetch.clear_error();
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination.as_ref().is_some_and(|p| p.has_next_page)
    }

    pub fn has_previous_page(&self) -> bool {
        self.pagination.as_ref().is_some_and(|p| p.has_previous_page)
    }

    /// Target of a "Next" click from `current`, or `None` when disabled.
    pub fn next_target(&self, current: i64) -> Option<i64> {
        if self.loading() || !self.has_next_page() {
            return None;
        }
        Some(self.clamp_page(current + 1))
    }

    /// Target of a "Previous" click from `current`, or `None` when disabled.
    pub fn previous_target(&self, current: i64) -> Option<i64> {
        if self.loading() || !self.has_previous_page() {
            return None;
        }
        Some(self.clamp_page(current - 1))
    }

    /// Clamps into `[1, total_pages]`; only the lower bound applies before the
    /// first page has loaded.
    pub fn clamp_page(&self, page: i64) -> i64 {
        match &self.pagination {
            Some(p) => p.clamp_page(page),
            None => page.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use codetype_api::types::ListData;
    use codetype_api::Payload;

    use super::*;

    fn response(items: Vec<i64>, count: i64) -> ListResponse<i64> {
        ListResponse {
            data: ListData {
                items,
                pagination: None,
                count: Some(count),
            },
        }
    }

    fn key(s: &str) -> RequestKey {
        RequestKey::new(&codetype_api::RequestDescriptor::get(s))
    }

    #[test]
    fn phases() {
        let mut list: ListState<i64> = ListState::new();
        assert_eq!(list.phase(), ListPhase::Idle);

        let t = list.begin(key("/a"));
        assert_eq!(list.phase(), ListPhase::Loading);
        list.apply(t, Ok(response(vec![], 0)), 1, 12);
        assert_eq!(list.phase(), ListPhase::Empty);

        let t = list.begin(key("/a"));
        list.apply(t, Ok(response(vec![1, 2], 2)), 1, 12);
        assert_eq!(list.phase(), ListPhase::Populated);

        let t = list.begin(key("/a"));
        list.apply(
            t,
            Err(Error::HttpStatus {
                status: 503,
                body: Payload::Text("down".into()),
            }),
            1,
            12,
        );
        assert_eq!(list.phase(), ListPhase::Failed);
        assert!(list.items().is_empty());
        assert!(list.pagination().is_none());

        list.clear_error();
        assert_eq!(list.phase(), ListPhase::Idle);
    }

    #[test]
    fn out_of_order_responses_keep_latest() {
        let mut list: ListState<i64> = ListState::new();
        let old = list.begin(key("/a?page=1"));
        let new = list.begin(key("/a?page=2"));

        assert!(list.apply(new, Ok(response(vec![13, 14], 37)), 2, 12));
        assert!(!list.apply(old, Ok(response(vec![1], 37)), 1, 12));
        assert_eq!(list.items(), &[13, 14]);
        assert_eq!(list.pagination().unwrap().page, 2);
    }

    #[test]
    fn navigation_targets() {
        let mut list: ListState<i64> = ListState::new();
        assert_eq!(list.next_target(1), None);
        assert_eq!(list.clamp_page(-3), 1);

        let t = list.begin(key("/a"));
        list.apply(t, Ok(response(vec![1], 37)), 1, 12);
        assert_eq!(list.previous_target(1), None);
        assert_eq!(list.next_target(1), Some(2));
        assert_eq!(list.clamp_page(9), 4);
    }

    #[test]
    fn in_flight_detection() {
        let mut list: ListState<i64> = ListState::new();
        let t = list.begin(key("/a"));
        assert!(list.is_in_flight(&key("/a")));
        assert!(!list.is_in_flight(&key("/b")));
        list.apply(t, Ok(response(vec![], 0)), 1, 12);
        assert!(!list.is_in_flight(&key("/a")));
    }

    #[test]
    fn abandoned_request_is_superseded() {
        let mut list: ListState<i64> = ListState::new();
        let abandoned = list.begin(key("/a"));
        let retry = list.begin(key("/a"));

        assert!(list.apply(retry, Ok(response(vec![1], 1)), 1, 12));
        assert_eq!(list.phase(), ListPhase::Populated);
        assert!(!list.apply(abandoned, Ok(response(vec![], 0)), 1, 12));
        assert_eq!(list.items(), &[1]);
    }
}
