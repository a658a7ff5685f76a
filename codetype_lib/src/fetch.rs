//! Loading/error bookkeeping around API calls.
//!
//! Every call is stamped with a [`Ticket`]. Only the result carrying the most
//! recently issued ticket may change a [`FetchState`]; older results are
//! reported as stale and dropped by the caller.

use std::future::Future;

use codetype_api::{Client, Error, Method, Payload, RequestDescriptor, RequestOptions};

/// Sequence number of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Loading and error state of one asynchronous read.
#[derive(Debug, Default)]
pub struct FetchState {
    loading: bool,
    error: Option<Error>,
    issued: u64,
}

impl FetchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Ticket of the most recent call, if any call was issued.
    pub fn latest(&self) -> Option<Ticket> {
        (self.issued > 0).then_some(Ticket(self.issued))
    }

    /// Starts a call: loading on, previous error cleared.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Records the outcome of the call identified by `ticket`. Returns `false`
    /// and leaves the state untouched when a newer call has been issued since.
    pub fn settle<T>(&mut self, ticket: Ticket, result: &Result<T, Error>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Discarding stale response #{} (latest #{})",
                ticket.0,
                self.issued
            );
            return false;
        }
        self.loading = false;
        self.error = result.as_ref().err().cloned();
        true
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Forgets loading and error state. Any call still in flight becomes stale.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.loading = false;
        self.error = None;
    }

    /// Runs `call` between [`begin`](Self::begin) and [`settle`](Self::settle).
    pub async fn track<T, F>(&mut self, call: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        let ticket = self.begin();
        let result = call.await;
        self.settle(ticket, &result);
        result
    }
}

/// A client paired with one [`FetchState`]: the imperative "call" surface a
/// view uses for requests that are not covered by a typed endpoint.
pub struct Api<'a> {
    client: &'a Client,
    state: FetchState,
}

impl<'a> Api<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            state: FetchState::new(),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn loading(&self) -> bool {
        self.state.loading()
    }

    pub fn error(&self) -> Option<&Error> {
        self.state.error()
    }

    /// Executes a request, recording loading/error transitions.
    pub async fn call(&mut self, request: &RequestDescriptor) -> Result<Payload, Error> {
        let client = self.client;
        self.state.track(client.send(request)).await
    }

    /// Like [`call`](Self::call) but takes the verb by name. Names outside the
    /// supported set fail with [`Error::UnsupportedMethod`], recorded like any
    /// other failure.
    pub async fn call_verb(
        &mut self,
        verb: &str,
        path: &str,
        options: RequestOptions,
    ) -> Result<Payload, Error> {
        let method = match verb.parse::<Method>() {
            Ok(method) => method,
            Err(e) => {
                let ticket = self.state.begin();
                let result: Result<Payload, Error> = Err(e);
                self.state.settle(ticket, &result);
                return result;
            }
        };
        let request = RequestDescriptor::new(method, path).with_options(options);
        self.call(&request).await
    }
}

/// Stable identity of a list request, used to skip re-issuing a request
/// identical to the one already in flight.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestKey(String);

impl RequestKey {
    pub fn new(request: &RequestDescriptor) -> Self {
        Self(request.signature())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
