//! In-memory fetcher and fixtures shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::FetchError;
use crate::source::{DataSources, Fetcher, Location};

pub(crate) const PRIMARY: &str = "https://example.invalid/compatibility_list.json";
pub(crate) const FALLBACK: &str = "./compatibility_list.json";

/// Two entries: "Game A" (perfect) and "Game B" (unplayable).
pub(crate) const TWO_GAMES: &str = r#"[
    {"title": "Game A", "compatibility": 0},
    {"title": "Game B", "compatibility": 5}
]"#;

pub(crate) fn sources() -> DataSources {
    DataSources::new(PRIMARY.parse().unwrap(), FALLBACK.parse().unwrap())
}

enum Response {
    Body(Vec<u8>),
    Status(u16),
}

/// Serves canned responses keyed by location and records every request.
#[derive(Default)]
pub(crate) struct MockFetcher {
    responses: HashMap<String, Response>,
    calls: RefCell<Vec<String>>,
}

impl MockFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn body(mut self, location: &str, body: &str) -> Self {
        self.responses
            .insert(location.to_string(), Response::Body(body.as_bytes().to_vec()));
        self
    }

    pub(crate) fn status(mut self, location: &str, status: u16) -> Self {
        self.responses
            .insert(location.to_string(), Response::Status(status));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, location: &Location) -> Result<Vec<u8>, FetchError> {
        let key = location.to_string();
        self.calls.borrow_mut().push(key.clone());
        match self.responses.get(&key) {
            Some(Response::Body(bytes)) => Ok(bytes.clone()),
            Some(Response::Status(code)) => Err(FetchError::status(key, *code)),
            None => Err(FetchError::io(
                key,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )),
        }
    }
}
