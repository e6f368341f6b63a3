//! In-memory stand-in for the Starling API.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::api::{ApiError, Fetch};

/// Serves canned bodies by path and records every path requested.
/// Unknown paths get the provider's not-found error envelope.
#[derive(Debug, Default)]
pub(crate) struct FakeClient {
    responses: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeClient {
    pub(crate) fn new() -> Self {
        FakeClient::default()
    }

    pub(crate) fn respond(mut self, path: &str, body: &str) -> Self {
        self.responses.insert(path.to_string(), body.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetch for FakeClient {
    fn fetch(&self, path: &str) -> Result<String, ApiError> {
        self.calls.borrow_mut().push(path.to_string());

        match self.responses.get(path) {
            Some(body) => Ok(body.clone()),
            None => Ok(format!(
                r#"{{"error":"not_found","error_description":"No resource at {}"}}"#,
                path
            )),
        }
    }
}
