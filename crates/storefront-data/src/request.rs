//! Outgoing HTTP requests.
//!
//! The item service is read-only, so every request is a `GET`.

use std::collections::BTreeMap;
use std::time::Duration;

/// A fully described outgoing request, handed to a [`Transport`](crate::Transport).
#[derive(Debug, Clone)]
pub struct Request {
    url: String,
    headers: BTreeMap<String, String>,
    timeout: Option<Duration>,
}

impl Request {
    /// Create a `GET` request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout: None,
        }
    }

    /// Add a header, replacing any previous value for the same name.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Bound the whole exchange to `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_replaces_previous_value() {
        let req = Request::get("/")
            .header("Accept", "text/html")
            .header("Accept", "application/json");

        let accept: Vec<_> = req.headers().filter(|(k, _)| *k == "Accept").collect();
        assert_eq!(accept, vec![("Accept", "application/json")]);
    }

    #[test]
    fn test_timeout() {
        let req = Request::get("/").timeout(Duration::from_secs(3));
        assert_eq!(req.timeout_duration(), Some(Duration::from_secs(3)));
        assert_eq!(Request::get("/").timeout_duration(), None);
    }
}
