use crate::ActivityError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

pub const GITHUB_JSON: &str = "application/vnd.github+json";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Status and body of an HTTP response, read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Source of a user's raw event feed.
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    fn fetch(&self, username: &str) -> Result<RawResponse, ActivityError>;
}

/// Fetches the first page of a user's public events from the GitHub REST API.
pub struct EventFetcher {
    client: Client,
    base_url: String,
}

impl EventFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ActivityError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ActivityError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn events_url(&self, username: &str) -> String {
        format!(
            "{}/users/{username}/events",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl EventSource for EventFetcher {
    /// Issues a single GET, without retries. Any status is returned as-is.
    fn fetch(&self, username: &str) -> Result<RawResponse, ActivityError> {
        let url = self.events_url(username);
        debug!(%url, "requesting events");
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .map_err(ActivityError::Transport)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(ActivityError::ReadBody)?;
        debug!(status, bytes = body.len(), "received response");
        Ok(RawResponse { status, body })
    }
}
