//! Prints a summary of a GitHub user's recent public activity.
pub mod cli;
pub mod config;
pub mod event;
pub mod fetcher;
pub mod formatter;

pub use event::{Event, EventPayload};
pub use fetcher::{EventFetcher, EventSource, RawResponse};
pub use formatter::EventFormatter;

use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Failed to receive http response: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Failed to read http response: {0}")]
    ReadBody(#[source] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse json: {0}")]
    ParseEvents(#[source] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Fetches `username`'s events and prints their summaries to `out`.
///
/// A non-2xx response is returned as [`ActivityError::Status`] before anything
/// is printed or parsed.
pub fn run<S: EventSource + ?Sized, W: Write>(
    source: &S,
    username: &str,
    out: &mut W,
) -> Result<(), ActivityError> {
    let response = source.fetch(username)?;
    if !response.is_success() {
        return Err(ActivityError::Status {
            status: response.status,
            body: response.body,
        });
    }

    writeln!(out, "Got response")?;
    writeln!(out, "Showing activity for {username}\n")?;
    EventFormatter::new(out).print_events(&response.body)
}
