use crate::ActivityError;
use crate::event::{Event, EventPayload};
use std::io::Write;
use tracing::debug;

/// Prints one summary line per recognised event of a feed.
pub struct EventFormatter<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> EventFormatter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    /// Decodes `body` as an array of events and prints their summaries in
    /// feed order.
    ///
    /// A body that is not an event array is an error. A single event whose
    /// payload cannot be decoded gets a failure line instead of a summary and
    /// the rest of the feed is still printed. Unknown event types print
    /// nothing.
    pub fn print_events(&mut self, body: &str) -> Result<(), ActivityError> {
        let events: Vec<Event> = serde_json::from_str(body).map_err(ActivityError::ParseEvents)?;
        debug!(count = events.len(), "decoded events");
        for event in &events {
            self.print_event(event)?;
        }
        Ok(())
    }

    fn print_event(&mut self, event: &Event) -> std::io::Result<()> {
        match EventPayload::decode(&event.kind, &event.payload) {
            Ok(Some(payload)) => writeln!(self.out, "{}", payload.summary(&event.repo.name)),
            Ok(None) => {
                debug!(kind = %event.kind, "skipping event without summary");
                Ok(())
            }
            Err(error) => writeln!(self.out, "Failed to read payload: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn print(body: &str) -> (Result<(), ActivityError>, String) {
        let mut out = Vec::new();
        let result = EventFormatter::new(&mut out).print_events(body);
        (result, String::from_utf8(out).unwrap())
    }

    fn every_known_event() -> serde_json::Value {
        json!([
            {"type": "PushEvent", "repo": {"name": "octo/a"}, "payload": {"size": 2, "ref": "refs/heads/main"}},
            {"type": "CreateEvent", "repo": {"name": "octo/b"}, "payload": {"ref": "v1.0", "ref_type": "tag"}},
            {"type": "DeleteEvent", "repo": {"name": "octo/c"}, "payload": {"ref": "old", "ref_type": "branch"}},
            {"type": "ForkEvent", "repo": {"name": "octo/d"}, "payload": {"forkee": {"name": "d-fork"}}},
            {"type": "IssuesEvent", "repo": {"name": "octo/e"}, "payload": {"action": "opened"}},
            {"type": "MemberEvent", "repo": {"name": "octo/f"}, "payload": {"action": "added", "member": {"name": "Mona"}}},
            {"type": "PullRequestEvent", "repo": {"name": "octo/g"}, "payload": {"action": "closed"}},
            {"type": "ReleaseEvent", "repo": {"name": "octo/h"}, "payload": {"action": "published"}},
            {"type": "WatchEvent", "repo": {"name": "octo/i"}, "payload": {"action": "started"}},
            {"type": "GollumEvent", "repo": {"name": "octo/j"}, "payload": {"pages": []}}
        ])
    }

    #[test]
    fn test_one_line_per_known_event_in_order() {
        let (result, output) = print(&every_known_event().to_string());

        assert!(result.is_ok());
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                "pushed 2 commits to octo/a",
                "created tag at octo/b",
                "deleted branch at octo/c",
                "forked d-fork",
                "opened issue at octo/e",
                "added Mona to octo/f",
                "closed pull request at octo/g",
                "published new release at octo/h",
                "starred octo/i",
            ]
        );
    }

    #[test]
    fn test_empty_feed_prints_nothing() {
        let (result, output) = print("[]");

        assert!(result.is_ok());
        assert_eq!(output, "");
    }

    #[test]
    fn test_bad_payload_is_reported_and_skipped() {
        let body = json!([
            {"type": "PushEvent", "repo": {"name": "octo/a"}, "payload": {"size": "lots"}},
            {"type": "WatchEvent", "repo": {"name": "octo/b"}, "payload": {"action": "started"}}
        ]);

        let (result, output) = print(&body.to_string());

        assert!(result.is_ok());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Failed to read payload: "));
        assert_eq!(lines[1], "starred octo/b");
    }

    #[test]
    fn test_body_that_is_not_an_array_is_an_error() {
        let (result, output) = print(r#"{"message": "API rate limit exceeded"}"#);

        assert!(matches!(result, Err(ActivityError::ParseEvents(_))));
        assert_eq!(output, "");
    }

    #[test]
    fn test_event_without_type_is_skipped() {
        let body = json!([
            {"type": null, "repo": {"name": "octo/a"}, "payload": {}},
            {"repo": {"name": "octo/c"}},
            {"type": "WatchEvent", "repo": {"name": "octo/b"}, "payload": {"action": "started"}}
        ]);

        let (result, output) = print(&body.to_string());

        assert!(result.is_ok());
        assert_eq!(output, "starred octo/b\n");
    }
}
