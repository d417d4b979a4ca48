//! Events from the GitHub public activity feed.
//!
//! The feed is a JSON array of `{type, repo: {name}, payload}` objects where
//! the shape of `payload` depends on `type`. Each element is first decoded
//! into an [`Event`] with the payload left as raw JSON, then the payload is
//! decoded into the [`EventPayload`] variant its tag names.
//!
//! Payload fields that are absent or `null` take their default value. A field
//! of the wrong type is a decode error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One element of the activity feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: Repo,
    /// Left undecoded until the tag has been looked at.
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Repo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PushPayload {
    /// Number of commits in the push.
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(rename = "ref", deserialize_with = "null_as_default")]
    pub git_ref: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CreatePayload {
    #[serde(rename = "ref", deserialize_with = "null_as_default")]
    pub git_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ref_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DeletePayload {
    #[serde(rename = "ref", deserialize_with = "null_as_default")]
    pub git_ref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ref_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ForkPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub forkee: Forkee,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Forkee {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct IssuesPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MemberPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub member: Member,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PullRequestPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ReleasePayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WatchPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
}

/// The typed payload of an event whose tag we know how to summarise.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Push(PushPayload),
    Create(CreatePayload),
    Delete(DeletePayload),
    Fork(ForkPayload),
    Issues(IssuesPayload),
    Member(MemberPayload),
    PullRequest(PullRequestPayload),
    Release(ReleasePayload),
    Watch(WatchPayload),
}

impl EventPayload {
    /// Decodes `payload` according to `kind`.
    ///
    /// Returns `Ok(None)` for tags that have no summary.
    pub fn decode(kind: &str, payload: &Value) -> Result<Option<Self>, serde_json::Error> {
        let decoded = match kind {
            "PushEvent" => EventPayload::Push(decode_payload(payload)?),
            "CreateEvent" => EventPayload::Create(decode_payload(payload)?),
            "DeleteEvent" => EventPayload::Delete(decode_payload(payload)?),
            "ForkEvent" => EventPayload::Fork(decode_payload(payload)?),
            "IssuesEvent" => EventPayload::Issues(decode_payload(payload)?),
            "MemberEvent" => EventPayload::Member(decode_payload(payload)?),
            "PullRequestEvent" => EventPayload::PullRequest(decode_payload(payload)?),
            "ReleaseEvent" => EventPayload::Release(decode_payload(payload)?),
            "WatchEvent" => EventPayload::Watch(decode_payload(payload)?),
            _ => return Ok(None),
        };
        Ok(Some(decoded))
    }

    /// One-line, human readable description of the event.
    pub fn summary(&self, repo_name: &str) -> String {
        match self {
            EventPayload::Push(push) => format!("pushed {} commits to {repo_name}", push.size),
            EventPayload::Create(create) => format!("created {} at {repo_name}", create.ref_type),
            EventPayload::Delete(delete) => format!("deleted {} at {repo_name}", delete.ref_type),
            EventPayload::Fork(fork) => format!("forked {}", fork.forkee.name),
            EventPayload::Issues(issues) => format!("{} issue at {repo_name}", issues.action),
            EventPayload::Member(member) => format!(
                "{} {} to {repo_name}",
                member.action, member.member.name
            ),
            EventPayload::PullRequest(pull_request) => {
                format!("{} pull request at {repo_name}", pull_request.action)
            }
            EventPayload::Release(release) => {
                format!("{} new release at {repo_name}", release.action)
            }
            EventPayload::Watch(_) => format!("starred {repo_name}"),
        }
    }
}

fn decode_payload<T: DeserializeOwned + Default>(payload: &Value) -> Result<T, serde_json::Error> {
    if payload.is_null() {
        return Ok(T::default());
    }
    T::deserialize(payload)
}
