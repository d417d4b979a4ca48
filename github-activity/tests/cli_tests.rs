use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;

fn github_activity(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("github-activity").expect("binary should be built");
    cmd.env("GITHUB_ACTIVITY_API_BASE_URL", server.base_url());
    cmd
}

#[test]
fn no_arguments_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();

    github_activity(&server)
        .assert()
        .success()
        .stdout("Usage: github-activity <username>\n");
    Ok(())
}

#[test]
fn help_prints_usage_without_a_request() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("[]");
    });

    for arg in ["help", "-h"] {
        github_activity(&server)
            .arg(arg)
            .assert()
            .success()
            .stdout("Usage: github-activity <username>\n");
    }

    mock.assert_hits(0);
    Ok(())
}

#[test]
fn prints_activity_summaries() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users/octocat/events")
            .header("accept", "application/vnd.github+json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!([
                {"type": "PushEvent", "repo": {"name": "octocat/hello"}, "payload": {"size": 3, "ref": "refs/heads/main"}},
                {"type": "PublicEvent", "repo": {"name": "octocat/hello"}, "payload": {}},
                {"type": "IssuesEvent", "repo": {"name": "octocat/spoon"}, "payload": {"action": "opened"}}
            ]));
    });

    github_activity(&server)
        .arg("octocat")
        .assert()
        .success()
        .stdout(
            "Got response\nShowing activity for octocat\n\npushed 3 commits to octocat/hello\nopened issue at octocat/spoon\n",
        );

    mock.assert();
    Ok(())
}

#[test]
fn error_status_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/ghost/events");
        then.status(404).body(r#"{"message":"Not Found"}"#);
    });

    github_activity(&server)
        .arg("ghost")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(r#"HTTP 404: {"message":"Not Found"}"#));
    Ok(())
}

#[test]
fn malformed_body_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/octocat/events");
        then.status(200).body("<html>");
    });

    github_activity(&server)
        .arg("octocat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse json"));
    Ok(())
}

#[test]
fn blank_username_prints_usage_and_still_fetches() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users//events");
        then.status(200).body("[]");
    });

    github_activity(&server)
        .arg("")
        .assert()
        .success()
        .stdout("Usage: github-activity <username>\nGot response\nShowing activity for \n\n");

    mock.assert();
    Ok(())
}
