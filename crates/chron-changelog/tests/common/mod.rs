//! Mock GitHub endpoints shared by the pipeline tests.

#![allow(dead_code)]

use std::time::Duration;

use chron_github::GitHubClient;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const REPO: &str = "owner/repo";
pub const WEB_URL: &str = "https://github.com";

/// 40-character hash made of one repeated hex digit.
pub fn sha(c: char) -> String {
    c.to_string().repeat(40)
}

pub fn client(server: &MockServer) -> GitHubClient {
    GitHubClient::new(&server.uri(), REPO, "ghp_test", Duration::from_secs(5)).unwrap()
}

pub fn commit_json(sha: &str, message: &str, parents: &[String]) -> Value {
    json!({
        "sha": sha,
        "commit": { "message": message },
        "parents": parents.iter().map(|p| json!({ "sha": p })).collect::<Vec<_>>(),
    })
}

pub fn pull_json(number: u64, title: &str, labels: &[&str], state: &str) -> Value {
    json!({
        "number": number,
        "title": title,
        "html_url": format!("{WEB_URL}/{REPO}/pull/{number}"),
        "state": state,
        "labels": labels.iter().map(|l| json!({ "name": l })).collect::<Vec<_>>(),
    })
}

/// `GET /commits/{reference}` resolving to `sha`.
pub async fn mount_commit(server: &MockServer, reference: &str, sha: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/commits/{reference}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(commit_json(sha, "ref", &[])))
        .mount(server)
        .await;
}

/// One page of `GET /commits?sha={from}`.
pub async fn mount_history_page(server: &MockServer, from: &str, page: u32, commits: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/commits")))
        .and(query_param("sha", from))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(commits)))
        .mount(server)
        .await;
}

/// `GET /pulls/{number}`, expected exactly once.
pub async fn mount_pull(server: &MockServer, pull: Value) {
    let number = pull["number"].as_u64().unwrap();
    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/pulls/{number}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(pull))
        .expect(1)
        .mount(server)
        .await;
}

/// `GET /commits/{sha}/pulls`.
pub async fn mount_commit_pulls(server: &MockServer, sha: &str, pulls: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/commits/{sha}/pulls")))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(pulls)))
        .mount(server)
        .await;
}

/// Every commit without a dedicated mock has no associated pull request.
pub async fn mount_no_commit_pulls(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/repos/owner/repo/commits/[0-9a-f]{40}/pulls$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(server)
        .await;
}

/// First page of `GET /tags`, as `(name, sha)` pairs.
pub async fn mount_tags(server: &MockServer, tags: &[(&str, &str)]) {
    let body: Vec<Value> = tags
        .iter()
        .map(|(name, sha)| json!({ "name": name, "commit": { "sha": sha } }))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/tags")))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(body)))
        .mount(server)
        .await;
}

/// `GET /compare/{base}...{head}` reporting `status`, with `ahead_by` commits
/// in `base..head`.
pub async fn mount_compare(
    server: &MockServer,
    base: &str,
    head: &str,
    status: &str,
    ahead_by: u64,
) {
    let behind_by = match status {
        "behind" | "diverged" => 1,
        _ => 0,
    };
    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/compare/{base}...{head}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": status,
            "ahead_by": ahead_by,
            "behind_by": behind_by,
        })))
        .mount(server)
        .await;
}
