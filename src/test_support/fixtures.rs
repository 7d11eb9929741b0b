//! Test fixtures for common test scenarios.
//!
//! Canned GitHub API bodies, endpoint URLs, and workflow files.

use std::path::{Path, PathBuf};

use serde_json::json;

/// API base URL used by [`MockTransport::source`](super::MockTransport::source).
pub const API_URL: &str = "https://api.github.com";

/// A fake 40-character SHA made of one repeated hex digit.
pub fn sha_of(ch: char) -> String {
    ch.to_string().repeat(40)
}

/// Tag listing URL for `owner/repo`.
pub fn tags_url(repo: &str) -> String {
    format!("{API_URL}/repos/{repo}/git/refs/tags")
}

/// Commit lookup URL for `owner/repo` at `git_ref`.
pub fn commit_url(repo: &str, git_ref: &str) -> String {
    format!("{API_URL}/repos/{repo}/commits/{git_ref}")
}

/// Tag listing body of lightweight tags: `(name, commit sha)` pairs.
pub fn tags_body(tags: &[(&str, &str)]) -> String {
    listing(tags, "commit")
}

/// Tag listing body of annotated tags: `(name, tag object sha)` pairs.
pub fn annotated_tags_body(tags: &[(&str, &str)]) -> String {
    listing(tags, "tag")
}

fn listing(tags: &[(&str, &str)], kind: &str) -> String {
    let refs: Vec<_> = tags
        .iter()
        .map(|(name, sha)| {
            json!({
                "ref": format!("refs/tags/{name}"),
                "node_id": "MDM6UmVmcmVmcy90YWdz",
                "object": { "sha": sha, "type": kind },
            })
        })
        .collect();
    serde_json::Value::Array(refs).to_string()
}

/// Commit lookup body.
pub fn commit_body(sha: &str) -> String {
    json!({ "sha": sha, "node_id": "C_kwDOA", "commit": { "message": "fixture" } }).to_string()
}

/// Write a workflow file under `dir`, creating parent directories.
pub fn write_workflow(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create workflow dir");
    }
    std::fs::write(&path, content).expect("failed to write workflow");
    path
}

/// A workflow whose references must all be left alone.
pub const SKIP_ONLY_WORKFLOW: &str = r#"name: SkipCases
on: push
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: ./local/action
      - uses: ../local/action@v1
      - uses: /abs/local/action
      - uses: docker://alpine:latest
      - uses: https://example.com/foo@v1
      - uses: acme/foo@${{ github.ref }}
      - uses: actions/checkout@8e5e7e5ab8b370d6c329ec480221332ada57f0ab # v4.1.0
      - run: echo done
"#;
