//! GitHub source - tag listings and commit lookups over the REST API.

use serde::Deserialize;
use url::Url;

use crate::core::RepoCoordinate;
use crate::resolver::{Lookup, ResolutionError};
use crate::sources::transport::{HttpResponse, Transport};
use crate::sources::{ObjectKind, RefSource, TagRef};

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const TAG_REF_PREFIX: &str = "refs/tags/";

/// Entry of `GET /repos/{owner}/{repo}/git/refs/tags`.
#[derive(Debug, Deserialize)]
struct GitRef {
    #[serde(rename = "ref")]
    name: String,
    object: GitObject,
}

#[derive(Debug, Deserialize)]
struct GitObject {
    sha: String,
    #[serde(rename = "type", default)]
    kind: String,
}

/// Body of `GET /repos/{owner}/{repo}/commits/{ref}`.
#[derive(Debug, Deserialize)]
struct Commit {
    sha: String,
}

/// A [`RefSource`] backed by the GitHub REST API.
pub struct GitHubSource {
    /// API base URL (github.com or an Enterprise `/api/v3` endpoint)
    api_url: Url,

    /// HTTP transport
    transport: Box<dyn Transport>,
}

impl GitHubSource {
    /// Create a new GitHub source.
    pub fn new(api_url: Url, transport: Box<dyn Transport>) -> Self {
        GitHubSource { api_url, transport }
    }

    /// Get the API base URL.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Build `{api}/repos/{owner}/{repo}/{tail...}`, percent-encoding every segment.
    fn endpoint(&self, repo: &RepoCoordinate, tail: &[&str]) -> Result<Url, ResolutionError> {
        let mut url = self.api_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ResolutionError::InvalidUrl {
                    url: self.api_url.to_string(),
                })?;
            segments
                .pop_if_empty()
                .push("repos")
                .push(repo.owner())
                .push(repo.name())
                .extend(tail);
        }
        Ok(url)
    }

    fn fetch(
        &self,
        lookup: Lookup,
        key: &str,
        url: &Url,
    ) -> Result<HttpResponse, ResolutionError> {
        self.transport
            .get(url)
            .map_err(|source| ResolutionError::Transport {
                lookup,
                key: key.to_string(),
                source,
            })
    }
}

impl RefSource for GitHubSource {
    fn name(&self) -> &str {
        "github"
    }

    fn list_tags(&self, repo: &RepoCoordinate) -> Result<Vec<TagRef>, ResolutionError> {
        let key = repo.to_string();
        let url = self.endpoint(repo, &["git", "refs", "tags"])?;
        let response = self.fetch(Lookup::TagListing, &key, &url)?;

        if response.is_not_found() {
            tracing::debug!(repo = %repo, "no tags");
            return Ok(Vec::new());
        }
        if !response.is_success() {
            return Err(ResolutionError::UnexpectedStatus {
                lookup: Lookup::TagListing,
                key,
                status: response.status,
            });
        }

        let refs: Vec<GitRef> =
            serde_json::from_slice(&response.body).map_err(|source| ResolutionError::Decode {
                lookup: Lookup::TagListing,
                key,
                source,
            })?;

        Ok(refs
            .into_iter()
            .map(|r| TagRef {
                name: r
                    .name
                    .strip_prefix(TAG_REF_PREFIX)
                    .unwrap_or(&r.name)
                    .to_string(),
                target: r.object.sha,
                kind: ObjectKind::from_type(&r.object.kind),
            })
            .collect())
    }

    fn resolve_commit(
        &self,
        repo: &RepoCoordinate,
        commitish: &str,
    ) -> Result<Option<String>, ResolutionError> {
        let key = format!("{}@{}", repo, commitish);
        let url = self.endpoint(repo, &["commits", commitish])?;
        let response = self.fetch(Lookup::Commit, &key, &url)?;

        if response.is_not_found() {
            tracing::debug!(reference = %key, "commit-ish not found");
            return Ok(None);
        }
        if !response.is_success() {
            return Err(ResolutionError::UnexpectedStatus {
                lookup: Lookup::Commit,
                key,
                status: response.status,
            });
        }

        let commit: Commit =
            serde_json::from_slice(&response.body).map_err(|source| ResolutionError::Decode {
                lookup: Lookup::Commit,
                key,
                source,
            })?;

        Ok(Some(commit.sha.to_ascii_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_body, sha_of, MockTransport, API_URL};

    fn repo() -> RepoCoordinate {
        RepoCoordinate::new("octo", "widgets")
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let mock = MockTransport::new();
        let source = mock.source();

        let url = source.endpoint(&repo(), &["commits", "release/v1"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octo/widgets/commits/release%2Fv1"
        );
    }

    #[test]
    fn test_endpoint_keeps_enterprise_prefix() {
        let api = Url::parse("https://ghe.example.com/api/v3/").unwrap();
        let source = GitHubSource::new(api, Box::new(MockTransport::new()));

        let url = source.endpoint(&repo(), &["git", "refs", "tags"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/octo/widgets/git/refs/tags"
        );
    }

    #[test]
    fn test_list_tags_strips_prefix_and_reads_kind() {
        let mock = MockTransport::new();
        mock.mock_url(
            &format!("{API_URL}/repos/octo/widgets/git/refs/tags"),
            HttpResponse::ok(
                r#"[
                    {"ref": "refs/tags/v1.0.0", "object": {"sha": "aaaa", "type": "commit"}},
                    {"ref": "refs/tags/v2.0.0", "object": {"sha": "bbbb", "type": "tag"}}
                ]"#,
            ),
        );

        let tags = mock.source().list_tags(&repo()).unwrap();
        assert_eq!(
            tags,
            vec![
                TagRef {
                    name: "v1.0.0".to_string(),
                    target: "aaaa".to_string(),
                    kind: ObjectKind::Commit,
                },
                TagRef {
                    name: "v2.0.0".to_string(),
                    target: "bbbb".to_string(),
                    kind: ObjectKind::Tag,
                },
            ]
        );
    }

    #[test]
    fn test_list_tags_not_found_is_empty() {
        let mock = MockTransport::new();
        mock.set_default(HttpResponse::not_found());

        assert!(mock.source().list_tags(&repo()).unwrap().is_empty());
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn test_list_tags_unexpected_status() {
        let mock = MockTransport::new();
        mock.set_default(HttpResponse::new(403, "rate limited"));

        let err = mock.source().list_tags(&repo()).unwrap_err();
        assert!(matches!(
            err,
            ResolutionError::UnexpectedStatus {
                lookup: Lookup::TagListing,
                status: 403,
                ..
            }
        ));
    }

    #[test]
    fn test_list_tags_malformed_body() {
        let mock = MockTransport::new();
        mock.set_default(HttpResponse::ok("<html>"));

        let err = mock.source().list_tags(&repo()).unwrap_err();
        assert!(matches!(err, ResolutionError::Decode { .. }));
    }

    #[test]
    fn test_resolve_commit() {
        let mock = MockTransport::new();
        mock.mock_url(
            &format!("{API_URL}/repos/octo/widgets/commits/main"),
            HttpResponse::ok(commit_body(&sha_of('C'))),
        );

        let sha = mock.source().resolve_commit(&repo(), "main").unwrap();
        assert_eq!(sha, Some(sha_of('c')));
    }

    #[test]
    fn test_resolve_commit_not_found() {
        let mock = MockTransport::new();
        mock.set_default(HttpResponse::not_found());

        assert_eq!(mock.source().resolve_commit(&repo(), "nope").unwrap(), None);
    }

    #[test]
    fn test_resolve_commit_server_error() {
        let mock = MockTransport::new();
        mock.set_default(HttpResponse::new(500, ""));

        let err = mock.source().resolve_commit(&repo(), "main").unwrap_err();
        assert!(err.to_string().contains("octo/widgets@main"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_transport_failure() {
        let mock = MockTransport::new();
        mock.fail_url(
            &format!("{API_URL}/repos/octo/widgets/git/refs/tags"),
            "connection refused",
        );

        let err = mock.source().list_tags(&repo()).unwrap_err();
        assert!(matches!(err, ResolutionError::Transport { .. }));
    }
}
