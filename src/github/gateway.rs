//! Gateways for fetching pull request comment categories.
//!
//! The trait-based design enables mocking in tests while the reqwest-backed
//! implementation handles real HTTP requests, following GitHub's `Link`
//! header pagination until every page has been consumed.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, LINK};

use super::error::TallyError;
use super::locator::{PersonalAccessToken, PullRequestLocator};
use super::models::{ApiComment, Comment};
use super::pagination::next_page_url;

/// Gateway that can load the three comment categories of a pull request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentGateway: Send + Sync {
    /// Fetch all comments on the pull request conversation thread.
    async fn issue_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Comment>, TallyError>;

    /// Fetch all diff-anchored review discussion comments.
    async fn review_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Comment>, TallyError>;

    /// Fetch all review submission records.
    async fn review_feedback(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Comment>, TallyError>;
}

/// Reqwest-backed gateway with token authentication.
pub struct ReqwestCommentGateway {
    client: reqwest::Client,
    token: PersonalAccessToken,
}

impl ReqwestCommentGateway {
    /// Creates a gateway that authenticates every request with the token.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Network` when the HTTP client cannot be built.
    pub fn new(token: PersonalAccessToken) -> Result<Self, TallyError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tally/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| TallyError::Network {
                message: format!("build HTTP client failed: {error}"),
            })?;
        Ok(Self { client, token })
    }

    /// Fetches every page of a comment listing, starting from `initial_url`.
    ///
    /// Each page is requested with an authenticated GET. The response's
    /// `Link` header decides whether another page follows; fetching stops as
    /// soon as no `rel="next"` entry is present. A non-success status aborts
    /// the run immediately without requesting further pages.
    async fn fetch_all(&self, initial_url: String) -> Result<Vec<Comment>, TallyError> {
        let mut collected = Vec::new();
        let mut next_url = Some(initial_url);

        while let Some(url) = next_url.take() {
            tracing::debug!("fetching comment page: {url}");
            let response = self
                .client
                .get(url.as_str())
                .header(
                    AUTHORIZATION,
                    format!("token {token}", token = self.token.value()),
                )
                .send()
                .await
                .map_err(|error| TallyError::Network {
                    message: format!("GET {url} failed: {error}"),
                })?;

            let status = response.status();
            let next_link = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page_url)
                .map(ToOwned::to_owned);

            let body = response.text().await.map_err(|error| TallyError::Network {
                message: format!("reading response from {url} failed: {error}"),
            })?;

            if !status.is_success() {
                return Err(TallyError::Http {
                    url,
                    status: status.as_u16(),
                    body,
                });
            }

            let page: Vec<ApiComment> =
                serde_json::from_str(&body).map_err(|error| TallyError::MalformedResponse {
                    url,
                    message: error.to_string(),
                })?;

            tracing::debug!("fetched {count} comments from this page", count = page.len());
            collected.extend(page.into_iter().map(Comment::from));
            next_url = next_link;
        }

        Ok(collected)
    }
}

#[async_trait]
impl CommentGateway for ReqwestCommentGateway {
    async fn issue_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Comment>, TallyError> {
        self.fetch_all(locator.issue_comments_url()).await
    }

    async fn review_comments(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Comment>, TallyError> {
        self.fetch_all(locator.review_comments_url()).await
    }

    async fn review_feedback(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Comment>, TallyError> {
        self.fetch_all(locator.review_feedback_url()).await
    }
}
