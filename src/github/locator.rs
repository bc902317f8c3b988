//! URL parsing and identity wrappers for pull request targeting.

use url::Url;

use super::error::TallyError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, TallyError> {
        if value.is_empty() {
            return Err(TallyError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, TallyError> {
        if value.is_empty() {
            return Err(TallyError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    pub(crate) const fn new(value: u64) -> Result<Self, TallyError> {
        if value == 0 {
            return Err(TallyError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, TallyError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TallyError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Derives the GitHub API base URL from a host string.
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, TallyError> {
    if host.eq_ignore_ascii_case("github.com") {
        Url::parse("https://api.github.com")
            .map_err(|error| TallyError::InvalidUrl(error.to_string()))
    } else {
        let authority = if host.contains(':') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
            .map_err(|error| TallyError::InvalidUrl(error.to_string()))?;

        api_url
            .set_port(port)
            .map_err(|()| TallyError::InvalidUrl("invalid port".to_owned()))?;
        api_url.set_path("api/v3");
        Ok(api_url)
    }
}

/// Derives the GitHub API base URL from a parsed URL.
fn derive_api_base(parsed: &Url) -> Result<Url, TallyError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| TallyError::InvalidUrl("URL must include a host".to_owned()))?;

    derive_api_base_from_host(parsed.scheme(), host, parsed.port())
}

/// Target pull request and derived API base.
///
/// Built either from separate owner/repository/number values (the primary
/// CLI surface) or by parsing a full pull request URL, which also derives
/// the API base for GitHub Enterprise hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Creates a locator from owner, repository name, and pull request
    /// number, targeting the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::MissingPathSegments` when owner or repository is
    /// empty and `TallyError::InvalidPullRequestNumber` when the number is
    /// zero.
    pub fn from_owner_repo(owner: &str, repo: &str, number: u64) -> Result<Self, TallyError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;
        let number = PullRequestNumber::new(number)?;
        let api_base = Url::parse("https://api.github.com")
            .map_err(|error| TallyError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base,
            owner: validated_owner,
            repository,
            number,
        })
    }

    /// Parses a GitHub pull request URL in the form
    /// `https://github.com/<owner>/<repo>/pull/<number>`.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidUrl` when parsing fails,
    /// `MissingPathSegments` when the URL path is not
    /// `/owner/repo/pull/<number>`, and `InvalidPullRequestNumber` when the
    /// final segment is not a positive integer.
    pub fn parse(input: &str) -> Result<Self, TallyError> {
        let parsed =
            Url::parse(input).map_err(|error| TallyError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or(TallyError::MissingPathSegments)?;

        let owner_segment = segments.next().ok_or(TallyError::MissingPathSegments)?;
        let repository_segment = segments.next().ok_or(TallyError::MissingPathSegments)?;
        let marker = segments.next().ok_or(TallyError::MissingPathSegments)?;
        let number_segment = segments.next().ok_or(TallyError::MissingPathSegments)?;

        if marker != "pull" {
            return Err(TallyError::MissingPathSegments);
        }

        if number_segment.is_empty() {
            return Err(TallyError::MissingPathSegments);
        }

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let number = number_segment
            .parse::<u64>()
            .map_err(|_| TallyError::InvalidPullRequestNumber)
            .and_then(PullRequestNumber::new)?;

        let api_base = derive_api_base(&parsed)?;

        Ok(Self {
            api_base,
            owner,
            repository,
            number,
        })
    }

    /// API base URL derived from the pull request host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    fn endpoint(&self, tail: &str) -> String {
        format!(
            "{base}/repos/{owner}/{repo}/{tail}",
            base = self.api_base.as_str().trim_end_matches('/'),
            owner = self.owner.as_str(),
            repo = self.repository.as_str(),
        )
    }

    /// URL listing comments on the pull request conversation thread.
    pub(crate) fn issue_comments_url(&self) -> String {
        self.endpoint(&format!("issues/{}/comments", self.number.get()))
    }

    /// URL listing diff-anchored review discussion comments.
    pub(crate) fn review_comments_url(&self) -> String {
        self.endpoint(&format!("pulls/{}/comments", self.number.get()))
    }

    /// URL listing review submission records.
    pub(crate) fn review_feedback_url(&self) -> String {
        self.endpoint(&format!("pulls/{}/reviews", self.number.get()))
    }
}
