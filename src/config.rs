//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.tally.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `TALLY_OWNER`, `TALLY_TOKEN`, or legacy
//!    `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--owner`/`-o`, `--repo`/`-r`, and so on
//!
//! # Configuration File
//!
//! Place `.tally.toml` in the current directory, home directory, or XDG
//! config directory with:
//!
//! ```toml
//! owner = "octocat"
//! repo = "hello-world"
//! pr_number = 123
//! token = "ghp_example"
//! excluded_users = "dependabot[bot], renovate[bot]"
//! excluded_keywords = "lgtm, looks good"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::TallyError;
use crate::github::filter::ExclusionPolicy;
use crate::github::locator::PullRequestLocator;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `TALLY_PR_URL` or `--pr-url`: Pull request URL target
/// - `TALLY_OWNER` or `--owner`: Repository owner
/// - `TALLY_REPO` or `--repo`: Repository name
/// - `TALLY_PR_NUMBER` or `--pr-number`: Pull request number
/// - `TALLY_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `TALLY_EXCLUDED_USERS` or `--excluded-users`: Comma-separated logins
/// - `TALLY_EXCLUDED_KEYWORDS` or `--excluded-keywords`: Comma-separated
///   patterns
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TALLY",
    discovery(
        dotfile_name = ".tally.toml",
        config_file_name = "tally.toml",
        app_name = "tally"
    )
)]
pub struct TallyConfig {
    /// Full pull request URL target.
    ///
    /// Takes precedence over `owner`/`repo`/`pr_number` when present, and
    /// also derives the API base for GitHub Enterprise hosts.
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Repository owner (e.g., "octocat").
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Pull request number.
    #[ortho_config(cli_short = 'p')]
    pub pr_number: Option<u64>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Falls back to the legacy `GITHUB_TOKEN` environment variable when no
    /// other source provides a value.
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Comma-separated author logins whose comments are excluded.
    #[ortho_config()]
    pub excluded_users: Option<String>,

    /// Comma-separated keyword patterns; matching comments are excluded.
    ///
    /// Patterns are regular expressions applied case-insensitively to the
    /// comment body.
    #[ortho_config()]
    pub excluded_keywords: Option<String>,
}

/// Splits a comma-separated list value, trimming whitespace and dropping
/// empty entries.
fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

impl TallyConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, TallyError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(TallyError::MissingToken)
    }

    /// Resolves the target pull request from configuration.
    ///
    /// A configured `pr_url` takes precedence; otherwise `owner`, `repo`,
    /// and `pr_number` must all be present.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Configuration`] with usage guidance when a
    /// required parameter is missing, or a locator parse error when the
    /// configured values are invalid.
    pub fn locator(&self) -> Result<PullRequestLocator, TallyError> {
        if let Some(pr_url) = self.pr_url.as_deref() {
            return PullRequestLocator::parse(pr_url);
        }

        let owner = self.owner.as_deref().ok_or_else(|| missing_parameter(
            "repository owner",
            "--owner or -o, or TALLY_OWNER",
        ))?;
        let repo = self.repo.as_deref().ok_or_else(|| missing_parameter(
            "repository name",
            "--repo or -r, or TALLY_REPO",
        ))?;
        let number = self.pr_number.ok_or_else(|| missing_parameter(
            "pull request number",
            "--pr-number or -p, or TALLY_PR_NUMBER",
        ))?;

        PullRequestLocator::from_owner_repo(owner, repo, number)
    }

    /// Author logins excluded from every comment category.
    #[must_use]
    pub fn excluded_users(&self) -> Vec<String> {
        split_list(self.excluded_users.as_deref())
    }

    /// Keyword patterns excluded from every comment category.
    #[must_use]
    pub fn excluded_keywords(&self) -> Vec<String> {
        split_list(self.excluded_keywords.as_deref())
    }

    /// Compiles the exclusion policy from the configured lists.
    ///
    /// # Errors
    ///
    /// Returns [`TallyError::Configuration`] when an excluded keyword is not
    /// a valid regular expression.
    pub fn exclusion_policy(&self) -> Result<ExclusionPolicy, TallyError> {
        ExclusionPolicy::new(self.excluded_users(), &self.excluded_keywords())
    }
}

fn missing_parameter(name: &str, usage: &str) -> TallyError {
    TallyError::Configuration {
        message: format!("{name} is required (use {usage})"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{TallyConfig, split_list};
    use crate::github::error::TallyError;

    #[rstest]
    #[case::absent(None, Vec::new())]
    #[case::empty(Some(""), Vec::new())]
    #[case::single(Some("alice"), vec!["alice".to_owned()])]
    #[case::trims_and_drops_empties(
        Some(" alice , ,bob ,"),
        vec!["alice".to_owned(), "bob".to_owned()]
    )]
    fn split_list_trims_entries(#[case] value: Option<&str>, #[case] expected: Vec<String>) {
        assert_eq!(split_list(value), expected);
    }

    #[rstest]
    fn locator_prefers_pr_url_over_parts() {
        let config = TallyConfig {
            pr_url: Some("https://github.com/octo/cat/pull/7".to_owned()),
            owner: Some("other".to_owned()),
            repo: Some("repo".to_owned()),
            pr_number: Some(99),
            ..Default::default()
        };

        let locator = config.locator().expect("locator should build");
        assert_eq!(locator.owner().as_str(), "octo");
        assert_eq!(locator.number().get(), 7);
    }

    #[rstest]
    fn locator_builds_from_owner_repo_number() {
        let config = TallyConfig {
            owner: Some("octo".to_owned()),
            repo: Some("cat".to_owned()),
            pr_number: Some(42),
            ..Default::default()
        };

        let locator = config.locator().expect("locator should build");
        assert_eq!(locator.owner().as_str(), "octo");
        assert_eq!(locator.repository().as_str(), "cat");
        assert_eq!(locator.number().get(), 42);
    }

    #[rstest]
    #[case::missing_owner(None, Some("cat"), Some(42), "--owner")]
    #[case::missing_repo(Some("octo"), None, Some(42), "--repo")]
    #[case::missing_number(Some("octo"), Some("cat"), None, "--pr-number")]
    fn locator_reports_missing_parameter_with_usage_hint(
        #[case] owner: Option<&str>,
        #[case] repo: Option<&str>,
        #[case] pr_number: Option<u64>,
        #[case] hint: &str,
    ) {
        let config = TallyConfig {
            owner: owner.map(ToOwned::to_owned),
            repo: repo.map(ToOwned::to_owned),
            pr_number,
            ..Default::default()
        };

        let error = config.locator().expect_err("locator should fail");
        match error {
            TallyError::Configuration { message } => {
                assert!(message.contains(hint), "message should mention {hint}: {message}");
            }
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[rstest]
    fn resolve_token_returns_value_when_present() {
        let config = TallyConfig {
            token: Some("my-token".to_owned()),
            ..Default::default()
        };

        assert_eq!(config.resolve_token().ok(), Some("my-token".to_owned()));
    }

    #[rstest]
    fn resolve_token_falls_back_to_legacy_environment_variable() {
        let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
        let config = TallyConfig::default();

        assert_eq!(config.resolve_token().ok(), Some("legacy-token".to_owned()));
    }

    #[rstest]
    fn resolve_token_returns_error_when_no_source_provides_one() {
        let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
        let config = TallyConfig::default();

        assert!(config.resolve_token().is_err());
    }

    #[rstest]
    fn exclusion_policy_compiles_from_comma_lists() {
        let config = TallyConfig {
            excluded_users: Some("bot, dependabot[bot]".to_owned()),
            excluded_keywords: Some("lgtm, looks good".to_owned()),
            ..Default::default()
        };

        assert!(config.exclusion_policy().is_ok());
    }

    #[rstest]
    fn exclusion_policy_rejects_invalid_pattern() {
        let config = TallyConfig {
            excluded_keywords: Some("[unclosed".to_owned()),
            ..Default::default()
        };

        let error = config.exclusion_policy().expect_err("pattern should be rejected");
        assert!(
            matches!(error, TallyError::Configuration { .. }),
            "expected Configuration error, got {error:?}"
        );
    }
}
