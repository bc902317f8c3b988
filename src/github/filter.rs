//! Comment exclusion policy shared by every fetch pipeline.

use regex::{Regex, RegexBuilder};

use super::error::TallyError;
use super::models::Comment;

/// Rules deciding which comments are dropped before counting.
///
/// A comment is excluded when its author login matches an excluded user
/// exactly (case-sensitive), when its body matches any excluded pattern
/// case-insensitively as an unanchored substring, or when its body trims
/// down to nothing. Either rule set may be empty, disabling that axis.
#[derive(Debug, Default)]
pub struct ExclusionPolicy {
    excluded_users: Vec<String>,
    excluded_patterns: Vec<Regex>,
}

impl ExclusionPolicy {
    /// Compiles a policy from user logins and keyword patterns.
    ///
    /// Keywords are regular expressions compiled case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Configuration` when a keyword is not a valid
    /// regular expression.
    pub fn new(excluded_users: Vec<String>, excluded_keywords: &[String]) -> Result<Self, TallyError> {
        let excluded_patterns = excluded_keywords
            .iter()
            .map(|keyword| {
                RegexBuilder::new(keyword)
                    .case_insensitive(true)
                    .build()
                    .map_err(|error| TallyError::Configuration {
                        message: format!("invalid excluded keyword pattern `{keyword}`: {error}"),
                    })
            })
            .collect::<Result<Vec<_>, TallyError>>()?;

        Ok(Self {
            excluded_users,
            excluded_patterns,
        })
    }

    /// Returns the comments that pass every exclusion rule.
    ///
    /// Pure and order-preserving; applying the same policy twice yields the
    /// same result as applying it once.
    #[must_use]
    pub fn apply(&self, batch: Vec<Comment>) -> Vec<Comment> {
        batch
            .into_iter()
            .filter(|comment| !self.excludes(comment))
            .collect()
    }

    fn excludes(&self, comment: &Comment) -> bool {
        if comment
            .author
            .as_deref()
            .is_some_and(|author| self.excluded_users.iter().any(|user| user == author))
        {
            return true;
        }

        let body = comment.body.as_deref().unwrap_or("");
        if self
            .excluded_patterns
            .iter()
            .any(|pattern| pattern.is_match(body))
        {
            return true;
        }

        body.trim().is_empty()
    }
}
