//! High-level comment statistics collection used by the CLI.

use super::classify::classify;
use super::error::TallyError;
use super::filter::ExclusionPolicy;
use super::gateway::CommentGateway;
use super::locator::PullRequestLocator;

/// Aggregate comment counts for one pull request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentStats {
    /// Conversation-thread comments that passed the exclusion policy.
    pub issue_comments: usize,
    /// Review submission records that passed the exclusion policy.
    pub review_feedback: usize,
    /// Top-level review discussion comments.
    pub discussion_parents: usize,
    /// Replies within review discussion threads.
    pub discussion_children: usize,
}

impl CommentStats {
    /// Total independent review actions.
    ///
    /// Replies continue an existing discussion thread rather than starting
    /// a new one, so child comments are not counted here.
    #[must_use]
    pub const fn total_reviews(&self) -> usize {
        self.discussion_parents + self.issue_comments + self.review_feedback
    }
}

/// Aggregates filtered comment counts using a gateway.
pub struct CommentStatsCollector<'client, Gateway>
where
    Gateway: CommentGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> CommentStatsCollector<'client, Gateway>
where
    Gateway: CommentGateway,
{
    /// Create a new collector using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Collects filtered comment counts for the target pull request.
    ///
    /// Runs the fetch-then-filter pipeline once per comment category with
    /// the same exclusion policy, then partitions the review discussion
    /// batch into threads. The categories are independent, so sequential
    /// execution order does not affect the counts.
    ///
    /// # Errors
    ///
    /// Propagates the first gateway failure unchanged; a failed category
    /// fetch aborts the whole collection rather than degrading to partial
    /// counts.
    pub async fn collect(
        &self,
        locator: &PullRequestLocator,
        policy: &ExclusionPolicy,
    ) -> Result<CommentStats, TallyError> {
        let issue_comments = policy.apply(self.client.issue_comments(locator).await?);
        let discussion = policy.apply(self.client.review_comments(locator).await?);
        let feedback = policy.apply(self.client.review_feedback(locator).await?);

        let threads = classify(discussion);

        Ok(CommentStats {
            issue_comments: issue_comments.len(),
            review_feedback: feedback.len(),
            discussion_parents: threads.parents.len(),
            discussion_children: threads.children.len(),
        })
    }
}
