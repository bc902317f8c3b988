//! GitHub pull request comment intake and statistics.
//!
//! This module fetches the three comment categories attached to a pull
//! request (issue comments, review discussion comments, and review
//! submissions) over the paged REST API, applies a shared exclusion policy,
//! partitions discussion comments into threads, and assembles counts.
//! Errors are mapped into user-friendly variants so that callers can
//! surface precise failures without exposing transport internals.

pub mod classify;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod stats;

pub use classify::{DiscussionThreads, classify};
pub use error::TallyError;
pub use filter::ExclusionPolicy;
pub use gateway::{CommentGateway, ReqwestCommentGateway};
pub use locator::{
    PersonalAccessToken, PullRequestLocator, PullRequestNumber, RepositoryName, RepositoryOwner,
};
pub use models::Comment;
pub use stats::{CommentStats, CommentStatsCollector};

#[cfg(test)]
pub use gateway::MockCommentGateway;
