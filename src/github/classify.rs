//! Partitioning of review discussion comments into threads.

use super::models::Comment;

/// Review discussion comments split by reply linkage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscussionThreads {
    /// Comments that open a discussion thread.
    pub parents: Vec<Comment>,
    /// Comments that reply to another discussion comment.
    pub children: Vec<Comment>,
}

/// Splits a batch of review discussion comments by reply linkage.
///
/// A comment is a reply exactly when `in_reply_to_id` is present; every
/// element of the batch lands in exactly one partition. Only the review
/// discussion category carries the reply field, so this is never applied
/// to issue comments or review feedback.
#[must_use]
pub fn classify(batch: Vec<Comment>) -> DiscussionThreads {
    let (children, parents): (Vec<Comment>, Vec<Comment>) = batch
        .into_iter()
        .partition(|comment| comment.in_reply_to_id.is_some());

    DiscussionThreads { parents, children }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::classify;
    use crate::github::models::Comment;

    fn comment(author: &str, in_reply_to_id: Option<u64>) -> Comment {
        Comment {
            author: Some(author.to_owned()),
            body: Some("body".to_owned()),
            in_reply_to_id,
        }
    }

    #[rstest]
    fn partitions_by_reply_linkage() {
        let batch = vec![
            comment("alice", None),
            comment("bob", Some(1)),
            comment("carol", None),
            comment("dave", Some(3)),
        ];

        let threads = classify(batch);

        let parents: Vec<_> = threads
            .parents
            .iter()
            .map(|comment| comment.author.as_deref())
            .collect();
        let children: Vec<_> = threads
            .children
            .iter()
            .map(|comment| comment.author.as_deref())
            .collect();
        assert_eq!(parents, vec![Some("alice"), Some("carol")]);
        assert_eq!(children, vec![Some("bob"), Some("dave")]);
    }

    #[rstest]
    #[case::all_parents(vec![comment("a", None), comment("b", None)])]
    #[case::all_children(vec![comment("a", Some(1)), comment("b", Some(1))])]
    #[case::mixed(vec![comment("a", None), comment("b", Some(7))])]
    #[case::empty(Vec::new())]
    fn every_comment_lands_in_exactly_one_partition(#[case] batch: Vec<Comment>) {
        let total = batch.len();

        let threads = classify(batch);

        assert_eq!(threads.parents.len() + threads.children.len(), total);
        assert!(
            threads
                .parents
                .iter()
                .all(|comment| comment.in_reply_to_id.is_none())
        );
        assert!(
            threads
                .children
                .iter()
                .all(|comment| comment.in_reply_to_id.is_some())
        );
    }
}
