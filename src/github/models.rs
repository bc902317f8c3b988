//! Data models for pull request comment records.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into the public domain type. Only the fields the statistics
//! pipeline interprets are decoded; everything else in the GitHub payload
//! is ignored.

use serde::Deserialize;

/// A single comment record from any of the three comment categories.
///
/// Issue comments, review discussion comments, and review submission
/// records all share this shape; only review discussion comments ever
/// carry `in_reply_to_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Author login, absent when GitHub omits the user or its login.
    pub author: Option<String>,
    /// Comment body.
    pub body: Option<String>,
    /// Identifier of the comment this one replies to, if any.
    pub in_reply_to_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComment {
    pub(super) body: Option<String>,
    pub(super) user: Option<ApiUser>,
    pub(super) in_reply_to_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

impl From<ApiComment> for Comment {
    fn from(value: ApiComment) -> Self {
        Self {
            author: value.user.and_then(|user| user.login),
            body: value.body,
            in_reply_to_id: value.in_reply_to_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{ApiComment, Comment};

    #[rstest]
    fn api_comment_deserialises_interpreted_fields() {
        let value = json!({
            "id": 456,
            "body": "Needs a test.",
            "user": { "login": "reviewer" },
            "in_reply_to_id": 123,
            "path": "src/main.rs",
            "created_at": "2025-01-01T00:00:00Z"
        });

        let api: ApiComment = serde_json::from_value(value).expect("ApiComment should deserialise");
        let comment: Comment = api.into();

        assert_eq!(comment.author.as_deref(), Some("reviewer"));
        assert_eq!(comment.body.as_deref(), Some("Needs a test."));
        assert_eq!(comment.in_reply_to_id, Some(123));
    }

    #[rstest]
    #[case::all_optional_fields_null(json!({
        "body": null,
        "user": null,
        "in_reply_to_id": null
    }))]
    #[case::optional_fields_absent(json!({}))]
    fn api_comment_deserialises_with_missing_optional_fields(#[case] value: serde_json::Value) {
        let api: ApiComment =
            serde_json::from_value(value).expect("should deserialise with missing fields");
        let comment: Comment = api.into();

        assert!(comment.author.is_none());
        assert!(comment.body.is_none());
        assert!(comment.in_reply_to_id.is_none());
    }

    #[rstest]
    fn api_comment_drops_author_when_login_absent() {
        let value = json!({
            "body": "ghost comment",
            "user": {}
        });

        let api: ApiComment = serde_json::from_value(value).expect("ApiComment should deserialise");
        let comment: Comment = api.into();

        assert!(comment.author.is_none());
        assert_eq!(comment.body.as_deref(), Some("ghost comment"));
    }
}
