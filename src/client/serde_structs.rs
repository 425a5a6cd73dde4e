//! JSON payloads exchanged with GitHub, trimmed to the fields the bot reads.
use serde::{Deserialize, Serialize};

use crate::IssueComment;

/// `GET /repos/{repo}/pulls/{number}`
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PullRequestInfo {
    pub number: i64,
    /// Who opened the pull request.
    pub user: User,
}

/// An element of `GET /repos/{repo}/issues/{number}/comments`
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ThreadComment {
    /// Absent for comments whose content was removed.
    #[serde(default)]
    pub body: Option<String>,
    pub user: User,
}

impl From<ThreadComment> for IssueComment {
    fn from(comment: ThreadComment) -> Self {
        Self {
            author_login: comment.user.login,
            body: comment.body.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct User {
    pub login: String,
}

/// `POST /repos/{repo}/issues/{number}/comments`
#[derive(Debug, Serialize)]
pub struct NewComment<'a> {
    pub body: &'a str,
}
