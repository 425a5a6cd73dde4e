//! An in-memory pull request for unit tests.
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{ClientError, CommentPage, IssueComment, PullRequestHandle};

/// Submitted by `alice` unless built with [`FakePullRequest::submitted_by()`].
#[derive(Default)]
pub(crate) struct FakePullRequest {
    pub submitter: Option<&'static str>,
    pub pages: Vec<Vec<IssueComment>>,
    pub fail_listing: bool,
    pub fail_posting: bool,
    pub served: Mutex<Vec<u32>>,
    pub posted: Mutex<Vec<String>>,
}

impl FakePullRequest {
    pub fn submitted_by(login: &'static str) -> Self {
        Self {
            submitter: Some(login),
            ..Default::default()
        }
    }

    pub fn with_pages(pages: &[&[&str]]) -> Self {
        let pages = pages
            .iter()
            .map(|authors| {
                authors
                    .iter()
                    .map(|a| IssueComment {
                        author_login: a.to_string(),
                        body: format!("comment from {a}"),
                    })
                    .collect()
            })
            .collect();
        Self {
            pages,
            ..Default::default()
        }
    }

    /// The page numbers requested so far.
    pub fn pages_served(&self) -> Vec<u32> {
        self.served.lock().unwrap().clone()
    }

    /// The bodies of comments posted so far.
    pub fn posted(&self) -> Vec<String> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestHandle for FakePullRequest {
    fn number(&self) -> i64 {
        42
    }

    fn submitter_login(&self) -> &str {
        self.submitter.unwrap_or("alice")
    }

    async fn issue_comments_page(&self, page: u32) -> Result<CommentPage, ClientError> {
        if self.fail_listing {
            return Err(ClientError::CannotCloneRequest);
        }
        self.served.lock().unwrap().push(page);
        let index = page.saturating_sub(1) as usize;
        Ok(CommentPage {
            comments: self.pages.get(index).cloned().unwrap_or_default(),
            has_next: index + 1 < self.pages.len(),
        })
    }

    async fn create_issue_comment(&self, body: &str) -> Result<(), ClientError> {
        if self.fail_posting {
            return Err(ClientError::RateLimitNoReset);
        }
        self.posted.lock().unwrap().push(body.to_string());
        Ok(())
    }
}
