//! What the bot needs to know about a pull request, and how it finds and leaves its comment.
//!
//! [`PullRequestHandle`] abstracts the Git server. Comments are read one page
//! at a time so that [`has_commented_as()`] stops requesting pages as soon as
//! it finds the bot's comment.
use async_trait::async_trait;
use rand::Rng;

use crate::{ClientError, generate_pull_request_deployed_comment};

/// The login of the bot account that posts deployment comments.
pub const BOT_LOGIN: &str = "dubious-spongebot";

/// A comment posted on the conversation thread of a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    /// The login of the user that wrote the comment.
    pub author_login: String,

    /// The comment's content.
    pub body: String,
}

/// One page of a pull request's thread comments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPage {
    pub comments: Vec<IssueComment>,

    /// Does the Git server have another page after this one?
    pub has_next: bool,
}

/// A pull request on a Git server, along with the means to read and write its thread comments.
///
/// [`GithubPullRequest`](crate::client::GithubPullRequest) talks to GitHub's REST API.
/// Tests can implement this trait with an in-memory list of comments.
#[async_trait]
pub trait PullRequestHandle: Sync {
    /// The pull request's number.
    fn number(&self) -> i64;

    /// The login of the user who submitted the pull request.
    fn submitter_login(&self) -> &str;

    /// Fetch one page of thread comments, in the order the Git server lists them.
    ///
    /// Pages are numbered from 1.
    async fn issue_comments_page(&self, page: u32) -> Result<CommentPage, ClientError>;

    /// Fetch all thread comments, in the order the Git server lists them.
    async fn list_issue_comments(&self) -> Result<Vec<IssueComment>, ClientError> {
        let mut comments = vec![];
        let mut page = 1;
        loop {
            let batch = self.issue_comments_page(page).await?;
            comments.extend(batch.comments);
            if !batch.has_next {
                return Ok(comments);
            }
            page += 1;
        }
    }

    /// Post a new thread comment with the given `body`.
    async fn create_issue_comment(&self, body: &str) -> Result<(), ClientError>;
}

/// Tells if [`BOT_LOGIN`] has commented on a pull request.
pub async fn has_commented_on_pull_request<H>(pull_request: &H) -> Result<bool, ClientError>
where
    H: PullRequestHandle + ?Sized,
{
    has_commented_as(pull_request, BOT_LOGIN).await
}

/// Tells if the user `login` has commented on a pull request.
///
/// The comparison is exact (case sensitive). Pages after the one holding
/// the first match are not requested.
pub async fn has_commented_as<H>(pull_request: &H, login: &str) -> Result<bool, ClientError>
where
    H: PullRequestHandle + ?Sized,
{
    let mut page = 1;
    loop {
        let batch = pull_request.issue_comments_page(page).await?;
        if batch.comments.iter().any(|c| c.author_login == login) {
            log::debug!(
                "{login} has commented on pull request #{} (page {page})",
                pull_request.number()
            );
            return Ok(true);
        }
        if !batch.has_next {
            break;
        }
        page += 1;
    }
    log::debug!(
        "{login} has not commented on pull request #{}",
        pull_request.number()
    );
    Ok(false)
}

/// Adds a thread comment to a pull request that links to the deployed build.
///
/// Any failure from [`PullRequestHandle::create_issue_comment`] is returned as is.
pub async fn create_pull_request_deployed_comment<H, R>(
    pull_request: &H,
    deploy_directory_name: &str,
    rng: &mut R,
) -> Result<(), ClientError>
where
    H: PullRequestHandle + ?Sized,
    R: Rng + ?Sized,
{
    let body = generate_pull_request_deployed_comment(pull_request, deploy_directory_name, rng);
    pull_request.create_issue_comment(&body).await
}
