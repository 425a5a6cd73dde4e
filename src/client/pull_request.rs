//! A pull request on GitHub and its conversation thread.
use std::env;

use async_trait::async_trait;
use reqwest::Method;

use super::{
    GithubApiClient, has_next_page,
    serde_structs::{NewComment, PullRequestInfo, ThreadComment},
};
use crate::{ClientError, CommentPage, IssueComment, PullRequestHandle};

/// A pull request fetched with [`GithubApiClient::get_pull_request()`].
pub struct GithubPullRequest<'a> {
    client: &'a GithubApiClient,
    info: PullRequestInfo,
}

impl GithubApiClient {
    /// Fetch the pull request identified by `number`.
    pub async fn get_pull_request(
        &self,
        number: i64,
    ) -> Result<GithubPullRequest<'_>, ClientError> {
        const TASK: &str = "get pull request info";
        let url = self.repo_url(&format!("pulls/{number}"))?;
        let response = self.call(Method::GET, url, None, TASK).await?;
        let info = serde_json::from_str::<PullRequestInfo>(&response.text().await?)
            .map_err(|e| ClientError::json(TASK, e))?;
        log::debug!(
            "Pull request #{} was submitted by {}",
            info.number,
            info.user.login
        );
        Ok(GithubPullRequest { client: self, info })
    }
}

#[async_trait]
impl<'a> PullRequestHandle for GithubPullRequest<'a> {
    fn number(&self) -> i64 {
        self.info.number
    }

    fn submitter_login(&self) -> &str {
        &self.info.user.login
    }

    async fn issue_comments_page(&self, page: u32) -> Result<CommentPage, ClientError> {
        const TASK: &str = "get thread comments";
        let mut url = self
            .client
            .repo_url(&format!("issues/{}/comments", self.info.number))?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string());
        let response = self.client.call(Method::GET, url, None, TASK).await?;
        let has_next = has_next_page(response.headers());
        let comments = serde_json::from_str::<Vec<ThreadComment>>(&response.text().await?)
            .map_err(|e| ClientError::json(TASK, e))?;
        log::debug!(
            "Got {} comments on page {page} of pull request #{}",
            comments.len(),
            self.info.number
        );
        Ok(CommentPage {
            comments: comments.into_iter().map(IssueComment::from).collect(),
            has_next,
        })
    }

    async fn create_issue_comment(&self, body: &str) -> Result<(), ClientError> {
        const TASK: &str = "post thread comment";
        env::var("GITHUB_TOKEN").map_err(|e| ClientError::env_var("GITHUB_TOKEN", e))?;
        let url = self
            .client
            .repo_url(&format!("issues/{}/comments", self.info.number))?;
        let payload =
            serde_json::to_string(&NewComment { body }).map_err(|e| ClientError::json(TASK, e))?;
        self.client
            .call(Method::POST, url, Some(payload), TASK)
            .await?;
        log::info!("Commented on pull request #{}", self.info.number);
        Ok(())
    }
}
