//! The decisions made for each deployed build: which pull request to greet, and whether to.
use rand::Rng;
use thiserror::Error;

use crate::{
    BOT_LOGIN, ClientError, PullRequestHandle, create_pull_request_deployed_comment,
    has_commented_as, parse_deploy_directory_name,
};

/// Why greeting a deployed build failed.
#[derive(Debug, Error)]
pub enum GreetError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The deploy directory does not name a pull request,
    /// and [`GreetOptions::require_pull_request`] is set.
    #[error("Deploy directory '{0}' does not belong to a pull request")]
    NotAPullRequest(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetOptions {
    /// The account whose earlier comment means the pull request was greeted already.
    pub bot_login: String,

    /// Greet even if the bot already commented.
    pub force: bool,

    /// Treat builds that don't belong to a pull request as an error.
    pub require_pull_request: bool,
}

impl Default for GreetOptions {
    fn default() -> Self {
        Self {
            bot_login: BOT_LOGIN.to_string(),
            force: false,
            require_pull_request: false,
        }
    }
}

/// What [`greet()`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Posted,
    AlreadyGreeted,
}

/// The number of the pull request a deployed build belongs to, if any.
///
/// Builds of branches are normal; they are `None` unless
/// [`GreetOptions::require_pull_request`] is set.
pub fn pull_request_to_greet(
    deploy_directory_name: &str,
    options: &GreetOptions,
) -> Result<Option<i64>, GreetError> {
    match parse_deploy_directory_name(deploy_directory_name) {
        Some(number) => Ok(Some(number)),
        None if options.require_pull_request => Err(GreetError::NotAPullRequest(
            deploy_directory_name.to_string(),
        )),
        None => {
            log::info!("'{deploy_directory_name}' is not a pull request's build. Nothing to do.");
            Ok(None)
        }
    }
}

/// Post the deployment comment, unless [`GreetOptions::bot_login`] already commented.
///
/// [`GreetOptions::force`] skips looking for an earlier comment.
pub async fn greet<H, R>(
    pull_request: &H,
    deploy_directory_name: &str,
    options: &GreetOptions,
    rng: &mut R,
) -> Result<Greeting, ClientError>
where
    H: PullRequestHandle + ?Sized,
    R: Rng + ?Sized,
{
    if !options.force && has_commented_as(pull_request, &options.bot_login).await? {
        log::info!(
            "{} already commented on pull request #{}",
            options.bot_login,
            pull_request.number()
        );
        return Ok(Greeting::AlreadyGreeted);
    }
    create_pull_request_deployed_comment(pull_request, deploy_directory_name, rng).await?;
    Ok(Greeting::Posted)
}
