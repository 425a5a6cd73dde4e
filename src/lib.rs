#![doc = include_str!("../README.md")]
#[cfg(feature = "github")]
pub mod client;
pub mod error;
pub use error::ClientError;
mod deploy_directory;
pub use deploy_directory::{PULL_REQUEST_PREFIX, parse_deploy_directory_name};
pub mod deployed_comment;
pub use deployed_comment::generate_pull_request_deployed_comment;
mod pull_request;
pub use pull_request::{
    BOT_LOGIN, CommentPage, IssueComment, PullRequestHandle, create_pull_request_deployed_comment,
    has_commented_as, has_commented_on_pull_request,
};
mod greet;
pub use greet::{GreetError, GreetOptions, Greeting, greet, pull_request_to_greet};

#[cfg(test)]
mod fake;
