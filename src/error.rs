//! Errors raised while talking to GitHub.
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Something went wrong while reading from or writing to GitHub's REST API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not build or send a request.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// A request made for `task` failed, either in transit or with an error status.
    #[error("Failed to {task}: {source}")]
    RequestContext {
        task: String,
        #[source]
        source: reqwest::Error,
    },

    /// No API calls are left and GitHub did not say when they come back.
    #[error("GitHub API rate limit used up (no reset time given)")]
    RateLimitNoReset,

    /// No API calls are left until the given time.
    #[error("GitHub API rate limit used up until {0}")]
    RateLimitPrimary(DateTime<Utc>),

    /// GitHub kept asking to back off, even after the last retry.
    #[error("GitHub API still asked to back off after the last retry")]
    RateLimitSecondary,

    /// Requests with a streamed body can not be sent twice.
    #[error("Request can not be cloned for another attempt")]
    CannotCloneRequest,

    #[error("Invalid HTTP header value")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A JSON payload made for (or received from) `task` is malformed.
    #[error("Failed to {task}: {source}")]
    Json {
        task: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Environment variable {name} is unusable: {source}")]
    EnvVar {
        name: String,
        #[source]
        source: std::env::VarError,
    },
}

impl ClientError {
    pub(crate) fn env_var(name: &str, source: std::env::VarError) -> Self {
        Self::EnvVar {
            name: name.to_string(),
            source,
        }
    }

    pub(crate) fn json(task: &str, source: serde_json::Error) -> Self {
        Self::Json {
            task: task.to_string(),
            source,
        }
    }

    /// Name the `task` a bare [`Self::Request`] error happened in.
    ///
    /// Other variants already say what failed and are returned as is.
    pub(crate) fn during(self, task: &str) -> Self {
        match self {
            Self::Request(source) => Self::RequestContext {
                task: task.to_string(),
                source,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClientError;

    #[test]
    fn task_only_names_request_errors() {
        let err = ClientError::CannotCloneRequest.during("post thread comment");
        assert!(matches!(err, ClientError::CannotCloneRequest));
    }

    #[test]
    fn env_var_message() {
        let err = ClientError::env_var("GITHUB_REPOSITORY", std::env::VarError::NotPresent);
        assert!(
            err.to_string()
                .starts_with("Environment variable GITHUB_REPOSITORY is unusable")
        );
    }

    #[test]
    fn json_message() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = ClientError::json("read pull request", source);
        assert!(err.to_string().starts_with("Failed to read pull request: "));
    }
}
