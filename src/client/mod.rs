//! A client for the few GitHub REST API endpoints the bot uses.
//!
//! Everything is configured from the environment GitHub Actions provides,
//! see [`GithubApiClient::new()`].
use std::env;

use reqwest::{
    Client, Method, Response, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{BOT_LOGIN, ClientError};

mod pull_request;
pub use pull_request::GithubPullRequest;
mod rate_limit;
mod serde_structs;

/// The `User-Agent` header sent with every request.
pub static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const DEFAULT_API_URL: &str = "https://api.github.com";

/// A connection to GitHub's REST API, scoped to one repository.
pub struct GithubApiClient {
    client: Client,

    /// From `GITHUB_API_URL`.
    api_url: Url,

    /// The `owner/name` from `GITHUB_REPOSITORY`.
    repo: String,

    /// Is `ACTIONS_STEP_DEBUG` set to `true`?
    pub debug_enabled: bool,

    /// The bot's account login.
    ///
    /// This is the value of the `SPONGEBOT_LOGIN` environment variable,
    /// or [`BOT_LOGIN`] if that is not set.
    pub bot_login: String,
}

impl GithubApiClient {
    /// Configure a client from the environment.
    ///
    /// `GITHUB_REPOSITORY` is required. `GITHUB_TOKEN` is only needed to post comments;
    /// a missing token is warned about here and reported when posting.
    pub fn new() -> Result<Self, ClientError> {
        let api_url = env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        // `Url::join` drops the last path segment unless it ends with a slash.
        let api_url = Url::parse(&format!("{}/", api_url.trim_end_matches('/')))?;
        let repo = env::var("GITHUB_REPOSITORY")
            .map_err(|e| ClientError::env_var("GITHUB_REPOSITORY", e))?;
        Ok(Self {
            client: Client::builder()
                .default_headers(Self::default_headers()?)
                .user_agent(USER_AGENT)
                .build()?,
            api_url,
            repo,
            debug_enabled: env::var("ACTIONS_STEP_DEBUG").is_ok_and(|val| val == "true"),
            bot_login: env::var("SPONGEBOT_LOGIN")
                .ok()
                .filter(|login| !login.is_empty())
                .unwrap_or_else(|| BOT_LOGIN.to_string()),
        })
    }

    /// Print a line that opens a collapsible group in the CI job's log.
    ///
    /// The line is logged with the target `"CI_LOG_GROUPING"`. A [`log`]
    /// implementation should print such records without any prefix:
    ///
    /// ```
    /// struct MyAppLogger;
    /// impl log::Log for MyAppLogger {
    /// #    fn enabled(&self, metadata: &log::Metadata) -> bool {
    /// #        metadata.level() <= log::max_level()
    /// #    }
    ///     fn log(&self, record: &log::Record) {
    ///         if record.target() == "CI_LOG_GROUPING" {
    ///             println!("{}", record.args());
    ///         } else {
    ///             println!("[{:>5}]: {}", record.level(), record.args());
    ///         }
    ///     }
    /// #    fn flush(&self) {}
    /// }
    /// ```
    pub fn start_log_group(name: &str) {
        log::info!(target: "CI_LOG_GROUPING", "::group::{name}");
    }

    /// Close the group opened by [`GithubApiClient::start_log_group()`].
    pub fn end_log_group() {
        log::info!(target: "CI_LOG_GROUPING", "::endgroup::");
    }

    fn default_headers() -> Result<HeaderMap<HeaderValue>, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.raw+json"),
        );
        match env::var("GITHUB_TOKEN") {
            Ok(token) => {
                log::debug!("Authenticating with GITHUB_TOKEN");
                let mut value = HeaderValue::from_str(&format!("token {token}"))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => log::warn!("GITHUB_TOKEN is not set; comments can not be posted"),
        }
        Ok(headers)
    }

    /// The URL of `path` under this repository's endpoints.
    fn repo_url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.api_url.join(&format!("repos/{}/{path}", self.repo))?)
    }

    /// Send a request made for `task`, turning error statuses into errors.
    ///
    /// The body of a failed response is logged to help diagnose it.
    async fn call(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
        task: &str,
    ) -> Result<Response, ClientError> {
        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build()?;
        let response = rate_limit::send(&self.client, request)
            .await
            .map_err(|e| e.during(task))?;
        if let Some(source) = response.error_for_status_ref().err() {
            log::error!("Failed to {task}: {source}");
            if let Ok(text) = response.text().await {
                log::error!("{text}");
            }
            return Err(ClientError::RequestContext {
                task: task.to_string(),
                source,
            });
        }
        Ok(response)
    }
}

/// Does the `link` header point to another page of results?
fn has_next_page(headers: &HeaderMap) -> bool {
    let Some(links) = headers.get("link").and_then(|v| v.to_str().ok()) else {
        return false;
    };
    links.split(',').any(|link| {
        link.split(';')
            .skip(1)
            .any(|param| param.trim() == r#"rel="next""#)
    })
}
