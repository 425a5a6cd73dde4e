//! Sending requests without overrunning GitHub's rate limits.
//!
//! GitHub answers `403` or `429` when a limit is hit. The primary limit
//! (`x-ratelimit-remaining: 0`) lasts until `x-ratelimit-reset`, so waiting
//! for it is pointless in a CI job; it is reported instead. A secondary limit
//! comes with `retry-after`, which is honored before trying again.
use std::{str::FromStr, time::Duration};

use chrono::DateTime;
use reqwest::{Client, Request, Response, StatusCode, header::HeaderMap};

use crate::ClientError;

const REMAINING: &str = "x-ratelimit-remaining";
const RESET: &str = "x-ratelimit-reset";
const RETRY_AFTER: &str = "retry-after";

/// How many times a request is sent before giving up on a secondary rate limit.
pub(crate) const MAX_ATTEMPTS: u8 = 5;

/// Parse the header `name` as a `T`.
///
/// Missing headers and malformed values are both `None`; the latter is logged.
fn header<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    let value = headers.get(name)?.to_str().ok()?;
    let parsed = value.parse::<T>().ok();
    if parsed.is_none() {
        log::debug!("Ignoring malformed {name} header: {value}");
    }
    parsed
}

/// Send `request`, backing off whenever GitHub asks to.
pub(crate) async fn send(client: &Client, request: Request) -> Result<Response, ClientError> {
    for attempt in 0..MAX_ATTEMPTS {
        let copy = request
            .try_clone()
            .ok_or(ClientError::CannotCloneRequest)?;
        let response = client.execute(copy).await?;
        if !matches!(
            response.status(),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
        ) {
            return Ok(response);
        }

        let headers = response.headers();
        if header::<i64>(headers, REMAINING).is_some_and(|left| left <= 0) {
            let reset = header::<i64>(headers, RESET)
                .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0));
            return Err(match reset {
                Some(reset) => {
                    log::error!("GitHub API rate limit used up until {reset}");
                    ClientError::RateLimitPrimary(reset)
                }
                None => {
                    log::error!("GitHub API rate limit used up");
                    ClientError::RateLimitNoReset
                }
            });
        }

        let asked_to_wait = headers.contains_key(RETRY_AFTER);
        let wait = header::<u64>(headers, RETRY_AFTER);
        if !asked_to_wait {
            // A plain 403 is about permissions; let the caller report it.
            return Ok(response);
        }
        if let Some(secs) = wait {
            let extra = u64::from(attempt).pow(2);
            back_off(Duration::from_secs(secs + extra)).await;
        }
    }
    log::error!("GitHub API rate limit still exceeded after {MAX_ATTEMPTS} attempts");
    Err(ClientError::RateLimitSecondary)
}

#[cfg(not(feature = "test-skip-wait-for-rate-limit"))]
async fn back_off(interval: Duration) {
    log::warn!(
        "GitHub asked to slow down; waiting {} seconds",
        interval.as_secs()
    );
    tokio::time::sleep(interval).await;
}

#[cfg(feature = "test-skip-wait-for-rate-limit")]
async fn back_off(interval: Duration) {
    log::warn!(
        "GitHub asked to slow down; not waiting {} seconds in tests",
        interval.as_secs()
    );
}
