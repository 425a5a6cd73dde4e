#![allow(dead_code)]
use std::{
    env,
    sync::{Mutex, MutexGuard},
};

use spongebot::client::GithubApiClient;

struct Logger;
impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if record.target() == "CI_LOG_GROUPING" {
            println!("{}", record.args());
        } else {
            println!(
                "[{:>5}]{}: {}",
                record.level().as_str(),
                record.module_path().unwrap_or_default(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn logger_init() {
    let _ = log::set_logger(&Logger);
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that set environment variables before instantiating a client.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

pub const REPO: &str = "dubious-developments/opal";
pub const TOKEN: &str = "123456";

/// A client for [`REPO`] that talks to `api_url`, authenticated with [`TOKEN`].
pub fn make_client(api_url: &str, bot_login: Option<&str>) -> GithubApiClient {
    let _lock = env_lock();
    unsafe {
        env::set_var("GITHUB_REPOSITORY", REPO);
        env::set_var("GITHUB_TOKEN", TOKEN);
        env::set_var("GITHUB_API_URL", api_url);
        env::set_var("ACTIONS_STEP_DEBUG", "true");
        match bot_login {
            Some(login) => env::set_var("SPONGEBOT_LOGIN", login),
            None => env::remove_var("SPONGEBOT_LOGIN"),
        }
    }
    logger_init();
    log::set_max_level(log::LevelFilter::Debug);
    let client = GithubApiClient::new().unwrap();
    unsafe {
        env::remove_var("SPONGEBOT_LOGIN");
    }
    client
}
