use clap::Parser;
use log::LevelFilter;
use spongebot::{GreetError, GreetOptions, client::GithubApiClient, greet, pull_request_to_greet};

mod logger;

/// Greet a pull request's submitter once its preview build is deployed.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The name of the directory the build was deployed to (eg. `pull-request-42`).
    deploy_directory_name: String,

    /// Post a comment even if the bot already commented on the pull request.
    #[arg(long)]
    force: bool,

    /// Fail if the deploy directory does not name a pull request.
    #[arg(long)]
    require_pull_request: bool,

    /// The bot account's login, used to find its previous comments.
    #[arg(long)]
    bot_login: Option<String>,

    /// Show debug output.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), GreetError> {
    let cli = Cli::parse();
    logger::init(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    GithubApiClient::start_log_group(&cli.deploy_directory_name);
    let result = run(cli).await;
    GithubApiClient::end_log_group();
    result
}

async fn run(cli: Cli) -> Result<(), GreetError> {
    let mut options = GreetOptions {
        force: cli.force,
        require_pull_request: cli.require_pull_request,
        ..Default::default()
    };
    let Some(number) = pull_request_to_greet(&cli.deploy_directory_name, &options)? else {
        return Ok(());
    };

    let client = GithubApiClient::new()?;
    if client.debug_enabled {
        log::set_max_level(LevelFilter::Debug);
    }
    options.bot_login = cli.bot_login.unwrap_or_else(|| client.bot_login.clone());
    let pull_request = client.get_pull_request(number).await?;
    let mut rng = rand::thread_rng();
    greet(&pull_request, &cli.deploy_directory_name, &options, &mut rng).await?;
    Ok(())
}
