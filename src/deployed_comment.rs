//! Spongebot's deployment comment and the phrases it is made of.
use rand::Rng;

use crate::PullRequestHandle;

/// The base URL where deployed builds are served from.
pub const PAGES_URL: &str = "https://dubious-developments.github.io";

/// The placeholder in [`SALUTATIONS`] that gets replaced with a mention of the submitter.
const MENTION_SLOT: &str = "{0}";

/// Spongebot Squarepants' greetings.
///
/// Each one mentions the pull request's submitter in place of `{0}`.
pub const SALUTATIONS: [&str; 4] = [
    "Oh hi there {0}!",
    "I did not hit her, it's not true! It's bullshit! I did not hit her! *I did naaaahht.* Oh hi {0}.",
    "Oh hi {0}. I didn't know it was you.",
    "Ha ha ha. What a story, {0}.",
];

/// Things Spongebot Squarepants may say to bid you farewell.
pub const VALEDICTIONS: [&str; 4] = [
    "Thanks for contributing! Keep up the good work and have a wonderful day!",
    "You're my favorite customer. Buh-bye.",
    "This is a beautiful pull request! You included all the code. Good thinking!",
    "You think about everything. Ha ha ha.",
];

/// Fill a salutation template with a mention of `login`.
pub fn salute(salutation: &str, login: &str) -> String {
    salutation.replace(MENTION_SLOT, &format!("@{login}"))
}

/// Generates the body of the comment that is posted when a pull request
/// has been deployed to GitHub pages.
///
/// The salutation and valediction are drawn independently from `rng`.
/// The `deploy_directory_name` is not validated; it is inserted in the preview
/// and coverage URLs as given.
pub fn generate_pull_request_deployed_comment<H, R>(
    pull_request: &H,
    deploy_directory_name: &str,
    rng: &mut R,
) -> String
where
    H: PullRequestHandle + ?Sized,
    R: Rng + ?Sized,
{
    let salutation = salute(
        SALUTATIONS[rng.gen_range(0..SALUTATIONS.len())],
        pull_request.submitter_login(),
    );
    let valediction = VALEDICTIONS[rng.gen_range(0..VALEDICTIONS.len())];

    format!(
        "{salutation}

I built and deployed your pull request. 🎉🎆🎉
You can try it out [here]({PAGES_URL}/{deploy_directory_name}/index.html).
If you're looking for the coverage report, that's [right here]({PAGES_URL}/{deploy_directory_name}/coverage/index.html).

{valediction}

> **Note:** it may take a little while before GitHub pages gets updated. Try again in a minute if your deployed build doesn't show up right away."
    )
}
