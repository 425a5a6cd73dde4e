/// The prefix of every deploy directory that holds a pull request's preview build.
pub const PULL_REQUEST_PREFIX: &str = "pull-request-";

/// Parses the name of a deploy directory as a pull request number.
///
/// Returns [`None`] if the deploy directory name does not identify a pull request.
/// That is when the name does not start with [`PULL_REQUEST_PREFIX`] or
/// the remainder is not a base-10 integer that fits in an [`i64`].
///
/// ```
/// use spongebot::parse_deploy_directory_name;
///
/// assert_eq!(parse_deploy_directory_name("pull-request-42"), Some(42));
/// assert_eq!(parse_deploy_directory_name("main"), None);
/// ```
pub fn parse_deploy_directory_name(deploy_directory_name: &str) -> Option<i64> {
    deploy_directory_name
        .strip_prefix(PULL_REQUEST_PREFIX)?
        .parse::<i64>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::parse_deploy_directory_name;

    #[test]
    fn pr_numbers() {
        for n in [0i64, 1, 7, 42, 1234, i64::MAX] {
            assert_eq!(
                parse_deploy_directory_name(&format!("pull-request-{n}")),
                Some(n)
            );
        }
    }

    #[test]
    fn signed_numbers() {
        assert_eq!(parse_deploy_directory_name("pull-request--3"), Some(-3));
        assert_eq!(parse_deploy_directory_name("pull-request-+5"), Some(5));
        assert_eq!(parse_deploy_directory_name("pull-request-007"), Some(7));
    }

    #[test]
    fn no_prefix() {
        for name in ["main", "", "42", "pull-request", "Pull-Request-42", " pull-request-42"] {
            assert_eq!(parse_deploy_directory_name(name), None, "{name:?}");
        }
    }

    #[test]
    fn bad_suffix() {
        for name in [
            "pull-request-",
            "pull-request-abc",
            "pull-request-42abc",
            "pull-request-4 2",
            "pull-request-42 ",
            "pull-request-1.5",
            "pull-request-99999999999999999999",
        ] {
            assert_eq!(parse_deploy_directory_name(name), None, "{name:?}");
        }
    }
}
