//! Configuration resolution for cleanup runs.
//!
//! Required values come from CLI flags with environment-variable fallbacks.
//! Resolution runs once at startup and produces an immutable [`Config`]
//! consumed by the pruner; nothing reads the environment after this point.
use log::*;
use secrecy::SecretString;
use std::env;

use crate::{
    cli,
    error::{PrunosaurusError, Result},
};

/// Env var holding the access token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Env var holding the repository owner.
pub const OWNER_VAR: &str = "INPUT_OWNER";
/// Env var holding the comma-separated repository list.
pub const REPOS_VAR: &str = "INPUT_REPOS";
/// Env var holding the retention count.
pub const KEEP_LATEST_VAR: &str = "INPUT_KEEP_LATEST";
/// Env var enabling tag deletion.
pub const DELETE_TAGS_VAR: &str = "INPUT_DELETE_TAGS";
/// Env var holding the tag substring filter.
pub const TAG_PATTERN_VAR: &str = "INPUT_DELETE_TAG_PATTERN";
/// Env var enabling skip-instead-of-stop on repos with no matching releases.
pub const SKIP_EMPTY_REPOS_VAR: &str = "INPUT_SKIP_EMPTY_REPOS";

/// Immutable configuration for one cleanup run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Access token for the forge API.
    pub token: SecretString,
    /// Owner of every repository in `repos`.
    pub owner: String,
    /// Repositories to process, in the order given. Empty segments produced
    /// by malformed input are passed through and fail at the API boundary.
    pub repos: Vec<String>,
    /// Number of most recently published matching releases to keep.
    pub keep_latest: usize,
    /// Whether to delete the git tag after a successful release deletion.
    pub delete_tags: bool,
    /// Substring a release tag must contain; empty matches everything.
    pub tag_pattern: String,
    /// Skip repositories with no matching active releases instead of
    /// stopping the run.
    pub skip_empty_repos: bool,
}

impl Config {
    /// Resolve configuration from CLI args and environment. Fails with a
    /// field-specific error before any network activity.
    pub fn resolve(args: &cli::Args) -> Result<Self> {
        let token = required(&args.github_token, TOKEN_VAR)?;
        let owner = required(&args.owner, OWNER_VAR)?;
        let repos_raw = required(&args.repos, REPOS_VAR)?;
        let keep_raw = required(&args.keep_latest, KEEP_LATEST_VAR)?;

        let keep_latest: i64 = keep_raw.trim().parse().map_err(|_| {
            PrunosaurusError::invalid_config(
                KEEP_LATEST_VAR,
                format!("expected an integer, got {keep_raw:?}"),
            )
        })?;

        if keep_latest < 0 {
            return Err(PrunosaurusError::invalid_config(
                KEEP_LATEST_VAR,
                "must not be negative",
            ));
        }

        if keep_latest == 0 {
            warn!(
                "keep_latest is 0: every matching active release will be deleted"
            );
        }

        let repos = repos_raw.split(',').map(str::to_string).collect();

        Ok(Self {
            token: SecretString::from(token),
            owner,
            repos,
            keep_latest: keep_latest as usize,
            delete_tags: args.delete_tags || env_flag(DELETE_TAGS_VAR),
            tag_pattern: optional(&args.delete_tag_pattern, TAG_PATTERN_VAR),
            skip_empty_repos: args.skip_empty_repos
                || env_flag(SKIP_EMPTY_REPOS_VAR),
        })
    }
}

/// Flag value if set, else env var, else a missing-config error.
fn required(flag: &str, var: &str) -> Result<String> {
    optional_value(flag, var)
        .ok_or_else(|| PrunosaurusError::missing_config(var))
}

/// Flag value if set, else env var, else empty.
fn optional(flag: &str, var: &str) -> String {
    optional_value(flag, var).unwrap_or_default()
}

fn optional_value(flag: &str, var: &str) -> Option<String> {
    if !flag.is_empty() {
        return Some(flag.to_string());
    }
    env::var(var).ok().filter(|v| !v.is_empty())
}

/// Boolean env vars follow the workflow convention: only "true" enables.
fn env_flag(var: &str) -> bool {
    matches!(env::var(var), Ok(v) if v == "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use secrecy::ExposeSecret;

    fn full_args() -> Args {
        Args {
            github_token: "tok".into(),
            owner: "acme".into(),
            repos: "repo-a,repo-b".into(),
            keep_latest: "3".into(),
            ..Args::default()
        }
    }

    #[test]
    fn resolves_full_config() {
        let config = Config::resolve(&full_args()).unwrap();
        assert_eq!(config.token.expose_secret(), "tok");
        assert_eq!(config.owner, "acme");
        assert_eq!(config.repos, vec!["repo-a", "repo-b"]);
        assert_eq!(config.keep_latest, 3);
        assert!(!config.delete_tags);
        assert_eq!(config.tag_pattern, "");
        assert!(!config.skip_empty_repos);
    }

    #[test]
    fn missing_token_fails_with_field_name() {
        let args = Args {
            github_token: "".into(),
            ..full_args()
        };
        let err = Config::resolve(&args).unwrap_err();
        assert!(
            matches!(&err, PrunosaurusError::MissingConfig(field) if field == TOKEN_VAR)
        );
    }

    #[test]
    fn missing_owner_fails_with_field_name() {
        let args = Args {
            owner: "".into(),
            ..full_args()
        };
        let err = Config::resolve(&args).unwrap_err();
        assert!(
            matches!(&err, PrunosaurusError::MissingConfig(field) if field == OWNER_VAR)
        );
    }

    #[test]
    fn missing_repos_fails_with_field_name() {
        let args = Args {
            repos: "".into(),
            ..full_args()
        };
        let err = Config::resolve(&args).unwrap_err();
        assert!(
            matches!(&err, PrunosaurusError::MissingConfig(field) if field == REPOS_VAR)
        );
    }

    #[test]
    fn missing_keep_latest_fails_with_field_name() {
        let args = Args {
            keep_latest: "".into(),
            ..full_args()
        };
        let err = Config::resolve(&args).unwrap_err();
        assert!(
            matches!(&err, PrunosaurusError::MissingConfig(field) if field == KEEP_LATEST_VAR)
        );
    }

    #[test]
    fn non_numeric_keep_latest_is_invalid() {
        let args = Args {
            keep_latest: "three".into(),
            ..full_args()
        };
        let err = Config::resolve(&args).unwrap_err();
        assert!(matches!(err, PrunosaurusError::InvalidConfig { .. }));
    }

    #[test]
    fn negative_keep_latest_is_invalid() {
        let args = Args {
            keep_latest: "-1".into(),
            ..full_args()
        };
        let err = Config::resolve(&args).unwrap_err();
        assert!(matches!(err, PrunosaurusError::InvalidConfig { .. }));
    }

    #[test]
    fn zero_keep_latest_is_accepted() {
        let args = Args {
            keep_latest: "0".into(),
            ..full_args()
        };
        let config = Config::resolve(&args).unwrap();
        assert_eq!(config.keep_latest, 0);
    }

    #[test]
    fn empty_repo_segments_are_passed_through() {
        let args = Args {
            repos: "repo-a,,repo-b".into(),
            ..full_args()
        };
        let config = Config::resolve(&args).unwrap();
        assert_eq!(config.repos, vec!["repo-a", "", "repo-b"]);
    }

    #[test]
    fn env_fallback_resolves_value() {
        // Var name is unique to this test so parallel tests cannot observe it.
        let var = "PRUNOSAURUS_TEST_FALLBACK";
        unsafe { env::set_var(var, "from-env") };
        assert_eq!(required("", var).unwrap(), "from-env");
        assert_eq!(required("flag-wins", var).unwrap(), "flag-wins");
        unsafe { env::remove_var(var) };
    }
}
