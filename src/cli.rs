//! CLI argument parsing.
//!
//! Every flag falls back to an environment variable so the tool can run
//! unmodified as a workflow step: resolution happens in [`crate::config`].
use clap::Parser;

/// CLI arguments for the release cleanup run.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value = "")]
    /// Owner of the repositories to clean up. Falls back to INPUT_OWNER env
    /// var.
    pub owner: String,

    #[arg(long, default_value = "")]
    /// Comma-separated list of repositories. Falls back to INPUT_REPOS env
    /// var.
    pub repos: String,

    #[arg(long, default_value = "")]
    /// Number of most recently published releases to keep per repository.
    /// Falls back to INPUT_KEEP_LATEST env var.
    pub keep_latest: String,

    #[arg(long, default_value_t = false)]
    /// Also delete the git tag of each deleted release. Falls back to
    /// INPUT_DELETE_TAGS env var ("true").
    pub delete_tags: bool,

    #[arg(long, default_value = "")]
    /// Substring a release tag must contain to be eligible for deletion.
    /// Empty matches every tag. Falls back to INPUT_DELETE_TAG_PATTERN env
    /// var.
    pub delete_tag_pattern: String,

    #[arg(long, default_value_t = false)]
    /// Skip repositories with no matching active releases instead of
    /// stopping the whole run. Falls back to INPUT_SKIP_EMPTY_REPOS env var
    /// ("true").
    pub skip_empty_repos: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
