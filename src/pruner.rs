//! Core cleanup logic: per-repository fetch, selection, and deletion.
use log::*;
use std::cmp;

use crate::{
    config::Config,
    error::Result,
    forge::{
        traits::Forge,
        types::{DeletionCandidate, ReleaseRecord},
    },
};

/// Active matching releases: published (non-draft) releases whose tag name
/// contains `tag_pattern`. An empty pattern matches every tag.
fn active_matching<'a>(
    releases: &'a [ReleaseRecord],
    tag_pattern: &str,
) -> Vec<&'a ReleaseRecord> {
    releases
        .iter()
        .filter(|r| !r.draft && r.tag_name.contains(tag_pattern))
        .collect()
}

/// Select the deletion set: everything but the `keep_latest` most recently
/// published releases in `active`. Sort is stable, so releases with equal
/// publish times keep their input order.
fn select_candidates(
    mut active: Vec<&ReleaseRecord>,
    keep_latest: usize,
) -> Vec<DeletionCandidate> {
    active.sort_by_key(|r| cmp::Reverse(r.published_timestamp()));

    active
        .into_iter()
        .skip(keep_latest)
        .map(|r| DeletionCandidate {
            id: r.id,
            tag_name: r.tag_name.clone(),
        })
        .collect()
}

/// Drives the cleanup run against a forge. Repositories are processed
/// strictly sequentially, and failures on one never abort the others.
pub struct Pruner {
    config: Config,
    forge: Box<dyn Forge>,
}

impl Pruner {
    pub fn new(config: Config, forge: Box<dyn Forge>) -> Self {
        Self { config, forge }
    }

    /// Process every configured repository in order. Recoverable failures
    /// are logged with their repository and release context and never change
    /// the process exit status.
    pub async fn run(&self) -> Result<()> {
        if self.config.delete_tags {
            info!("corresponding tags also will be deleted");
        }

        if !self.config.tag_pattern.is_empty() {
            info!(
                "releases containing {} will be targeted",
                self.config.tag_pattern
            );
        }

        for repo in &self.config.repos {
            if !self.process_repo(repo).await {
                // No matching active releases and skip_empty_repos is off:
                // remaining repositories are not visited.
                return Ok(());
            }
        }

        Ok(())
    }

    /// Run the fetch, select, delete sequence for one repository. Returns
    /// false only when the run should stop entirely (empty active-match set
    /// without `skip_empty_repos`).
    async fn process_repo(&self, repo: &str) -> bool {
        let releases = match self.forge.list_releases(repo).await {
            Ok(releases) => releases,
            Err(err) => {
                error!("failed to get list of releases for {repo}: {err}");
                return true;
            }
        };

        let active = active_matching(&releases, &self.config.tag_pattern);

        if active.is_empty() {
            if self.config.skip_empty_repos {
                info!("no active releases found for {repo}: skipping");
                return true;
            }
            info!("no active releases found for {repo}: exiting");
            return false;
        }

        let matching = if self.config.tag_pattern.is_empty() {
            ""
        } else {
            " matching"
        };

        info!(
            "found total of {}{matching} active release(s) for {repo}",
            active.len()
        );

        let candidates = select_candidates(active, self.config.keep_latest);

        if candidates.is_empty() {
            info!("no older releases found for {repo}");
            return true;
        }

        info!("found {} older release(s) for {repo}", candidates.len());

        for candidate in &candidates {
            self.delete_candidate(repo, candidate).await;
        }

        // Count of candidates attempted, not of confirmed deletions.
        info!("{} older release(s) for {repo} deleted", candidates.len());

        true
    }

    /// Delete one release, then its tag if configured. The tag is only
    /// touched after the release deletion succeeded.
    async fn delete_candidate(
        &self,
        repo: &str,
        candidate: &DeletionCandidate,
    ) {
        info!(
            "{repo}: starting to delete {} with id {}",
            candidate.tag_name, candidate.id
        );

        if let Err(err) =
            self.forge.delete_release(repo, candidate.id).await
        {
            error!(
                "failed to delete release with id {} for {repo}: {err}",
                candidate.id
            );
            return;
        }

        if self.config.delete_tags
            && let Err(err) =
                self.forge.delete_tag(repo, &candidate.tag_name).await
        {
            error!(
                "failed to delete tag {:?} for {repo}: {err}",
                candidate.tag_name
            );
        }
    }
}
