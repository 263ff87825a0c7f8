//! Traits related to remote git forges
use async_trait::async_trait;

use crate::{error::Result, forge::types::ReleaseRecord};

/// Operations the pruner needs from a forge. All calls are sequential; the
/// pruner awaits each response before issuing the next request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    /// List up to one page of releases for a repository. No follow-up
    /// pagination is performed.
    async fn list_releases(&self, repo: &str) -> Result<Vec<ReleaseRecord>>;

    /// Delete a release by id.
    async fn delete_release(&self, repo: &str, id: u64) -> Result<()>;

    /// Delete the tag ref named `tag_name`.
    async fn delete_tag(&self, repo: &str, tag_name: &str) -> Result<()>;
}
