//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, params::repos::Reference};
use reqwest::StatusCode;
use serde::Serialize;

use crate::{
    error::{PrunosaurusError, Result},
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        traits::Forge,
        types::ReleaseRecord,
    },
};

#[derive(Debug, Serialize)]
struct ListReleasesParams {
    per_page: u8,
}

/// GitHub forge implementation using Octocrab for API interactions with
/// releases and tag refs.
pub struct Github {
    config: RemoteConfig,
    base_uri: String,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and
    /// API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = format!("{}://api.{}", config.scheme, config.host);
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri.clone())?;
        let instance = builder.build()?;

        Ok(Self {
            config,
            base_uri,
            instance,
        })
    }
}

#[async_trait]
impl Forge for Github {
    async fn list_releases(&self, repo: &str) -> Result<Vec<ReleaseRecord>> {
        let endpoint = format!(
            "{}/repos/{}/{}/releases",
            self.base_uri, self.config.owner, repo
        );

        debug!("listing releases for {repo}");

        let params = ListReleasesParams {
            per_page: DEFAULT_PAGE_SIZE,
        };

        // Single page only: anything past the first page is left alone.
        let releases: Vec<ReleaseRecord> =
            self.instance.get(endpoint, Some(&params)).await?;

        Ok(releases)
    }

    async fn delete_release(&self, repo: &str, id: u64) -> Result<()> {
        debug!("deleting release {id} for {repo}");

        self.instance
            .repos(&self.config.owner, repo)
            .releases()
            .delete(id)
            .await?;

        Ok(())
    }

    async fn delete_tag(&self, repo: &str, tag_name: &str) -> Result<()> {
        debug!("deleting tag ref {tag_name} for {repo}");

        let result = self
            .instance
            .repos(&self.config.owner, repo)
            .delete_ref(&Reference::Tag(tag_name.to_string()))
            .await;

        match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                Err(PrunosaurusError::forge(format!(
                    "no tag ref found for {tag_name}"
                )))
            }
            Err(err) => Err(err.into()),
            Ok(()) => Ok(()),
        }
    }
}
