use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::client::GiteaClient;
use crate::error::Result;
use crate::models::{CreateRepoOption, GenerateRepoOption, Repository};
use crate::pagination::DEFAULT_PAGE_KEY;
use crate::response::parse_list;

use super::parse_created;

/// Forge message fragment identifying a duplicate-repository rejection
const REPO_ALREADY_EXISTS: &str = "The repository with the same name already exists";

impl GiteaClient {
  /// Create a repository under `owner` as the administrator.
  ///
  /// Fails with [`GiteaError::AlreadyExists`](crate::error::GiteaError) when
  /// the owner already has a repository of that name.
  #[instrument(skip(self, option), level = "debug")]
  pub async fn create_repo(&self, owner: &str, option: &CreateRepoOption) -> Result<Repository> {
    debug!("Creating repository {} owned by {}", option.name, owner);

    let value = self
      .post(&format!("/admin/users/{owner}/repos"), option)
      .await
      .map_err(|err| err.conflict_as_already_exists(REPO_ALREADY_EXISTS))?;
    let repo: Repository = parse_created(value, "repository")?;

    info!("Successfully created Repository {} (id {})", repo.full_name, repo.id);
    Ok(repo)
  }

  /// Generate a repository from the template repository
  /// `template_owner/template_repo`; the target owner and name come from the
  /// option payload
  #[instrument(skip(self, option), level = "debug")]
  pub async fn create_repo_from_template(
    &self,
    template_owner: &str,
    template_repo: &str,
    option: &GenerateRepoOption,
  ) -> Result<Repository> {
    debug!(
      "Generating repository {}/{} from template {}/{}",
      option.owner, option.name, template_owner, template_repo
    );

    let value = self
      .post(&format!("/repos/{template_owner}/{template_repo}/generate"), option)
      .await
      .map_err(|err| err.conflict_as_already_exists(REPO_ALREADY_EXISTS))?;
    let repo: Repository = parse_created(value, "repository")?;

    info!("Successfully generated Repository {} (id {})", repo.full_name, repo.id);
    Ok(repo)
  }

  /// Get a single repository by owner and name
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repo(&self, owner: &str, name: &str) -> Result<Repository> {
    let value = self.get(&format!("/repos/{owner}/{name}"), &[], None).await?;
    Ok(serde_json::from_value(value)?)
  }

  /// List every repository owned by a user, walking all result pages
  #[instrument(skip(self), level = "debug")]
  pub async fn list_user_repos(&self, username: &str) -> Result<Vec<Repository>> {
    let values = self
      .get_paginated(&format!("/users/{username}/repos"), &[], None, DEFAULT_PAGE_KEY, 0)
      .await?;
    Ok(parse_list(Value::Array(values))?)
  }

  /// Delete a repository by owner and name
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_repo(&self, owner: &str, name: &str) -> Result<()> {
    self.delete(&format!("/repos/{owner}/{name}")).await
  }
}
