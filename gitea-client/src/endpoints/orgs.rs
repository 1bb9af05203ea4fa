use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::client::GiteaClient;
use crate::error::Result;
use crate::models::{CreateOrgOption, Organization, Repository, User};
use crate::pagination::DEFAULT_PAGE_KEY;
use crate::response::parse_list;

use super::parse_created;

/// Duplicate-organization rejections name a user: the forge stores
/// organizations as user accounts
const ORG_ALREADY_EXISTS: &str = "user already exists";

impl GiteaClient {
  /// Create an organization owned by `owner`.
  ///
  /// Fails with [`GiteaError::AlreadyExists`](crate::error::GiteaError) when
  /// an account of that name is already registered.
  #[instrument(skip(self, option), level = "debug")]
  pub async fn create_org(&self, owner: &str, option: &CreateOrgOption) -> Result<Organization> {
    debug!("Creating organization {} owned by {}", option.username, owner);

    let value = self
      .post(&format!("/admin/users/{owner}/orgs"), option)
      .await
      .map_err(|err| err.validation_as_already_exists(ORG_ALREADY_EXISTS))?;
    let org: Organization = parse_created(value, "organization")?;

    info!("Successfully created Organization {} (id {})", org.username, org.id);
    Ok(org)
  }

  /// List every organization on the forge (administrator only)
  #[instrument(skip(self), level = "debug")]
  pub async fn get_orgs(&self) -> Result<Vec<Organization>> {
    let value = self.get("/admin/orgs", &[], None).await?;
    Ok(parse_list(value)?)
  }

  /// List the public members of an organization
  #[instrument(skip(self), level = "debug")]
  pub async fn get_org_public_members(&self, org: &str) -> Result<Vec<User>> {
    let value = self.get(&format!("/orgs/{org}/public_members"), &[], None).await?;
    Ok(parse_list(value)?)
  }

  /// List every repository of an organization, walking all result pages
  #[instrument(skip(self), level = "debug")]
  pub async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
    let values = self
      .get_paginated(&format!("/orgs/{org}/repos"), &[], None, DEFAULT_PAGE_KEY, 0)
      .await?;
    Ok(parse_list(Value::Array(values))?)
  }

  /// Delete an organization; the forge refuses while it still owns
  /// repositories
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_org(&self, name: &str) -> Result<()> {
    self.delete(&format!("/orgs/{name}")).await
  }
}
