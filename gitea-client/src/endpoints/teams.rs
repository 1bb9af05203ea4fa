use serde_json::json;
use tracing::{debug, info, instrument};

use crate::client::GiteaClient;
use crate::error::Result;
use crate::models::{CreateTeamOption, Team};

use super::parse_created;

/// Forge message fragment identifying a duplicate-team rejection
const TEAM_ALREADY_EXISTS: &str = "team already exists";

impl GiteaClient {
  /// Create a team within an organization.
  ///
  /// Fails with [`GiteaError::AlreadyExists`](crate::error::GiteaError) when
  /// the organization already has a team of that name.
  #[instrument(skip(self, option), level = "debug")]
  pub async fn create_team(&self, org: &str, option: &CreateTeamOption) -> Result<Team> {
    debug!("Creating team {} in organization {}", option.name, org);

    let value = self
      .post(&format!("/orgs/{org}/teams"), option)
      .await
      .map_err(|err| err.validation_as_already_exists(TEAM_ALREADY_EXISTS))?;
    let team: Team = parse_created(value, "team")?;

    info!("Successfully created Team {} (id {})", team.name, team.id);
    Ok(team)
  }

  /// Get a single team by its id
  #[instrument(skip(self), level = "debug")]
  pub async fn get_team(&self, team_id: i64) -> Result<Team> {
    let value = self.get(&format!("/teams/{team_id}"), &[], None).await?;
    Ok(serde_json::from_value(value)?)
  }

  /// Add a user to a team
  #[instrument(skip(self), level = "debug")]
  pub async fn add_team_member(&self, team_id: i64, username: &str) -> Result<()> {
    self.put(&format!("/teams/{team_id}/members/{username}"), &json!({})).await
  }

  /// Remove a user from a team
  #[instrument(skip(self), level = "debug")]
  pub async fn remove_team_member(&self, team_id: i64, username: &str) -> Result<()> {
    self.delete(&format!("/teams/{team_id}/members/{username}")).await
  }

  /// Delete a team by its id
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_team(&self, team_id: i64) -> Result<()> {
    self.delete(&format!("/teams/{team_id}")).await
  }
}

#[cfg(test)]
mod tests {
  use gitea_test_utils::fixtures::team_json;
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::GiteaClient;
  use crate::error::GiteaError;
  use crate::models::{CreateTeamOption, GiteaAuth};

  fn client_for(mock_server: &MockServer) -> GiteaClient {
    gitea_test_utils::init_tracing();
    GiteaClient::new(&mock_server.uri(), GiteaAuth::Token("test_token".to_string()))
      .expect("client construction failed")
  }

  #[tokio::test]
  async fn test_create_team() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("POST"))
      .and(path("/api/v1/orgs/acme/teams"))
      .and(body_json(json!({
          "name": "reviewers",
          "description": "",
          "permission": "read",
          "can_create_org_repo": false,
          "includes_all_repositories": false,
          "units": [
              "repo.code",
              "repo.issues",
              "repo.ext_issues",
              "repo.wiki",
              "repo.pulls",
              "repo.releases",
              "repo.ext_wiki"
          ]
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(team_json(9, "reviewers")))
      .mount(&mock_server)
      .await;

    let team = client.create_team("acme", &CreateTeamOption::new("reviewers")).await?;

    assert_eq!(team.id, 9);
    assert_eq!(team.name, "reviewers");
    assert!(team.organization.is_none());

    Ok(())
  }

  #[tokio::test]
  async fn test_create_team_already_exists() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("POST"))
      .and(path("/api/v1/orgs/acme/teams"))
      .respond_with(
        ResponseTemplate::new(422).set_body_string(r#"{"message":"team already exists [name: reviewers]"}"#),
      )
      .mount(&mock_server)
      .await;

    let err = client.create_team("acme", &CreateTeamOption::new("reviewers")).await.unwrap_err();

    assert!(matches!(err, GiteaError::AlreadyExists { status: 422, .. }));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_team() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/api/v1/teams/9"))
      .respond_with(ResponseTemplate::new(200).set_body_json(team_json(9, "reviewers")))
      .mount(&mock_server)
      .await;

    let team = client.get_team(9).await?;

    assert_eq!(team.name, "reviewers");

    Ok(())
  }

  #[tokio::test]
  async fn test_add_team_member() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("PUT"))
      .and(path("/api/v1/teams/9/members/alice"))
      .and(body_json(json!({})))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    client.add_team_member(9, "alice").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_remove_team_member() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("DELETE"))
      .and(path("/api/v1/teams/9/members/alice"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    client.remove_team_member(9, "alice").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_team() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("DELETE"))
      .and(path("/api/v1/teams/9"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    client.delete_team(9).await?;

    Ok(())
  }
}
