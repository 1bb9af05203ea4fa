//! # Gitea API Models
//!
//! Typed records for the forge's JSON payloads and the creation/edit option
//! structs sent back to it. Field names follow the wire format; option
//! constructors carry the defaults the forge expects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials for the Gitea API; token and basic auth are mutually exclusive
#[derive(Clone)]
pub enum GiteaAuth {
  /// Personal access token, sent as `Authorization: token {token}`
  Token(String),
  /// Username and password, sent as HTTP basic auth
  Basic { username: String, password: String },
}

impl fmt::Debug for GiteaAuth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
      Self::Basic { username, .. } => f
        .debug_struct("Basic")
        .field("username", username)
        .field("password", &"<redacted>")
        .finish(),
    }
  }
}

/// A Gitea user account
#[derive(Debug, Deserialize)]
pub struct User {
  pub id: i64,
  pub login: String,
  #[serde(default)]
  pub login_name: String,
  #[serde(default)]
  pub full_name: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub avatar_url: String,
  #[serde(default)]
  pub is_admin: bool,
  #[serde(default)]
  pub active: bool,
  #[serde(default)]
  pub restricted: bool,
  #[serde(default)]
  pub prohibit_login: bool,
  pub created: Option<String>,
}

/// A Gitea organization; the forge reports the account name as `username`
#[derive(Debug, Deserialize)]
pub struct Organization {
  pub id: i64,
  pub username: String,
  pub name: Option<String>,
  #[serde(default)]
  pub full_name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub website: String,
  #[serde(default)]
  pub location: String,
  #[serde(default)]
  pub visibility: String,
  #[serde(default)]
  pub avatar_url: String,
}

/// A Gitea repository
#[derive(Debug, Deserialize)]
pub struct Repository {
  pub id: i64,
  pub name: String,
  pub full_name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub private: bool,
  #[serde(default)]
  pub fork: bool,
  #[serde(default)]
  pub template: bool,
  #[serde(default)]
  pub empty: bool,
  pub owner: Option<User>,
  #[serde(default)]
  pub default_branch: String,
  #[serde(default)]
  pub html_url: String,
  #[serde(default)]
  pub clone_url: String,
  #[serde(default)]
  pub ssh_url: String,
  #[serde(default)]
  pub stars_count: i64,
  #[serde(default)]
  pub forks_count: i64,
}

/// A team within an organization.
///
/// Creation responses may omit `organization`; the field stays `None` then
/// and the caller keeps its own organization handle.
#[derive(Debug, Deserialize)]
pub struct Team {
  pub id: i64,
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub permission: String,
  #[serde(default)]
  pub can_create_org_repo: bool,
  #[serde(default)]
  pub includes_all_repositories: bool,
  #[serde(default)]
  pub units: Vec<String>,
  pub organization: Option<Organization>,
}

/// One of a user's registered email addresses
#[derive(Debug, Deserialize)]
pub struct Email {
  pub email: String,
  #[serde(default)]
  pub verified: bool,
  #[serde(default)]
  pub primary: bool,
}

/// Version payload reported by the forge
#[derive(Debug, Deserialize)]
pub struct ServerVersion {
  pub version: String,
}

/// Payload for creating a user as the administrator
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserOption {
  pub source_id: i64,
  pub login_name: String,
  pub full_name: String,
  pub username: String,
  pub email: String,
  pub password: String,
  pub send_notify: bool,
  pub must_change_password: bool,
}

impl CreateUserOption {
  /// New payload with the usual defaults: login and full name fall back to
  /// the username, a notification mail is sent, and the first login forces a
  /// password change
  pub fn new(username: &str, email: &str, password: &str) -> Self {
    Self {
      source_id: 0,
      login_name: username.to_string(),
      full_name: username.to_string(),
      username: username.to_string(),
      email: email.to_string(),
      password: password.to_string(),
      send_notify: true,
      must_change_password: true,
    }
  }
}

/// Payload for editing a user as the administrator; unset optional fields
/// are omitted from the request and left untouched by the forge
#[derive(Debug, Clone, Serialize)]
pub struct EditUserOption {
  pub login_name: String,
  pub source_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub full_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub admin: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub active: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub prohibit_login: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub must_change_password: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub website: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl EditUserOption {
  /// New edit payload; the forge requires the login name and auth source on
  /// every edit
  pub fn new(login_name: &str) -> Self {
    Self {
      login_name: login_name.to_string(),
      source_id: 0,
      email: None,
      full_name: None,
      password: None,
      admin: None,
      active: None,
      prohibit_login: None,
      must_change_password: None,
      website: None,
      location: None,
      description: None,
    }
  }
}

/// Payload for creating a repository under a user or organization
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepoOption {
  pub name: String,
  pub description: String,
  pub private: bool,
  pub auto_init: bool,
  pub gitignores: Option<String>,
  pub license: Option<String>,
  pub issue_labels: Option<String>,
  pub readme: String,
  pub default_branch: String,
  pub template: bool,
}

impl CreateRepoOption {
  /// New payload with the usual defaults: public, auto-initialized with the
  /// default readme on `master`
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      description: String::new(),
      private: false,
      auto_init: true,
      gitignores: None,
      license: None,
      issue_labels: None,
      readme: "Default".to_string(),
      default_branch: "master".to_string(),
      template: false,
    }
  }
}

/// Payload for generating a repository from a template repository
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRepoOption {
  pub owner: String,
  pub name: String,
  pub description: String,
  pub private: bool,
  pub default_branch: String,
  pub avatar: bool,
  pub topics: bool,
  pub git_content: bool,
  pub git_hooks: bool,
  pub labels: bool,
  pub webhooks: bool,
}

impl GenerateRepoOption {
  /// New payload copying every template component into `owner/name`
  pub fn new(owner: &str, name: &str) -> Self {
    Self {
      owner: owner.to_string(),
      name: name.to_string(),
      description: String::new(),
      private: false,
      default_branch: "master".to_string(),
      avatar: true,
      topics: true,
      git_content: true,
      git_hooks: true,
      labels: true,
      webhooks: true,
    }
  }
}

/// Payload for creating an organization owned by a user
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrgOption {
  pub username: String,
  pub description: String,
  pub location: String,
  pub website: String,
  pub full_name: String,
}

impl CreateOrgOption {
  /// New payload for an organization named `username`
  pub fn new(username: &str) -> Self {
    Self {
      username: username.to_string(),
      description: String::new(),
      location: String::new(),
      website: String::new(),
      full_name: String::new(),
    }
  }
}

/// Repository units granted to a new team unless overridden
pub const DEFAULT_TEAM_UNITS: [&str; 7] = [
  "repo.code",
  "repo.issues",
  "repo.ext_issues",
  "repo.wiki",
  "repo.pulls",
  "repo.releases",
  "repo.ext_wiki",
];

/// Payload for creating a team within an organization
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeamOption {
  pub name: String,
  pub description: String,
  pub permission: String,
  pub can_create_org_repo: bool,
  pub includes_all_repositories: bool,
  pub units: Vec<String>,
}

impl CreateTeamOption {
  /// New payload defaulting to read permission over the standard repository
  /// units
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      description: String::new(),
      permission: "read".to_string(),
      can_create_org_repo: false,
      includes_all_repositories: false,
      units: DEFAULT_TEAM_UNITS.iter().map(|unit| (*unit).to_string()).collect(),
    }
  }
}
