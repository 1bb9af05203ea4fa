//! Canned forge payloads
//!
//! JSON payloads shaped like the forge's API responses, for wiremock-backed
//! endpoint tests.

use serde_json::{Value, json};

/// A user payload as returned by the forge
pub fn user_json(id: i64, login: &str, email: &str) -> Value {
  json!({
      "id": id,
      "login": login,
      "login_name": "",
      "full_name": "",
      "email": email,
      "avatar_url": format!("https://forge.example/avatars/{id}"),
      "is_admin": false,
      "active": true,
      "restricted": false,
      "prohibit_login": false,
      "created": "2024-01-15T09:30:00Z"
  })
}

/// An organization payload
pub fn org_json(id: i64, username: &str) -> Value {
  json!({
      "id": id,
      "username": username,
      "full_name": "",
      "description": "",
      "website": "",
      "location": "",
      "visibility": "public",
      "avatar_url": ""
  })
}

/// A repository payload owned by `owner`
pub fn repo_json(id: i64, owner: &str, name: &str) -> Value {
  json!({
      "id": id,
      "name": name,
      "full_name": format!("{owner}/{name}"),
      "description": "",
      "private": false,
      "fork": false,
      "template": false,
      "empty": false,
      "owner": {"id": 1, "login": owner},
      "default_branch": "master",
      "html_url": format!("https://forge.example/{owner}/{name}"),
      "clone_url": format!("https://forge.example/{owner}/{name}.git"),
      "ssh_url": format!("git@forge.example:{owner}/{name}.git"),
      "stars_count": 0,
      "forks_count": 0
  })
}

/// A team payload without its owning organization, the shape creation
/// responses come in
pub fn team_json(id: i64, name: &str) -> Value {
  json!({
      "id": id,
      "name": name,
      "description": "",
      "permission": "read",
      "can_create_org_repo": false,
      "includes_all_repositories": false,
      "units": ["repo.code", "repo.issues", "repo.pulls"]
  })
}

/// One registered email address
pub fn email_json(email: &str, primary: bool) -> Value {
  json!({
      "email": email,
      "verified": true,
      "primary": primary
  })
}

/// The version probe payload
pub fn version_json(version: &str) -> Value {
  json!({ "version": version })
}
