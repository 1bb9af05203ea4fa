//! Authentication helpers for the Gitea client.
//!
//! Convenience functions for loading credentials from the environment and
//! creating a ready-to-use client, so every consumer relies on the same
//! variable names and the same mutual-exclusion rules.

use std::env;

use tokio::runtime::Runtime;

use crate::client::GiteaClient;
use crate::error::{GiteaError, Result};
use crate::models::GiteaAuth;

/// Environment variable naming the forge base URL
pub const ENV_URL: &str = "GITEA_URL";

/// Environment variable carrying an access token
pub const ENV_TOKEN: &str = "GITEA_TOKEN";

/// Environment variable carrying `username:password` basic credentials
pub const ENV_AUTH: &str = "GITEA_AUTH";

/// Load credentials from `GITEA_TOKEN` or `GITEA_AUTH`.
///
/// Exactly one of the two variables must be set; an empty value counts as
/// unset.
pub fn auth_from_env() -> Result<GiteaAuth> {
  let token = env::var(ENV_TOKEN).ok().filter(|value| !value.is_empty());
  let auth = env::var(ENV_AUTH).ok().filter(|value| !value.is_empty());

  match (token, auth) {
    (Some(_), Some(_)) => Err(GiteaError::Config(format!(
      "{ENV_TOKEN} and {ENV_AUTH} are mutually exclusive"
    ))),
    (Some(token), None) => Ok(GiteaAuth::Token(token)),
    (None, Some(pair)) => parse_basic_auth(&pair),
    (None, None) => Err(GiteaError::Config(format!(
      "no credentials: set {ENV_TOKEN} or {ENV_AUTH}"
    ))),
  }
}

/// Create a client from `GITEA_URL` and the credential variables.
///
/// TLS verification stays on; use [`GiteaClient::with_options`] directly for
/// forges with self-signed certificates.
pub fn client_from_env() -> Result<GiteaClient> {
  let url = env::var(ENV_URL)
    .ok()
    .filter(|value| !value.is_empty())
    .ok_or_else(|| GiteaError::Config("no Gitea URL was provided".to_string()))?;
  let auth = auth_from_env()?;

  GiteaClient::new(&url, auth)
}

/// Create a tokio runtime and an environment-configured client, for callers
/// that are not async themselves
pub fn runtime_and_client_from_env() -> Result<(Runtime, GiteaClient)> {
  let rt = Runtime::new().map_err(|e| GiteaError::Config(format!("failed to create async runtime: {e}")))?;
  let client = client_from_env()?;
  Ok((rt, client))
}

/// Split a `username:password` pair on the first colon; passwords may
/// contain further colons
fn parse_basic_auth(pair: &str) -> Result<GiteaAuth> {
  match pair.split_once(':') {
    Some((username, password)) if !username.is_empty() => Ok(GiteaAuth::Basic {
      username: username.to_string(),
      password: password.to_string(),
    }),
    _ => Err(GiteaError::Config(format!("{ENV_AUTH} must look like username:password"))),
  }
}
