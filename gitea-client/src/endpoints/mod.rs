//! # Gitea API Endpoints
//!
//! Per-resource operation modules implemented on
//! [`GiteaClient`](crate::client::GiteaClient): users, organizations,
//! repositories, teams, and server information.

pub mod orgs;
pub mod repos;
pub mod server;
pub mod teams;
pub mod users;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{GiteaError, Result};

/// Deserialize a creation response after checking the forge actually
/// returned an entity.
///
/// The forge sometimes answers an accepted creation with a bare message
/// object instead of the created record; that carries no `id` and becomes
/// [`GiteaError::NotCreated`] with the message text.
pub(crate) fn parse_created<T: DeserializeOwned>(value: Value, entity: &'static str) -> Result<T> {
  if value.get("id").is_none() {
    let message = value
      .get("message")
      .and_then(Value::as_str)
      .unwrap_or_default()
      .to_string();
    return Err(GiteaError::NotCreated { entity, message });
  }

  Ok(serde_json::from_value(value)?)
}
