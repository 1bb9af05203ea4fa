//! # Gitea Error Types
//!
//! The fixed error taxonomy every response is classified against, plus the
//! transport, decoding, and configuration failures that can occur around it.
//! Each classified failure carries the original status code, request URL, and
//! raw response body for diagnostics.

use thiserror::Error;

/// Convenience alias for results produced by this crate
pub type Result<T> = std::result::Result<T, GiteaError>;

/// Errors surfaced by the Gitea client
#[derive(Debug, Error)]
pub enum GiteaError {
  /// Client construction or environment problem, raised before any request
  #[error("configuration error: {0}")]
  Config(String),

  /// The forge answered 404 outside the accepted set
  #[error("not found: received status code {status} ({url})")]
  NotFound { status: u16, url: String, body: String },

  /// The forge answered 403 outside the accepted set
  #[error("unauthorized: {url} - check your permissions and try again")]
  Unauthorized { status: u16, url: String, body: String },

  /// The forge answered 409 outside the accepted set
  #[error("conflict: received status code {status} ({url})")]
  Conflict { status: u16, url: String, body: String },

  /// The forge answered 422 outside the accepted set
  #[error("validation rejected: received status code {status} ({url})")]
  Validation { status: u16, url: String, body: String },

  /// Any other status outside the accepted set
  #[error("received status code {status} ({url})")]
  Uncaught { status: u16, url: String, body: String },

  /// A creation was rejected because the resource already exists
  #[error("already exists: received status code {status} ({url})")]
  AlreadyExists { status: u16, url: String, body: String },

  /// The forge accepted a creation but answered with a message object
  /// instead of the created entity
  #[error("{entity} not created (gitea: {message})")]
  NotCreated { entity: &'static str, message: String },

  /// Transport-level failure before any status code was available
  #[error("transport error: {0}")]
  Http(#[from] reqwest::Error),

  /// A response body could not be decoded as JSON
  #[error("malformed response body: {0}")]
  Json(#[from] serde_json::Error),
}

impl GiteaError {
  /// Status code of the classified response, when there was one
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::NotFound { status, .. }
      | Self::Unauthorized { status, .. }
      | Self::Conflict { status, .. }
      | Self::Validation { status, .. }
      | Self::Uncaught { status, .. }
      | Self::AlreadyExists { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Map a validation rejection whose body contains `needle` to
  /// [`GiteaError::AlreadyExists`], keeping the response diagnostics.
  ///
  /// Substring matching on the raw body is a heuristic: the forge's message
  /// text is not a versioned contract, and any error that does not match
  /// passes through unchanged.
  pub(crate) fn validation_as_already_exists(self, needle: &str) -> Self {
    match self {
      Self::Validation { status, url, body } if body.contains(needle) => Self::AlreadyExists { status, url, body },
      other => other,
    }
  }

  /// Conflict counterpart of [`GiteaError::validation_as_already_exists`]
  pub(crate) fn conflict_as_already_exists(self, needle: &str) -> Self {
    match self {
      Self::Conflict { status, url, body } if body.contains(needle) => Self::AlreadyExists { status, url, body },
      other => other,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unauthorized_display() {
    let err = GiteaError::Unauthorized {
      status: 403,
      url: "https://forge.example/api/v1/user".to_string(),
      body: "{}".to_string(),
    };

    assert_eq!(
      err.to_string(),
      "unauthorized: https://forge.example/api/v1/user - check your permissions and try again"
    );
  }

  #[test]
  fn test_uncaught_display_carries_status_and_url() {
    let err = GiteaError::Uncaught {
      status: 500,
      url: "https://forge.example/api/v1/version".to_string(),
      body: String::new(),
    };

    assert_eq!(
      err.to_string(),
      "received status code 500 (https://forge.example/api/v1/version)"
    );
    assert_eq!(err.status(), Some(500));
  }

  #[test]
  fn test_validation_as_already_exists_on_matching_body() {
    let err = GiteaError::Validation {
      status: 422,
      url: "https://forge.example/api/v1/admin/users".to_string(),
      body: r#"{"message":"user already exists [name: alice]"}"#.to_string(),
    };

    let resignaled = err.validation_as_already_exists("user already exists");
    match resignaled {
      GiteaError::AlreadyExists { status, body, .. } => {
        assert_eq!(status, 422);
        assert!(body.contains("alice"));
      }
      other => panic!("expected AlreadyExists, got {other:?}"),
    }
  }

  #[test]
  fn test_validation_as_already_exists_falls_through() {
    let err = GiteaError::Validation {
      status: 422,
      url: "https://forge.example/api/v1/admin/users".to_string(),
      body: r#"{"message":"email is not allowed"}"#.to_string(),
    };

    let unchanged = err.validation_as_already_exists("user already exists");
    assert!(matches!(unchanged, GiteaError::Validation { .. }));
  }

  #[test]
  fn test_conflict_as_already_exists_ignores_other_kinds() {
    let err = GiteaError::Validation {
      status: 422,
      url: "https://forge.example/api/v1/admin/users/alice/repos".to_string(),
      body: "The repository with the same name already exists.".to_string(),
    };

    let unchanged = err.conflict_as_already_exists("The repository with the same name already exists");
    assert!(matches!(unchanged, GiteaError::Validation { .. }));
  }

  #[test]
  fn test_config_has_no_status() {
    let err = GiteaError::Config("no Gitea URL was provided".to_string());
    assert_eq!(err.status(), None);
  }
}
