//! # Response Classification
//!
//! Maps an HTTP response onto the fixed outcome taxonomy. Classification is a
//! pure function of the status code, the accepted-status set of the calling
//! operation, and the raw body; nothing here touches the network or any
//! shared state.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::GiteaError;

/// Longest body still treated as "no payload".
///
/// The forge occasionally answers accepted requests with whitespace or a bare
/// `[]`/`{}`; anything this short becomes an empty mapping instead of being
/// fed to the JSON decoder.
pub(crate) const EMPTY_BODY_MAX_LEN: usize = 3;

/// Status codes accepted for plain and paginated reads
pub(crate) const ACCEPTED_READ: [StatusCode; 2] = [StatusCode::OK, StatusCode::CREATED];

/// Status codes accepted for updates
pub(crate) const ACCEPTED_PUT: [StatusCode; 2] = [StatusCode::OK, StatusCode::NO_CONTENT];

/// Status codes accepted for deletions
pub(crate) const ACCEPTED_DELETE: [StatusCode; 1] = [StatusCode::NO_CONTENT];

/// Status codes accepted for creations
pub(crate) const ACCEPTED_POST: [StatusCode; 3] = [StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED];

/// Status codes accepted for partial updates
pub(crate) const ACCEPTED_PATCH: [StatusCode; 2] = [StatusCode::OK, StatusCode::CREATED];

/// Classification of one HTTP response
#[derive(Debug)]
pub enum Outcome {
  /// Accepted status carrying a JSON payload
  Success(Value),
  /// Accepted status with an empty or near-empty body
  SuccessEmpty,
  /// Status outside the accepted set
  Failure(GiteaError),
}

impl Outcome {
  /// Collapse into the payload, turning `SuccessEmpty` into an empty mapping
  pub fn into_value(self) -> Result<Value, GiteaError> {
    match self {
      Self::Success(value) => Ok(value),
      Self::SuccessEmpty => Ok(Value::Object(serde_json::Map::new())),
      Self::Failure(err) => Err(err),
    }
  }
}

/// Classify one response against the accepted-status set of the calling
/// operation.
///
/// Checked in fixed priority order, first match wins: accepted, 404, 403,
/// 409, 422, anything else. An accepted status parses the body under the
/// short-body rule; a decode failure surfaces as the returned error, never as
/// an [`Outcome`].
pub fn classify(status: StatusCode, accepted: &[StatusCode], url: &str, body: &str) -> serde_json::Result<Outcome> {
  if accepted.contains(&status) {
    if body.len() > EMPTY_BODY_MAX_LEN {
      return Ok(Outcome::Success(serde_json::from_str(body)?));
    }
    return Ok(Outcome::SuccessEmpty);
  }

  let status_code = status.as_u16();
  let url = url.to_string();
  let body = body.to_string();
  let failure = match status {
    StatusCode::NOT_FOUND => GiteaError::NotFound {
      status: status_code,
      url,
      body,
    },
    StatusCode::FORBIDDEN => GiteaError::Unauthorized {
      status: status_code,
      url,
      body,
    },
    StatusCode::CONFLICT => GiteaError::Conflict {
      status: status_code,
      url,
      body,
    },
    StatusCode::UNPROCESSABLE_ENTITY => GiteaError::Validation {
      status: status_code,
      url,
      body,
    },
    _ => GiteaError::Uncaught {
      status: status_code,
      url,
      body,
    },
  };

  Ok(Outcome::Failure(failure))
}

/// Elements of a JSON listing body; any non-array payload counts as empty
pub(crate) fn list_items(value: Value) -> Vec<Value> {
  match value {
    Value::Array(items) => items,
    _ => Vec::new(),
  }
}

/// Deserialize a JSON listing body element-wise, treating any non-array
/// payload as an empty listing
pub(crate) fn parse_list<T: DeserializeOwned>(value: Value) -> serde_json::Result<Vec<T>> {
  list_items(value).into_iter().map(serde_json::from_value).collect()
}
