//! Constants for the gitea-client crate

/// Path prefix of the versioned Gitea REST API
pub const API_ROOT: &str = "/api/v1";

/// User-Agent header value for the Gitea API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Content-Type header value attached to every request
pub const CONTENT_TYPE: &str = "application/json";
