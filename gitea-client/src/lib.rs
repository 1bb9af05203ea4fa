//! # Gitea API Client
//!
//! Typed async client for the Gitea REST API, covering the administration
//! surface a self-hosted forge is driven through: users, organizations,
//! repositories, and teams, plus the server version probe.
//!
//! Construct a [`GiteaClient`] directly or through [`client_from_env`], then
//! call the endpoint methods grouped under [`endpoints`].

pub mod auth;
pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pagination;
pub mod response;

// Re-export the client
pub use client::{ClientOptions, GiteaClient};
// Re-export environment-driven construction
pub use auth::{auth_from_env, client_from_env, runtime_and_client_from_env};
// Re-export the error type
pub use error::{GiteaError, Result};
// Re-export models
pub use models::{
  CreateOrgOption, CreateRepoOption, CreateTeamOption, CreateUserOption, EditUserOption, Email,
  GenerateRepoOption, GiteaAuth, Organization, Repository, ServerVersion, Team, User,
};
