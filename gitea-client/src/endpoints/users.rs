use tracing::{debug, info, instrument};

use crate::client::GiteaClient;
use crate::error::Result;
use crate::models::{CreateUserOption, EditUserOption, Email, User};
use crate::response::parse_list;

use super::parse_created;

/// Forge message fragment identifying a duplicate-user rejection
const USER_ALREADY_EXISTS: &str = "user already exists";

impl GiteaClient {
  /// Create a user as the administrator.
  ///
  /// Fails with [`GiteaError::AlreadyExists`](crate::error::GiteaError) when
  /// the forge already knows the username.
  #[instrument(skip(self, option), level = "debug")]
  pub async fn create_user(&self, option: &CreateUserOption) -> Result<User> {
    debug!("Creating user {}", option.username);

    let value = self
      .post("/admin/users", option)
      .await
      .map_err(|err| err.validation_as_already_exists(USER_ALREADY_EXISTS))?;
    let user: User = parse_created(value, "user")?;

    info!("Successfully created User {} <{}> (id {})", user.login, user.email, user.id);
    Ok(user)
  }

  /// Get the user owning the configured credentials
  #[instrument(skip(self), level = "debug")]
  pub async fn get_authenticated_user(&self) -> Result<User> {
    let value = self.get("/user", &[], None).await?;
    Ok(serde_json::from_value(value)?)
  }

  /// List every user known to the forge (administrator only)
  #[instrument(skip(self), level = "debug")]
  pub async fn get_users(&self) -> Result<Vec<User>> {
    let value = self.get("/admin/users", &[], None).await?;
    Ok(parse_list(value)?)
  }

  /// Find a user by account name
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user_by_name(&self, username: &str) -> Result<Option<User>> {
    let users = self.get_users().await?;
    Ok(users.into_iter().find(|user| user.login == username))
  }

  /// Find a user by email address.
  ///
  /// Primary addresses are checked first; a user whose primary does not
  /// match is then looked up through their registered addresses, one user at
  /// a time.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
    let users = self.get_users().await?;
    for user in users {
      if user.email == email {
        return Ok(Some(user));
      }
      let emails = self.list_user_emails(&user.login).await?;
      if emails.iter().any(|entry| entry.email == email) {
        return Ok(Some(user));
      }
    }

    Ok(None)
  }

  /// List the email addresses registered for `username`, read on the user's
  /// behalf through the administrator sudo parameter
  #[instrument(skip(self), level = "debug")]
  pub async fn list_user_emails(&self, username: &str) -> Result<Vec<Email>> {
    let value = self.get("/user/emails", &[], Some(username)).await?;
    Ok(parse_list(value)?)
  }

  /// Update user settings as the administrator; fields left unset in the
  /// option stay untouched
  #[instrument(skip(self, option), level = "debug")]
  pub async fn edit_user(&self, username: &str, option: &EditUserOption) -> Result<User> {
    let value = self.patch(&format!("/admin/users/{username}"), option).await?;
    Ok(serde_json::from_value(value)?)
  }

  /// Delete a user as the administrator
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_user(&self, username: &str) -> Result<()> {
    self.delete(&format!("/admin/users/{username}")).await
  }
}
