use tracing::instrument;

use crate::client::GiteaClient;
use crate::error::Result;
use crate::models::ServerVersion;

impl GiteaClient {
  /// Get the version string reported by the forge
  #[instrument(skip(self), level = "debug")]
  pub async fn get_version(&self) -> Result<String> {
    let value = self.get("/version", &[], None).await?;
    let payload: ServerVersion = serde_json::from_value(value)?;
    Ok(payload.version)
  }
}
