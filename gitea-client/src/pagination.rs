//! # Paginated Retrieval
//!
//! Page-number pagination over listing endpoints: inject the page parameter,
//! collect pages in order, stop on the first empty page or at the caller's
//! page ceiling. The first rejected page propagates as-is, with nothing
//! aggregated.

use serde_json::Value;

use crate::client::GiteaClient;
use crate::error::Result;
use crate::response::list_items;

/// Query parameter most listing endpoints page on
pub(crate) const DEFAULT_PAGE_KEY: &str = "page";

impl GiteaClient {
  /// GET every page of a listing endpoint into one ordered sequence.
  ///
  /// Pages are requested starting at 1 under `page_key`, in order, one at a
  /// time; elements keep their server-reported order and are never
  /// deduplicated. A `page_limit` of 0 means unbounded, so termination then
  /// relies entirely on the forge eventually answering with an empty page.
  pub(crate) async fn get_paginated(
    &self,
    endpoint: &str,
    params: &[(String, String)],
    sudo: Option<&str>,
    page_key: &str,
    page_limit: u32,
  ) -> Result<Vec<Value>> {
    let mut page: u32 = 1;
    let mut aggregated = Vec::new();

    loop {
      let mut combined = params.to_vec();
      combined.push((page_key.to_string(), page.to_string()));

      let body = self.get(endpoint, &combined, sudo).await?;
      let items = list_items(body);
      if items.is_empty() {
        return Ok(aggregated);
      }
      aggregated.extend(items);

      page += 1;
      if page_limit > 0 && page > page_limit {
        return Ok(aggregated);
      }
    }
  }
}
