// SPDX-License-Identifier: MIT

//! AllIn API gateway client.
//!
//! Only the post-login bootstrap fetch lives in the core; everything
//! else the app needs from the gateway goes through the screen layer.

use crate::models::BootstrapSnapshot;
use crate::services::netlog::{NetworkLog, NetworkLogEntry};
use crate::time_utils::format_utc_rfc3339;
use std::time::Instant;

/// Thin HTTP client for the AllIn API gateway.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
    netlog: NetworkLog,
}

impl GatewayClient {
    pub fn new(base_url: String, netlog: NetworkLog) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            netlog,
        }
    }

    /// Fetch the post-login bootstrap snapshot.
    ///
    /// Returns `None` on any failure - network error, non-2xx status, or
    /// an unparseable body. The route resolver treats a missing snapshot
    /// as "fall back to local state"; retrying is the caller's business.
    pub async fn fetch_bootstrap(&self, access_token: &str) -> Option<BootstrapSnapshot> {
        let url = format!("{}/users/bootstrap", self.base_url);
        let started = Instant::now();

        let result = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await;

        self.netlog.publish(&NetworkLogEntry {
            method: "GET".to_string(),
            url: url.clone(),
            status: result.as_ref().ok().map(|r| r.status().as_u16()),
            duration_ms: started.elapsed().as_millis() as u64,
            at: format_utc_rfc3339(chrono::Utc::now()),
        });

        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<BootstrapSnapshot>().await {
                    Ok(snapshot) => Some(snapshot),
                    Err(e) => {
                        tracing::warn!(error = %e, "Bootstrap response did not parse");
                        None
                    }
                }
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status().as_u16(),
                    "Bootstrap fetch failed"
                );
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Bootstrap fetch failed");
                None
            }
        }
    }
}
