// SPDX-License-Identifier: MIT

//! AllIn device core: post-authentication routing and upload tracking.
//!
//! This crate holds the decision logic the AllIn mobile app keeps on the
//! device: resolving which screen to land on after login, and the durable
//! log of upload batches that the upload activity screen polls.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;

use config::Config;
use services::{GatewayClient, NetworkLog};
use storage::{KvStore, UploadSessionStore};

/// Shared core state, wired up once at app start.
pub struct AppCore {
    pub config: Config,
    pub kv: KvStore,
    pub netlog: NetworkLog,
    pub gateway: GatewayClient,
    pub sessions: UploadSessionStore,
}

impl AppCore {
    /// Open the local store and construct the service layer.
    pub async fn init(config: Config) -> error::Result<Self> {
        let kv = KvStore::open(&config.data_dir).await?;
        let netlog = NetworkLog::new();
        let gateway = GatewayClient::new(config.gateway_url.clone(), netlog.clone());
        let sessions = UploadSessionStore::new(kv.clone());

        Ok(Self {
            config,
            kv,
            netlog,
            gateway,
            sessions,
        })
    }

    /// Back the "clear my data" action: wipe all upload sessions plus any
    /// cached media directories. All-or-nothing, not per-session.
    pub async fn reset_local_data(&self) -> error::Result<()> {
        storage::sessions::reset_local_data(&self.kv, &self.config.cache_dirs).await
    }
}
