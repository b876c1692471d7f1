// SPDX-License-Identifier: MIT

//! Services module - decision logic and gateway access.

pub mod account_check;
pub mod gateway;
pub mod netlog;
pub mod onboarding;

pub use account_check::needs_account_completion;
pub use gateway::GatewayClient;
pub use netlog::{NetworkLog, NetworkLogEntry, NetworkLogHandle};
pub use onboarding::resolve_post_auth_route;
