// SPDX-License-Identifier: MIT

//! Data models for the device core.

pub mod bootstrap;
pub mod profile;
pub mod route;
pub mod session;

pub use bootstrap::{BootstrapSnapshot, BootstrapUser};
pub use profile::{LocalProfileDraft, ProfileCategory};
pub use route::{screens, RouteTarget};
pub use session::{UploadPhase, UploadSession};
