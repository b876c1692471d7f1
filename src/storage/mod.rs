//! Device-local storage layer.

pub mod kv;
pub mod sessions;

pub use kv::KvStore;
pub use sessions::UploadSessionStore;

/// Storage keys as constants.
pub mod keys {
    /// The whole upload session collection under one key
    pub const UPLOAD_SESSIONS: &str = "upload_sessions";
}
