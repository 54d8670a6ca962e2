//! Banner image storage.

mod local;

pub use local::{LocalBannerStore, UploadConfig};
