//! Store configuration.
//!
//! Configuration is resolved once at process start from `QUICKNOTES_*`
//! environment variables; the backend choice is not switchable at runtime.
//! Call sites hold the constructed `dyn NoteStore` and never branch on the
//! backend flag themselves.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use quicknotes_core::{defaults, Error, NoteStore, Result};

use crate::local::LocalNoteStore;
use crate::remote::RemoteNoteStore;

/// Backend selection and addressing for the note store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Select the remote HTTP backend instead of the local file store.
    pub use_remote_store: bool,
    /// Base address for remote requests; ignored when `use_remote_store`
    /// is false.
    pub remote_base_url: String,
    /// Path of the local persisted array; ignored when `use_remote_store`
    /// is true.
    pub local_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            use_remote_store: false,
            remote_base_url: defaults::REMOTE_BASE_URL.to_string(),
            local_path: PathBuf::from(defaults::LOCAL_STORE_PATH),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables:
    /// - `QUICKNOTES_USE_REMOTE`: "1"/"true"/"yes" selects the remote backend
    /// - `QUICKNOTES_API_URL`: base address for the remote backend
    /// - `QUICKNOTES_STORE_PATH`: file path for the local backend
    pub fn from_env() -> Self {
        let use_remote_store = env::var("QUICKNOTES_USE_REMOTE")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let remote_base_url = env::var("QUICKNOTES_API_URL")
            .unwrap_or_else(|_| defaults::REMOTE_BASE_URL.to_string());

        let local_path = env::var("QUICKNOTES_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::LOCAL_STORE_PATH));

        Self {
            use_remote_store,
            remote_base_url,
            local_path,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.use_remote_store {
            if self.remote_base_url.is_empty() {
                return Err(Error::Config("remote base URL cannot be empty".to_string()));
            }

            if !self.remote_base_url.starts_with("http://")
                && !self.remote_base_url.starts_with("https://")
            {
                return Err(Error::Config(format!(
                    "remote base URL must start with http:// or https://, got: {}",
                    self.remote_base_url
                )));
            }
        } else if self.local_path.as_os_str().is_empty() {
            return Err(Error::Config("local store path cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Construct the configured backend.
    ///
    /// Exactly one concrete store is built per process.
    pub fn build(&self) -> Result<Arc<dyn NoteStore>> {
        self.validate()?;

        if self.use_remote_store {
            info!("Using remote note store at {}", self.remote_base_url);
            Ok(Arc::new(RemoteNoteStore::new(self.remote_base_url.clone())))
        } else {
            info!("Using local note store at {}", self.local_path.display());
            Ok(Arc::new(LocalNoteStore::new(self.local_path.clone())))
        }
    }
}
