//! Default configuration values shared across quicknotes crates.

/// Default base address for the remote note store.
pub const REMOTE_BASE_URL: &str = "http://localhost:3001/api";

/// Default path of the local store's persisted note array.
pub const LOCAL_STORE_PATH: &str = "notes.json";

/// Timeout for remote store requests (seconds).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
