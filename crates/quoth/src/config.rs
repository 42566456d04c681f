//! Configuration constants for quoth

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "quoth";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Quoth/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Sync-related configuration
pub mod sync {
    /// Default sync server base URL
    pub const DEFAULT_SERVER: &str = "https://jsonplaceholder.typicode.com";

    /// Path of the remote quote feed, relative to the server base
    pub const FEED_PATH: &str = "/server-quotes.json";

    /// Path new quotes are posted to, relative to the server base
    pub const PUBLISH_PATH: &str = "/posts";

    /// Seconds between periodic sync cycles
    pub const DEFAULT_INTERVAL_SECS: u64 = 20;
}

/// UI-related configuration
pub mod ui {
    /// Seconds a notification banner stays visible before auto-dismissal
    pub const BANNER_SECS: u64 = 5;
}
