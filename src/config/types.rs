//! Typed process settings.

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Page size used when `DEFAULT_LIMIT` is not set.
pub const DEFAULT_PAGE_LIMIT: u64 = 20;

/// Settings read once at startup and handed to whatever needs them.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// MongoDB connection string (`MONGODB`).
    pub mongodb: String,
    /// HTTP listen port (`PORT`).
    pub port: u16,
    /// Page size for list requests that omit `limit` (`DEFAULT_LIMIT`).
    pub default_limit: u64,
}

impl AppConfig {
    /// Config with the given connection string and every other option at its default.
    pub fn with_mongodb(mongodb: impl Into<String>) -> Self {
        Self {
            mongodb: mongodb.into(),
            port: DEFAULT_PORT,
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
