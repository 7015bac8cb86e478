//! Build-time Configuration
//!
//! The API location is fixed at compile time. Set `CATALOG_API_BASE` when
//! building to point the UI at another server.

use log::LevelFilter;

/// Product API used when `CATALOG_API_BASE` is not set
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/products";

/// Base URL of the remote product API (no trailing slash)
pub const API_BASE: &str = match option_env!("CATALOG_API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

/// How long an error/success banner stays up before clearing itself
pub const NOTICE_DISMISS_MS: u32 = 5_000;

/// Console log level
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};
