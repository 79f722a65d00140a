//! Constants for the Ozon Seller API.
//!
//! Contains the base URL, auth header names, and paging limits. These are
//! used internally by [`OzonClient`](crate::client::OzonClient) and the
//! parameter types, but are also exported for advanced usage.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the Ozon Seller REST API.
pub const API_BASE_URL: &str = "https://api-seller.ozon.ru";

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Header carrying the seller's client identifier.
pub const CLIENT_ID_HEADER: &str = "Client-Id";

/// Header carrying the seller's API key.
pub const API_KEY_HEADER: &str = "Api-Key";

// ---------------------------------------------------------------------------
// Paging
// ---------------------------------------------------------------------------

/// Paging limits shared by the list endpoints.
pub mod paging {
    /// First page number.
    pub const FIRST_PAGE: i32 = 1;
    /// Page size used when the caller doesn't pick one.
    pub const DEFAULT_PAGE_SIZE: i32 = 100;
    /// Largest page size the report list accepts.
    pub const MAX_PAGE_SIZE: i32 = 1000;
}

// ---------------------------------------------------------------------------
// Report generation
// ---------------------------------------------------------------------------

/// Suggested delay between two `/v1/report/info` polls while a report is
/// still being generated.
pub const REPORT_POLL_INTERVAL: Duration = Duration::from_secs(5);
