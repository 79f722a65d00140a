//! Request and response types for the Ozon Seller API.
//!
//! ## Organization
//!
//! - [`common`] — The `result` wrapper and the response envelope
//! - [`enums`] — Shared enumerations (report types, statuses, languages, etc.)
//! - [`reports`] — Report, cash-flow, and report generation types
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod common;
pub mod enums;
pub mod reports;

pub use common::{ApiResponse, CommonResponse};
pub use enums::*;
