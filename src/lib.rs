//! # ozon-seller-rs
//!
//! A Rust client library for the reports endpoints of the
//! [Ozon Seller API](https://docs.ozon.ru/api/seller/).
//!
//! ## Quick Start
//!
//! ```no_run
//! use ozon_seller_rs::OzonClient;
//! use ozon_seller_rs::types::reports::GetStocksReportParams;
//!
//! #[tokio::main]
//! async fn main() -> ozon_seller_rs::error::Result<()> {
//!     let client = OzonClient::new("your-client-id", "your-api-key")?;
//!     let created = client.create_stocks_report(&GetStocksReportParams::new()).await?;
//!     println!("report {} queued", created.result.code);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::OzonClient;
/// Re-export the error type and Result alias.
pub use error::{OzonError, Result};
