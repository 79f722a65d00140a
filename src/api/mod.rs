//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`OzonClient`](crate::client::OzonClient) via `impl` blocks. All methods
//! handle JSON serialization, HTTP transport, and error mapping automatically.
//!
//! ## Usage
//!
//! ```no_run
//! use ozon_seller_rs::OzonClient;
//! use ozon_seller_rs::types::reports::GetReportsListParams;
//!
//! # #[tokio::main]
//! # async fn main() -> ozon_seller_rs::Result<()> {
//! let client = OzonClient::new("client-id", "api-key")?;
//! let reports = client.get_reports_list(&GetReportsListParams::new()).await?;
//! println!("{} reports", reports.result.total);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`reports`] | 8 | Report list/details, cash flows, report generation |

pub mod reports;
