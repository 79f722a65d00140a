//! Binary that requests a stocks report from the Ozon Seller API and polls
//! it until generation finishes, printing the download link.
//!
//! # Usage
//!
//! ```sh
//! export OZON_CLIENT_ID="your-client-id"
//! export OZON_API_KEY="your-api-key"
//! # optional, e.g. for a mock server
//! export OZON_BASE_URL="http://127.0.0.1:8080"
//! cargo run --bin report_check --features cli
//! ```

use std::env;

use ozon_seller_rs::OzonClient;
use ozon_seller_rs::constants::{API_BASE_URL, REPORT_POLL_INTERVAL};
use ozon_seller_rs::types::reports::{GetReportDetailsParams, GetStocksReportParams};
use tokio::time;

/// Give up after this many polls.
const MAX_POLLS: u32 = 60;

#[tokio::main]
async fn main() -> ozon_seller_rs::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client_id = env::var("OZON_CLIENT_ID").expect("set OZON_CLIENT_ID env var before running");
    let api_key = env::var("OZON_API_KEY").expect("set OZON_API_KEY env var before running");
    let base_url = env::var("OZON_BASE_URL").unwrap_or_else(|_| API_BASE_URL.to_owned());

    let client = OzonClient::with_base_url(client_id, api_key, base_url)?;

    println!("Requesting stocks report…");
    let created = client
        .create_stocks_report(&GetStocksReportParams::new())
        .await?;
    let code = created.result.code;
    println!("Report {code} queued (HTTP {})", created.common.status_code);

    let params = GetReportDetailsParams::new(code.as_str());
    for attempt in 1..=MAX_POLLS {
        let report = client.get_report_details(&params).await?.into_result();
        tracing::info!(attempt, status = ?report.status, "polled report");

        if report.status.is_finished() {
            match report.file_url() {
                Some(url) => println!("Report {code} ready: {url}"),
                None => println!(
                    "Report {code} finished with status {:?}, error: {}",
                    report.status,
                    report.error_code().unwrap_or("none"),
                ),
            }
            return Ok(());
        }

        time::sleep(REPORT_POLL_INTERVAL).await;
    }

    println!("Report {code} still pending after {MAX_POLLS} polls, giving up.");
    Ok(())
}
