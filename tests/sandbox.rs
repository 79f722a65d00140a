//! Integration tests against the live Ozon Seller API.
//!
//! # Running
//!
//! These tests require real seller credentials. Set the following environment
//! variables before running:
//!
//! ```sh
//! export OZON_CLIENT_ID="your-client-id"
//! export OZON_API_KEY="your-api-key"
//! cargo test --test sandbox -- --nocapture
//! ```
//!
//! Without these env vars, every test is silently skipped.
//!
//! # What is tested
//!
//! - **Report list** — first page of all reports
//! - **Report generation** — stocks report: create → poll details
//! - **Cash flows** — last month's statement
//! - **Error handling** — unknown report code and bad credentials produce
//!   typed `OzonError::Api`

use chrono::{Duration, Utc};
use ozon_seller_rs::client::OzonClient;
use ozon_seller_rs::error::OzonError;
use ozon_seller_rs::types::reports::*;

/// Helper: create a live client or skip the test.
fn live_client() -> Option<OzonClient> {
    let client_id = std::env::var("OZON_CLIENT_ID").ok()?;
    let api_key = std::env::var("OZON_API_KEY").ok()?;
    if client_id.is_empty() || api_key.is_empty() {
        return None;
    }
    OzonClient::new(client_id, api_key).ok()
}

/// Macro to skip a test when credentials are missing.
macro_rules! require_client {
    () => {
        match live_client() {
            Some(c) => c,
            None => {
                eprintln!("⏭  Skipped (OZON_CLIENT_ID / OZON_API_KEY not set)");
                return;
            }
        }
    };
}

// ===================================================================
// Reports
// ===================================================================

#[tokio::test]
async fn test_reports_list() {
    let client = require_client!();
    let resp = client
        .get_reports_list(&GetReportsListParams::new())
        .await
        .expect("get_reports_list failed");
    assert_eq!(resp.common.status_code, 200);
    println!(
        "✔ Report list: {} of {} reports",
        resp.result.reports.len(),
        resp.result.total
    );
}

#[tokio::test]
async fn test_stocks_report_lifecycle() {
    let client = require_client!();

    // 1. Request generation
    let created = client
        .create_stocks_report(&GetStocksReportParams::new())
        .await
        .expect("create_stocks_report failed");
    let code = created.result.code;
    assert!(!code.is_empty());
    println!("✔ Stocks report queued: {code}");

    // 2. Look it up; it's usually still pending at this point
    let report = client
        .get_report_details(&GetReportDetailsParams::new(code.as_str()))
        .await
        .expect("get_report_details failed")
        .into_result();
    assert_eq!(report.code, code);
    println!("✔ Report details: status={:?}", report.status);
}

#[tokio::test]
async fn test_financial_report() {
    let client = require_client!();
    let to = Utc::now();
    let from = to - Duration::days(30);
    let resp = client
        .get_financial_report(&GetFinancialReportParams::new(from, to))
        .await
        .expect("get_financial_report failed");
    println!(
        "✔ Cash flows: {} entries, {} pages",
        resp.result.cash_flows.len(),
        resp.result.page_count
    );
}

// ===================================================================
// Error Handling
// ===================================================================

#[tokio::test]
async fn test_unknown_report_code_returns_api_error() {
    let client = require_client!();
    let err = client
        .get_report_details(&GetReportDetailsParams::new("REPORT_does_not_exist"))
        .await
        .unwrap_err();
    match &err {
        OzonError::Api { body, .. } => println!("✔ Unknown code correctly rejected: {body}"),
        other => panic!("Expected OzonError::Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_api_key_returns_api_error() {
    // Only runs with credentials so CI without network access stays green.
    let _ = require_client!();
    let client = OzonClient::new("0", "invalid-api-key").unwrap();
    let err = client
        .get_reports_list(&GetReportsListParams::new())
        .await
        .unwrap_err();
    assert!(err.is_transport());
    println!("✔ Bad credentials correctly rejected: {err}");
}
