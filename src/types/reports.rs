//! Report types — report list and details, cash-flow statements, and the
//! report generation requests.
//!
//! Every parameter type spells out its defaults in `new` (and `Default`
//! where no field is mandatory); all fields are public so callers can
//! override any of them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::paging::{DEFAULT_PAGE_SIZE, FIRST_PAGE, MAX_PAGE_SIZE};
use crate::types::common::{ApiResponse, null_as_default};
use crate::types::enums::*;

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A generated (or generating) report.
///
/// Returned by `POST /v1/report/list` and `POST /v1/report/info`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Report {
    /// Unique report identifier, usable with `/v1/report/info`.
    pub code: String,
    /// Report creation date.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Error code when generating the report.
    #[serde(default)]
    pub error: Option<String>,
    /// Link to the CSV file. Empty until the report is generated.
    #[serde(default)]
    pub file: Option<String>,
    /// Filters the seller specified when creating the report.
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: HashMap<String, String>,
    /// Report category.
    #[serde(default)]
    pub report_type: Option<ReportType>,
    /// Generation status.
    pub status: ReportStatus,
}

impl Report {
    /// The download link, if the report has one.
    pub fn file_url(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.is_empty())
    }

    /// The generation error code, if any.
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Report list
// ---------------------------------------------------------------------------

/// Request body for `POST /v1/report/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetReportsListParams {
    /// Page number, starting at 1.
    pub page: i32,
    /// Number of values on the page, at most
    /// [`MAX_PAGE_SIZE`](crate::constants::paging::MAX_PAGE_SIZE).
    pub page_size: i32,
    /// Report category to list, `ALL` by default.
    pub report_type: ReportType,
}

impl GetReportsListParams {
    /// First page of 100 reports of any type.
    pub fn new() -> Self {
        Self {
            page: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            report_type: ReportType::ALL,
        }
    }

    /// Set the page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }
}

impl Default for GetReportsListParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of `POST /v1/report/list`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reports: Vec<Report>,
    /// Total number of reports.
    #[serde(default)]
    pub total: i32,
}

pub type GetReportsListResponse = ApiResponse<ReportList>;

// ---------------------------------------------------------------------------
// Report details
// ---------------------------------------------------------------------------

/// Request body for `POST /v1/report/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetReportDetailsParams {
    /// Unique report identifier.
    pub code: String,
}

impl GetReportDetailsParams {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

pub type GetReportDetailsResponse = ApiResponse<Report>;

// ---------------------------------------------------------------------------
// Financial report (cash-flow statement)
// ---------------------------------------------------------------------------

/// Request body for `POST /v1/finance/cash-flow-statement/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFinancialReportParams {
    /// Report generation period.
    pub date: FinancialReportPeriod,
    /// Number of the page returned in the request.
    pub page: i64,
    /// Number of items on the page.
    pub page_size: i64,
}

/// Date range of a cash-flow statement request. `from` must not be after
/// `to`; the server enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReportPeriod {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl GetFinancialReportParams {
    /// First page of 100 entries for the given period.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            date: FinancialReportPeriod { from, to },
            page: FIRST_PAGE.into(),
            page_size: DEFAULT_PAGE_SIZE.into(),
        }
    }
}

/// Billing period a [`CashFlow`] entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CashFlowPeriod {
    /// Period identifier.
    pub id: i64,
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// One cash-flow statement entry.
///
/// The amounts are reported independently by Ozon and don't add up to any
/// total on their own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CashFlow {
    pub period: CashFlowPeriod,
    /// Sum of sold products prices.
    #[serde(default)]
    pub order_amount: f64,
    /// Sum of returned products prices.
    #[serde(default)]
    pub returns_amount: f64,
    /// Ozon sales commission.
    #[serde(default)]
    pub commission_amount: f64,
    /// Additional services cost.
    #[serde(default)]
    pub services_amount: f64,
    /// Logistic services cost.
    #[serde(default)]
    pub item_delivery_and_return_amount: f64,
    /// Currency the amounts are expressed in.
    #[serde(default)]
    pub currency_code: String,
}

/// Result of `POST /v1/finance/cash-flow-statement/list`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CashFlowStatement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cash_flows: Vec<CashFlow>,
    /// Number of pages with reports.
    #[serde(default)]
    pub page_count: i64,
}

pub type GetFinancialReportResponse = ApiResponse<CashFlowStatement>;

// ---------------------------------------------------------------------------
// Report generation
// ---------------------------------------------------------------------------

/// Handle of a report whose generation was requested.
///
/// Poll `/v1/report/info` with this code until the status leaves pending.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportCode {
    /// Unique report identifier.
    pub code: String,
}

/// Response of every `/v1/report/*/create` endpoint.
pub type CreateReportResponse = ApiResponse<ReportCode>;

/// Request body for `POST /v1/report/products/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProductsReportParams {
    pub language: Language,
    /// Product identifiers in the seller's system.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offer_id: Vec<String>,
    /// Search by record content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Product identifiers in the Ozon system.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sku: Vec<i64>,
    pub visibility: Visibility,
}

impl GetProductsReportParams {
    /// All products, in the account's default language.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request body for `POST /v1/report/stock/create`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStocksReportParams {
    pub language: Language,
}

impl GetStocksReportParams {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request body for `POST /v1/report/products/movement/create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProductsMovementReportParams {
    /// Date from which the data will be in the report.
    pub date_from: DateTime<Utc>,
    /// Date up to which the data will be in the report.
    pub date_to: DateTime<Utc>,
    pub language: Language,
}

impl GetProductsMovementReportParams {
    pub fn new(date_from: DateTime<Utc>, date_to: DateTime<Utc>) -> Self {
        Self {
            date_from,
            date_to,
            language: Language::DEFAULT,
        }
    }
}

/// Request body for `POST /v1/report/returns/create`.
///
/// Only orders delivered from the seller's warehouse (FBS) are supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetReturnsReportParams {
    pub filter: ReturnsReportFilter,
    pub language: Language,
}

impl GetReturnsReportParams {
    pub fn new(filter: ReturnsReportFilter) -> Self {
        Self {
            filter,
            language: Language::DEFAULT,
        }
    }
}

/// Filter of the returns report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnsReportFilter {
    /// Defaults to FBS, the only scheme the endpoint accepts.
    pub delivery_schema: DeliverySchema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    /// Return status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Request body for `POST /v1/report/postings/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetShipmentReportParams {
    pub filter: ShipmentReportFilter,
    pub language: Language,
}

impl GetShipmentReportParams {
    pub fn new(filter: ShipmentReportFilter) -> Self {
        Self {
            filter,
            language: Language::DEFAULT,
        }
    }
}

/// Filter of the shipment report. Only the processing window is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentReportFilter {
    /// Cancellation reason identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cancel_reason_id: Vec<i64>,
    /// Pass `fbo` for an FBO report and `fbs` for an FBS one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delivery_schema: Vec<DeliverySchema>,
    /// Product identifier in the seller's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    /// Order processing start date and time.
    pub processed_at_from: DateTime<Utc>,
    /// Time when the order appeared in the seller's account.
    pub processed_at_to: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sku: Vec<i64>,
    /// Status text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_alias: Vec<String>,
    /// Numerical statuses. The wire name really is `statused`.
    #[serde(rename = "statused", default, skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<i64>,
    /// Product name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ShipmentReportFilter {
    /// Filter matching every shipment processed within the window.
    pub fn new(processed_at_from: DateTime<Utc>, processed_at_to: DateTime<Utc>) -> Self {
        Self {
            cancel_reason_id: Vec::new(),
            delivery_schema: Vec::new(),
            offer_id: None,
            processed_at_from,
            processed_at_to,
            sku: Vec::new(),
            status_alias: Vec::new(),
            statuses: Vec::new(),
            title: None,
        }
    }
}
