//! Report endpoints — report list and details, cash-flow statements, and
//! report generation.
//!
//! The `create_*` methods only start generation on the Ozon side and return
//! a report code. Poll [`get_report_details`](OzonClient::get_report_details)
//! with that code until [`ReportStatus::is_pending`] turns false.
//!
//! [`ReportStatus::is_pending`]: crate::types::enums::ReportStatus::is_pending

use crate::client::OzonClient;
use crate::error::Result;
use crate::types::reports::*;

impl OzonClient {
    /// Retrieve the list of reports generated before.
    ///
    /// **Endpoint:** `POST /v1/report/list`
    pub async fn get_reports_list(
        &self,
        params: &GetReportsListParams,
    ) -> Result<GetReportsListResponse> {
        self.post("/v1/report/list", params).await
    }

    /// Retrieve a report by its code.
    ///
    /// **Endpoint:** `POST /v1/report/info`
    pub async fn get_report_details(
        &self,
        params: &GetReportDetailsParams,
    ) -> Result<GetReportDetailsResponse> {
        self.post("/v1/report/info", params).await
    }

    /// Retrieve the cash-flow statement for a period.
    ///
    /// **Endpoint:** `POST /v1/finance/cash-flow-statement/list`
    pub async fn get_financial_report(
        &self,
        params: &GetFinancialReportParams,
    ) -> Result<GetFinancialReportResponse> {
        self.post("/v1/finance/cash-flow-statement/list", params)
            .await
    }

    /// Request a report with products data: Ozon ID, quantities, prices,
    /// status.
    ///
    /// **Endpoint:** `POST /v1/report/products/create`
    pub async fn create_products_report(
        &self,
        params: &GetProductsReportParams,
    ) -> Result<CreateReportResponse> {
        self.post("/v1/report/products/create", params).await
    }

    /// Request a report on available and reserved stock.
    ///
    /// **Endpoint:** `POST /v1/report/stock/create`
    pub async fn create_stocks_report(
        &self,
        params: &GetStocksReportParams,
    ) -> Result<CreateReportResponse> {
        self.post("/v1/report/stock/create", params).await
    }

    /// Request a products movement report: defective and in-inventory
    /// products, products in transit between fulfillment centers, in
    /// delivery, and to be sold.
    ///
    /// **Endpoint:** `POST /v1/report/products/movement/create`
    pub async fn create_products_movement_report(
        &self,
        params: &GetProductsMovementReportParams,
    ) -> Result<CreateReportResponse> {
        self.post("/v1/report/products/movement/create", params)
            .await
    }

    /// Request a report on returned products accepted from the customer,
    /// ready for pickup, or delivered to the seller.
    ///
    /// Only FBS orders are supported.
    ///
    /// **Endpoint:** `POST /v1/report/returns/create`
    pub async fn create_returns_report(
        &self,
        params: &GetReturnsReportParams,
    ) -> Result<CreateReportResponse> {
        self.post("/v1/report/returns/create", params).await
    }

    /// Request a shipment report with order statuses, processing dates,
    /// order and shipment numbers, shipment costs and contents.
    ///
    /// **Endpoint:** `POST /v1/report/postings/create`
    pub async fn create_shipment_report(
        &self,
        params: &GetShipmentReportParams,
    ) -> Result<CreateReportResponse> {
        self.post("/v1/report/postings/create", params).await
    }
}
