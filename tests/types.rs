//! Serialization tests for the report request types.

use chrono::{TimeZone, Utc};
use ozon_seller_rs::constants::paging::{DEFAULT_PAGE_SIZE, FIRST_PAGE, MAX_PAGE_SIZE};
use ozon_seller_rs::types::enums::*;
use ozon_seller_rs::types::reports::*;
use serde_json::{Value, json};

fn to_value<T: serde::Serialize>(v: &T) -> Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn test_reports_list_defaults() {
    let params = GetReportsListParams::default();
    assert_eq!(params.page, FIRST_PAGE);
    assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(params.report_type, ReportType::ALL);
    assert_eq!(
        serde_json::to_string(&params).unwrap(),
        r#"{"page":1,"page_size":100,"report_type":"ALL"}"#
    );
}

#[test]
fn test_report_details_body() {
    assert_eq!(
        serde_json::to_string(&GetReportDetailsParams::new("abc123")).unwrap(),
        r#"{"code":"abc123"}"#
    );
}

#[test]
fn test_financial_report_dates_are_rfc3339() {
    let params = GetFinancialReportParams::new(
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 1, 31, 0, 0, 0).unwrap(),
    );
    assert_eq!(
        to_value(&params),
        json!({
            "date": {"from": "2023-01-01T00:00:00Z", "to": "2023-01-31T00:00:00Z"},
            "page": 1,
            "page_size": 100
        })
    );
}

#[test]
fn test_products_report_skips_unset_filters() {
    assert_eq!(
        to_value(&GetProductsReportParams::new()),
        json!({"language": "DEFAULT", "visibility": "ALL"})
    );
}

#[test]
fn test_stocks_report_default_language() {
    assert_eq!(
        to_value(&GetStocksReportParams::new()),
        json!({"language": "DEFAULT"})
    );
}

#[test]
fn test_returns_report_defaults_to_fbs() {
    assert_eq!(
        to_value(&GetReturnsReportParams::default()),
        json!({"filter": {"delivery_schema": "fbs"}, "language": "DEFAULT"})
    );
}

#[test]
fn test_shipment_filter_uses_statused_wire_name() {
    let mut filter = ShipmentReportFilter::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap(),
    );
    filter.statuses = vec![1, 2];

    let value = to_value(&GetShipmentReportParams::new(filter));
    assert_eq!(value["filter"]["statused"], json!([1, 2]));
    assert!(value["filter"].get("statuses").is_none());
    assert!(value["filter"].get("sku").is_none());
    assert_eq!(
        value["filter"]["processed_at_from"],
        json!("2024-05-01T00:00:00Z")
    );
}

/// Emitted bodies parse back into the same parameter values.
#[test]
fn test_params_survive_reparsing() {
    let from = Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 2, 29, 20, 0, 0).unwrap();

    let list = GetReportsListParams {
        page: 2,
        page_size: 500,
        report_type: ReportType::SELLER_RETURNS,
    };
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(serde_json::from_str::<GetReportsListParams>(&json).unwrap(), list);

    let products = GetProductsReportParams {
        language: Language::RU,
        offer_id: vec!["A-1".into()],
        search: Some("чашка".into()),
        sku: vec![1, 2, 3],
        visibility: Visibility::ARCHIVED,
    };
    let json = serde_json::to_string(&products).unwrap();
    assert_eq!(
        serde_json::from_str::<GetProductsReportParams>(&json).unwrap(),
        products
    );

    let movement = GetProductsMovementReportParams::new(from, to);
    let json = serde_json::to_string(&movement).unwrap();
    assert_eq!(
        serde_json::from_str::<GetProductsMovementReportParams>(&json).unwrap(),
        movement
    );

    let mut filter = ShipmentReportFilter::new(from, to);
    filter.delivery_schema = vec![DeliverySchema::Fbo];
    filter.statuses = vec![5];
    filter.title = Some("Mug".into());
    let shipment = GetShipmentReportParams::new(filter);
    let json = serde_json::to_string(&shipment).unwrap();
    assert_eq!(
        serde_json::from_str::<GetShipmentReportParams>(&json).unwrap(),
        shipment
    );
}

#[test]
fn test_report_status_values() {
    for (wire, status, pending) in [
        ("waiting", ReportStatus::Waiting, true),
        ("processing", ReportStatus::Processing, true),
        ("success", ReportStatus::Success, false),
        ("failed", ReportStatus::Failed, false),
        ("expired", ReportStatus::Unknown, false),
    ] {
        let parsed: ReportStatus = serde_json::from_value(json!(wire)).unwrap();
        assert_eq!(parsed, status);
        assert_eq!(parsed.is_pending(), pending);
        assert_eq!(parsed.is_finished(), !pending);
    }
}

#[test]
fn test_cash_flow_amounts_are_kept_apart() {
    let flow: CashFlow = serde_json::from_value(json!({
        "period": {"id": 1, "begin": "2023-01-01T00:00:00Z", "end": "2023-01-15T00:00:00Z"},
        "order_amount": 10.0,
        "returns_amount": 20.0,
        "commission_amount": 30.0,
        "services_amount": 40.0,
        "item_delivery_and_return_amount": 50.0,
        "currency_code": "KZT"
    }))
    .unwrap();

    assert_eq!(
        [
            flow.order_amount,
            flow.returns_amount,
            flow.commission_amount,
            flow.services_amount,
            flow.item_delivery_and_return_amount,
        ],
        [10.0, 20.0, 30.0, 40.0, 50.0]
    );
    assert_eq!(flow.currency_code, "KZT");
}

#[test]
fn test_reports_list_page_size_is_clamped() {
    assert_eq!(
        GetReportsListParams::new().with_page_size(5000).page_size,
        MAX_PAGE_SIZE
    );
    assert_eq!(GetReportsListParams::new().with_page_size(1000).page_size, 1000);
    assert_eq!(GetReportsListParams::new().with_page_size(250).page_size, 250);
    assert_eq!(GetReportsListParams::new().with_page_size(0).page_size, 1);
}

/// A report of a type added after this crate doesn't sink the whole page.
#[test]
fn test_report_list_keeps_reports_of_unknown_type() {
    let list: ReportList = serde_json::from_value(json!({
        "reports": [
            {"code": "a", "status": "success", "report_type": "SELLER_STOCK"},
            {"code": "b", "status": "archived", "report_type": "SELLER_PRODUCT_DISCOUNTED"}
        ],
        "total": 2
    }))
    .unwrap();

    assert_eq!(list.reports.len(), 2);
    assert_eq!(list.reports[0].report_type, Some(ReportType::SELLER_STOCK));
    assert_eq!(list.reports[1].report_type, Some(ReportType::UNKNOWN));
    assert_eq!(list.reports[1].status, ReportStatus::Unknown);
    assert!(list.reports[1].status.is_finished());
}

#[test]
fn test_null_collections_decode_as_empty() {
    let report: Report =
        serde_json::from_value(json!({"code": "a", "status": "success", "params": null}))
            .unwrap();
    assert!(report.params.is_empty());

    let list: ReportList = serde_json::from_value(json!({"reports": null, "total": 0})).unwrap();
    assert!(list.reports.is_empty());

    let statement: CashFlowStatement =
        serde_json::from_value(json!({"cash_flows": null, "page_count": 0})).unwrap();
    assert!(statement.cash_flows.is_empty());
}
