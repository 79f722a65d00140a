//! Shared enum types that map directly to Ozon API string values.
//!
//! Variant names use `SCREAMING_SNAKE_CASE` where the Ozon wire format does,
//! so we suppress the Rust naming convention lint.
#![allow(non_camel_case_types)]

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Report Type
// ---------------------------------------------------------------------------

/// Report category, used both as a list filter and on returned reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    /// All reports (list filter only).
    #[default]
    ALL,
    /// Products report.
    SELLER_PRODUCTS,
    /// Transactions report.
    SELLER_TRANSACTIONS,
    /// Product prices report.
    SELLER_PRODUCT_PRICES,
    /// Stocks report.
    SELLER_STOCK,
    /// Products movement report.
    SELLER_PRODUCT_MOVEMENT,
    /// Returns report.
    SELLER_RETURNS,
    /// Shipments report.
    SELLER_POSTINGS,
    /// Financial report.
    SELLER_FINANCE,
    /// Any report type this crate doesn't know about yet. Only meaningful
    /// on returned reports; the server rejects it as a list filter.
    #[serde(other)]
    UNKNOWN,
}

// ---------------------------------------------------------------------------
// Report Status
// ---------------------------------------------------------------------------

/// Generation status of a report.
///
/// `waiting` and `processing` both mean the report isn't ready yet. Any
/// other value decodes as [`ReportStatus::Unknown`], which counts as
/// finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Queued for generation.
    Waiting,
    /// Being generated.
    Processing,
    /// Generated; the file link is available.
    Success,
    /// Generation failed; see the report's error code.
    Failed,
    /// A status this crate doesn't know about yet.
    #[serde(other)]
    Unknown,
}

impl ReportStatus {
    /// `true` while the server is still working on the report.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Waiting | Self::Processing)
    }

    /// `true` once the report reached `success`, `failed`, or an unknown status.
    pub fn is_finished(self) -> bool {
        !self.is_pending()
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Language of the generated report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Account default language.
    #[default]
    DEFAULT,
    /// Russian.
    RU,
    /// English.
    EN,
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Product visibility filter for the products report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// All products.
    #[default]
    ALL,
    /// Products visible to customers.
    VISIBLE,
    /// Products hidden from customers.
    INVISIBLE,
    /// Products that are out of stock.
    EMPTY_STOCK,
    /// Products that haven't passed moderation.
    NOT_MODERATED,
    /// Products that passed moderation.
    MODERATED,
    /// Products hidden by the seller.
    DISABLED,
    /// Products with errors in their cards.
    STATE_FAILED,
    /// Products ready for supply.
    READY_TO_SUPPLY,
    /// Products awaiting validation.
    VALIDATION_STATE_PENDING,
    /// Products that failed validation.
    VALIDATION_STATE_FAIL,
    /// Products that passed validation.
    VALIDATION_STATE_SUCCESS,
    /// Products ready for sale.
    TO_SUPPLY,
    /// Products on sale.
    IN_SALE,
    /// Products removed from sale.
    REMOVED_FROM_SALE,
    /// Products blocked by Ozon.
    BANNED,
    /// Products with an overpriced price.
    OVERPRICED,
    /// Products with a critically overpriced price.
    CRITICALLY_OVERPRICED,
    /// Products without a barcode.
    EMPTY_BARCODE,
    /// Products with a barcode.
    BARCODE_EXISTS,
    /// Products in quarantine after a price change.
    QUARANTINE,
    /// Archived products.
    ARCHIVED,
    /// Overpriced products that still have stock.
    OVERPRICED_WITH_STOCK,
    /// Partially approved products.
    PARTIAL_APPROVED,
    /// Products without images.
    IMAGE_ABSENT,
    /// Products blocked during moderation.
    MODERATION_BLOCK,
}

// ---------------------------------------------------------------------------
// Delivery Schema
// ---------------------------------------------------------------------------

/// Order fulfilment scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliverySchema {
    /// Fulfilment by Ozon from its own warehouses.
    Fbo,
    /// Delivery from the seller's warehouse.
    #[default]
    Fbs,
}
