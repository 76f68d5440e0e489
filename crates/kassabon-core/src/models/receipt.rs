//! Receipt data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchased product and its price, as printed on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product description, taken verbatim from the receipt line.
    pub name: String,

    /// Line price in euros.
    pub price: Decimal,
}

/// A structured receipt extracted from OCR text.
///
/// Every field is populated even when extraction finds nothing, so the
/// record can be fed straight into a reply template without null checks.
/// Callers that need to tell a real receipt from an empty parse should
/// check for items or a non-zero total themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReceipt {
    /// Retailer name, or the configured default when no known brand matched.
    pub store: String,

    /// Receipt date as printed, or today in Dutch short format (d-m-yyyy).
    pub date: String,

    /// Line items in text order. No de-duplication or merging.
    pub items: Vec<LineItem>,

    /// Sum of item prices when items were found, zero otherwise.
    pub subtotal: Decimal,

    /// Discount amount; never negative.
    pub discount: Decimal,

    /// Printed total, or `subtotal - discount` when no total line matched.
    pub total: Decimal,
}
