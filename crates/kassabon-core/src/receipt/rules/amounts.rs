//! Currency amount extraction for receipt lines.

use std::str::FromStr;

use regex::Captures;
use rust_decimal::Decimal;

use super::patterns::{AMOUNT, AMOUNT_AT_EOL, BARE_AMOUNT};

/// Build the amount from the integer and two-digit fraction captures.
fn amount_from(caps: &Captures) -> Option<Decimal> {
    Decimal::from_str(&format!("{}.{}", &caps[1], &caps[2])).ok()
}

/// First currency amount anywhere in the line.
pub fn first_amount(line: &str) -> Option<Decimal> {
    AMOUNT.captures(line).and_then(|caps| amount_from(&caps))
}

/// Currency amount at the end of the line, with the byte offset where the
/// match (including any currency sign) starts. The text before the offset
/// is the item-name candidate.
pub fn trailing_amount(line: &str) -> Option<(Decimal, usize)> {
    let caps = AMOUNT_AT_EOL.captures(line)?;
    let start = caps.get(0).unwrap().start();
    amount_from(&caps).map(|amount| (amount, start))
}

/// Amount for a line that is nothing but a currency amount.
pub fn bare_amount(line: &str) -> Option<Decimal> {
    BARE_AMOUNT.captures(line).and_then(|caps| amount_from(&caps))
}
