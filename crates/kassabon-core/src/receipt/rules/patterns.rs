//! Common regex patterns for receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Day-month-year date with 1-2 digit day/month and 2- or 4-digit year.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(\d{1,2})[-/](\d{1,2})[-/](\d{2,4})"
    ).unwrap();

    /// First currency amount anywhere in a line. The euro sign is optional
    /// and ignored; comma and dot both act as the decimal separator.
    pub static ref AMOUNT: Regex = Regex::new(
        r"€?\s*(\d+)[,.](\d{2})"
    ).unwrap();

    /// Currency amount at the end of a line; the text before it is the
    /// item-name candidate.
    pub static ref AMOUNT_AT_EOL: Regex = Regex::new(
        r"€?\s*(\d+)[,.](\d{2})\s*$"
    ).unwrap();

    /// A line that is nothing but a currency amount.
    pub static ref BARE_AMOUNT: Regex = Regex::new(
        r"^€?\s*(\d+)[,.](\d{2})\s*$"
    ).unwrap();
}
