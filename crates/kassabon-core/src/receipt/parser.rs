//! Heuristic receipt text parser.

use chrono::{Local, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::config::ParserConfig;
use crate::models::receipt::{LineItem, ParsedReceipt};

use super::rules::{amounts, dates, stores};

/// Leading lines skipped unconditionally as header boilerplate.
const HEADER_LINES: usize = 3;

/// An item name must be longer than this many characters.
const MIN_NAME_CHARS: usize = 2;

/// Per-line classification, evaluated in priority order.
///
/// Exactly one class applies per line; once a rule matches, later rules are
/// not tried.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineClass<'a> {
    /// Header boilerplate or known noise; never an item, date, or total.
    Noise,
    /// A line carrying the receipt date (raw printed substring).
    Date(&'a str),
    /// A total-keyword line, with its first amount if one parsed.
    Total(Option<Decimal>),
    /// A discount-keyword line, with its first amount if one parsed.
    Discount(Option<Decimal>),
    /// Anything else: a line-item candidate.
    Candidate,
}

/// Heuristic parser turning raw OCR text into a [`ParsedReceipt`].
///
/// The parser is total: it returns a fully populated receipt for every
/// input, falling back to defaults when nothing matches. It holds only
/// immutable configuration, so one instance can serve any number of
/// concurrent calls.
pub struct ReceiptParser {
    config: ParserConfig,
    header_noise: Regex,
    total_marker: Regex,
    discount_marker: Regex,
}

impl ReceiptParser {
    /// Create a parser with the default Dutch vocabulary.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with a custom vocabulary.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            header_noise: keyword_regex(&config.header_keywords),
            total_marker: keyword_regex(&config.total_keywords),
            discount_marker: keyword_regex(&config.discount_keywords),
            config,
        }
    }

    /// Parse raw OCR text into a structured receipt.
    pub fn parse(&self, text: &str) -> ParsedReceipt {
        self.parse_at(text, Local::now().date_naive())
    }

    fn parse_at(&self, text: &str, today: NaiveDate) -> ParsedReceipt {
        let mut receipt = ParsedReceipt {
            store: String::new(),
            date: dates::format_short_date(today),
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
        };

        // Stage 1: retailer scan over the full text, header lines included.
        if let Some(store) = stores::match_store(text, &self.config.stores) {
            debug!(store, "retailer matched");
            receipt.store = store.to_string();
        }

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        // Stage 2: classification loop with one line of lookahead. The
        // explicit cursor lets the split-line strategy consume the amount
        // line that follows an item name.
        let mut idx = 0;
        while idx < lines.len() {
            let line = lines[idx];
            match self.classify(idx, line) {
                LineClass::Noise => {}
                LineClass::Date(raw) => {
                    debug!(date = raw, "date line");
                    receipt.date = raw.to_string();
                }
                LineClass::Total(amount) => {
                    // A keyword line without a parsable amount leaves the
                    // total unchanged.
                    if let Some(total) = amount {
                        debug!(%total, "total line");
                        receipt.total = total;
                    }
                }
                LineClass::Discount(amount) => {
                    if let Some(discount) = amount {
                        debug!(%discount, "discount line");
                        receipt.discount = discount;
                    }
                }
                LineClass::Candidate => {
                    if let Some(item) = self.same_line_item(line) {
                        debug!(name = %item.name, price = %item.price, "item");
                        receipt.items.push(item);
                    } else if let Some(next) = lines.get(idx + 1) {
                        if let Some(item) = self.split_line_item(line, next) {
                            debug!(name = %item.name, price = %item.price, "split-line item");
                            receipt.items.push(item);
                            idx += 1;
                        }
                    }
                }
            }
            idx += 1;
        }

        // Stage 3: reconciliation, filling gaps from derived values.
        if !receipt.items.is_empty() {
            receipt.subtotal = receipt.items.iter().map(|item| item.price).sum();
        }
        if receipt.store.is_empty() {
            receipt.store = self.config.default_store.clone();
        }
        if receipt.total.is_zero() && receipt.subtotal > Decimal::ZERO {
            // Intentionally unclamped: a discount larger than the item sum
            // leaves a negative total.
            receipt.total = receipt.subtotal - receipt.discount;
        }

        debug!(
            store = %receipt.store,
            items = receipt.items.len(),
            total = %receipt.total,
            "receipt parsed"
        );
        receipt
    }

    /// Classify one line. Rules are tried top to bottom; the first that
    /// matches decides.
    fn classify<'a>(&self, index: usize, line: &'a str) -> LineClass<'a> {
        if index < HEADER_LINES || self.header_noise.is_match(line) {
            return LineClass::Noise;
        }
        if let Some(raw) = dates::find_date(line) {
            return LineClass::Date(raw);
        }
        if self.total_marker.is_match(line) {
            return LineClass::Total(amounts::first_amount(line));
        }
        if self.discount_marker.is_match(line) {
            return LineClass::Discount(amounts::first_amount(line));
        }
        LineClass::Candidate
    }

    /// Same-line strategy: the line ends with an amount and everything
    /// before it is the name.
    fn same_line_item(&self, line: &str) -> Option<LineItem> {
        let (price, name_end) = amounts::trailing_amount(line)?;
        let name = line[..name_end].trim();
        if name.chars().count() <= MIN_NAME_CHARS || !self.price_in_range(price) {
            return None;
        }
        Some(LineItem {
            name: name.to_string(),
            price,
        })
    }

    /// Split-line fallback: a digit-free name line followed by a bare
    /// amount line.
    fn split_line_item(&self, line: &str, next: &str) -> Option<LineItem> {
        let price = amounts::bare_amount(next)?;
        if line.chars().count() <= MIN_NAME_CHARS
            || line.chars().any(|c| c.is_ascii_digit())
            || !self.price_in_range(price)
        {
            return None;
        }
        Some(LineItem {
            name: line.to_string(),
            price,
        })
    }

    fn price_in_range(&self, price: Decimal) -> bool {
        price > Decimal::ZERO && price < self.config.max_item_price
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile a keyword list into a case-insensitive alternation. An empty
/// list yields a pattern that matches nothing.
fn keyword_regex(keywords: &[String]) -> Regex {
    if keywords.is_empty() {
        return Regex::new(r"[^\s\S]").unwrap();
    }
    let alternation: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    Regex::new(&format!("(?i){}", alternation.join("|"))).unwrap()
}
