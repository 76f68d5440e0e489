//! Core library for Dutch receipt processing.
//!
//! This crate provides:
//! - The receipt text interpretation engine (store, date, line items, totals)
//! - Heuristic extraction rules tolerant of OCR noise and uneven layouts
//! - Receipt data models and the injectable parser vocabulary
//! - Boundary types for the external text-recognition service

pub mod error;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{KassabonError, OcrError, Result};
pub use models::config::ParserConfig;
pub use models::receipt::{LineItem, ParsedReceipt};
pub use ocr::{RecognizedText, TextRecognizer};
pub use receipt::ReceiptParser;
