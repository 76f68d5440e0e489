//! Rule-based field extractors for receipt lines.

pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod stores;

pub use amounts::{bare_amount, first_amount, trailing_amount};
pub use dates::{find_date, format_short_date};
pub use stores::match_store;
