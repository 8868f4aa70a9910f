//! Purchased item representation
//!
//! This module provides data structures for one `transaction_detail`
//! entry of the feed: the product code, its selected options, and the
//! feed-specific date-or-string subscription fields.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date field that tolerates non-date text
///
/// The feed legitimately sends blank or sentinel strings for
/// non-subscription items, so a value that fails to parse against the
/// fixed date format is retained verbatim rather than rejected. Consumers
/// can pattern-match instead of re-parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemDate {
    /// The text parsed as a calendar date
    Date(NaiveDate),

    /// The raw text, kept unchanged
    Raw(String),
}

impl ItemDate {
    /// Parse feed text against the fixed item date format, falling back
    /// to the raw text on failure. The fallback is a designed tolerance,
    /// not an error path.
    pub fn from_feed_text(text: &str) -> Self {
        match NaiveDate::parse_from_str(text, super::formats::DATE) {
            Ok(date) => ItemDate::Date(date),
            Err(_) => ItemDate::Raw(text.to_string()),
        }
    }

    /// The parsed date, if the underlying text was one
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            ItemDate::Date(date) => Some(*date),
            ItemDate::Raw(_) => None,
        }
    }

    /// The raw text, if the underlying text was not a date
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ItemDate::Date(_) => None,
            ItemDate::Raw(text) => Some(text),
        }
    }

    /// Whether the underlying text parsed as a date
    pub fn is_date(&self) -> bool {
        matches!(self, ItemDate::Date(_))
    }
}

/// A purchased item within a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Vendor product code
    pub product_code: String,

    /// Subscription start date, or the raw text when not a date
    pub subscription_startdate: ItemDate,

    /// Next scheduled transaction date, or the raw text when not a date
    pub next_transaction_date: ItemDate,

    /// Selected product options, keyed by option name. Later entries with
    /// a repeated name overwrite earlier ones.
    pub options: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_date_parses() {
        let date = ItemDate::from_feed_text("2007-07-07");
        assert!(date.is_date());
        assert_eq!(
            date.as_date(),
            Some(NaiveDate::from_ymd_opt(2007, 7, 7).unwrap())
        );
        assert_eq!(date.as_raw(), None);
    }

    #[test]
    fn test_item_date_fallback() {
        for text in ["", "   ", "n/a", "2007-13-40", "07/07/2007"] {
            let date = ItemDate::from_feed_text(text);
            assert!(!date.is_date());
            assert_eq!(date.as_raw(), Some(text));
            assert_eq!(date.as_date(), None);
        }
    }
}
