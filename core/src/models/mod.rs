//! Data models for the decoded datafeed
//!
//! This module provides data structures for representing one decoded
//! datafeed payload: the feed root, its transactions, purchased items
//! and open-ended custom fields.

mod feed;
mod item;
mod transaction;

pub use feed::Feed;
pub use item::{Item, ItemDate};
pub use transaction::Transaction;

/// Fixed date formats used by the vendor feed
pub mod formats {
    /// Format of a transaction timestamp
    pub const DATETIME: &str = "%Y-%m-%d %H:%M:%S";

    /// Format of item-level subscription dates
    pub const DATE: &str = "%Y-%m-%d";
}
