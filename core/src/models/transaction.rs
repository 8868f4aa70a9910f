//! Purchase transaction representation
//!
//! This module provides the data structure for one `transaction` record
//! of the feed, holding its items and custom fields.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::item::Item;

/// A single purchase transaction decoded from the feed
///
/// Owned exclusively by the `Feed` that produced it and discarded with
/// it; nothing here outlives one decode call unless the caller copies
/// values out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Vendor-assigned transaction id. Unique per feed instance, but
    /// uniqueness is not validated here; duplicate detection is a
    /// collaborator's job.
    pub id: String,

    /// Transaction timestamp. Required; the feed is malformed without it.
    pub date: NaiveDateTime,

    /// Customer id. May be empty for guest orders.
    pub customer_id: String,

    /// Purchased items, in document order. Always present, possibly empty.
    pub items: Vec<Item>,

    /// Open-ended name/value pairs attached by the store configuration.
    /// Keys are unique within a transaction; later entries with a repeated
    /// name overwrite earlier ones.
    pub custom_fields: HashMap<String, String>,
}
