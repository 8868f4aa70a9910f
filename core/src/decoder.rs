//! Structured extractor for the datafeed markup
//!
//! This module walks the decrypted markup tree and materializes the
//! transaction/item/custom-field domain model. Selection is by tag name
//! at any depth, mirroring the vendor's documented feed shape: the
//! decoder is tolerant of wrapper elements and only hard-fails on
//! unparseable markup or a missing required field.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use roxmltree::{Document, Node};

use crate::error::{to_malformed_error, FeedError, Result};
use crate::models::{formats, Feed, Item, ItemDate, Transaction};

/// Decode plaintext markup into a feed
///
/// Every element named `transaction` at any depth becomes one
/// `Transaction`, in document order. A document with zero transaction
/// elements decodes to a valid empty feed.
pub fn parse(markup: &str) -> Result<Feed> {
    let doc = Document::parse(markup).map_err(to_malformed_error)?;

    let mut transactions = Vec::new();
    for node in doc
        .descendants()
        .filter(|n| n.has_tag_name("transaction"))
    {
        transactions.push(decode_transaction(node)?);
    }

    Ok(Feed { transactions })
}

/// Text of the first descendant element with the given tag name
///
/// A missing or childless tag yields the empty string, as does
/// whitespace-only content.
fn scalar_text(node: Node<'_, '_>, tag: &str) -> String {
    node.descendants()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or("")
        .to_string()
}

/// Like `scalar_text`, but an absent or empty value is a hard error
fn required_text(node: Node<'_, '_>, tag: &str) -> Result<String> {
    let text = scalar_text(node, tag);
    if text.is_empty() {
        return Err(FeedError::MissingField(tag.to_string()));
    }
    Ok(text)
}

fn decode_transaction(node: Node<'_, '_>) -> Result<Transaction> {
    let id = required_text(node, "id")?;

    let date_text = required_text(node, "transaction_date")?;
    let date = NaiveDateTime::parse_from_str(&date_text, formats::DATETIME).map_err(|_| {
        FeedError::MissingField(format!(
            "transaction_date: unparsable value '{}'",
            date_text
        ))
    })?;

    let customer_id = scalar_text(node, "customer_id");

    let mut custom_fields = HashMap::new();
    for field in node
        .descendants()
        .filter(|n| n.has_tag_name("custom_field"))
    {
        custom_fields.insert(
            scalar_text(field, "custom_field_name"),
            scalar_text(field, "custom_field_value"),
        );
    }

    let mut items = Vec::new();
    for detail in node
        .descendants()
        .filter(|n| n.has_tag_name("transaction_detail"))
    {
        items.push(decode_item(detail));
    }

    Ok(Transaction {
        id,
        date,
        customer_id,
        items,
        custom_fields,
    })
}

fn decode_item(node: Node<'_, '_>) -> Item {
    let mut options = HashMap::new();
    for option in node
        .descendants()
        .filter(|n| n.has_tag_name("transaction_detail_option"))
    {
        options.insert(
            scalar_text(option, "product_option_name"),
            scalar_text(option, "product_option_value"),
        );
    }

    Item {
        product_code: scalar_text(node, "product_code"),
        subscription_startdate: ItemDate::from_feed_text(&scalar_text(
            node,
            "subscription_startdate",
        )),
        next_transaction_date: ItemDate::from_feed_text(&scalar_text(
            node,
            "next_transaction_date",
        )),
        options,
    }
}
