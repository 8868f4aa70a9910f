//! Catalog of vendor API commands
//!
//! This module provides the static table of named remote commands the
//! vendor API accepts, each with its required and optional argument
//! lists, plus the membership checks the transport validates against
//! before issuing a request.

use std::collections::HashMap;

use crate::api::{ClientError, Result};

/// One argument a command accepts
#[derive(Debug, Clone, Copy)]
pub struct ApiArg {
    /// Argument name as the API expects it
    pub name: &'static str,

    /// Usage note shown in the CLI help
    pub info: &'static str,
}

/// One named remote command
#[derive(Debug, Clone, Copy)]
pub struct ApiCommand {
    /// Command name, sent as the api_action
    pub name: &'static str,

    /// Usage note shown in the CLI help
    pub help: &'static str,

    /// Arguments that must be supplied
    pub required_arguments: &'static [ApiArg],

    /// Arguments that may be supplied
    pub optional_arguments: &'static [ApiArg],
}

impl ApiCommand {
    /// Whether the command accepts an argument with this name, required
    /// or optional
    pub fn accepts_argument(&self, name: &str) -> bool {
        self.required_arguments
            .iter()
            .chain(self.optional_arguments)
            .any(|a| a.name == name)
    }

    /// Validate supplied arguments against this command
    ///
    /// All required arguments must be present and no unknown names are
    /// accepted.
    pub fn validate_arguments(&self, args: &HashMap<String, String>) -> Result<()> {
        for required in self.required_arguments {
            if !args.contains_key(required.name) {
                return Err(ClientError::MissingArgument(required.name.to_string()));
            }
        }
        for name in args.keys() {
            if !self.accepts_argument(name) {
                return Err(ClientError::UnknownArgument(name.clone()));
            }
        }
        Ok(())
    }
}

/// Look up a command by name
pub fn find_command(name: &str) -> Option<&'static ApiCommand> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// The vendor API command catalog (API v0.7.2)
pub const COMMANDS: &[ApiCommand] = &[
    // Store methods
    ApiCommand {
        name: "store_template_cache",
        help: "Cache a store template from its URL. On success the store's \
               template and the corresponding URL are updated.",
        required_arguments: &[ApiArg {
            name: "template_type",
            info: "Accepts cart, checkout, receipt, html_email, email",
        }],
        optional_arguments: &[
            ApiArg {
                name: "template_url",
                info: "A complete, well-formed URL. If omitted, the URL already \
                       stored for the template_type is used.",
            },
            ApiArg {
                name: "email_subject",
                info: "Subject line for email receipts. Only valid for html_email \
                       or email template types.",
            },
            ApiArg {
                name: "send_html_email",
                info: "Accepts 1 or 0. 0 sends text-only receipts, 1 sends both \
                       text and html.",
            },
        ],
    },
    ApiCommand {
        name: "store_includes_get",
        help: "Returns the javascript and CSS includes for the store. Cache the \
               result locally rather than calling this per pageload.",
        required_arguments: &[],
        optional_arguments: &[
            ApiArg {
                name: "javascript_library",
                info: "Accepts none and jquery.",
            },
            ApiArg {
                name: "cart_type",
                info: "Accepts none, colorbox.",
            },
        ],
    },
    ApiCommand {
        name: "attribute_save",
        help: "Attach name/value pairs to customer, transaction, or subscription \
               records for later filtering.",
        required_arguments: &[
            ApiArg { name: "name", info: "" },
            ApiArg { name: "value", info: "" },
            ApiArg {
                name: "type",
                info: "Accepts transaction, customer, subscription",
            },
            ApiArg {
                name: "identifier",
                info: "A valid transaction_id, customer_id, sub_token or \
                       sub_token_url depending on the type",
            },
        ],
        optional_arguments: &[ApiArg {
            name: "append",
            info: "Accepts 0 (default), 1. If 1, the value is appended to any \
                   matched name attribute instead of replacing it.",
        }],
    },
    ApiCommand {
        name: "attribute_list",
        help: "",
        required_arguments: &[
            ApiArg {
                name: "type",
                info: "Accepts transaction, customer, subscription",
            },
            ApiArg {
                name: "identifier",
                info: "A valid transaction_id, customer_id, sub_token or \
                       sub_token_url depending on the type",
            },
        ],
        optional_arguments: &[],
    },
    ApiCommand {
        name: "attribute_delete",
        help: "Deletes the specified attribute.",
        required_arguments: &[
            ApiArg {
                name: "type",
                info: "Accepts transaction, customer, subscription",
            },
            ApiArg {
                name: "identifier",
                info: "A valid transaction_id, customer_id, sub_token or \
                       sub_token_url depending on the type",
            },
        ],
        optional_arguments: &[
            ApiArg {
                name: "name",
                info: "Delete all values for this name. If omitted, all is \
                       required.",
            },
            ApiArg {
                name: "all",
                info: "Accepts 0 (default), 1. If 1, every attribute on the \
                       record is removed and takes precedence over name.",
            },
        ],
    },
    ApiCommand {
        name: "category_list",
        help: "Returns id, code, description, and product_delivery_type for all \
               categories.",
        required_arguments: &[],
        optional_arguments: &[],
    },
    ApiCommand {
        name: "downloadable_list",
        help: "Returns id, category_id, category_code, product_name, \
               product_code, product_price, file_size, and upload_date for all \
               downloadables.",
        required_arguments: &[],
        optional_arguments: &[],
    },
    // Customer methods
    ApiCommand {
        name: "customer_get",
        help: "Requires either customer_id or customer_email. Cannot retrieve \
               guest customer accounts.",
        required_arguments: &[],
        optional_arguments: &[
            ApiArg { name: "customer_id", info: "" },
            ApiArg { name: "customer_email", info: "" },
        ],
    },
    ApiCommand {
        name: "customer_save",
        help: "Requires either customer_id or customer_email. A password (or \
               password hash) is required when creating a new record. \
               customer_country must be a valid 2 character ISO country code \
               and falls back to the store's country.",
        required_arguments: &[],
        optional_arguments: &[
            ApiArg { name: "customer_id", info: "" },
            ApiArg { name: "customer_email", info: "" },
            ApiArg { name: "customer_password", info: "" },
            ApiArg { name: "customer_password_hash", info: "" },
            ApiArg { name: "customer_password_salt", info: "" },
            ApiArg { name: "customer_country", info: "" },
        ],
    },
    ApiCommand {
        name: "customer_list",
        help: "Use an asterisk (*) when filtering to do partial matches.",
        required_arguments: &[],
        optional_arguments: &[
            ApiArg { name: "customer_id_filter", info: "" },
            ApiArg { name: "customer_email_filter", info: "" },
            ApiArg { name: "customer_first_name_filter", info: "" },
            ApiArg { name: "customer_last_name_filter", info: "" },
            ApiArg { name: "customer_state_filter", info: "" },
        ],
    },
    ApiCommand {
        name: "customer_address_get",
        help: "Only applicable for stores using multi-ship. Requires customer_id \
               or customer_email.",
        required_arguments: &[],
        optional_arguments: &[
            ApiArg { name: "customer_id", info: "" },
            ApiArg { name: "customer_email", info: "" },
        ],
    },
    ApiCommand {
        name: "customer_address_save",
        help: "Only applicable for stores using multi-ship. Requires customer_id \
               or customer_email.",
        required_arguments: &[],
        optional_arguments: &[
            ApiArg { name: "customer_id", info: "" },
            ApiArg { name: "customer_email", info: "" },
        ],
    },
    // Transaction methods
    ApiCommand {
        name: "transaction_get",
        help: "",
        required_arguments: &[ApiArg { name: "transaction_id", info: "" }],
        optional_arguments: &[],
    },
    ApiCommand {
        name: "transaction_list",
        help: "Use an asterisk (*) when filtering to do partial matches.",
        required_arguments: &[],
        optional_arguments: &[
            ApiArg { name: "transaction_date_filter_begin", info: "(YYYY-MM-DD)" },
            ApiArg { name: "transaction_date_filter_end", info: "(YYYY-MM-DD)" },
            ApiArg { name: "is_test_filter", info: "(0 or 1)" },
            ApiArg { name: "hide_transaction_filter", info: "(0 or 1)" },
            ApiArg { name: "data_is_fed_filter", info: "(0 or 1)" },
            ApiArg { name: "id_filter", info: "" },
            ApiArg { name: "order_total_filter", info: "" },
            ApiArg { name: "coupon_code_filter", info: "" },
            ApiArg { name: "customer_id_filter", info: "" },
            ApiArg { name: "customer_email_filter", info: "" },
            ApiArg { name: "customer_first_name_filter", info: "" },
            ApiArg { name: "customer_last_name_filter", info: "" },
            ApiArg { name: "customer_state_filter", info: "" },
            ApiArg { name: "shipping_state_filter", info: "" },
            ApiArg { name: "customer_ip_filter", info: "" },
            ApiArg { name: "product_code_filter", info: "" },
            ApiArg { name: "product_name_filter", info: "" },
            ApiArg { name: "product_option_name_filter", info: "" },
            ApiArg { name: "product_option_value_filter", info: "" },
            ApiArg {
                name: "custom_field_name_filter",
                info: "Filter on transaction (not product) custom fields.",
            },
            ApiArg {
                name: "custom_field_value_filter",
                info: "Filter on transaction (not product) custom fields.",
            },
        ],
    },
    ApiCommand {
        name: "transaction_modify",
        help: "Changing these bits has no impact on anything other than their \
               values; it does not trigger a datafeed refeed.",
        required_arguments: &[],
        optional_arguments: &[
            ApiArg { name: "data_is_fed", info: "(0 or 1)" },
            ApiArg { name: "hide_transaction", info: "(0 or 1)" },
        ],
    },
    ApiCommand {
        name: "transaction_datafeed",
        help: "Triggers a refeed of the transaction datafeed for the specified \
               transaction.",
        required_arguments: &[ApiArg { name: "transaction_id", info: "" }],
        optional_arguments: &[],
    },
    // Subscription methods
    ApiCommand {
        name: "subscription_get",
        help: "",
        required_arguments: &[ApiArg {
            name: "sub_token",
            info: "Either the token by itself or the complete sub_token URL",
        }],
        optional_arguments: &[],
    },
    ApiCommand {
        name: "subscription_cancel",
        help: "Sets the sub_enddate to the next day, effectively canceling the \
               subscription while keeping it in the subscription datafeed. Use \
               subscription_modify to deactivate immediately.",
        required_arguments: &[ApiArg {
            name: "sub_token",
            info: "Either the token by itself or the complete sub_token URL",
        }],
        optional_arguments: &[],
    },
    ApiCommand {
        name: "subscription_modify",
        help: "",
        required_arguments: &[ApiArg {
            name: "sub_token",
            info: "Either the token by itself or the complete sub_token URL",
        }],
        optional_arguments: &[
            ApiArg {
                name: "start_date",
                info: "(YYYY-MM-DD) The very first date the subscription \
                       processed.",
            },
            ApiArg { name: "end_date", info: "(YYYY-MM-DD)" },
            ApiArg {
                name: "next_transaction_date",
                info: "(YYYY-MM-DD) Reset with every subscription processing, \
                       successful or erroring.",
            },
            ApiArg { name: "frequency", info: "" },
            ApiArg { name: "past_due_amount", info: "decimal" },
            ApiArg { name: "is_active", info: "(0, 1)" },
            ApiArg { name: "transaction_template", info: "" },
        ],
    },
    ApiCommand {
        name: "subscription_list",
        help: "Use an asterisk (*) when filtering to do partial matches.",
        required_arguments: &[],
        optional_arguments: &[
            ApiArg { name: "is_active_filter", info: "" },
            ApiArg { name: "frequency_filter", info: "" },
            ApiArg {
                name: "past_due_amount_filter",
                info: "Returns subscriptions with past due amounts greater than 0.",
            },
            ApiArg { name: "start_date_filter_begin", info: "(YYYY-MM-DD)" },
            ApiArg { name: "start_date_filter_end", info: "(YYYY-MM-DD)" },
            ApiArg { name: "next_transaction_date_filter_begin", info: "(YYYY-MM-DD)" },
            ApiArg { name: "next_transaction_date_filter_end", info: "(YYYY-MM-DD)" },
            ApiArg { name: "end_date_filter_begin", info: "(YYYY-MM-DD)" },
            ApiArg { name: "end_date_filter_end", info: "(YYYY-MM-DD)" },
            ApiArg {
                name: "paypal_profile_id_filter",
                info: "Pass \"all\" to view every subscription with a PayPal \
                       profile id.",
            },
            ApiArg { name: "last_transaction_id_filter", info: "" },
            ApiArg { name: "customer_id_filter", info: "" },
            ApiArg { name: "customer_email_filter", info: "" },
            ApiArg { name: "customer_first_name_filter", info: "" },
            ApiArg { name: "customer_last_name_filter", info: "" },
            ApiArg { name: "product_code_filter", info: "" },
            ApiArg { name: "product_name_filter", info: "" },
            ApiArg { name: "product_option_name_filter", info: "" },
            ApiArg { name: "product_option_value_filter", info: "" },
            ApiArg {
                name: "custom_field_name_filter",
                info: "Filter on the subscription's transaction custom fields.",
            },
            ApiArg {
                name: "custom_field_value_filter",
                info: "Filter on the subscription's transaction custom fields.",
            },
        ],
    },
    ApiCommand {
        name: "subscription_datafeed",
        help: "Immediately re-feeds the subscription datafeed to the configured \
               endpoint.",
        required_arguments: &[],
        optional_arguments: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command() {
        assert!(find_command("transaction_get").is_some());
        assert!(find_command("category_list").is_some());
        assert!(find_command("no_such_command").is_none());
    }

    #[test]
    fn test_accepts_argument() {
        let cmd = find_command("attribute_save").unwrap();
        assert!(cmd.accepts_argument("name"));
        assert!(cmd.accepts_argument("append"));
        assert!(!cmd.accepts_argument("bogus"));
    }

    #[test]
    fn test_validate_requires_mandatory_arguments() {
        let cmd = find_command("transaction_get").unwrap();

        let err = cmd.validate_arguments(&HashMap::new()).unwrap_err();
        match err {
            ClientError::MissingArgument(name) => assert_eq!(name, "transaction_id"),
            _ => panic!("Expected MissingArgument variant"),
        }

        let args = HashMap::from([("transaction_id".to_string(), "616".to_string())]);
        assert!(cmd.validate_arguments(&args).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_arguments() {
        let cmd = find_command("category_list").unwrap();

        let args = HashMap::from([("bogus".to_string(), "1".to_string())]);
        let err = cmd.validate_arguments(&args).unwrap_err();
        match err {
            ClientError::UnknownArgument(name) => assert_eq!(name, "bogus"),
            _ => panic!("Expected UnknownArgument variant"),
        }
    }

    #[test]
    fn test_optional_arguments_pass_validation() {
        let cmd = find_command("customer_list").unwrap();
        let args = HashMap::from([(
            "customer_email_filter".to_string(),
            "*@example.com".to_string(),
        )]);
        assert!(cmd.validate_arguments(&args).is_ok());
    }
}
