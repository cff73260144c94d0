//! Built-in WooCommerce merge tags.
//!
//! Replacement values are stand-ins sized like typical rendered values; they
//! are used only to estimate message length. An empty replacement counts the
//! tag literal itself.

use sms_model::MergeTag;

use crate::catalog::TagCatalog;

const BUILTIN_TAGS: &[(&str, &str, &str)] = &[
    ("[first_name]", "aabbccd", "Customer first name"),
    ("[last_name]", "aabbccdd", "Customer last name"),
    ("[shop_name]", "", "Shop name"),
    ("[order_id]", "", "Order number"),
    ("[order_total]", "$0000.00", "Order total"),
    ("[order_status]", "processing", "Order status"),
    ("[tracking_number]", "", "Shipment tracking number"),
    ("[url]", "link.au/abcdef", "Short link"),
    ("[unsubscribe]", "unsub.au/abcdef", "Unsubscribe link"),
];

/// The catalog shipped with the plugin.
pub fn builtin_catalog() -> TagCatalog {
    let tags = BUILTIN_TAGS
        .iter()
        .map(|(tag, replacement, label)| MergeTag::new(*tag, *replacement, *label))
        .collect();
    // The table above satisfies every catalog invariant.
    TagCatalog::new(tags).unwrap_or_else(|_| TagCatalog::empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_a_valid_catalog() {
        let tags: Vec<MergeTag> = BUILTIN_TAGS
            .iter()
            .map(|(tag, replacement, label)| MergeTag::new(*tag, *replacement, *label))
            .collect();
        let catalog = TagCatalog::new(tags).expect("builtin catalog");
        assert_eq!(catalog.len(), BUILTIN_TAGS.len());
    }

    #[test]
    fn builtin_widths() {
        let catalog = builtin_catalog();
        assert_eq!(
            catalog.get("[first_name]").map(MergeTag::effective_replacement),
            Some("aabbccd")
        );
        assert_eq!(
            catalog.get("[order_id]").map(MergeTag::effective_replacement),
            Some("[order_id]")
        );
        assert_eq!(
            catalog.get("[unsubscribe]").map(MergeTag::effective_replacement),
            Some("unsub.au/abcdef")
        );
    }
}
