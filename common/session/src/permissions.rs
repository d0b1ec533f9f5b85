use std::collections::BTreeSet;

use crate::roles::{
    canonical_token, ROLE_ADMIN, ROLE_DELIVERY_PARTNER, ROLE_SUB_ADMIN, ROLE_VENDOR,
};

pub const VIEW_CUSTOMERS: &str = "view_customers";
pub const MANAGE_CUSTOMERS: &str = "manage_customers";
pub const VIEW_VENDORS: &str = "view_vendors";
pub const MANAGE_VENDORS: &str = "manage_vendors";
pub const VIEW_DELIVERY_PARTNERS: &str = "view_delivery_partners";
pub const MANAGE_DELIVERY_PARTNERS: &str = "manage_delivery_partners";
pub const VIEW_ORDERS: &str = "view_orders";
pub const MANAGE_ORDERS: &str = "manage_orders";
pub const VIEW_PAYMENTS: &str = "view_payments";
pub const MANAGE_PAYMENTS: &str = "manage_payments";
pub const VIEW_PROMOTIONS: &str = "view_promotions";
pub const MANAGE_PROMOTIONS: &str = "manage_promotions";
pub const VIEW_SUPPORT_TICKETS: &str = "view_support_tickets";
pub const MANAGE_SUPPORT_TICKETS: &str = "manage_support_tickets";
pub const VIEW_SETTINGS: &str = "view_settings";
pub const MANAGE_SETTINGS: &str = "manage_settings";
pub const MANAGE_ROLE_PERMISSIONS: &str = "manage_role_permissions";

/// Per-role default permission sets, applied when the backend supplies
/// no explicit permission list. `SUPER_ADMIN` is absent on purpose (the
/// override makes defaults moot) and `CUSTOMER` has none configured.
const ROLE_DEFAULTS: &[(&str, &[&str])] = &[
    (
        ROLE_ADMIN,
        &[
            VIEW_CUSTOMERS,
            MANAGE_CUSTOMERS,
            VIEW_VENDORS,
            MANAGE_VENDORS,
            VIEW_DELIVERY_PARTNERS,
            MANAGE_DELIVERY_PARTNERS,
            VIEW_ORDERS,
            MANAGE_ORDERS,
            VIEW_PAYMENTS,
            VIEW_PROMOTIONS,
            MANAGE_PROMOTIONS,
            VIEW_SUPPORT_TICKETS,
            MANAGE_SUPPORT_TICKETS,
            VIEW_SETTINGS,
        ],
    ),
    (
        ROLE_SUB_ADMIN,
        &[
            VIEW_CUSTOMERS,
            VIEW_VENDORS,
            VIEW_DELIVERY_PARTNERS,
            VIEW_ORDERS,
            VIEW_PAYMENTS,
            VIEW_PROMOTIONS,
            VIEW_SUPPORT_TICKETS,
        ],
    ),
    (
        ROLE_VENDOR,
        &[VIEW_ORDERS, VIEW_PAYMENTS, VIEW_PROMOTIONS, MANAGE_PROMOTIONS],
    ),
    (ROLE_DELIVERY_PARTNER, &[VIEW_ORDERS]),
];

/// Default permission list for a role token, if one is configured.
pub fn default_permissions(role: &str) -> Option<&'static [&'static str]> {
    ROLE_DEFAULTS
        .iter()
        .find(|(key, _)| *key == role)
        .map(|(_, permissions)| *permissions)
}

/// Derive the effective permission set.
///
/// A non-empty server-supplied list wins verbatim (deduplicated).
/// Otherwise each role contributes its configured defaults; the lookup
/// tries the exact token first and then its canonical form, covering
/// records persisted before tokens were canonicalized. Roles without
/// defaults contribute nothing.
pub fn resolve(server_permissions: Option<&[String]>, roles: &[String]) -> BTreeSet<String> {
    if let Some(list) = server_permissions {
        if !list.is_empty() {
            return list.iter().cloned().collect();
        }
    }

    let mut effective = BTreeSet::new();
    for role in roles {
        let defaults =
            default_permissions(role).or_else(|| default_permissions(&canonical_token(role)));
        if let Some(defaults) = defaults {
            effective.extend(defaults.iter().map(|permission| (*permission).to_string()));
        }
    }
    effective
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| (*token).to_string()).collect()
    }

    #[test]
    fn server_permissions_win_verbatim_and_dedupe() {
        let server = owned(&[VIEW_ORDERS, VIEW_ORDERS, MANAGE_SETTINGS]);
        let resolved = resolve(Some(&server), &owned(&[ROLE_ADMIN]));
        assert_eq!(resolved.len(), 2);
        assert!(resolved.contains(VIEW_ORDERS));
        assert!(resolved.contains(MANAGE_SETTINGS));
        assert!(!resolved.contains(VIEW_CUSTOMERS));
    }

    #[test]
    fn empty_server_list_falls_back_to_role_defaults() {
        let resolved = resolve(Some(&[]), &owned(&[ROLE_ADMIN]));
        assert!(resolved.contains(VIEW_ORDERS));
        assert!(resolved.contains(VIEW_VENDORS));
        assert!(!resolved.contains(MANAGE_ROLE_PERMISSIONS));
    }

    #[test]
    fn defaults_union_across_roles() {
        let resolved = resolve(None, &owned(&[ROLE_VENDOR, ROLE_DELIVERY_PARTNER]));
        let expected: BTreeSet<String> = owned(&[
            VIEW_ORDERS,
            VIEW_PAYMENTS,
            VIEW_PROMOTIONS,
            MANAGE_PROMOTIONS,
        ])
        .into_iter()
        .collect();
        assert_eq!(resolved, expected);
    }

    #[test]
    fn role_without_defaults_contributes_nothing() {
        let resolved = resolve(None, &owned(&["CUSTOMER", "UNKNOWN_ROLE"]));
        assert!(resolved.is_empty());
    }

    #[test]
    fn lookup_falls_back_to_canonical_form() {
        let resolved = resolve(None, &owned(&["admin"]));
        assert_eq!(
            resolved,
            resolve(None, &owned(&[ROLE_ADMIN])),
            "legacy lowercase key resolves through canonicalization"
        );
    }
}
