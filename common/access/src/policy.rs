use common_session::permissions::{
    MANAGE_PROMOTIONS, MANAGE_ROLE_PERMISSIONS, MANAGE_SETTINGS, VIEW_CUSTOMERS,
    VIEW_DELIVERY_PARTNERS, VIEW_ORDERS, VIEW_PAYMENTS, VIEW_PROMOTIONS, VIEW_SETTINGS,
    VIEW_SUPPORT_TICKETS, VIEW_VENDORS,
};

/// What a route demands of the session: nothing beyond authentication,
/// one specific permission, or any one of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement {
    Public,
    Permission(&'static str),
    AnyOf(&'static [&'static str]),
}

/// Static route table, defined once per deployment and never mutated.
/// Navigational screens (dashboard, audit log, support) are left
/// unmapped on purpose: unmapped paths default-permit.
pub const ROUTE_ACCESS: &[(&str, RouteRequirement)] = &[
    ("/dashboard", RouteRequirement::Public),
    ("/customers", RouteRequirement::Permission(VIEW_CUSTOMERS)),
    ("/vendors", RouteRequirement::Permission(VIEW_VENDORS)),
    (
        "/delivery-agents",
        RouteRequirement::Permission(VIEW_DELIVERY_PARTNERS),
    ),
    ("/orders", RouteRequirement::Permission(VIEW_ORDERS)),
    ("/payments", RouteRequirement::Permission(VIEW_PAYMENTS)),
    (
        "/promotions",
        RouteRequirement::AnyOf(&[VIEW_PROMOTIONS, MANAGE_PROMOTIONS]),
    ),
    ("/support", RouteRequirement::Permission(VIEW_SUPPORT_TICKETS)),
    (
        "/settings",
        RouteRequirement::AnyOf(&[VIEW_SETTINGS, MANAGE_SETTINGS]),
    ),
    (
        "/role-permissions",
        RouteRequirement::Permission(MANAGE_ROLE_PERMISSIONS),
    ),
];

pub fn requirement_for(path: &str) -> Option<RouteRequirement> {
    ROUTE_ACCESS
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, requirement)| *requirement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_routes_resolve() {
        assert_eq!(
            requirement_for("/vendors"),
            Some(RouteRequirement::Permission(VIEW_VENDORS))
        );
        assert_eq!(requirement_for("/dashboard"), Some(RouteRequirement::Public));
    }

    #[test]
    fn unmapped_routes_have_no_entry() {
        assert_eq!(requirement_for("/audit-log"), None);
        assert_eq!(requirement_for("/definitely-not-a-route"), None);
    }
}
