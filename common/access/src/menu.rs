use crate::gate::AccessGate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar catalog in display order. Filtering happens per session via
/// `visible_entries`; the catalog itself never changes at runtime.
pub const MENU: &[MenuEntry] = &[
    MenuEntry { label: "Dashboard", path: "/dashboard" },
    MenuEntry { label: "Customers", path: "/customers" },
    MenuEntry { label: "Vendors", path: "/vendors" },
    MenuEntry { label: "Delivery Agents", path: "/delivery-agents" },
    MenuEntry { label: "Orders", path: "/orders" },
    MenuEntry { label: "Payments", path: "/payments" },
    MenuEntry { label: "Promotions", path: "/promotions" },
    MenuEntry { label: "Support", path: "/support" },
    MenuEntry { label: "Audit Log", path: "/audit-log" },
    MenuEntry { label: "Settings", path: "/settings" },
    MenuEntry { label: "Role Permissions", path: "/role-permissions" },
];

/// Navigation entries the current session may see. Empty while the
/// store is still rehydrating; callers show a waiting state instead.
pub fn visible_entries(gate: &AccessGate) -> Vec<&'static MenuEntry> {
    if !gate.is_ready() {
        return Vec::new();
    }
    MENU.iter()
        .filter(|entry| gate.can_access_route(entry.path))
        .collect()
}
