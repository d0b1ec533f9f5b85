pub mod gate;
pub mod menu;
pub mod policy;

pub use gate::{AccessDecision, AccessGate};
pub use menu::{visible_entries, MenuEntry, MENU};
pub use policy::{requirement_for, RouteRequirement, ROUTE_ACCESS};
