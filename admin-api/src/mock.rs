//! Locally generated substitute data for offline development. Read
//! fetchers fall back to these when the backend is unreachable and the
//! config opts in; nothing here is a production data source.

use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::{
    Customer, DeliveryAgent, Order, Payment, Promotion, SupportTicket, Vendor,
};

fn amount(raw: &str) -> BigDecimal {
    BigDecimal::parse_bytes(raw.as_bytes(), 10).unwrap_or_default()
}

pub fn customers() -> Vec<Customer> {
    ["Ava Thompson", "Noah Patel", "Mia Chen"]
        .into_iter()
        .enumerate()
        .map(|(index, name)| Customer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("customer{}@example.com", index + 1),
            status: "active".to_string(),
            created_at: Utc::now() - Duration::days(index as i64 + 3),
        })
        .collect()
}

pub fn vendors() -> Vec<Vendor> {
    [
        ("Fresh Fields Grocery", "Priya Raman"),
        ("Metro Electronics", "Daniel Okafor"),
        ("Corner Bakery", "Lucia Moretti"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (store, owner))| Vendor {
        id: Uuid::new_v4(),
        store_name: store.to_string(),
        owner_name: owner.to_string(),
        email: format!("vendor{}@example.com", index + 1),
        status: if index == 2 { "pending" } else { "approved" }.to_string(),
        created_at: Utc::now() - Duration::days(index as i64 * 14 + 30),
    })
    .collect()
}

pub fn delivery_agents() -> Vec<DeliveryAgent> {
    ["Sam Carter", "Lena Fischer"]
        .into_iter()
        .enumerate()
        .map(|(index, name)| DeliveryAgent {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: format!("+1-555-01{:02}", index + 10),
            status: "on_duty".to_string(),
            created_at: Utc::now() - Duration::days(index as i64 + 60),
        })
        .collect()
}

pub fn orders() -> Vec<Order> {
    [
        ("Ava Thompson", "Fresh Fields Grocery", "delivered", "42.75"),
        ("Noah Patel", "Metro Electronics", "processing", "129.99"),
        ("Mia Chen", "Corner Bakery", "cancelled", "18.20"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (customer, vendor, status, total))| Order {
        id: Uuid::new_v4(),
        customer_name: customer.to_string(),
        vendor_name: vendor.to_string(),
        status: status.to_string(),
        total: amount(total),
        placed_at: Utc::now() - Duration::hours(index as i64 * 6 + 2),
    })
    .collect()
}

pub fn payments() -> Vec<Payment> {
    [("card", "captured", "42.75"), ("wallet", "pending", "129.99")]
        .into_iter()
        .enumerate()
        .map(|(index, (method, status, value))| Payment {
            id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            method: method.to_string(),
            status: status.to_string(),
            amount: amount(value),
            captured_at: Utc::now() - Duration::hours(index as i64 * 8 + 1),
        })
        .collect()
}

pub fn promotions() -> Vec<Promotion> {
    [("WELCOME10", "10% off the first order"), ("FREESHIP", "Free delivery over $25")]
        .into_iter()
        .enumerate()
        .map(|(index, (code, description))| Promotion {
            id: Uuid::new_v4(),
            code: code.to_string(),
            description: description.to_string(),
            status: "active".to_string(),
            starts_at: Utc::now() - Duration::days(7),
            ends_at: Utc::now() + Duration::days(21 - index as i64 * 7),
        })
        .collect()
}

pub fn support_tickets() -> Vec<SupportTicket> {
    [
        ("Order arrived damaged", "Ava Thompson", "open"),
        ("Refund not received", "Noah Patel", "in_progress"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (subject, requester, status))| SupportTicket {
        id: Uuid::new_v4(),
        subject: subject.to_string(),
        requester: requester.to_string(),
        status: status.to_string(),
        opened_at: Utc::now() - Duration::hours(index as i64 * 20 + 4),
    })
    .collect()
}
