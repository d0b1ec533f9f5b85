use serde::de::DeserializeOwned;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::mock;
use crate::models::{
    Customer, DeliveryAgent, Order, Payment, Promotion, SupportTicket, Vendor,
};

pub const CUSTOMERS_PATH: &str = "/admin/customers";
pub const VENDORS_PATH: &str = "/admin/vendors";
pub const DELIVERY_AGENTS_PATH: &str = "/admin/delivery-agents";
pub const ORDERS_PATH: &str = "/admin/orders";
pub const PAYMENTS_PATH: &str = "/admin/payments";
pub const PROMOTIONS_PATH: &str = "/admin/promotions";
pub const SUPPORT_TICKETS_PATH: &str = "/admin/support-tickets";

impl ApiClient {
    async fn list_or_offline<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
        substitute: fn() -> Vec<T>,
    ) -> ApiResult<Vec<T>> {
        match self.get_json(path).await {
            Err(err) if self.config().offline_fallback && err.is_transport_failure() => {
                warn!(resource, error = %err, "backend unreachable; serving locally generated data");
                Ok(substitute())
            }
            other => other,
        }
    }

    pub async fn list_customers(&self) -> ApiResult<Vec<Customer>> {
        self.list_or_offline(CUSTOMERS_PATH, "customers", mock::customers)
            .await
    }

    pub async fn list_vendors(&self) -> ApiResult<Vec<Vendor>> {
        self.list_or_offline(VENDORS_PATH, "vendors", mock::vendors)
            .await
    }

    pub async fn list_delivery_agents(&self) -> ApiResult<Vec<DeliveryAgent>> {
        self.list_or_offline(DELIVERY_AGENTS_PATH, "delivery_agents", mock::delivery_agents)
            .await
    }

    pub async fn list_orders(&self) -> ApiResult<Vec<Order>> {
        self.list_or_offline(ORDERS_PATH, "orders", mock::orders).await
    }

    pub async fn list_payments(&self) -> ApiResult<Vec<Payment>> {
        self.list_or_offline(PAYMENTS_PATH, "payments", mock::payments)
            .await
    }

    pub async fn list_promotions(&self) -> ApiResult<Vec<Promotion>> {
        self.list_or_offline(PROMOTIONS_PATH, "promotions", mock::promotions)
            .await
    }

    pub async fn list_support_tickets(&self) -> ApiResult<Vec<SupportTicket>> {
        self.list_or_offline(SUPPORT_TICKETS_PATH, "support_tickets", mock::support_tickets)
            .await
    }
}
