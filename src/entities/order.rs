//! Seller-side customer orders

use crate::core::record::Filterable;
use crate::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fulfilment status shown on the seller dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Customer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            address: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order number, e.g. `#HL-2841`
    pub id: String,
    pub customer: Customer,
    pub date: NaiveDate,
    /// Total in RWF
    pub amount: f64,
    pub status: OrderStatus,
    /// Number of line items
    pub items: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer: Customer,
        date: NaiveDate,
        amount: f64,
        status: OrderStatus,
        items: u32,
    ) -> Self {
        Self {
            id: id.into(),
            customer,
            date,
            amount,
            status,
            items,
            payment_method: None,
            shipping_address: None,
        }
    }
}

impl Filterable for Order {
    fn text_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.name.as_str()]
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn range_value(&self) -> Option<f64> {
        Some(self.amount)
    }

    fn location(&self) -> Option<&str> {
        self.shipping_address.as_deref()
    }
}

impl_record!(
    Order,
    resource: "orders",
    id: String => id,
    fields: {
        "id" => |o| &o.id,
        "customer" => |o| &o.customer.name,
        "date" => |o| o.date,
        "amount" => |o| o.amount,
        "status" => |o| o.status.as_str(),
        "items" => |o| o.items,
    }
);
