use crate::domain::money::{Balance, Price};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Paid,
}

/// An individual line within an order. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    name: String,
    quantity: u32,
    price: Price,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Price) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `quantity * price` for this line.
    pub fn line_total(&self) -> Balance {
        Balance::new(rust_decimal::Decimal::from(self.quantity) * self.price.value())
    }
}

/// A customer's purchase: an ordered sequence of line items plus a status flag.
///
/// Orders start empty and `Open`; the status moves to `Paid` exactly once, when
/// a payment settles. The paying customer is borrowed by the payment workflow
/// rather than embedded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
}

impl Order {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            status: OrderStatus::Open,
        }
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
