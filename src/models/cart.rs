use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One merged (medicine, dosage) entry in the cart.
///
/// `name` and `price` are snapshots taken when the line was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub key: String,
    pub name: String,
    pub dosage: String,
    pub price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Derived cart figures for one subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}

/// Snapshot of a completed checkout, as stored in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub items: Vec<CartLine>,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}
