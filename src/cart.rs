//! Shopping cart: merge-on-add lines, quantity clamping, totals, checkout.

use serde::Serialize;

use crate::config::{MAX_QUANTITY, MIN_QUANTITY};
use crate::db::KeyValueStore;
use crate::error::AssistantError;
use crate::history;
use crate::models::{
    CartLine, CartTotals, HistoryEvent, Medicine, PurchaseRecord, SubscriptionTier,
};
use crate::money::Money;
use crate::pricing;

/// Clamp a requested quantity into the allowed per-line range.
pub fn clamp_quantity(quantity: u32) -> u32 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

/// Ordered cart lines. Every line holds a quantity within
/// [`MIN_QUANTITY`, `MAX_QUANTITY`] and (key, dosage) pairs are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from stored lines, re-establishing the line invariants.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for mut line in lines {
            line.quantity = clamp_quantity(line.quantity);
            match cart.position(&line.key, &line.dosage) {
                Some(i) => {
                    let existing = &mut cart.lines[i];
                    existing.quantity = clamp_quantity(existing.quantity + line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, key: &str, dosage: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| l.key == key && l.dosage == dosage)
    }

    /// Add `quantity` of `medicine` at `dosage` (default dosage when `None`).
    ///
    /// The quantity is clamped before merging; a merged line is clamped again
    /// so it never exceeds [`MAX_QUANTITY`]. Returns the affected line.
    pub fn add_item(
        &mut self,
        medicine: &Medicine,
        dosage: Option<&str>,
        quantity: u32,
    ) -> Result<&CartLine, AssistantError> {
        let dosage = medicine.resolve_dosage(dosage).ok_or_else(|| {
            AssistantError::Validation(format!(
                "{} is not offered as {}",
                medicine.name,
                dosage.unwrap_or_default()
            ))
        })?;
        let quantity = clamp_quantity(quantity);

        let index = match self.position(medicine.key, dosage) {
            Some(i) => {
                let line = &mut self.lines[i];
                line.quantity = clamp_quantity(line.quantity + quantity);
                i
            }
            None => {
                self.lines.push(CartLine {
                    key: medicine.key.into(),
                    name: medicine.name.into(),
                    dosage: dosage.into(),
                    price: medicine.price,
                    quantity,
                });
                self.lines.len() - 1
            }
        };

        let line = &self.lines[index];
        tracing::info!(key = %line.key, dosage = %line.dosage, quantity = line.quantity, "cart line updated");
        Ok(line)
    }

    /// Remove the line at `index`, keeping the order of the rest.
    pub fn remove_item(&mut self, index: usize) -> Result<CartLine, AssistantError> {
        if index >= self.lines.len() {
            return Err(AssistantError::not_found("CartLine", index));
        }
        let removed = self.lines.remove(index);
        tracing::info!(key = %removed.key, "cart line removed");
        Ok(removed)
    }

    /// Set a line's quantity, clamped. Returns the stored quantity.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<u32, AssistantError> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or_else(|| AssistantError::not_found("CartLine", index))?;
        line.quantity = clamp_quantity(quantity);
        Ok(line.quantity)
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn compute_totals(&self, tier: SubscriptionTier) -> CartTotals {
        pricing::cart_totals(self.subtotal(), tier)
    }

    /// Snapshot of the lines and totals an order at `tier` would record.
    pub fn purchase_record(&self, tier: SubscriptionTier) -> Result<PurchaseRecord, AssistantError> {
        if self.is_empty() {
            return Err(AssistantError::EmptyCart);
        }
        let totals = self.compute_totals(tier);
        Ok(PurchaseRecord {
            items: self.lines.clone(),
            subtotal: totals.subtotal,
            discount: totals.discount,
            total: totals.total,
        })
    }

    /// Place the order: record a purchase in history, then empty the cart.
    ///
    /// If recording fails the cart is left untouched.
    pub fn checkout<S: KeyValueStore + ?Sized>(
        &mut self,
        tier: SubscriptionTier,
        store: &mut S,
    ) -> Result<PurchaseRecord, AssistantError> {
        let record = self.purchase_record(tier)?;
        history::record(store, HistoryEvent::Purchase(record.clone()))?;
        self.lines.clear();

        tracing::info!(
            items = record.items.len(),
            total = %record.total,
            tier = %tier,
            "order placed"
        );
        Ok(record)
    }
}
