//! Session state slots: the cart and the subscription tag.

use crate::cart::Cart;
use crate::config::{CART_KEY, SUBSCRIPTION_KEY};
use crate::error::AssistantError;
use crate::models::{CartLine, SubscriptionTier};

use super::KeyValueStore;

/// Load the persisted cart. A missing slot is an empty cart.
pub fn load_cart<S: KeyValueStore + ?Sized>(store: &S) -> Result<Cart, AssistantError> {
    match store.get(CART_KEY)? {
        Some(raw) if !raw.trim().is_empty() => {
            let lines: Vec<CartLine> = serde_json::from_str(&raw)?;
            Ok(Cart::from_lines(lines))
        }
        _ => Ok(Cart::new()),
    }
}

pub fn save_cart<S: KeyValueStore + ?Sized>(store: &mut S, cart: &Cart) -> Result<(), AssistantError> {
    let raw = serde_json::to_string(cart.lines())?;
    store.set(CART_KEY, &raw)?;
    Ok(())
}

/// Load the subscription tier. Absent, empty and the legacy `null` tag all
/// read as no subscription; any other unknown tag is an error.
pub fn load_subscription<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<SubscriptionTier, AssistantError> {
    match store.get(SUBSCRIPTION_KEY)? {
        None => Ok(SubscriptionTier::None),
        Some(raw) => match raw.trim() {
            "" | "null" => Ok(SubscriptionTier::None),
            tag => tag.parse(),
        },
    }
}

pub fn save_subscription<S: KeyValueStore + ?Sized>(
    store: &mut S,
    tier: SubscriptionTier,
) -> Result<(), AssistantError> {
    store.set(SUBSCRIPTION_KEY, tier.as_str())?;
    Ok(())
}
