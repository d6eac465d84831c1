//! Subscription discount policy.
//!
//! One table drives both the cart and the appointment discount. Everything
//! here is pure: same inputs, same result, never above the input amount.

use serde::{Deserialize, Serialize};

use crate::models::{CartTotals, SubscriptionTier};
use crate::money::Money;

/// Percentage with a hard ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CappedRate {
    pub percent: u64,
    pub cap: Money,
}

impl CappedRate {
    pub const fn apply(&self, amount: Money) -> Money {
        let share = amount.percent(self.percent);
        if share.paise() < self.cap.paise() {
            share
        } else {
            self.cap
        }
    }
}

/// Discounts granted by one subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPolicy {
    pub cart: Option<CappedRate>,
    pub appointment: Option<CappedRate>,
}

const NO_DISCOUNT: TierPolicy = TierPolicy {
    cart: None,
    appointment: None,
};

const BASIC: TierPolicy = TierPolicy {
    cart: Some(CappedRate {
        percent: 7,
        cap: Money::from_rupees(100),
    }),
    appointment: None,
};

const PREMIUM: TierPolicy = TierPolicy {
    cart: Some(CappedRate {
        percent: 15,
        cap: Money::from_rupees(200),
    }),
    appointment: Some(CappedRate {
        percent: 15,
        cap: Money::from_rupees(150),
    }),
};

pub const fn policy(tier: SubscriptionTier) -> TierPolicy {
    match tier {
        SubscriptionTier::None => NO_DISCOUNT,
        SubscriptionTier::Basic => BASIC,
        SubscriptionTier::Premium => PREMIUM,
    }
}

/// `min(subtotal × rate, cap)` for the tier's cart policy.
pub fn cart_discount(subtotal: Money, tier: SubscriptionTier) -> Money {
    policy(tier)
        .cart
        .map_or(Money::ZERO, |rate| rate.apply(subtotal))
}

/// Appointment fees are only discounted on premium.
pub fn appointment_discount(fee: Money, tier: SubscriptionTier) -> Money {
    policy(tier)
        .appointment
        .map_or(Money::ZERO, |rate| rate.apply(fee))
}

pub fn cart_totals(subtotal: Money, tier: SubscriptionTier) -> CartTotals {
    let discount = cart_discount(subtotal, tier);
    CartTotals {
        subtotal,
        discount,
        total: subtotal.saturating_sub(discount),
    }
}

/// Consultation fee breakdown shown before booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub listed_fee: Money,
    pub discount: Money,
    pub payable_fee: Money,
}

pub fn quote_fee(fee: Money, tier: SubscriptionTier) -> FeeQuote {
    let discount = appointment_discount(fee, tier);
    FeeQuote {
        listed_fee: fee,
        discount,
        payable_fee: fee.saturating_sub(discount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rs(rupees: u64) -> Money {
        Money::from_rupees(rupees)
    }

    // ───────────────────────────────────────
    // cart discount
    // ───────────────────────────────────────

    #[test]
    fn premium_cart_below_cap() {
        assert_eq!(cart_discount(rs(1000), SubscriptionTier::Premium), rs(150));
    }

    #[test]
    fn premium_cart_cap_binds() {
        assert_eq!(cart_discount(rs(2000), SubscriptionTier::Premium), rs(200));
        assert_eq!(cart_discount(rs(50_000), SubscriptionTier::Premium), rs(200));
    }

    #[test]
    fn basic_cart_rate_and_cap() {
        assert_eq!(cart_discount(rs(500), SubscriptionTier::Basic), rs(35));
        assert_eq!(cart_discount(rs(5000), SubscriptionTier::Basic), rs(100));
    }

    #[test]
    fn no_subscription_no_discount() {
        assert_eq!(cart_discount(rs(500), SubscriptionTier::None), Money::ZERO);
    }

    #[test]
    fn fractional_discount_is_exact() {
        // 7% of Rs 35 is Rs 2.45
        assert_eq!(
            cart_discount(rs(35), SubscriptionTier::Basic),
            Money::from_paise(245)
        );
    }

    #[test]
    fn discount_never_exceeds_subtotal() {
        for tier in [
            SubscriptionTier::None,
            SubscriptionTier::Basic,
            SubscriptionTier::Premium,
        ] {
            for subtotal in [0, 1, 10, 99, 1000, 1333, 100_000] {
                let totals = cart_totals(rs(subtotal), tier);
                assert!(totals.discount <= totals.subtotal);
                assert_eq!(totals.subtotal, totals.discount + totals.total);
            }
        }
    }

    // ───────────────────────────────────────
    // appointment discount
    // ───────────────────────────────────────

    #[test]
    fn basic_never_discounts_appointments() {
        for fee in [0, 1, 500, 800, 1000, 5000] {
            assert_eq!(appointment_discount(rs(fee), SubscriptionTier::Basic), Money::ZERO);
            assert_eq!(appointment_discount(rs(fee), SubscriptionTier::None), Money::ZERO);
        }
    }

    #[test]
    fn premium_appointment_rate_and_cap() {
        assert_eq!(appointment_discount(rs(500), SubscriptionTier::Premium), rs(75));
        assert_eq!(appointment_discount(rs(800), SubscriptionTier::Premium), rs(120));
        assert_eq!(appointment_discount(rs(1000), SubscriptionTier::Premium), rs(150));
        assert_eq!(appointment_discount(rs(3000), SubscriptionTier::Premium), rs(150));
    }

    #[test]
    fn fee_quote_payable_is_listed_minus_discount() {
        let quote = quote_fee(rs(700), SubscriptionTier::Premium);
        assert_eq!(quote.listed_fee, rs(700));
        assert_eq!(quote.discount, rs(105));
        assert_eq!(quote.payable_fee, rs(595));

        let quote = quote_fee(rs(700), SubscriptionTier::Basic);
        assert_eq!(quote.payable_fee, rs(700));
        assert!(quote.discount.is_zero());
    }
}
