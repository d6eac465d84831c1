use crate::error::AssistantError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = AssistantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(AssistantError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(SubscriptionTier {
    None => "none",
    Basic => "basic",
    Premium => "premium",
});

str_enum!(ConsultationType {
    Online => "online",
    Nearby => "nearby",
});

str_enum!(HistoryKind {
    Symptom => "symptom",
    Purchase => "purchase",
    Appointment => "appointment",
});

impl Default for SubscriptionTier {
    fn default() -> Self {
        SubscriptionTier::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn subscription_tier_round_trip() {
        for (variant, s) in [
            (SubscriptionTier::None, "none"),
            (SubscriptionTier::Basic, "basic"),
            (SubscriptionTier::Premium, "premium"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(SubscriptionTier::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        let json = serde_json::to_string(&ConsultationType::Nearby).unwrap();
        assert_eq!(json, "\"nearby\"");
        let kind: HistoryKind = serde_json::from_str("\"purchase\"").unwrap();
        assert_eq!(kind, HistoryKind::Purchase);
    }

    #[test]
    fn default_tier_is_none() {
        assert_eq!(SubscriptionTier::default(), SubscriptionTier::None);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(SubscriptionTier::from_str("gold").is_err());
        assert!(ConsultationType::from_str("").is_err());
        assert!(matches!(
            HistoryKind::from_str("refund"),
            Err(AssistantError::InvalidEnum { .. })
        ));
    }
}
