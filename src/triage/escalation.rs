//! Urgent escalation check.
//!
//! Runs before any medicine rule. A hit on any keyword routes the user
//! straight to doctor referral and no medicine is suggested.

/// Phrases that always escalate to a doctor.
pub static URGENT_KEYWORDS: &[&str] = &[
    "chest pain",
    "breathing difficulty",
    "severe pain",
    "high fever",
    "rash",
    "unconscious",
    "blood",
    "seizure",
];

/// Urgent keywords contained in already-normalized text, in table order.
pub fn urgent_matches(normalized: &str) -> Vec<&'static str> {
    URGENT_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| normalized.contains(keyword))
        .collect()
}

pub fn is_urgent(normalized: &str) -> bool {
    URGENT_KEYWORDS.iter().any(|keyword| normalized.contains(keyword))
}
