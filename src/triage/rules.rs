//! Keyword → medicine rule table.
//!
//! Rules are evaluated in order and are not exclusive: every rule whose
//! keywords appear in the text contributes its medicines, duplicates included.

/// One row of the recommendation table.
#[derive(Debug)]
pub struct SymptomRule {
    /// Stable identifier for logs.
    pub id: &'static str,
    pub keywords: &'static [&'static str],
    /// Medicine keys, in the order they are suggested.
    pub emits: &'static [&'static str],
}

pub static RULES: &[SymptomRule] = &[
    SymptomRule {
        id: "fever",
        keywords: &["fever", "temperature", "hot"],
        emits: &["paracetamol"],
    },
    SymptomRule {
        id: "headache",
        keywords: &["headache", "head pain", "migraine"],
        emits: &["ibuprofen"],
    },
    SymptomRule {
        id: "cold_flu",
        keywords: &["cold", "flu", "runny nose", "sneezing"],
        emits: &["decold", "sinex"],
    },
    SymptomRule {
        id: "cough",
        keywords: &["cough", "throat"],
        emits: &["coughsyrup"],
    },
    SymptomRule {
        id: "allergy",
        keywords: &["allergy", "itching", "rash", "hives"],
        emits: &["cetirizine"],
    },
    SymptomRule {
        id: "body_pain",
        keywords: &["body pain", "muscle pain", "inflammation"],
        emits: &["ibuprofen"],
    },
    SymptomRule {
        id: "infection",
        keywords: &["infection", "bacterial"],
        emits: &["azithromycin"],
    },
    SymptomRule {
        id: "dehydration",
        keywords: &["diarrhea", "dehydration", "loose motion"],
        emits: &["ors"],
    },
];

impl SymptomRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }
}

/// Run every rule over normalized text and collect emitted medicine keys.
pub fn evaluate(normalized: &str) -> Vec<&'static str> {
    let mut keys = Vec::new();
    for rule in RULES {
        if rule.matches(normalized) {
            tracing::debug!(rule = rule.id, "symptom rule fired");
            keys.extend_from_slice(rule.emits);
        }
    }
    keys
}
