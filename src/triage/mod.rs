//! Symptom triage: free text → medicine suggestions or doctor referral.
//!
//! Two stages, in strict order:
//! 1. Escalation: urgent keywords short-circuit to referral
//! 2. Rules: ordered keyword table emitting medicine keys
//!
//! Pure classification. Logging the query to history and rendering the
//! outcome are the caller's job.

pub mod escalation;
pub mod rules;

use serde::Serialize;

use crate::catalog;
use crate::error::AssistantError;
use crate::models::Medicine;

/// What the triage decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// High-risk keywords present. Refer to a doctor, suggest nothing.
    Urgent { matched: Vec<&'static str> },
    /// Medicine keys in rule-table order, duplicates preserved.
    Medicines { keys: Vec<&'static str> },
    /// Nothing matched. Still refer to a doctor, without the urgent banner.
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Lowercased, trimmed input.
    pub query: String,
    pub outcome: Outcome,
}

impl Analysis {
    pub fn is_urgent(&self) -> bool {
        matches!(self.outcome, Outcome::Urgent { .. })
    }

    /// Both urgent and unmatched queries end in doctor referral.
    pub fn needs_doctor(&self) -> bool {
        !matches!(self.outcome, Outcome::Medicines { .. })
    }

    pub fn medicine_keys(&self) -> &[&'static str] {
        match &self.outcome {
            Outcome::Medicines { keys } => keys,
            _ => &[],
        }
    }

    /// Catalog records for the suggested keys.
    pub fn medicines(&self) -> Vec<&'static Medicine> {
        catalog::resolve_medicines(self.medicine_keys())
    }
}

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Classify a symptom description.
///
/// Empty or whitespace-only input is a validation error. "No rule matched"
/// is a successful [`Outcome::NoMatch`].
pub fn analyze(text: &str) -> Result<Analysis, AssistantError> {
    let query = normalize(text);
    if query.is_empty() {
        return Err(AssistantError::Validation(
            "Please describe your symptoms".into(),
        ));
    }

    let matched = escalation::urgent_matches(&query);
    if !matched.is_empty() {
        tracing::warn!(keywords = ?matched, "urgent symptoms, referring to doctor");
        return Ok(Analysis {
            query,
            outcome: Outcome::Urgent { matched },
        });
    }

    let keys = rules::evaluate(&query);
    let outcome = if keys.is_empty() {
        tracing::info!("no symptom rule matched, referring to doctor");
        Outcome::NoMatch
    } else {
        tracing::debug!(count = keys.len(), "medicine suggestions produced");
        Outcome::Medicines { keys }
    };

    Ok(Analysis { query, outcome })
}
