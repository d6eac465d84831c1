use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::appointment::Appointment;
use super::cart::PurchaseRecord;
use super::enums::HistoryKind;

/// Payload of a history entry, tagged the way the log has always been stored:
/// `{"type": "...", "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum HistoryEvent {
    /// Normalized symptom text as the user typed it.
    Symptom(String),
    Purchase(PurchaseRecord),
    Appointment(Appointment),
}

/// Immutable record in the append-only history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub event: HistoryEvent,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Stamp an event with the current time.
    pub fn now(event: HistoryEvent) -> Self {
        Self {
            event,
            timestamp: Utc::now(),
        }
    }

    pub fn kind(&self) -> HistoryKind {
        match self.event {
            HistoryEvent::Symptom(_) => HistoryKind::Symptom,
            HistoryEvent::Purchase(_) => HistoryKind::Purchase,
            HistoryEvent::Appointment(_) => HistoryKind::Appointment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn symptom_entry_uses_type_data_timestamp_layout() {
        let entry = HistoryEntry {
            event: HistoryEvent::Symptom("headache".into()),
            timestamp: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "symptom");
        assert_eq!(value["data"], "headache");
        assert_eq!(value["timestamp"], 1_700_000_000_000_i64);
    }

    #[test]
    fn parses_stored_purchase_entry() {
        let raw = r#"{
            "type": "purchase",
            "data": {
                "items": [{"key": "ors", "name": "ORS", "dosage": "1 sachet", "price": 10, "quantity": 3}],
                "subtotal": 30,
                "discount": 2.1,
                "total": 27.9
            },
            "timestamp": 1700000000000
        }"#;
        let entry: HistoryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.kind(), HistoryKind::Purchase);
        match entry.event {
            HistoryEvent::Purchase(record) => {
                assert_eq!(record.items.len(), 1);
                assert_eq!(record.total.paise(), 2790);
            }
            other => panic!("expected purchase, got {other:?}"),
        }
    }
}
