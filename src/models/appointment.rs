use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// A confirmed clinician booking. Only survives as a history entry.
///
/// Entries written before bookings carried ids have no `id`, `doctor_id` or
/// `payable_fee`. They read back with a nil id, no doctor id and the payable
/// fee derived from `fee - discount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredAppointment")]
pub struct Appointment {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<u32>,
    pub doctor: String,
    pub specialty: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: Option<NaiveTime>,
    #[serde(rename = "name")]
    pub patient_name: String,
    #[serde(rename = "phone")]
    pub patient_phone: String,
    /// Listed consultation fee, before discount.
    pub fee: Money,
    pub discount: Money,
    pub payable_fee: Money,
}

#[derive(Deserialize)]
struct StoredAppointment {
    #[serde(default)]
    id: Uuid,
    #[serde(default)]
    doctor_id: Option<u32>,
    doctor: String,
    specialty: String,
    date: NaiveDate,
    #[serde(default, with = "hh_mm")]
    time: Option<NaiveTime>,
    name: String,
    phone: String,
    fee: Money,
    discount: Money,
    #[serde(default)]
    payable_fee: Option<Money>,
}

impl From<StoredAppointment> for Appointment {
    fn from(s: StoredAppointment) -> Self {
        let payable_fee = s
            .payable_fee
            .unwrap_or_else(|| s.fee.saturating_sub(s.discount));
        Self {
            id: s.id,
            doctor_id: s.doctor_id,
            doctor: s.doctor,
            specialty: s.specialty,
            date: s.date,
            time: s.time,
            patient_name: s.name,
            patient_phone: s.phone,
            fee: s.fee,
            discount: s.discount,
            payable_fee,
        }
    }
}

/// Booking time as `HH:MM`. No time is an empty string, as a blank time
/// field has always been stored.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid time {raw:?}: {e}")))
    }
}
