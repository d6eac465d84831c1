//! Clinician booking: doctor lookup, fee quote, validated confirmation.
//!
//! The booking only persists as an appointment entry in history. Whether the
//! date lies in the future is left to the date picker.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog;
use crate::db::KeyValueStore;
use crate::error::AssistantError;
use crate::history;
use crate::models::{Appointment, Doctor, HistoryEvent, SubscriptionTier};
use crate::pricing::{self, FeeQuote};

/// Booking form as submitted by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: String, // YYYY-MM-DD
    pub time: Option<String>, // HH:MM or null
    pub patient_name: String,
    pub patient_phone: String,
}

pub fn select_doctor(id: u32) -> Result<&'static Doctor, AssistantError> {
    let doctor = catalog::find_doctor(id)?;
    tracing::debug!(doctor_id = id, "doctor selected");
    Ok(doctor)
}

pub fn quote_fee(doctor: &Doctor, tier: SubscriptionTier) -> FeeQuote {
    pricing::quote_fee(doctor.fee, tier)
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, AssistantError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AssistantError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

fn parse_date(raw: &str) -> Result<NaiveDate, AssistantError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| AssistantError::Validation(format!("Invalid appointment date: {e}")))
}

fn parse_time(raw: Option<&str>) -> Result<Option<NaiveTime>, AssistantError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M")
            .map(Some)
            .map_err(|e| AssistantError::Validation(format!("Invalid appointment time: {e}"))),
    }
}

/// Validate the form, build the appointment and record it in history.
///
/// Date, patient name and phone are required; time is optional. Nothing is
/// written when validation fails.
pub fn confirm<S: KeyValueStore + ?Sized>(
    doctor: &Doctor,
    request: &BookingRequest,
    tier: SubscriptionTier,
    store: &mut S,
) -> Result<Appointment, AssistantError> {
    let date = parse_date(required(&request.date, "Appointment date")?)?;
    let patient_name = required(&request.patient_name, "Patient name")?;
    let patient_phone = required(&request.patient_phone, "Patient phone")?;
    let time = parse_time(request.time.as_deref())?;

    let quote = quote_fee(doctor, tier);
    let appointment = Appointment {
        id: Uuid::new_v4(),
        doctor_id: Some(doctor.id),
        doctor: doctor.name.into(),
        specialty: doctor.specialty.into(),
        date,
        time,
        patient_name: patient_name.into(),
        patient_phone: patient_phone.into(),
        fee: quote.listed_fee,
        discount: quote.discount,
        payable_fee: quote.payable_fee,
    };

    history::record(store, HistoryEvent::Appointment(appointment.clone()))?;
    tracing::info!(
        appointment_id = %appointment.id,
        doctor_id = doctor.id,
        date = %appointment.date,
        payable = %appointment.payable_fee,
        "appointment booked"
    );
    Ok(appointment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::HistoryKind;
    use crate::money::Money;

    fn request() -> BookingRequest {
        BookingRequest {
            date: "2026-11-02".into(),
            time: Some("10:30".into()),
            patient_name: "Asha Rai".into(),
            patient_phone: "9800000000".into(),
        }
    }

    #[test]
    fn unknown_doctor_is_not_found() {
        assert!(matches!(select_doctor(0), Err(AssistantError::NotFound { .. })));
        assert_eq!(select_doctor(2).unwrap().specialty, "Cardiologist");
    }

    #[test]
    fn premium_quote_discounts_fee() {
        let doctor = select_doctor(2).unwrap(); // Rs 800
        let quote = quote_fee(doctor, SubscriptionTier::Premium);
        assert_eq!(quote.discount, Money::from_rupees(120));
        assert_eq!(quote.payable_fee, Money::from_rupees(680));
    }

    #[test]
    fn basic_quote_pays_full_fee() {
        let doctor = select_doctor(1).unwrap();
        let quote = quote_fee(doctor, SubscriptionTier::Basic);
        assert!(quote.discount.is_zero());
        assert_eq!(quote.payable_fee, doctor.fee);
    }

    #[test]
    fn confirm_records_appointment() {
        let mut store = MemoryStore::new();
        let doctor = select_doctor(1).unwrap();
        let appt = confirm(doctor, &request(), SubscriptionTier::Premium, &mut store).unwrap();

        assert_eq!(appt.doctor, "Dr. Sharma");
        assert_eq!(appt.fee, Money::from_rupees(500));
        assert_eq!(appt.discount, Money::from_rupees(75));
        assert_eq!(appt.time, NaiveTime::from_hms_opt(10, 30, 0));

        let log = history::entries_of_kind(&store, HistoryKind::Appointment).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event, HistoryEvent::Appointment(appt));
    }

    #[test]
    fn time_is_optional() {
        let mut store = MemoryStore::new();
        let doctor = select_doctor(4).unwrap();
        for time in [None, Some(String::new())] {
            let req = BookingRequest { time, ..request() };
            let appt = confirm(doctor, &req, SubscriptionTier::None, &mut store).unwrap();
            assert!(appt.time.is_none());
        }
    }

    #[test]
    fn missing_required_fields_rejected() {
        let mut store = MemoryStore::new();
        let doctor = select_doctor(3).unwrap();
        let cases = [
            BookingRequest { date: String::new(), ..request() },
            BookingRequest { patient_name: "  ".into(), ..request() },
            BookingRequest { patient_phone: String::new(), ..request() },
        ];
        for req in cases {
            let result = confirm(doctor, &req, SubscriptionTier::Premium, &mut store);
            assert!(matches!(result, Err(AssistantError::Validation(_))));
        }
        assert!(history::read_all(&store).unwrap().is_empty());
    }

    #[test]
    fn malformed_date_or_time_rejected() {
        let mut store = MemoryStore::new();
        let doctor = select_doctor(3).unwrap();
        let bad_date = BookingRequest { date: "02/11/2026".into(), ..request() };
        assert!(confirm(doctor, &bad_date, SubscriptionTier::None, &mut store).is_err());
        let bad_time = BookingRequest { time: Some("half past ten".into()), ..request() };
        assert!(confirm(doctor, &bad_time, SubscriptionTier::None, &mut store).is_err());
    }

    #[test]
    fn patient_fields_are_trimmed() {
        let mut store = MemoryStore::new();
        let doctor = select_doctor(1).unwrap();
        let req = BookingRequest {
            patient_name: "  Asha Rai ".into(),
            ..request()
        };
        let appt = confirm(doctor, &req, SubscriptionTier::None, &mut store).unwrap();
        assert_eq!(appt.patient_name, "Asha Rai");
    }
}
