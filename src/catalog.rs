//! Static reference data: the pharmacy shelf and the clinician roster.

use crate::error::AssistantError;
use crate::models::{ConsultationType, Doctor, Medicine};
use crate::money::Money;

static MEDICINES: &[Medicine] = &[
    Medicine {
        key: "paracetamol",
        name: "Paracetamol (Crocin)",
        price: Money::from_rupees(15),
        stock: 100,
        dosages: &["500mg", "650mg"],
    },
    Medicine {
        key: "ibuprofen",
        name: "Ibuprofen (Brufen)",
        price: Money::from_rupees(25),
        stock: 80,
        dosages: &["200mg", "400mg"],
    },
    Medicine {
        key: "decold",
        name: "DeCold",
        price: Money::from_rupees(35),
        stock: 60,
        dosages: &["1 tab", "2 tabs"],
    },
    Medicine {
        key: "sinex",
        name: "Sinex",
        price: Money::from_rupees(40),
        stock: 50,
        dosages: &["Standard"],
    },
    Medicine {
        key: "cetirizine",
        name: "Cetirizine",
        price: Money::from_rupees(20),
        stock: 90,
        dosages: &["10mg"],
    },
    Medicine {
        key: "azithromycin",
        name: "Azithromycin",
        price: Money::from_rupees(120),
        stock: 40,
        dosages: &["250mg", "500mg"],
    },
    Medicine {
        key: "coughsyrup",
        name: "Cough Syrup (Broncho)",
        price: Money::from_rupees(45),
        stock: 70,
        dosages: &["100ml"],
    },
    Medicine {
        key: "ors",
        name: "ORS",
        price: Money::from_rupees(10),
        stock: 150,
        dosages: &["1 sachet"],
    },
];

static DOCTORS: &[Doctor] = &[
    Doctor {
        id: 1,
        name: "Dr. Sharma",
        specialty: "General Physician",
        rating: 4.8,
        consultation: ConsultationType::Online,
        fee: Money::from_rupees(500),
    },
    Doctor {
        id: 2,
        name: "Dr. Patel",
        specialty: "Cardiologist",
        rating: 4.9,
        consultation: ConsultationType::Nearby,
        fee: Money::from_rupees(800),
    },
    Doctor {
        id: 3,
        name: "Dr. Thapa",
        specialty: "Pulmonologist",
        rating: 4.7,
        consultation: ConsultationType::Online,
        fee: Money::from_rupees(700),
    },
    Doctor {
        id: 4,
        name: "Dr. Gurung",
        specialty: "Internal Medicine",
        rating: 4.6,
        consultation: ConsultationType::Nearby,
        fee: Money::from_rupees(600),
    },
];

pub fn medicines() -> &'static [Medicine] {
    MEDICINES
}

pub fn doctors() -> &'static [Doctor] {
    DOCTORS
}

pub fn medicine(key: &str) -> Option<&'static Medicine> {
    MEDICINES.iter().find(|m| m.key == key)
}

/// Like [`medicine`], but an unknown key is an error.
pub fn find_medicine(key: &str) -> Result<&'static Medicine, AssistantError> {
    medicine(key).ok_or_else(|| AssistantError::not_found("Medicine", key))
}

pub fn find_doctor(id: u32) -> Result<&'static Doctor, AssistantError> {
    DOCTORS
        .iter()
        .find(|d| d.id == id)
        .ok_or_else(|| AssistantError::not_found("Doctor", id))
}

/// Map recommendation keys to catalog records, in order.
/// Keys with no catalog entry are skipped; duplicates are kept.
pub fn resolve_medicines(keys: &[&str]) -> Vec<&'static Medicine> {
    keys.iter().filter_map(|key| medicine(key)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn medicine_keys_are_unique() {
        let keys: HashSet<_> = medicines().iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), medicines().len());
    }

    #[test]
    fn every_medicine_has_a_default_dosage() {
        for med in medicines() {
            assert!(!med.dosages.is_empty(), "{} has no dosages", med.key);
            assert_eq!(med.default_dosage(), med.dosages[0]);
        }
    }

    #[test]
    fn doctor_ids_unique_and_ratings_in_range() {
        let ids: HashSet<_> = doctors().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), doctors().len());
        assert!(doctors().iter().all(|d| (0.0..=5.0).contains(&d.rating)));
    }

    #[test]
    fn find_unknown_medicine_is_not_found() {
        assert!(find_medicine("ibuprofen").is_ok());
        assert!(matches!(
            find_medicine("aspirin"),
            Err(AssistantError::NotFound { .. })
        ));
    }

    #[test]
    fn find_doctor_by_id() {
        let doctor = find_doctor(3).unwrap();
        assert_eq!(doctor.name, "Dr. Thapa");
        assert!(matches!(find_doctor(99), Err(AssistantError::NotFound { .. })));
    }

    #[test]
    fn resolve_skips_unknown_and_keeps_duplicates() {
        let resolved = resolve_medicines(&["ibuprofen", "unknown", "ibuprofen"]);
        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|m| m.key == "ibuprofen"));
    }

    #[test]
    fn resolve_dosage_falls_back_to_default() {
        let med = medicine("paracetamol").unwrap();
        assert_eq!(med.resolve_dosage(None), Some("500mg"));
        assert_eq!(med.resolve_dosage(Some("650mg")), Some("650mg"));
        assert_eq!(med.resolve_dosage(Some("1g")), None);
    }
}
