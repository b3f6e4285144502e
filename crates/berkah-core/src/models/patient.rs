//! Patient intake models.

use serde::{Deserialize, Serialize};

/// Timestamp layout for the visit column, local wall-clock time.
pub const VISIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Patient gender as captured by the intake form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

/// How the visit is paid for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VisitType {
    /// Out-of-pocket visit.
    General,
    /// Visit covered by the national insurance scheme.
    Insurance,
}

/// Raw form fields as captured by the intake screen.
///
/// Every text field is accepted as-is, including empty strings; the form
/// carries no validation of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientForm {
    pub name: String,
    pub national_id: String,
    pub age: String,
    pub address: String,
    pub gender: Gender,
    pub visit_type: VisitType,
    /// Visit date as typed by the user. The stored record's timestamp is
    /// always the submission time, so this field never reaches storage;
    /// it is kept here so the form round-trips the full screen state.
    pub date_of_visit: String,
    pub complaint: String,
}

/// A patient record as it lands in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    pub name: String,
    pub national_id: String,
    pub age: String,
    pub address: String,
    pub gender: Gender,
    pub visit_type: VisitType,
    /// Stamped with the current local time when the record is built.
    pub visit_timestamp: String,
    pub complaint: String,
}

impl PatientRecord {
    /// Build a record from a submitted form.
    ///
    /// `visit_timestamp` is set to the moment of building; the form's
    /// `date_of_visit` is discarded.
    pub fn from_form(form: PatientForm) -> Self {
        Self {
            name: form.name,
            national_id: form.national_id,
            age: form.age,
            address: form.address,
            gender: form.gender,
            visit_type: form.visit_type,
            visit_timestamp: chrono::Local::now()
                .format(VISIT_TIMESTAMP_FORMAT)
                .to_string(),
            complaint: form.complaint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn sample_form() -> PatientForm {
        PatientForm {
            name: "Ani".into(),
            national_id: "3404120101990001".into(),
            age: "24".into(),
            address: "Jl. Melati 5".into(),
            gender: Gender::Female,
            visit_type: VisitType::General,
            date_of_visit: "2001-01-01".into(),
            complaint: "Demam".into(),
        }
    }

    #[test]
    fn test_from_form_copies_fields() {
        let record = PatientRecord::from_form(sample_form());
        assert_eq!(record.name, "Ani");
        assert_eq!(record.national_id, "3404120101990001");
        assert_eq!(record.age, "24");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.visit_type, VisitType::General);
        assert_eq!(record.complaint, "Demam");
    }

    #[test]
    fn test_visit_timestamp_is_build_time() {
        let before = chrono::Local::now().naive_local();
        let record = PatientRecord::from_form(sample_form());

        // The typed date must not survive into the record.
        assert_ne!(record.visit_timestamp, "2001-01-01");

        let stamped =
            NaiveDateTime::parse_from_str(&record.visit_timestamp, VISIT_TIMESTAMP_FORMAT)
                .expect("timestamp must match the fixed layout");
        let after = chrono::Local::now().naive_local();

        assert!(stamped >= before - chrono::Duration::seconds(1));
        assert!(stamped <= after + chrono::Duration::seconds(1));
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let form = PatientForm {
            name: String::new(),
            national_id: String::new(),
            age: String::new(),
            address: String::new(),
            gender: Gender::Male,
            visit_type: VisitType::Insurance,
            date_of_visit: String::new(),
            complaint: String::new(),
        };
        let record = PatientRecord::from_form(form);
        assert_eq!(record.name, "");
        assert_eq!(record.complaint, "");
    }
}
