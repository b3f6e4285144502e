//! Patient intake pipeline: form → record → background insert.

use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crate::db::{Database, DbError, DbResult};
use crate::models::{PatientForm, PatientRecord};

/// Hands finished records to the local store without blocking the caller.
pub struct PatientIntake {
    db: Arc<Mutex<Database>>,
}

impl PatientIntake {
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self { db }
    }

    /// Build a record from the form and write it on a background thread.
    ///
    /// Returns the built record together with a handle for the write.
    /// Dropping the handle detaches the write: it still runs to
    /// completion, and a failure is reported as a `tracing` error event
    /// rather than back to the caller. Joining the handle yields the new
    /// row id.
    pub fn submit(&self, form: PatientForm) -> (PatientRecord, JoinHandle<DbResult<i64>>) {
        let record = PatientRecord::from_form(form);
        let db = Arc::clone(&self.db);
        let row = record.clone();

        let handle = thread::spawn(move || {
            let result = db
                .lock()
                .map_err(|_| DbError::Poisoned)
                .and_then(|db| db.insert_patient(&row));
            match &result {
                Ok(id) => tracing::debug!(id = *id, "patient record stored"),
                Err(e) => tracing::error!(error = %e, "patient record was not stored"),
            }
            result
        });

        (record, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, VisitType};

    fn setup_intake() -> (PatientIntake, Arc<Mutex<Database>>) {
        let db = Arc::new(Mutex::new(Database::open_in_memory().unwrap()));
        (PatientIntake::new(Arc::clone(&db)), db)
    }

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
    fn test_submit_stores_record() {
        let (intake, db) = setup_intake();

        let (record, write) = intake.submit(sample_form());
        let id = write.join().unwrap().unwrap();

        let stored = db.lock().unwrap().get_patient(id).unwrap().unwrap();
        assert_eq!(stored, record);
    }

    #[test]
    fn test_submitted_timestamp_ignores_form_date() {
        let (intake, _db) = setup_intake();

        let (record, write) = intake.submit(sample_form());
        write.join().unwrap().unwrap();

        assert_ne!(record.visit_timestamp, "2001-01-01");
    }

    #[test]
    fn test_consecutive_submissions_get_new_ids() {
        let (intake, db) = setup_intake();

        let (_, first) = intake.submit(sample_form());
        let first_id = first.join().unwrap().unwrap();
        let (_, second) = intake.submit(sample_form());
        let second_id = second.join().unwrap().unwrap();

        assert!(second_id > first_id);
        assert_eq!(db.lock().unwrap().count_patients().unwrap(), 2);
    }
}
