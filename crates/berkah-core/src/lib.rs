//! Berkah Core Library
//!
//! Local-first core for the Berkah companion app: patient intake backed by
//! SQLite, and a standalone zakat calculator with a share-out hook.
//!
//! # Architecture
//!
//! ```text
//! Patient screen (host UI)            Zakat screen (host UI)
//!         │                                    │
//!    PatientForm                     headcount text + mode
//!         │                                    │
//!  build record, stamp                 validate → compute
//!   visit_timestamp                            │
//!         │                               ZakatResult
//!  background insert                           │
//!         │                          render share message
//!     SQLite store                             │
//!                                    ShareTarget (host OS)
//! ```
//!
//! The two pipelines are independent; neither knows the other exists. All
//! UI state lives in the host app, which feeds plain strings and enum
//! selections through the FFI surface below.
//!
//! # Modules
//!
//! - [`db`]: SQLite storage for patient records
//! - [`models`]: Domain types (PatientRecord, ZakatMode, ...)
//! - [`intake`]: Form-to-record pipeline with background persistence
//! - [`zakat`]: Headcount validation, amount computation, share messages
//! - [`share`]: Outbound share boundary

pub mod db;
pub mod intake;
pub mod models;
pub mod share;
pub mod zakat;

// Re-export commonly used types
pub use db::Database;
pub use intake::PatientIntake;
pub use models::{
    Gender, PatientForm, PatientRecord, VisitType, ZakatMode, ZakatResult,
    VISIT_TIMESTAMP_FORMAT,
};
pub use share::ShareTarget;
pub use zakat::{compute, parse_count, CountError, ShareTemplates, ZakatSession};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum BerkahError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("No headcount entered")]
    EmptyCount,

    #[error("Headcount is zero")]
    ZeroCount,

    #[error("Headcount is not a number: {0}")]
    InvalidCount(String),
}

impl From<db::DbError> for BerkahError {
    fn from(e: db::DbError) -> Self {
        BerkahError::DatabaseError(e.to_string())
    }
}

impl From<CountError> for BerkahError {
    fn from(e: CountError) -> Self {
        match e {
            CountError::Empty => BerkahError::EmptyCount,
            CountError::Zero => BerkahError::ZeroCount,
            CountError::NotANumber(text) => BerkahError::InvalidCount(text),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for BerkahError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        BerkahError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a patient database at the given path.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<BerkahCore>, BerkahError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(BerkahCore {
        intake: PatientIntake::new(Arc::new(Mutex::new(db))),
    }))
}

/// Create an in-memory patient database (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<BerkahCore>, BerkahError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(BerkahCore {
        intake: PatientIntake::new(Arc::new(Mutex::new(db))),
    }))
}

/// Start a fresh zakat calculator for one screen.
#[uniffi::export]
pub fn new_zakat_calculator() -> Arc<ZakatCalculator> {
    Arc::new(ZakatCalculator {
        session: Mutex::new(ZakatSession::new()),
    })
}

// =========================================================================
// Patient API Object
// =========================================================================

/// Thread-safe handle for the patient feature.
#[derive(uniffi::Object)]
pub struct BerkahCore {
    intake: PatientIntake,
}

#[uniffi::export]
impl BerkahCore {
    /// Build a patient record from the form fields and store it.
    ///
    /// The write runs off the calling thread and is not awaited; the
    /// returned record is what lands in the store. `date_of_visit` is
    /// accepted from the form, but the stored timestamp is always the
    /// submission time.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_patient(
        &self,
        name: String,
        national_id: String,
        age: String,
        address: String,
        gender: FfiGender,
        visit_type: FfiVisitType,
        date_of_visit: String,
        complaint: String,
    ) -> FfiPatientRecord {
        let form = PatientForm {
            name,
            national_id,
            age,
            address,
            gender: gender.into(),
            visit_type: visit_type.into(),
            date_of_visit,
            complaint,
        };
        let (record, _write) = self.intake.submit(form);
        record.into()
    }
}

// =========================================================================
// Zakat API Object
// =========================================================================

/// One zakat screen's calculator state behind a lock.
#[derive(uniffi::Object)]
pub struct ZakatCalculator {
    session: Mutex<ZakatSession>,
}

#[uniffi::export]
impl ZakatCalculator {
    /// Validate the headcount text and compute the amount owed.
    pub fn calculate(&self, count_text: String, mode: FfiZakatMode) -> Result<f64, BerkahError> {
        let mut session = self.session.lock()?;
        Ok(session.calculate(&count_text, mode.into())?)
    }

    /// Drop the held result.
    pub fn reset(&self) -> Result<(), BerkahError> {
        self.session.lock()?.reset();
        Ok(())
    }

    /// Latest computed total, `0.0` when there is none.
    pub fn total(&self) -> Result<f64, BerkahError> {
        Ok(self.session.lock()?.total())
    }

    /// Render the share message for the current result.
    pub fn share_message(
        &self,
        templates: FfiShareTemplates,
    ) -> Result<Option<String>, BerkahError> {
        let session = self.session.lock()?;
        Ok(session.share_message(&templates.into()))
    }

    /// Hand the current result to the platform share facility.
    ///
    /// Returns false, dispatching nothing, when no result is held.
    pub fn share(
        &self,
        templates: FfiShareTemplates,
        target: Arc<dyn ShareTarget>,
    ) -> Result<bool, BerkahError> {
        let session = self.session.lock()?;
        match session.share_message(&templates.into()) {
            Some(message) => {
                share::dispatch(target.as_ref(), &message);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe gender.
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiGender {
    Male,
    Female,
}

impl From<FfiGender> for Gender {
    fn from(gender: FfiGender) -> Self {
        match gender {
            FfiGender::Male => Gender::Male,
            FfiGender::Female => Gender::Female,
        }
    }
}

impl From<Gender> for FfiGender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => FfiGender::Male,
            Gender::Female => FfiGender::Female,
        }
    }
}

/// FFI-safe visit type.
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiVisitType {
    General,
    Insurance,
}

impl From<FfiVisitType> for VisitType {
    fn from(visit_type: FfiVisitType) -> Self {
        match visit_type {
            FfiVisitType::General => VisitType::General,
            FfiVisitType::Insurance => VisitType::Insurance,
        }
    }
}

impl From<VisitType> for FfiVisitType {
    fn from(visit_type: VisitType) -> Self {
        match visit_type {
            VisitType::General => FfiVisitType::General,
            VisitType::Insurance => FfiVisitType::Insurance,
        }
    }
}

/// FFI-safe zakat mode.
#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum FfiZakatMode {
    Monetary,
    StapleFood,
}

impl From<FfiZakatMode> for ZakatMode {
    fn from(mode: FfiZakatMode) -> Self {
        match mode {
            FfiZakatMode::Monetary => ZakatMode::Monetary,
            FfiZakatMode::StapleFood => ZakatMode::StapleFood,
        }
    }
}

/// FFI-safe patient record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientRecord {
    pub name: String,
    pub national_id: String,
    pub age: String,
    pub address: String,
    pub gender: FfiGender,
    pub visit_type: FfiVisitType,
    pub visit_timestamp: String,
    pub complaint: String,
}

impl From<PatientRecord> for FfiPatientRecord {
    fn from(record: PatientRecord) -> Self {
        Self {
            name: record.name,
            national_id: record.national_id,
            age: record.age,
            address: record.address,
            gender: record.gender.into(),
            visit_type: record.visit_type.into(),
            visit_timestamp: record.visit_timestamp,
            complaint: record.complaint,
        }
    }
}

/// FFI-safe message templates.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShareTemplates {
    pub monetary: String,
    pub staple_food: String,
}

impl From<FfiShareTemplates> for ShareTemplates {
    fn from(templates: FfiShareTemplates) -> Self {
        ShareTemplates::new(templates.monetary, templates.staple_food)
    }
}
