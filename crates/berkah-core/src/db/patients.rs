//! Patient database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::{Gender, PatientRecord, VisitType};

impl Database {
    /// Insert a new patient record, returning the generated row id.
    pub fn insert_patient(&self, record: &PatientRecord) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO patients (
                name, national_id, age, address, gender,
                visit_type, visit_timestamp, complaint
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                record.name,
                record.national_id,
                record.age,
                record.address,
                gender_to_string(record.gender),
                visit_type_to_string(record.visit_type),
                record.visit_timestamp,
                record.complaint,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a patient record by row id.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<PatientRecord>> {
        self.conn
            .query_row(
                r#"
                SELECT name, national_id, age, address, gender,
                       visit_type, visit_timestamp, complaint
                FROM patients
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(PatientRow {
                        name: row.get(0)?,
                        national_id: row.get(1)?,
                        age: row.get(2)?,
                        address: row.get(3)?,
                        gender: row.get(4)?,
                        visit_type: row.get(5)?,
                        visit_timestamp: row.get(6)?,
                        complaint: row.get(7)?,
                    })
                },
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// Count stored patient records.
    pub fn count_patients(&self) -> DbResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))
            .map_err(Into::into)
    }
}

/// Raw row as read from SQLite, before enum decoding.
struct PatientRow {
    name: String,
    national_id: String,
    age: String,
    address: String,
    gender: String,
    visit_type: String,
    visit_timestamp: String,
    complaint: String,
}

impl TryFrom<PatientRow> for PatientRecord {
    type Error = DbError;

    fn try_from(row: PatientRow) -> DbResult<Self> {
        Ok(PatientRecord {
            name: row.name,
            national_id: row.national_id,
            age: row.age,
            address: row.address,
            gender: gender_from_string(&row.gender)?,
            visit_type: visit_type_from_string(&row.visit_type)?,
            visit_timestamp: row.visit_timestamp,
            complaint: row.complaint,
        })
    }
}

fn gender_to_string(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "male",
        Gender::Female => "female",
    }
}

fn gender_from_string(s: &str) -> DbResult<Gender> {
    match s {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        other => Err(DbError::Constraint(format!("unknown gender: {}", other))),
    }
}

fn visit_type_to_string(visit_type: VisitType) -> &'static str {
    match visit_type {
        VisitType::General => "general",
        VisitType::Insurance => "insurance",
    }
}

fn visit_type_from_string(s: &str) -> DbResult<VisitType> {
    match s {
        "general" => Ok(VisitType::General),
        "insurance" => Ok(VisitType::Insurance),
        other => Err(DbError::Constraint(format!("unknown visit type: {}", other))),
    }
}
