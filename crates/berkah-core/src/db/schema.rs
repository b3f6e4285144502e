//! SQLite schema definition.

/// Complete database schema for the patient store.
pub const SCHEMA: &str = r#"
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients
-- ============================================================================

-- One row per submitted intake form. The id is the only generated key;
-- visit_timestamp is stamped by the record builder, never by the caller.
CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    national_id TEXT NOT NULL,
    age TEXT NOT NULL,
    address TEXT NOT NULL,
    gender TEXT NOT NULL CHECK (gender IN ('male', 'female')),
    visit_type TEXT NOT NULL CHECK (visit_type IN ('general', 'insurance')),
    visit_timestamp TEXT NOT NULL,
    complaint TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_patients_visit_timestamp ON patients(visit_timestamp);
"#;
