use std::path::Path;

use super::{InternRecord, Roster, RosterError};

/// Load a roster from a JSON array of intern records.
pub fn load_from_path(path: &Path) -> Result<Roster, RosterError> {
    let bytes = std::fs::read(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<InternRecord> =
        serde_json::from_slice(&bytes).map_err(|source| RosterError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let roster = Roster::new(records)?;
    tracing::info!(
        "Loaded {} interns from {}",
        roster.len(),
        path.display()
    );
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::InternId;
    use tempfile::tempdir;

    const TWO_INTERNS: &str = r#"[
        {
            "id": 10,
            "name": "Riley Ortiz",
            "email": "riley@company.com",
            "department": "Finance",
            "role": "Finance Intern",
            "startDate": "2025-03-01",
            "photo": "",
            "bio": "",
            "mentor": "Pat Doe"
        },
        {
            "id": 11,
            "name": "Sam Lee",
            "email": "sam@company.com",
            "department": "Legal",
            "role": "Legal Intern",
            "startDate": "2025-03-02",
            "photo": "",
            "bio": "",
            "skills": ["Contracts"],
            "projects": [],
            "mentor": "Jo Roe"
        }
    ]"#;

    #[test]
    fn loads_records_in_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, TWO_INTERNS).unwrap();
        let roster = load_from_path(&path).unwrap();
        let ids: Vec<_> = roster.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![InternId(10), InternId(11)]);
        assert!(roster.records()[0].skills.is_empty());
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, "[{\"id\": 1, \"startDate\": \"not a date\"}]").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, RosterError::Parse { .. }));
        assert!(err.to_string().contains("roster.json"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = load_from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, RosterError::Read { .. }));
    }
}
