//! Preservation Hub page: artifact registry and heritage-site monitoring.

use serde::{Deserialize, Serialize};

use vividha::{
    ArtifactSubmission, DataSource, DataTable, Dataset, Registry, Result, Session,
};

#[derive(Debug, Serialize)]
pub struct PreservationView {
    /// Submissions made during this session, oldest first.
    pub session_log: Vec<ArtifactSubmission>,
    /// All persisted submissions.
    pub registry: TablePayload,
    /// Monitored heritage sites, when the dataset is present.
    pub heritage_sites: Option<TablePayload>,
    /// Inline notice shown when heritage data is unavailable.
    pub heritage_notice: Option<String>,
}

/// A table flattened for the client.
#[derive(Debug, Serialize)]
pub struct TablePayload {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl From<DataTable> for TablePayload {
    fn from(table: DataTable) -> Self {
        Self {
            headers: table.headers,
            rows: table.rows,
        }
    }
}

/// The artifact documentation form.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionForm {
    pub name: String,
    pub location: String,
    pub description: String,
}

impl SubmissionForm {
    /// All three fields are required, as on the submission form.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (field, value) in [
            ("name", &self.name),
            ("location", &self.location),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} is required", field));
            }
        }
        Ok(())
    }
}

/// Build the preservation view.
///
/// A missing heritage dataset is an inline notice, not a failure; the
/// registry reads as empty until the first submission.
pub fn build(
    source: &dyn DataSource,
    registry: &Registry,
    session: &Session,
) -> Result<PreservationView> {
    let registry_table = registry.load()?;

    let (heritage_sites, heritage_notice) = match source.load(Dataset::HeritageSites) {
        Ok((table, _)) => (Some(table.into()), None),
        Err(e) => (
            None,
            Some(format!("Heritage sites data not available: {}", e)),
        ),
    };

    Ok(PreservationView {
        session_log: session.artifact_log().to_vec(),
        registry: registry_table.into(),
        heritage_sites,
        heritage_notice,
    })
}

/// Record a submission: logged in the session, then appended to the
/// registry. The session copy survives a registry write failure, so a
/// failed append loses nothing from the current session.
pub fn submit(
    registry: &Registry,
    session: &mut Session,
    form: SubmissionForm,
) -> Result<ArtifactSubmission> {
    let submission = ArtifactSubmission::new(form.name, form.location, form.description);
    session.log_artifact(submission.clone());
    registry.append(&submission)?;
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vividha::LocalFiles;

    #[test]
    fn test_submit_appends_and_logs() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::new(Dataset::ArtifactRegistry.path(dir.path()));
        let mut session = Session::new();

        let form = SubmissionForm {
            name: "Pot A".into(),
            location: "Bihar".into(),
            description: "Clay pot".into(),
        };
        form.validate().unwrap();
        submit(&registry, &mut session, form).unwrap();

        assert_eq!(session.artifact_log().len(), 1);
        assert_eq!(registry.load().unwrap().row_count(), 1);
    }

    #[test]
    fn test_failed_append_keeps_session_copy() {
        let registry = Registry::new("no/such/directory/artifact_registry.csv");
        let mut session = Session::new();

        let form = SubmissionForm {
            name: "Pot A".into(),
            location: "Bihar".into(),
            description: "Clay pot".into(),
        };
        let result = submit(&registry, &mut session, form);

        assert!(result.is_err());
        assert_eq!(session.artifact_log().len(), 1);
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let form = SubmissionForm {
            name: "Pot A".into(),
            location: "  ".into(),
            description: "Clay pot".into(),
        };
        assert_eq!(form.validate().unwrap_err(), "location is required");
    }

    #[test]
    fn test_missing_heritage_data_is_a_notice() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalFiles::new(dir.path());
        let registry = Registry::new(Dataset::ArtifactRegistry.path(dir.path()));
        let session = Session::new();

        let view = build(&source, &registry, &session).unwrap();
        assert!(view.heritage_sites.is_none());
        assert!(view.heritage_notice.is_some());
        assert_eq!(view.registry.rows.len(), 0);
    }

    #[test]
    fn test_heritage_table_flows_through() {
        let dir = tempfile::tempdir().unwrap();
        let mut file =
            std::fs::File::create(Dataset::HeritageSites.path(dir.path())).unwrap();
        write!(
            file,
            "site,region,status,threat_level,notes\n\
             Nalanda Ruins,Bihar,Stable,Low,UNESCO site\n"
        )
        .unwrap();

        let source = LocalFiles::new(dir.path());
        let registry = Registry::new(Dataset::ArtifactRegistry.path(dir.path()));
        let session = Session::new();

        let view = build(&source, &registry, &session).unwrap();
        let sites = view.heritage_sites.unwrap();
        assert_eq!(sites.rows.len(), 1);
        assert_eq!(sites.headers[0], "site");
    }
}
