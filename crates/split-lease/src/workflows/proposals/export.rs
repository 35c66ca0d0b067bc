use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::guards::{proposal_actions, ProposalActionsView};

#[derive(Debug)]
pub enum ProposalExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ProposalExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalExportError::Io(err) => write!(f, "failed to read proposal export: {}", err),
            ProposalExportError::Csv(err) => write!(f, "invalid proposal CSV data: {}", err),
        }
    }
}

impl std::error::Error for ProposalExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProposalExportError::Io(err) => Some(err),
            ProposalExportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ProposalExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ProposalExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One exported proposal with the guest actions its status allows.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalAuditEntry {
    pub row: usize,
    pub proposal_id: Option<String>,
    pub raw_status: Option<String>,
    #[serde(flatten)]
    pub decision: ProposalActionsView,
}

/// Evaluates a proposal table export against the lifecycle guards.
pub struct ProposalExportAudit;

impl ProposalExportAudit {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ProposalAuditEntry>, ProposalExportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ProposalAuditEntry>, ProposalExportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        for (index, record) in csv_reader.deserialize::<ProposalRow>().enumerate() {
            let row = record?;
            let deleted = row.is_deleted();
            let decision = proposal_actions(row.status.as_deref(), deleted);
            if !decision.recognized {
                debug!(row = index + 1, status = ?row.status, "unrecognized proposal status");
            }

            entries.push(ProposalAuditEntry {
                row: index + 1,
                proposal_id: row.id,
                raw_status: row.status,
                decision,
            });
        }

        info!(rows = entries.len(), "proposal export audited");
        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct ProposalRow {
    #[serde(
        rename = "Unique ID",
        alias = "_id",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    id: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(rename = "Deleted", default, deserialize_with = "empty_string_as_none")]
    deleted: Option<String>,
}

impl ProposalRow {
    fn is_deleted(&self) -> bool {
        self.deleted.as_deref().is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "yes" | "true" | "1" | "y"
            )
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
