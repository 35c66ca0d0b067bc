use serde::{Deserialize, Serialize};

use super::status::{ProposalAction, ProposalStatus};

/// The two proposal fields the guards read. Everything else about the
/// proposal record belongs to the workflow that stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalState {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl ProposalState {
    pub fn new(status: impl Into<String>, deleted: bool) -> Self {
        Self {
            status: Some(status.into()),
            deleted,
        }
    }

    pub fn can_edit(&self) -> bool {
        can_edit_proposal(self.status.as_deref(), self.deleted)
    }

    pub fn can_cancel(&self) -> bool {
        can_cancel_proposal(self.status.as_deref(), self.deleted)
    }

    pub fn can_accept(&self) -> bool {
        can_accept_proposal(self.status.as_deref(), self.deleted)
    }

    pub fn actions_view(&self) -> ProposalActionsView {
        proposal_actions(self.status.as_deref(), self.deleted)
    }
}

fn recognized_status(status: Option<&str>) -> Option<ProposalStatus> {
    present_status(status).and_then(ProposalStatus::from_label)
}

fn present_status(status: Option<&str>) -> Option<&str> {
    status.map(str::trim).filter(|value| !value.is_empty())
}

/// Whether the guest may accept the host's counteroffer.
pub fn can_accept_proposal(status: Option<&str>, deleted: bool) -> bool {
    if deleted {
        return false;
    }
    recognized_status(status).is_some_and(|status| status.allows(ProposalAction::AcceptCounteroffer))
}

/// Whether the guest may cancel.
///
/// Only terminal and completed statuses block cancellation; an unrecognized
/// status string is cancellable.
pub fn can_cancel_proposal(status: Option<&str>, deleted: bool) -> bool {
    if deleted {
        return false;
    }
    let Some(label) = present_status(status) else {
        return false;
    };

    match ProposalStatus::from_label(label) {
        Some(known) => !(known.is_terminal() || known.is_completed()),
        None => true,
    }
}

/// Whether the guest may still edit the proposal in place.
pub fn can_edit_proposal(status: Option<&str>, deleted: bool) -> bool {
    if deleted {
        return false;
    }
    recognized_status(status)
        .is_some_and(|status| status.actions().iter().any(|action| action.is_edit()))
}

/// All guest action decisions for one proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalActionsView {
    pub status: Option<ProposalStatus>,
    pub status_label: Option<&'static str>,
    pub recognized: bool,
    pub deleted: bool,
    pub can_edit: bool,
    pub can_cancel: bool,
    pub can_accept: bool,
    pub actions: Vec<ProposalAction>,
}

pub fn proposal_actions(status: Option<&str>, deleted: bool) -> ProposalActionsView {
    let known = recognized_status(status);
    let actions = match known {
        Some(known) if !deleted => known.actions().to_vec(),
        _ => Vec::new(),
    };

    ProposalActionsView {
        status: known,
        status_label: known.map(ProposalStatus::label),
        recognized: known.is_some(),
        deleted,
        can_edit: can_edit_proposal(status, deleted),
        can_cancel: can_cancel_proposal(status, deleted),
        can_accept: can_accept_proposal(status, deleted),
        actions,
    }
}
