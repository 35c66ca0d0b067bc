//! Proposal status catalogue and the guards deciding which guest actions a
//! proposal currently allows.
//!
//! The guards never fail: a missing, blank, or unknown status resolves to a
//! conservative `false`, except that cancellation stays open for statuses the
//! registry does not know.

pub mod export;
pub mod guards;
pub mod status;

#[cfg(test)]
mod tests;

pub use export::{ProposalAuditEntry, ProposalExportAudit, ProposalExportError};
pub use guards::{
    can_accept_proposal, can_cancel_proposal, can_edit_proposal, proposal_actions,
    ProposalActionsView, ProposalState,
};
pub use status::{status_registry, ProposalAction, ProposalStatus, StatusDescriptor};
