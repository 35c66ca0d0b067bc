use serde::{Deserialize, Serialize};

/// Guest-facing actions a proposal status may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalAction {
    EditProposal,
    SubmitProposal,
    DeleteProposal,
    ModifyProposal,
    CancelProposal,
    SubmitRentalApplication,
    RequestVirtualMeeting,
    ReviewCounteroffer,
    AcceptCounteroffer,
    ReviewDocuments,
    SignLease,
    SubmitInitialPayment,
    GoToLeases,
}

impl ProposalAction {
    pub const fn key(self) -> &'static str {
        match self {
            Self::EditProposal => "edit_proposal",
            Self::SubmitProposal => "submit_proposal",
            Self::DeleteProposal => "delete_proposal",
            Self::ModifyProposal => "modify_proposal",
            Self::CancelProposal => "cancel_proposal",
            Self::SubmitRentalApplication => "submit_rental_application",
            Self::RequestVirtualMeeting => "request_virtual_meeting",
            Self::ReviewCounteroffer => "review_counteroffer",
            Self::AcceptCounteroffer => "accept_counteroffer",
            Self::ReviewDocuments => "review_documents",
            Self::SignLease => "sign_lease",
            Self::SubmitInitialPayment => "submit_initial_payment",
            Self::GoToLeases => "go_to_leases",
        }
    }

    /// Edits rewrite the proposal itself. Modifications after submission go
    /// through a change request and are not edits.
    pub const fn is_edit(self) -> bool {
        matches!(self, Self::EditProposal)
    }
}

/// Every status a proposal can hold, from draft to activated lease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Draft,
    Pending,
    AwaitingRentalApplication,
    RentalApplicationSubmitted,
    HostReview,
    HostCounterofferAwaitingGuestReview,
    AcceptedDraftingLeaseDocuments,
    LeaseDocumentsSentForReview,
    LeaseDocumentsSentForSignatures,
    LeaseDocumentsSignedAwaitingPayment,
    LeaseActivated,
    CancelledByGuest,
    CancelledBySplitLease,
    RejectedByHost,
}

impl ProposalStatus {
    pub const fn ordered() -> [Self; 14] {
        [
            Self::Draft,
            Self::Pending,
            Self::AwaitingRentalApplication,
            Self::RentalApplicationSubmitted,
            Self::HostReview,
            Self::HostCounterofferAwaitingGuestReview,
            Self::AcceptedDraftingLeaseDocuments,
            Self::LeaseDocumentsSentForReview,
            Self::LeaseDocumentsSentForSignatures,
            Self::LeaseDocumentsSignedAwaitingPayment,
            Self::LeaseActivated,
            Self::CancelledByGuest,
            Self::CancelledBySplitLease,
            Self::RejectedByHost,
        ]
    }

    /// The status text as stored on proposal records.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::AwaitingRentalApplication => {
                "Proposal Submitted by guest - Awaiting Rental Application"
            }
            Self::RentalApplicationSubmitted => "Rental Application Submitted",
            Self::HostReview => "Host Review",
            Self::HostCounterofferAwaitingGuestReview => {
                "Host Counteroffer Submitted / Awaiting Guest Review"
            }
            Self::AcceptedDraftingLeaseDocuments => {
                "Proposal or Counteroffer Accepted / Drafting Lease Documents"
            }
            Self::LeaseDocumentsSentForReview => "Lease Documents Sent for Review",
            Self::LeaseDocumentsSentForSignatures => "Lease Documents Sent for Signatures",
            Self::LeaseDocumentsSignedAwaitingPayment => {
                "Lease Documents Signed / Awaiting Initial Payment"
            }
            Self::LeaseActivated => "Initial Payment Submitted / Lease activated",
            Self::CancelledByGuest => "Proposal Cancelled by Guest",
            Self::CancelledBySplitLease => "Proposal Cancelled by Split Lease",
            Self::RejectedByHost => "Proposal Rejected by Host",
        }
    }

    pub const fn actions(self) -> &'static [ProposalAction] {
        use ProposalAction::*;

        match self {
            Self::Draft => &[EditProposal, SubmitProposal, DeleteProposal],
            Self::Pending => &[ModifyProposal, CancelProposal],
            Self::AwaitingRentalApplication => {
                &[SubmitRentalApplication, ModifyProposal, CancelProposal]
            }
            Self::RentalApplicationSubmitted => &[ModifyProposal, CancelProposal],
            Self::HostReview => &[ModifyProposal, RequestVirtualMeeting, CancelProposal],
            Self::HostCounterofferAwaitingGuestReview => {
                &[ReviewCounteroffer, AcceptCounteroffer, CancelProposal]
            }
            Self::AcceptedDraftingLeaseDocuments => &[RequestVirtualMeeting, CancelProposal],
            Self::LeaseDocumentsSentForReview => &[ReviewDocuments, CancelProposal],
            Self::LeaseDocumentsSentForSignatures => &[SignLease, CancelProposal],
            Self::LeaseDocumentsSignedAwaitingPayment => &[SubmitInitialPayment, CancelProposal],
            Self::LeaseActivated => &[GoToLeases],
            Self::CancelledByGuest | Self::CancelledBySplitLease | Self::RejectedByHost => {
                &[DeleteProposal]
            }
        }
    }

    pub fn allows(self, action: ProposalAction) -> bool {
        self.actions().contains(&action)
    }

    /// Cancelled or rejected outcomes.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::CancelledByGuest | Self::CancelledBySplitLease | Self::RejectedByHost
        )
    }

    /// The lease is active.
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::LeaseActivated)
    }

    /// Position in the usual progression; terminal statuses sit outside it.
    pub const fn usual_order(self) -> Option<u8> {
        match self {
            Self::Draft => Some(0),
            Self::Pending => Some(1),
            Self::AwaitingRentalApplication => Some(2),
            Self::RentalApplicationSubmitted => Some(3),
            Self::HostReview => Some(4),
            Self::HostCounterofferAwaitingGuestReview => Some(5),
            Self::AcceptedDraftingLeaseDocuments => Some(6),
            Self::LeaseDocumentsSentForReview => Some(7),
            Self::LeaseDocumentsSentForSignatures => Some(8),
            Self::LeaseDocumentsSignedAwaitingPayment => Some(9),
            Self::LeaseActivated => Some(10),
            Self::CancelledByGuest | Self::CancelledBySplitLease | Self::RejectedByHost => None,
        }
    }

    /// Look up a status by its stored label. Surrounding whitespace is
    /// ignored; case and inner spacing must match exactly.
    pub fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.label() == trimmed)
    }

    pub fn descriptor(self) -> StatusDescriptor {
        StatusDescriptor {
            status: self,
            label: self.label(),
            actions: self.actions(),
            terminal: self.is_terminal(),
            completed: self.is_completed(),
            usual_order: self.usual_order(),
        }
    }
}

/// Serializable registry row for listings and audits.
#[derive(Debug, Clone, Serialize)]
pub struct StatusDescriptor {
    pub status: ProposalStatus,
    pub label: &'static str,
    pub actions: &'static [ProposalAction],
    pub terminal: bool,
    pub completed: bool,
    pub usual_order: Option<u8>,
}

/// The full status catalogue in usual order, terminal statuses last.
pub fn status_registry() -> Vec<StatusDescriptor> {
    ProposalStatus::ordered()
        .into_iter()
        .map(ProposalStatus::descriptor)
        .collect()
}
