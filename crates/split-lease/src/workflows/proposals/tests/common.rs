use crate::workflows::proposals::ProposalStatus;

pub(super) const COUNTEROFFER_LABEL: &str = "Host Counteroffer Submitted / Awaiting Guest Review";

pub(super) fn all_labels() -> Vec<&'static str> {
    ProposalStatus::ordered()
        .into_iter()
        .map(ProposalStatus::label)
        .collect()
}

pub(super) fn unknown_labels() -> Vec<&'static str> {
    vec![
        "Awaiting Host Signature",
        "draft",
        "host review",
        "Host  Review",
        "Proposal Expired",
    ]
}

pub(super) fn export_csv() -> &'static str {
    "Unique ID,Status,Deleted,Created Date\n\
     1695000000000x1, Draft ,no,2025-09-01\n\
     1695000000000x2,Host Counteroffer Submitted / Awaiting Guest Review,,2025-09-02\n\
     1695000000000x3,Proposal Rejected by Host,no,2025-09-03\n\
     1695000000000x4,Host Review,yes,2025-09-04\n\
     ,Awaiting Host Signature,,2025-09-05\n\
     1695000000000x6,,no,2025-09-06\n"
}
