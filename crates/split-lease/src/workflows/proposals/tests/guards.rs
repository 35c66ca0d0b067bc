use super::common::*;
use crate::workflows::proposals::{
    can_accept_proposal, can_cancel_proposal, can_edit_proposal, proposal_actions,
    ProposalAction, ProposalState, ProposalStatus,
};

#[test]
fn accept_is_true_for_exactly_one_status() {
    let accepted: Vec<_> = all_labels()
        .into_iter()
        .filter(|label| can_accept_proposal(Some(*label), false))
        .collect();
    assert_eq!(accepted, vec![COUNTEROFFER_LABEL]);
}

#[test]
fn accept_requires_exact_label() {
    assert!(can_accept_proposal(
        Some("  Host Counteroffer Submitted / Awaiting Guest Review "),
        false
    ));
    assert!(!can_accept_proposal(
        Some("host counteroffer submitted / awaiting guest review"),
        false
    ));
    assert!(!can_accept_proposal(
        Some("Host Counteroffer Submitted /  Awaiting Guest Review"),
        false
    ));
    assert!(!can_accept_proposal(None, false));
    assert!(!can_accept_proposal(Some("   "), false));
}

#[test]
fn edit_is_true_only_for_draft() {
    let editable: Vec<_> = all_labels()
        .into_iter()
        .filter(|label| can_edit_proposal(Some(*label), false))
        .collect();
    assert_eq!(editable, vec!["Draft"]);
    assert!(!can_edit_proposal(Some("draft"), false));
    assert!(!can_edit_proposal(None, false));
}

#[test]
fn deleted_proposals_allow_nothing() {
    for label in all_labels().into_iter().chain(unknown_labels()) {
        assert!(!can_accept_proposal(Some(label), true), "{label}");
        assert!(!can_edit_proposal(Some(label), true), "{label}");
        assert!(!can_cancel_proposal(Some(label), true), "{label}");
    }
}

#[test]
fn cancel_blocked_only_for_terminal_or_completed() {
    for status in ProposalStatus::ordered() {
        let expected = !(status.is_terminal() || status.is_completed());
        assert_eq!(
            can_cancel_proposal(Some(status.label()), false),
            expected,
            "{}",
            status.label()
        );
    }
}

#[test]
fn unknown_statuses_stay_cancellable() {
    for label in unknown_labels() {
        assert!(can_cancel_proposal(Some(label), false), "{label}");
        assert!(!can_accept_proposal(Some(label), false), "{label}");
        assert!(!can_edit_proposal(Some(label), false), "{label}");
    }
}

#[test]
fn missing_status_is_not_cancellable() {
    assert!(!can_cancel_proposal(None, false));
    assert!(!can_cancel_proposal(Some(""), false));
    assert!(!can_cancel_proposal(Some(" \t "), false));
}

#[test]
fn actions_view_combines_guards() {
    let view = proposal_actions(Some(COUNTEROFFER_LABEL), false);
    assert_eq!(
        view.status,
        Some(ProposalStatus::HostCounterofferAwaitingGuestReview)
    );
    assert!(view.recognized);
    assert!(view.can_accept);
    assert!(view.can_cancel);
    assert!(!view.can_edit);
    assert!(view.actions.contains(&ProposalAction::ReviewCounteroffer));

    let deleted = proposal_actions(Some("Draft"), true);
    assert!(deleted.recognized);
    assert!(deleted.actions.is_empty());
    assert!(!deleted.can_edit);

    let unknown = proposal_actions(Some("Awaiting Host Signature"), false);
    assert!(!unknown.recognized);
    assert_eq!(unknown.status_label, None);
    assert!(unknown.can_cancel);
}

#[test]
fn proposal_state_deserializes_with_defaults() {
    let state: ProposalState =
        serde_json::from_str(r#"{"status":"Draft"}"#).expect("valid json");
    assert!(!state.deleted);
    assert!(state.can_edit());
    assert!(state.can_cancel());
    assert!(!state.can_accept());

    let empty: ProposalState = serde_json::from_str("{}").expect("valid json");
    assert_eq!(empty, ProposalState::default());
    assert!(!empty.can_cancel());

    let removed = ProposalState::new("Pending", true);
    assert!(!removed.actions_view().can_cancel);
}
