use crate::infra::{yes_no, CommandContext};
use clap::{Args, Subcommand};
use split_lease::error::AppError;
use split_lease::workflows::proposals::{
    proposal_actions, status_registry, ProposalAction, ProposalActionsView, ProposalAuditEntry,
    ProposalExportAudit, StatusDescriptor,
};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub(crate) enum ProposalCommand {
    /// Evaluate the guest action guards for one proposal status
    Check(CheckArgs),
    /// List every proposal status with its actions
    Statuses,
    /// Evaluate every row of a proposal CSV export
    Audit(AuditArgs),
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Status label as stored on the proposal record
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Treat the proposal as deleted
    #[arg(long)]
    pub(crate) deleted: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AuditArgs {
    /// Proposal export with `Unique ID`, `Status` and `Deleted` columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Only list rows the guest can still act on
    #[arg(long)]
    pub(crate) actionable: bool,
}

pub(crate) fn run(command: ProposalCommand, context: &CommandContext) -> Result<(), AppError> {
    match command {
        ProposalCommand::Check(args) => {
            let view = proposal_actions(args.status.as_deref(), args.deleted);
            context.emit(&view, render_view)
        }
        ProposalCommand::Statuses => {
            let registry = status_registry();
            context.emit(&registry, |registry| render_registry(registry))
        }
        ProposalCommand::Audit(args) => {
            let mut entries = ProposalExportAudit::from_path(&args.csv)?;
            if args.actionable {
                entries.retain(is_actionable);
            }
            context.emit(&entries, |entries| render_audit(entries))
        }
    }
}

fn is_actionable(entry: &ProposalAuditEntry) -> bool {
    let view = &entry.decision;
    view.can_edit || view.can_cancel || view.can_accept
}

fn action_keys(actions: &[ProposalAction]) -> String {
    if actions.is_empty() {
        return "none".to_string();
    }
    actions
        .iter()
        .map(|action| action.key())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_view(view: &ProposalActionsView) -> String {
    let status = match view.status_label {
        Some(label) => label.to_string(),
        None => "unrecognized".to_string(),
    };
    format!(
        "Status:  {status}{}\nEdit:    {}\nCancel:  {}\nAccept:  {}\nActions: {}",
        if view.deleted { " (deleted)" } else { "" },
        yes_no(view.can_edit),
        yes_no(view.can_cancel),
        yes_no(view.can_accept),
        action_keys(&view.actions)
    )
}

fn render_registry(registry: &[StatusDescriptor]) -> String {
    registry
        .iter()
        .map(|descriptor| {
            let order = match descriptor.usual_order {
                Some(order) => format!("{order:>2}"),
                None => " -".to_string(),
            };
            format!(
                "{order}  {}\n    {}",
                descriptor.label,
                action_keys(descriptor.actions)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_audit(entries: &[ProposalAuditEntry]) -> String {
    if entries.is_empty() {
        return "No proposals to report.".to_string();
    }

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("{} proposal(s)", entries.len()));
    for entry in entries {
        let view = &entry.decision;
        let flags: Vec<&str> = [
            (view.can_edit, "edit"),
            (view.can_cancel, "cancel"),
            (view.can_accept, "accept"),
        ]
        .into_iter()
        .filter_map(|(allowed, name)| allowed.then_some(name))
        .collect();

        lines.push(format!(
            "row {:>3}  {:<20} {:<55} {}",
            entry.row,
            entry.proposal_id.as_deref().unwrap_or("-"),
            entry.raw_status.as_deref().unwrap_or("(no status)"),
            if flags.is_empty() {
                "no guest actions".to_string()
            } else {
                flags.join("/")
            }
        ));
    }
    lines.join("\n")
}
