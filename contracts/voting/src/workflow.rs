//! Election workflow: the single current status and its forward-only
//! transition table.
//!
//! ```text
//! RegisteringVoters ──► ProposalsRegistrationStarted ──► ProposalsRegistrationEnded
//!                                                                │
//!        VotesTallied ◄── VotingSessionEnded ◄── VotingSessionStarted
//! ```

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::errors::ElectionError;

const STATUS: Symbol = symbol_short!("STATUS");

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Administrator-requested phase changes. Each one is legal from exactly one
/// status.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    StartProposalsRegistration,
    EndProposalsRegistration,
    StartVotingSession,
    EndVotingSession,
    TallyVotes,
}

impl Transition {
    pub const ALL: [Transition; 5] = [
        Transition::StartProposalsRegistration,
        Transition::EndProposalsRegistration,
        Transition::StartVotingSession,
        Transition::EndVotingSession,
        Transition::TallyVotes,
    ];

    /// The only status this transition may be taken from.
    pub fn source(&self) -> WorkflowStatus {
        match self {
            Transition::StartProposalsRegistration => WorkflowStatus::RegisteringVoters,
            Transition::EndProposalsRegistration => WorkflowStatus::ProposalsRegistrationStarted,
            Transition::StartVotingSession => WorkflowStatus::ProposalsRegistrationEnded,
            Transition::EndVotingSession => WorkflowStatus::VotingSessionStarted,
            Transition::TallyVotes => WorkflowStatus::VotingSessionEnded,
        }
    }

    pub fn target(&self) -> WorkflowStatus {
        match self {
            Transition::StartProposalsRegistration => WorkflowStatus::ProposalsRegistrationStarted,
            Transition::EndProposalsRegistration => WorkflowStatus::ProposalsRegistrationEnded,
            Transition::StartVotingSession => WorkflowStatus::VotingSessionStarted,
            Transition::EndVotingSession => WorkflowStatus::VotingSessionEnded,
            Transition::TallyVotes => WorkflowStatus::VotesTallied,
        }
    }
}

/// Resolve `transition` against `current`.
///
/// Repeating a transition that already happened fails the same way as
/// skipping ahead: the current status is no longer its source.
pub fn next_status(
    current: WorkflowStatus,
    transition: Transition,
) -> Result<WorkflowStatus, ElectionError> {
    if current != transition.source() {
        return Err(ElectionError::InvalidPhase);
    }
    Ok(transition.target())
}

// ── Storage helpers ──────────────────────────────────────────────────────────

pub(crate) fn load(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&STATUS)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub(crate) fn store(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&STATUS, &status);
}

/// Apply `transition` and persist the new status. Returns `(previous, new)`.
pub(crate) fn advance(
    env: &Env,
    transition: Transition,
) -> Result<(WorkflowStatus, WorkflowStatus), ElectionError> {
    let previous = load(env);
    let next = next_status(previous, transition)?;
    store(env, next);
    Ok((previous, next))
}

/// Fail with `phase_error` unless the election is currently in `expected`.
pub(crate) fn require_status(
    env: &Env,
    expected: WorkflowStatus,
    phase_error: ElectionError,
) -> Result<(), ElectionError> {
    if load(env) != expected {
        return Err(phase_error);
    }
    Ok(())
}
