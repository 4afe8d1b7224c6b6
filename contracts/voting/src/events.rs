//! Structured event publishing for the voting contract.
//!
//! Every successful mutating call after `initialize` emits exactly one
//! event; `initialize` itself emits none. Failed calls emit nothing.

#![allow(deprecated)]

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::workflow::WorkflowStatus;

// ── Event payloads ───────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegisteredEvent {
    pub voter: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkflowStatusChangedEvent {
    pub previous: WorkflowStatus,
    pub new: WorkflowStatus,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRegisteredEvent {
    pub proposal_id: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotedEvent {
    pub voter: Address,
    pub proposal_id: u32,
    pub timestamp: u64,
}

/// Fired when a voter who already voted picks again (possibly the same proposal).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteModifiedEvent {
    pub voter: Address,
    pub old_proposal_id: u32,
    pub new_proposal_id: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumUpdatedEvent {
    pub old_percentage: u32,
    pub new_percentage: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEvent {
    pub previous: Address,
    pub new: Address,
    pub timestamp: u64,
}

// ── Publishers ───────────────────────────────────────────────────────────────

pub fn publish_voter_registered(env: &Env, voter: &Address) {
    env.events().publish(
        (symbol_short!("VOTER_REG"),),
        VoterRegisteredEvent {
            voter: voter.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_status_changed(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events().publish(
        (symbol_short!("WF_STATUS"),),
        WorkflowStatusChangedEvent {
            previous,
            new,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_proposal_registered(env: &Env, proposal_id: u32) {
    env.events().publish(
        (symbol_short!("PROP_REG"), proposal_id),
        ProposalRegisteredEvent {
            proposal_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events().publish(
        (symbol_short!("VOTED"), proposal_id),
        VotedEvent {
            voter: voter.clone(),
            proposal_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_vote_modified(
    env: &Env,
    voter: &Address,
    old_proposal_id: u32,
    new_proposal_id: u32,
) {
    env.events().publish(
        (symbol_short!("VOTE_MOD"), new_proposal_id),
        VoteModifiedEvent {
            voter: voter.clone(),
            old_proposal_id,
            new_proposal_id,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_quorum_updated(env: &Env, old_percentage: u32, new_percentage: u32) {
    env.events().publish(
        (symbol_short!("QUORUM"),),
        QuorumUpdatedEvent {
            old_percentage,
            new_percentage,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transferred(env: &Env, previous: &Address, new: &Address) {
    env.events().publish(
        (symbol_short!("ADMIN_XFR"),),
        AdminTransferredEvent {
            previous: previous.clone(),
            new: new.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}
